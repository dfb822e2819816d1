use serde::Deserialize;
use std::collections::HashMap;

// Data Dragon champion.json
#[derive(Debug, Deserialize)]
pub struct DataDragonChampions {
    #[serde(default)]
    pub version: String,
    pub data: HashMap<String, ChampionInfo>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ChampionInfo {
    pub id: String,
    pub name: String,
}
