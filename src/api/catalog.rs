use crate::error::AppError;

use super::endpoints::champion_image_url;
use super::models::{ChampionInfo, DataDragonChampions};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChampionRef {
    pub id: String,
    pub display_name: String,
    pub image_url: String,
}

#[derive(Debug, Clone)]
pub struct ChampionCatalog {
    version: String,
    champions: Vec<ChampionInfo>,
}

impl ChampionCatalog {
    /// `fallback_version` is used when the payload does not name its patch.
    pub fn new(data: DataDragonChampions, fallback_version: &str) -> Self {
        let version = if data.version.is_empty() {
            fallback_version.to_string()
        } else {
            data.version
        };
        let mut champions: Vec<ChampionInfo> = data.data.into_values().collect();
        champions.sort_by(|a, b| a.id.cmp(&b.id));

        ChampionCatalog { version, champions }
    }

    pub fn from_json(body: &str, fallback_version: &str) -> Result<Self, AppError> {
        let data: DataDragonChampions =
            serde_json::from_str(body).map_err(|e| AppError::JsonError(e.to_string()))?;
        Ok(Self::new(data, fallback_version))
    }

    /// Look a champion up by catalog id or display name, ignoring case.
    pub fn resolve(&self, name: &str) -> Option<ChampionRef> {
        let name = name.trim();
        self.champions
            .iter()
            .find(|c| c.id.eq_ignore_ascii_case(name) || c.name.to_lowercase() == name.to_lowercase())
            .map(|c| ChampionRef {
                id: c.id.clone(),
                display_name: c.name.clone(),
                image_url: champion_image_url(&self.version, &c.id),
            })
    }

    pub fn len(&self) -> usize {
        self.champions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.champions.is_empty()
    }
}
