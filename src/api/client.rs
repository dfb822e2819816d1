use crate::error::AppError;
use std::thread;
use std::time::Duration;
use tracing::{debug, warn};

use super::catalog::ChampionCatalog;
use super::endpoints::champion_data_url;
use super::models::DataDragonChampions;

const MAX_RETRIES: u32 = 3;

pub struct DataDragonClient {
    version: String,
    lang: String,
}

impl DataDragonClient {
    pub fn new(version: &str, lang: &str) -> Self {
        DataDragonClient {
            version: version.to_string(),
            lang: lang.to_string(),
        }
    }

    fn execute_request(&self, url: &str) -> Result<String, AppError> {
        let mut retry_count = 0;

        loop {
            let response = ureq::get(url)
                .set("User-Agent", concat!("league_tracker/", env!("CARGO_PKG_VERSION")))
                .call();

            match response {
                Ok(resp) => {
                    return resp
                        .into_string()
                        .map_err(|e| AppError::HttpError(e.to_string()));
                }
                Err(ureq::Error::Status(429, _)) => {
                    if retry_count >= MAX_RETRIES {
                        return Err(AppError::RateLimited);
                    }
                    let wait_ms = 2000 * u64::from(retry_count + 1);
                    warn!(wait_ms, "Rate limited by Data Dragon, retrying");
                    thread::sleep(Duration::from_millis(wait_ms));
                    retry_count += 1;
                }
                Err(e) => {
                    return Err(AppError::HttpError(e.to_string()));
                }
            }
        }
    }

    pub fn get_champion_data(&self) -> Result<DataDragonChampions, AppError> {
        let url = champion_data_url(&self.version, &self.lang);
        debug!(%url, "Fetching champion catalog");

        let body = self.execute_request(&url)?;
        serde_json::from_str(&body).map_err(|e| AppError::JsonError(e.to_string()))
    }

    pub fn get_catalog(&self) -> Result<ChampionCatalog, AppError> {
        let data = self.get_champion_data()?;
        Ok(ChampionCatalog::new(data, &self.version))
    }
}
