use crate::error::AppError;
use std::env;
use std::path::PathBuf;

const DEFAULT_USER: &str = "Player 1";
const DEFAULT_DDRAGON_VERSION: &str = "14.4.1";
const DEFAULT_DDRAGON_LANG: &str = "en_US";

#[derive(Debug, Clone)]
pub struct Config {
    pub user: String,
    pub data_dir: PathBuf,
    pub ddragon_version: String,
    pub ddragon_lang: String,
    pub validate_champions: bool,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();

        let user = env::var("TRACKER_USER").unwrap_or_else(|_| DEFAULT_USER.to_string());
        let data_dir = env::var("TRACKER_DATA_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| default_data_dir());
        let ddragon_version =
            env::var("DDRAGON_VERSION").unwrap_or_else(|_| DEFAULT_DDRAGON_VERSION.to_string());
        let ddragon_lang =
            env::var("DDRAGON_LANG").unwrap_or_else(|_| DEFAULT_DDRAGON_LANG.to_string());
        let validate_champions = env::var("TRACKER_VALIDATE_CHAMPIONS")
            .map(|v| matches!(v.trim(), "1" | "true" | "TRUE" | "yes"))
            .unwrap_or(false);

        Config {
            user,
            data_dir,
            ddragon_version,
            ddragon_lang,
            validate_champions,
        }
        .validated()
    }

    /// Apply command-line overrides on top of the environment.
    pub fn with_overrides(
        mut self,
        user: Option<String>,
        data_dir: Option<PathBuf>,
    ) -> Result<Self, AppError> {
        if let Some(user) = user {
            self.user = user;
        }
        if let Some(dir) = data_dir {
            self.data_dir = dir;
        }
        self.validated()
    }

    fn validated(self) -> Result<Self, AppError> {
        if self.user.trim().is_empty() {
            return Err(AppError::ConfigError(
                "player name must not be empty".to_string(),
            ));
        }
        Ok(self)
    }
}

fn default_data_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".league_tracker")
}
