use chrono::Utc;
use serde_json::Value;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::error::AppError;
use crate::model::MatchRecord;

const FILE_PREFIX: &str = "games_";

/// Where per-player histories live.
pub trait MatchRepository {
    fn load(&self, user: &str) -> Result<Vec<MatchRecord>, AppError>;
    fn save(&self, user: &str, records: &[MatchRecord]) -> Result<(), AppError>;
}

/// One pretty-printed JSON array per player inside `dir`.
#[derive(Debug, Clone)]
pub struct JsonFileRepository {
    dir: PathBuf,
}

impl JsonFileRepository {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        JsonFileRepository { dir: dir.into() }
    }

    pub fn get_history_path(&self, user: &str) -> PathBuf {
        self.dir
            .join(format!("{}{}.json", FILE_PREFIX, file_safe(user)))
    }

    /// The name `user` is stored and listed under.
    pub fn user_key(user: &str) -> String {
        file_safe(user)
    }

    /// Players with a saved history, sorted by name.
    pub fn users(&self) -> Result<Vec<String>, AppError> {
        let entries = match fs::read_dir(&self.dir) {
            Ok(entries) => entries,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };

        let mut users = Vec::new();
        for entry in entries {
            let name = entry?.file_name().to_string_lossy().into_owned();
            if let Some(user) = name
                .strip_prefix(FILE_PREFIX)
                .and_then(|rest| rest.strip_suffix(".json"))
            {
                users.push(user.to_string());
            }
        }
        users.sort();
        Ok(users)
    }
}

impl MatchRepository for JsonFileRepository {
    fn load(&self, user: &str) -> Result<Vec<MatchRecord>, AppError> {
        let path = self.get_history_path(user);

        match fs::read_to_string(&path) {
            Ok(content) => {
                let records: Vec<MatchRecord> = serde_json::from_str(&content).map_err(|e| {
                    AppError::JsonError(format!("Failed to parse {}: {}", path.display(), e))
                })?;
                debug!(user, games = records.len(), "Loaded history");
                Ok(records)
            }
            // No history yet
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(Vec::new()),
            Err(e) => Err(e.into()),
        }
    }

    fn save(&self, user: &str, records: &[MatchRecord]) -> Result<(), AppError> {
        fs::create_dir_all(&self.dir)?;
        let path = self.get_history_path(user);
        let json = serde_json::to_string_pretty(records)
            .map_err(|e| AppError::JsonError(format!("Failed to serialize history: {}", e)))?;

        fs::write(&path, json)?;
        debug!(user, games = records.len(), path = %path.display(), "Saved history");
        Ok(())
    }
}

/// A player's ordered history, oldest first, with the edit operations the
/// CLI offers. Positions are zero-based.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MatchHistory {
    records: Vec<MatchRecord>,
}

impl MatchHistory {
    pub fn new(records: Vec<MatchRecord>) -> Self {
        MatchHistory { records }
    }

    pub fn records(&self) -> &[MatchRecord] {
        &self.records
    }

    pub fn into_records(self) -> Vec<MatchRecord> {
        self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Append a new game stamped with a fresh id. Returns the id.
    pub fn add(&mut self, record: MatchRecord) -> Result<i64, AppError> {
        self.add_at(record, Utc::now().timestamp_millis())
    }

    pub fn add_at(&mut self, mut record: MatchRecord, now_ms: i64) -> Result<i64, AppError> {
        validate(&record)?;
        let id = self.next_id(now_ms);
        record.id = Some(id);
        self.records.push(record);
        Ok(id)
    }

    /// Overwrite the game at `index`, keeping its id.
    pub fn replace(&mut self, index: usize, mut record: MatchRecord) -> Result<(), AppError> {
        validate(&record)?;
        let fresh_id = self.next_id(Utc::now().timestamp_millis());
        let slot = self
            .records
            .get_mut(index)
            .ok_or(AppError::RecordNotFound(index + 1))?;
        record.id = Some(slot.id.unwrap_or(fresh_id));
        *slot = record;
        Ok(())
    }

    pub fn remove(&mut self, index: usize) -> Result<MatchRecord, AppError> {
        if index >= self.records.len() {
            return Err(AppError::RecordNotFound(index + 1));
        }
        Ok(self.records.remove(index))
    }

    pub fn get(&self, index: usize) -> Option<&MatchRecord> {
        self.records.get(index)
    }

    /// Ids grow with every insert even when the clock does not.
    fn next_id(&self, now_ms: i64) -> i64 {
        match self.records.iter().filter_map(|r| r.id).max() {
            Some(last) => now_ms.max(last + 1),
            None => now_ms,
        }
    }
}

/// A submitted game needs champion, opponent, lane and result.
pub fn validate(record: &MatchRecord) -> Result<(), AppError> {
    let mut missing = Vec::new();
    if record.champion.trim().is_empty() {
        missing.push("champion");
    }
    if record.opponent.trim().is_empty() {
        missing.push("opponent");
    }
    if record.lane.is_none() {
        missing.push("lane");
    }
    if record.result.is_none() {
        missing.push("result");
    }

    if missing.is_empty() {
        Ok(())
    } else {
        Err(AppError::InvalidRecord(format!("missing {}", missing.join(", "))))
    }
}

/// Read an exported history. The document must be a JSON array; the games
/// inside it are coerced leniently.
pub fn import_file(path: &Path) -> Result<Vec<MatchRecord>, AppError> {
    let content = fs::read_to_string(path)?;
    let document: Value = serde_json::from_str(&content)
        .map_err(|e| AppError::Import(format!("{} is not valid JSON: {}", path.display(), e)))?;

    if !document.is_array() {
        return Err(AppError::Import(format!(
            "{} does not contain a list of games",
            path.display()
        )));
    }

    let records: Vec<MatchRecord> = serde_json::from_value(document)
        .map_err(|e| AppError::Import(format!("malformed game in {}: {}", path.display(), e)))?;
    debug!(games = records.len(), path = %path.display(), "Imported history");
    Ok(records)
}

pub fn export_file(path: &Path, records: &[MatchRecord]) -> Result<(), AppError> {
    let json = serde_json::to_string_pretty(records)
        .map_err(|e| AppError::JsonError(format!("Failed to serialize history: {}", e)))?;
    fs::write(path, json)?;
    Ok(())
}

fn file_safe(user: &str) -> String {
    user.chars()
        .map(|c| {
            if c.is_alphanumeric() || c == '-' || c == '_' || c == ' ' {
                c
            } else {
                '_'
            }
        })
        .collect()
}
