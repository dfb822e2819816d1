use crate::model::{GameResult, Lane, MatchRecord};

/// Table filters. Unset fields match everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordFilter {
    pub lane: Option<Lane>,
    /// Case-insensitive substring of the champion name.
    pub champion: Option<String>,
    pub result: Option<GameResult>,
}

impl RecordFilter {
    pub fn is_empty(&self) -> bool {
        self.lane.is_none()
            && self.champion.as_deref().map_or(true, str::is_empty)
            && self.result.is_none()
    }

    pub fn matches(&self, record: &MatchRecord) -> bool {
        if self.lane.is_some() && record.lane != self.lane {
            return false;
        }
        if self.result.is_some() && record.result != self.result {
            return false;
        }
        match self.champion.as_deref() {
            Some(needle) if !needle.is_empty() => record
                .champion
                .to_lowercase()
                .contains(&needle.to_lowercase()),
            _ => true,
        }
    }

    /// Matching records in their original order.
    pub fn apply(&self, records: &[MatchRecord]) -> Vec<MatchRecord> {
        records.iter().filter(|r| self.matches(r)).cloned().collect()
    }
}
