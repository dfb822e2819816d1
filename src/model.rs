use chrono::{Local, NaiveDate, TimeZone};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
pub enum Lane {
    Top,
    #[serde(alias = "Jungla")]
    Jungle,
    Mid,
    #[serde(rename = "ADC")]
    Adc,
    #[serde(alias = "Soporte")]
    Support,
}

impl Lane {
    /// Accepts the stored label as well as the legacy Spanish ones.
    pub fn from_label(label: &str) -> Option<Self> {
        match label.trim() {
            "Top" => Some(Lane::Top),
            "Jungle" | "Jungla" => Some(Lane::Jungle),
            "Mid" => Some(Lane::Mid),
            "ADC" => Some(Lane::Adc),
            "Support" | "Soporte" => Some(Lane::Support),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Lane::Top => "Top",
            Lane::Jungle => "Jungle",
            Lane::Mid => "Mid",
            Lane::Adc => "ADC",
            Lane::Support => "Support",
        }
    }
}

impl fmt::Display for Lane {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Match outcome. Each value says both who won and how decisively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
pub enum GameResult {
    #[serde(rename = "gane_paliza")]
    WonDecisively,
    #[serde(rename = "gane_mal")]
    WonNarrowly,
    #[serde(rename = "perdi_bien")]
    LostClose,
    #[serde(rename = "perdi_paliza")]
    LostDecisively,
}

impl GameResult {
    pub const ALL: [GameResult; 4] = [
        GameResult::WonDecisively,
        GameResult::WonNarrowly,
        GameResult::LostClose,
        GameResult::LostDecisively,
    ];

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|r| r.code() == code)
    }

    /// Storage code, compatible with exported documents.
    pub fn code(&self) -> &'static str {
        match self {
            GameResult::WonDecisively => "gane_paliza",
            GameResult::WonNarrowly => "gane_mal",
            GameResult::LostClose => "perdi_bien",
            GameResult::LostDecisively => "perdi_paliza",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            GameResult::WonDecisively => "Stomped",
            GameResult::WonNarrowly => "Scraped a win",
            GameResult::LostClose => "Lost playing well",
            GameResult::LostDecisively => "Got stomped",
        }
    }

    pub fn is_win(&self) -> bool {
        matches!(self, GameResult::WonDecisively | GameResult::WonNarrowly)
    }

    pub fn is_loss(&self) -> bool {
        !self.is_win()
    }
}

impl fmt::Display for GameResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One logged game.
///
/// Every field deserializes leniently: imported documents are user-edited,
/// so malformed numbers become 0 and unknown codes become `None` instead of
/// failing the whole import.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchRecord {
    /// Creation time in epoch milliseconds.
    #[serde(default, deserialize_with = "lenient::timestamp", skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub champion: String,
    #[serde(default, deserialize_with = "lenient::lane")]
    pub lane: Option<Lane>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub opponent: String,
    #[serde(default, deserialize_with = "lenient::result")]
    pub result: Option<GameResult>,
    #[serde(default, deserialize_with = "lenient::count")]
    pub kills: u32,
    #[serde(default, deserialize_with = "lenient::count")]
    pub deaths: u32,
    #[serde(default, deserialize_with = "lenient::count")]
    pub assists: u32,
    #[serde(default, deserialize_with = "lenient::count")]
    pub cs: u32,
    #[serde(default, deserialize_with = "lenient::text")]
    pub duration: String,
    #[serde(default, deserialize_with = "lenient::optional_text", skip_serializing_if = "Option::is_none")]
    pub matchup_tip: Option<String>,
    #[serde(default, deserialize_with = "lenient::optional_text", skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    #[serde(default, deserialize_with = "lenient::flag")]
    pub is_ranked: bool,
    #[serde(default, deserialize_with = "lenient::signed")]
    pub lp_change: i32,
}

impl MatchRecord {
    pub fn is_win(&self) -> bool {
        self.result.is_some_and(|r| r.is_win())
    }

    pub fn is_loss(&self) -> bool {
        self.result.is_some_and(|r| r.is_loss())
    }

    /// Local calendar day the record was created on, if its id is a usable timestamp.
    pub fn played_on(&self) -> Option<NaiveDate> {
        let millis = self.id?;
        Local
            .timestamp_millis_opt(millis)
            .single()
            .map(|created| created.date_naive())
    }

    pub fn kda(&self) -> Kda {
        Kda::from_totals(
            u64::from(self.kills),
            u64::from(self.deaths),
            u64::from(self.assists),
        )
    }

    pub fn duration_secs(&self) -> Option<u32> {
        parse_duration_secs(&self.duration)
    }
}

/// (kills + assists) / deaths, or kills + assists for a deathless sample.
/// Always carried at two decimals.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Kda {
    pub ratio: f64,
    pub deathless: bool,
}

impl Kda {
    pub fn from_totals(kills: u64, deaths: u64, assists: u64) -> Self {
        let takedowns = (kills + assists) as f64;
        let raw = if deaths == 0 {
            takedowns
        } else {
            takedowns / deaths as f64
        };
        Kda {
            ratio: (raw * 100.0).round() / 100.0,
            deathless: deaths == 0,
        }
    }
}

impl fmt::Display for Kda {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.ratio)
    }
}

/// Seconds in an `MM:SS` string. Minutes are mandatory; a missing or
/// unreadable seconds part counts as 0. Both parts are unsigned, so a
/// leading minus makes a part unreadable.
pub fn parse_duration_secs(raw: &str) -> Option<u32> {
    let component = |part: &str| leading_int(part).filter(|n| *n >= 0);
    let mut parts = raw.split(':');
    let minutes = parts.next().and_then(component)?;
    let seconds = parts.next().and_then(component).unwrap_or(0);
    let total = minutes.checked_mul(60)?.checked_add(seconds)?;
    u32::try_from(total).ok()
}

/// Integer prefix of `raw` after leading whitespace: `"25abc"` is 25,
/// `"abc"` is nothing.
pub(crate) fn leading_int(raw: &str) -> Option<i64> {
    let trimmed = raw.trim_start();
    let (negative, digits) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }
    let value: i64 = digits[..end].parse().ok()?;
    Some(if negative { -value } else { value })
}

pub(crate) mod lenient {
    use super::{leading_int, GameResult, Lane};
    use serde::{Deserialize, Deserializer};
    use serde_json::Value;
    use tracing::warn;

    fn as_int(value: &Value) -> Option<i64> {
        match value {
            Value::Number(n) => n.as_i64().or_else(|| n.as_f64().map(|f| f.trunc() as i64)),
            Value::String(s) => leading_int(s),
            _ => None,
        }
    }

    pub fn count<'de, D: Deserializer<'de>>(d: D) -> Result<u32, D::Error> {
        let value = Value::deserialize(d)?;
        Ok(as_int(&value)
            .map(|n| n.clamp(0, i64::from(u32::MAX)) as u32)
            .unwrap_or(0))
    }

    pub fn signed<'de, D: Deserializer<'de>>(d: D) -> Result<i32, D::Error> {
        let value = Value::deserialize(d)?;
        Ok(as_int(&value)
            .map(|n| n.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32)
            .unwrap_or(0))
    }

    pub fn timestamp<'de, D: Deserializer<'de>>(d: D) -> Result<Option<i64>, D::Error> {
        let value = Value::deserialize(d)?;
        Ok(as_int(&value).filter(|ms| *ms > 0))
    }

    pub fn flag<'de, D: Deserializer<'de>>(d: D) -> Result<bool, D::Error> {
        let value = Value::deserialize(d)?;
        Ok(match value {
            Value::Bool(b) => b,
            Value::String(s) => s.eq_ignore_ascii_case("true"),
            Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
            _ => false,
        })
    }

    pub fn text<'de, D: Deserializer<'de>>(d: D) -> Result<String, D::Error> {
        let value = Value::deserialize(d)?;
        Ok(match value {
            Value::String(s) => s,
            Value::Number(n) => n.to_string(),
            _ => String::new(),
        })
    }

    pub fn optional_text<'de, D: Deserializer<'de>>(d: D) -> Result<Option<String>, D::Error> {
        let value = Value::deserialize(d)?;
        Ok(match value {
            Value::String(s) if !s.is_empty() => Some(s),
            _ => None,
        })
    }

    pub fn lane<'de, D: Deserializer<'de>>(d: D) -> Result<Option<Lane>, D::Error> {
        let value = Value::deserialize(d)?;
        Ok(match value {
            Value::String(s) if !s.is_empty() => {
                let lane = Lane::from_label(&s);
                if lane.is_none() {
                    warn!(lane = %s, "Ignoring unknown lane");
                }
                lane
            }
            _ => None,
        })
    }

    pub fn result<'de, D: Deserializer<'de>>(d: D) -> Result<Option<GameResult>, D::Error> {
        let value = Value::deserialize(d)?;
        Ok(match value {
            Value::String(s) if !s.is_empty() => {
                let result = GameResult::from_code(&s);
                if result.is_none() {
                    warn!(result = %s, "Ignoring unknown result code");
                }
                result
            }
            _ => None,
        })
    }
}
