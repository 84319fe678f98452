/// Domain models for the application
mod classification;

pub use classification::{GeneralFilter, MissionType};

use crate::utils::year_from_value;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use std::str::FromStr;
use thiserror::Error;

/// Mission catalog record as served by the upstream API
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Mission {
    pub name: String,
    #[serde(default)]
    pub agency: String,
    #[serde(default, deserialize_with = "lenient_year")]
    pub launch_year: i32,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub target: String,
    #[serde(default)]
    pub mission_type: String,
    /// Remaining upstream fields, passed through untouched
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

fn lenient_year<'de, D>(deserializer: D) -> Result<i32, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(year_from_value(&value).unwrap_or_default())
}

/// Card size used by the mission grid
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CardSize {
    Small,
    #[default]
    Medium,
    Large,
}

#[derive(Debug, Error)]
#[error("unknown card size '{0}', expected small, medium or large")]
pub struct UnknownCardSize(String);

impl FromStr for CardSize {
    type Err = UnknownCardSize;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "small" => Ok(CardSize::Small),
            "medium" => Ok(CardSize::Medium),
            "large" => Ok(CardSize::Large),
            _ => Err(UnknownCardSize(s.to_string())),
        }
    }
}

/// Display settings handed to every explorer response
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct DisplaySettings {
    pub card_size: CardSize,
    pub show_images: bool,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            card_size: CardSize::Medium,
            show_images: true,
        }
    }
}

/// Like state of a single mission update
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct LikeState {
    pub liked: bool,
    pub likes: u64,
}

/// Health check response
#[derive(Serialize)]
pub struct Health {
    pub status: &'static str,
    pub now: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mission_from_upstream_json() {
        let json = serde_json::json!({
            "name": "Perseverance",
            "agency": "NASA",
            "launchYear": 2020,
            "status": "Active",
            "target": "Mars (Jezero Crater)",
            "missionType": "Rover",
            "image": "/img/perseverance.jpg"
        });
        let mission: Mission = serde_json::from_value(json).unwrap();
        assert_eq!(mission.launch_year, 2020);
        assert_eq!(mission.mission_type, "Rover");
        assert_eq!(mission.extra["image"], "/img/perseverance.jpg");
    }

    #[test]
    fn test_mission_tolerates_string_year_and_missing_fields() {
        let json = serde_json::json!({"name": "Artemis II", "launchYear": "2026"});
        let mission: Mission = serde_json::from_value(json).unwrap();
        assert_eq!(mission.launch_year, 2026);
        assert_eq!(mission.agency, "");
        assert!(mission.extra.is_empty());
    }

    #[test]
    fn test_mission_serializes_camel_case() {
        let json = serde_json::json!({"name": "Juno", "launchYear": 2011, "missionType": "Orbiter"});
        let mission: Mission = serde_json::from_value(json).unwrap();
        let out = serde_json::to_value(&mission).unwrap();
        assert_eq!(out["launchYear"], 2011);
        assert_eq!(out["missionType"], "Orbiter");
    }

    #[test]
    fn test_card_size_parse() {
        assert_eq!("Large".parse::<CardSize>().unwrap(), CardSize::Large);
        assert!("huge".parse::<CardSize>().is_err());
    }
}
