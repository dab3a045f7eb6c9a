use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::Coord;

/// The abilities a player can pick at the start of the game.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum AbilityCode {
    #[serde(rename = "SP")]
    SonarPulse,
    /// Fires at two cells in one turn.
    #[serde(rename = "RF")]
    RapidFire,
    #[serde(rename = "SD")]
    Shield,
    #[serde(rename = "HS")]
    Hailstorm,
}

pub const ALL_ABILITIES: [AbilityCode; 4] = [
    AbilityCode::SonarPulse,
    AbilityCode::RapidFire,
    AbilityCode::Shield,
    AbilityCode::Hailstorm,
];

impl AbilityCode {
    pub fn code(&self) -> &'static str {
        match self {
            AbilityCode::SonarPulse => "SP",
            AbilityCode::RapidFire => "RF",
            AbilityCode::Shield => "SD",
            AbilityCode::Hailstorm => "HS",
        }
    }

    pub fn from_code(code: &str) -> Option<AbilityCode> {
        ALL_ABILITIES.into_iter().find(|ability| ability.code() == code)
    }
}

impl std::fmt::Display for AbilityCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// A player's ability as reported in the game state.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AbilityRecord {
    pub ability: AbilityCode,
    /// Engine-provided bookkeeping. `{"None": {}}` while the ability is unused.
    #[serde(default)]
    pub info: Value,
}

impl AbilityRecord {
    pub fn unused(ability: AbilityCode) -> Self {
        Self {
            ability,
            info: serde_json::json!({ "None": {} }),
        }
    }

    pub fn is_available(&self) -> bool {
        match &self.info {
            Value::Null => true,
            Value::Object(map) => {
                map.is_empty()
                    || (map.len() == 1
                        && map
                            .get("None")
                            .is_some_and(|v| v.as_object().is_some_and(|o| o.is_empty())))
            }
            _ => false,
        }
    }
}

/// The ability part of a combat move, serialized as a single-key object
/// such as `{"None": {}}` or `{"RF": {"cell": [2, 3]}}`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum AbilityUse {
    /// No ability this turn.
    #[serde(rename = "None")]
    None {},
    /// Fire at `cell` in addition to the move's main cell.
    #[serde(rename = "RF")]
    RapidFire { cell: Coord },
}
