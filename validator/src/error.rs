use serde_json::Value;

#[derive(Debug)]
/// Why a bot's output was rejected for a phase.
pub enum InvalidOutput {
    InvalidJson(serde_json::Error),
    NotAnObject,
    MissingKey(&'static str),
    WrongNumberOfAbilities,
    InvalidAbility(Value),
    PlacementMissingCellOrDirection,
    UnknownShip(Value),
    InvalidDirection(Value),
    CombatMissingCellOrAbility,
    MalformedCell(Value),
    CellOutOfBounds(Value),
    MalformedAbilityUse(Value),
}

impl std::error::Error for InvalidOutput {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            InvalidOutput::InvalidJson(err) => Some(err),
            _ => None,
        }
    }
}

impl std::fmt::Display for InvalidOutput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InvalidOutput::InvalidJson(err) => write!(f, "Invalid JSON: {}", err),
            InvalidOutput::NotAnObject => write!(f, "Output must be a JSON object"),
            InvalidOutput::MissingKey(key) => write!(f, "Missing '{}' key", key),
            InvalidOutput::WrongNumberOfAbilities => write!(f, "Must provide exactly 2 abilities"),
            InvalidOutput::InvalidAbility(ability) => write!(f, "Invalid ability: {}", ability),
            InvalidOutput::PlacementMissingCellOrDirection => {
                write!(f, "Placement missing cell or direction")
            }
            InvalidOutput::UnknownShip(name) => write!(f, "Unknown ship: {}", name),
            InvalidOutput::InvalidDirection(direction) => {
                write!(f, "Direction must be 'H' or 'V', got {}", direction)
            }
            InvalidOutput::CombatMissingCellOrAbility => write!(f, "Combat missing cell or ability"),
            InvalidOutput::MalformedCell(cell) => {
                write!(f, "Cell must be [row, col] array, got {}", cell)
            }
            InvalidOutput::CellOutOfBounds(cell) => write!(f, "Cell out of bounds: {}", cell),
            InvalidOutput::MalformedAbilityUse(ability) => write!(
                f,
                "Ability must be an object with a single key among None, SP, RF, SD, HS, got {}",
                ability
            ),
        }
    }
}
