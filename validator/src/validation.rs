use battleship::{AbilityCode, ShipKind, BOARD_SIZE};
use serde_json::{Map, Value};

use crate::error::InvalidOutput;

/// The decisions a bot is tested on, in the order they happen in a game.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, clap::ValueEnum)]
pub enum ValidationPhase {
    AbilitySelection,
    Placement,
    Combat,
}

impl ValidationPhase {
    pub const ALL: [ValidationPhase; 3] = [
        ValidationPhase::AbilitySelection,
        ValidationPhase::Placement,
        ValidationPhase::Combat,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            ValidationPhase::AbilitySelection => "ability_selection",
            ValidationPhase::Placement => "placement",
            ValidationPhase::Combat => "combat",
        }
    }
}

impl std::fmt::Display for ValidationPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Checks the shape and bounds of a bot's output for `phase`.
///
/// Returns a short description of what was accepted.
pub fn validate_output(output: &str, phase: ValidationPhase) -> Result<&'static str, InvalidOutput> {
    let data: Value = serde_json::from_str(output).map_err(InvalidOutput::InvalidJson)?;
    let data = data.as_object().ok_or(InvalidOutput::NotAnObject)?;
    match phase {
        ValidationPhase::AbilitySelection => validate_ability_selection(data),
        ValidationPhase::Placement => validate_placement(data),
        ValidationPhase::Combat => validate_combat(data),
    }
}

fn validate_ability_selection(data: &Map<String, Value>) -> Result<&'static str, InvalidOutput> {
    let abilities = data
        .get("abilitySelect")
        .ok_or(InvalidOutput::MissingKey("abilitySelect"))?;
    let abilities = match abilities.as_array() {
        Some(list) if list.len() == 2 => list,
        _ => return Err(InvalidOutput::WrongNumberOfAbilities),
    };
    for ability in abilities {
        if ability.as_str().and_then(AbilityCode::from_code).is_none() {
            return Err(InvalidOutput::InvalidAbility(ability.clone()));
        }
    }
    Ok("Valid ability selection")
}

fn validate_placement(data: &Map<String, Value>) -> Result<&'static str, InvalidOutput> {
    let placement = data
        .get("placement")
        .ok_or(InvalidOutput::MissingKey("placement"))?;
    let (Some(cell), Some(direction)) = (placement.get("cell"), placement.get("direction")) else {
        return Err(InvalidOutput::PlacementMissingCellOrDirection);
    };
    validate_cell(cell)?;
    if !matches!(direction.as_str(), Some("H" | "V")) {
        return Err(InvalidOutput::InvalidDirection(direction.clone()));
    }
    // The ship name is optional, but must be known when given
    if let Some(name) = placement.get("name") {
        if name.as_str().and_then(ShipKind::from_name).is_none() {
            return Err(InvalidOutput::UnknownShip(name.clone()));
        }
    }
    Ok("Valid placement")
}

fn validate_combat(data: &Map<String, Value>) -> Result<&'static str, InvalidOutput> {
    let combat = data
        .get("combat")
        .ok_or(InvalidOutput::MissingKey("combat"))?;
    let (Some(cell), Some(ability)) = (combat.get("cell"), combat.get("ability")) else {
        return Err(InvalidOutput::CombatMissingCellOrAbility);
    };
    validate_cell(cell)?;
    validate_ability_use(ability)?;
    Ok("Valid combat move")
}

fn validate_cell(cell: &Value) -> Result<(), InvalidOutput> {
    let coords: Vec<i64> = match cell.as_array() {
        Some(pair) if pair.len() == 2 => pair
            .iter()
            .map(Value::as_i64)
            .collect::<Option<_>>()
            .ok_or_else(|| InvalidOutput::MalformedCell(cell.clone()))?,
        _ => return Err(InvalidOutput::MalformedCell(cell.clone())),
    };
    if coords.iter().any(|c| !(0..BOARD_SIZE as i64).contains(c)) {
        return Err(InvalidOutput::CellOutOfBounds(cell.clone()));
    }
    Ok(())
}

fn validate_ability_use(ability: &Value) -> Result<(), InvalidOutput> {
    let well_formed = ability.as_object().is_some_and(|map| {
        map.len() == 1
            && map.iter().all(|(key, params)| {
                (key == "None" || AbilityCode::from_code(key).is_some()) && params.is_object()
            })
    });
    if well_formed {
        Ok(())
    } else {
        Err(InvalidOutput::MalformedAbilityUse(ability.clone()))
    }
}
