use std::collections::BTreeSet;
use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::{
    AbilityCode, AbilityRecord, AbilityUse, Coord, Grid, Placement, ShipKind, ShipRecord, FLEET,
};

/// The game-state snapshot handed to a bot for every decision.
///
/// Every key is optional in the JSON input.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    /// Our own ships that have been placed so far.
    #[serde(default)]
    pub player_ships: Vec<ShipRecord>,
    #[serde(default)]
    pub player_grid: Grid,
    /// What we know about the opponent's board.
    #[serde(default)]
    pub opponent_grid: Grid,
    #[serde(default)]
    pub player_abilities: Vec<AbilityRecord>,
    #[serde(default)]
    pub opponent_abilities: Vec<AbilityRecord>,
}

/// Which decision a [`GameState`] asks for.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Phase {
    AbilitySelection,
    /// The given ship is the next one to be placed.
    Placement(ShipKind),
    Combat,
}

impl GameState {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        serde_json::from_str(&contents).with_context(|| format!("parsing {}", path.display()))
    }

    /// Abilities are chosen before anything is placed, then the fleet is placed
    /// in [`FLEET`] order, then combat starts.
    pub fn phase(&self) -> Phase {
        let placed = self.placed_ships();
        if placed.is_empty() && self.player_abilities.is_empty() {
            return Phase::AbilitySelection;
        }
        match FLEET
            .into_iter()
            .find(|kind| !placed.iter().any(|ship| ship.name == *kind))
        {
            Some(kind) => Phase::Placement(kind),
            None => Phase::Combat,
        }
    }

    /// Our ships that have coordinates.
    pub fn placed_ships(&self) -> Vec<&ShipRecord> {
        self.player_ships.iter().filter(|s| s.is_placed()).collect()
    }

    /// Union of the cells covered by our placed ships.
    pub fn placed_coordinates(&self) -> BTreeSet<Coord> {
        self.player_ships
            .iter()
            .flat_map(|s| s.coordinates.iter().copied())
            .collect()
    }

    /// Our abilities that have not been used yet.
    pub fn available_abilities(&self) -> Vec<AbilityCode> {
        self.player_abilities
            .iter()
            .filter(|a| a.is_available())
            .map(|a| a.ability)
            .collect()
    }
}

/// A combat decision.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CombatMove {
    pub cell: Coord,
    pub ability: AbilityUse,
}

impl CombatMove {
    pub fn single(cell: Coord) -> Self {
        Self {
            cell,
            ability: AbilityUse::None {},
        }
    }
}

/// A bot's answer to one [`GameState`], in the shape matching its [`Phase`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Response {
    #[serde(rename = "abilitySelect")]
    AbilitySelect([AbilityCode; 2]),
    #[serde(rename = "placement")]
    Placement(Placement),
    #[serde(rename = "combat")]
    Combat(CombatMove),
}
