//! Application state value.
//!
//! `AppState` is never edited in place: the controller builds a new value
//! with [`AppState::merged`] and swaps it in, then re-renders.

use serde::{Deserialize, Serialize};

use crate::game::creature::Creature;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppState {
    /// Creatures from the current fetch cycle, in arrival order.
    pub creatures: Vec<Creature>,
    /// Battle outcome lines, oldest first. Only ever grows.
    pub battle_results: Vec<String>,
}

/// Fetch-cycle phase. Only one cycle may be in flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Fetching,
}

/// Partial update. `None` keeps the current value.
#[derive(Debug, Clone, Default)]
pub struct StatePatch {
    pub creatures: Option<Vec<Creature>>,
    pub battle_results: Option<Vec<String>>,
}

impl StatePatch {
    pub fn creatures(creatures: Vec<Creature>) -> Self {
        Self {
            creatures: Some(creatures),
            ..Self::default()
        }
    }

    pub fn battle_results(results: Vec<String>) -> Self {
        Self {
            battle_results: Some(results),
            ..Self::default()
        }
    }
}

impl AppState {
    /// New state with the patch fields laid over this one.
    pub fn merged(&self, patch: StatePatch) -> AppState {
        AppState {
            creatures: patch.creatures.unwrap_or_else(|| self.creatures.clone()),
            battle_results: patch
                .battle_results
                .unwrap_or_else(|| self.battle_results.clone()),
        }
    }

    /// Export the state as JSON.
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }
}
