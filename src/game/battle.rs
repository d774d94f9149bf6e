//! The battle roll: one random winner among the first two creatures.

use std::fmt;

use rand::Rng;

use crate::error::{AppError, Result};
use crate::game::creature::Creature;
use crate::game::TEAM_SIZE;

/// Outcome of one battle, by creature name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BattleOutcome {
    pub winner: String,
    pub loser: String,
}

impl fmt::Display for BattleOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} defeated {}!", self.winner, self.loser)
    }
}

/// Pick a winner among the first two creatures; the loser is the next index
/// around the pair, so the two are always distinct.
pub fn fight<R: Rng + ?Sized>(creatures: &[Creature], rng: &mut R) -> Result<BattleOutcome> {
    if creatures.len() < TEAM_SIZE {
        return Err(AppError::NotEnoughCreatures {
            count: creatures.len(),
        });
    }
    let team = &creatures[..TEAM_SIZE];
    let winner = rng.gen_range(0..team.len());
    let loser = (winner + 1) % team.len();
    Ok(BattleOutcome {
        winner: team[winner].name().to_string(),
        loser: team[loser].name().to_string(),
    })
}
