//! Game data — the fetched creatures, the battle roll, and the immutable
//! application state the controller swaps on every update.

pub mod battle;
pub mod creature;
pub mod state;

/// Creatures fetched per cycle, and the number that take part in a battle.
pub const TEAM_SIZE: usize = 2;
