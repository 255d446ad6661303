//! Warrior - experience, level and rank progression rules.
//!
//! A warrior gains experience from battles and training, levels up every
//! 100 experience and climbs one rank every 10 levels, up to level 100
//! ("Greatest"). The engine is a plain in-memory value; the caller owns
//! the game loop, input and display.

pub mod character;
pub mod combat;
pub mod core;
pub mod simulator;

pub use character::{Rank, Warrior};
pub use combat::{resolve_battle, BattleResolution, FightOutcome, TrainingOutcome};
