//! Monte Carlo progression simulator.
//!
//! Drives many fresh warriors through random battles and training to
//! measure how long each rank takes to reach and how often fights end in
//! each outcome. Uses `Warrior` directly, so results follow the real rules.

mod config;
mod report;
mod runner;
mod stats;

pub use config::{default_regimens, Regimen, SimConfig};
pub use report::{RankPacing, SimReport};
pub use runner::{pick_enemy_level, run_simulation, simulate_single_run};
pub use stats::RunStats;
