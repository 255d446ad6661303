//! Simulation configuration.

use serde::Serialize;

use crate::core::constants::{
    SIM_DEFAULT_MAX_ACTIONS, SIM_DEFAULT_RUNS, SIM_DEFAULT_TRAINING_CHANCE,
};

/// A training a simulated warrior can attempt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Regimen {
    pub description: String,
    pub experience: i32,
    pub required_level: i32,
}

impl Regimen {
    pub fn new(description: &str, experience: i32, required_level: i32) -> Self {
        Self {
            description: description.to_string(),
            experience,
            required_level,
        }
    }
}

/// Regimens used when none are configured.
pub fn default_regimens() -> Vec<Regimen> {
    vec![
        Regimen::new("Sparring", 50, 1),
        Regimen::new("Defeated a bandit camp", 150, 5),
        Regimen::new("Mastered the spear", 400, 20),
        Regimen::new("Climbed the frozen peak", 900, 40),
        Regimen::new("Defeated Chuck Norris", 9000, 1),
        Regimen::new("Duelled the old master", 1_500, 70),
        Regimen::new("Ambushed on the road", -50, 1),
    ]
}

/// Configuration for a simulation run.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// Number of simulated warriors
    pub num_runs: u32,

    /// Random seed for reproducibility (None = random)
    pub seed: Option<u64>,

    /// Maximum battles + trainings per warrior before giving up
    pub max_actions_per_run: u64,

    /// Probability that an action is a training attempt instead of a battle
    pub training_chance: f64,

    /// Trainings to pick from
    pub regimens: Vec<Regimen>,

    /// Log verbosity (0 = silent, 1 = summary, 2 = detailed)
    pub verbosity: u8,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            num_runs: SIM_DEFAULT_RUNS,
            seed: None,
            max_actions_per_run: SIM_DEFAULT_MAX_ACTIONS,
            training_chance: SIM_DEFAULT_TRAINING_CHANCE,
            regimens: default_regimens(),
            verbosity: 1,
        }
    }
}

impl SimConfig {
    /// `training_chance` as a valid probability. Out-of-range values are
    /// clamped into [0, 1]; NaN and infinities count as 0.
    pub fn effective_training_chance(&self) -> f64 {
        if self.training_chance.is_finite() {
            self.training_chance.clamp(0.0, 1.0)
        } else {
            0.0
        }
    }

    /// Small run count for a fast sanity check
    pub fn quick() -> Self {
        Self {
            num_runs: 100,
            max_actions_per_run: 2_000,
            ..Default::default()
        }
    }

    /// Battles only, no training
    pub fn battles_only() -> Self {
        Self {
            training_chance: 0.0,
            ..Default::default()
        }
    }

    /// Mostly training, to compare against battle pacing
    pub fn training_heavy() -> Self {
        Self {
            training_chance: 0.8,
            ..Default::default()
        }
    }
}
