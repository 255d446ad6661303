//! Per-run statistics.

use serde::Serialize;
use std::collections::BTreeMap;

use crate::character::{Rank, Warrior};
use crate::combat::{FightOutcome, TrainingOutcome};
use crate::core::constants::LEVEL_MAX;

/// What happened to one simulated warrior.
#[derive(Debug, Clone, Serialize)]
pub struct RunStats {
    pub actions_taken: u64,
    pub reached_max_level: bool,
    pub final_level: i32,
    pub final_experience: i32,
    pub final_rank: Rank,

    pub fight_outcomes: BTreeMap<FightOutcome, u64>,
    pub trainings_completed: u64,
    pub trainings_refused: u64,

    /// Action index at which each rank was first held, indexed by tier.
    /// `Pushover` is held from action 0.
    pub rank_reached_at: Vec<Option<u64>>,
}

impl RunStats {
    pub fn new() -> Self {
        let mut rank_reached_at = vec![None; Rank::ALL.len()];
        rank_reached_at[Rank::Pushover.index()] = Some(0);

        Self {
            actions_taken: 0,
            reached_max_level: false,
            final_level: 0,
            final_experience: 0,
            final_rank: Rank::Pushover,
            fight_outcomes: BTreeMap::new(),
            trainings_completed: 0,
            trainings_refused: 0,
            rank_reached_at,
        }
    }

    pub fn record_fight(&mut self, outcome: FightOutcome) {
        *self.fight_outcomes.entry(outcome).or_insert(0) += 1;
    }

    pub fn record_training(&mut self, outcome: &TrainingOutcome) {
        if outcome.is_completed() {
            self.trainings_completed += 1;
        } else {
            self.trainings_refused += 1;
        }
    }

    /// Notes the rank held after action number `action`.
    pub fn record_rank(&mut self, rank: Rank, action: u64) {
        let slot = &mut self.rank_reached_at[rank.index()];
        if slot.is_none() {
            *slot = Some(action);
        }
    }

    pub fn fights(&self, outcome: FightOutcome) -> u64 {
        self.fight_outcomes.get(&outcome).copied().unwrap_or(0)
    }

    pub fn total_fights(&self) -> u64 {
        self.fight_outcomes.values().sum()
    }

    /// Copies the final warrior state into the stats.
    pub fn finish(&mut self, warrior: &Warrior, actions_taken: u64) {
        self.actions_taken = actions_taken;
        self.final_level = warrior.level();
        self.final_experience = warrior.experience();
        self.final_rank = warrior.rank();
        self.reached_max_level = warrior.level() >= LEVEL_MAX;
    }
}

impl Default for RunStats {
    fn default() -> Self {
        Self::new()
    }
}
