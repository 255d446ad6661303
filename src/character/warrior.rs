//! The warrior: experience, level, rank and training log.

use serde::Serialize;

use super::rank::Rank;
use crate::combat::{resolve_battle, FightOutcome, TrainingOutcome};
use crate::core::constants::{EXPERIENCE_MAX, EXPERIENCE_PER_LEVEL, EXPERIENCE_START};

/// A single warrior progressing from level 1 to level 100.
///
/// Experience is the only authoritative stat; level and rank are derived
/// from it after every change. Mutated only through [`Warrior::battle`] and
/// [`Warrior::train`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Warrior {
    level: i32,
    experience: i32,
    rank: Rank,
    achievements: Vec<String>,
}

impl Warrior {
    pub fn new() -> Self {
        let mut warrior = Self {
            level: 0,
            experience: EXPERIENCE_START,
            rank: Rank::Pushover,
            achievements: Vec::new(),
        };
        warrior.recheck_stats();
        warrior
    }

    pub fn level(&self) -> i32 {
        self.level
    }

    pub fn experience(&self) -> i32 {
        self.experience
    }

    pub fn rank(&self) -> Rank {
        self.rank
    }

    /// Descriptions of completed trainings, oldest first.
    pub fn achievements(&self) -> &[String] {
        &self.achievements
    }

    /// Fights an enemy of `enemy_level` and awards experience for it.
    ///
    /// Invalid levels, defeats and easy fights leave the warrior untouched.
    pub fn battle(&mut self, enemy_level: i32) -> FightOutcome {
        let resolution = resolve_battle(self.level, enemy_level);

        if resolution.experience_gained == 0 {
            tracing::trace!(
                enemy_level,
                level = self.level,
                outcome = %resolution.outcome,
                "battle left warrior unchanged"
            );
            return resolution.outcome;
        }

        self.experience += resolution.experience_gained;
        self.recheck_stats();

        tracing::debug!(
            enemy_level,
            gained = resolution.experience_gained,
            experience = self.experience,
            level = self.level,
            rank = %self.rank,
            outcome = %resolution.outcome,
            "battle won"
        );
        resolution.outcome
    }

    /// Trains for `experience_points` if the warrior is at least
    /// `required_level`, logging `description` as an achievement.
    ///
    /// `experience_points` is applied as-is and may be negative.
    pub fn train(
        &mut self,
        description: impl Into<String>,
        experience_points: i32,
        required_level: i32,
    ) -> TrainingOutcome {
        let description = description.into();

        if self.level < required_level {
            tracing::trace!(
                description = %description,
                required_level,
                level = self.level,
                "training refused"
            );
            return TrainingOutcome::NotStrongEnough;
        }

        self.achievements.push(description.clone());
        self.experience = self.experience.saturating_add(experience_points);
        self.recheck_stats();

        tracing::debug!(
            description = %description,
            gained = experience_points,
            experience = self.experience,
            level = self.level,
            rank = %self.rank,
            "training completed"
        );
        TrainingOutcome::Completed(description)
    }

    fn recheck_stats(&mut self) {
        self.experience = self.experience.min(EXPERIENCE_MAX);
        self.level = self.experience / EXPERIENCE_PER_LEVEL;
        self.rank = Rank::from_level(self.level);
    }
}

impl Default for Warrior {
    fn default() -> Self {
        Self::new()
    }
}
