use serde::Serialize;
use std::fmt;

use crate::core::constants::*;

/// Result of a battle against an enemy level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum FightOutcome {
    InvalidLevel,
    EasyFight,
    GoodFight,
    IntenseFight,
    Defeated,
}

impl FightOutcome {
    /// All outcomes in label-table order.
    pub const ALL: [FightOutcome; 5] = [
        FightOutcome::InvalidLevel,
        FightOutcome::EasyFight,
        FightOutcome::GoodFight,
        FightOutcome::IntenseFight,
        FightOutcome::Defeated,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FightOutcome::InvalidLevel => INVALID_LEVEL_LABEL,
            FightOutcome::EasyFight => EASY_FIGHT_LABEL,
            FightOutcome::GoodFight => GOOD_FIGHT_LABEL,
            FightOutcome::IntenseFight => INTENSE_FIGHT_LABEL,
            FightOutcome::Defeated => DEFEATED_LABEL,
        }
    }

    /// True when the battle actually took place.
    pub fn is_victory(&self) -> bool {
        matches!(
            self,
            FightOutcome::EasyFight | FightOutcome::GoodFight | FightOutcome::IntenseFight
        )
    }
}

impl fmt::Display for FightOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of a training attempt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum TrainingOutcome {
    /// Training accepted; carries the description that was logged.
    Completed(String),
    NotStrongEnough,
}

impl TrainingOutcome {
    pub fn is_completed(&self) -> bool {
        matches!(self, TrainingOutcome::Completed(_))
    }

    /// The description on success, the refusal label otherwise.
    pub fn message(&self) -> &str {
        match self {
            TrainingOutcome::Completed(description) => description,
            TrainingOutcome::NotStrongEnough => NOT_STRONG_ENOUGH_LABEL,
        }
    }
}

impl fmt::Display for TrainingOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Pure classification of a battle, before it is applied to a warrior.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BattleResolution {
    pub outcome: FightOutcome,
    /// Experience to award. Zero for every outcome that leaves state unchanged.
    pub experience_gained: i32,
}

impl BattleResolution {
    pub(crate) fn new(outcome: FightOutcome, experience_gained: i32) -> Self {
        Self {
            outcome,
            experience_gained,
        }
    }

    pub(crate) fn unchanged(outcome: FightOutcome) -> Self {
        Self::new(outcome, 0)
    }
}
