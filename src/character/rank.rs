//! Rank tiers earned every ten levels.

use serde::Serialize;
use std::fmt;

use crate::core::constants::LEVELS_PER_RANK;

/// Warrior rank, one tier per ten levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Rank {
    Pushover,
    Novice,
    Fighter,
    Warrior,
    Veteran,
    Sage,
    Elite,
    Conqueror,
    Champion,
    Master,
    Greatest,
}

impl Rank {
    /// All ranks in progression order. Index equals tier index.
    pub const ALL: [Rank; 11] = [
        Rank::Pushover,
        Rank::Novice,
        Rank::Fighter,
        Rank::Warrior,
        Rank::Veteran,
        Rank::Sage,
        Rank::Elite,
        Rank::Conqueror,
        Rank::Champion,
        Rank::Master,
        Rank::Greatest,
    ];

    /// Display name for the rank.
    pub fn name(&self) -> &'static str {
        match self {
            Rank::Pushover => "Pushover",
            Rank::Novice => "Novice",
            Rank::Fighter => "Fighter",
            Rank::Warrior => "Warrior",
            Rank::Veteran => "Veteran",
            Rank::Sage => "Sage",
            Rank::Elite => "Elite",
            Rank::Conqueror => "Conqueror",
            Rank::Champion => "Champion",
            Rank::Master => "Master",
            Rank::Greatest => "Greatest",
        }
    }

    /// Position of this rank in [`Rank::ALL`].
    pub fn index(&self) -> usize {
        *self as usize
    }

    /// Rank held at `level`.
    ///
    /// Uses the integer-division tier index `level / 10`, so level 100 is
    /// the only level that reaches `Greatest`. Levels below zero (only
    /// reachable through negative training) stay `Pushover`.
    pub fn from_level(level: i32) -> Rank {
        let tier = (tier_index(level).max(0) as usize).min(Rank::ALL.len() - 1);
        Rank::ALL[tier]
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Integer-division tier index of a level.
pub fn tier_index(level: i32) -> i32 {
    level / LEVELS_PER_RANK
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rank_order_matches_tier_index() {
        for (i, rank) in Rank::ALL.iter().enumerate() {
            assert_eq!(rank.index(), i);
        }
    }

    #[test]
    fn test_rank_from_level_boundaries() {
        assert_eq!(Rank::from_level(1), Rank::Pushover);
        assert_eq!(Rank::from_level(9), Rank::Pushover);
        assert_eq!(Rank::from_level(10), Rank::Novice);
        assert_eq!(Rank::from_level(19), Rank::Novice);
        assert_eq!(Rank::from_level(80), Rank::Champion);
        assert_eq!(Rank::from_level(89), Rank::Champion);
        assert_eq!(Rank::from_level(90), Rank::Master);
        assert_eq!(Rank::from_level(99), Rank::Master);
        assert_eq!(Rank::from_level(100), Rank::Greatest);
    }

    #[test]
    fn test_rank_from_level_out_of_table() {
        assert_eq!(Rank::from_level(0), Rank::Pushover);
        assert_eq!(Rank::from_level(-25), Rank::Pushover);
        assert_eq!(Rank::from_level(250), Rank::Greatest);
    }

    #[test]
    fn test_rank_names() {
        let names: Vec<&str> = Rank::ALL.iter().map(|r| r.name()).collect();
        assert_eq!(
            names,
            vec![
                "Pushover",
                "Novice",
                "Fighter",
                "Warrior",
                "Veteran",
                "Sage",
                "Elite",
                "Conqueror",
                "Champion",
                "Master",
                "Greatest",
            ]
        );
        assert_eq!(Rank::Sage.to_string(), "Sage");
    }

    #[test]
    fn test_tier_index_truncates() {
        assert_eq!(tier_index(1), 0);
        assert_eq!(tier_index(9), 0);
        assert_eq!(tier_index(10), 1);
        assert_eq!(tier_index(100), 10);
    }
}
