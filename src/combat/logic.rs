//! Battle classification rules.

use super::types::{BattleResolution, FightOutcome};
use crate::character::rank::tier_index;
use crate::core::constants::*;

/// Classifies a battle between a warrior at `current_level` and an enemy at
/// `enemy_level`, returning the outcome and the experience it is worth.
///
/// This is a pure function of the two levels; `Warrior::battle` applies the
/// result.
pub fn resolve_battle(current_level: i32, enemy_level: i32) -> BattleResolution {
    if !(LEVEL_MIN..=LEVEL_MAX).contains(&enemy_level) {
        return BattleResolution::unchanged(FightOutcome::InvalidLevel);
    }

    if enemy_level > current_level {
        let diff = enemy_level - current_level;
        // Different tier AND a wide gap; either alone is still a fight.
        if tier_index(current_level) != tier_index(enemy_level) && diff >= DEFEAT_LEVEL_GAP {
            return BattleResolution::unchanged(FightOutcome::Defeated);
        }
        return BattleResolution::new(
            FightOutcome::IntenseFight,
            STRONGER_ENEMY_EXPERIENCE_FACTOR * diff * diff,
        );
    }

    match current_level - enemy_level {
        0 => BattleResolution::new(FightOutcome::GoodFight, SAME_LEVEL_EXPERIENCE),
        1 => BattleResolution::new(FightOutcome::GoodFight, ONE_BELOW_EXPERIENCE),
        _ => BattleResolution::unchanged(FightOutcome::EasyFight),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_enemy_levels() {
        for enemy in [i32::MIN, -1, 0, 101, 500, i32::MAX] {
            let res = resolve_battle(1, enemy);
            assert_eq!(res.outcome, FightOutcome::InvalidLevel);
            assert_eq!(res.experience_gained, 0);
        }
    }

    #[test]
    fn test_same_tier_gap_is_not_defeat() {
        let res = resolve_battle(1, 6);
        assert_eq!(res.outcome, FightOutcome::IntenseFight);
        assert_eq!(res.experience_gained, 500);

        let res = resolve_battle(1, 9);
        assert_eq!(res.outcome, FightOutcome::IntenseFight);
        assert_eq!(res.experience_gained, 20 * 8 * 8);
    }

    #[test]
    fn test_cross_tier_small_gap_is_not_defeat() {
        let res = resolve_battle(8, 12);
        assert_eq!(res.outcome, FightOutcome::IntenseFight);
        assert_eq!(res.experience_gained, 20 * 4 * 4);
    }

    #[test]
    fn test_cross_tier_wide_gap_is_defeat() {
        let res = resolve_battle(8, 13);
        assert_eq!(res.outcome, FightOutcome::Defeated);
        assert_eq!(res.experience_gained, 0);

        assert_eq!(resolve_battle(1, 100).outcome, FightOutcome::Defeated);
    }

    #[test]
    fn test_level_99_vs_100() {
        // Tier 9 vs tier 10 but only one level apart.
        let res = resolve_battle(99, 100);
        assert_eq!(res.outcome, FightOutcome::IntenseFight);
        assert_eq!(res.experience_gained, 20);
    }

    #[test]
    fn test_equal_and_lower_enemies() {
        assert_eq!(
            resolve_battle(5, 5),
            BattleResolution::new(FightOutcome::GoodFight, 10)
        );
        assert_eq!(
            resolve_battle(5, 4),
            BattleResolution::new(FightOutcome::GoodFight, 5)
        );
        assert_eq!(
            resolve_battle(5, 3),
            BattleResolution::new(FightOutcome::EasyFight, 0)
        );
        assert_eq!(
            resolve_battle(100, 1),
            BattleResolution::new(FightOutcome::EasyFight, 0)
        );
    }

    #[test]
    fn test_resolution_is_deterministic() {
        for current in 1..=100 {
            for enemy in 0..=101 {
                assert_eq!(resolve_battle(current, enemy), resolve_battle(current, enemy));
            }
        }
    }
}
