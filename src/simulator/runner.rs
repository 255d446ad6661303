//! Drives simulated warriors through random battles and training.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use super::config::SimConfig;
use super::report::SimReport;
use super::stats::RunStats;
use crate::character::Warrior;
use crate::combat::FightOutcome;
use crate::core::constants::{LEVEL_MAX, SIM_ENEMY_WINDOW_ABOVE, SIM_ENEMY_WINDOW_BELOW};

/// Run the full simulation and return a report.
pub fn run_simulation(config: &SimConfig) -> SimReport {
    let mut all_runs = Vec::with_capacity(config.num_runs as usize);

    for run_idx in 0..config.num_runs {
        let mut rng = match config.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed.wrapping_add(run_idx as u64)),
            None => ChaCha8Rng::from_entropy(),
        };

        let run_stats = simulate_single_run(config, &mut rng);

        if config.verbosity >= 2 {
            println!(
                "Run {}/{} - Level {}, Rank {}, Actions {}, Defeats {}",
                run_idx + 1,
                config.num_runs,
                run_stats.final_level,
                run_stats.final_rank,
                run_stats.actions_taken,
                run_stats.fights(FightOutcome::Defeated),
            );
        }
        all_runs.push(run_stats);
    }

    SimReport::from_runs(all_runs, config.max_actions_per_run)
}

/// Simulate one warrior until it reaches the level cap or runs out of actions.
pub fn simulate_single_run<R: Rng>(config: &SimConfig, rng: &mut R) -> RunStats {
    let mut warrior = Warrior::new();
    let mut stats = RunStats::new();
    let mut actions = 0;
    let training_chance = config.effective_training_chance();

    while actions < config.max_actions_per_run && warrior.level() < LEVEL_MAX {
        actions += 1;

        let wants_training = !config.regimens.is_empty() && rng.gen_bool(training_chance);
        if wants_training {
            let regimen = &config.regimens[rng.gen_range(0..config.regimens.len())];
            let outcome = warrior.train(
                regimen.description.as_str(),
                regimen.experience,
                regimen.required_level,
            );
            stats.record_training(&outcome);
        } else {
            let enemy_level = pick_enemy_level(warrior.level(), rng);
            stats.record_fight(warrior.battle(enemy_level));
        }

        stats.record_rank(warrior.rank(), actions);
    }

    tracing::debug!(
        actions,
        level = warrior.level(),
        rank = %warrior.rank(),
        "simulated run finished"
    );

    stats.finish(&warrior, actions);
    stats
}

/// Enemy level drawn around the warrior's level. Not clamped to the valid
/// range, so warriors near level 1 or 100 also roll invalid enemies.
pub fn pick_enemy_level<R: Rng>(level: i32, rng: &mut R) -> i32 {
    rng.gen_range(level - SIM_ENEMY_WINDOW_BELOW..=level + SIM_ENEMY_WINDOW_ABOVE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::super::config::Regimen;
    use crate::character::Rank;
    use crate::core::constants::EXPERIENCE_MAX;

    fn create_test_rng() -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(12345)
    }

    #[test]
    fn test_pick_enemy_level_window() {
        let mut rng = create_test_rng();
        for _ in 0..1_000 {
            let enemy = pick_enemy_level(50, &mut rng);
            assert!((46..=56).contains(&enemy));
        }
    }

    #[test]
    fn test_single_run_respects_action_limit() {
        let config = SimConfig {
            max_actions_per_run: 25,
            ..Default::default()
        };
        let stats = simulate_single_run(&config, &mut create_test_rng());
        assert!(stats.actions_taken <= 25);
        assert_eq!(
            stats.total_fights() + stats.trainings_completed + stats.trainings_refused,
            stats.actions_taken
        );
    }

    #[test]
    fn test_battles_only_run_never_trains() {
        let config = SimConfig {
            max_actions_per_run: 500,
            ..SimConfig::battles_only()
        };
        let stats = simulate_single_run(&config, &mut create_test_rng());
        assert_eq!(stats.trainings_completed, 0);
        assert_eq!(stats.trainings_refused, 0);
        assert_eq!(stats.total_fights(), stats.actions_taken);
    }

    #[test]
    fn test_fresh_warrior_rolls_invalid_levels() {
        let config = SimConfig {
            max_actions_per_run: 1,
            ..SimConfig::battles_only()
        };
        let mut rng = create_test_rng();
        let mut invalid = 0;
        for _ in 0..200 {
            let stats = simulate_single_run(&config, &mut rng);
            invalid += stats.fights(FightOutcome::InvalidLevel);
        }
        // Window [-3, 7] from level 1; four of eleven levels are invalid.
        assert!(invalid > 0);
    }

    #[test]
    fn test_finished_run_satisfies_invariants() {
        let config = SimConfig::default();
        let stats = simulate_single_run(&config, &mut create_test_rng());
        assert!(stats.final_experience <= EXPERIENCE_MAX);
        assert_eq!(stats.final_level, stats.final_experience / 100);
        if stats.reached_max_level {
            assert!(stats.rank_reached_at[Rank::Greatest.index()].is_some());
        }
    }

    #[test]
    fn test_out_of_range_training_chance_is_clamped() {
        let config = SimConfig {
            training_chance: 1.5,
            num_runs: 1,
            seed: Some(1),
            verbosity: 0,
            regimens: vec![Regimen::new("Sparring", 50, 1)],
            max_actions_per_run: 10,
            ..SimConfig::quick()
        };
        let report = run_simulation(&config);
        assert_eq!(report.trainings_completed, 10);
        assert!(report.outcome_totals.is_empty());

        let config = SimConfig {
            training_chance: f64::NAN,
            ..config
        };
        let report = run_simulation(&config);
        assert_eq!(report.trainings_completed, 0);
        assert_eq!(report.outcome_totals.values().sum::<u64>(), 10);
    }

    #[test]
    fn test_seeded_simulation_is_reproducible() {
        let config = SimConfig {
            num_runs: 5,
            seed: Some(42),
            verbosity: 0,
            ..SimConfig::quick()
        };
        let a = run_simulation(&config);
        let b = run_simulation(&config);
        assert_eq!(a.to_json(), b.to_json());
    }
}
