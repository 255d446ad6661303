//! Simulation report generation.

use std::collections::BTreeMap;

use super::stats::RunStats;
use crate::character::Rank;
use crate::combat::FightOutcome;

/// Pacing for one rank across all runs.
#[derive(Debug, Clone, serde::Serialize)]
pub struct RankPacing {
    pub rank: Rank,
    pub runs_reached: u32,
    /// Average action index at which the rank was first held, over the runs
    /// that reached it.
    pub avg_actions_to_reach: Option<f64>,
}

/// Aggregated results from multiple simulation runs.
#[derive(Debug, Clone)]
pub struct SimReport {
    pub num_runs: u32,
    pub runs_maxed: u32,
    pub runs_timed_out: u32,

    pub avg_final_level: f64,
    pub avg_final_experience: f64,
    pub avg_actions: f64,
    pub avg_actions_to_max: f64,

    pub outcome_totals: BTreeMap<FightOutcome, u64>,
    pub trainings_completed: u64,
    pub trainings_refused: u64,

    pub rank_distribution: BTreeMap<Rank, u32>,
    pub rank_pacing: Vec<RankPacing>,

    // Individual run stats for detailed analysis
    pub run_stats: Vec<RunStats>,
}

impl SimReport {
    /// Create a new report from completed run stats.
    pub fn from_runs(runs: Vec<RunStats>, max_actions: u64) -> Self {
        let num_runs = runs.len() as u32;
        let divisor = num_runs.max(1) as f64;
        let runs_maxed = runs.iter().filter(|r| r.reached_max_level).count() as u32;
        let runs_timed_out = runs
            .iter()
            .filter(|r| !r.reached_max_level && r.actions_taken >= max_actions)
            .count() as u32;

        let avg_final_level = runs.iter().map(|r| r.final_level as f64).sum::<f64>() / divisor;
        let avg_final_experience =
            runs.iter().map(|r| r.final_experience as f64).sum::<f64>() / divisor;
        let avg_actions = runs.iter().map(|r| r.actions_taken as f64).sum::<f64>() / divisor;
        let avg_actions_to_max = runs
            .iter()
            .filter(|r| r.reached_max_level)
            .map(|r| r.actions_taken as f64)
            .sum::<f64>()
            / runs_maxed.max(1) as f64;

        let mut outcome_totals = BTreeMap::new();
        for run in &runs {
            for (outcome, count) in &run.fight_outcomes {
                *outcome_totals.entry(*outcome).or_insert(0) += count;
            }
        }
        let trainings_completed = runs.iter().map(|r| r.trainings_completed).sum();
        let trainings_refused = runs.iter().map(|r| r.trainings_refused).sum();

        let mut rank_distribution = BTreeMap::new();
        for run in &runs {
            *rank_distribution.entry(run.final_rank).or_insert(0) += 1;
        }

        let rank_pacing = Rank::ALL
            .iter()
            .map(|rank| {
                let reached: Vec<u64> = runs
                    .iter()
                    .filter_map(|r| r.rank_reached_at.get(rank.index()).copied().flatten())
                    .collect();
                let avg_actions_to_reach = if reached.is_empty() {
                    None
                } else {
                    Some(reached.iter().sum::<u64>() as f64 / reached.len() as f64)
                };
                RankPacing {
                    rank: *rank,
                    runs_reached: reached.len() as u32,
                    avg_actions_to_reach,
                }
            })
            .collect();

        Self {
            num_runs,
            runs_maxed,
            runs_timed_out,
            avg_final_level,
            avg_final_experience,
            avg_actions,
            avg_actions_to_max,
            outcome_totals,
            trainings_completed,
            trainings_refused,
            rank_distribution,
            rank_pacing,
            run_stats: runs,
        }
    }

    /// Fraction of runs that reached the level cap, as a percentage.
    pub fn max_level_rate(&self) -> f64 {
        (self.runs_maxed as f64 / self.num_runs.max(1) as f64) * 100.0
    }

    /// Generate a text report.
    pub fn to_text(&self) -> String {
        let mut report = String::new();

        report.push_str("═══════════════════════════════════════════════════════════════\n");
        report.push_str("                 WARRIOR PROGRESSION REPORT\n");
        report.push_str("═══════════════════════════════════════════════════════════════\n\n");

        report.push_str(&format!(
            "Runs: {} total, {} reached level 100, {} timed out\n\n",
            self.num_runs, self.runs_maxed, self.runs_timed_out
        ));

        report.push_str("── PROGRESSION ──────────────────────────────────────────────────\n");
        report.push_str(&format!(
            "  Avg Final Level:      {:.1}\n",
            self.avg_final_level
        ));
        report.push_str(&format!(
            "  Avg Final Experience: {:.0}\n",
            self.avg_final_experience
        ));
        report.push_str(&format!("  Avg Actions:          {:.0}\n", self.avg_actions));
        report.push_str(&format!(
            "  Avg Actions to 100:   {:.0}\n\n",
            self.avg_actions_to_max
        ));

        report.push_str("── BATTLES ──────────────────────────────────────────────────────\n");
        let total_fights: u64 = self.outcome_totals.values().sum();
        for outcome in FightOutcome::ALL {
            let count = self.outcome_totals.get(&outcome).copied().unwrap_or(0);
            let pct = (count as f64 / total_fights.max(1) as f64) * 100.0;
            report.push_str(&format!(
                "  {:<22} {:>8}  {:>5.1}%\n",
                outcome.as_str(),
                count,
                pct
            ));
        }
        report.push('\n');

        report.push_str("── TRAINING ─────────────────────────────────────────────────────\n");
        report.push_str(&format!(
            "  Completed:            {}\n",
            self.trainings_completed
        ));
        report.push_str(&format!(
            "  Not strong enough:    {}\n\n",
            self.trainings_refused
        ));

        report.push_str("── RANK PACING ──────────────────────────────────────────────────\n");
        report.push_str("  Rank         Reached   Avg Actions\n");
        report.push_str("  ──────────   ───────   ───────────\n");
        for pacing in &self.rank_pacing {
            let pct = (pacing.runs_reached as f64 / self.num_runs.max(1) as f64) * 100.0;
            let actions = match pacing.avg_actions_to_reach {
                Some(avg) => format!("{:.0}", avg),
                None => "-".to_string(),
            };
            report.push_str(&format!(
                "  {:<10}   {:>6.1}%   {:>11}\n",
                pacing.rank.name(),
                pct,
                actions
            ));
        }
        report.push('\n');

        report.push_str("── FINAL RANKS ──────────────────────────────────────────────────\n");
        for rank in Rank::ALL {
            let count = self.rank_distribution.get(&rank).copied().unwrap_or(0);
            if count == 0 {
                continue;
            }
            let pct = (count as f64 / self.num_runs.max(1) as f64) * 100.0;
            let bar: String = "█".repeat((pct / 5.0) as usize);
            report.push_str(&format!("  {:<10} {:>5.1}% {}\n", rank.name(), pct, bar));
        }

        if self.runs_timed_out > 0 {
            report.push_str(&format!(
                "\n  ⚠️  {} runs ran out of actions before level 100\n",
                self.runs_timed_out
            ));
        }

        report.push_str("\n═══════════════════════════════════════════════════════════════\n");

        report
    }

    /// Generate a JSON report for further analysis.
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| "{}".to_string())
    }
}

/// JSON form of the report. Per-run stats are not included.
impl serde::Serialize for SimReport {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;

        let mut state = serializer.serialize_struct("SimReport", 14)?;
        state.serialize_field("num_runs", &self.num_runs)?;
        state.serialize_field("runs_maxed", &self.runs_maxed)?;
        state.serialize_field("runs_timed_out", &self.runs_timed_out)?;
        state.serialize_field("avg_final_level", &self.avg_final_level)?;
        state.serialize_field("avg_final_experience", &self.avg_final_experience)?;
        state.serialize_field("avg_actions", &self.avg_actions)?;
        state.serialize_field("avg_actions_to_max", &self.avg_actions_to_max)?;
        state.serialize_field("outcome_totals", &self.outcome_totals)?;
        state.serialize_field("trainings_completed", &self.trainings_completed)?;
        state.serialize_field("trainings_refused", &self.trainings_refused)?;
        state.serialize_field("rank_distribution", &self.rank_distribution)?;
        state.serialize_field("rank_pacing", &self.rank_pacing)?;
        state.serialize_field("max_level_rate", &self.max_level_rate())?;
        state.end()
    }
}
