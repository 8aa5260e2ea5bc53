//! Simulation report generation.

use super::config::SimConfig;

/// Aggregated outcome of a simulation batch.
#[derive(Debug, Clone)]
pub struct SimReport {
    pub size: usize,
    pub tries_allowed: usize,
    pub num_trials: u32,
    pub successes: u32,
    pub strategy: &'static str,
    pub single_prisoner: bool,
}

impl SimReport {
    /// Build a report from a finished batch.
    pub fn from_counts(config: &SimConfig, successes: u32) -> Self {
        Self {
            size: config.size,
            tries_allowed: config.size / 2,
            num_trials: config.num_trials,
            successes,
            strategy: config.strategy.name(),
            single_prisoner: config.single_prisoner,
        }
    }

    /// Fraction of trials that succeeded, in `[0, 1]`.
    pub fn success_rate(&self) -> f64 {
        self.successes as f64 / self.num_trials.max(1) as f64
    }

    /// Generate a text report.
    pub fn to_text(&self) -> String {
        let mut report = String::new();

        report.push_str("═══════════════════════════════════════════════\n");
        report.push_str("            PRISONERS SIMULATION\n");
        report.push_str("═══════════════════════════════════════════════\n\n");

        report.push_str(&format!("  Boxes / Prisoners:  {}\n", self.size));
        report.push_str(&format!("  Tries per Prisoner: {}\n", self.tries_allowed));
        report.push_str(&format!("  Strategy:           {}\n", self.strategy));
        report.push_str(&format!(
            "  Mode:               {}\n",
            if self.single_prisoner {
                "single prisoner"
            } else {
                "whole group"
            }
        ));
        report.push_str(&format!("  Trials:             {}\n", self.num_trials));
        report.push_str(&format!("  Successes:          {}\n\n", self.successes));

        // Single-prisoner rates sit near coarse values like 50%, so two
        // decimals are enough; the group rate gets three.
        let line = if self.single_prisoner {
            format!("Success rate: {:.2}%\n", self.success_rate() * 100.0)
        } else {
            format!("Success rate: {:.3}%\n", self.success_rate() * 100.0)
        };
        report.push_str(&line);

        report
    }

    /// Generate a JSON report for further analysis.
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| "{}".to_string())
    }
}

// Manual Serialize so the derived rate ships alongside the raw counts.
impl serde::Serialize for SimReport {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;

        let mut state = serializer.serialize_struct("SimReport", 7)?;
        state.serialize_field("size", &self.size)?;
        state.serialize_field("tries_allowed", &self.tries_allowed)?;
        state.serialize_field("num_trials", &self.num_trials)?;
        state.serialize_field("successes", &self.successes)?;
        state.serialize_field("strategy", &self.strategy)?;
        state.serialize_field("single_prisoner", &self.single_prisoner)?;
        state.serialize_field("success_rate", &self.success_rate())?;
        state.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::strategy::StrategyKind;

    fn report(successes: u32, single: bool) -> SimReport {
        let config = SimConfig {
            size: 100,
            num_trials: 1_000,
            strategy: StrategyKind::Loop,
            single_prisoner: single,
            seed: None,
            verbosity: 0,
        };
        SimReport::from_counts(&config, successes)
    }

    #[test]
    fn test_success_rate() {
        assert_eq!(report(0, false).success_rate(), 0.0);
        assert_eq!(report(500, false).success_rate(), 0.5);
        assert_eq!(report(1_000, false).success_rate(), 1.0);
    }

    #[test]
    fn test_success_rate_with_zero_trials_is_zero() {
        let config = SimConfig {
            num_trials: 0,
            verbosity: 0,
            ..Default::default()
        };
        let r = SimReport::from_counts(&config, 0);
        assert_eq!(r.success_rate(), 0.0);
    }

    #[test]
    fn test_text_report_precision() {
        let group = report(312, false).to_text();
        assert!(group.contains("Success rate: 31.200%"), "got:\n{}", group);

        let single = report(500, true).to_text();
        assert!(single.contains("Success rate: 50.00%"), "got:\n{}", single);
    }

    #[test]
    fn test_json_report_fields() {
        let json = report(250, false).to_json();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed["size"], 100);
        assert_eq!(parsed["tries_allowed"], 50);
        assert_eq!(parsed["num_trials"], 1_000);
        assert_eq!(parsed["successes"], 250);
        assert_eq!(parsed["strategy"], "loop");
        assert_eq!(parsed["success_rate"], 0.25);
    }
}
