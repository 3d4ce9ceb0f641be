//! Summary statistics over the filtered job set.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::job::JobPosting;

/// Shown in place of the average when nothing matches.
pub const NO_AVERAGE: &str = "—";

/// Average hourly range across a set of jobs, rounded to whole NOK.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AverageRate {
    pub min: u32,
    pub max: u32,
}

impl fmt::Display for AverageRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}–{} NOK/hr", self.min, self.max)
    }
}

/// Derived values for the market snapshot panel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Aggregates {
    /// Number of matching jobs.
    pub matches: usize,
    /// `None` when there are no matches.
    pub average_hourly: Option<AverageRate>,
    /// Share of matches whose language requirement mentions English, 0-100.
    pub english_ready_percent: u32,
}

impl Aggregates {
    pub fn compute<'a, I>(jobs: I) -> Self
    where
        I: IntoIterator<Item = &'a JobPosting>,
    {
        let mut matches = 0usize;
        let mut min_total = 0u64;
        let mut max_total = 0u64;
        let mut english = 0usize;

        for job in jobs {
            matches += 1;
            min_total += u64::from(job.hourly_rate.min());
            max_total += u64::from(job.hourly_rate.max());
            if job.accepts_english() {
                english += 1;
            }
        }

        let average_hourly = (matches > 0).then(|| AverageRate {
            min: rounded_ratio(min_total as f64, matches as f64),
            max: rounded_ratio(max_total as f64, matches as f64),
        });

        // Divisor floor of one keeps an empty set at 0%.
        let english_ready_percent =
            rounded_ratio(english as f64 * 100.0, matches.max(1) as f64);

        Self {
            matches,
            average_hourly,
            english_ready_percent,
        }
    }

    /// Average range label, or [`NO_AVERAGE`] for an empty set.
    pub fn average_hourly_label(&self) -> String {
        match self.average_hourly {
            Some(rate) => rate.to_string(),
            None => NO_AVERAGE.to_string(),
        }
    }

    pub fn english_ready_label(&self) -> String {
        format!("{}% accept English speakers", self.english_ready_percent)
    }
}

// Halves round up; all inputs are non-negative.
fn rounded_ratio(numerator: f64, denominator: f64) -> u32 {
    (numerator / denominator + 0.5).floor() as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounding_matches_half_up() {
        assert_eq!(rounded_ratio(5.0, 2.0), 3);
        assert_eq!(rounded_ratio(7.0, 3.0), 2);
        assert_eq!(rounded_ratio(200.0, 3.0), 67);
        assert_eq!(rounded_ratio(0.0, 1.0), 0);
    }

    #[test]
    fn empty_set_reports_placeholder() {
        let stats = Aggregates::compute(std::iter::empty::<&JobPosting>());
        assert_eq!(stats.matches, 0);
        assert_eq!(stats.average_hourly, None);
        assert_eq!(stats.average_hourly_label(), "—");
        assert_eq!(stats.english_ready_percent, 0);
        assert_eq!(stats.english_ready_label(), "0% accept English speakers");
    }
}
