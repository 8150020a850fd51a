//! Aggregate statistics over a run.

use std::fmt;

use serde::Serialize;

use crate::common::config::RATE_DECIMALS;
use crate::engine::StepRecord;

/// Totals for a run, or for a prefix of one.
///
/// Rates are percentages rounded to two decimals. With no references both
/// rates are 0 rather than NaN.
///
/// # Example
/// ```
/// use pagesim::SimulationResult;
///
/// let result = SimulationResult::from_counts(3, 3);
/// assert_eq!(result.total_references, 6);
/// assert_eq!(result.hit_rate, 50.0);
/// println!("{}", result);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SimulationResult {
    pub total_references: usize,
    pub page_faults: usize,
    pub page_hits: usize,
    pub hit_rate: f64,
    pub fault_rate: f64,
}

impl SimulationResult {
    /// Build a result from fault and hit counts.
    pub fn from_counts(page_faults: usize, page_hits: usize) -> Self {
        let total_references = page_faults + page_hits;
        Self {
            total_references,
            page_faults,
            page_hits,
            hit_rate: percentage(page_hits, total_references),
            fault_rate: percentage(page_faults, total_references),
        }
    }

    /// Tally a sequence of step records.
    pub fn from_steps<'a>(steps: impl IntoIterator<Item = &'a StepRecord>) -> Self {
        let (faults, hits) = steps.into_iter().fold((0, 0), |(faults, hits), step| {
            if step.page_fault {
                (faults + 1, hits)
            } else {
                (faults, hits + 1)
            }
        });
        Self::from_counts(faults, hits)
    }
}

impl fmt::Display for SimulationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Result {{ references: {}, faults: {}, hits: {}, hit_rate: {:.2}%, fault_rate: {:.2}% }}",
            self.total_references, self.page_faults, self.page_hits, self.hit_rate, self.fault_rate
        )
    }
}

/// `part / total` as a percentage rounded to [`RATE_DECIMALS`] places.
pub(crate) fn percentage(part: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    let scale = 10f64.powi(RATE_DECIMALS);
    (part as f64 / total as f64 * 100.0 * scale).round() / scale
}
