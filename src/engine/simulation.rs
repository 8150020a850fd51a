//! A completed run: the step trace plus its totals.

use serde::Serialize;

use crate::common::{Error, PageId, Result};
use crate::engine::result::percentage;
use crate::engine::{Policy, SimulationResult, StepRecord};

/// The output of one run.
///
/// Steps are stored contiguously, so any step can be fetched by index in
/// O(1) for "jump to step N" navigation. A `Simulation` is immutable once
/// produced.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Simulation {
    policy: Policy,
    capacity: usize,
    references: Vec<PageId>,
    steps: Vec<StepRecord>,
    result: SimulationResult,
}

impl Simulation {
    pub(crate) fn new(
        policy: Policy,
        capacity: usize,
        references: Vec<PageId>,
        steps: Vec<StepRecord>,
        result: SimulationResult,
    ) -> Self {
        Self {
            policy,
            capacity,
            references,
            steps,
            result,
        }
    }

    pub fn policy(&self) -> Policy {
        self.policy
    }

    /// Number of frames the run used.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// The reference sequence the run processed.
    pub fn references(&self) -> &[PageId] {
        &self.references
    }

    /// All steps in order.
    pub fn steps(&self) -> &[StepRecord] {
        &self.steps
    }

    pub fn iter(&self) -> std::slice::Iter<'_, StepRecord> {
        self.steps.iter()
    }

    /// Number of steps (equal to the number of references).
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Totals over the whole run.
    pub fn result(&self) -> &SimulationResult {
        &self.result
    }

    /// Step at 0-based `index`.
    ///
    /// # Errors
    /// - `Error::StepOutOfRange` if `index >= len()`
    pub fn step(&self, index: usize) -> Result<&StepRecord> {
        self.steps.get(index).ok_or(Error::StepOutOfRange {
            index,
            len: self.steps.len(),
        })
    }

    /// Step by its 1-based number, as shown in traces.
    ///
    /// # Errors
    /// - `Error::StepNumberOutOfRange` if `number` is 0 or greater than `len()`
    pub fn step_number(&self, number: usize) -> Result<&StepRecord> {
        number
            .checked_sub(1)
            .and_then(|index| self.steps.get(index))
            .ok_or(Error::StepNumberOutOfRange {
                number,
                len: self.steps.len(),
            })
    }

    /// Running totals over steps `0..=index`.
    ///
    /// # Errors
    /// - `Error::StepOutOfRange` if `index >= len()`
    pub fn stats_through(&self, index: usize) -> Result<SimulationResult> {
        self.step(index)?;
        Ok(SimulationResult::from_steps(&self.steps[..=index]))
    }

    /// Percentage of frames occupied after step `index`.
    ///
    /// # Errors
    /// - `Error::StepOutOfRange` if `index >= len()`
    pub fn utilization_at(&self, index: usize) -> Result<f64> {
        let step = self.step(index)?;
        Ok(percentage(step.after.len(), self.capacity))
    }
}

impl<'a> IntoIterator for &'a Simulation {
    type Item = &'a StepRecord;
    type IntoIter = std::slice::Iter<'a, StepRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.iter()
    }
}
