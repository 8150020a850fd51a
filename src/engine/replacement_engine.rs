//! Replacement Engine - the shared step loop.
//!
//! Every policy goes through the same loop: snapshot, hit test, then either
//! load into a free frame or ask the policy's [`Replacer`] for a victim.
//! Only the replacer differs between policies.

use log::{debug, trace};

use crate::common::config::MIN_FRAMES;
use crate::common::{Error, PageId, Result};
use crate::engine::{Action, Policy, Simulation, SimulationResult, StepRecord};
use crate::replacer::{ClockReplacer, FifoReplacer, LruReplacer, OptimalReplacer, Replacer};

/// Holds the inputs of a simulation and runs policies over them.
///
/// The engine itself is immutable; each [`run`](Self::run) builds fresh
/// replacer state, so one engine can run every policy, even from several
/// threads at once.
///
/// # Usage
/// ```
/// use pagesim::{PageId, Policy, ReplacementEngine};
///
/// let refs: Vec<PageId> = [7, 0, 1, 2, 0, 3, 0, 4].into_iter().map(PageId).collect();
/// let engine = ReplacementEngine::new(3, refs).unwrap();
///
/// let optimal = engine.run(Policy::Optimal);
/// let fifo = engine.run(Policy::Fifo);
/// assert!(optimal.result().page_faults <= fifo.result().page_faults);
/// ```
#[derive(Debug, Clone)]
pub struct ReplacementEngine {
    /// Number of frames (at least [`MIN_FRAMES`]).
    capacity: usize,

    references: Vec<PageId>,
}

impl ReplacementEngine {
    /// Create an engine for `capacity` frames over `references`.
    ///
    /// # Errors
    /// - `Error::InvalidCapacity` if `capacity` is 0
    pub fn new(capacity: usize, references: impl Into<Vec<PageId>>) -> Result<Self> {
        if capacity < MIN_FRAMES {
            return Err(Error::InvalidCapacity(capacity));
        }
        Ok(Self {
            capacity,
            references: references.into(),
        })
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn references(&self) -> &[PageId] {
        &self.references
    }

    /// Run `policy` over the reference sequence.
    pub fn run(&self, policy: Policy) -> Simulation {
        match policy {
            Policy::Fifo => self.simulate(policy, FifoReplacer::new()),
            Policy::Lru => self.simulate(policy, LruReplacer::new()),
            Policy::Optimal => self.simulate(policy, OptimalReplacer::new()),
            Policy::Clock => self.simulate(policy, ClockReplacer::new()),
        }
    }

    fn simulate<R: Replacer>(&self, policy: Policy, mut replacer: R) -> Simulation {
        debug!(
            "{} run: {} frames, {} references",
            policy,
            self.capacity,
            self.references.len()
        );

        let mut steps = Vec::with_capacity(self.references.len());
        let mut faults = 0;
        let mut hits = 0;

        for (idx, &page) in self.references.iter().enumerate() {
            let before = replacer.snapshot();

            let action = if replacer.contains(page) {
                hits += 1;
                replacer.record_hit(page, idx);
                Action::Hit
            } else {
                faults += 1;
                if replacer.len() < self.capacity {
                    replacer.load(page, idx);
                    Action::Load
                } else {
                    let upcoming = &self.references[idx + 1..];
                    match replacer.replace(page, idx, upcoming) {
                        Some(victim) => {
                            trace!("{} step {}: evict {} for {}", policy, idx + 1, victim, page);
                            Action::Replace { victim }
                        }
                        None => Action::Load,
                    }
                }
            };

            let after = replacer.snapshot();
            steps.push(StepRecord::new(policy, idx + 1, page, before, after, action));
        }

        let result = SimulationResult::from_counts(faults, hits);
        debug!("{} run complete: {}", policy, result);

        Simulation::new(policy, self.capacity, self.references.clone(), steps, result)
    }
}

/// Validate the inputs and run `policy` in one call.
///
/// # Errors
/// - `Error::InvalidCapacity` if `capacity` is 0
pub fn run(capacity: usize, references: &[PageId], policy: Policy) -> Result<Simulation> {
    Ok(ReplacementEngine::new(capacity, references)?.run(policy))
}
