//! Configuration constants and run parameters for pagesim.

use crate::common::{parse_references, Error, PageId, Result};
use crate::engine::{Policy, ReplacementEngine, Simulation};

/// Smallest legal frame count.
///
/// With one frame every policy degenerates to "evict the only resident
/// page on every miss".
pub const MIN_FRAMES: usize = 1;

/// Frame count used when the caller does not supply one.
pub const DEFAULT_FRAMES: usize = 3;

/// Decimal places kept on hit and fault rates.
pub const RATE_DECIMALS: i32 = 2;

/// Everything needed for one simulation run.
///
/// # Example
/// ```
/// use pagesim::SimulationConfig;
///
/// let config = SimulationConfig::parse(3, "1, 2, 3, 1, 2, 3", "fifo").unwrap();
/// let sim = config.run().unwrap();
/// assert_eq!(sim.result().page_faults, 3);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimulationConfig {
    pub capacity: usize,
    pub references: Vec<PageId>,
    pub policy: Policy,
}

impl SimulationConfig {
    /// Build a config from already-parsed inputs.
    ///
    /// # Errors
    /// - `Error::InvalidCapacity` if `capacity` is below [`MIN_FRAMES`]
    pub fn new(capacity: usize, references: Vec<PageId>, policy: Policy) -> Result<Self> {
        if capacity < MIN_FRAMES {
            return Err(Error::InvalidCapacity(capacity));
        }
        Ok(Self {
            capacity,
            references,
            policy,
        })
    }

    /// Build a config from textual inputs.
    ///
    /// # Errors
    /// - `Error::InvalidCapacity` if `capacity` is below [`MIN_FRAMES`]
    /// - `Error::InvalidReference` for the first non-integer token
    /// - `Error::UnknownPolicy` if `policy` names no known policy
    pub fn parse(capacity: usize, references: &str, policy: &str) -> Result<Self> {
        let policy: Policy = policy.parse()?;
        let references = parse_references(references)?;
        Self::new(capacity, references, policy)
    }

    /// Run the configured policy over the configured references.
    ///
    /// # Errors
    /// - `Error::InvalidCapacity` if `capacity` was set below [`MIN_FRAMES`]
    ///   after construction
    pub fn run(&self) -> Result<Simulation> {
        let engine = ReplacementEngine::new(self.capacity, self.references.clone())?;
        Ok(engine.run(self.policy))
    }
}
