//! Preset workloads for demonstrations.

use std::str::FromStr;

use crate::common::{Error, PageId, Result};
use crate::engine::{Policy, ReplacementEngine, Simulation};

/// A named frame count and reference string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scenario {
    /// Selector used on the command line.
    pub id: &'static str,
    pub name: &'static str,
    pub frames: usize,
    pub references: &'static [i64],
    pub description: &'static str,
}

/// Built-in scenarios, lightest first.
pub const PRESETS: [Scenario; 4] = [
    Scenario {
        id: "light",
        name: "Light Load",
        frames: 3,
        references: &[1, 2, 3, 1, 2, 3],
        description: "Simple repeating pattern with no page faults after initial load",
    },
    Scenario {
        id: "normal",
        name: "Normal Load",
        frames: 3,
        references: &[7, 0, 1, 2, 0, 3, 0, 4, 2, 3, 0, 3, 2, 1, 2, 0, 1, 7, 0, 1],
        description: "Standard workload with mixed references",
    },
    Scenario {
        id: "heavy",
        name: "Heavy Load",
        frames: 4,
        references: &[
            1, 2, 3, 4, 5, 1, 2, 3, 4, 5, 1, 2, 3, 4, 5, 1, 2, 3, 4, 5,
        ],
        description: "High contention with working set larger than memory",
    },
    Scenario {
        id: "worst",
        name: "Worst Case",
        frames: 3,
        references: &[
            1, 2, 3, 4, 1, 2, 3, 4, 1, 2, 3, 4, 1, 2, 3, 4, 1, 2, 3, 4,
        ],
        description: "Thrashing scenario where working set exceeds memory capacity",
    },
];

impl Scenario {
    pub fn references(&self) -> Vec<PageId> {
        self.references.iter().copied().map(PageId).collect()
    }

    /// An engine loaded with this scenario.
    ///
    /// # Errors
    /// - `Error::InvalidCapacity` if `frames` is 0
    pub fn engine(&self) -> Result<ReplacementEngine> {
        ReplacementEngine::new(self.frames, self.references())
    }

    pub fn run(&self, policy: Policy) -> Result<Simulation> {
        Ok(self.engine()?.run(policy))
    }
}

impl FromStr for Scenario {
    type Err = Error;

    /// Look up a preset by `id` or display name, ignoring case.
    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim();
        PRESETS
            .iter()
            .find(|p| p.id.eq_ignore_ascii_case(wanted) || p.name.eq_ignore_ascii_case(wanted))
            .copied()
            .ok_or_else(|| Error::UnknownScenario(s.to_string()))
    }
}
