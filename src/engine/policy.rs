//! The closed set of replacement policies.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::common::Error;

/// A page replacement policy.
///
/// Parsing is case-insensitive:
/// ```
/// use pagesim::Policy;
///
/// assert_eq!("lru".parse::<Policy>().unwrap(), Policy::Lru);
/// assert_eq!("Optimal".parse::<Policy>().unwrap(), Policy::Optimal);
/// assert!("mru".parse::<Policy>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Policy {
    Fifo,
    Lru,
    Optimal,
    Clock,
}

impl Policy {
    /// Every policy, in presentation order.
    pub const ALL: [Policy; 4] = [Policy::Fifo, Policy::Lru, Policy::Optimal, Policy::Clock];

    /// Upper-case selector name.
    pub fn name(&self) -> &'static str {
        match self {
            Policy::Fifo => "FIFO",
            Policy::Lru => "LRU",
            Policy::Optimal => "OPTIMAL",
            Policy::Clock => "CLOCK",
        }
    }

    /// One-paragraph explanation for display next to a run.
    pub fn description(&self) -> &'static str {
        match self {
            Policy::Fifo => {
                "First In First Out - The simplest page replacement algorithm. \
                 Pages are replaced in the order they were loaded into memory. \
                 Suffers from Belady's anomaly."
            }
            Policy::Lru => {
                "Least Recently Used - Replaces the page that has not been used \
                 for the longest time. Provides better performance than FIFO but \
                 requires tracking access times."
            }
            Policy::Optimal => {
                "Optimal Page Replacement - Replaces the page that will not be used \
                 for the longest time in the future. Theoretical best but impossible \
                 to implement (requires future knowledge)."
            }
            Policy::Clock => {
                "Clock Algorithm - Similar to LRU but uses reference bits and a clock \
                 pointer for efficient implementation. Practical alternative to full \
                 LRU tracking."
            }
        }
    }
}

impl fmt::Display for Policy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Policy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Policy::ALL
            .into_iter()
            .find(|policy| policy.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| Error::UnknownPolicy(s.to_string()))
    }
}
