//! Per-reference step records.

use serde::Serialize;

use crate::common::PageId;
use crate::engine::Policy;

/// What a single reference did to the frame set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Action {
    /// The page was already resident.
    Hit,
    /// Miss with a free frame available; nothing evicted.
    Load,
    /// Miss with every frame occupied; `victim` was evicted.
    Replace { victim: PageId },
}

impl Action {
    /// Human-readable text for this action under `policy`.
    pub fn describe(&self, policy: Policy, page: PageId) -> String {
        match (self, policy) {
            (Action::Hit, Policy::Lru) => format!("Hit: Page {page} marked as recently used"),
            (Action::Hit, Policy::Clock) => format!("Hit: Page {page} reference bit set to 1"),
            (Action::Hit, _) => format!("Hit: Page {page} already in memory"),
            (Action::Load, _) => format!("Load: Page {page} loaded into empty frame"),
            (Action::Replace { victim }, Policy::Lru) => {
                format!("Fault: Replace LRU page {victim} with page {page}")
            }
            (Action::Replace { victim }, Policy::Clock) => {
                format!("Fault: Replace page {victim} (ref bit=0) with page {page}")
            }
            (Action::Replace { victim }, _) => {
                format!("Fault: Replace page {victim} with page {page}")
            }
        }
    }

    /// The evicted page, if any.
    pub fn victim(&self) -> Option<PageId> {
        match self {
            Action::Replace { victim } => Some(*victim),
            _ => None,
        }
    }
}

/// One processed reference.
///
/// Frame snapshots hold only resident pages; padding to the capacity for
/// display is left to the consumer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StepRecord {
    /// 1-based position in the reference sequence.
    pub step: usize,
    pub page: PageId,
    pub before: Vec<PageId>,
    pub after: Vec<PageId>,
    pub action: Action,
    /// Text form of `action`.
    pub description: String,
    pub page_fault: bool,
}

impl StepRecord {
    pub(crate) fn new(
        policy: Policy,
        step: usize,
        page: PageId,
        before: Vec<PageId>,
        after: Vec<PageId>,
        action: Action,
    ) -> Self {
        Self {
            step,
            page,
            before,
            after,
            description: action.describe(policy, page),
            page_fault: action != Action::Hit,
            action,
        }
    }
}
