//! FIFO (First-In-First-Out) replacement policy.

use std::collections::VecDeque;

use crate::common::PageId;
use crate::replacer::Replacer;

/// Evicts pages in the order they were loaded.
///
/// Hits do not reorder the queue.
#[derive(Debug, Default)]
pub struct FifoReplacer {
    /// Resident pages in load order (front = oldest).
    queue: VecDeque<PageId>,
}

impl FifoReplacer {
    /// Create an empty FIFO replacer.
    pub fn new() -> Self {
        Self::default()
    }
}

impl Replacer for FifoReplacer {
    fn snapshot(&self) -> Vec<PageId> {
        self.queue.iter().copied().collect()
    }

    fn len(&self) -> usize {
        self.queue.len()
    }

    fn contains(&self, page: PageId) -> bool {
        self.queue.contains(&page)
    }

    fn record_hit(&mut self, _page: PageId, _step: usize) {}

    fn load(&mut self, page: PageId, _step: usize) {
        self.queue.push_back(page);
    }

    fn replace(&mut self, page: PageId, _step: usize, _upcoming: &[PageId]) -> Option<PageId> {
        let victim = self.queue.pop_front();
        self.queue.push_back(page);
        victim
    }
}
