//! Optimal (Belady's MIN) replacement policy.

use crate::common::PageId;
use crate::replacer::Replacer;

/// Distance to a page's next reference.
///
/// `Never` orders after every `At`, so a page that is not referenced again
/// is always the most evictable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub(crate) enum NextUse {
    At(usize),
    Never,
}

impl NextUse {
    /// Find the next reference to `page` in `upcoming`.
    pub(crate) fn find(page: PageId, upcoming: &[PageId]) -> Self {
        upcoming
            .iter()
            .position(|&p| p == page)
            .map_or(NextUse::Never, NextUse::At)
    }
}

/// Evicts the resident page whose next reference lies furthest ahead.
///
/// Keeps no bookkeeping between steps; every replacement rescans the
/// unprocessed tail of the reference sequence.
#[derive(Debug, Default)]
pub struct OptimalReplacer {
    frames: Vec<PageId>,
}

impl OptimalReplacer {
    /// Create an empty Optimal replacer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Position of the page with the furthest next use.
    ///
    /// Ties go to the earliest frame, so only a strictly greater distance
    /// replaces the current candidate.
    fn victim_index(&self, upcoming: &[PageId]) -> Option<usize> {
        let mut best: Option<(usize, NextUse)> = None;
        for (idx, &page) in self.frames.iter().enumerate() {
            let next = NextUse::find(page, upcoming);
            match best {
                Some((_, furthest)) if next <= furthest => {}
                _ => best = Some((idx, next)),
            }
        }
        best.map(|(idx, _)| idx)
    }
}

impl Replacer for OptimalReplacer {
    fn snapshot(&self) -> Vec<PageId> {
        self.frames.clone()
    }

    fn len(&self) -> usize {
        self.frames.len()
    }

    fn contains(&self, page: PageId) -> bool {
        self.frames.contains(&page)
    }

    fn record_hit(&mut self, _page: PageId, _step: usize) {}

    fn load(&mut self, page: PageId, _step: usize) {
        self.frames.push(page);
    }

    fn replace(&mut self, page: PageId, _step: usize, upcoming: &[PageId]) -> Option<PageId> {
        let victim = self
            .victim_index(upcoming)
            .map(|idx| self.frames.remove(idx));
        self.frames.push(page);
        victim
    }
}
