//! LRU (Least Recently Used) replacement policy.

use std::collections::HashMap;

use crate::common::PageId;
use crate::replacer::Replacer;

/// Evicts the resident page whose last reference is oldest.
///
/// Frame order only changes on replacement: the victim is removed and the
/// incoming page is appended. A hit updates the page's access step but
/// leaves it in place.
#[derive(Debug, Default)]
pub struct LruReplacer {
    frames: Vec<PageId>,

    /// Step of the most recent reference to each resident page.
    last_access: HashMap<PageId, usize>,
}

impl LruReplacer {
    /// Create an empty LRU replacer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Step of the last reference to `page`, if it is resident.
    pub fn last_access(&self, page: PageId) -> Option<usize> {
        if self.frames.contains(&page) {
            self.last_access.get(&page).copied()
        } else {
            None
        }
    }

    /// Position of the least recently used page.
    ///
    /// Ties go to the earliest frame; `min_by_key` keeps the first minimum.
    fn victim_index(&self) -> Option<usize> {
        self.frames
            .iter()
            .enumerate()
            .min_by_key(|(_, page)| self.last_access.get(*page).copied().unwrap_or(0))
            .map(|(idx, _)| idx)
    }
}

impl Replacer for LruReplacer {
    fn snapshot(&self) -> Vec<PageId> {
        self.frames.clone()
    }

    fn len(&self) -> usize {
        self.frames.len()
    }

    fn contains(&self, page: PageId) -> bool {
        self.frames.contains(&page)
    }

    fn record_hit(&mut self, page: PageId, step: usize) {
        self.last_access.insert(page, step);
    }

    fn load(&mut self, page: PageId, step: usize) {
        self.frames.push(page);
        self.last_access.insert(page, step);
    }

    fn replace(&mut self, page: PageId, step: usize, _upcoming: &[PageId]) -> Option<PageId> {
        let victim = self.victim_index().map(|idx| self.frames.remove(idx));
        if let Some(victim) = victim {
            self.last_access.remove(&victim);
        }
        self.load(page, step);
        victim
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lru_evicts_least_recent() {
        let mut replacer = LruReplacer::new();

        replacer.load(PageId(1), 0);
        replacer.load(PageId(2), 1);
        replacer.load(PageId(3), 2);

        // Touch 1 so that 2 becomes least recently used
        replacer.record_hit(PageId(1), 3);

        assert_eq!(replacer.replace(PageId(4), 4, &[]), Some(PageId(2)));
        assert_eq!(
            replacer.snapshot(),
            vec![PageId(1), PageId(3), PageId(4)]
        );
    }

    #[test]
    fn test_lru_hit_keeps_frame_order() {
        let mut replacer = LruReplacer::new();
        replacer.load(PageId(1), 0);
        replacer.load(PageId(2), 1);
        replacer.record_hit(PageId(1), 2);

        assert_eq!(replacer.snapshot(), vec![PageId(1), PageId(2)]);
        assert_eq!(replacer.last_access(PageId(1)), Some(2));
        assert_eq!(replacer.last_access(PageId(2)), Some(1));
    }

    #[test]
    fn test_lru_forgets_victim() {
        let mut replacer = LruReplacer::new();
        replacer.load(PageId(1), 0);
        assert_eq!(replacer.replace(PageId(2), 1, &[]), Some(PageId(1)));
        assert_eq!(replacer.last_access(PageId(1)), None);
        assert_eq!(replacer.last_access(PageId(2)), Some(1));
    }
}
