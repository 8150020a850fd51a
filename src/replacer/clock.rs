//! CLOCK (second-chance) replacement policy.

use crate::common::PageId;
use crate::replacer::Replacer;

/// Approximates LRU with one reference bit per frame and a circular hand.
///
/// Frames keep their physical slot: a replacement writes the new page into
/// the victim's slot instead of appending.
///
/// # Algorithm
/// On a miss with all frames full, the hand sweeps forward. A frame whose
/// bit is set gets a second chance (bit cleared, hand advances); the first
/// frame found with a clear bit is the victim. The new page takes that
/// slot with its bit set, and the hand moves one slot past it.
#[derive(Debug, Default)]
pub struct ClockReplacer {
    frames: Vec<PageId>,

    /// Reference bit per slot, parallel to `frames`.
    ref_bits: Vec<bool>,

    /// Index of the next slot to inspect.
    hand: usize,
}

impl ClockReplacer {
    /// Create an empty CLOCK replacer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current hand position. Always a valid slot, or 0 when empty.
    pub fn hand(&self) -> usize {
        self.hand
    }

    /// Reference bit of a resident page.
    pub fn reference_bit(&self, page: PageId) -> Option<bool> {
        self.slot_of(page).map(|slot| self.ref_bits[slot])
    }

    fn slot_of(&self, page: PageId) -> Option<usize> {
        self.frames.iter().position(|&p| p == page)
    }

    fn advance(&mut self) {
        self.hand = (self.hand + 1) % self.frames.len();
    }
}

impl Replacer for ClockReplacer {
    fn snapshot(&self) -> Vec<PageId> {
        self.frames.clone()
    }

    fn len(&self) -> usize {
        self.frames.len()
    }

    fn contains(&self, page: PageId) -> bool {
        self.frames.contains(&page)
    }

    fn record_hit(&mut self, page: PageId, _step: usize) {
        if let Some(slot) = self.slot_of(page) {
            self.ref_bits[slot] = true;
        }
    }

    fn load(&mut self, page: PageId, _step: usize) {
        self.frames.push(page);
        self.ref_bits.push(true);
    }

    fn replace(&mut self, page: PageId, step: usize, _upcoming: &[PageId]) -> Option<PageId> {
        if self.frames.is_empty() {
            self.load(page, step);
            return None;
        }

        // Terminates within one revolution: every bit passed is cleared.
        while self.ref_bits[self.hand] {
            self.ref_bits[self.hand] = false;
            self.advance();
        }

        let victim = std::mem::replace(&mut self.frames[self.hand], page);
        self.ref_bits[self.hand] = true;
        self.advance();
        Some(victim)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_clock(ids: &[i64]) -> ClockReplacer {
        let mut replacer = ClockReplacer::new();
        for (step, &id) in ids.iter().enumerate() {
            replacer.load(PageId(id), step);
        }
        replacer
    }

    #[test]
    fn test_clock_full_sweep_evicts_hand_slot() {
        // All bits set: the sweep clears every bit and comes back to slot 0
        let mut replacer = full_clock(&[1, 2, 3]);
        assert_eq!(replacer.hand(), 0);

        assert_eq!(replacer.replace(PageId(4), 3, &[]), Some(PageId(1)));
        assert_eq!(
            replacer.snapshot(),
            vec![PageId(4), PageId(2), PageId(3)]
        );
        assert_eq!(replacer.hand(), 1);
        assert_eq!(replacer.reference_bit(PageId(4)), Some(true));
        assert_eq!(replacer.reference_bit(PageId(2)), Some(false));
        assert_eq!(replacer.reference_bit(PageId(3)), Some(false));
    }

    #[test]
    fn test_clock_second_chance() {
        let mut replacer = full_clock(&[1, 2, 3]);
        replacer.replace(PageId(4), 3, &[]); // [4*, 2, 3], hand -> 1

        // Referencing 2 saves it from the next sweep
        replacer.record_hit(PageId(2), 4);
        assert_eq!(replacer.replace(PageId(5), 5, &[]), Some(PageId(3)));
        assert_eq!(
            replacer.snapshot(),
            vec![PageId(4), PageId(2), PageId(5)]
        );
        assert_eq!(replacer.reference_bit(PageId(2)), Some(false));
        assert_eq!(replacer.hand(), 0);
    }

    #[test]
    fn test_clock_single_frame() {
        let mut replacer = full_clock(&[7]);
        assert_eq!(replacer.replace(PageId(8), 1, &[]), Some(PageId(7)));
        assert_eq!(replacer.hand(), 0);
        assert_eq!(replacer.snapshot(), vec![PageId(8)]);
    }

    #[test]
    fn test_clock_bit_of_absent_page() {
        let replacer = full_clock(&[1]);
        assert_eq!(replacer.reference_bit(PageId(2)), None);
    }
}
