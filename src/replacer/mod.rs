//! Replacement policy implementations (replacers).
//!
//! Each replacer owns the resident frame set for one run together with
//! whatever bookkeeping its policy needs:
//! - [`FifoReplacer`] - insertion-order queue
//! - [`LruReplacer`] - last-access step per page
//! - [`OptimalReplacer`] - no state, scans the remaining references
//! - [`ClockReplacer`] - per-slot reference bits and a circular hand
//!
//! The shared step loop in [`crate::engine`] drives them through the
//! [`Replacer`] trait. A replacer is created fresh for every run and is
//! never shared between runs.

mod clock;
mod fifo;
mod lru;
mod optimal;

pub use clock::ClockReplacer;
pub use fifo::FifoReplacer;
pub use lru::LruReplacer;
pub use optimal::OptimalReplacer;

use crate::common::PageId;

/// Resident-set bookkeeping for one replacement policy.
///
/// `step` arguments are 0-based positions in the reference sequence.
pub trait Replacer {
    /// Resident pages in the policy's frame order.
    fn snapshot(&self) -> Vec<PageId>;

    /// Number of resident pages.
    fn len(&self) -> usize;

    /// True if no page is resident.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// True if `page` is resident.
    fn contains(&self, page: PageId) -> bool;

    /// Record a reference to a resident page.
    fn record_hit(&mut self, page: PageId, step: usize);

    /// Load `page` into a free frame.
    fn load(&mut self, page: PageId, step: usize);

    /// Evict a victim and load `page` in its place.
    ///
    /// `upcoming` holds the references after `step`, still unprocessed.
    /// Returns the evicted page, or `None` if nothing was resident, in
    /// which case `page` is simply loaded.
    fn replace(&mut self, page: PageId, step: usize, upcoming: &[PageId]) -> Option<PageId>;
}
