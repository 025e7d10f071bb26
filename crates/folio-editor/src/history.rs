//! Bounded, linear undo/redo history.
//!
//! Entries are whole-list deep copies of the current page's components
//! rather than inverse deltas: simpler, bounded by the cap, and immune to
//! delta-inversion bugs at the cost of memory — acceptable because pages
//! hold tens of components, not millions. Transient drag updates never
//! reach the log; the gesture owner commits once at the end.

use folio_core::Component;

/// Maximum number of snapshots retained. Older entries are evicted from
/// the front.
pub const MAX_HISTORY: usize = 50;

/// Snapshot log plus a pointer to the current entry. Entries after the
/// pointer are the redo tail, discarded on the next commit.
pub struct History {
    snapshots: Vec<Vec<Component>>,
    index: usize,
}

impl History {
    /// Seed with the initial state so the first undo returns to it.
    pub fn new(initial: &[Component]) -> Self {
        Self {
            snapshots: vec![initial.to_vec()],
            index: 0,
        }
    }

    /// Append a deep copy of the live list: truncate the redo tail, evict
    /// the oldest entry beyond the cap, and re-point at the new end.
    pub fn commit(&mut self, live: &[Component]) {
        self.snapshots.truncate(self.index + 1);
        self.snapshots.push(live.to_vec());
        if self.snapshots.len() > MAX_HISTORY {
            self.snapshots.remove(0);
            log::trace!("history cap reached, evicted oldest snapshot");
        }
        self.index = self.snapshots.len() - 1;
    }

    /// Step back one snapshot. `None` when already at the oldest entry.
    /// The returned list is an independent deep copy.
    pub fn undo(&mut self) -> Option<Vec<Component>> {
        if self.index == 0 {
            return None;
        }
        self.index -= 1;
        Some(self.snapshots[self.index].clone())
    }

    /// Step forward one snapshot. `None` when already at the newest entry.
    pub fn redo(&mut self) -> Option<Vec<Component>> {
        if self.index + 1 >= self.snapshots.len() {
            return None;
        }
        self.index += 1;
        Some(self.snapshots[self.index].clone())
    }

    /// Drop everything and re-seed. Used when the live set is replaced
    /// wholesale: page switch, active-page delete, document import.
    pub fn reset(&mut self, live: &[Component]) {
        self.snapshots = vec![live.to_vec()];
        self.index = 0;
    }

    pub fn can_undo(&self) -> bool {
        self.index > 0
    }

    pub fn can_redo(&self) -> bool {
        self.index + 1 < self.snapshots.len()
    }

    /// Number of retained snapshots (including the seed).
    pub fn depth(&self) -> usize {
        self.snapshots.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_core::{Component, ComponentPatch};

    fn one(x: f32) -> Vec<Component> {
        let mut c = Component::text("t");
        c.apply(&ComponentPatch::position(x, 0.0));
        vec![c]
    }

    #[test]
    fn undo_at_seed_is_noop() {
        let mut h = History::new(&[]);
        assert!(h.undo().is_none());
        assert!(h.redo().is_none());
    }

    #[test]
    fn commit_truncates_redo_tail() {
        let mut h = History::new(&[]);
        h.commit(&one(1.0));
        h.commit(&one(2.0));
        h.undo();
        assert!(h.can_redo());

        h.commit(&one(3.0));
        assert!(!h.can_redo());
        // seed, x=1, x=3
        assert_eq!(h.depth(), 3);
    }

    #[test]
    fn cap_evicts_oldest_and_index_stays_valid() {
        let mut h = History::new(&[]);
        for i in 0..80 {
            h.commit(&one(i as f32));
        }
        assert_eq!(h.depth(), MAX_HISTORY);

        // Walk the full undo range: exactly MAX_HISTORY - 1 steps.
        let mut steps = 0;
        while h.undo().is_some() {
            steps += 1;
        }
        assert_eq!(steps, MAX_HISTORY - 1);

        // The floor is the snapshot from i = 30; one redo lands on i = 31.
        let next = h.redo().unwrap();
        assert_eq!(next[0].x, 31.0);
    }

    #[test]
    fn snapshots_are_independent_copies() {
        let mut h = History::new(&[]);
        let live = one(5.0);
        h.commit(&live);

        let mut restored = h.undo().and_then(|_| h.redo()).unwrap();
        restored[0].x = 999.0;

        // Mutating the restored copy must not leak into the log.
        let again = h.undo().and_then(|_| h.redo()).unwrap();
        assert_eq!(again[0].x, 5.0);
    }
}
