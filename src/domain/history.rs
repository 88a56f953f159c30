//! Linear edit history with an undo/redo cursor.

/// Ordered snapshots plus a cursor at the active one.
///
/// When non-empty the cursor is always within `0..len`; when empty there is no
/// cursor. Committing while the cursor is not at the tail truncates everything
/// after it.
#[derive(Debug, Clone, PartialEq)]
pub struct EditHistory<T> {
    snapshots: Vec<T>,
    cursor: Option<usize>,
}

impl<T> Default for EditHistory<T> {
    fn default() -> Self {
        Self { snapshots: Vec::new(), cursor: None }
    }
}

impl<T> EditHistory<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole history with a single root snapshot.
    pub fn reset(&mut self, root: T) {
        self.snapshots.clear();
        self.snapshots.push(root);
        self.cursor = Some(0);
    }

    /// Drop everything after the cursor, append `snapshot`, and move to it.
    pub fn commit(&mut self, snapshot: T) {
        let keep = self.cursor.map_or(0, |c| c + 1);
        self.snapshots.truncate(keep);
        self.snapshots.push(snapshot);
        self.cursor = Some(self.snapshots.len() - 1);
    }

    /// Step back one snapshot. Returns false at the root or when empty.
    pub fn undo(&mut self) -> bool {
        match self.cursor {
            Some(c) if c > 0 => {
                self.cursor = Some(c - 1);
                true
            }
            _ => false,
        }
    }

    /// Step forward one snapshot. Returns false at the tail or when empty.
    pub fn redo(&mut self) -> bool {
        match self.cursor {
            Some(c) if c + 1 < self.snapshots.len() => {
                self.cursor = Some(c + 1);
                true
            }
            _ => false,
        }
    }

    pub fn clear(&mut self) {
        self.snapshots.clear();
        self.cursor = None;
    }

    /// The active snapshot.
    pub fn current(&self) -> Option<&T> {
        self.cursor.and_then(|c| self.snapshots.get(c))
    }

    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    pub fn can_undo(&self) -> bool {
        matches!(self.cursor, Some(c) if c > 0)
    }

    pub fn can_redo(&self) -> bool {
        matches!(self.cursor, Some(c) if c + 1 < self.snapshots.len())
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    pub fn snapshots(&self) -> &[T] {
        &self.snapshots
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn history(items: &[&'static str]) -> EditHistory<&'static str> {
        let mut h = EditHistory::new();
        let mut iter = items.iter();
        if let Some(root) = iter.next() {
            h.reset(*root);
        }
        for item in iter {
            h.commit(*item);
        }
        h
    }

    #[test]
    fn empty_history_has_no_cursor() {
        let mut h: EditHistory<u8> = EditHistory::new();
        assert_eq!(h.cursor(), None);
        assert_eq!(h.current(), None);
        assert!(!h.undo());
        assert!(!h.redo());
    }

    #[test]
    fn reset_starts_a_single_root() {
        let mut h = history(&["A", "B", "C"]);
        h.reset("Z");
        assert_eq!(h.snapshots(), &["Z"]);
        assert_eq!(h.cursor(), Some(0));
    }

    #[test]
    fn commit_after_undo_truncates_redo_branch() {
        let mut h = history(&["A", "B", "C"]);
        assert_eq!(h.cursor(), Some(2));

        assert!(h.undo());
        assert_eq!(h.current(), Some(&"B"));

        h.commit("D");
        assert_eq!(h.snapshots(), &["A", "B", "D"]);
        assert_eq!(h.cursor(), Some(2));
        assert!(!h.redo());
    }

    #[test]
    fn boundaries_are_no_ops() {
        let mut h = history(&["A", "B"]);
        assert!(!h.redo());
        assert!(h.undo());
        assert!(!h.undo());
        assert_eq!(h.current(), Some(&"A"));
    }

    #[test]
    fn clear_removes_everything() {
        let mut h = history(&["A", "B"]);
        h.clear();
        assert!(h.is_empty());
        assert_eq!(h.cursor(), None);
        assert!(!h.can_undo());
        assert!(!h.can_redo());
    }

    proptest! {
        #[test]
        fn undo_k_times_lands_on_clamped_index(len in 1usize..20, k in 0usize..30) {
            let mut h = EditHistory::new();
            h.reset(0usize);
            for i in 1..len {
                h.commit(i);
            }
            let start = len - 1;
            for _ in 0..k {
                h.undo();
            }
            let expected = start.saturating_sub(k);
            prop_assert_eq!(h.cursor(), Some(expected));
            prop_assert_eq!(h.current(), Some(&expected));
        }

        #[test]
        fn redo_after_commit_is_a_no_op(len in 1usize..10, undos in 0usize..10) {
            let mut h = EditHistory::new();
            h.reset(0usize);
            for i in 1..len {
                h.commit(i);
            }
            for _ in 0..undos {
                h.undo();
            }
            h.commit(100);
            prop_assert!(!h.redo());
            prop_assert_eq!(h.current(), Some(&100));
        }

        #[test]
        fn cursor_stays_in_bounds(ops in proptest::collection::vec(0u8..3, 0..50)) {
            let mut h = EditHistory::new();
            h.reset(0u32);
            for (n, op) in ops.into_iter().enumerate() {
                match op {
                    0 => { h.undo(); }
                    1 => { h.redo(); }
                    _ => h.commit(n as u32 + 1),
                }
                let cursor = h.cursor().unwrap();
                prop_assert!(cursor < h.len());
            }
        }
    }
}
