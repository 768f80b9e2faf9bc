//! Selection queue for batch viewing.

use super::FileTarget;
use crate::core::error::SelectionError;

/// Ordered queue of files chosen for multi-file viewing plus a focus index.
///
/// `focus` always addresses an entry while the queue is non-empty, and paths
/// are unique within the queue.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SelectionQueue {
    items: Vec<FileTarget>,
    focus: usize,
}

impl SelectionQueue {
    /// Build a queue from `items`, dropping repeated paths, focused on the
    /// first entry.
    pub fn new(items: impl IntoIterator<Item = FileTarget>) -> Self {
        let mut queue = Self::default();
        for item in items {
            if !queue.contains(&item.path) {
                queue.items.push(item);
            }
        }
        queue
    }

    pub fn items(&self) -> &[FileTarget] {
        &self.items
    }

    pub fn focus(&self) -> usize {
        self.focus
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Multi-select mode: more than one file queued.
    pub fn is_active(&self) -> bool {
        self.items.len() > 1
    }

    /// At least one file queued.
    pub fn is_present(&self) -> bool {
        !self.items.is_empty()
    }

    pub fn contains(&self, path: &str) -> bool {
        self.items.iter().any(|item| item.path == path)
    }

    /// The focused entry, if any.
    pub fn focused(&self) -> Option<&FileTarget> {
        self.items.get(self.focus)
    }

    /// Add `target` when absent, remove it when present.
    ///
    /// Returns whether the file is queued afterwards.
    pub fn toggle(&mut self, target: FileTarget) -> bool {
        if self.remove(&target.path) {
            false
        } else {
            self.items.push(target);
            true
        }
    }

    /// Remove the entry at `path`, keeping focus on the same file when it
    /// survives. Returns whether anything was removed.
    pub fn remove(&mut self, path: &str) -> bool {
        let Some(index) = self.items.iter().position(|item| item.path == path) else {
            return false;
        };
        self.items.remove(index);
        if index < self.focus {
            self.focus -= 1;
        }
        if self.focus >= self.items.len() {
            self.focus = self.items.len().saturating_sub(1);
        }
        true
    }

    /// Focus the entry at `index`.
    pub fn set_focus(&mut self, index: usize) -> Result<(), SelectionError> {
        if index >= self.items.len() {
            return Err(SelectionError::FocusOutOfBounds {
                index,
                len: self.items.len(),
            });
        }
        self.focus = index;
        Ok(())
    }

    /// Move focus forward, wrapping to the first entry.
    pub fn focus_next(&mut self) {
        if !self.items.is_empty() {
            self.focus = (self.focus + 1) % self.items.len();
        }
    }

    /// Move focus backward, wrapping to the last entry.
    pub fn focus_prev(&mut self) {
        if !self.items.is_empty() {
            self.focus = (self.focus + self.items.len() - 1) % self.items.len();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn queue(paths: &[&str]) -> SelectionQueue {
        SelectionQueue::new(paths.iter().map(|p| FileTarget::from_path(p)))
    }

    #[test]
    fn test_presence_and_activity() {
        let empty = SelectionQueue::default();
        assert!(!empty.is_present());
        assert!(!empty.is_active());
        assert!(empty.focused().is_none());

        let single = queue(&["a.mp3"]);
        assert!(single.is_present());
        assert!(!single.is_active());

        let multi = queue(&["a.mp3", "b.mp3"]);
        assert!(multi.is_present());
        assert!(multi.is_active());
        assert_eq!(multi.focused().map(|t| t.path.as_str()), Some("a.mp3"));
    }

    #[test]
    fn test_new_drops_duplicates() {
        let q = queue(&["a.mp3", "b.mp3", "a.mp3"]);
        assert_eq!(q.len(), 2);
    }

    #[test]
    fn test_toggle() {
        let mut q = SelectionQueue::default();
        assert!(q.toggle(FileTarget::from_path("a.png")));
        assert!(q.toggle(FileTarget::from_path("b.png")));
        assert!(!q.toggle(FileTarget::from_path("a.png")));
        assert_eq!(q.len(), 1);
        assert!(q.contains("b.png"));
    }

    #[test]
    fn test_remove_keeps_focus_on_same_file() {
        let mut q = queue(&["a", "b", "c"]);
        q.set_focus(2).unwrap();
        assert!(q.remove("a"));
        assert_eq!(q.focused().unwrap().path, "c");
        assert_eq!(q.focus(), 1);
    }

    #[test]
    fn test_remove_focused_last_clamps() {
        let mut q = queue(&["a", "b", "c"]);
        q.set_focus(2).unwrap();
        assert!(q.remove("c"));
        assert_eq!(q.focus(), 1);
        assert_eq!(q.focused().unwrap().path, "b");

        assert!(q.remove("a"));
        assert!(q.remove("b"));
        assert_eq!(q.focus(), 0);
        assert!(q.is_empty());
        assert!(!q.remove("b"));
    }

    #[test]
    fn test_set_focus_out_of_bounds() {
        let mut q = queue(&["a", "b"]);
        assert_eq!(
            q.set_focus(2),
            Err(SelectionError::FocusOutOfBounds { index: 2, len: 2 })
        );
        assert_eq!(q.focus(), 0);
    }

    #[test]
    fn test_focus_cycling_wraps() {
        let mut q = queue(&["a", "b", "c"]);
        q.focus_prev();
        assert_eq!(q.focus(), 2);
        q.focus_next();
        assert_eq!(q.focus(), 0);
        q.focus_next();
        assert_eq!(q.focus(), 1);

        let mut empty = SelectionQueue::default();
        empty.focus_next();
        empty.focus_prev();
        assert_eq!(empty.focus(), 0);
    }
}
