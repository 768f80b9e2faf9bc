//! Selection tracking.
//!
//! Keeps one [`SelectionQueue`] per listing path. The viewer only reads
//! queues (through [`SelectionTracker::track`]); listing and selection UIs
//! write them.

use std::collections::HashMap;

use crate::core::error::SelectionError;
use crate::models::{FileTarget, SelectionQueue};

/// Selection queues keyed by the listing path that spawned them.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SelectionTracker {
    queues: HashMap<String, SelectionQueue>,
}

impl SelectionTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current queue for `source` (empty when nothing is tracked).
    pub fn track(&self, source: &str) -> SelectionQueue {
        self.queues.get(source).cloned().unwrap_or_default()
    }

    /// Whether `path` is queued under `source`.
    pub fn is_selected(&self, source: &str, path: &str) -> bool {
        self.queues
            .get(source)
            .is_some_and(|queue| queue.contains(path))
    }

    /// Add or remove `target`; returns whether it is selected afterwards.
    pub fn toggle(&mut self, source: &str, target: FileTarget) -> bool {
        let queue = self.queues.entry(source.to_string()).or_default();
        let selected = queue.toggle(target);
        if queue.is_empty() {
            self.queues.remove(source);
        }
        selected
    }

    /// Replace the queue for `source`, focused on the first entry.
    pub fn select_all(&mut self, source: &str, targets: impl IntoIterator<Item = FileTarget>) {
        let queue = SelectionQueue::new(targets);
        if queue.is_empty() {
            self.queues.remove(source);
        } else {
            self.queues.insert(source.to_string(), queue);
        }
    }

    /// Focus the entry at `index` in the queue for `source`.
    pub fn focus(&mut self, source: &str, index: usize) -> Result<(), SelectionError> {
        match self.queues.get_mut(source) {
            Some(queue) => queue.set_focus(index),
            None => Err(SelectionError::FocusOutOfBounds { index, len: 0 }),
        }
    }

    pub fn focus_next(&mut self, source: &str) {
        if let Some(queue) = self.queues.get_mut(source) {
            queue.focus_next();
        }
    }

    pub fn focus_prev(&mut self, source: &str) {
        if let Some(queue) = self.queues.get_mut(source) {
            queue.focus_prev();
        }
    }

    /// Drop the queue for `source`.
    pub fn clear(&mut self, source: &str) {
        self.queues.remove(source);
    }
}

/// The file the viewer should show.
///
/// With more than one file queued the focused queue entry wins over the
/// directly opened file.
pub fn effective_target(direct: &FileTarget, queue: &SelectionQueue) -> FileTarget {
    match queue.focused() {
        Some(focused) if queue.is_active() => focused.clone(),
        _ => direct.clone(),
    }
}
