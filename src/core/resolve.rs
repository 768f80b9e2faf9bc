//! Generation guard for asynchronous renderer resolution.
//!
//! Every extension change issues a [`ResolveTicket`] carrying a fresh
//! generation. A completion is applied only if its ticket still belongs to the
//! latest generation; anything older is discarded.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

/// Issues and validates resolution tickets.
///
/// Clones share the same generation counter, so a clone moved into an async
/// task observes tickets issued later by the viewer.
#[derive(Clone, Debug, Default)]
pub struct ResolveGuard {
    generation: Arc<AtomicU64>,
}

/// Request context captured when a resolution starts.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResolveTicket {
    generation: u64,
    extension: String,
}

impl ResolveTicket {
    pub fn extension(&self) -> &str {
        &self.extension
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }
}

impl ResolveGuard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new generation for `extension`, superseding all earlier tickets.
    pub fn issue(&self, extension: &str) -> ResolveTicket {
        let generation = self.generation.fetch_add(1, Ordering::AcqRel) + 1;
        ResolveTicket {
            generation,
            extension: extension.to_string(),
        }
    }

    /// Whether `ticket` belongs to the latest generation.
    pub fn is_current(&self, ticket: &ResolveTicket) -> bool {
        self.generation.load(Ordering::Acquire) == ticket.generation
    }

    /// Pass `value` through if `ticket` is current, `None` if stale.
    pub fn accept<T>(&self, ticket: &ResolveTicket, value: T) -> Option<T> {
        self.is_current(ticket).then_some(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latest_ticket_wins() {
        let guard = ResolveGuard::new();
        let mp4 = guard.issue("mp4");
        assert!(guard.is_current(&mp4));

        let png = guard.issue("png");
        assert!(!guard.is_current(&mp4));
        assert!(guard.is_current(&png));
        assert_eq!(guard.accept(&mp4, "video"), None);
        assert_eq!(guard.accept(&png, "image"), Some("image"));
    }

    #[test]
    fn test_reissuing_same_extension_supersedes() {
        // X -> Y -> X: the first X completion must not apply.
        let guard = ResolveGuard::new();
        let first = guard.issue("mp4");
        let _middle = guard.issue("png");
        let again = guard.issue("mp4");
        assert_eq!(first.extension(), again.extension());
        assert!(!guard.is_current(&first));
        assert!(guard.is_current(&again));
    }

    #[test]
    fn test_clones_share_generation() {
        let guard = ResolveGuard::new();
        let task_guard = guard.clone();
        let ticket = guard.issue("mp3");
        assert!(task_guard.is_current(&ticket));
        guard.issue("flac");
        assert!(!task_guard.is_current(&ticket));
    }

    #[test]
    fn test_generations_increase() {
        let guard = ResolveGuard::new();
        let a = guard.issue("a");
        let b = guard.issue("b");
        assert!(b.generation() > a.generation());
    }
}
