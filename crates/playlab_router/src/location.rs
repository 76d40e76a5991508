//! The host's notion of the current URL hash.

use tracing::{debug, instrument};

/// A browser-like `location.hash`.
///
/// `set_hash` behaves like assigning `location.hash`: it raises a
/// hash-change notification, which the host delivers later. `replace_hash`
/// behaves like `history.replaceState` and raises nothing.
pub trait HashLocation {
    /// Current hash including the leading `#`, or empty when unset.
    fn hash(&self) -> &str;

    /// Updates the hash and queues a change notification if it differs.
    fn set_hash(&mut self, path: &str);

    /// Updates the hash silently.
    fn replace_hash(&mut self, path: &str);

    /// Pops one pending change notification.
    fn take_change(&mut self) -> bool;
}

fn as_hash(path: &str) -> String {
    if path.starts_with('#') {
        path.to_string()
    } else {
        format!("#{}", path)
    }
}

/// In-process [`HashLocation`], for hosts without a browser and for tests.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryLocation {
    hash: String,
    pending: usize,
}

impl MemoryLocation {
    /// Creates a location with no hash.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a location already showing `hash` (e.g. a deep link).
    #[instrument]
    pub fn with_hash(hash: &str) -> Self {
        Self {
            hash: hash.to_string(),
            pending: 0,
        }
    }

    /// Number of undelivered change notifications.
    pub fn pending(&self) -> usize {
        self.pending
    }
}

impl HashLocation for MemoryLocation {
    fn hash(&self) -> &str {
        &self.hash
    }

    fn set_hash(&mut self, path: &str) {
        let next = as_hash(path);
        if next != self.hash {
            debug!(from = %self.hash, to = %next, "Hash changed");
            self.hash = next;
            self.pending += 1;
        }
    }

    fn replace_hash(&mut self, path: &str) {
        self.hash = as_hash(path);
    }

    fn take_change(&mut self) -> bool {
        if self.pending == 0 {
            return false;
        }
        self.pending -= 1;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_hash_queues_change_once() {
        let mut loc = MemoryLocation::new();
        loc.set_hash("/games/x");
        loc.set_hash("/games/x");
        assert_eq!(loc.hash(), "#/games/x");
        assert_eq!(loc.pending(), 1);
        assert!(loc.take_change());
        assert!(!loc.take_change());
    }

    #[test]
    fn test_replace_hash_is_silent() {
        let mut loc = MemoryLocation::with_hash("#/");
        loc.replace_hash("/settings");
        assert_eq!(loc.hash(), "#/settings");
        assert_eq!(loc.pending(), 0);
    }
}
