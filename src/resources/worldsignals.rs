//! Global signal storage resource.
//!
//! The [`WorldSignals`] resource provides a world-wide signal map for
//! cross-system communication without entity queries.
//!
//! Use cases include:
//! - Storing which content panel is open (`"panel"` string)
//! - Global flags like `"controls_hint"` or `"quit_game"`

use bevy_ecs::prelude::Resource;
use rustc_hash::{FxHashMap, FxHashSet};

/// Global signal storage for cross-system communication.
#[derive(Debug, Clone, Default, Resource)]
pub struct WorldSignals {
    /// String signals addressed by string keys.
    pub strings: FxHashMap<String, String>,
    /// Presence-only boolean flags; a key being present means "true".
    pub flags: FxHashSet<String>,
}

impl WorldSignals {
    /// Set a string signal value.
    pub fn set_string(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.strings.insert(key.into(), value.into());
    }
    /// Get a string signal by key.
    pub fn get_string(&self, key: &str) -> Option<&String> {
        self.strings.get(key)
    }
    /// Remove a string signal by key.
    pub fn remove_string(&mut self, key: &str) -> Option<String> {
        self.strings.remove(key)
    }
    /// Mark a flag as present/true.
    pub fn set_flag(&mut self, key: impl Into<String>) {
        self.flags.insert(key.into());
    }
    /// Remove a flag (make it false/absent).
    pub fn clear_flag(&mut self, key: &str) {
        self.flags.remove(key);
    }
    /// Check whether a flag is present/true.
    pub fn has_flag(&self, key: &str) -> bool {
        self.flags.contains(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_are_presence_based() {
        let mut signals = WorldSignals::default();
        assert!(!signals.has_flag("quit_game"));
        signals.set_flag("quit_game");
        assert!(signals.has_flag("quit_game"));
        signals.clear_flag("quit_game");
        assert!(!signals.has_flag("quit_game"));
    }

    #[test]
    fn strings_round_trip() {
        let mut signals = WorldSignals::default();
        signals.set_string("panel", "work");
        assert_eq!(signals.get_string("panel").map(String::as_str), Some("work"));
        assert_eq!(signals.remove_string("panel"), Some("work".to_string()));
        assert!(signals.get_string("panel").is_none());
    }
}
