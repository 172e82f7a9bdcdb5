//! Navigation state store.
//!
//! # Responsibility
//! - Hold the console's navigation history as serializable state maps.
//! - Enforce the push-only mutation discipline the UI shell relies on.
//!
//! # Invariants
//! - History entries are appended, never removed or rewritten.
//! - All mutation happens on the UI thread; no interior mutability.

use log::info;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One navigation target: a flat map of state keys to values.
///
/// Keys are console-defined, e.g. `sudorule-entity`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NavState(BTreeMap<String, String>);

impl NavState {
    /// Creates an empty state map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a single-entry state map.
    pub fn with_entry(key: impl Into<String>, value: impl Into<String>) -> Self {
        let mut state = Self::new();
        state.insert(key, value);
        state
    }

    /// Sets one state entry.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.0.insert(key.into(), value.into());
    }

    /// Returns one state entry value.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns a stable `key=value` rendering for log lines.
    pub fn summary(&self) -> String {
        self.0
            .iter()
            .map(|(key, value)| format!("{key}={value}"))
            .collect::<Vec<_>>()
            .join(",")
    }
}

/// Push-only navigation history.
#[derive(Debug, Default)]
pub struct NavStore {
    history: Vec<NavState>,
}

impl NavStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one navigation state to the history.
    pub fn push_state(&mut self, state: NavState) {
        info!(
            "event=nav_push module=nav status=ok depth={} state={}",
            self.history.len() + 1,
            state.summary()
        );
        self.history.push(state);
    }

    /// Returns the current (most recently pushed) state.
    pub fn current(&self) -> Option<&NavState> {
        self.history.last()
    }

    /// Returns the number of history entries.
    pub fn depth(&self) -> usize {
        self.history.len()
    }

    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }

    /// Returns the full history, oldest first.
    pub fn history(&self) -> &[NavState] {
        &self.history
    }
}

#[cfg(test)]
mod tests {
    use super::{NavState, NavStore};

    #[test]
    fn push_state_appends_and_exposes_current() {
        let mut store = NavStore::new();
        assert!(store.is_empty());
        assert!(store.current().is_none());

        store.push_state(NavState::with_entry("sudorule-entity", "sudorule"));
        store.push_state(NavState::with_entry("sudorule-entity", "sudocmdgroup"));

        assert_eq!(store.depth(), 2);
        let current = store.current().expect("history should not be empty");
        assert_eq!(current.get("sudorule-entity"), Some("sudocmdgroup"));
        assert_eq!(
            store.history()[0].get("sudorule-entity"),
            Some("sudorule")
        );
    }

    #[test]
    fn summary_renders_sorted_entries() {
        let mut state = NavState::new();
        state.insert("entity", "sudocmd");
        state.insert("facet", "search");
        assert_eq!(state.summary(), "entity=sudocmd,facet=search");
    }

    #[test]
    fn state_serializes_as_flat_map() {
        let state = NavState::with_entry("sudorule-entity", "sudorule");
        let json = serde_json::to_value(&state).expect("state should serialize");
        assert_eq!(json["sudorule-entity"], "sudorule");

        let decoded: NavState =
            serde_json::from_value(json).expect("state should deserialize");
        assert_eq!(decoded, state);
    }
}
