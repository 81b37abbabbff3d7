//! In-memory navigation history

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::NavigationError;
use crate::location::Location;
use crate::Result;

/// How the current entry was reached
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HistoryAction {
    /// Moved within existing entries (back, forward, go, initial load)
    Pop,
    Push,
    Replace,
}

impl HistoryAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            HistoryAction::Pop => "pop",
            HistoryAction::Push => "push",
            HistoryAction::Replace => "replace",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub location: Location,
    pub visited_at: DateTime<Utc>,
}

impl HistoryEntry {
    fn new(location: Location) -> Self {
        Self {
            location,
            visited_at: Utc::now(),
        }
    }
}

pub struct MemoryHistory {
    entries: Vec<HistoryEntry>,
    index: usize,
    /// Maximum retained entries; the oldest are dropped first
    limit: usize,
    action: HistoryAction,
}

impl MemoryHistory {
    /// Start with the given entries, positioned at `index` (default: last).
    /// An empty list starts at `/`.
    pub fn new(initial: Vec<Location>, index: Option<usize>, limit: usize) -> Self {
        let mut entries: Vec<HistoryEntry> = initial.into_iter().map(HistoryEntry::new).collect();
        if entries.is_empty() {
            entries.push(HistoryEntry::new(Location::root()));
        }

        let last = entries.len() - 1;
        let mut history = Self {
            entries,
            index: index.unwrap_or(last).min(last),
            limit: limit.max(1),
            action: HistoryAction::Pop,
        };
        history.enforce_limit();
        history
    }

    pub fn location(&self) -> &Location {
        &self.entries[self.index].location
    }

    pub fn current(&self) -> &HistoryEntry {
        &self.entries[self.index]
    }

    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn action(&self) -> HistoryAction {
        self.action
    }

    /// Add an entry after the current one, discarding any forward entries
    pub fn push(&mut self, location: Location) {
        self.entries.truncate(self.index + 1);
        self.entries.push(HistoryEntry::new(location));
        self.index = self.entries.len() - 1;
        self.action = HistoryAction::Push;
        self.enforce_limit();

        tracing::debug!(
            path = %self.location(),
            index = self.index,
            "History push"
        );
    }

    pub fn replace(&mut self, location: Location) {
        self.entries[self.index] = HistoryEntry::new(location);
        self.action = HistoryAction::Replace;

        tracing::debug!(path = %self.location(), index = self.index, "History replace");
    }

    pub fn can_go(&self, delta: i64) -> bool {
        self.target_index(delta).is_some()
    }

    /// Move `delta` entries (negative is back). Fails without moving when
    /// that would leave the history.
    pub fn go(&mut self, delta: i64) -> Result<&Location> {
        let index = self
            .target_index(delta)
            .ok_or(NavigationError::HistoryOutOfRange { delta })?;

        self.index = index;
        self.action = HistoryAction::Pop;

        tracing::debug!(delta, index, path = %self.location(), "History pop");

        Ok(self.location())
    }

    pub fn back(&mut self) -> Result<&Location> {
        self.go(-1)
    }

    pub fn forward(&mut self) -> Result<&Location> {
        self.go(1)
    }

    fn target_index(&self, delta: i64) -> Option<usize> {
        let target = (self.index as i64).checked_add(delta)?;
        if target < 0 || target >= self.entries.len() as i64 {
            None
        } else {
            Some(target as usize)
        }
    }

    fn enforce_limit(&mut self) {
        if self.entries.len() > self.limit {
            let overflow = self.entries.len() - self.limit;
            let dropped = overflow.min(self.index);
            self.entries.drain(0..dropped);
            self.index -= dropped;
            // Forward entries beyond the limit go last
            self.entries.truncate(self.limit.max(self.index + 1));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn loc(path: &str) -> Location {
        Location::parse(path).unwrap()
    }

    fn paths(history: &MemoryHistory) -> Vec<String> {
        history
            .entries()
            .iter()
            .map(|e| e.location.pathname.clone())
            .collect()
    }

    #[test]
    fn test_push_back_forward() {
        let mut history = MemoryHistory::new(vec![loc("/")], None, 100);
        history.push(loc("/products"));
        history.push(loc("/products/p1"));
        assert_eq!(history.action(), HistoryAction::Push);

        assert_eq!(history.back().unwrap().pathname, "/products");
        assert_eq!(history.back().unwrap().pathname, "/");
        assert_eq!(history.action(), HistoryAction::Pop);
        assert!(history.back().is_err());
        assert_eq!(history.location().pathname, "/");

        assert_eq!(history.go(2).unwrap().pathname, "/products/p1");
        assert!(matches!(
            history.forward(),
            Err(NavigationError::HistoryOutOfRange { delta: 1 })
        ));
    }

    #[test]
    fn test_push_discards_forward_entries() {
        let mut history = MemoryHistory::new(vec![loc("/"), loc("/products")], None, 100);
        history.back().unwrap();
        history.push(loc("/products/p3"));

        assert_eq!(paths(&history), vec!["/", "/products/p3"]);
        assert!(!history.can_go(1));
    }

    #[test]
    fn test_replace_keeps_length() {
        let mut history = MemoryHistory::new(vec![loc("/"), loc("/products")], None, 100);
        let old_key = history.location().key.clone();
        history.replace(loc("/products/p2"));

        assert_eq!(paths(&history), vec!["/", "/products/p2"]);
        assert_ne!(history.location().key, old_key);
        assert_eq!(history.action(), HistoryAction::Replace);
    }

    #[test]
    fn test_initial_index_and_empty_start() {
        let history = MemoryHistory::new(vec![loc("/"), loc("/products")], Some(0), 100);
        assert_eq!(history.location().pathname, "/");

        let history = MemoryHistory::new(Vec::new(), None, 100);
        assert_eq!(history.len(), 1);
        assert_eq!(history.location().pathname, "/");
    }

    #[test]
    fn test_huge_delta_is_out_of_range() {
        let mut history = MemoryHistory::new(vec![loc("/"), loc("/products")], None, 100);

        assert!(!history.can_go(i64::MAX));
        assert!(matches!(
            history.go(i64::MAX),
            Err(NavigationError::HistoryOutOfRange { delta: i64::MAX })
        ));
        assert!(matches!(
            history.go(i64::MIN),
            Err(NavigationError::HistoryOutOfRange { delta: i64::MIN })
        ));
        assert_eq!(history.index(), 1);
        assert_eq!(history.location().pathname, "/products");
    }

    #[test]
    fn test_limit_drops_oldest() {
        let mut history = MemoryHistory::new(vec![loc("/")], None, 3);
        history.push(loc("/a"));
        history.push(loc("/b"));
        history.push(loc("/c"));

        assert_eq!(paths(&history), vec!["/a", "/b", "/c"]);
        assert_eq!(history.index(), 2);
        assert_eq!(history.location().pathname, "/c");
    }
}
