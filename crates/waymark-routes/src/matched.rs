//! Match results

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::Arc;

use crate::entry::RouteEntry;

/// Position of an entry in the table, e.g. `0-2` for the third child of the
/// first top-level entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct RouteId(Vec<usize>);

impl RouteId {
    pub fn root(index: usize) -> Self {
        Self(vec![index])
    }

    pub fn child(&self, index: usize) -> Self {
        let mut path = self.0.clone();
        path.push(index);
        Self(path)
    }

    pub fn depth(&self) -> usize {
        self.0.len()
    }

    pub fn indices(&self) -> &[usize] {
        &self.0
    }
}

impl std::fmt::Display for RouteId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let parts: Vec<String> = self.0.iter().map(|i| i.to_string()).collect();
        write!(f, "{}", parts.join("-"))
    }
}

/// Parameter values bound while matching, keyed by declared name
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Params(BTreeMap<String, String>);

impl Params {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub(crate) fn extend(&mut self, bindings: Vec<(String, String)>) {
        self.0.extend(bindings);
    }
}

impl FromIterator<(String, String)> for Params {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// One link of a matched route chain
#[derive(Debug)]
pub struct RouteMatch<C> {
    pub id: RouteId,
    pub entry: Arc<RouteEntry<C>>,
    /// Parameters accumulated from the root down to this entry
    pub params: Params,
    /// URL segments this entry's pattern consumed
    pub segments: Vec<String>,
    /// URL path matched from the root through this entry
    pub pathname: String,
}

impl<C> RouteMatch<C> {
    /// True when this entry consumed at least one URL segment
    pub fn contributes_path(&self) -> bool {
        !self.segments.is_empty()
    }
}

impl<C> Clone for RouteMatch<C> {
    fn clone(&self) -> Self {
        Self {
            id: self.id.clone(),
            entry: Arc::clone(&self.entry),
            params: self.params.clone(),
            segments: self.segments.clone(),
            pathname: self.pathname.clone(),
        }
    }
}

/// Result of matching a path against the table
#[derive(Debug)]
pub enum MatchOutcome<C> {
    /// Complete chain from a top-level entry down to the deepest match
    Matched(Vec<RouteMatch<C>>),
    /// Nothing matched; `partial` holds the deepest chain of layout entries
    /// whose patterns matched a prefix of the path, used to find an error
    /// component
    NotFound { partial: Vec<RouteMatch<C>> },
}

impl<C> MatchOutcome<C> {
    pub fn is_match(&self) -> bool {
        matches!(self, MatchOutcome::Matched(_))
    }

    /// The chain, complete or partial
    pub fn matches(&self) -> &[RouteMatch<C>] {
        match self {
            MatchOutcome::Matched(chain) => chain,
            MatchOutcome::NotFound { partial } => partial,
        }
    }

    pub fn into_matches(self) -> Vec<RouteMatch<C>> {
        match self {
            MatchOutcome::Matched(chain) => chain,
            MatchOutcome::NotFound { partial } => partial,
        }
    }

    /// Parameters of the deepest entry, empty when nothing matched
    pub fn params(&self) -> Params {
        self.matches()
            .last()
            .map(|m| m.params.clone())
            .unwrap_or_default()
    }
}

/// Build an absolute path from segments
pub(crate) fn join_pathname<S: AsRef<str>>(segments: &[S]) -> String {
    let parts: Vec<&str> = segments.iter().map(|s| s.as_ref()).collect();
    format!("/{}", parts.join("/"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_id_display() {
        let id = RouteId::root(0).child(2).child(1);
        assert_eq!(id.to_string(), "0-2-1");
        assert_eq!(id.depth(), 3);
    }

    #[test]
    fn test_join_pathname() {
        assert_eq!(join_pathname::<&str>(&[]), "/");
        assert_eq!(join_pathname(&["products", "p2"]), "/products/p2");
    }
}
