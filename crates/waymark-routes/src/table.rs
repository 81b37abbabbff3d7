//! Route table
//!
//! Built once at startup and read-only afterwards. Matching walks the tree
//! depth first in declaration order and backtracks when a branch cannot
//! consume the whole path.

use std::sync::Arc;

use crate::entry::RouteEntry;
use crate::error::RoutesError;
use crate::matched::{join_pathname, MatchOutcome, RouteId, RouteMatch};
use crate::segment::Segment;
use crate::Result;

pub struct RouteTable<C> {
    routes: Vec<Arc<RouteEntry<C>>>,
}

impl<C> RouteTable<C> {
    pub fn new(routes: impl IntoIterator<Item = RouteEntry<C>>) -> Result<Self> {
        let routes: Vec<Arc<RouteEntry<C>>> = routes.into_iter().map(Arc::new).collect();
        Self::validate(&routes, &[], &[])?;

        tracing::debug!(top_level = routes.len(), "Built route table");

        Ok(Self { routes })
    }

    /// Single top-level entry, usually the root layout
    pub fn with_root(root: RouteEntry<C>) -> Result<Self> {
        Self::new([root])
    }

    pub fn routes(&self) -> &[Arc<RouteEntry<C>>] {
        &self.routes
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// Look an entry up by its position
    pub fn entry(&self, id: &RouteId) -> Option<&Arc<RouteEntry<C>>> {
        let (first, rest) = id.indices().split_first()?;
        let mut entry = self.routes.get(*first)?;
        for index in rest {
            entry = entry.children().get(*index)?;
        }
        Some(entry)
    }

    /// Match a URL path against the table
    pub fn match_path(&self, pathname: &str) -> MatchOutcome<C> {
        let url = split_path(pathname);
        let mut chain = Vec::new();
        let mut partial = Vec::new();

        if Self::match_level(&self.routes, &url, 0, None, &[], &mut chain, &mut partial) {
            tracing::trace!(
                path = %pathname,
                route_id = %chain.last().map(|m| m.id.to_string()).unwrap_or_default(),
                "Matched route"
            );
            MatchOutcome::Matched(chain)
        } else {
            tracing::debug!(path = %pathname, partial_depth = partial.len(), "No route matched");
            MatchOutcome::NotFound { partial }
        }
    }

    fn match_level(
        entries: &[Arc<RouteEntry<C>>],
        url: &[&str],
        consumed: usize,
        parent: Option<&RouteId>,
        parent_prefix: &[Segment],
        chain: &mut Vec<RouteMatch<C>>,
        partial: &mut Vec<RouteMatch<C>>,
    ) -> bool {
        for (index, entry) in entries.iter().enumerate() {
            let Some((end, bindings)) = Self::match_entry(entry, url, consumed, parent_prefix)
            else {
                continue;
            };

            let id = match parent {
                Some(parent) => parent.child(index),
                None => RouteId::root(index),
            };
            let mut params = chain.last().map(|m| m.params.clone()).unwrap_or_default();
            params.extend(bindings);

            chain.push(RouteMatch {
                id: id.clone(),
                entry: Arc::clone(entry),
                params,
                segments: url[consumed..end].iter().map(|s| s.to_string()).collect(),
                pathname: join_pathname(&url[..end]),
            });

            // Prefer the deepest chain: children first, then this entry as the leaf
            let prefix = full_pattern(entry, parent_prefix);
            if Self::match_level(entry.children(), url, end, Some(&id), &prefix, chain, partial) {
                return true;
            }
            if end == url.len() {
                return true;
            }

            // Only layouts count as ancestors of an unmatched path
            if entry.is_layout() && chain.len() > partial.len() {
                *partial = chain.clone();
            }
            chain.pop();
        }

        false
    }

    /// Returns the end position in `url` and the bindings, or `None`.
    ///
    /// An absolute pattern is matched from the start of the URL. It must
    /// repeat its ancestors' patterns and cover at least the segments they
    /// already consumed.
    fn match_entry(
        entry: &RouteEntry<C>,
        url: &[&str],
        consumed: usize,
        parent_prefix: &[Segment],
    ) -> Option<(usize, Vec<(String, String)>)> {
        let pattern = entry.pattern();

        if pattern.is_absolute() {
            if !pattern.segments().starts_with(parent_prefix) {
                return None;
            }
            let (end, bindings) = pattern.match_prefix(url)?;
            if end < consumed {
                return None;
            }
            Some((end, bindings))
        } else {
            let (len, bindings) = pattern.match_prefix(&url[consumed..])?;
            Some((consumed + len, bindings))
        }
    }

    /// Checks parameter names are unique along every chain.
    fn validate(
        entries: &[Arc<RouteEntry<C>>],
        parent_params: &[String],
        parent_prefix: &[Segment],
    ) -> Result<()> {
        for entry in entries {
            let pattern = entry.pattern();
            let own = pattern.segments();

            if pattern.is_absolute() && !own.starts_with(parent_prefix) {
                tracing::warn!(
                    pattern = %pattern,
                    "Absolute route does not start with its parent's path and can never match"
                );
            }
            let full = full_pattern(entry, parent_prefix);
            // Segments not already declared by an ancestor
            let fresh = if pattern.is_absolute() {
                &own[parent_prefix.len().min(own.len())..]
            } else {
                own
            };

            let mut params = parent_params.to_vec();
            for name in fresh.iter().filter_map(|s| s.param_name()) {
                if params.iter().any(|p| p == name) {
                    let joined: Vec<String> = full.iter().map(|s| s.to_string()).collect();
                    return Err(RoutesError::DuplicateParam {
                        pattern: format!("/{}", joined.join("/")),
                        name: name.to_string(),
                    });
                }
                params.push(name.to_string());
            }

            Self::validate(entry.children(), &params, &full)?;
        }

        Ok(())
    }
}

impl<C> Clone for RouteTable<C> {
    fn clone(&self) -> Self {
        Self {
            routes: self.routes.clone(),
        }
    }
}

/// The entry's pattern joined onto its ancestors' patterns
fn full_pattern<C>(entry: &RouteEntry<C>, parent_prefix: &[Segment]) -> Vec<Segment> {
    let pattern = entry.pattern();
    if pattern.is_absolute() {
        pattern.segments().to_vec()
    } else {
        let mut full = parent_prefix.to_vec();
        full.extend_from_slice(pattern.segments());
        full
    }
}

/// Split a URL path into its non-empty segments
pub fn split_path(pathname: &str) -> Vec<&str> {
    pathname.split('/').filter(|s| !s.is_empty()).collect()
}
