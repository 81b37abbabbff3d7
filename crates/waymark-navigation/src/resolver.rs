//! Link resolution
//!
//! Turns a link target into an absolute path:
//! 1. `/...` → used verbatim
//! 2. relative, `RelativeMode::Route` → against the matched route chain
//! 3. relative, `RelativeMode::Path` → against the rendered URL path
//!
//! Climbing above the root with `..` is an error, never clamped.

use waymark_routes::{split_path, RouteMatch};

use crate::error::NavigationError;
use crate::target::{PathToken, RelativeMode, Target};
use crate::Result;

pub struct LinkResolver {
    /// URL prefix the application is mounted under
    basename: String,
}

impl LinkResolver {
    pub fn new() -> Self {
        Self {
            basename: "/".to_string(),
        }
    }

    pub fn with_basename(basename: impl Into<String>) -> Self {
        let mut resolver = Self::new();
        resolver.set_basename(basename.into());
        resolver
    }

    pub fn set_basename(&mut self, basename: String) {
        let trimmed = basename.trim().trim_end_matches('/');
        self.basename = if trimmed.is_empty() {
            "/".to_string()
        } else if trimmed.starts_with('/') {
            trimmed.to_string()
        } else {
            format!("/{}", trimmed)
        };
    }

    pub fn basename(&self) -> &str {
        &self.basename
    }

    /// Resolve `to` into an absolute path (with any search and hash kept).
    ///
    /// `chain` is the route chain of whatever issues the navigation: a link
    /// rendered by a layout passes the chain up to that layout only.
    pub fn resolve<C>(
        &self,
        to: &str,
        relative: RelativeMode,
        chain: &[RouteMatch<C>],
        pathname: &str,
    ) -> Result<String> {
        let target = Target::parse(to);
        if target.is_absolute() {
            return Ok(to.to_string());
        }

        // Each group is what one `..` removes
        let mut groups: Vec<Vec<String>> = match relative {
            RelativeMode::Route => chain
                .iter()
                .filter(|m| m.contributes_path())
                .map(|m| m.segments.clone())
                .collect(),
            RelativeMode::Path => split_path(pathname)
                .into_iter()
                .map(|s| vec![s.to_string()])
                .collect(),
        };

        for token in target.tokens() {
            match token {
                PathToken::Current => {}
                PathToken::Parent => {
                    if groups.pop().is_none() {
                        return Err(NavigationError::InvalidTarget {
                            target: to.to_string(),
                            reason: "'..' climbs above the root".to_string(),
                        });
                    }
                }
                PathToken::Segment(segment) => groups.push(vec![segment.to_string()]),
            }
        }

        let segments: Vec<String> = groups.into_iter().flatten().collect();
        let resolved = format!("/{}{}{}", segments.join("/"), target.search, target.hash);

        tracing::trace!(
            to = %to,
            relative = relative.as_str(),
            resolved = %resolved,
            "Resolved link target"
        );

        Ok(resolved)
    }

    /// Browser-facing URL for a resolved path: the basename prepended
    pub fn href(&self, path: &str) -> String {
        if self.basename == "/" {
            return path.to_string();
        }
        if path == "/" {
            return self.basename.clone();
        }
        format!("{}{}", self.basename, path)
    }
}

impl Default for LinkResolver {
    fn default() -> Self {
        Self::new()
    }
}
