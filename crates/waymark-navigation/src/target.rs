//! Navigation targets and intents
//!
//! A target is what a link's `to` holds: `/products`, `p1`, `../p3?tab=2`.

use serde::{Deserialize, Serialize};

/// What relative targets are resolved against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RelativeMode {
    /// The matched route chain; `..` leaves the deepest path-contributing route
    #[default]
    Route,
    /// The rendered URL path; `..` removes one URL segment
    Path,
}

impl RelativeMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            RelativeMode::Route => "route",
            RelativeMode::Path => "path",
        }
    }
}

impl std::str::FromStr for RelativeMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "route" => Ok(RelativeMode::Route),
            "path" => Ok(RelativeMode::Path),
            _ => Err(format!("Unknown relative mode: {}", s)),
        }
    }
}

/// Target split into path, search and hash
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    pub path: String,
    /// Including the leading `?`, or empty
    pub search: String,
    /// Including the leading `#`, or empty
    pub hash: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathToken<'a> {
    /// `.`
    Current,
    /// `..`
    Parent,
    Segment(&'a str),
}

impl Target {
    pub fn parse(to: &str) -> Self {
        let (rest, hash) = match to.find('#') {
            Some(idx) => to.split_at(idx),
            None => (to, ""),
        };
        let (path, search) = match rest.find('?') {
            Some(idx) => rest.split_at(idx),
            None => (rest, ""),
        };

        Self {
            path: path.to_string(),
            search: search.to_string(),
            hash: hash.to_string(),
        }
    }

    /// Targets starting at the root are used verbatim
    pub fn is_absolute(&self) -> bool {
        self.path.starts_with('/')
    }

    pub fn tokens(&self) -> impl Iterator<Item = PathToken<'_>> {
        self.path
            .split('/')
            .filter(|s| !s.is_empty())
            .map(|s| match s {
                "." => PathToken::Current,
                ".." => PathToken::Parent,
                other => PathToken::Segment(other),
            })
    }
}

/// A request to move somewhere, from a link or a programmatic call
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigationIntent {
    pub to: String,
    #[serde(default)]
    pub relative: RelativeMode,
    /// Replace the current history entry instead of pushing a new one
    #[serde(default)]
    pub replace: bool,
}

impl NavigationIntent {
    pub fn to(target: impl Into<String>) -> Self {
        Self {
            to: target.into(),
            relative: RelativeMode::Route,
            replace: false,
        }
    }

    pub fn relative(mut self, mode: RelativeMode) -> Self {
        self.relative = mode;
        self
    }

    pub fn replace(mut self, replace: bool) -> Self {
        self.replace = replace;
        self
    }
}
