//! Pattern segments
//!
//! ```text
//! products   -> Literal("products")
//! :productId -> Param("productId")
//! *          -> Splat (binds the rest of the path under "*")
//! ```

use serde::{Deserialize, Serialize};

/// Parameter name a splat segment binds its value to
pub const SPLAT_PARAM: &str = "*";

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum Segment {
    /// Must equal the URL segment exactly (case-sensitive)
    Literal(String),
    /// Matches any non-empty URL segment and binds it under this name
    Param(String),
    /// Matches whatever remains of the URL, including nothing
    Splat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SegmentKind {
    Literal,
    Param,
    Splat,
}

impl Segment {
    pub fn kind(&self) -> SegmentKind {
        match self {
            Segment::Literal(_) => SegmentKind::Literal,
            Segment::Param(_) => SegmentKind::Param,
            Segment::Splat => SegmentKind::Splat,
        }
    }

    /// Name this segment binds, if any
    pub fn param_name(&self) -> Option<&str> {
        match self {
            Segment::Literal(_) => None,
            Segment::Param(name) => Some(name),
            Segment::Splat => Some(SPLAT_PARAM),
        }
    }

    /// Check a single URL segment against a literal or parameter segment.
    /// Splats are handled by the pattern since they consume many segments.
    pub fn matches(&self, url_segment: &str) -> bool {
        match self {
            Segment::Literal(lit) => lit == url_segment,
            Segment::Param(_) => !url_segment.is_empty(),
            Segment::Splat => true,
        }
    }
}

impl SegmentKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            SegmentKind::Literal => "literal",
            SegmentKind::Param => "param",
            SegmentKind::Splat => "splat",
        }
    }
}

impl std::fmt::Display for Segment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Segment::Literal(lit) => write!(f, "{}", lit),
            Segment::Param(name) => write!(f, ":{}", name),
            Segment::Splat => write!(f, "*"),
        }
    }
}

impl std::str::FromStr for Segment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err("empty segment".to_string());
        }

        if s == "*" {
            return Ok(Segment::Splat);
        }

        if let Some(name) = s.strip_prefix(':') {
            if name.is_empty() {
                return Err("parameter segment has no name".to_string());
            }
            if !name.chars().all(|c| c.is_alphanumeric() || c == '_') {
                return Err(format!("invalid parameter name: {}", name));
            }
            return Ok(Segment::Param(name.to_string()));
        }

        if s.contains('*') {
            return Err(format!("splat must be a whole segment: {}", s));
        }

        Ok(Segment::Literal(s.to_string()))
    }
}
