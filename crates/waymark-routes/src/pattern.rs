//! Route path patterns

use crate::error::RoutesError;
use crate::segment::{Segment, SPLAT_PARAM};
use crate::Result;

/// A parsed route path such as `/`, `products` or `products/:productId`.
///
/// A leading `/` makes the pattern absolute: when nested, it is matched from
/// the start of the URL instead of after the parent's consumed segments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pattern {
    raw: String,
    absolute: bool,
    segments: Vec<Segment>,
}

impl Pattern {
    pub fn parse(raw: &str) -> Result<Self> {
        let invalid = |reason: String| RoutesError::InvalidPattern {
            pattern: raw.to_string(),
            reason,
        };

        let segments = raw
            .split('/')
            .filter(|s| !s.is_empty())
            .map(|s| s.parse::<Segment>().map_err(&invalid))
            .collect::<Result<Vec<_>>>()?;

        if let Some(pos) = segments.iter().position(|s| *s == Segment::Splat) {
            if pos != segments.len() - 1 {
                return Err(invalid("splat must be the last segment".to_string()));
            }
        }

        let pattern = Self {
            raw: raw.to_string(),
            absolute: raw.starts_with('/'),
            segments,
        };

        let mut seen = Vec::new();
        for name in pattern.param_names() {
            if seen.contains(&name) {
                return Err(RoutesError::DuplicateParam {
                    pattern: raw.to_string(),
                    name: name.to_string(),
                });
            }
            seen.push(name);
        }

        Ok(pattern)
    }

    /// The empty pattern used by index routes
    pub fn index() -> Self {
        Self {
            raw: String::new(),
            absolute: false,
            segments: Vec::new(),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn is_absolute(&self) -> bool {
        self.absolute
    }

    /// True when the pattern consumes no URL segments (`""` or `"/"`)
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn param_names(&self) -> impl Iterator<Item = &str> {
        self.segments.iter().filter_map(|s| s.param_name())
    }

    /// Match this pattern against the front of `url`.
    ///
    /// Returns the number of URL segments consumed and the parameter
    /// bindings, or `None` when a literal differs or the URL is too short.
    pub fn match_prefix(&self, url: &[&str]) -> Option<(usize, Vec<(String, String)>)> {
        let mut bindings = Vec::new();
        let mut consumed = 0;

        for segment in &self.segments {
            if *segment == Segment::Splat {
                let rest = url[consumed..].join("/");
                bindings.push((SPLAT_PARAM.to_string(), rest));
                return Some((url.len(), bindings));
            }

            let value = url.get(consumed)?;
            if !segment.matches(value) {
                return None;
            }
            if let Segment::Param(name) = segment {
                bindings.push((name.clone(), (*value).to_string()));
            }
            consumed += 1;
        }

        Some((consumed, bindings))
    }
}

impl std::fmt::Display for Pattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.raw)
    }
}

impl std::str::FromStr for Pattern {
    type Err = RoutesError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_absolute_and_relative() {
        let root = Pattern::parse("/").unwrap();
        assert!(root.is_absolute());
        assert!(root.is_empty());

        let detail = Pattern::parse("products/:productId").unwrap();
        assert!(!detail.is_absolute());
        assert_eq!(detail.segments().len(), 2);
        assert_eq!(detail.param_names().collect::<Vec<_>>(), vec!["productId"]);
    }

    #[test]
    fn test_duplicate_param_rejected() {
        let err = Pattern::parse("users/:id/posts/:id").unwrap_err();
        assert!(matches!(err, RoutesError::DuplicateParam { ref name, .. } if name == "id"));
    }

    #[test]
    fn test_splat_must_be_last() {
        assert!(Pattern::parse("files/*").is_ok());
        assert!(Pattern::parse("files/*/raw").is_err());
    }

    #[test]
    fn test_match_prefix_binds_params() {
        let pattern = Pattern::parse("products/:id").unwrap();

        let (consumed, params) = pattern.match_prefix(&["products", "p2", "reviews"]).unwrap();
        assert_eq!(consumed, 2);
        assert_eq!(params, vec![("id".to_string(), "p2".to_string())]);

        assert!(pattern.match_prefix(&["products"]).is_none());
        assert!(pattern.match_prefix(&["orders", "p2"]).is_none());
    }

    #[test]
    fn test_splat_consumes_rest() {
        let pattern = Pattern::parse("docs/*").unwrap();

        let (consumed, params) = pattern.match_prefix(&["docs", "a", "b"]).unwrap();
        assert_eq!(consumed, 3);
        assert_eq!(params, vec![("*".to_string(), "a/b".to_string())]);

        let (consumed, params) = pattern.match_prefix(&["docs"]).unwrap();
        assert_eq!(consumed, 1);
        assert_eq!(params[0].1, "");
    }

    #[test]
    fn test_repeated_slashes_ignored() {
        let pattern = Pattern::parse("products//:id/").unwrap();
        assert_eq!(pattern.segments().len(), 2);
    }
}
