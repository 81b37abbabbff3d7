//! Locations
//!
//! The part of a URL the router cares about: path, search and hash. Each
//! history entry gets its own location with a unique key.

use percent_encoding::percent_decode_str;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use url::Url;
use uuid::Uuid;

use crate::error::NavigationError;
use crate::Result;

/// Origin used to parse bare paths; never shown to anyone
const PARSE_ORIGIN: &str = "http://localhost/";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    pub pathname: String,
    /// Including the leading `?`, or empty
    pub search: String,
    /// Including the leading `#`, or empty
    pub hash: String,
    /// Unique per history entry
    pub key: String,
}

impl Location {
    /// Parse an absolute path (`/products?x=1#top`) or a full URL.
    /// Dot segments are collapsed the way a browser address bar does.
    pub fn parse(input: &str) -> Result<Self> {
        let input = input.trim();
        let invalid = |e: url::ParseError| {
            NavigationError::InvalidLocation(format!("{}: {}", input, e))
        };

        let url = if input.starts_with("http://") || input.starts_with("https://") {
            Url::parse(input).map_err(invalid)?
        } else if input.starts_with('/') || input.is_empty() {
            Url::parse(PARSE_ORIGIN)
                .and_then(|base| base.join(input))
                .map_err(invalid)?
        } else {
            return Err(NavigationError::InvalidLocation(format!(
                "{}: location must be an absolute path or URL",
                input
            )));
        };

        Ok(Self {
            pathname: url.path().to_string(),
            search: url.query().map(|q| format!("?{}", q)).unwrap_or_default(),
            hash: url.fragment().map(|f| format!("#{}", f)).unwrap_or_default(),
            key: Self::new_key(),
        })
    }

    pub fn root() -> Self {
        Self {
            pathname: "/".to_string(),
            search: String::new(),
            hash: String::new(),
            key: Self::new_key(),
        }
    }

    /// Path plus search plus hash
    pub fn href(&self) -> String {
        format!("{}{}{}", self.pathname, self.search, self.hash)
    }

    /// Strip a basename from the path. `None` when the path lies outside it.
    pub fn strip_basename(&self, basename: &str) -> Option<String> {
        let base = basename.trim_end_matches('/');
        if base.is_empty() {
            return Some(self.pathname.clone());
        }

        let rest = self.pathname.strip_prefix(base)?;
        if rest.is_empty() {
            Some("/".to_string())
        } else if rest.starts_with('/') {
            Some(rest.to_string())
        } else {
            None
        }
    }

    fn new_key() -> String {
        Uuid::new_v4().simple().to_string()
    }
}

/// Percent-decode one path segment. Invalid UTF-8 is replaced, and a segment
/// that would decode to contain `/` is kept encoded.
pub fn decode_segment(segment: &str) -> Cow<'_, str> {
    let decoded = percent_decode_str(segment).decode_utf8_lossy();
    if decoded.contains('/') {
        Cow::Borrowed(segment)
    } else {
        decoded
    }
}

/// Percent-decode a path segment by segment, as the router matches it
pub fn decode_path(path: &str) -> String {
    path.split('/')
        .map(decode_segment)
        .collect::<Vec<_>>()
        .join("/")
}

impl std::fmt::Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.href())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_path() {
        let location = Location::parse("/products?sort=asc#top").unwrap();
        assert_eq!(location.pathname, "/products");
        assert_eq!(location.search, "?sort=asc");
        assert_eq!(location.hash, "#top");
        assert_eq!(location.href(), "/products?sort=asc#top");
    }

    #[test]
    fn test_parse_full_url() {
        let location = Location::parse("https://shop.example.com/products/p2").unwrap();
        assert_eq!(location.pathname, "/products/p2");
        assert!(location.search.is_empty());
    }

    #[test]
    fn test_parse_empty_is_root() {
        assert_eq!(Location::parse("").unwrap().pathname, "/");
    }

    #[test]
    fn test_relative_input_rejected() {
        assert!(matches!(
            Location::parse("products"),
            Err(NavigationError::InvalidLocation(_))
        ));
    }

    #[test]
    fn test_keys_are_unique() {
        let a = Location::parse("/").unwrap();
        let b = Location::parse("/").unwrap();
        assert_ne!(a.key, b.key);
    }

    #[test]
    fn test_decode_path() {
        let location = Location::parse("/café/new arrivals").unwrap();
        assert_eq!(location.pathname, "/caf%C3%A9/new%20arrivals");
        assert_eq!(decode_path(&location.pathname), "/café/new arrivals");

        assert_eq!(decode_path("/a%2Fb/c"), "/a%2Fb/c");
        assert_eq!(decode_path("/"), "/");
        assert_eq!(decode_segment("100%25"), "100%");
    }

    #[test]
    fn test_strip_basename() {
        let location = Location::parse("/shop/products").unwrap();
        assert_eq!(location.strip_basename("/"), Some("/shop/products".to_string()));
        assert_eq!(location.strip_basename("/shop"), Some("/products".to_string()));
        assert_eq!(location.strip_basename("/shop/"), Some("/products".to_string()));
        assert_eq!(location.strip_basename("/sh"), None);

        let base = Location::parse("/shop").unwrap();
        assert_eq!(base.strip_basename("/shop"), Some("/".to_string()));
    }
}
