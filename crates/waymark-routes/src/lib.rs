//! Waymark Routes
//!
//! Declarative route tables for client-side routing:
//! - Patterns made of literal, `:param` and `*` segments
//! - Nested route entries with optional error components
//! - Depth-first matching of a URL path into a route chain
//!
//! The component type is generic so the table knows nothing about rendering.

mod entry;
mod error;
mod matched;
mod pattern;
mod segment;
mod table;

pub use entry::RouteEntry;
pub use error::RoutesError;
pub use matched::{MatchOutcome, Params, RouteId, RouteMatch};
pub use pattern::Pattern;
pub use segment::{Segment, SegmentKind};
pub use table::{split_path, RouteTable};

pub type Result<T> = std::result::Result<T, RoutesError>;
