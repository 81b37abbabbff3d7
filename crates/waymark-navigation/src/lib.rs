//! Waymark Navigation
//!
//! Everything between a user action and the route matcher:
//! - Navigation targets: absolute (`/products`) or relative (`p1`, `..`)
//! - Link resolution against the matched route chain or the rendered path
//! - Active-link checks for navigation links
//! - In-memory history with push / replace / go
//! - Click filtering (only plain primary clicks are handled client-side)

mod active;
mod error;
mod event;
mod history;
mod location;
mod resolver;
mod target;

pub use active::is_active;
pub use error::NavigationError;
pub use event::{ClickEvent, Modifiers, MouseButton};
pub use history::{HistoryAction, HistoryEntry, MemoryHistory};
pub use location::{decode_path, decode_segment, Location};
pub use resolver::LinkResolver;
pub use target::{NavigationIntent, PathToken, RelativeMode, Target};

pub type Result<T> = std::result::Result<T, NavigationError>;
