//! Waymark Core
//!
//! Ties the route table and navigation crates into a working router:
//! components render into a view tree, layouts wrap their child through an
//! outlet, failures land on the nearest error component, and the `Router`
//! handles link clicks, programmatic navigation and history moves.

mod component;
mod config;
mod context;
mod definition;
mod error;
mod render;
mod router;
mod view;

pub use component::{Component, ComponentRef, ComponentRegistry};
pub use config::Config;
pub use context::{LinkBuilder, RenderContext};
pub use definition::{build_routes, RouteDefinition};
pub use error::{CoreError, RenderError, RouteError};
pub use render::{fallback_view, RenderStatus, Rendered};
pub use router::{LinkOutcome, Router, RouterState};
pub use view::{ButtonView, Element, LinkView, View};

// Re-export the building blocks
pub use waymark_navigation::{
    ClickEvent, HistoryAction, LinkResolver, Location, Modifiers, MouseButton, NavigationError,
    NavigationIntent, RelativeMode,
};
pub use waymark_routes::{Params, RouteEntry, RouteId, RouteTable, RoutesError};

pub type Result<T> = std::result::Result<T, CoreError>;

/// Route table whose entries render components
pub type Routes = RouteTable<ComponentRef>;

/// One link of a matched chain
pub type Match = waymark_routes::RouteMatch<ComponentRef>;

/// Initialize logging. `RUST_LOG` takes precedence over `default_level`.
pub fn init_logging(default_level: &str) {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}
