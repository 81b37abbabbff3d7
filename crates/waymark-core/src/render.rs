//! Rendering a matched chain, with error boundaries
//!
//! ```text
//! Normal ── no match / component fails ──▶ Error (until the next navigation)
//! ```
//!
//! Components render leaf to root, each layout receiving its child's view
//! as its outlet. A failure is caught by the nearest route at or above the
//! failing one that declares an error component; that component renders in
//! the route's place and the routes above it render around it as usual.

use serde::{Deserialize, Serialize};
use waymark_navigation::{LinkResolver, Location};
use waymark_routes::{MatchOutcome, RouteId};

use crate::context::RenderContext;
use crate::error::{RenderError, RouteError};
use crate::view::{Element, View};
use crate::{ComponentRef, Match};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "lowercase")]
pub enum RenderStatus {
    Normal,
    Error {
        error: RouteError,
        /// Route whose error component is shown; `None` for the built-in fallback
        boundary: Option<RouteId>,
    },
}

impl RenderStatus {
    pub fn is_error(&self) -> bool {
        matches!(self, RenderStatus::Error { .. })
    }

    pub fn error(&self) -> Option<&RouteError> {
        match self {
            RenderStatus::Normal => None,
            RenderStatus::Error { error, .. } => Some(error),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Rendered {
    pub view: View,
    pub status: RenderStatus,
}

pub(crate) struct Renderer<'a> {
    pub location: &'a Location,
    pub pathname: &'a str,
    pub resolver: &'a LinkResolver,
}

impl<'a> Renderer<'a> {
    pub fn render(&self, outcome: &MatchOutcome<ComponentRef>) -> Rendered {
        match outcome {
            MatchOutcome::Matched(chain) => match self.render_range(chain, chain.len(), None) {
                Ok(view) => Rendered {
                    view,
                    status: RenderStatus::Normal,
                },
                Err((index, e)) => {
                    let error = render_failure(&chain[index], &e);
                    self.render_error(chain, Some(index), error)
                }
            },
            MatchOutcome::NotFound { partial } => {
                let error = RouteError::NotFound {
                    pathname: self.pathname.to_string(),
                };
                self.render_error(partial, partial.len().checked_sub(1), error)
            }
        }
    }

    /// Render `chain[..end]` from the deepest route up, starting with `outlet`.
    /// On failure returns the failing index.
    fn render_range(
        &self,
        chain: &[Match],
        end: usize,
        mut outlet: Option<View>,
    ) -> Result<View, (usize, RenderError)> {
        for index in (0..end).rev() {
            let cx =
                RenderContext::new(self.location, self.pathname, &chain[..=index], self.resolver)
                    .with_outlet(outlet.take());
            let view = chain[index]
                .entry
                .component()
                .render(&cx)
                .map_err(|e| (index, e))?;
            outlet = Some(view);
        }
        Ok(outlet.unwrap_or(View::Empty))
    }

    /// `failed` is the index of the route the error belongs to, if any
    fn render_error(&self, chain: &[Match], failed: Option<usize>, error: RouteError) -> Rendered {
        let mut error = error;
        let mut search_from = failed;

        loop {
            let found = search_from.and_then(|from| {
                (0..=from)
                    .rev()
                    .find_map(|i| chain[i].entry.error_component().map(|c| (i, c)))
            });

            let Some((boundary, error_component)) = found else {
                tracing::warn!(error = %error, "No error component declared, using fallback");
                return Rendered {
                    view: fallback_view(&error),
                    status: RenderStatus::Error {
                        error,
                        boundary: None,
                    },
                };
            };

            tracing::info!(
                route_id = %chain[boundary].id,
                error = %error,
                "Rendering error component"
            );

            let result = {
                let cx = RenderContext::new(
                    self.location,
                    self.pathname,
                    &chain[..=boundary],
                    self.resolver,
                )
                .with_error(&error);
                error_component.render(&cx)
            };

            let error_view = match result {
                Ok(view) => view,
                Err(e) => {
                    // An error component cannot catch its own failure
                    error = render_failure(&chain[boundary], &e);
                    search_from = boundary.checked_sub(1);
                    continue;
                }
            };

            match self.render_range(chain, boundary, Some(error_view)) {
                Ok(view) => {
                    return Rendered {
                        view,
                        status: RenderStatus::Error {
                            error,
                            boundary: Some(chain[boundary].id.clone()),
                        },
                    }
                }
                Err((index, e)) => {
                    error = render_failure(&chain[index], &e);
                    search_from = Some(index);
                }
            }
        }
    }
}

fn render_failure(route: &Match, e: &RenderError) -> RouteError {
    tracing::warn!(route_id = %route.id, error = %e, "Route failed to render");

    RouteError::Render {
        route_id: route.id.to_string(),
        message: e.message().to_string(),
    }
}

/// Shown when no route on the chain declares an error component
pub fn fallback_view(error: &RouteError) -> View {
    let (title, detail) = match error {
        RouteError::NotFound { pathname } => (
            "404 Not Found".to_string(),
            format!("No route matches {}", pathname),
        ),
        RouteError::Render { message, .. } => {
            ("Unexpected Application Error!".to_string(), message.clone())
        }
    };

    Element::new("main")
        .child(Element::new("h1").text(title))
        .child(Element::new("p").text(detail))
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use waymark_routes::{RouteEntry, RouteTable};

    use crate::Routes;

    fn layout(cx: &RenderContext<'_>) -> Result<View, RenderError> {
        Ok(Element::new("layout").child(cx.outlet()).into())
    }

    fn page(cx: &RenderContext<'_>) -> Result<View, RenderError> {
        Ok(Element::new("page").text(cx.pathname()).into())
    }

    fn broken(_cx: &RenderContext<'_>) -> Result<View, RenderError> {
        Err(RenderError::new("boom"))
    }

    fn oops(cx: &RenderContext<'_>) -> Result<View, RenderError> {
        let message = cx.route_error().map(|e| e.to_string()).unwrap_or_default();
        Ok(Element::new("oops").text(message).into())
    }

    fn c(name: &str, f: fn(&RenderContext<'_>) -> Result<View, RenderError>) -> ComponentRef {
        ComponentRef::new(name, f)
    }

    fn table() -> Routes {
        RouteTable::with_root(
            RouteEntry::new("/", c("layout", layout))
                .unwrap()
                .with_error(c("oops", oops))
                .with_children([
                    RouteEntry::index(c("page", page)),
                    RouteEntry::new("broken", c("broken", broken)).unwrap(),
                    RouteEntry::new("nested", c("layout", layout))
                        .unwrap()
                        .with_error(c("oops", oops))
                        .child(RouteEntry::new("bad", c("broken", broken)).unwrap()),
                    RouteEntry::new("bad-boundary", c("layout", layout))
                        .unwrap()
                        .with_error(c("broken", broken))
                        .child(RouteEntry::new("x", c("broken", broken)).unwrap()),
                ]),
        )
        .unwrap()
    }

    fn render(table: &Routes, path: &str) -> Rendered {
        let location = Location::parse(path).unwrap();
        let resolver = LinkResolver::new();
        let renderer = Renderer {
            location: &location,
            pathname: path,
            resolver: &resolver,
        };
        renderer.render(&table.match_path(path))
    }

    #[test]
    fn test_layout_wraps_outlet() {
        let rendered = render(&table(), "/");
        assert_eq!(rendered.status, RenderStatus::Normal);
        assert_eq!(rendered.view.to_string(), "<layout><page>/</page></layout>");
    }

    #[test]
    fn test_not_found_uses_root_error_component() {
        let rendered = render(&table(), "/unknown");
        assert_eq!(
            rendered.view.to_string(),
            "<oops>No route matches /unknown</oops>"
        );
        assert!(matches!(
            rendered.status,
            RenderStatus::Error { error: RouteError::NotFound { .. }, boundary: Some(ref id) } if id.to_string() == "0"
        ));
    }

    #[test]
    fn test_render_failure_bubbles_to_nearest_boundary() {
        let rendered = render(&table(), "/nested/bad");
        assert_eq!(
            rendered.view.to_string(),
            "<layout><oops>Route 0-2-0 failed to render: boom</oops></layout>"
        );
        assert_eq!(
            rendered.status.error().map(|e| e.to_string()),
            Some("Route 0-2-0 failed to render: boom".to_string())
        );
    }

    #[test]
    fn test_leaf_failure_under_root_boundary() {
        let rendered = render(&table(), "/broken");
        assert!(rendered.view.to_string().starts_with("<oops>"));
    }

    #[test]
    fn test_failing_error_component_escalates() {
        let rendered = render(&table(), "/bad-boundary/x");
        assert_eq!(
            rendered.view.to_string(),
            "<oops>Route 0-3 failed to render: boom</oops>"
        );
    }

    #[test]
    fn test_no_boundary_falls_back() {
        let table = RouteTable::with_root(RouteEntry::new("/", c("page", page)).unwrap()).unwrap();

        let rendered = render(&table, "/missing");
        assert!(rendered.view.to_string().contains("404 Not Found"));
        assert!(matches!(
            rendered.status,
            RenderStatus::Error { boundary: None, .. }
        ));

        let empty: Routes = RouteTable::new(Vec::new()).unwrap();
        assert!(render(&empty, "/").status.is_error());
    }
}
