//! Render context handed to components

use waymark_navigation::{is_active, LinkResolver, Location, NavigationIntent, RelativeMode};
use waymark_routes::{Params, RouteId};

use crate::error::RouteError;
use crate::view::{ButtonView, LinkView, View};
use crate::Match;

pub struct RenderContext<'a> {
    location: &'a Location,
    /// Basename-stripped path the table was matched against
    pathname: &'a str,
    /// Chain from the root down to the route being rendered
    matches: &'a [Match],
    outlet: Option<View>,
    error: Option<&'a RouteError>,
    resolver: &'a LinkResolver,
}

impl<'a> RenderContext<'a> {
    pub(crate) fn new(
        location: &'a Location,
        pathname: &'a str,
        matches: &'a [Match],
        resolver: &'a LinkResolver,
    ) -> Self {
        Self {
            location,
            pathname,
            matches,
            outlet: None,
            error: None,
            resolver,
        }
    }

    pub(crate) fn with_outlet(mut self, outlet: Option<View>) -> Self {
        self.outlet = outlet;
        self
    }

    pub(crate) fn with_error(mut self, error: &'a RouteError) -> Self {
        self.error = Some(error);
        self
    }

    pub fn location(&self) -> &Location {
        self.location
    }

    pub fn pathname(&self) -> &str {
        self.pathname
    }

    pub fn matches(&self) -> &[Match] {
        self.matches
    }

    pub fn route_id(&self) -> Option<&RouteId> {
        self.matches.last().map(|m| &m.id)
    }

    /// Parameters bound from the root down to this route
    pub fn params(&self) -> Params {
        self.matches
            .last()
            .map(|m| m.params.clone())
            .unwrap_or_default()
    }

    pub fn param(&self, name: &str) -> Option<String> {
        self.matches
            .last()
            .and_then(|m| m.params.get(name))
            .map(str::to_string)
    }

    /// The child route's view; empty for leaf routes and error components
    pub fn outlet(&self) -> View {
        self.outlet.clone().unwrap_or(View::Empty)
    }

    /// Set when rendering an error component
    pub fn route_error(&self) -> Option<&RouteError> {
        self.error
    }

    pub fn link(&self, to: &str, label: &str) -> LinkBuilder<'_, 'a> {
        LinkBuilder::new(self, to, label, false)
    }

    /// Link that knows whether it points at the current location
    pub fn nav_link(&self, to: &str, label: &str) -> LinkBuilder<'_, 'a> {
        LinkBuilder::new(self, to, label, true)
    }

    /// Button navigating programmatically, relative to this route
    pub fn button(&self, label: &str, on_press: NavigationIntent) -> View {
        View::Button(ButtonView {
            label: label.to_string(),
            on_press,
            route_depth: self.matches.len(),
        })
    }

    fn resolve(&self, to: &str, relative: RelativeMode) -> Option<String> {
        match self
            .resolver
            .resolve(to, relative, self.matches, self.pathname)
        {
            Ok(path) => Some(path),
            Err(e) => {
                tracing::warn!(to = %to, error = %e, "Link target does not resolve");
                None
            }
        }
    }
}

pub struct LinkBuilder<'c, 'a> {
    cx: &'c RenderContext<'a>,
    to: String,
    label: String,
    relative: RelativeMode,
    replace: bool,
    reload_document: bool,
    nav: bool,
    end: bool,
    class: Option<String>,
    active_class: Option<String>,
}

impl<'c, 'a> LinkBuilder<'c, 'a> {
    fn new(cx: &'c RenderContext<'a>, to: &str, label: &str, nav: bool) -> Self {
        Self {
            cx,
            to: to.to_string(),
            label: label.to_string(),
            relative: RelativeMode::Route,
            replace: false,
            reload_document: false,
            nav,
            end: false,
            class: None,
            active_class: None,
        }
    }

    pub fn relative(mut self, mode: RelativeMode) -> Self {
        self.relative = mode;
        self
    }

    pub fn replace(mut self) -> Self {
        self.replace = true;
        self
    }

    /// Skip client-side routing; the host loads the whole document
    pub fn reload_document(mut self) -> Self {
        self.reload_document = true;
        self
    }

    /// Only active on an exact path match
    pub fn end(mut self) -> Self {
        self.end = true;
        self
    }

    pub fn class(mut self, class: &str) -> Self {
        self.class = Some(class.to_string());
        self
    }

    /// Class used instead of `class` while the link is active
    pub fn active_class(mut self, class: &str) -> Self {
        self.active_class = Some(class.to_string());
        self
    }

    pub fn build(self) -> View {
        let resolved = self.cx.resolve(&self.to, self.relative);

        let active = if self.nav {
            Some(
                resolved
                    .as_deref()
                    .map(|path| is_active(path, self.cx.pathname, self.end))
                    .unwrap_or(false),
            )
        } else {
            None
        };
        let is_active = active.unwrap_or(false);

        let class = if is_active {
            self.active_class.or(self.class)
        } else {
            self.class
        };

        View::Link(LinkView {
            href: resolved.as_deref().map(|path| self.cx.resolver.href(path)),
            path: resolved,
            to: self.to,
            label: self.label,
            relative: self.relative,
            replace: self.replace,
            reload_document: self.reload_document,
            route_depth: self.cx.matches.len(),
            class,
            active,
            aria_current: is_active.then(|| "page".to_string()),
        })
    }
}

impl From<LinkBuilder<'_, '_>> for View {
    fn from(builder: LinkBuilder<'_, '_>) -> Self {
        builder.build()
    }
}
