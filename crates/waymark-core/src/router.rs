//! Router: the navigation controller
//!
//! Owns the route table, the history and the current state. Every
//! navigation event (link click, programmatic call, history move) resolves
//! its target, updates history, rematches and re-renders while holding the
//! state lock, so events apply strictly one after another and each one
//! replaces the previous state whole.

use parking_lot::RwLock;
use std::sync::Arc;

use waymark_navigation::{
    decode_path, is_active, ClickEvent, HistoryAction, LinkResolver, Location, MemoryHistory,
    NavigationIntent, RelativeMode,
};
use waymark_routes::{MatchOutcome, Params};

use crate::config::Config;
use crate::render::{RenderStatus, Renderer};
use crate::view::{ButtonView, LinkView, View};
use crate::{Match, Result, Routes};

/// Snapshot of what is currently shown
#[derive(Debug, Clone)]
pub struct RouterState {
    pub location: Location,
    /// Decoded location path with the basename removed; what the table was
    /// matched against
    pub pathname: String,
    /// Matched chain, or the partial chain when nothing matched
    pub matches: Vec<Match>,
    pub status: RenderStatus,
    pub view: View,
    pub action: HistoryAction,
    /// Incremented by every navigation event
    pub revision: u64,
}

impl RouterState {
    /// Parameters of the deepest matched route
    pub fn params(&self) -> Params {
        self.matches
            .last()
            .map(|m| m.params.clone())
            .unwrap_or_default()
    }

    pub fn component_names(&self) -> Vec<String> {
        self.matches
            .iter()
            .map(|m| m.entry.component().name().to_string())
            .collect()
    }
}

/// What became of a link click
#[derive(Debug, Clone)]
pub enum LinkOutcome {
    /// Handled client-side without reloading the document
    Navigated(RouterState),
    /// Left to the host as a full document navigation
    Document { href: String },
}

pub struct Router {
    /// Route table, read-only after construction
    routes: Arc<Routes>,
    resolver: Arc<LinkResolver>,
    history: Arc<RwLock<MemoryHistory>>,
    state: Arc<RwLock<RouterState>>,
}

impl Router {
    pub fn new(routes: Routes, config: &Config) -> Result<Self> {
        let resolver = LinkResolver::with_basename(config.basename.clone());

        let initial = config
            .initial_entries
            .iter()
            .map(|entry| Location::parse(entry))
            .collect::<std::result::Result<Vec<_>, _>>()?;
        let history = MemoryHistory::new(initial, config.initial_index, config.history_limit);

        let state = Self::compute(&routes, &resolver, history.location().clone(), history.action(), 0);

        tracing::info!(
            path = %state.location,
            basename = %resolver.basename(),
            "Router initialized"
        );

        Ok(Self {
            routes: Arc::new(routes),
            resolver: Arc::new(resolver),
            history: Arc::new(RwLock::new(history)),
            state: Arc::new(RwLock::new(state)),
        })
    }

    // === State ===

    pub fn state(&self) -> RouterState {
        self.state.read().clone()
    }

    pub fn location(&self) -> Location {
        self.state.read().location.clone()
    }

    pub fn view(&self) -> View {
        self.state.read().view.clone()
    }

    pub fn status(&self) -> RenderStatus {
        self.state.read().status.clone()
    }

    pub fn params(&self) -> Params {
        self.state.read().params()
    }

    pub fn revision(&self) -> u64 {
        self.state.read().revision
    }

    pub fn routes(&self) -> &Routes {
        &self.routes
    }

    pub fn resolver(&self) -> &LinkResolver {
        &self.resolver
    }

    pub fn history_len(&self) -> usize {
        self.history.read().len()
    }

    pub fn can_go(&self, delta: i64) -> bool {
        self.history.read().can_go(delta)
    }

    /// Whether a link to `to` (resolved against the full chain) is active
    pub fn is_active(&self, to: &str, end: bool) -> bool {
        let state = self.state.read();
        self.resolver
            .resolve(to, RelativeMode::Route, &state.matches, &state.pathname)
            .map(|path| is_active(&path, &state.pathname, end))
            .unwrap_or(false)
    }

    // === Navigation ===

    /// Navigate relative to the full matched chain
    pub fn navigate(&self, intent: &NavigationIntent) -> Result<RouterState> {
        let mut state = self.state.write();
        let path = self.resolve_in(&state, None, intent)?;
        self.commit(&mut state, &path, intent.replace)
    }

    /// Navigate relative to the first `depth` routes of the chain, as a
    /// component at that depth would
    pub fn navigate_from(&self, depth: usize, intent: &NavigationIntent) -> Result<RouterState> {
        let mut state = self.state.write();
        let path = self.resolve_in(&state, Some(depth), intent)?;
        self.commit(&mut state, &path, intent.replace)
    }

    pub fn go(&self, delta: i64) -> Result<RouterState> {
        let mut state = self.state.write();
        let location = self.history.write().go(delta)?.clone();

        *state = Self::compute(
            &self.routes,
            &self.resolver,
            location,
            HistoryAction::Pop,
            state.revision + 1,
        );

        tracing::info!(delta, path = %state.location, revision = state.revision, "History moved");

        Ok(state.clone())
    }

    pub fn back(&self) -> Result<RouterState> {
        self.go(-1)
    }

    pub fn forward(&self) -> Result<RouterState> {
        self.go(1)
    }

    /// Handle a click on a rendered link. The link goes where it pointed
    /// when rendered, even if the router has moved on since.
    pub fn activate_link(&self, link: &LinkView, event: &ClickEvent) -> Result<LinkOutcome> {
        let mut state = self.state.write();
        let path = match &link.path {
            Some(path) => path.clone(),
            None => self.resolve_in(&state, Some(link.route_depth), &link.intent())?,
        };

        if !event.should_intercept(link.reload_document) {
            let href = self.resolver.href(&path);
            tracing::debug!(href = %href, "Link left to the host");
            return Ok(LinkOutcome::Document { href });
        }

        Ok(LinkOutcome::Navigated(self.commit(&mut state, &path, link.replace)?))
    }

    /// Handle a press on a rendered navigation button
    pub fn press(&self, button: &ButtonView) -> Result<RouterState> {
        self.navigate_from(button.route_depth, &button.on_press)
    }

    fn resolve_in(
        &self,
        state: &RouterState,
        depth: Option<usize>,
        intent: &NavigationIntent,
    ) -> Result<String> {
        let chain = match depth {
            Some(depth) => &state.matches[..depth.min(state.matches.len())],
            None => &state.matches[..],
        };

        Ok(self
            .resolver
            .resolve(&intent.to, intent.relative, chain, &state.pathname)?)
    }

    fn commit(&self, state: &mut RouterState, path: &str, replace: bool) -> Result<RouterState> {
        let location = Location::parse(&self.resolver.href(path))?;

        let (location, action) = {
            let mut history = self.history.write();
            if replace {
                history.replace(location);
            } else {
                history.push(location);
            }
            (history.location().clone(), history.action())
        };

        *state = Self::compute(&self.routes, &self.resolver, location, action, state.revision + 1);

        tracing::info!(
            path = %state.location,
            action = action.as_str(),
            revision = state.revision,
            error = state.status.is_error(),
            "Navigated"
        );

        Ok(state.clone())
    }

    fn compute(
        routes: &Routes,
        resolver: &LinkResolver,
        location: Location,
        action: HistoryAction,
        revision: u64,
    ) -> RouterState {
        // Matched, compared and handed to components decoded
        let stripped = location
            .strip_basename(resolver.basename())
            .map(|path| decode_path(&path));
        let outcome = match &stripped {
            Some(pathname) => routes.match_path(pathname),
            None => MatchOutcome::NotFound {
                partial: Vec::new(),
            },
        };
        let pathname = stripped.unwrap_or_else(|| decode_path(&location.pathname));

        let rendered = Renderer {
            location: &location,
            pathname: &pathname,
            resolver,
        }
        .render(&outcome);

        RouterState {
            location,
            pathname,
            matches: outcome.into_matches(),
            status: rendered.status,
            view: rendered.view,
            action,
            revision,
        }
    }
}

impl Clone for Router {
    fn clone(&self) -> Self {
        Self {
            routes: Arc::clone(&self.routes),
            resolver: Arc::clone(&self.resolver),
            history: Arc::clone(&self.history),
            state: Arc::clone(&self.state),
        }
    }
}
