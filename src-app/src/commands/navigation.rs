//! Navigation command handlers

use serde::Serialize;
use waymark_core::{
    ClickEvent, HistoryAction, LinkOutcome, Modifiers, NavigationIntent, Params, RenderStatus,
    RouterState,
};

use super::{CommandResult, ShellCommand};
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct PageInfo {
    pub location: String,
    pub routes: Vec<String>,
    pub params: Params,
    pub status: RenderStatus,
    pub action: HistoryAction,
    pub revision: u64,
    pub html: String,
}

impl From<RouterState> for PageInfo {
    fn from(state: RouterState) -> Self {
        Self {
            location: state.location.href(),
            routes: state.component_names(),
            params: state.params(),
            status: state.status,
            action: state.action,
            revision: state.revision,
            html: state.view.to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(tag = "type", content = "value")]
pub enum NavigationResult {
    /// Handled by the router; the new page
    Page(PageInfo),
    /// Left to the host as a full document load
    Document { href: String },
}

pub fn execute(state: &AppState, command: &ShellCommand) -> CommandResult<NavigationResult> {
    match command {
        ShellCommand::Open { target, replace } => open(state, target, *replace),
        ShellCommand::Click { label, modified } => click(state, label, *modified),
        ShellCommand::Press(label) => press(state, label),
        ShellCommand::Go(delta) => go(state, *delta),
        ShellCommand::Show => CommandResult::ok(NavigationResult::Page(state.router().state().into())),
        ShellCommand::Quit => CommandResult::err("quit is handled by the shell".to_string()),
    }
}

pub fn open(state: &AppState, target: &str, replace: bool) -> CommandResult<NavigationResult> {
    let intent = NavigationIntent::to(target).replace(replace);
    match state.router().navigate(&intent) {
        Ok(page) => CommandResult::ok(NavigationResult::Page(page.into())),
        Err(e) => CommandResult::err(e.to_string()),
    }
}

pub fn click(state: &AppState, label: &str, modified: bool) -> CommandResult<NavigationResult> {
    let view = state.router().view();
    let Some(link) = view.find_link(label) else {
        return CommandResult::err(format!("No link labelled {:?}", label));
    };

    let event = if modified {
        ClickEvent::primary().with_modifiers(Modifiers {
            ctrl: true,
            ..Default::default()
        })
    } else {
        ClickEvent::primary()
    };

    match state.router().activate_link(link, &event) {
        Ok(LinkOutcome::Navigated(page)) => CommandResult::ok(NavigationResult::Page(page.into())),
        Ok(LinkOutcome::Document { href }) => CommandResult::ok(NavigationResult::Document { href }),
        Err(e) => CommandResult::err(e.to_string()),
    }
}

pub fn press(state: &AppState, label: &str) -> CommandResult<NavigationResult> {
    let view = state.router().view();
    let Some(button) = view.find_button(label) else {
        return CommandResult::err(format!("No button labelled {:?}", label));
    };

    match state.router().press(button) {
        Ok(page) => CommandResult::ok(NavigationResult::Page(page.into())),
        Err(e) => CommandResult::err(e.to_string()),
    }
}

pub fn go(state: &AppState, delta: i64) -> CommandResult<NavigationResult> {
    match state.router().go(delta) {
        Ok(page) => CommandResult::ok(NavigationResult::Page(page.into())),
        Err(e) => CommandResult::err(e.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use waymark_core::Config;

    fn app() -> AppState {
        AppState::new(Config::default()).unwrap()
    }

    fn page(result: CommandResult<NavigationResult>) -> PageInfo {
        match result.data {
            Some(NavigationResult::Page(page)) => page,
            other => panic!("Expected a page, got {:?} / {:?}", other, result.error),
        }
    }

    #[test]
    fn test_tutorial_walkthrough() {
        let app = app();

        let home = page(execute(&app, &ShellCommand::Show));
        assert_eq!(home.routes, vec!["Root", "Home"]);

        let list = page(click(&app, "the list of products", false));
        assert_eq!(list.location, "/products");

        let detail = page(click(&app, "Product 2", false));
        assert_eq!(detail.routes, vec!["Root", "ProductDetail"]);
        assert_eq!(detail.params.get("productId"), Some("p2"));

        let back = page(click(&app, "Back", false));
        assert_eq!(back.location, "/products");

        let previous = page(go(&app, -1));
        assert_eq!(previous.location, "/products/p2");
        assert_eq!(previous.action, HistoryAction::Pop);
    }

    #[test]
    fn test_ctrl_click_is_document_navigation() {
        let app = app();
        let result = click(&app, "Products", true);

        assert!(matches!(
            result.data,
            Some(NavigationResult::Document { ref href }) if href == "/products"
        ));
        assert_eq!(app.router().revision(), 0);
    }

    #[test]
    fn test_errors_reported() {
        let app = app();

        let result = click(&app, "Nowhere", false);
        assert!(!result.success);

        let result = go(&app, -1);
        assert!(!result.success);
        assert!(result.error.unwrap().contains("History"));

        open(&app, "/products/p2", false);
        let result = open(&app, "../../..", false);
        assert!(!result.success);
        assert!(result.error.unwrap().contains("Invalid navigation target"));
    }

    #[test]
    fn test_page_info_serializes() {
        let app = app();
        let result = open(&app, "/products/p1", false);
        let json = serde_json::to_value(&result).unwrap();

        assert_eq!(json["success"], true);
        assert_eq!(json["data"]["type"], "Page");
        assert_eq!(json["data"]["value"]["params"]["productId"], "p1");
        assert_eq!(json["data"]["value"]["status"]["state"], "normal");
    }
}
