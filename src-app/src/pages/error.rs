//! Error page, declared on the root route

use waymark_core::{Element, RenderContext, RenderError, RouteError, View};

use crate::components::main_navigation;

pub fn error_page(cx: &RenderContext<'_>) -> Result<View, RenderError> {
    let message = match cx.route_error() {
        Some(RouteError::NotFound { .. }) | None => "Could not find this page!".to_string(),
        Some(RouteError::Render { message, .. }) => message.clone(),
    };

    Ok(View::fragment([
        main_navigation(cx),
        Element::new("main")
            .child(Element::new("h1").text("An error occurred!"))
            .child(Element::new("p").text(message))
            .into(),
    ]))
}

#[cfg(test)]
mod tests {
    use crate::state::AppState;
    use waymark_core::{Config, NavigationIntent, RenderStatus};

    #[test]
    fn test_unknown_path() {
        let app = AppState::new(Config::default()).unwrap();
        let state = app.router().navigate(&NavigationIntent::to("/unknown")).unwrap();

        assert!(matches!(
            state.status,
            RenderStatus::Error { boundary: Some(ref id), .. } if id.to_string() == "0"
        ));
        let text = state.view.text_content();
        assert!(text.contains("An error occurred!"));
        assert!(text.contains("Could not find this page!"));
        // Navigation still works from the error page
        assert!(state.view.find_link("Home").is_some());
    }
}
