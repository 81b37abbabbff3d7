//! Site header with navigation links
//!
//! Both entries are navigation links so they can be highlighted. Home uses
//! `end`: every path starts with `/`, so without it Home would be active on
//! every page.

use waymark_core::{Element, RenderContext, View};

pub fn main_navigation(cx: &RenderContext<'_>) -> View {
    Element::new("header")
        .with_class("header")
        .child(
            Element::new("nav").child(
                Element::new("ul")
                    .with_class("list")
                    .child(
                        Element::new("li")
                            .child(cx.nav_link("/", "Home").end().active_class("active")),
                    )
                    .child(
                        Element::new("li")
                            .child(cx.nav_link("/products", "Products").active_class("active")),
                    ),
            ),
        )
        .into()
}

#[cfg(test)]
mod tests {
    use crate::state::AppState;
    use waymark_core::{Config, NavigationIntent};

    #[test]
    fn test_home_only_active_on_root() {
        let app = AppState::new(Config::default()).unwrap();
        let view = app.router().view();
        assert!(view.find_link("Home").unwrap().is_active());
        assert_eq!(view.find_link("Home").unwrap().aria_current.as_deref(), Some("page"));
        assert!(!view.find_link("Products").unwrap().is_active());

        let state = app
            .router()
            .navigate(&NavigationIntent::to("/products/p1"))
            .unwrap();
        assert!(!state.view.find_link("Home").unwrap().is_active());

        let products = state.view.find_link("Products").unwrap();
        assert!(products.is_active());
        assert_eq!(products.class.as_deref(), Some("active"));
    }
}
