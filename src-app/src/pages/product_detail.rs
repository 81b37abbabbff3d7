//! Product detail, addressed by the `:productId` segment
//!
//! Ids missing from `PRODUCTS` are a render error rather than a page, so
//! the root route's error page has a failure to show besides an unknown URL.

use waymark_core::{Element, RelativeMode, RenderContext, RenderError, View};

use super::products::PRODUCTS;

pub fn product_detail_page(cx: &RenderContext<'_>) -> Result<View, RenderError> {
    let product_id = cx
        .param("productId")
        .ok_or_else(|| RenderError::new("Missing productId"))?;

    if !PRODUCTS.iter().any(|p| p.id == product_id) {
        return Err(RenderError::new(format!(
            "Could not find product {}",
            product_id
        )));
    }

    Ok(View::fragment([
        Element::new("h1").text("Product Details!").into(),
        Element::new("p").text(product_id).into(),
        // Back to the list: one URL segment up, not one route up
        Element::new("p")
            .child(cx.link("..", "Back").relative(RelativeMode::Path))
            .into(),
    ]))
}

#[cfg(test)]
mod tests {
    use crate::state::AppState;
    use waymark_core::{Config, NavigationIntent, RenderStatus, RouteError};

    #[test]
    fn test_shows_product_id() {
        let app = AppState::new(Config::default()).unwrap();
        let state = app
            .router()
            .navigate(&NavigationIntent::to("/products/p2"))
            .unwrap();

        assert_eq!(state.status, RenderStatus::Normal);
        assert!(state.view.text_content().contains("Product Details!p2"));
        assert_eq!(
            state.view.find_link("Back").unwrap().href.as_deref(),
            Some("/products")
        );
    }

    #[test]
    fn test_unknown_product_shows_error_page() {
        let app = AppState::new(Config::default()).unwrap();
        let state = app
            .router()
            .navigate(&NavigationIntent::to("/products/p9"))
            .unwrap();

        assert!(matches!(
            state.status.error(),
            Some(RouteError::Render { message, .. }) if message == "Could not find product p9"
        ));
        assert!(state.view.text_content().contains("An error occurred!"));
    }
}
