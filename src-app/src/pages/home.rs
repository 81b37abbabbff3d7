//! Home page

use waymark_core::{Element, NavigationIntent, RenderContext, RenderError, View};

pub fn home_page(cx: &RenderContext<'_>) -> Result<View, RenderError> {
    Ok(View::fragment([
        Element::new("h1").text("Home Page").into(),
        Element::new("p")
            .text("Go to ")
            .child(cx.link("/products", "the list of products"))
            .into(),
        // Programmatic navigation; a link is the better fit in real pages
        Element::new("p")
            .child(cx.button("Navigate", NavigationIntent::to("/products")))
            .into(),
    ]))
}
