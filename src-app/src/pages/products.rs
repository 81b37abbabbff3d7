//! Product list
//!
//! Plain links rather than navigation links: following one leaves this
//! page, so there is nothing to highlight.

use waymark_core::{Element, RenderContext, RenderError, View};

pub struct Product {
    pub id: &'static str,
    pub title: &'static str,
}

// Stand-in for data a backend would provide
pub const PRODUCTS: &[Product] = &[
    Product {
        id: "p1",
        title: "Product 1",
    },
    Product {
        id: "p2",
        title: "Product 2",
    },
    Product {
        id: "p3",
        title: "Product 3",
    },
];

pub fn products_page(cx: &RenderContext<'_>) -> Result<View, RenderError> {
    let items = PRODUCTS
        .iter()
        .map(|product| Element::new("li").child(cx.link(product.id, product.title)).into());

    Ok(View::fragment([
        Element::new("h1").text("The Products Page").into(),
        Element::new("ul").children(items).into(),
    ]))
}
