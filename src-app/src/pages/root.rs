//! Root layout: navigation on every page, the active page in `<main>`

use waymark_core::{Element, RenderContext, RenderError, View};

use crate::components::main_navigation;

pub fn root_layout(cx: &RenderContext<'_>) -> Result<View, RenderError> {
    Ok(View::fragment([
        main_navigation(cx),
        Element::new("main").child(cx.outlet()).into(),
    ]))
}
