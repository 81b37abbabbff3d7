//! View tree produced by components
//!
//! Deliberately small: elements, text, links and buttons. The host turns it
//! into whatever it displays; `Display` writes HTML.

use serde::{Deserialize, Serialize};
use waymark_navigation::{NavigationIntent, RelativeMode};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum View {
    Empty,
    Text { text: String },
    Element(Element),
    Link(LinkView),
    Button(ButtonView),
    Fragment { children: Vec<View> },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Element {
    pub tag: String,
    pub class: Option<String>,
    pub children: Vec<View>,
}

/// A rendered link. Keeps the path it resolved to when rendered, and its
/// unresolved target for links whose target did not resolve.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkView {
    pub to: String,
    pub label: String,
    /// Resolved path without the basename; `None` when the target could not be resolved
    pub path: Option<String>,
    /// Browser-facing URL; `None` when the target could not be resolved
    pub href: Option<String>,
    pub relative: RelativeMode,
    pub replace: bool,
    pub reload_document: bool,
    /// Length of the route chain the link was rendered in
    pub route_depth: usize,
    pub class: Option<String>,
    /// Only set for navigation links
    pub active: Option<bool>,
    pub aria_current: Option<String>,
}

impl LinkView {
    pub fn intent(&self) -> NavigationIntent {
        NavigationIntent::to(self.to.clone())
            .relative(self.relative)
            .replace(self.replace)
    }

    pub fn is_active(&self) -> bool {
        self.active.unwrap_or(false)
    }
}

/// A button that navigates programmatically when pressed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ButtonView {
    pub label: String,
    pub on_press: NavigationIntent,
    pub route_depth: usize,
}

impl View {
    pub fn text(text: impl Into<String>) -> Self {
        View::Text { text: text.into() }
    }

    pub fn fragment(children: impl IntoIterator<Item = View>) -> Self {
        View::Fragment {
            children: children.into_iter().collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, View::Empty)
    }

    fn children(&self) -> &[View] {
        match self {
            View::Element(el) => &el.children,
            View::Fragment { children } => children,
            _ => &[],
        }
    }

    /// All links in document order
    pub fn links(&self) -> Vec<&LinkView> {
        let mut links = Vec::new();
        self.walk(&mut |view| {
            if let View::Link(link) = view {
                links.push(link);
            }
        });
        links
    }

    pub fn find_link(&self, label: &str) -> Option<&LinkView> {
        self.links().into_iter().find(|l| l.label == label)
    }

    pub fn find_button(&self, label: &str) -> Option<&ButtonView> {
        let mut found = None;
        self.walk(&mut |view| {
            if let View::Button(button) = view {
                if found.is_none() && button.label == label {
                    found = Some(button);
                }
            }
        });
        found
    }

    /// Concatenated text, labels included
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.walk(&mut |view| match view {
            View::Text { text } => out.push_str(text),
            View::Link(link) => out.push_str(&link.label),
            View::Button(button) => out.push_str(&button.label),
            _ => {}
        });
        out
    }

    fn walk<'a>(&'a self, visit: &mut impl FnMut(&'a View)) {
        visit(self);
        for child in self.children() {
            child.walk(visit);
        }
    }
}

impl Element {
    pub fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_string(),
            class: None,
            children: Vec::new(),
        }
    }

    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }

    pub fn child(mut self, child: impl Into<View>) -> Self {
        self.children.push(child.into());
        self
    }

    pub fn children(mut self, children: impl IntoIterator<Item = View>) -> Self {
        self.children.extend(children);
        self
    }

    pub fn text(self, text: impl Into<String>) -> Self {
        self.child(View::text(text))
    }
}

impl From<Element> for View {
    fn from(el: Element) -> Self {
        View::Element(el)
    }
}

impl From<LinkView> for View {
    fn from(link: LinkView) -> Self {
        View::Link(link)
    }
}

impl From<ButtonView> for View {
    fn from(button: ButtonView) -> Self {
        View::Button(button)
    }
}

impl From<&str> for View {
    fn from(text: &str) -> Self {
        View::text(text)
    }
}

impl From<String> for View {
    fn from(text: String) -> Self {
        View::text(text)
    }
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

impl std::fmt::Display for View {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            View::Empty => Ok(()),
            View::Text { text } => write!(f, "{}", escape(text)),
            View::Element(el) => {
                write!(f, "<{}", el.tag)?;
                if let Some(class) = &el.class {
                    write!(f, " class=\"{}\"", escape(class))?;
                }
                write!(f, ">")?;
                for child in &el.children {
                    write!(f, "{}", child)?;
                }
                write!(f, "</{}>", el.tag)
            }
            View::Link(link) => {
                write!(f, "<a")?;
                if let Some(href) = &link.href {
                    write!(f, " href=\"{}\"", escape(href))?;
                }
                if let Some(class) = &link.class {
                    write!(f, " class=\"{}\"", escape(class))?;
                }
                if let Some(current) = &link.aria_current {
                    write!(f, " aria-current=\"{}\"", escape(current))?;
                }
                write!(f, ">{}</a>", escape(&link.label))
            }
            View::Button(button) => write!(f, "<button>{}</button>", escape(&button.label)),
            View::Fragment { children } => {
                for child in children {
                    write!(f, "{}", child)?;
                }
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn link(label: &str, to: &str) -> LinkView {
        LinkView {
            to: to.to_string(),
            label: label.to_string(),
            path: Some(to.to_string()),
            href: Some(to.to_string()),
            relative: RelativeMode::Route,
            replace: false,
            reload_document: false,
            route_depth: 1,
            class: None,
            active: None,
            aria_current: None,
        }
    }

    #[test]
    fn test_display_html() {
        let view: View = Element::new("ul")
            .with_class("list")
            .child(Element::new("li").child(link("Home & more", "/")))
            .into();

        assert_eq!(
            view.to_string(),
            r#"<ul class="list"><li><a href="/">Home &amp; more</a></li></ul>"#
        );
    }

    #[test]
    fn test_find_link_and_text() {
        let view = View::fragment([
            Element::new("h1").text("Products").into(),
            Element::new("ul")
                .child(Element::new("li").child(link("Product 1", "p1")))
                .child(Element::new("li").child(link("Product 2", "p2")))
                .into(),
        ]);

        assert_eq!(view.links().len(), 2);
        assert_eq!(view.find_link("Product 2").map(|l| l.to.as_str()), Some("p2"));
        assert!(view.find_link("Product 9").is_none());
        assert_eq!(view.text_content(), "ProductsProduct 1Product 2");
    }

    #[test]
    fn test_find_button() {
        let view = View::fragment([View::Button(ButtonView {
            label: "Navigate".to_string(),
            on_press: NavigationIntent::to("/products"),
            route_depth: 2,
        })]);

        assert_eq!(
            view.find_button("Navigate").map(|b| b.on_press.to.as_str()),
            Some("/products")
        );
        assert_eq!(view.to_string(), "<button>Navigate</button>");
    }
}
