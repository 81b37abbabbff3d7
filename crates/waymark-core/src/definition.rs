//! Route tables declared as data
//!
//! The object-based alternative to the `RouteEntry` builder: a JSON array
//! of `{ path, component, error_component, children }` records whose
//! component names are looked up in a `ComponentRegistry`.

use serde::{Deserialize, Serialize};
use waymark_routes::{RouteEntry, RouteTable};

use crate::component::{ComponentRef, ComponentRegistry};
use crate::{Result, Routes};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteDefinition {
    /// Omitted or empty for index and pathless layout routes
    #[serde(default)]
    pub path: String,
    pub component: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_component: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<RouteDefinition>,
}

impl RouteDefinition {
    pub fn from_json(json: &str) -> Result<Vec<Self>> {
        Ok(serde_json::from_str(json)?)
    }

    fn into_entry(self, registry: &ComponentRegistry) -> Result<RouteEntry<ComponentRef>> {
        let mut entry = RouteEntry::new(&self.path, registry.get(&self.component)?)?;

        if let Some(name) = &self.error_component {
            entry = entry.with_error(registry.get(name)?);
        }

        let children = self
            .children
            .into_iter()
            .map(|child| child.into_entry(registry))
            .collect::<Result<Vec<_>>>()?;

        Ok(entry.with_children(children))
    }
}

/// Build a route table from definitions
pub fn build_routes(definitions: Vec<RouteDefinition>, registry: &ComponentRegistry) -> Result<Routes> {
    let entries = definitions
        .into_iter()
        .map(|def| def.into_entry(registry))
        .collect::<Result<Vec<_>>>()?;

    Ok(RouteTable::new(entries)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::RenderContext;
    use crate::error::{CoreError, RenderError};
    use crate::view::View;

    fn blank(_cx: &RenderContext<'_>) -> std::result::Result<View, RenderError> {
        Ok(View::Empty)
    }

    fn registry() -> ComponentRegistry {
        let mut registry = ComponentRegistry::new();
        registry
            .register("Root", blank)
            .register("Home", blank)
            .register("Products", blank)
            .register("Error", blank);
        registry
    }

    const ROUTES: &str = r#"[
        {
            "path": "/",
            "component": "Root",
            "error_component": "Error",
            "children": [
                { "component": "Home" },
                { "path": "products", "component": "Products" }
            ]
        }
    ]"#;

    #[test]
    fn test_build_from_json() {
        let routes = build_routes(RouteDefinition::from_json(ROUTES).unwrap(), &registry()).unwrap();

        let outcome = routes.match_path("/products");
        let names: Vec<&str> = outcome
            .matches()
            .iter()
            .map(|m| m.entry.component().name())
            .collect();
        assert_eq!(names, vec!["Root", "Products"]);
        assert_eq!(
            outcome.matches()[0].entry.error_component().map(|c| c.name()),
            Some("Error")
        );
    }

    #[test]
    fn test_unknown_component_rejected() {
        let defs = RouteDefinition::from_json(r#"[{ "path": "/", "component": "Nope" }]"#).unwrap();
        assert!(matches!(
            build_routes(defs, &registry()),
            Err(CoreError::UnknownComponent(name)) if name == "Nope"
        ));
    }

    #[test]
    fn test_invalid_path_rejected() {
        let defs = RouteDefinition::from_json(r#"[{ "path": "a/*/b", "component": "Home" }]"#).unwrap();
        assert!(matches!(build_routes(defs, &registry()), Err(CoreError::Routes(_))));
    }
}
