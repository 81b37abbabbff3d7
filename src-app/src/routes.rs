//! The application's route table
//!
//! Declared two equivalent ways: with the entry builder, and as data
//! (`routes.json`) resolved through a component registry.

use waymark_core::{
    build_routes, ComponentRef, ComponentRegistry, Result, RouteDefinition, RouteEntry,
    RouteTable, Routes,
};

use crate::pages::{error_page, home_page, product_detail_page, products_page, root_layout};

const ROUTE_DEFINITIONS: &str = include_str!("routes.json");

pub fn app_routes() -> Result<Routes> {
    let root = RouteEntry::new("/", ComponentRef::new("Root", root_layout))?
        .with_error(ComponentRef::new("Error", error_page))
        .with_children([
            RouteEntry::index(ComponentRef::new("Home", home_page)),
            RouteEntry::new("products", ComponentRef::new("Products", products_page))?,
            RouteEntry::new(
                "products/:productId",
                ComponentRef::new("ProductDetail", product_detail_page),
            )?,
        ]);

    Ok(RouteTable::with_root(root)?)
}

pub fn registry() -> ComponentRegistry {
    let mut registry = ComponentRegistry::new();
    registry
        .register("Root", root_layout)
        .register("Error", error_page)
        .register("Home", home_page)
        .register("Products", products_page)
        .register("ProductDetail", product_detail_page);
    registry
}

pub fn declared_routes() -> Result<Routes> {
    build_routes(RouteDefinition::from_json(ROUTE_DEFINITIONS)?, &registry())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chain(routes: &Routes, path: &str) -> (bool, Vec<String>, Vec<String>) {
        let outcome = routes.match_path(path);
        let names = outcome
            .matches()
            .iter()
            .map(|m| m.entry.component().name().to_string())
            .collect();
        let ids = outcome.matches().iter().map(|m| m.id.to_string()).collect();
        (outcome.is_match(), names, ids)
    }

    #[test]
    fn test_builder_and_declaration_agree() {
        let built = app_routes().unwrap();
        let declared = declared_routes().unwrap();

        for path in ["/", "/products", "/products/p2", "/unknown", "/products/p2/x"] {
            assert_eq!(chain(&built, path), chain(&declared, path), "path {}", path);
        }
    }

    #[test]
    fn test_detail_chain() {
        let routes = app_routes().unwrap();
        let outcome = routes.match_path("/products/p2");

        let (matched, names, _) = chain(&routes, "/products/p2");
        assert!(matched);
        assert_eq!(names, vec!["Root", "ProductDetail"]);
        assert_eq!(outcome.params().get("productId"), Some("p2"));
    }

    #[test]
    fn test_unknown_keeps_root_for_error_page() {
        let routes = app_routes().unwrap();
        let (matched, names, _) = chain(&routes, "/unknown");
        assert!(!matched);
        assert_eq!(names, vec!["Root"]);
    }
}
