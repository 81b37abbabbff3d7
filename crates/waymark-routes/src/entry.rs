//! Route entry data structure
//!
//! One node of the route table: a pattern, the component rendered when it
//! matches, an optional error component and the nested child entries.

use std::sync::Arc;

use crate::pattern::Pattern;
use crate::Result;

#[derive(Debug, Clone)]
pub struct RouteEntry<C> {
    pattern: Pattern,
    component: C,
    error_component: Option<C>,
    children: Vec<Arc<RouteEntry<C>>>,
}

impl<C> RouteEntry<C> {
    pub fn new(path: &str, component: C) -> Result<Self> {
        Ok(Self::with_pattern(Pattern::parse(path)?, component))
    }

    /// Entry with the empty pattern, matched when its parent's path is fully consumed
    pub fn index(component: C) -> Self {
        Self::with_pattern(Pattern::index(), component)
    }

    pub fn with_pattern(pattern: Pattern, component: C) -> Self {
        Self {
            pattern,
            component,
            error_component: None,
            children: Vec::new(),
        }
    }

    /// Declare the error component shown when this entry or a descendant fails
    pub fn with_error(mut self, error_component: C) -> Self {
        self.error_component = Some(error_component);
        self
    }

    pub fn with_children(mut self, children: impl IntoIterator<Item = RouteEntry<C>>) -> Self {
        self.children.extend(children.into_iter().map(Arc::new));
        self
    }

    pub fn child(mut self, child: RouteEntry<C>) -> Self {
        self.children.push(Arc::new(child));
        self
    }

    pub fn pattern(&self) -> &Pattern {
        &self.pattern
    }

    pub fn component(&self) -> &C {
        &self.component
    }

    pub fn error_component(&self) -> Option<&C> {
        self.error_component.as_ref()
    }

    pub fn children(&self) -> &[Arc<RouteEntry<C>>] {
        &self.children
    }

    pub fn is_index(&self) -> bool {
        !self.pattern.is_absolute() && self.pattern.is_empty() && self.children.is_empty()
    }

    pub fn is_layout(&self) -> bool {
        !self.children.is_empty()
    }
}
