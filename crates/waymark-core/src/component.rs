//! Components and the registry used by declarative route definitions

use std::collections::HashMap;
use std::sync::Arc;

use crate::context::RenderContext;
use crate::error::{CoreError, RenderError};
use crate::view::View;
use crate::Result;

/// Something a route renders. Plain functions and closures qualify:
///
/// ```ignore
/// fn home(cx: &RenderContext<'_>) -> Result<View, RenderError> { .. }
/// ```
pub trait Component: Send + Sync {
    fn render(&self, cx: &RenderContext<'_>) -> std::result::Result<View, RenderError>;
}

impl<F> Component for F
where
    F: Fn(&RenderContext<'_>) -> std::result::Result<View, RenderError> + Send + Sync,
{
    fn render(&self, cx: &RenderContext<'_>) -> std::result::Result<View, RenderError> {
        self(cx)
    }
}

/// Shared, named handle to a component
#[derive(Clone)]
pub struct ComponentRef {
    name: Arc<str>,
    component: Arc<dyn Component>,
}

impl ComponentRef {
    pub fn new(name: &str, component: impl Component + 'static) -> Self {
        Self {
            name: Arc::from(name),
            component: Arc::new(component),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn render(&self, cx: &RenderContext<'_>) -> std::result::Result<View, RenderError> {
        self.component.render(cx)
    }
}

impl std::fmt::Debug for ComponentRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("ComponentRef").field(&self.name).finish()
    }
}

/// Components by name, for route tables declared as data
#[derive(Default, Clone)]
pub struct ComponentRegistry {
    components: HashMap<String, ComponentRef>,
}

impl ComponentRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, name: &str, component: impl Component + 'static) -> &mut Self {
        self.components
            .insert(name.to_string(), ComponentRef::new(name, component));
        self
    }

    pub fn get(&self, name: &str) -> Result<ComponentRef> {
        self.components
            .get(name)
            .cloned()
            .ok_or_else(|| CoreError::UnknownComponent(name.to_string()))
    }

    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }
}
