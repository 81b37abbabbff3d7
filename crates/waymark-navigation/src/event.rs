//! Link click events
//!
//! Only a plain primary click stays inside the app. Modified clicks, other
//! buttons and links opening elsewhere are left to the host, which performs
//! a full document navigation.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MouseButton {
    #[default]
    Primary,
    Middle,
    Secondary,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Modifiers {
    pub ctrl: bool,
    pub meta: bool,
    pub shift: bool,
    pub alt: bool,
}

impl Modifiers {
    pub fn any(&self) -> bool {
        self.ctrl || self.meta || self.shift || self.alt
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ClickEvent {
    pub button: MouseButton,
    pub modifiers: Modifiers,
    /// The link's `target` attribute, e.g. `_blank`
    pub target: Option<String>,
}

impl ClickEvent {
    /// Plain left click
    pub fn primary() -> Self {
        Self::default()
    }

    pub fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    pub fn with_button(mut self, button: MouseButton) -> Self {
        self.button = button;
        self
    }

    pub fn with_target(mut self, target: impl Into<String>) -> Self {
        self.target = Some(target.into());
        self
    }

    /// Whether the router should take this click instead of the host
    pub fn should_intercept(&self, reload_document: bool) -> bool {
        if reload_document || self.button != MouseButton::Primary || self.modifiers.any() {
            return false;
        }

        match self.target.as_deref() {
            None | Some("") | Some("_self") => true,
            Some(_) => false,
        }
    }
}
