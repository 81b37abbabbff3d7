//! Shared components

mod main_navigation;

pub use main_navigation::main_navigation;
