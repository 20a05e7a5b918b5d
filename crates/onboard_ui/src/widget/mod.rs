//! Widget system for UI components.
//!
//! Widgets own state, react to input and are hit-tested through a tree.

mod button;
mod core;
mod tree;

pub use button::Button;
pub use self::core::{Widget, WidgetFlags, WidgetId, WidgetResponse, WidgetState};
pub use tree::WidgetTree;
