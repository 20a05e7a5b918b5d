//! # ONBOARD UI Toolkit
//!
//! A small headless, retained-mode UI layer:
//! - Views measure themselves and emit render commands
//! - Widgets own state, react to input and are hit-tested through a tree
//! - Animations ease section transitions (fade, blur, slide)
//!
//! ## Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────────┐
//! │                     UI PIPELINE                         │
//! ├────────────────────────────────────────────────────────┤
//! │  Input State → Widget Update → Layout → Render Commands │
//! │       ↓              ↓            ↓           ↓         │
//! │  Hit Testing    Animations    View Tree    Backend      │
//! └────────────────────────────────────────────────────────┘
//! ```
//!
//! The backend (GPU, terminal, test harness) consumes one [`UIBatch`] per frame.

#![deny(unsafe_code)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod animation;
pub mod input;
pub mod layout;
pub mod render;
pub mod style;
pub mod view;
pub mod widget;

pub use animation::{Animation, BlurSlide, Easing};
pub use input::{InputState, Key, MouseButton};
pub use layout::{Alignment, Constraints, Direction, Insets, Layout, Rect};
pub use render::{RenderCommand, UIBatch, UIRenderer};
pub use style::{Color, FontWeight, Theme};
pub use view::{Badge, EmptyView, Spacer, Stack, Symbol, Text, View};
pub use widget::{Button, Widget, WidgetFlags, WidgetId, WidgetResponse, WidgetState, WidgetTree};
