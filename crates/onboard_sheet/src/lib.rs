//! # ONBOARD Sheet
//!
//! First-run onboarding overview: an icon, a title, a handful of feature
//! cards and a footer with a Continue button, revealed one section at a time.
//!
//! ## Reveal Timeline
//!
//! ```text
//! 0.35s  icon          (0.1s on desktop)
//! +0.2s  title
//! +0.2s  pause
//! +0.1·i card i        (card 0 right after the pause)
//! +0.2s  footer        → input accepted
//! ```
//!
//! Every step fades in, unblurs and slides up its section. The sheet ignores
//! input until the footer is shown, and only the caller dismisses it: the
//! Continue callback is expected to clear the host's presentation flag.
//!
//! ## Example
//!
//! ```rust,ignore
//! use onboard_sheet::{cards, Card, OnboardingConfig, SheetHost};
//!
//! let mut host = SheetHost::new(bounds);
//! let presented = host.presented_flag();
//! host.present(
//!     OnboardingConfig::builder()
//!         .title("Welcome")
//!         .cards(cards![Card::new("star", "Highlights", "The best bits.")])
//!         .on_continue(move || presented.store(false, Ordering::SeqCst))
//!         .build(),
//! );
//!
//! loop {
//!     host.update(&input, dt);
//!     host.render(&mut renderer);
//! }
//! ```

#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]
#![allow(clippy::module_name_repetitions)]

pub mod builder;
pub mod card;
pub mod driver;
pub mod error;
pub mod host;
pub mod platform;
pub mod reveal;
pub mod settings;
pub mod sheet;

pub use builder::{ContinueCallback, OnboardingBuilder, OnboardingConfig};
pub use card::{Card, CardId, CardList};
pub use driver::{run_reveal, spawn_reveal, RevealDriver};
pub use error::{OnboardingError, OnboardingResult};
pub use host::SheetHost;
pub use platform::{FormFactor, SheetChrome};
pub use reveal::{AnimationState, RevealPhase, RevealSequencer, RevealStep, RevealTarget};
pub use settings::{OnboardingSettings, RevealTimings, SheetMetrics};
pub use sheet::{OnboardingSheet, SheetRegion, CONTINUE_LABEL};
