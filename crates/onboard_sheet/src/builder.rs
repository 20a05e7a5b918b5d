//! # Sheet Builder
//!
//! Assembles an [`OnboardingConfig`] from caller-supplied content:
//!
//! ```
//! use onboard_sheet::{cards, Card, OnboardingConfig};
//! use onboard_ui::{Badge, Color, Text};
//!
//! let config = OnboardingConfig::builder()
//!     .tint(Color::RED)
//!     .title("Welcome")
//!     .icon(Badge::new("gamecontroller.fill", Color::RED))
//!     .cards(cards![Card::new("list.bullet", "What's New", "Fresh picks.")])
//!     .footer(Text::new("Your data stays on device.").size(11.0))
//!     .on_continue(|| println!("done"))
//!     .build();
//!
//! assert_eq!(config.cards().len(), 1);
//! ```
//!
//! Nothing is validated: an empty title or an empty card list is legal.

use crate::card::CardList;
use crate::driver::RevealDriver;
use crate::platform::FormFactor;
use crate::settings::OnboardingSettings;
use onboard_ui::{Color, EmptyView, View};
use std::fmt;

/// Callback invoked by the Continue button.
pub type ContinueCallback = Box<dyn FnMut() + Send>;

/// Everything one presentation of the sheet needs.
pub struct OnboardingConfig<I, F> {
    pub(crate) tint: Color,
    pub(crate) title: String,
    pub(crate) icon: I,
    pub(crate) cards: CardList,
    pub(crate) footer: F,
    pub(crate) on_continue: ContinueCallback,
    pub(crate) form_factor: FormFactor,
    pub(crate) settings: OnboardingSettings,
    pub(crate) driver: RevealDriver,
}

impl OnboardingConfig<EmptyView, EmptyView> {
    /// Starts a builder with no content.
    #[must_use]
    pub fn builder() -> OnboardingBuilder<EmptyView, EmptyView> {
        OnboardingBuilder::new()
    }
}

impl<I: View, F: View> OnboardingConfig<I, F> {
    /// Creates a config directly from every required part.
    pub fn new(
        tint: Color,
        title: impl Into<String>,
        icon: I,
        cards: CardList,
        footer: F,
        on_continue: impl FnMut() + Send + 'static,
    ) -> Self {
        Self {
            tint,
            title: title.into(),
            icon,
            cards,
            footer,
            on_continue: Box::new(on_continue),
            form_factor: FormFactor::default(),
            settings: OnboardingSettings::default(),
            driver: RevealDriver::default(),
        }
    }

    /// Accent color.
    #[must_use]
    pub fn tint(&self) -> Color {
        self.tint
    }

    /// Sheet title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Cards in presentation order.
    #[must_use]
    pub fn cards(&self) -> &CardList {
        &self.cards
    }

    /// Form factor the sheet lays out for.
    #[must_use]
    pub fn form_factor(&self) -> FormFactor {
        self.form_factor
    }

    /// Timings and metrics.
    #[must_use]
    pub fn settings(&self) -> &OnboardingSettings {
        &self.settings
    }
}

impl<I, F> fmt::Debug for OnboardingConfig<I, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OnboardingConfig")
            .field("tint", &self.tint)
            .field("title", &self.title)
            .field("cards", &self.cards.len())
            .field("form_factor", &self.form_factor)
            .field("driver", &self.driver)
            .finish_non_exhaustive()
    }
}

/// Type-changing builder for [`OnboardingConfig`].
///
/// Unset content renders nothing; an unset callback does nothing.
pub struct OnboardingBuilder<I, F> {
    tint: Color,
    title: String,
    icon: I,
    cards: CardList,
    footer: F,
    on_continue: ContinueCallback,
    form_factor: FormFactor,
    settings: OnboardingSettings,
    driver: RevealDriver,
}

impl OnboardingBuilder<EmptyView, EmptyView> {
    /// Empty builder, tinted blue.
    #[must_use]
    pub fn new() -> Self {
        Self {
            tint: Color::BLUE,
            title: String::new(),
            icon: EmptyView,
            cards: CardList::new(),
            footer: EmptyView,
            on_continue: Box::new(|| {}),
            form_factor: FormFactor::default(),
            settings: OnboardingSettings::default(),
            driver: RevealDriver::default(),
        }
    }
}

impl Default for OnboardingBuilder<EmptyView, EmptyView> {
    fn default() -> Self {
        Self::new()
    }
}

impl<I: View, F: View> OnboardingBuilder<I, F> {
    /// Accent color for card symbols and the Continue button.
    #[must_use]
    pub fn tint(mut self, tint: Color) -> Self {
        self.tint = tint;
        self
    }

    /// Sheet title.
    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Icon content shown at the top.
    #[must_use]
    pub fn icon<J: View>(self, icon: J) -> OnboardingBuilder<J, F> {
        OnboardingBuilder {
            tint: self.tint,
            title: self.title,
            icon,
            cards: self.cards,
            footer: self.footer,
            on_continue: self.on_continue,
            form_factor: self.form_factor,
            settings: self.settings,
            driver: self.driver,
        }
    }

    /// Feature cards, usually from [`cards!`](crate::cards).
    #[must_use]
    pub fn cards(mut self, cards: impl Into<CardList>) -> Self {
        self.cards = cards.into();
        self
    }

    /// Footer content shown above the Continue button.
    #[must_use]
    pub fn footer<G: View>(self, footer: G) -> OnboardingBuilder<I, G> {
        OnboardingBuilder {
            tint: self.tint,
            title: self.title,
            icon: self.icon,
            cards: self.cards,
            footer,
            on_continue: self.on_continue,
            form_factor: self.form_factor,
            settings: self.settings,
            driver: self.driver,
        }
    }

    /// Called every time Continue is activated; expected to dismiss the sheet.
    #[must_use]
    pub fn on_continue(mut self, callback: impl FnMut() + Send + 'static) -> Self {
        self.on_continue = Box::new(callback);
        self
    }

    /// Lays out (and times the first reveal) for this form factor.
    #[must_use]
    pub fn form_factor(mut self, form_factor: FormFactor) -> Self {
        self.form_factor = form_factor;
        self
    }

    /// Timings and metrics.
    #[must_use]
    pub fn settings(mut self, settings: OnboardingSettings) -> Self {
        self.settings = settings;
        self
    }

    /// How the reveal timeline is driven.
    #[must_use]
    pub fn driver(mut self, driver: RevealDriver) -> Self {
        self.driver = driver;
        self
    }

    /// Finishes the config.
    #[must_use]
    pub fn build(self) -> OnboardingConfig<I, F> {
        OnboardingConfig {
            tint: self.tint,
            title: self.title,
            icon: self.icon,
            cards: self.cards,
            footer: self.footer,
            on_continue: self.on_continue,
            form_factor: self.form_factor,
            settings: self.settings,
            driver: self.driver,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::Card;
    use crate::cards;
    use onboard_ui::{Symbol, Text};

    #[test]
    fn test_builder_defaults() {
        let config = OnboardingConfig::builder().build();
        assert_eq!(config.title(), "");
        assert!(config.cards().is_empty());
        assert_eq!(config.tint(), Color::BLUE);
    }

    #[test]
    fn test_builder_keeps_card_order() {
        let config = OnboardingConfig::builder()
            .icon(Symbol::new("star"))
            .footer(Text::new("fine print"))
            .cards(cards![
                Card::new("1", "one", ""),
                Card::new("2", "two", ""),
                Card::new("3", "three", ""),
            ])
            .build();

        let symbols: Vec<_> = config.cards().iter().map(Card::symbol).collect();
        assert_eq!(symbols, vec!["1", "2", "3"]);
    }

    #[test]
    fn test_new_matches_builder() {
        let config = OnboardingConfig::new(
            Color::RED,
            "Welcome",
            EmptyView,
            cards![Card::new("a", "b", "c")],
            EmptyView,
            || {},
        );
        assert_eq!(config.title(), "Welcome");
        assert_eq!(config.cards().len(), 1);
        assert!(format!("{config:?}").contains("Welcome"));
    }
}
