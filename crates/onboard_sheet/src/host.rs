//! Caller-side owner of the presentation flag.
//!
//! The host presents a sheet, forwards frames to it and drops it on the first
//! frame after the flag goes false. Only the flag dismisses; the sheet itself
//! never does and Escape is ignored.

use crate::builder::OnboardingConfig;
use crate::reveal::RevealPhase;
use crate::sheet::OnboardingSheet;
use onboard_ui::{InputState, Rect, Theme, UIRenderer, View, Widget, WidgetResponse};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Presents one onboarding sheet at a time.
pub struct SheetHost<I, F> {
    presented: Arc<AtomicBool>,
    sheet: Option<OnboardingSheet<I, F>>,
    bounds: Rect,
    theme: Theme,
}

impl<I: View, F: View> SheetHost<I, F> {
    /// Creates a host for the given presentation bounds.
    #[must_use]
    pub fn new(bounds: Rect) -> Self {
        Self {
            presented: Arc::new(AtomicBool::new(false)),
            sheet: None,
            bounds,
            theme: Theme::default(),
        }
    }

    /// Sets the theme used for sheets presented from now on.
    #[must_use]
    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// Shared presentation flag. Storing `false` dismisses the sheet.
    #[must_use]
    pub fn presented_flag(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.presented)
    }

    /// Presents a sheet, replacing any sheet already shown.
    pub fn present(&mut self, config: OnboardingConfig<I, F>) {
        let cards = config.cards().len();
        let form_factor = config.form_factor();
        let mut sheet = OnboardingSheet::new(config, self.theme.clone());
        sheet.set_rect(self.bounds);
        sheet.appear();

        self.sheet = Some(sheet);
        self.presented.store(true, Ordering::SeqCst);
        tracing::info!("presenting onboarding sheet ({} cards, {:?})", cards, form_factor);
    }

    /// Resizes the presentation bounds.
    pub fn resize(&mut self, bounds: Rect) {
        self.bounds = bounds;
        if let Some(sheet) = &mut self.sheet {
            sheet.set_rect(bounds);
        }
    }

    /// Runs one frame. Tears the sheet down once the flag is false.
    pub fn update(&mut self, input: &InputState, dt: f32) -> WidgetResponse {
        if self.sheet.is_some() && !self.presented.load(Ordering::SeqCst) {
            self.sheet = None;
            tracing::info!("onboarding sheet dismissed");
        }
        match &mut self.sheet {
            Some(sheet) => sheet.update(input, dt),
            None => WidgetResponse::default(),
        }
    }

    /// Renders the sheet, if one is presented.
    pub fn render(&self, renderer: &mut UIRenderer) {
        if let Some(sheet) = &self.sheet {
            sheet.render(renderer);
        }
    }

    /// Returns true while a sheet is on screen.
    #[must_use]
    pub fn is_presented(&self) -> bool {
        self.sheet.is_some()
    }

    /// The presented sheet.
    #[must_use]
    pub fn sheet(&self) -> Option<&OnboardingSheet<I, F>> {
        self.sheet.as_ref()
    }

    /// Reveal phase of the presented sheet.
    #[must_use]
    pub fn phase(&self) -> Option<RevealPhase> {
        self.sheet.as_ref().map(OnboardingSheet::phase)
    }
}

impl<I, F> std::fmt::Debug for SheetHost<I, F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SheetHost")
            .field("presented", &self.presented.load(Ordering::Relaxed))
            .field("showing", &self.sheet.is_some())
            .field("bounds", &self.bounds)
            .finish_non_exhaustive()
    }
}
