//! # Onboarding Sheet Widget
//!
//! Lays out the icon, title and cards in a clipped scroll area above a fixed
//! footer with the Continue button. Each section sits in its own blur-slide
//! effect group whose visibility follows the reveal sequencer.
//!
//! The sheet ignores all input until the footer has been revealed.

use crate::builder::{ContinueCallback, OnboardingConfig};
use crate::card::Card;
use crate::driver::{spawn_reveal, RevealDriver};
use crate::platform::{FormFactor, SheetChrome};
use crate::reveal::{RevealPhase, RevealSequencer};
use crate::settings::SheetMetrics;
use onboard_ui::{
    Alignment, BlurSlide, Button, Color, Constraints, Easing, FontWeight, InputState, Insets, Key, Layout, Rect,
    RenderCommand, Symbol, Text, Theme, UIRenderer, View, Widget, WidgetFlags, WidgetId, WidgetResponse,
    WidgetState, WidgetTree,
};
use parking_lot::Mutex;
use std::sync::Arc;
use tokio::task::JoinHandle;

/// Label of the dismiss button.
pub const CONTINUE_LABEL: &str = "Continue";

/// Which part of the sheet a point falls on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SheetRegion {
    /// Sheet background or footer content.
    Sheet,
    /// The scrollable icon, title and cards.
    Content,
    /// The Continue button.
    Continue,
}

/// Views of one card row.
struct CardRow {
    symbol: Symbol,
    title: Text,
    subtitle: Text,
}

impl CardRow {
    fn new(card: &Card, tint: Color, metrics: &SheetMetrics) -> Self {
        Self {
            symbol: Symbol::new(card.symbol()).size(metrics.card_icon_size).color(tint),
            title: Text::new(card.title())
                .size(metrics.card_title_size)
                .weight(FontWeight::Semibold)
                .line_limit(1),
            subtitle: Text::new(card.subtitle()).size(metrics.card_subtitle_size).line_limit(2),
        }
    }
}

/// Frames of one card row, in content coordinates.
#[derive(Clone, Debug, Default)]
struct CardFrame {
    symbol: Rect,
    title: Rect,
    subtitle: Rect,
}

/// Result of the last layout pass.
///
/// Scrollable frames are relative to an unscrolled viewport.
#[derive(Clone, Debug, Default)]
struct SheetLayout {
    sheet: Rect,
    viewport: Rect,
    icon: Rect,
    title: Rect,
    cards: Vec<CardFrame>,
    footer: Rect,
    button: Rect,
    content_height: f32,
}

impl SheetLayout {
    fn max_scroll(&self) -> f32 {
        (self.content_height - self.viewport.height).max(0.0)
    }
}

/// Blur-slide transition of every section.
struct Sections {
    icon: BlurSlide,
    title: BlurSlide,
    cards: Vec<BlurSlide>,
    footer: BlurSlide,
}

impl Sections {
    fn hidden(card_count: usize, duration: f32) -> Self {
        let easing = if duration > 0.0 { Easing::Smooth } else { Easing::Instant };
        let slide = || BlurSlide::hidden(easing, duration);
        Self {
            icon: slide(),
            title: slide(),
            cards: (0..card_count).map(|_| slide()).collect(),
            footer: slide(),
        }
    }

    fn update(&mut self, dt: f32) {
        self.icon.update(dt);
        self.title.update(dt);
        for card in &mut self.cards {
            card.update(dt);
        }
        self.footer.update(dt);
    }
}

/// The onboarding sheet.
pub struct OnboardingSheet<I, F> {
    state: WidgetState,
    tree: WidgetTree,
    content_id: WidgetId,
    theme: Theme,
    tint: Color,
    form_factor: FormFactor,
    chrome: SheetChrome,
    metrics: SheetMetrics,
    driver: RevealDriver,
    icon: I,
    title: Text,
    rows: Vec<CardRow>,
    footer: F,
    button: Button,
    on_continue: ContinueCallback,
    sequencer: Arc<Mutex<RevealSequencer>>,
    task: Option<JoinHandle<()>>,
    sections: Sections,
    layout: SheetLayout,
    scroll_offset: f32,
    interactive: bool,
}

impl<I: View, F: View> OnboardingSheet<I, F> {
    /// Builds a hidden sheet from a config.
    #[must_use]
    pub fn new(config: OnboardingConfig<I, F>, theme: Theme) -> Self {
        let OnboardingConfig {
            tint,
            title,
            icon,
            cards,
            footer,
            on_continue,
            form_factor,
            settings,
            driver,
        } = config;

        let metrics = settings.sheet;
        let mut tree = WidgetTree::new();
        let root_id = tree.next_id();
        let content_id = tree.next_id();
        let button_id = tree.next_id();
        tree.add_root(WidgetState::new(root_id));
        tree.add_child(root_id, WidgetState::new(content_id));
        tree.add_child(root_id, WidgetState::new(button_id));

        let button = Button::new(button_id, CONTINUE_LABEL, tint, theme.on_tint)
            .with_vertical_padding(form_factor.chrome(&metrics).button_padding);

        let rows = cards.iter().map(|card| CardRow::new(card, tint, &metrics)).collect();
        let sequencer = RevealSequencer::new(&settings.reveal, form_factor, cards.len());

        let mut sheet = Self {
            state: WidgetState::new(root_id),
            tree,
            content_id,
            theme,
            tint,
            form_factor,
            chrome: form_factor.chrome(&metrics),
            title: Text::new(title).size(metrics.title_size).weight(FontWeight::Bold),
            metrics,
            driver,
            icon,
            rows,
            footer,
            button,
            on_continue,
            sequencer: Arc::new(Mutex::new(sequencer)),
            task: None,
            sections: Sections::hidden(cards.len(), settings.reveal.transition),
            layout: SheetLayout::default(),
            scroll_offset: 0.0,
            interactive: true,
        };
        sheet.set_interactive(false);
        sheet
    }

    /// Starts the reveal on first display. Later calls do nothing.
    ///
    /// With [`RevealDriver::Task`] the timeline runs on a tokio task; outside
    /// a runtime the sheet falls back to frame driving.
    pub fn appear(&mut self) -> bool {
        if self.driver == RevealDriver::Task {
            if tokio::runtime::Handle::try_current().is_ok() {
                return match spawn_reveal(&self.sequencer) {
                    Some(task) => {
                        self.task = Some(task);
                        true
                    }
                    None => false,
                };
            }
            tracing::warn!("no tokio runtime, driving the reveal from frames");
            self.driver = RevealDriver::Frame;
        }
        self.sequencer.lock().start()
    }

    /// Lays the sheet out inside the presentation bounds.
    pub fn set_rect(&mut self, bounds: Rect) {
        self.state.rect = bounds;
        self.relayout();
    }

    /// Current reveal phase.
    #[must_use]
    pub fn phase(&self) -> RevealPhase {
        self.sequencer.lock().phase()
    }

    /// Returns true once the footer is revealed and input is accepted.
    #[must_use]
    pub fn is_interactive(&self) -> bool {
        self.interactive
    }

    /// Shared handle to the sequencer.
    #[must_use]
    pub fn sequencer(&self) -> &Arc<Mutex<RevealSequencer>> {
        &self.sequencer
    }

    /// Form factor the sheet was built for.
    #[must_use]
    pub fn form_factor(&self) -> FormFactor {
        self.form_factor
    }

    /// Number of cards.
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.rows.len()
    }

    /// Frame of the Continue button.
    #[must_use]
    pub fn continue_rect(&self) -> Rect {
        self.layout.button
    }

    /// Frame of the sheet itself.
    #[must_use]
    pub fn sheet_rect(&self) -> Rect {
        self.layout.sheet
    }

    /// Visible part of the scroll area.
    #[must_use]
    pub fn viewport(&self) -> Rect {
        self.layout.viewport
    }

    /// Current scroll offset.
    #[must_use]
    pub fn scroll_offset(&self) -> f32 {
        self.scroll_offset
    }

    /// Largest scroll offset; zero when everything fits.
    #[must_use]
    pub fn max_scroll(&self) -> f32 {
        self.layout.max_scroll()
    }

    /// Region under the point, or `None` while input is gated.
    #[must_use]
    pub fn hit_test(&self, x: f32, y: f32) -> Option<SheetRegion> {
        let id = self.tree.hit_test(x, y)?;
        Some(if id == self.content_id {
            SheetRegion::Content
        } else if id == self.button.state().id {
            SheetRegion::Continue
        } else {
            SheetRegion::Sheet
        })
    }

    fn set_interactive(&mut self, interactive: bool) {
        if self.interactive == interactive {
            return;
        }
        self.interactive = interactive;
        self.tree.assign_flag_recursive(self.state.id, WidgetFlags::ENABLED, interactive);
        self.state.flags.assign(WidgetFlags::ENABLED, interactive);
        self.button.set_enabled(interactive);
    }

    /// Copies the sequencer flags onto the section transitions.
    fn sync_sections(&mut self) {
        let interactive = {
            let sequencer = self.sequencer.lock();
            let flags = sequencer.state();
            self.sections.icon.set_shown(flags.icon());
            self.sections.title.set_shown(flags.title());
            for (slide, shown) in self.sections.cards.iter_mut().zip(flags.cards()) {
                slide.set_shown(*shown);
            }
            self.sections.footer.set_shown(flags.footer());
            sequencer.is_interactive()
        };
        self.set_interactive(interactive);
    }

    fn relayout(&mut self) {
        let metrics = &self.metrics;
        let area = self.state.rect.inset(self.chrome.insets);
        let width = metrics.max_width.min(area.width).max(0.0);
        let x = area.x + (area.width - width) * 0.5;
        let height = self.chrome.min_height.map_or(area.height, |min| area.height.max(min));
        let sheet = Rect::new(x, area.y, width, height);

        let (_, button_h) = self.button.min_size();
        let button = Rect::new(x, sheet.bottom() - metrics.button_bottom_padding - button_h, width, button_h);
        let (_, footer_h) = self.footer.measure(Constraints::max_width(width));
        let footer_h = footer_h + metrics.footer_padding * 2.0;
        let footer = Rect::new(x, button.y - footer_h, width, footer_h);
        let viewport = Rect::new(x, sheet.y, width, (footer.y - sheet.y).max(0.0));

        let bounded = Constraints::max_width(width);
        let (_, icon_h) = self.icon.measure(bounded);
        let (_, title_h) = self.title.measure(bounded);

        let text_x = x + metrics.card_icon_width + metrics.card_spacing;
        let text_w = (width - metrics.card_icon_width - metrics.card_spacing).max(0.0);
        let row_sizes: Vec<_> = self
            .rows
            .iter()
            .map(|row| {
                let (_, symbol_h) = row.symbol.measure(Constraints::max_width(metrics.card_icon_width));
                let (_, t_h) = row.title.measure(Constraints::max_width(text_w));
                let (_, s_h) = row.subtitle.measure(Constraints::max_width(text_w));
                let text_h = t_h + metrics.card_text_spacing + s_h;
                (symbol_h, t_h, s_h, text_h.max(symbol_h + metrics.card_icon_offset))
            })
            .collect();

        let mut sizes = vec![(width, icon_h), (width, title_h)];
        sizes.extend(row_sizes.iter().map(|row| (width, row.3)));
        let frames = Layout::vertical()
            .with_gap(metrics.spacing)
            .align_cross(Alignment::Stretch)
            .arrange(Rect::new(x, viewport.y, width, f32::INFINITY), &sizes);

        let content_height = frames.last().map_or(0.0, |last| last.bottom() - viewport.y);
        let icon = frames.first().copied().unwrap_or_default();
        let title = frames.get(1).copied().unwrap_or_default();

        let cards = frames
            .iter()
            .skip(2)
            .zip(&row_sizes)
            .map(|(frame, &(symbol_h, t_h, s_h, _))| CardFrame {
                symbol: Rect::new(x, frame.y + metrics.card_icon_offset, metrics.card_icon_width, symbol_h),
                title: Rect::new(text_x, frame.y, text_w, t_h),
                subtitle: Rect::new(text_x, frame.y + t_h + metrics.card_text_spacing, text_w, s_h),
            })
            .collect();

        self.layout = SheetLayout {
            sheet,
            viewport,
            icon,
            title,
            cards,
            footer,
            button,
            content_height,
        };
        self.scroll_offset = self.scroll_offset.clamp(0.0, self.layout.max_scroll());

        self.tree.set_rect(self.state.id, sheet);
        self.tree.set_rect(self.content_id, viewport);
        self.tree.set_rect(self.button.state().id, button);
        self.button.set_rect(button);
    }

    fn handle_input(&mut self, input: &InputState, dt: f32) -> WidgetResponse {
        let mut response = WidgetResponse::default();

        if input.key_pressed(Key::Escape) {
            tracing::trace!("escape ignored, sheet dismisses through Continue only");
        }

        let (_, dy) = input.scroll_delta;
        if dy != 0.0 && self.hit_test(input.mouse_x, input.mouse_y) == Some(SheetRegion::Content) {
            let max = self.layout.max_scroll();
            let next = (self.scroll_offset + dy).clamp(0.0, max);
            if (next - self.scroll_offset).abs() > f32::EPSILON {
                self.scroll_offset = next;
                response.changed = true;
            }
        }

        let button = self.button.update(input, dt);
        response.hovered = button.hovered;
        response.unhovered = button.unhovered;
        response.focused = button.focused;
        if button.clicked {
            tracing::debug!("continue activated");
            (self.on_continue)();
            response.clicked = true;
        }
        response
    }

    fn render_section(renderer: &mut UIRenderer, slide: &BlurSlide, commands: Vec<RenderCommand>) {
        renderer.push_effect(slide.opacity(), slide.blur(), slide.offset_y());
        renderer.extend(commands);
        renderer.pop_effect();
    }
}

impl<I: View, F: View> Widget for OnboardingSheet<I, F> {
    fn state(&self) -> &WidgetState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut WidgetState {
        &mut self.state
    }

    /// Advances the reveal and transitions, then handles input if allowed.
    ///
    /// The first update also starts the reveal if [`OnboardingSheet::appear`]
    /// was not called.
    fn update(&mut self, input: &InputState, dt: f32) -> WidgetResponse {
        if !self.sequencer.lock().is_started() {
            self.appear();
        }
        if self.driver == RevealDriver::Frame {
            self.sequencer.lock().advance(dt);
        }
        self.sync_sections();
        self.sections.update(dt);

        if !self.interactive {
            if !input.is_idle() {
                tracing::trace!("input ignored until the reveal finishes");
            }
            return WidgetResponse {
                changed: true,
                ..WidgetResponse::default()
            };
        }

        let mut response = self.handle_input(input, dt);
        response.changed |= !self.sections.footer.is_settled();
        response
    }

    fn render(&self, renderer: &mut UIRenderer) {
        let layout = &self.layout;
        let scroll = -self.scroll_offset;

        renderer.push(RenderCommand::Rect {
            bounds: layout.sheet,
            color: self.theme.background,
            corner_radius: 0.0,
        });

        renderer.push_clip(layout.viewport);

        let mut commands = Vec::new();
        self.icon.render(layout.icon.offset_y(scroll), &self.theme, &mut commands);
        Self::render_section(renderer, &self.sections.icon, commands);

        let mut commands = Vec::new();
        self.title.render(layout.title.offset_y(scroll), &self.theme, &mut commands);
        Self::render_section(renderer, &self.sections.title, commands);

        let muted = Theme {
            text: self.theme.text_muted,
            ..self.theme.clone()
        };
        for ((row, frame), slide) in self.rows.iter().zip(&layout.cards).zip(&self.sections.cards) {
            let mut commands = Vec::with_capacity(4);
            row.symbol.render(frame.symbol.offset_y(scroll), &self.theme, &mut commands);
            row.title.render(frame.title.offset_y(scroll), &self.theme, &mut commands);
            row.subtitle.render(frame.subtitle.offset_y(scroll), &muted, &mut commands);
            Self::render_section(renderer, slide, commands);
        }

        renderer.pop_clip();

        let mut commands = Vec::new();
        let footer = layout.footer.inset(Insets::vertical_only(self.metrics.footer_padding));
        self.footer.render(footer, &self.theme, &mut commands);
        renderer.push_effect(
            self.sections.footer.opacity(),
            self.sections.footer.blur(),
            self.sections.footer.offset_y(),
        );
        renderer.extend(commands);
        self.button.render(renderer);
        renderer.pop_effect();
    }

    fn min_size(&self) -> (f32, f32) {
        let (_, button_h) = self.button.min_size();
        (
            self.chrome.insets.horizontal(),
            self.chrome.min_height.unwrap_or(0.0) + button_h + self.metrics.button_bottom_padding,
        )
    }

    fn preferred_size(&self) -> (f32, f32) {
        let (_, footer_h) = self.footer.measure(Constraints::max_width(self.metrics.max_width));
        let (_, min_h) = self.min_size();
        let footer_h = footer_h + self.metrics.footer_padding * 2.0;
        (
            self.metrics.max_width + self.chrome.insets.horizontal(),
            (self.layout.content_height + footer_h + min_h).max(min_h),
        )
    }
}

impl<I, F> Drop for OnboardingSheet<I, F> {
    fn drop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}

impl<I, F> std::fmt::Debug for OnboardingSheet<I, F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OnboardingSheet")
            .field("tint", &self.tint)
            .field("form_factor", &self.form_factor)
            .field("cards", &self.rows.len())
            .field("interactive", &self.interactive)
            .field("scroll_offset", &self.scroll_offset)
            .finish_non_exhaustive()
    }
}
