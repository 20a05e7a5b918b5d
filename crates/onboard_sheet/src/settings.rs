//! # Sheet Settings
//!
//! Reveal timings and sheet metrics. Defaults reproduce the stock sheet;
//! a TOML file can override any subset of keys:
//!
//! ```toml
//! [reveal]
//! icon_delay = 0.35
//! card_stagger = 0.1
//!
//! [sheet]
//! max_width = 330.0
//! footer_padding = 15.0
//! ```

use crate::error::{OnboardingError, OnboardingResult};
use crate::platform::FormFactor;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Delays of the reveal timeline, in seconds.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RevealTimings {
    /// Wait before the icon appears.
    pub icon_delay: f32,
    /// Wait before the icon appears on desktop form factors.
    pub icon_delay_desktop: f32,
    /// Wait between icon and title.
    pub title_delay: f32,
    /// Pause between title and the first card.
    pub cards_pause: f32,
    /// Card `i` waits `i * card_stagger` after the previous card.
    pub card_stagger: f32,
    /// Wait between the last card and the footer.
    pub footer_delay: f32,
    /// Duration of each section's blur-slide transition.
    pub transition: f32,
}

impl Default for RevealTimings {
    fn default() -> Self {
        Self {
            icon_delay: 0.35,
            icon_delay_desktop: 0.1,
            title_delay: 0.2,
            cards_pause: 0.2,
            card_stagger: 0.1,
            footer_delay: 0.2,
            transition: 0.5,
        }
    }
}

impl RevealTimings {
    /// Timings with every delay and the transition set to zero.
    ///
    /// Useful for hosts that want the sheet fully revealed on first frame.
    #[must_use]
    pub fn instant() -> Self {
        Self {
            icon_delay: 0.0,
            icon_delay_desktop: 0.0,
            title_delay: 0.0,
            cards_pause: 0.0,
            card_stagger: 0.0,
            footer_delay: 0.0,
            transition: 0.0,
        }
    }

    /// Rejects negative and non-finite values.
    ///
    /// # Errors
    ///
    /// Returns [`OnboardingError::InvalidTiming`] naming the first bad key.
    pub fn validate(&self) -> OnboardingResult<()> {
        let entries = [
            ("icon_delay", self.icon_delay),
            ("icon_delay_desktop", self.icon_delay_desktop),
            ("title_delay", self.title_delay),
            ("cards_pause", self.cards_pause),
            ("card_stagger", self.card_stagger),
            ("footer_delay", self.footer_delay),
            ("transition", self.transition),
        ];
        for (key, value) in entries {
            if !value.is_finite() || value < 0.0 {
                return Err(OnboardingError::InvalidTiming { key, value });
            }
        }
        Ok(())
    }

    /// Icon delay for the given form factor.
    #[must_use]
    pub fn icon(&self, form_factor: FormFactor) -> Duration {
        if form_factor.is_desktop() {
            seconds(self.icon_delay_desktop)
        } else {
            seconds(self.icon_delay)
        }
    }

    /// Delay between icon and title.
    #[must_use]
    pub fn title(&self) -> Duration {
        seconds(self.title_delay)
    }

    /// Pause before the first card.
    #[must_use]
    pub fn pause(&self) -> Duration {
        seconds(self.cards_pause)
    }

    /// Delay before card `index`, measured from the previous step.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn card(&self, index: usize) -> Duration {
        seconds(self.card_stagger * index as f32)
    }

    /// Delay between the last card and the footer.
    #[must_use]
    pub fn footer(&self) -> Duration {
        seconds(self.footer_delay)
    }
}

/// Converts seconds to a duration; invalid values collapse to zero.
fn seconds(value: f32) -> Duration {
    Duration::try_from_secs_f32(value).unwrap_or(Duration::ZERO)
}

/// Sizes and spacing of the sheet layout.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SheetMetrics {
    /// Maximum sheet width.
    pub max_width: f32,
    /// Vertical spacing between icon, title and cards.
    pub spacing: f32,
    /// Title font size.
    pub title_size: f32,
    /// Width of the card symbol column.
    pub card_icon_width: f32,
    /// Card symbol size.
    pub card_icon_size: f32,
    /// Card symbol vertical shift.
    pub card_icon_offset: f32,
    /// Gap between the symbol column and the card text.
    pub card_spacing: f32,
    /// Gap between card title and subtitle.
    pub card_text_spacing: f32,
    /// Card title font size.
    pub card_title_size: f32,
    /// Card subtitle font size.
    pub card_subtitle_size: f32,
    /// Space above and below the footer content.
    pub footer_padding: f32,
    /// Space below the Continue button.
    pub button_bottom_padding: f32,
    /// Minimum sheet height on desktop.
    pub desktop_min_height: f32,
}

impl Default for SheetMetrics {
    fn default() -> Self {
        Self {
            max_width: 330.0,
            spacing: 20.0,
            title_size: 22.0,
            card_icon_width: 45.0,
            card_icon_size: 22.0,
            card_icon_offset: 10.0,
            card_spacing: 12.0,
            card_text_spacing: 6.0,
            card_title_size: 20.0,
            card_subtitle_size: 16.0,
            footer_padding: 15.0,
            button_bottom_padding: 10.0,
            desktop_min_height: 600.0,
        }
    }
}

/// Everything configurable about a sheet, loaded once at startup.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OnboardingSettings {
    /// Reveal timeline.
    pub reveal: RevealTimings,
    /// Layout metrics.
    pub sheet: SheetMetrics,
}

impl OnboardingSettings {
    /// Parses settings from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`OnboardingError::Parse`] for malformed TOML or unknown keys
    /// and [`OnboardingError::InvalidTiming`] for bad timing values.
    pub fn from_toml_str(text: &str) -> OnboardingResult<Self> {
        let settings: Self = toml::from_str(text)?;
        settings.reveal.validate()?;
        Ok(settings)
    }

    /// Reads and parses a settings file.
    ///
    /// # Errors
    ///
    /// Returns [`OnboardingError::Io`] if the file cannot be read, otherwise
    /// the same errors as [`OnboardingSettings::from_toml_str`].
    pub fn load(path: impl AsRef<Path>) -> OnboardingResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| OnboardingError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let settings = Self::from_toml_str(&text)?;
        tracing::info!("loaded onboarding settings from {}", path.display());
        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_toml_is_default() {
        let settings = OnboardingSettings::from_toml_str("").unwrap();
        assert_eq!(settings, OnboardingSettings::default());
    }

    #[test]
    fn test_partial_override() {
        let settings = OnboardingSettings::from_toml_str(
            "[reveal]\ncard_stagger = 0.25\n\n[sheet]\nmax_width = 400.0\n",
        )
        .unwrap();

        assert!((settings.reveal.card_stagger - 0.25).abs() < f32::EPSILON);
        assert!((settings.reveal.icon_delay - 0.35).abs() < f32::EPSILON);
        assert!((settings.sheet.max_width - 400.0).abs() < f32::EPSILON);
        assert!((settings.sheet.spacing - 20.0).abs() < f32::EPSILON);
        assert!((settings.sheet.footer_padding - 15.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_negative_timing_rejected() {
        let err = OnboardingSettings::from_toml_str("[reveal]\ntitle_delay = -1.0\n").unwrap_err();
        assert!(matches!(err, OnboardingError::InvalidTiming { key: "title_delay", .. }));
    }

    #[test]
    fn test_unknown_key_rejected() {
        let err = OnboardingSettings::from_toml_str("[reveal]\nicon_dealy = 0.1\n").unwrap_err();
        assert!(matches!(err, OnboardingError::Parse(_)));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = OnboardingSettings::load("/nonexistent/onboarding.toml").unwrap_err();
        assert!(matches!(err, OnboardingError::Io { .. }));
        assert!(err.to_string().contains("/nonexistent/onboarding.toml"));
    }

    #[test]
    fn test_card_delay_scales_with_index() {
        let timings = RevealTimings::default();
        assert_eq!(timings.card(0), Duration::ZERO);
        assert!((timings.card(3).as_secs_f32() - 0.3).abs() < 1e-6);
    }

    #[test]
    fn test_desktop_icon_delay() {
        let timings = RevealTimings::default();
        assert_eq!(timings.icon(FormFactor::Desktop), Duration::from_secs_f32(0.1));
        assert_eq!(timings.icon(FormFactor::Phone), Duration::from_secs_f32(0.35));
        assert_eq!(timings.icon(FormFactor::Tablet), Duration::from_secs_f32(0.35));
    }
}
