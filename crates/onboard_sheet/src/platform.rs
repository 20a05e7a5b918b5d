//! Form factors and the sheet chrome that depends on them.

use crate::error::OnboardingError;
use crate::settings::SheetMetrics;
use onboard_ui::Insets;
use std::str::FromStr;

/// The kind of device the sheet is presented on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FormFactor {
    /// Handheld: sheet fills the screen width.
    Phone,
    /// Large touch screen: fitted sheet with side padding.
    Tablet,
    /// Windowed desktop: side padding, minimum height, faster first reveal.
    Desktop,
}

impl FormFactor {
    /// Best guess for the platform this binary was built for.
    #[must_use]
    pub const fn current() -> Self {
        if cfg!(any(target_os = "ios", target_os = "android")) {
            Self::Phone
        } else {
            Self::Desktop
        }
    }

    /// Returns true for desktop form factors.
    #[must_use]
    pub const fn is_desktop(self) -> bool {
        matches!(self, Self::Desktop)
    }

    /// Padding, minimum height and button padding for this form factor.
    #[must_use]
    pub fn chrome(self, metrics: &SheetMetrics) -> SheetChrome {
        match self {
            Self::Phone => SheetChrome {
                insets: Insets::ZERO,
                min_height: None,
                button_padding: 4.0,
            },
            Self::Tablet => SheetChrome {
                insets: Insets::horizontal_only(25.0),
                min_height: None,
                button_padding: 4.0,
            },
            Self::Desktop => SheetChrome {
                insets: Insets::horizontal_only(20.0),
                min_height: Some(metrics.desktop_min_height),
                button_padding: 8.0,
            },
        }
    }
}

impl Default for FormFactor {
    fn default() -> Self {
        Self::current()
    }
}

impl FromStr for FormFactor {
    type Err = OnboardingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "phone" => Ok(Self::Phone),
            "tablet" | "pad" => Ok(Self::Tablet),
            "desktop" | "mac" => Ok(Self::Desktop),
            _ => Err(OnboardingError::UnknownFormFactor(s.to_string())),
        }
    }
}

/// Form-factor dependent framing around the sheet content.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SheetChrome {
    /// Space between the presentation bounds and the sheet content.
    pub insets: Insets,
    /// Minimum content height, if any.
    pub min_height: Option<f32>,
    /// Padding above and below the Continue label.
    pub button_padding: f32,
}
