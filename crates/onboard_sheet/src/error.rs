//! # Onboarding Error Types
//!
//! Presenting and revealing a sheet cannot fail. Loading settings can.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while preparing an onboarding sheet.
#[derive(Error, Debug)]
pub enum OnboardingError {
    /// The settings file could not be read.
    #[error("failed to read settings {path}: {source}")]
    Io {
        /// File that was being read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The settings file is not valid TOML or has wrongly typed keys.
    #[error("invalid settings: {0}")]
    Parse(#[from] toml::de::Error),

    /// A timing value is negative or not a finite number of seconds.
    #[error("invalid timing `{key}`: {value} (must be a finite, non-negative number of seconds)")]
    InvalidTiming {
        /// Settings key.
        key: &'static str,
        /// Offending value.
        value: f32,
    },

    /// A form factor name that is not `phone`, `tablet` or `desktop`.
    #[error("unknown form factor: {0}")]
    UnknownFormFactor(String),
}

/// Result type for onboarding operations.
pub type OnboardingResult<T> = Result<T, OnboardingError>;
