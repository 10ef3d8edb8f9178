//! Display options for the progress bar.
//!
//! Two display conventions are left to the caller:
//! - which strand end labels the zipper and which labels the primer
//! - whether a bar built without a header echoes its sequence as one
//!
//! Both are parsed from text for the command line.

use std::str::FromStr;
use std::time::Duration;

use thiserror::Error;

use crate::glyphs::GlyphSet;

/// Errors that can occur while parsing display options.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum OptionsError {
    #[error("Unknown strand orientation: {0} (expected 3-5 or 5-3)")]
    UnknownOrientation(String),

    #[error("Unknown header mode: {0} (expected hidden or echo)")]
    UnknownHeaderMode(String),

    #[error("Invalid interval: {0} (expected e.g. 50ms, 1s, 250us or a bare number of milliseconds)")]
    InvalidInterval(String),
}

/// Which strand end is shown on the zipper line.
///
/// The primer line always carries the opposite label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StrandOrientation {
    /// Zipper reads 3', primer reads 5'
    #[default]
    ThreePrimeTop,
    /// Zipper reads 5', primer reads 3'
    FivePrimeTop,
}

impl StrandOrientation {
    /// Label drawn in front of the zipper line.
    pub fn zipper_label(self) -> &'static str {
        match self {
            StrandOrientation::ThreePrimeTop => "3'",
            StrandOrientation::FivePrimeTop => "5'",
        }
    }

    /// Label drawn in front of the primer line.
    pub fn primer_label(self) -> &'static str {
        match self {
            StrandOrientation::ThreePrimeTop => "5'",
            StrandOrientation::FivePrimeTop => "3'",
        }
    }
}

impl FromStr for StrandOrientation {
    type Err = OptionsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "3-5" | "3'-5'" | "three-prime-top" => Ok(StrandOrientation::ThreePrimeTop),
            "5-3" | "5'-3'" | "five-prime-top" => Ok(StrandOrientation::FivePrimeTop),
            _ => Err(OptionsError::UnknownOrientation(s.to_string())),
        }
    }
}

impl std::fmt::Display for StrandOrientation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StrandOrientation::ThreePrimeTop => write!(f, "3-5"),
            StrandOrientation::FivePrimeTop => write!(f, "5-3"),
        }
    }
}

/// What an empty header means.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HeaderMode {
    /// No header line is drawn
    #[default]
    Hidden,
    /// The normalized sequence is drawn as the header line
    EchoSequence,
}

impl FromStr for HeaderMode {
    type Err = OptionsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "hidden" | "none" => Ok(HeaderMode::Hidden),
            "echo" | "echo-sequence" => Ok(HeaderMode::EchoSequence),
            _ => Err(OptionsError::UnknownHeaderMode(s.to_string())),
        }
    }
}

/// Construction options for a [`ProgressBar`](crate::progress::ProgressBar).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BarOptions {
    pub orientation: StrandOrientation,
    pub header_mode: HeaderMode,
    pub glyphs: GlyphSet,
}

impl BarOptions {
    pub fn orientation(mut self, orientation: StrandOrientation) -> Self {
        self.orientation = orientation;
        self
    }

    pub fn header_mode(mut self, header_mode: HeaderMode) -> Self {
        self.header_mode = header_mode;
        self
    }

    pub fn glyphs(mut self, glyphs: GlyphSet) -> Self {
        self.glyphs = glyphs;
        self
    }
}

/// Parses a delay between updates.
///
/// Accepts `250us`, `50ms`, `2s`, or a bare number of milliseconds.
pub fn parse_interval(s: &str) -> Result<Duration, OptionsError> {
    let trimmed = s.trim();
    let invalid = || OptionsError::InvalidInterval(s.to_string());

    let split = trimmed
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(trimmed.len());
    let (digits, unit) = trimmed.split_at(split);
    if digits.is_empty() {
        return Err(invalid());
    }
    let value: u64 = digits.parse().map_err(|_| invalid())?;

    match unit {
        "" | "ms" => Ok(Duration::from_millis(value)),
        "us" | "µs" => Ok(Duration::from_micros(value)),
        "s" => Ok(Duration::from_secs(value)),
        _ => Err(invalid()),
    }
}
