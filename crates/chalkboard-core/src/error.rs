//! Error types for the chalkboard core.

use thiserror::Error;

/// A single word is wider than one lyric line can hold.
///
/// Raised instead of truncating or wrapping mid-word: the phrase containing
/// the word is not displayed and the error is handed to the integrator.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("word is too long: {word:?} is {width} units wide (max {max_width})")]
pub struct TextTooLongError {
    pub word: String,
    pub width: u32,
    pub max_width: u32,
}

/// Reasons a phrase/word timeline is rejected at load time.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TimelineError {
    #[error("interval {index} has a non-finite bound")]
    NonFinite { index: usize },

    #[error("interval {index} ends before it starts ({start_ms} > {end_ms})")]
    InvertedInterval {
        index: usize,
        start_ms: f64,
        end_ms: f64,
    },

    #[error("interval {index} starts before its predecessor")]
    Unsorted { index: usize },

    #[error("interval {index} overlaps its predecessor")]
    Overlapping { index: usize },

    #[error("word {word} of phrase {phrase} lies outside its phrase")]
    ChildOutOfParent { phrase: usize, word: usize },

    #[error("phrase {phrase}: {source}")]
    InPhrase {
        phrase: usize,
        #[source]
        source: Box<TimelineError>,
    },
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid colour token: {0:?} (expected #rrggbb)")]
pub struct ColorParseError(pub String);

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("fade window must be finite and non-negative, got {0}")]
    FadeWindow(f64),

    #[error("max line width must be at least 2 units, got {0}")]
    LineWidthBudget(u32),

    #[error("line width range is empty or non-positive ({min}..={max})")]
    StrokeWidthRange { min: f32, max: f32 },

    #[error("default line width {0} is outside the allowed range")]
    DefaultStrokeWidth(f32),
}
