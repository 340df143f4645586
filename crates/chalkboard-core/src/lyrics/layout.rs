//! Greedy line wrapping of a phrase's words into a fixed width budget.
//!
//! Widths are counted in half-width units: code points below 128 count 1,
//! everything else counts 2. Words are never split.

use crate::error::TextTooLongError;
use crate::timeline::TextInterval;
use smallvec::SmallVec;
use std::fmt;

#[inline]
pub fn char_width(c: char) -> u32 {
    if (c as u32) < 128 {
        1
    } else {
        2
    }
}

pub fn text_width(text: &str) -> u32 {
    text.chars().map(char_width).sum()
}

/// Wrapped phrase text, one entry per display line.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FittedText {
    lines: SmallVec<[String; 4]>,
}

impl FittedText {
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.iter().all(String::is_empty)
    }

    /// Lines joined with `\n`, as handed to the text sink.
    pub fn text(&self) -> String {
        self.lines.join("\n")
    }
}

impl fmt::Display for FittedText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text())
    }
}

pub fn fit_words<'a, I>(words: I, max_width: u32) -> Result<FittedText, TextTooLongError>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut lines: SmallVec<[String; 4]> = SmallVec::new();
    let mut line_width = 0u32;
    for word in words {
        let width = text_width(word);
        if width > max_width {
            return Err(TextTooLongError {
                word: word.to_string(),
                width,
                max_width,
            });
        }
        match lines.last_mut() {
            Some(line) if line_width + width <= max_width => {
                line.push_str(word);
                line_width += width;
            }
            _ => {
                lines.push(word.to_string());
                line_width = width;
            }
        }
    }
    Ok(FittedText { lines })
}

/// Wrap a phrase by its word children. A phrase without word children is
/// treated as a single word.
pub fn fit_phrase(phrase: &TextInterval, max_width: u32) -> Result<FittedText, TextTooLongError> {
    if phrase.children.is_empty() {
        return fit_words(std::iter::once(phrase.text.as_str()), max_width);
    }
    fit_words(phrase.children.iter().map(|w| w.text.as_str()), max_width)
}
