//! Phrase/word timeline as delivered by the external player.
//!
//! The tree is built once per loaded song and never mutated afterwards; a new
//! song replaces the whole [`Timeline`]. Phrases and words are addressed by
//! index, so a [`WordId`] carries its parent phrase for lookups.

use crate::error::TimelineError;

/// A timed text unit (phrase or word). Times are milliseconds.
#[derive(Clone, Debug, PartialEq)]
pub struct TextInterval {
    pub text: String,
    pub start_ms: f64,
    pub end_ms: f64,
    pub children: Vec<TextInterval>,
}

impl TextInterval {
    pub fn new(text: impl Into<String>, start_ms: f64, end_ms: f64) -> Self {
        Self {
            text: text.into(),
            start_ms,
            end_ms,
            children: Vec::new(),
        }
    }

    pub fn with_children(mut self, children: Vec<TextInterval>) -> Self {
        self.children = children;
        self
    }

    /// Exact containment, half-open: `start <= t < end`.
    #[inline]
    pub fn contains(&self, t: f64) -> bool {
        self.start_ms <= t && t < self.end_ms
    }

    /// Containment widened by `margin` on both sides (closed range).
    #[inline]
    pub fn contains_with_margin(&self, t: f64, margin: f64) -> bool {
        self.start_ms - margin <= t && t <= self.end_ms + margin
    }

    pub fn duration_ms(&self) -> f64 {
        self.end_ms - self.start_ms
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PhraseId(pub usize);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct WordId {
    pub phrase: PhraseId,
    pub index: usize,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Timeline {
    phrases: Vec<TextInterval>,
}

impl Timeline {
    /// Validate and wrap a phrase list. Each level must be sorted by start,
    /// pairwise non-overlapping, and words must lie inside their phrase.
    pub fn new(phrases: Vec<TextInterval>) -> Result<Self, TimelineError> {
        check_level(&phrases)?;
        for (pi, phrase) in phrases.iter().enumerate() {
            check_level(&phrase.children).map_err(|e| TimelineError::InPhrase {
                phrase: pi,
                source: Box::new(e),
            })?;
            for (wi, word) in phrase.children.iter().enumerate() {
                if word.start_ms < phrase.start_ms || word.end_ms > phrase.end_ms {
                    return Err(TimelineError::ChildOutOfParent {
                        phrase: pi,
                        word: wi,
                    });
                }
            }
        }
        Ok(Self { phrases })
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.phrases.is_empty()
    }

    pub fn len(&self) -> usize {
        self.phrases.len()
    }

    pub fn phrases(&self) -> &[TextInterval] {
        &self.phrases
    }

    pub fn phrase(&self, id: PhraseId) -> Option<&TextInterval> {
        self.phrases.get(id.0)
    }

    pub fn word(&self, id: WordId) -> Option<&TextInterval> {
        self.phrase(id.phrase).and_then(|p| p.children.get(id.index))
    }

    /// Parent lookup for a word.
    pub fn parent_of(&self, id: WordId) -> Option<&TextInterval> {
        self.phrase(id.phrase)
    }

    pub fn next_phrase(&self, id: PhraseId) -> Option<PhraseId> {
        let next = id.0 + 1;
        (next < self.phrases.len()).then_some(PhraseId(next))
    }

    /// Start of the first lyric; target of the "jump" command.
    pub fn first_start_ms(&self) -> Option<f64> {
        self.phrases.first().map(|p| {
            p.children
                .first()
                .map_or(p.start_ms, |w| w.start_ms.min(p.start_ms))
        })
    }
}

fn check_level(units: &[TextInterval]) -> Result<(), TimelineError> {
    for (i, u) in units.iter().enumerate() {
        if !u.start_ms.is_finite() || !u.end_ms.is_finite() {
            return Err(TimelineError::NonFinite { index: i });
        }
        if u.start_ms > u.end_ms {
            return Err(TimelineError::InvertedInterval {
                index: i,
                start_ms: u.start_ms,
                end_ms: u.end_ms,
            });
        }
        if i > 0 {
            let prev = &units[i - 1];
            if u.start_ms < prev.start_ms {
                return Err(TimelineError::Unsorted { index: i });
            }
            if u.start_ms < prev.end_ms {
                return Err(TimelineError::Overlapping { index: i });
            }
        }
    }
    Ok(())
}
