//! Drives the lyric text sink from sync events.
//!
//! Keeps one phrase "shown" and, during a gap between phrases, pre-stages the
//! upcoming phrase's text at opacity 0 so it can be revealed without a fresh
//! layout when it becomes active.

use crate::config::LayoutConfig;
use crate::constants::EMPTY_LABEL;
use crate::error::TextTooLongError;
use crate::lyrics::layout::fit_phrase;
use crate::lyrics::sync::SyncEvent;
use crate::timeline::{PhraseId, Timeline};

/// Display surface for the lyric text and the phrase/word read-outs.
pub trait TextSink {
    fn set_text(&mut self, text: &str);
    fn set_opacity(&mut self, opacity: f32);
    fn set_phrase_label(&mut self, _label: &str) {}
    fn set_word_label(&mut self, _label: &str) {}
}

#[derive(Debug, Default)]
pub struct LyricStage {
    max_line_width: u32,
    shown: Option<PhraseId>,
    staged: Option<PhraseId>,
    upcoming: Option<PhraseId>,
}

impl LyricStage {
    pub fn new(config: LayoutConfig) -> Self {
        Self {
            max_line_width: config.max_line_width,
            ..Self::default()
        }
    }

    pub fn shown(&self) -> Option<PhraseId> {
        self.shown
    }

    pub fn staged(&self) -> Option<PhraseId> {
        self.staged
    }

    /// Apply events in order. Every event is processed; the first layout
    /// failure is returned after the batch and its phrase stays blank.
    pub fn apply<S: TextSink + ?Sized>(
        &mut self,
        timeline: &Timeline,
        events: &[SyncEvent],
        sink: &mut S,
    ) -> Result<(), TextTooLongError> {
        let mut first_err = None;
        for event in events {
            let result = match *event {
                SyncEvent::PhraseChanged {
                    current, halted, ..
                } => self.phrase_changed(timeline, current, halted, sink),
                SyncEvent::WordChanged { current, .. } => {
                    let label = current
                        .and_then(|w| timeline.word(w))
                        .map_or(EMPTY_LABEL, |w| w.text.as_str());
                    sink.set_word_label(label);
                    Ok(())
                }
                SyncEvent::OpacityChanged(opacity) => {
                    sink.set_opacity(opacity);
                    Ok(())
                }
            };
            if let Err(e) = result {
                first_err.get_or_insert(e);
            }
        }
        first_err.map_or(Ok(()), Err)
    }

    fn phrase_changed<S: TextSink + ?Sized>(
        &mut self,
        timeline: &Timeline,
        current: Option<PhraseId>,
        halted: bool,
        sink: &mut S,
    ) -> Result<(), TextTooLongError> {
        let label = current
            .and_then(|p| timeline.phrase(p))
            .map_or(EMPTY_LABEL, |p| p.text.as_str());
        sink.set_phrase_label(label);

        if halted {
            sink.set_text("");
            sink.set_opacity(0.0);
            self.shown = None;
            self.staged = None;
            self.upcoming = None;
            return Ok(());
        }

        match current {
            Some(id) if self.staged == Some(id) => {
                // Text already laid out during the gap; opacity events reveal it.
                self.staged = None;
                self.shown = Some(id);
                self.upcoming = timeline.next_phrase(id);
                Ok(())
            }
            Some(id) => {
                self.staged = None;
                self.upcoming = timeline.next_phrase(id);
                let Some(phrase) = timeline.phrase(id) else {
                    self.shown = None;
                    sink.set_text("");
                    return Ok(());
                };
                match fit_phrase(phrase, self.max_line_width) {
                    Ok(fitted) => {
                        sink.set_text(&fitted.text());
                        self.shown = Some(id);
                        Ok(())
                    }
                    Err(e) => {
                        sink.set_text("");
                        self.shown = None;
                        Err(e)
                    }
                }
            }
            None => {
                self.shown = None;
                let Some(next) = self.upcoming.take() else {
                    sink.set_text("");
                    return Ok(());
                };
                let Some(phrase) = timeline.phrase(next) else {
                    sink.set_text("");
                    return Ok(());
                };
                sink.set_opacity(0.0);
                match fit_phrase(phrase, self.max_line_width) {
                    Ok(fitted) => {
                        sink.set_text(&fitted.text());
                        self.staged = Some(next);
                        Ok(())
                    }
                    Err(e) => {
                        sink.set_text("");
                        Err(e)
                    }
                }
            }
        }
    }
}
