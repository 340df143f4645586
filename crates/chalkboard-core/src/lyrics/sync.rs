//! Maps a continuously advancing playback position onto the active phrase and
//! word, with opacity blending near phrase boundaries.
//!
//! The engine owns the only `update` entry point; it performs the interval
//! search, the tie-break between adjacent phrases and the fade computation,
//! and reports what changed as [`SyncEvent`]s. Nothing is emitted when a tick
//! resolves to the same state as the previous one.

use crate::config::SyncConfig;
use crate::playback::PlaybackClock;
use crate::timeline::{PhraseId, Timeline, WordId};
use smallvec::SmallVec;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum UnitPhase {
    #[default]
    Inactive,
    Active,
    Fading,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SyncState {
    pub phrase: Option<PhraseId>,
    pub word: Option<WordId>,
    pub opacity: f32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SyncEvent {
    /// `halted` is set when the change comes from pause/stop/song change
    /// rather than from the position leaving a phrase.
    PhraseChanged {
        previous: Option<PhraseId>,
        current: Option<PhraseId>,
        halted: bool,
    },
    WordChanged {
        previous: Option<WordId>,
        current: Option<WordId>,
    },
    OpacityChanged(f32),
}

pub type SyncEvents = SmallVec<[SyncEvent; 3]>;

pub struct LyricSync {
    config: SyncConfig,
    timeline: Timeline,
    state: SyncState,
    position_ms: Option<f64>,
    halted: bool,
}

impl LyricSync {
    pub fn new(timeline: Timeline, config: SyncConfig) -> Self {
        Self {
            config,
            timeline,
            state: SyncState::default(),
            position_ms: None,
            halted: false,
        }
    }

    pub fn timeline(&self) -> &Timeline {
        &self.timeline
    }

    pub fn state(&self) -> SyncState {
        self.state
    }

    pub fn is_halted(&self) -> bool {
        self.halted
    }

    /// Replace the timeline wholesale (song change). Active units are cleared.
    pub fn load(&mut self, timeline: Timeline) -> SyncEvents {
        let events = self.halt();
        self.timeline = timeline;
        self.halted = false;
        events
    }

    /// Resolve against the player's timer: not playing means nothing active.
    pub fn tick<C: PlaybackClock + ?Sized>(&mut self, clock: &C) -> SyncEvents {
        let position = if clock.is_playing() {
            clock.position_ms()
        } else {
            None
        };
        self.update(position)
    }

    pub fn update(&mut self, position_ms: Option<f64>) -> SyncEvents {
        let position = position_ms
            .filter(|t| t.is_finite() && *t >= 0.0)
            .filter(|_| !self.halted);
        self.position_ms = position;

        let Some(t) = position else {
            return self.transition(None, None, 0.0, false);
        };
        match self.phrase_at(t) {
            Some(phrase) => {
                let word = self.word_at(phrase, t);
                let opacity = self.opacity_at(phrase, t);
                self.transition(Some(phrase), word, opacity, false)
            }
            None => self.transition(None, None, 0.0, false),
        }
    }

    /// Clear phrase and word; further updates stay inactive until [`resume`].
    ///
    /// [`resume`]: LyricSync::resume
    pub fn pause(&mut self) -> SyncEvents {
        self.halt()
    }

    pub fn stop(&mut self) -> SyncEvents {
        self.halt()
    }

    pub fn resume(&mut self) {
        self.halted = false;
    }

    pub fn phrase_phase(&self) -> UnitPhase {
        let (Some(id), Some(t)) = (self.state.phrase, self.position_ms) else {
            return UnitPhase::Inactive;
        };
        match self.timeline.phrase(id) {
            Some(p) if p.start_ms <= t && t <= p.end_ms => UnitPhase::Active,
            Some(_) => UnitPhase::Fading,
            None => UnitPhase::Inactive,
        }
    }

    pub fn word_phase(&self) -> UnitPhase {
        if self.state.word.is_some() {
            UnitPhase::Active
        } else {
            UnitPhase::Inactive
        }
    }

    /// Last phrase (in timeline order) whose fade-widened range contains `t`.
    pub fn phrase_at(&self, t: f64) -> Option<PhraseId> {
        let fade = self.config.fade_window_ms;
        let phrases = self.timeline.phrases();
        // Phrases are sorted and disjoint, so their ends ascend as well: only the
        // last phrase whose widened start is <= t can be the last match.
        let idx = phrases.partition_point(|p| p.start_ms - fade <= t);
        let candidate = idx.checked_sub(1)?;
        phrases[candidate]
            .contains_with_margin(t, fade)
            .then_some(PhraseId(candidate))
    }

    /// Word of `phrase` containing `t` exactly; words do not fade.
    pub fn word_at(&self, phrase: PhraseId, t: f64) -> Option<WordId> {
        let words = &self.timeline.phrase(phrase)?.children;
        let idx = words.partition_point(|w| w.start_ms <= t);
        let candidate = idx.checked_sub(1)?;
        words[candidate].contains(t).then_some(WordId {
            phrase,
            index: candidate,
        })
    }

    pub fn opacity_at(&self, phrase: PhraseId, t: f64) -> f32 {
        let fade = self.config.fade_window_ms;
        let Some(p) = self.timeline.phrase(phrase) else {
            return 0.0;
        };
        if fade <= 0.0 {
            return 1.0;
        }
        let opacity = if t < p.start_ms {
            1.0 - (p.start_ms - t) / fade
        } else if t > p.end_ms {
            1.0 - (t - p.end_ms) / fade
        } else {
            1.0
        };
        opacity.clamp(0.0, 1.0) as f32
    }

    fn halt(&mut self) -> SyncEvents {
        self.halted = true;
        self.position_ms = None;
        self.transition(None, None, 0.0, true)
    }

    fn transition(
        &mut self,
        phrase: Option<PhraseId>,
        word: Option<WordId>,
        opacity: f32,
        halted: bool,
    ) -> SyncEvents {
        let prev = self.state;
        let mut events = SyncEvents::new();
        if prev.phrase != phrase || halted {
            log::debug!(
                "[lyrics] phrase {:?} -> {:?}{}",
                prev.phrase,
                phrase,
                if halted { " (halted)" } else { "" }
            );
            events.push(SyncEvent::PhraseChanged {
                previous: prev.phrase,
                current: phrase,
                halted,
            });
        }
        if prev.word != word {
            events.push(SyncEvent::WordChanged {
                previous: prev.word,
                current: word,
            });
        }
        if prev.opacity != opacity {
            events.push(SyncEvent::OpacityChanged(opacity));
        }
        self.state = SyncState {
            phrase,
            word,
            opacity,
        };
        events
    }
}
