// Host-side tests for the lyric sync engine and the lyric stage.

use chalkboard_core::{
    LayoutConfig, LyricStage, LyricSync, PhraseId, PlaybackClock, PlaybackState, SyncConfig,
    SyncEvent, TextInterval, TextSink, Timeline, UnitPhase, WordId,
};

fn word(text: &str, start: f64, end: f64) -> TextInterval {
    TextInterval::new(text, start, end)
}

fn phrase(words: Vec<TextInterval>) -> TextInterval {
    let start = words.first().map_or(0.0, |w| w.start_ms);
    let end = words.last().map_or(0.0, |w| w.end_ms);
    let text: String = words.iter().map(|w| w.text.as_str()).collect();
    TextInterval::new(text, start, end).with_children(words)
}

/// A: 0..1000, B: 1050..1500 ("Hello" 1050..1200, "World" 1200..1500),
/// C: 3000..4000.
fn timeline() -> Timeline {
    Timeline::new(vec![
        phrase(vec![word("foo", 0.0, 400.0), word("bar", 400.0, 1000.0)]),
        phrase(vec![word("Hello", 1050.0, 1200.0), word("World", 1200.0, 1500.0)]),
        phrase(vec![word("end", 3000.0, 4000.0)]),
    ])
    .expect("valid timeline")
}

fn engine() -> LyricSync {
    LyricSync::new(timeline(), SyncConfig::default())
}

#[derive(Default)]
struct RecordingSink {
    text: String,
    opacity: f32,
    phrase_label: String,
    word_label: String,
    text_writes: usize,
}

impl TextSink for RecordingSink {
    fn set_text(&mut self, text: &str) {
        self.text = text.to_string();
        self.text_writes += 1;
    }
    fn set_opacity(&mut self, opacity: f32) {
        self.opacity = opacity;
    }
    fn set_phrase_label(&mut self, label: &str) {
        self.phrase_label = label.to_string();
    }
    fn set_word_label(&mut self, label: &str) {
        self.word_label = label.to_string();
    }
}

#[test]
fn selected_phrase_window_contains_position() {
    let mut sync = engine();
    let tl = timeline();
    let mut t = -200.0;
    while t < 4500.0 {
        sync.update(Some(t));
        if let Some(id) = sync.state().phrase {
            let p = tl.phrase(id).unwrap();
            assert!(p.start_ms - 100.0 <= t && t <= p.end_ms + 100.0, "t={t}");
        }
        t += 7.5;
    }
}

#[test]
fn overlapping_fade_windows_prefer_upcoming_phrase() {
    let mut sync = engine();
    sync.update(Some(1025.0));
    assert_eq!(sync.state().phrase, Some(PhraseId(1)));
    assert!((sync.state().opacity - 0.75).abs() < 1e-6);
    assert_eq!(sync.phrase_phase(), UnitPhase::Fading);
}

#[test]
fn fade_out_after_phrase_end() {
    let mut sync = engine();
    sync.update(Some(1450.0));
    assert_eq!(sync.state().phrase, Some(PhraseId(1)));
    assert_eq!(sync.state().opacity, 1.0);
    assert_eq!(
        sync.state().word,
        Some(WordId {
            phrase: PhraseId(1),
            index: 1
        })
    );

    sync.update(Some(1550.0));
    assert_eq!(sync.state().phrase, Some(PhraseId(1)));
    assert!((sync.state().opacity - 0.5).abs() < 1e-6);
    // Words use exact containment and do not fade.
    assert_eq!(sync.state().word, None);

    sync.update(Some(1700.0));
    assert_eq!(sync.state().phrase, None);
    assert_eq!(sync.state().opacity, 0.0);
}

#[test]
fn fade_in_ramps_towards_start() {
    let mut sync = engine();
    sync.update(Some(2900.0));
    assert_eq!(sync.state().phrase, Some(PhraseId(2)));
    assert_eq!(sync.state().opacity, 0.0);
    sync.update(Some(2950.0));
    assert!((sync.state().opacity - 0.5).abs() < 1e-6);
    sync.update(Some(3000.0));
    assert_eq!(sync.state().opacity, 1.0);
    assert_eq!(sync.phrase_phase(), UnitPhase::Active);
    assert_eq!(sync.word_phase(), UnitPhase::Active);
}

#[test]
fn repeated_update_is_idempotent() {
    let mut sync = engine();
    let first = sync.update(Some(1100.0));
    assert!(!first.is_empty());
    let state = sync.state();
    let second = sync.update(Some(1100.0));
    assert!(second.is_empty(), "unexpected events: {second:?}");
    assert_eq!(sync.state(), state);
}

#[test]
fn invalid_positions_mean_no_phrase() {
    let mut sync = engine();
    sync.update(Some(500.0));
    assert!(sync.state().phrase.is_some());
    sync.update(Some(-1.0));
    assert_eq!(sync.state().phrase, None);
    sync.update(Some(500.0));
    sync.update(Some(f64::NAN));
    assert_eq!(sync.state().phrase, None);
    sync.update(Some(500.0));
    sync.update(None);
    assert_eq!(sync.state().phrase, None);
    assert_eq!(sync.state().word, None);
}

#[test]
fn pause_clears_and_blocks_until_resume() {
    let mut sync = engine();
    sync.update(Some(1100.0));
    let events = sync.pause();
    assert!(events.iter().any(|e| matches!(
        e,
        SyncEvent::PhraseChanged {
            current: None,
            halted: true,
            ..
        }
    )));
    assert_eq!(sync.state().phrase, None);
    assert_eq!(sync.state().word, None);

    sync.update(Some(1100.0));
    assert_eq!(sync.state().phrase, None);

    sync.resume();
    sync.update(Some(1100.0));
    assert_eq!(sync.state().phrase, Some(PhraseId(1)));
}

#[test]
fn tick_reads_the_player_clock() {
    let mut sync = engine();
    let mut clock = PlaybackState::default();
    clock.set_position(1100.0);
    assert!(!clock.is_playing());
    sync.tick(&clock);
    assert_eq!(sync.state().phrase, None);

    clock.play();
    sync.tick(&clock);
    assert_eq!(sync.state().phrase, Some(PhraseId(1)));

    clock.pause();
    sync.tick(&clock);
    assert_eq!(sync.state().phrase, None);
}

#[test]
fn loading_a_new_song_resets_state() {
    let mut sync = engine();
    sync.update(Some(1100.0));
    let other = Timeline::new(vec![phrase(vec![word("la", 0.0, 100.0)])]).unwrap();
    sync.load(other);
    assert_eq!(sync.state().phrase, None);
    assert!(!sync.is_halted());
    sync.update(Some(50.0));
    assert_eq!(sync.state().phrase, Some(PhraseId(0)));
}

#[test]
fn stage_shows_phrase_and_labels() {
    let tl = timeline();
    let mut sync = LyricSync::new(tl.clone(), SyncConfig::default());
    let mut stage = LyricStage::new(LayoutConfig::default());
    let mut sink = RecordingSink::default();

    let events = sync.update(Some(1100.0));
    stage.apply(&tl, &events, &mut sink).unwrap();
    assert_eq!(sink.text, "HelloWorld");
    assert_eq!(sink.phrase_label, "HelloWorld");
    assert_eq!(sink.word_label, "Hello");
    assert_eq!(sink.opacity, 1.0);
    assert_eq!(stage.shown(), Some(PhraseId(1)));
}

#[test]
fn stage_prestages_next_phrase_during_gap() {
    let tl = timeline();
    let mut sync = LyricSync::new(tl.clone(), SyncConfig::default());
    let mut stage = LyricStage::new(LayoutConfig::default());
    let mut sink = RecordingSink::default();

    let events = sync.update(Some(1300.0));
    stage.apply(&tl, &events, &mut sink).unwrap();
    assert_eq!(sink.text, "HelloWorld");

    // Gap between B and C: C is laid out invisibly.
    let events = sync.update(Some(2000.0));
    stage.apply(&tl, &events, &mut sink).unwrap();
    assert_eq!(sink.text, "end");
    assert_eq!(sink.opacity, 0.0);
    assert_eq!(sink.phrase_label, "-");
    assert_eq!(stage.staged(), Some(PhraseId(2)));
    let writes = sink.text_writes;

    // C activates: revealed without a second layout.
    let events = sync.update(Some(3050.0));
    stage.apply(&tl, &events, &mut sink).unwrap();
    assert_eq!(sink.text_writes, writes);
    assert_eq!(sink.text, "end");
    assert_eq!(sink.opacity, 1.0);
    assert_eq!(stage.shown(), Some(PhraseId(2)));
}

#[test]
fn stage_direct_handoff_relayouts_text() {
    let tl = timeline();
    let mut sync = LyricSync::new(tl.clone(), SyncConfig::default());
    let mut stage = LyricStage::new(LayoutConfig::default());
    let mut sink = RecordingSink::default();

    let events = sync.update(Some(900.0));
    stage.apply(&tl, &events, &mut sink).unwrap();
    assert_eq!(sink.text, "foobar");

    let events = sync.update(Some(1025.0));
    stage.apply(&tl, &events, &mut sink).unwrap();
    assert_eq!(sink.text, "HelloWorld");
    assert!((sink.opacity - 0.75).abs() < 1e-6);
}

#[test]
fn stage_clears_on_pause() {
    let tl = timeline();
    let mut sync = LyricSync::new(tl.clone(), SyncConfig::default());
    let mut stage = LyricStage::new(LayoutConfig::default());
    let mut sink = RecordingSink::default();

    let events = sync.update(Some(1100.0));
    stage.apply(&tl, &events, &mut sink).unwrap();
    let events = sync.pause();
    stage.apply(&tl, &events, &mut sink).unwrap();
    assert_eq!(sink.text, "");
    assert_eq!(sink.opacity, 0.0);
    assert_eq!(sink.phrase_label, "-");
    assert_eq!(sink.word_label, "-");
    assert_eq!(stage.shown(), None);
    assert_eq!(stage.staged(), None);
}

#[test]
fn stage_surfaces_text_too_long() {
    let long = "x".repeat(21);
    let tl = Timeline::new(vec![phrase(vec![word(&long, 0.0, 500.0)])]).unwrap();
    let mut sync = LyricSync::new(tl.clone(), SyncConfig::default());
    let mut stage = LyricStage::new(LayoutConfig::default());
    let mut sink = RecordingSink::default();

    let events = sync.update(Some(100.0));
    let err = stage.apply(&tl, &events, &mut sink).unwrap_err();
    assert_eq!(err.width, 21);
    assert_eq!(err.max_width, 20);
    assert_eq!(sink.text, "");
    // Word label still updated even though the phrase failed.
    assert_eq!(sink.word_label, long);
    assert_eq!(stage.shown(), None);
}
