// Host-side tests for timeline validation, lyric layout and playback helpers.

use chalkboard_core::{
    char_width, fit_phrase, fit_words, text_width, PhraseId, PlaybackClock, PlaybackState,
    PlayerStatus, TextInterval, TimeUpdateThrottle, Timeline, TimelineError, WordId,
};

fn phrase(text: &str, start: f64, end: f64, words: &[(&str, f64, f64)]) -> TextInterval {
    TextInterval::new(text, start, end).with_children(
        words
            .iter()
            .map(|&(w, s, e)| TextInterval::new(w, s, e))
            .collect(),
    )
}

#[test]
fn interval_containment_is_half_open() {
    let w = TextInterval::new("x", 100.0, 200.0);
    assert!(w.contains(100.0));
    assert!(w.contains(199.9));
    assert!(!w.contains(200.0));
    assert!(w.contains_with_margin(200.0, 0.0));
    assert!(w.contains_with_margin(0.0, 100.0));
    assert!(!w.contains_with_margin(-0.1, 100.0));
    assert_eq!(w.duration_ms(), 100.0);
}

#[test]
fn timeline_accepts_well_formed_tree() {
    let tl = Timeline::new(vec![
        phrase("ab", 0.0, 500.0, &[("a", 0.0, 200.0), ("b", 200.0, 500.0)]),
        phrase("c", 600.0, 900.0, &[("c", 650.0, 900.0)]),
    ])
    .unwrap();
    assert_eq!(tl.len(), 2);
    let id = WordId {
        phrase: PhraseId(1),
        index: 0,
    };
    assert_eq!(tl.word(id).map(|w| w.text.as_str()), Some("c"));
    assert_eq!(tl.parent_of(id).map(|p| p.text.as_str()), Some("c"));
    assert_eq!(tl.next_phrase(PhraseId(0)), Some(PhraseId(1)));
    assert_eq!(tl.next_phrase(PhraseId(1)), None);
    assert_eq!(tl.first_start_ms(), Some(0.0));
    assert!(Timeline::empty().first_start_ms().is_none());
}

#[test]
fn timeline_rejects_malformed_input() {
    let inverted = Timeline::new(vec![TextInterval::new("x", 10.0, 5.0)]);
    assert!(matches!(
        inverted,
        Err(TimelineError::InvertedInterval { index: 0, .. })
    ));

    let overlap = Timeline::new(vec![
        TextInterval::new("x", 0.0, 100.0),
        TextInterval::new("y", 50.0, 150.0),
    ]);
    assert_eq!(overlap, Err(TimelineError::Overlapping { index: 1 }));

    let unsorted = Timeline::new(vec![
        TextInterval::new("x", 200.0, 300.0),
        TextInterval::new("y", 0.0, 100.0),
    ]);
    assert_eq!(unsorted, Err(TimelineError::Unsorted { index: 1 }));

    let nan = Timeline::new(vec![TextInterval::new("x", f64::NAN, 1.0)]);
    assert_eq!(nan, Err(TimelineError::NonFinite { index: 0 }));

    let outside = Timeline::new(vec![phrase("x", 100.0, 200.0, &[("x", 50.0, 150.0)])]);
    assert_eq!(
        outside,
        Err(TimelineError::ChildOutOfParent { phrase: 0, word: 0 })
    );

    let bad_words = Timeline::new(vec![phrase(
        "xy",
        0.0,
        200.0,
        &[("x", 0.0, 150.0), ("y", 100.0, 200.0)],
    )]);
    match bad_words {
        Err(TimelineError::InPhrase { phrase, source }) => {
            assert_eq!(phrase, 0);
            assert_eq!(*source, TimelineError::Overlapping { index: 1 });
        }
        other => panic!("unexpected: {other:?}"),
    }
}

#[test]
fn adjacent_intervals_are_not_overlapping() {
    assert!(Timeline::new(vec![
        TextInterval::new("x", 0.0, 100.0),
        TextInterval::new("y", 100.0, 200.0),
    ])
    .is_ok());
}

#[test]
fn widths_count_ascii_as_one_and_others_as_two() {
    assert_eq!(char_width('a'), 1);
    assert_eq!(char_width('あ'), 2);
    assert_eq!(char_width('é'), 2);
    assert_eq!(text_width("aあ"), 3);
    assert_eq!(text_width(""), 0);
}

#[test]
fn words_wrap_when_line_budget_is_exceeded() {
    let ten = "aaaaaaaaaa";
    let eleven = "bbbbbbbbbbb";
    let fitted = fit_words([ten, eleven], 20).unwrap();
    assert_eq!(fitted.lines(), &[ten.to_string(), eleven.to_string()]);
    assert_eq!(fitted.text(), format!("{ten}\n{eleven}"));

    let fitted = fit_words([ten, ten], 20).unwrap();
    assert_eq!(fitted.line_count(), 1);
}

#[test]
fn full_width_text_fills_exactly_ten_characters() {
    let fitted = fit_words(["あいうえお", "かきくけこ", "さ"], 20).unwrap();
    assert_eq!(fitted.lines(), &["あいうえおかきくけこ".to_string(), "さ".to_string()]);
}

#[test]
fn oversized_word_is_an_error() {
    let err = fit_words(["ok", "z".repeat(21).as_str()], 20).unwrap_err();
    assert_eq!(err.width, 21);
    assert_eq!(err.max_width, 20);
    assert!(err.to_string().contains("too long"));

    assert!(fit_words(["z".repeat(20).as_str()], 20).is_ok());
}

#[test]
fn phrase_without_words_fits_its_own_text() {
    let p = TextInterval::new("hello", 0.0, 1.0);
    assert_eq!(fit_phrase(&p, 20).unwrap().text(), "hello");
    let empty = TextInterval::new("", 0.0, 1.0);
    assert!(fit_phrase(&empty, 20).unwrap().is_empty());
}

#[test]
fn playback_state_reports_clock() {
    let mut state = PlaybackState::default();
    assert_eq!(state.status, PlayerStatus::Stopped);
    state.set_position(42.0);
    state.play();
    assert!(state.is_playing());
    assert_eq!(state.position_ms(), Some(42.0));
    state.stop();
    assert!(!state.is_playing());
    assert_eq!(state.position_ms(), None);
}

#[test]
fn throttle_limits_updates_but_follows_seeks() {
    let mut t = TimeUpdateThrottle::new(250.0);
    assert!(t.should_emit(0.0));
    assert!(!t.should_emit(100.0));
    assert!(t.should_emit(250.0));
    assert!(!t.should_emit(300.0));
    assert!(t.should_emit(10.0));
    t.reset();
    assert!(t.should_emit(20.0));
}
