// Host-side tests for the control panel, info read-outs, colours and config.

use chalkboard_core::info::{
    beat_label, circ_in, position_label, to_vertical, valence_arousal_ratio, vertical_date,
};
use chalkboard_core::{
    BoardConfig, ChalkColor, ConfigError, ControlPanel, PaintConfig, PaintSession, PanelEvent,
    PlayerCommands, ThemeColor, SONGS,
};

#[derive(Debug, PartialEq)]
enum Call {
    Play,
    Pause,
    Stop,
    Seek(f64),
    Volume(u32),
    Load(String),
}

#[derive(Default)]
struct FakePlayer {
    calls: Vec<Call>,
}

impl PlayerCommands for FakePlayer {
    fn request_play(&mut self) {
        self.calls.push(Call::Play);
    }
    fn request_pause(&mut self) {
        self.calls.push(Call::Pause);
    }
    fn request_stop(&mut self) {
        self.calls.push(Call::Stop);
    }
    fn request_media_seek(&mut self, position_ms: f64) {
        self.calls.push(Call::Seek(position_ms));
    }
    fn set_volume(&mut self, volume: u32) {
        self.calls.push(Call::Volume(volume));
    }
    fn create_from_song_url(&mut self, url: &str) {
        self.calls.push(Call::Load(url.to_string()));
    }
}

fn setup() -> (ControlPanel, PaintSession, FakePlayer) {
    let paint = PaintSession::new(PaintConfig::default());
    (ControlPanel::new(&paint), paint, FakePlayer::default())
}

#[test]
fn transport_buttons_forward_to_player() {
    let (mut panel, mut paint, mut player) = setup();
    panel.handle(PanelEvent::Play, &mut paint, &mut player, None);
    panel.handle(PanelEvent::Pause, &mut paint, &mut player, None);
    panel.handle(PanelEvent::Stop, &mut paint, &mut player, None);
    panel.handle(PanelEvent::Jump, &mut paint, &mut player, Some(1234.0));
    // No lyrics loaded: jump does nothing.
    panel.handle(PanelEvent::Jump, &mut paint, &mut player, None);
    assert_eq!(
        player.calls,
        vec![Call::Play, Call::Pause, Call::Stop, Call::Seek(1234.0)]
    );
}

#[test]
fn selecting_a_song_stops_and_loads() {
    let (mut panel, mut paint, mut player) = setup();
    assert!(!panel.music_changed());
    panel.handle(PanelEvent::SelectSong(3), &mut paint, &mut player, None);
    assert!(panel.music_changed());
    assert_eq!(
        player.calls,
        vec![Call::Stop, Call::Load(SONGS[3].url.to_string())]
    );
}

#[test]
fn music_changed_flag_tracks_song_loading() {
    let (mut panel, mut paint, mut player) = setup();
    // Unknown index: nothing loads, the indicator stays off.
    panel.handle(PanelEvent::SelectSong(99), &mut paint, &mut player, None);
    assert!(!panel.music_changed());
    assert!(player.calls.is_empty());

    panel.handle(PanelEvent::SelectSong(0), &mut paint, &mut player, None);
    // Transport events while the song loads leave the flag alone.
    panel.handle(PanelEvent::Play, &mut paint, &mut player, None);
    assert!(panel.music_changed());

    // The lyric timeline of the new song arrived.
    panel.set_music_changed(false);
    assert!(!panel.music_changed());
}

#[test]
fn volume_is_rounded_and_clamped() {
    let (mut panel, mut paint, mut player) = setup();
    assert_eq!(panel.volume(), 100);
    panel.handle(PanelEvent::Volume(42.6), &mut paint, &mut player, None);
    panel.handle(PanelEvent::Volume(140.0), &mut paint, &mut player, None);
    panel.handle(PanelEvent::Volume(-3.0), &mut paint, &mut player, None);
    panel.handle(PanelEvent::Volume(f64::NAN), &mut paint, &mut player, None);
    assert_eq!(
        player.calls,
        vec![Call::Volume(43), Call::Volume(100), Call::Volume(0)]
    );
    assert_eq!(panel.volume(), 0);
}

#[test]
fn paint_controls_update_the_session() {
    let (mut panel, mut paint, mut player) = setup();
    panel.handle(PanelEvent::LineWidth(22.5), &mut paint, &mut player, None);
    assert_eq!(paint.style().width(), 22.5);

    let c = ChalkColor::rgb(0x10, 0x20, 0x30);
    panel.handle(PanelEvent::Color(c), &mut paint, &mut player, None);
    assert_eq!(paint.style().color(), c);
    assert_eq!(panel.color(), c);

    panel.handle(PanelEvent::EraserMode(true), &mut paint, &mut player, None);
    assert!(panel.eraser());
    assert_eq!(paint.style().color(), ThemeColor::Blackboard.color());
    // Picker keeps showing the chalk colour.
    assert_eq!(panel.color(), c);
    assert!(player.calls.is_empty());
}

#[test]
fn chalk_buttons_request_widget_refresh() {
    let (mut panel, mut paint, mut player) = setup();
    let out = panel.handle(PanelEvent::ToggleEraser, &mut paint, &mut player, None);
    assert!(out.refresh_widgets);
    assert!(panel.eraser());
    assert!(paint.style().eraser_active());

    let out = panel.handle(
        PanelEvent::ChalkPicked(ThemeColor::Kaito),
        &mut paint,
        &mut player,
        None,
    );
    assert!(out.refresh_widgets);
    assert_eq!(panel.color(), ThemeColor::Kaito.color());

    panel.handle(PanelEvent::ToggleEraser, &mut paint, &mut player, None);
    assert_eq!(paint.style().color(), ThemeColor::Kaito.color());
}

#[test]
fn clear_board_button_clears_strokes() {
    struct NoControls;
    impl chalkboard_core::ChalkControls for NoControls {
        fn set_enabled(&mut self, _enabled: bool) {}
    }
    let (mut panel, mut paint, mut player) = setup();
    paint.begin_stroke(1, &mut NoControls);
    paint.end_stroke(&mut NoControls);
    assert_eq!(paint.board().len(), 1);
    panel.handle(PanelEvent::ClearBoard, &mut paint, &mut player, None);
    assert!(paint.board().is_empty());
}

#[test]
fn beat_label_uses_eased_progress() {
    assert_eq!(circ_in(0.0), 0.0);
    assert_eq!(circ_in(1.0), 1.0);
    assert_eq!(circ_in(2.0), 1.0);
    assert_eq!(beat_label(1, 4, 0.0), "1 / 4 [0%]");
    assert_eq!(beat_label(4, 4, 1.0), "4 / 4 [100%]");
    // circ_in(0.5) = 1 - sqrt(0.75) ~= 0.134
    assert_eq!(beat_label(2, 4, 0.5), "2 / 4 [14%]");
}

#[test]
fn valence_arousal_needs_nonzero_arousal() {
    assert_eq!(valence_arousal_ratio(0.5, 0.25), Some(2.0));
    assert_eq!(valence_arousal_ratio(0.5, 0.0), None);
    assert_eq!(valence_arousal_ratio(f64::NAN, 1.0), None);
}

#[test]
fn vertical_text_helpers() {
    assert_eq!(to_vertical("ミク"), "ミ\nク");
    assert_eq!(to_vertical(""), "");
    assert_eq!(vertical_date(8, 31, 2), "8\n月\n31\n日\n(火)");
    assert_eq!(vertical_date(1, 1, 7), "1\n月\n1\n日\n(日)");
}

#[test]
fn position_label_is_minutes_and_seconds() {
    assert_eq!(position_label(0.0), "0:00");
    assert_eq!(position_label(61_999.0), "1:01");
    assert_eq!(position_label(-5.0), "0:00");
    assert_eq!(position_label(f64::NAN), "0:00");
}

#[test]
fn colours_parse_and_format_as_hex() {
    let c: ChalkColor = "#54C5a3".parse().unwrap();
    assert_eq!(c, ThemeColor::Miku.color());
    assert_eq!(c.to_string(), "#54c5a3");
    assert!("54c5a3".parse::<ChalkColor>().is_err());
    assert!("#54c5a".parse::<ChalkColor>().is_err());
    assert!("#zzzzzz".parse::<ChalkColor>().is_err());

    let white = ThemeColor::White.color().to_linear_rgba(2.0);
    assert_eq!(white, [1.0, 1.0, 1.0, 1.0]);
}

#[test]
fn theme_ids_round_trip() {
    for theme in ThemeColor::ALL {
        assert_eq!(ThemeColor::from_id(theme.id()), Some(theme));
    }
    assert_eq!(ThemeColor::from_id("teto"), None);
}

#[test]
fn default_config_is_valid() {
    assert_eq!(BoardConfig::default().validate(), Ok(()));

    let mut cfg = BoardConfig::default();
    cfg.sync.fade_window_ms = -1.0;
    assert_eq!(cfg.validate(), Err(ConfigError::FadeWindow(-1.0)));

    let mut cfg = BoardConfig::default();
    cfg.layout.max_line_width = 1;
    assert_eq!(cfg.validate(), Err(ConfigError::LineWidthBudget(1)));

    let mut cfg = BoardConfig::default();
    cfg.paint.default_width = 200.0;
    assert_eq!(cfg.validate(), Err(ConfigError::DefaultStrokeWidth(200.0)));

    let mut cfg = BoardConfig::default();
    cfg.paint.min_width = 0.0;
    assert!(matches!(
        cfg.validate(),
        Err(ConfigError::StrokeWidthRange { .. })
    ));
}
