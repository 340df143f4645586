//! Control panel state: routes panel and chalk-button input to the player
//! and to the paint session.

use crate::constants::VOLUME_MAX;
use crate::paint::PaintSession;
use crate::theme::{ChalkColor, ThemeColor};

/// Outbound commands to the external player.
pub trait PlayerCommands {
    fn request_play(&mut self);
    fn request_pause(&mut self);
    fn request_stop(&mut self);
    fn request_media_seek(&mut self, position_ms: f64);
    fn set_volume(&mut self, volume: u32);
    fn create_from_song_url(&mut self, url: &str);
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Song {
    pub title: &'static str,
    pub url: &'static str,
}

pub const SONGS: &[Song] = &[
    Song {
        title: "First Note / blues",
        url: "https://piapro.jp/t/FDb1/20210213190029",
    },
    Song {
        title: "嘘も本当も君だから / 真島ゆろ",
        url: "https://piapro.jp/t/YW_d/20210206123357",
    },
    Song {
        title: "その心に灯る色は / ラテルネ",
        url: "https://www.youtube.com/watch?v=bMtYf3R0zhY",
    },
    Song {
        title: "夏をなぞって / シロクマ消しゴム",
        url: "https://piapro.jp/t/R6EN/20210222075543",
    },
    Song {
        title: "密かなる交信曲 / 濁茶",
        url: "https://www.youtube.com/watch?v=Ch4RQPG1Tmo",
    },
    Song {
        title: "Freedom! / Chiquewa",
        url: "https://piapro.jp/t/N--x/20210204215604",
    },
];

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PanelEvent {
    SelectSong(usize),
    Play,
    Pause,
    Stop,
    Jump,
    Volume(f64),
    LineWidth(f32),
    Color(ChalkColor),
    EraserMode(bool),
    ToggleEraser,
    ChalkPicked(ThemeColor),
    ClearBoard,
}

/// What the frontend has to reflect back into its widgets.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PanelOutcome {
    pub refresh_widgets: bool,
}

#[derive(Clone, Debug)]
pub struct ControlPanel {
    color: ChalkColor,
    eraser: bool,
    volume: u32,
    music_changed: bool,
}

impl ControlPanel {
    pub fn new(paint: &PaintSession) -> Self {
        Self {
            color: paint.style().color(),
            eraser: paint.style().eraser_active(),
            volume: VOLUME_MAX,
            music_changed: false,
        }
    }

    /// Colour shown by the picker (the chalk colour, even in eraser mode).
    pub fn color(&self) -> ChalkColor {
        self.color
    }

    pub fn eraser(&self) -> bool {
        self.eraser
    }

    pub fn volume(&self) -> u32 {
        self.volume
    }

    pub fn music_changed(&self) -> bool {
        self.music_changed
    }

    pub fn set_music_changed(&mut self, changed: bool) {
        self.music_changed = changed;
    }

    /// `jump_target_ms` is where "Jump" seeks to (first lyric of the song).
    pub fn handle<P: PlayerCommands + ?Sized>(
        &mut self,
        event: PanelEvent,
        paint: &mut PaintSession,
        player: &mut P,
        jump_target_ms: Option<f64>,
    ) -> PanelOutcome {
        let mut outcome = PanelOutcome::default();
        match event {
            PanelEvent::SelectSong(index) => match SONGS.get(index) {
                Some(song) => {
                    player.request_stop();
                    player.create_from_song_url(song.url);
                    self.music_changed = true;
                    log::info!("[panel] loading song {:?}", song.title);
                }
                None => log::warn!("[panel] no song at index {}", index),
            },
            PanelEvent::Play => player.request_play(),
            PanelEvent::Pause => player.request_pause(),
            PanelEvent::Stop => player.request_stop(),
            PanelEvent::Jump => match jump_target_ms {
                Some(ms) => player.request_media_seek(ms),
                None => log::debug!("[panel] jump ignored: no lyrics loaded"),
            },
            PanelEvent::Volume(v) => {
                if v.is_finite() {
                    self.volume = v.round().clamp(0.0, VOLUME_MAX as f64) as u32;
                    player.set_volume(self.volume);
                }
            }
            PanelEvent::LineWidth(w) => {
                paint.set_width(w);
            }
            PanelEvent::Color(c) => {
                self.color = c;
                paint.set_color(c);
            }
            PanelEvent::EraserMode(on) => {
                self.eraser = on;
                paint.set_eraser(on);
            }
            PanelEvent::ToggleEraser => {
                self.eraser = paint.toggle_eraser();
                outcome.refresh_widgets = true;
            }
            PanelEvent::ChalkPicked(theme) => {
                self.color = theme.color();
                paint.set_color(self.color);
                outcome.refresh_widgets = true;
            }
            PanelEvent::ClearBoard => {
                paint.clear_all();
            }
        }
        outcome
    }
}
