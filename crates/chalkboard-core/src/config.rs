//! Tunable parameters handed to the engines at construction.
//!
//! Every section has a `Default` built from `constants.rs`; frontends only
//! override what they need and call [`BoardConfig::validate`] once.

use crate::constants::*;
use crate::error::ConfigError;
use crate::theme::{ChalkColor, ThemeColor};
use glam::Vec2;

#[derive(Clone, Debug, PartialEq)]
pub struct SyncConfig {
    pub fade_window_ms: f64,
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            fade_window_ms: FADE_WINDOW_MS,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct LayoutConfig {
    pub max_line_width: u32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            max_line_width: MAX_LINE_WIDTH,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct PaintConfig {
    pub default_width: f32,
    pub min_width: f32,
    pub max_width: f32,
    pub default_color: ChalkColor,
    pub eraser_color: ChalkColor,
    pub stroke_z: f32,
    pub texture_repeat: Vec2,
}

impl Default for PaintConfig {
    fn default() -> Self {
        Self {
            default_width: DEFAULT_LINE_WIDTH,
            min_width: LINE_WIDTH_MIN,
            max_width: LINE_WIDTH_MAX,
            default_color: ThemeColor::Miku.color(),
            eraser_color: ThemeColor::Blackboard.color(),
            stroke_z: STROKE_Z,
            texture_repeat: stroke_texture_repeat(),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct BoardConfig {
    pub sync: SyncConfig,
    pub layout: LayoutConfig,
    pub paint: PaintConfig,
}

impl BoardConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        let fade = self.sync.fade_window_ms;
        if !fade.is_finite() || fade < 0.0 {
            return Err(ConfigError::FadeWindow(fade));
        }
        // A line must at least fit one full-width character.
        if self.layout.max_line_width < 2 {
            return Err(ConfigError::LineWidthBudget(self.layout.max_line_width));
        }
        let p = &self.paint;
        if !(p.min_width > 0.0 && p.min_width <= p.max_width) {
            return Err(ConfigError::StrokeWidthRange {
                min: p.min_width,
                max: p.max_width,
            });
        }
        if !(p.min_width..=p.max_width).contains(&p.default_width) {
            return Err(ConfigError::DefaultStrokeWidth(p.default_width));
        }
        Ok(())
    }
}
