use crate::config::PaintConfig;
use crate::theme::ChalkColor;
use glam::Vec2;

/// Style captured by a stroke when its gesture starts.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StrokeStyle {
    pub width: f32,
    pub color: ChalkColor,
    pub texture_repeat: Vec2,
}

/// Current line settings for new strokes.
///
/// Eraser mode is a colour preset: switching it on paints with the board
/// colour, switching it off restores the last chalk colour.
#[derive(Clone, Debug, PartialEq)]
pub struct LineStyle {
    width: f32,
    color: ChalkColor,
    previous_color: ChalkColor,
    eraser_active: bool,
    eraser_color: ChalkColor,
    min_width: f32,
    max_width: f32,
    texture_repeat: Vec2,
}

impl LineStyle {
    pub fn new(config: &PaintConfig) -> Self {
        Self {
            width: config.default_width,
            color: config.default_color,
            previous_color: config.default_color,
            eraser_active: false,
            eraser_color: config.eraser_color,
            min_width: config.min_width,
            max_width: config.max_width,
            texture_repeat: config.texture_repeat,
        }
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn color(&self) -> ChalkColor {
        self.color
    }

    pub fn previous_color(&self) -> ChalkColor {
        self.previous_color
    }

    pub fn eraser_active(&self) -> bool {
        self.eraser_active
    }

    /// Clamp into the configured range; non-finite input is ignored.
    /// Returns the width now in effect.
    pub fn set_width(&mut self, width: f32) -> f32 {
        if width.is_finite() {
            self.width = width.clamp(self.min_width, self.max_width);
        }
        self.width
    }

    /// With the eraser on, only the colour to restore afterwards changes.
    pub fn set_color(&mut self, color: ChalkColor) {
        if self.eraser_active {
            self.previous_color = color;
        } else {
            self.previous_color = self.color;
            self.color = color;
        }
    }

    pub fn set_eraser(&mut self, on: bool) {
        if on == self.eraser_active {
            return;
        }
        self.eraser_active = on;
        if on {
            self.previous_color = self.color;
            self.color = self.eraser_color;
        } else {
            self.color = self.previous_color;
        }
    }

    pub fn toggle_eraser(&mut self) -> bool {
        self.set_eraser(!self.eraser_active);
        self.eraser_active
    }

    pub fn snapshot(&self) -> StrokeStyle {
        StrokeStyle {
            width: self.width,
            color: self.color,
            texture_repeat: self.texture_repeat,
        }
    }
}
