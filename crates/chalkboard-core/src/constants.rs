use glam::{Vec2, Vec3};

// Shared lyric/paint tuning constants used by the web frontend and the tests.

// Lyric timing
pub const FADE_WINDOW_MS: f64 = 100.0; // symmetric tolerance around a phrase's start/end
pub const MAX_LINE_WIDTH: u32 = 20; // half-width units per rendered lyric line
pub const EMPTY_LABEL: &str = "-"; // shown in the phrase/word read-outs when nothing is active

// Position read-out refresh interval
pub const TIME_UPDATE_THROTTLE_MS: f64 = 250.0;

// Stroke style
pub const DEFAULT_LINE_WIDTH: f32 = 10.0;
pub const LINE_WIDTH_MIN: f32 = 0.5;
pub const LINE_WIDTH_MAX: f32 = 100.0;
pub const LINE_WIDTH_STEP: f32 = 0.5;
pub const STROKE_Z: f32 = 1.0; // strokes sit just above the board plane
pub const STROKE_TEXTURE_REPEAT: [f32; 2] = [3.0, 1.0];

// Board scene
pub const BOARD_Z: f32 = 0.0;
pub const CAMERA_Z: f32 = 500.0;
pub const CAMERA_NEAR: f32 = 1.0;
pub const CAMERA_FAR: f32 = 1000.0;

// Board frame outline
pub const FRAME_LINE_WIDTH: f32 = 30.0;
pub const FRAME_SHADOW_WIDTH: f32 = 10.0;
pub const FRAME_SHADOW_INSET: f32 = 10.0;
pub const FRAME_Z: f32 = 10.0;

// Player
pub const VOLUME_MAX: u32 = 100;

#[inline]
pub fn stroke_texture_repeat() -> Vec2 {
    Vec2::new(STROKE_TEXTURE_REPEAT[0], STROKE_TEXTURE_REPEAT[1])
}

#[inline]
pub fn camera_eye() -> Vec3 {
    Vec3::new(0.0, 0.0, CAMERA_Z)
}
