// Sanity checks on the shared tuning constants.

use chalkboard_core::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn lyric_constants_are_positive() {
    assert!(FADE_WINDOW_MS > 0.0);
    assert!(MAX_LINE_WIDTH >= 2);
    assert!(TIME_UPDATE_THROTTLE_MS > 0.0);
    assert_eq!(EMPTY_LABEL, "-");
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn line_width_range_is_consistent() {
    assert!(LINE_WIDTH_MIN > 0.0);
    assert!(LINE_WIDTH_MIN <= DEFAULT_LINE_WIDTH && DEFAULT_LINE_WIDTH <= LINE_WIDTH_MAX);
    assert!(LINE_WIDTH_STEP > 0.0);
    // The slider range is a whole number of steps.
    let steps = (LINE_WIDTH_MAX - LINE_WIDTH_MIN) / LINE_WIDTH_STEP;
    assert_eq!(steps.fract(), 0.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn scene_depths_are_inside_the_camera_range() {
    assert!(CAMERA_NEAR > 0.0 && CAMERA_NEAR < CAMERA_FAR);
    for z in [BOARD_Z, STROKE_Z, FRAME_Z] {
        let dist = CAMERA_Z - z;
        assert!(dist > CAMERA_NEAR && dist < CAMERA_FAR, "z={z}");
    }
    // Strokes in front of the board, frame in front of strokes.
    assert!(BOARD_Z < STROKE_Z && STROKE_Z < FRAME_Z);
    assert_eq!(camera_eye().z, CAMERA_Z);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn frame_shadow_sits_inside_the_frame() {
    assert!(FRAME_SHADOW_INSET > 0.0);
    assert!(FRAME_SHADOW_INSET + FRAME_SHADOW_WIDTH / 2.0 <= FRAME_LINE_WIDTH);
    assert_eq!(stroke_texture_repeat().to_array(), STROKE_TEXTURE_REPEAT);
}

#[test]
fn stroke_shader_declares_entry_points() {
    assert!(STROKE_WGSL.contains("fn vs_stroke"));
    assert!(STROKE_WGSL.contains("fn fs_stroke"));
}

#[test]
fn stroke_uniforms_match_the_shader_block() {
    assert_eq!(std::mem::size_of::<StrokeUniforms>(), 64);
    let start = STROKE_WGSL.find("struct Uniforms {").unwrap();
    let block = &STROKE_WGSL[start..];
    let block = &block[..block.find("};").unwrap()];
    // every field written by the renderer is read, and nothing else is declared
    let fields: Vec<&str> = block.lines().skip(1).map(str::trim).collect();
    assert_eq!(fields, ["view_proj: mat4x4<f32>,"]);
    assert!(STROKE_WGSL.contains("u.view_proj"));

    let m = glam::Mat4::from_translation(glam::Vec3::new(1.0, 2.0, 3.0));
    assert_eq!(StrokeUniforms::new(m).view_proj[3], [1.0, 2.0, 3.0, 1.0]);
}
