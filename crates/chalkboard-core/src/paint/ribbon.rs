//! Polyline to triangle-list extrusion for chalk strokes and the board frame.

use crate::constants::{
    stroke_texture_repeat, FRAME_LINE_WIDTH, FRAME_SHADOW_INSET, FRAME_SHADOW_WIDTH, FRAME_Z,
};
use crate::paint::stroke::Stroke;
use crate::paint::style::StrokeStyle;
use crate::theme::{FRAME_COLOR, FRAME_SHADOW_COLOR};
use glam::{Mat4, Vec2, Vec3};

#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct StrokeVertex {
    pub position: [f32; 3],
    pub uv: [f32; 2],
    pub color: [f32; 4],
}

/// Uniform block of `stroke.wgsl`.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct StrokeUniforms {
    pub view_proj: [[f32; 4]; 4],
}

impl StrokeUniforms {
    #[inline]
    pub fn new(view_proj: Mat4) -> Self {
        Self {
            view_proj: view_proj.to_cols_array_2d(),
        }
    }
}

const MIN_SEGMENT: f32 = 1e-4;

/// Append the ribbon for `points` to `out` and return how many vertices
/// were written. Fewer than two distinct points produce nothing.
///
/// `u` runs along the arc length scaled by `texture_repeat.x`, `v` runs
/// across the width from 0 to `texture_repeat.y`.
pub fn build_ribbon(points: &[Vec3], style: &StrokeStyle, out: &mut Vec<StrokeVertex>) -> usize {
    let mut pts: Vec<Vec3> = Vec::with_capacity(points.len());
    for &p in points {
        if pts.last().map_or(true, |q: &Vec3| q.distance(p) > MIN_SEGMENT) {
            pts.push(p);
        }
    }
    if pts.len() < 2 {
        return 0;
    }

    let mut arc = Vec::with_capacity(pts.len());
    let mut total = 0.0_f32;
    arc.push(0.0);
    for w in pts.windows(2) {
        total += w[0].distance(w[1]);
        arc.push(total);
    }

    let half = style.width * 0.5;
    let color = style.color.to_linear_rgba(1.0);
    let repeat = style.texture_repeat;
    let mut prev_normal = Vec2::Y;
    let mut edges: Vec<(StrokeVertex, StrokeVertex)> = Vec::with_capacity(pts.len());
    for i in 0..pts.len() {
        let a = pts[i.saturating_sub(1)];
        let b = pts[(i + 1).min(pts.len() - 1)];
        let tangent = (b - a).truncate();
        let normal = if tangent.length_squared() > MIN_SEGMENT * MIN_SEGMENT {
            tangent.normalize().perp()
        } else {
            // Stroke doubled back on itself; keep the previous orientation.
            prev_normal
        };
        prev_normal = normal;

        let offset = (normal * half).extend(0.0);
        let u = arc[i] / total * repeat.x;
        edges.push((
            StrokeVertex {
                position: (pts[i] + offset).to_array(),
                uv: [u, 0.0],
                color,
            },
            StrokeVertex {
                position: (pts[i] - offset).to_array(),
                uv: [u, repeat.y],
                color,
            },
        ));
    }

    let before = out.len();
    for w in edges.windows(2) {
        let (l0, r0) = w[0];
        let (l1, r1) = w[1];
        out.extend_from_slice(&[l0, r0, l1, l1, r0, r1]);
    }
    out.len() - before
}

/// Closed rectangle through the four corners of a `width` x `height` board
/// centred on the origin, pulled in by `inset`.
pub fn frame_outline(width: f32, height: f32, inset: f32, z: f32) -> [Vec3; 5] {
    let hw = width / 2.0 - inset;
    let hh = height / 2.0 - inset;
    [
        Vec3::new(-hw, -hh, z),
        Vec3::new(-hw, hh, z),
        Vec3::new(hw, hh, z),
        Vec3::new(hw, -hh, z),
        Vec3::new(-hw, -hh, z),
    ]
}

/// Frame and inner shadow of the blackboard, shadow first.
pub fn board_frame(width: f32, height: f32, out: &mut Vec<StrokeVertex>) -> usize {
    let repeat = stroke_texture_repeat();
    let shadow = StrokeStyle {
        width: FRAME_SHADOW_WIDTH,
        color: FRAME_SHADOW_COLOR,
        texture_repeat: repeat,
    };
    let frame = StrokeStyle {
        width: FRAME_LINE_WIDTH,
        color: FRAME_COLOR,
        texture_repeat: repeat,
    };
    build_ribbon(
        &frame_outline(width, height, FRAME_SHADOW_INSET, FRAME_Z),
        &shadow,
        out,
    ) + build_ribbon(&frame_outline(width, height, 0.0, FRAME_Z), &frame, out)
}

/// Everything drawn on the board, back to front: strokes in paint order,
/// then the frame. Clears `out` first and returns the vertex count.
pub fn scene_vertices<'a, I>(
    strokes: I,
    width: f32,
    height: f32,
    out: &mut Vec<StrokeVertex>,
) -> usize
where
    I: IntoIterator<Item = &'a Stroke>,
{
    out.clear();
    for stroke in strokes {
        build_ribbon(stroke.points(), stroke.style(), out);
    }
    board_frame(width, height, out);
    out.len()
}
