//! Camera description and screen-to-world rays.
//!
//! These types avoid platform-specific APIs so the same projection is used by
//! the renderer and by stroke capture on both host tests and the web target.

use crate::constants::{camera_eye, CAMERA_FAR, CAMERA_NEAR};
use glam::{Mat4, Vec2, Vec3, Vec4};

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Projection {
    /// Symmetric box centred on the view axis, in world units.
    Orthographic { half_width: f32, half_height: f32 },
    Perspective { fovy_radians: f32, aspect: f32 },
}

/// Right-handed camera.
#[derive(Clone, Debug, PartialEq)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub projection: Projection,
    pub znear: f32,
    pub zfar: f32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    pub dir: Vec3,
}

impl Ray {
    #[inline]
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.dir * t
    }
}

impl Camera {
    /// Orthographic camera where one world unit is one CSS pixel and the
    /// origin is the centre of the viewport.
    pub fn screen_orthographic(width: f32, height: f32) -> Self {
        Self {
            eye: camera_eye(),
            target: Vec3::ZERO,
            up: Vec3::Y,
            projection: Projection::Orthographic {
                half_width: width.max(1.0) / 2.0,
                half_height: height.max(1.0) / 2.0,
            },
            znear: CAMERA_NEAR,
            zfar: CAMERA_FAR,
        }
    }

    /// Keep the projection in step with a resized viewport.
    pub fn set_viewport(&mut self, width: f32, height: f32) {
        let (w, h) = (width.max(1.0), height.max(1.0));
        match &mut self.projection {
            Projection::Orthographic {
                half_width,
                half_height,
            } => {
                *half_width = w / 2.0;
                *half_height = h / 2.0;
            }
            Projection::Perspective { aspect, .. } => *aspect = w / h,
        }
    }

    /// Compute the clip-space projection matrix.
    pub fn projection_matrix(&self) -> Mat4 {
        match self.projection {
            Projection::Orthographic {
                half_width,
                half_height,
            } => Mat4::orthographic_rh(
                -half_width,
                half_width,
                -half_height,
                half_height,
                self.znear,
                self.zfar,
            ),
            Projection::Perspective {
                fovy_radians,
                aspect,
            } => Mat4::perspective_rh(fovy_radians, aspect, self.znear, self.zfar),
        }
    }

    /// Compute the view matrix that transforms world to view space.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    pub fn view_proj(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    /// World-space ray through a normalised device coordinate
    /// (x right, y up, both in -1..=1).
    pub fn ray_from_ndc(&self, ndc: Vec2) -> Ray {
        let inv = self.view_proj().inverse();
        let p_near = inv * Vec4::new(ndc.x, ndc.y, 0.0, 1.0);
        let p_far = inv * Vec4::new(ndc.x, ndc.y, 1.0, 1.0);
        let p0: Vec3 = p_near.truncate() / p_near.w;
        let p1: Vec3 = p_far.truncate() / p_far.w;
        Ray {
            origin: p0,
            dir: (p1 - p0).normalize_or_zero(),
        }
    }
}
