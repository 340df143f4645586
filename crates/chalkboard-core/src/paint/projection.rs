use crate::camera::{Camera, Projection, Ray};
use crate::constants::BOARD_Z;
use glam::{Vec2, Vec3};

/// Maps a normalised device coordinate to the nearest world-space hit on
/// the drawable scene, or `None` when the ray hits nothing.
pub trait RayProjector {
    fn project(&self, ndc: Vec2) -> Option<Vec3>;
}

/// Axis-aligned rectangle lying in a plane of constant z.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DrawSurface {
    pub center: Vec3,
    pub half_extents: Vec2,
}

impl DrawSurface {
    pub fn new(center: Vec3, size: Vec2) -> Self {
        Self {
            center,
            half_extents: size * 0.5,
        }
    }

    #[inline]
    pub fn intersect(&self, ray: &Ray) -> Option<f32> {
        if ray.dir.z.abs() <= 1e-6 {
            return None;
        }
        let t = (self.center.z - ray.origin.z) / ray.dir.z;
        if t < 0.0 {
            return None;
        }
        let hit = ray.at(t);
        let d = (hit.truncate() - self.center.truncate()).abs();
        (d.x <= self.half_extents.x && d.y <= self.half_extents.y).then_some(t)
    }
}

#[derive(Clone, Debug)]
pub struct BoardSurface {
    pub camera: Camera,
    surfaces: Vec<DrawSurface>,
}

impl BoardSurface {
    pub fn new(camera: Camera) -> Self {
        Self {
            camera,
            surfaces: Vec::new(),
        }
    }

    /// Screen-sized orthographic camera looking at one full-screen board.
    /// The board gets the camera's clamped size, so a canvas without layout
    /// yet still scales up on the first resize.
    pub fn screen_board(width: f32, height: f32) -> Self {
        let mut board = Self::new(Camera::screen_orthographic(width, height));
        let size = board.viewport_size();
        board.add_surface(DrawSurface::new(Vec3::new(0.0, 0.0, BOARD_Z), size));
        board
    }

    pub fn add_surface(&mut self, surface: DrawSurface) {
        self.surfaces.push(surface);
    }

    pub fn surfaces(&self) -> &[DrawSurface] {
        &self.surfaces
    }

    /// Follow a viewport resize: surfaces are scaled with the viewport.
    pub fn resize(&mut self, width: f32, height: f32) {
        let old = self.viewport_size();
        self.camera.set_viewport(width, height);
        let scale = self.viewport_size() / old;
        for s in &mut self.surfaces {
            s.center = (s.center.truncate() * scale).extend(s.center.z);
            s.half_extents *= scale;
        }
    }

    fn viewport_size(&self) -> Vec2 {
        match self.camera.projection {
            Projection::Orthographic {
                half_width,
                half_height,
            } => Vec2::new(half_width, half_height) * 2.0,
            Projection::Perspective { .. } => Vec2::ONE,
        }
    }

    pub fn cast(&self, ray: &Ray) -> Option<Vec3> {
        self.surfaces
            .iter()
            .filter_map(|s| s.intersect(ray))
            .min_by(|a, b| a.total_cmp(b))
            .map(|t| ray.at(t))
    }
}

impl RayProjector for BoardSurface {
    fn project(&self, ndc: Vec2) -> Option<Vec3> {
        self.cast(&self.camera.ray_from_ndc(ndc))
    }
}
