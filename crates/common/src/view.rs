use glam::{Vec2, Vec3};

/// A ray in world space. Direction is always normalized.
#[derive(Debug, Clone, Copy)]
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3,
}

impl Ray {
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self {
            origin,
            direction: direction.normalize(),
        }
    }

    /// Point at parameter t along the ray.
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }
}

/// Render-camera view model used for pointer and viewport ray casts.
///
/// The camera exists outside the simulator boundary; the host hands the
/// current view to every tick. Yaw/pitch model matches a standard fly
/// camera: yaw 0 looks down +X, positive pitch looks up.
#[derive(Debug, Clone, Copy)]
pub struct ViewCamera {
    pub position: Vec3,
    pub yaw: f32,
    pub pitch: f32,
    /// Vertical field of view in radians.
    pub fov_y: f32,
    /// Viewport size in pixels.
    pub viewport: Vec2,
}

impl Default for ViewCamera {
    fn default() -> Self {
        Self {
            position: Vec3::new(0.0, 1.6, 0.0),
            yaw: -90.0_f32.to_radians(),
            pitch: 0.0,
            fov_y: 60.0_f32.to_radians(),
            viewport: Vec2::new(1280.0, 720.0),
        }
    }
}

impl ViewCamera {
    pub fn forward(&self) -> Vec3 {
        Vec3::new(
            self.yaw.cos() * self.pitch.cos(),
            self.pitch.sin(),
            self.yaw.sin() * self.pitch.cos(),
        )
        .normalize()
    }

    pub fn right(&self) -> Vec3 {
        self.forward().cross(Vec3::Y).normalize()
    }

    pub fn up(&self) -> Vec3 {
        self.right().cross(self.forward()).normalize()
    }

    /// Ray from the camera through a pixel position on the view plane.
    ///
    /// Pixel origin is top-left, y grows downward (window convention).
    pub fn screen_point_to_ray(&self, pixel: Vec2) -> Ray {
        let ndc = Vec2::new(
            (pixel.x / self.viewport.x) * 2.0 - 1.0,
            1.0 - (pixel.y / self.viewport.y) * 2.0,
        );
        self.ndc_to_ray(ndc)
    }

    /// Ray through a normalized viewport point; (0.5, 0.5) is the exact
    /// view center and yields `forward()`.
    pub fn viewport_point_to_ray(&self, uv: Vec2) -> Ray {
        let ndc = Vec2::new(uv.x * 2.0 - 1.0, uv.y * 2.0 - 1.0);
        self.ndc_to_ray(ndc)
    }

    fn ndc_to_ray(&self, ndc: Vec2) -> Ray {
        let tan_half = (self.fov_y * 0.5).tan();
        let aspect = self.viewport.x / self.viewport.y;
        let dir = self.forward()
            + self.right() * (ndc.x * tan_half * aspect)
            + self.up() * (ndc.y * tan_half);
        Ray::new(self.position, dir)
    }
}
