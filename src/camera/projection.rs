use glam::{Mat4, UVec2};

/// Projection parameters and the cached projection matrix.
///
/// The matrix is rebuilt by the three setter operations and returned
/// as-is by [`matrix`](Self::matrix); reads never recompute. A finite
/// [`vertical_fov`](Self::vertical_fov) means the matrix came from the
/// perspective path; orthographic and explicit matrices mark the FOV as
/// infinite.
///
/// Conventions: right-handed, `[0, 1]` depth range (wgpu/Vulkan).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    near: f32,
    far: f32,
    /// Radians, or `f32::INFINITY` when the matrix is not FOV-derived.
    vertical_fov: f32,
    aspect_ratio: f32,
    resolution: UVec2,
    matrix: Mat4,
}

impl Default for Projection {
    fn default() -> Self {
        Self {
            near: 0.1,
            far: 100.0,
            vertical_fov: f32::INFINITY,
            aspect_ratio: 1.0,
            resolution: UVec2::ZERO,
            matrix: Mat4::IDENTITY,
        }
    }
}

impl Projection {
    /// Symmetric orthographic projection over `[-half_extent,
    /// half_extent]` on x and y, depth range `[near, far]`.
    ///
    /// Marks the FOV infinite and the aspect ratio 1; the stored
    /// resolution becomes `(2 * half_extent, 2 * half_extent)` truncated
    /// to integers. The caller guarantees a positive `half_extent`.
    pub fn set_orthographic(&mut self, half_extent: f32, near: f32, far: f32) {
        self.near = near;
        self.far = far;
        self.vertical_fov = f32::INFINITY;
        self.aspect_ratio = 1.0;
        self.resolution = UVec2::splat((half_extent * 2.0) as u32);
        self.matrix = Mat4::orthographic_rh(
            -half_extent,
            half_extent,
            -half_extent,
            half_extent,
            near,
            far,
        );
    }

    /// Perspective projection from a vertical FOV (radians) and viewport
    /// size.
    ///
    /// Stores `resolution = (width, height)` and `aspect_ratio = width /
    /// height`. The caller guarantees `height > 0`.
    pub fn set_perspective(
        &mut self,
        vertical_fov: f32,
        width: u32,
        height: u32,
        near: f32,
        far: f32,
    ) {
        self.near = near;
        self.far = far;
        self.vertical_fov = vertical_fov;
        self.aspect_ratio = width as f32 / height as f32;
        self.resolution = UVec2::new(width, height);
        // perspective_rh already uses [0,1] depth range (wgpu/Vulkan
        // convention)
        self.matrix =
            Mat4::perspective_rh(vertical_fov, self.aspect_ratio, near, far);
    }

    /// Store an arbitrary projection matrix verbatim.
    ///
    /// Resets the aspect ratio to 1 and the FOV to infinity, since
    /// neither can be derived from the matrix.
    pub fn set_matrix(&mut self, matrix: Mat4, near: f32, far: f32) {
        self.near = near;
        self.far = far;
        self.vertical_fov = f32::INFINITY;
        self.aspect_ratio = 1.0;
        self.matrix = matrix;
    }

    /// The cached projection matrix. No recomputation happens on read.
    pub fn matrix(&self) -> Mat4 {
        self.matrix
    }

    /// Near clipping plane distance.
    pub fn near(&self) -> f32 {
        self.near
    }

    /// Far clipping plane distance.
    pub fn far(&self) -> f32 {
        self.far
    }

    /// Vertical field of view in radians, or `f32::INFINITY` when the
    /// current matrix was not built from a FOV.
    pub fn vertical_fov(&self) -> f32 {
        self.vertical_fov
    }

    /// Viewport aspect ratio (width / height).
    pub fn aspect_ratio(&self) -> f32 {
        self.aspect_ratio
    }

    /// Viewport resolution in pixels.
    pub fn resolution(&self) -> UVec2 {
        self.resolution
    }

    /// Whether the current matrix came from the perspective path.
    pub fn is_perspective(&self) -> bool {
        self.vertical_fov.is_finite()
    }
}
