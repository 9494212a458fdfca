use glam::Mat4;

use super::Camera;

/// GPU uniform block holding the view-projection matrix and camera
/// metadata.
///
/// This is the hand-off surface to whatever renders the scene: refresh
/// it once per frame from the live [`Camera`] and copy the bytes into a
/// uniform buffer. Field order keeps the struct tightly packed under
/// std140-style 16-byte vector alignment, so no explicit padding is
/// needed.
#[repr(C)]
#[derive(Debug, Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub struct CameraUniform {
    /// Combined view-projection matrix.
    pub view_proj: [[f32; 4]; 4],
    /// Camera world-space position.
    pub position: [f32; 3],
    /// Viewport aspect ratio.
    pub aspect: f32,
    /// Unit forward direction (eye toward target).
    pub forward: [f32; 3],
    /// Vertical field of view in radians.
    pub vertical_fov: f32,
}

impl Default for CameraUniform {
    fn default() -> Self {
        Self::new()
    }
}

impl CameraUniform {
    /// Create a camera uniform with an identity view-projection.
    pub fn new() -> Self {
        Self {
            view_proj: Mat4::IDENTITY.to_cols_array_2d(),
            position: [0.0; 3],
            aspect: 1.0,
            forward: [0.0, 1.0, 0.0],
            vertical_fov: 0.0,
        }
    }

    /// Refresh every field from the camera's current state.
    pub fn update(&mut self, camera: &Camera) {
        self.view_proj =
            (camera.projection().matrix() * camera.view()).to_cols_array_2d();
        self.position = camera.eye().to_array();
        self.aspect = camera.aspect_ratio();
        let forward = (camera.target() - camera.eye()).normalize();
        self.forward = forward.to_array();
        self.vertical_fov = camera.vertical_fov();
    }
}
