use serde::{Deserialize, Serialize};

use crate::camera::{Camera, FlyingCamera, OrbitCamera};

/// Which controller a preset selects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ControllerMode {
    /// Orbit around a focus point.
    Orbit,
    /// Free flight.
    Flying,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
/// Camera projection and control parameters.
pub struct CameraOptions {
    /// Controller the viewer starts with.
    pub mode: ControllerMode,
    /// Vertical field of view in degrees.
    pub fovy: f32,
    /// Near clipping plane distance.
    pub znear: f32,
    /// Far clipping plane distance.
    pub zfar: f32,
    /// Orbit zoom/pan sensitivity.
    pub orbit_speed: f32,
    /// Flying translation speed in world units per second.
    pub flying_speed: f32,
}

impl Default for CameraOptions {
    fn default() -> Self {
        Self {
            mode: ControllerMode::Orbit,
            fovy: 45.0,
            znear: 0.1,
            zfar: 100.0,
            orbit_speed: 0.2,
            flying_speed: 0.2,
        }
    }
}

impl CameraOptions {
    /// Build the configured camera with a perspective projection for
    /// the given viewport size.
    pub fn build_camera(&self, width: u32, height: u32) -> Camera {
        let mut camera = match self.mode {
            ControllerMode::Orbit => {
                Camera::Orbit(OrbitCamera::with_speed(self.orbit_speed))
            }
            ControllerMode::Flying => {
                Camera::Flying(FlyingCamera::with_speed(self.flying_speed))
            }
        };
        camera.projection_mut().set_perspective(
            self.fovy.to_radians(),
            width.max(1),
            height.max(1),
            self.znear,
            self.zfar,
        );
        camera
    }
}
