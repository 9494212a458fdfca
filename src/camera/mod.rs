//! Camera controllers for interactive viewports.
//!
//! Two motion models share one projection/view contract: an orbit
//! camera circling a focus point and a free-flight camera. The
//! [`Camera`] enum closes over both; only these two controllers exist,
//! so embedders match or delegate instead of going through a trait
//! object.

/// Free-flight camera controller.
pub mod flying;
/// Orbit camera controller.
pub mod orbit;
/// Projection parameters and matrix construction.
pub mod projection;
/// GPU-uploadable camera uniform block.
pub mod uniform;

use glam::{Mat4, UVec2, Vec3};

pub use flying::FlyingCamera;
pub use orbit::OrbitCamera;
pub use projection::Projection;
pub use uniform::CameraUniform;

use crate::input::{ButtonState, KeyState, MotionKey, PointerButton};

/// The closed set of camera controllers.
///
/// Delegates the full query surface (eye/target/up, matrices,
/// projection parameters) and command surface (pointer and key events)
/// to the active variant. Key events are meaningful only for the flying
/// variant; the orbit variant ignores them.
#[derive(Debug, Clone)]
pub enum Camera {
    /// Spherical-coordinate orbit around a focus point.
    Orbit(OrbitCamera),
    /// Free-flight position/direction camera.
    Flying(FlyingCamera),
}

impl Camera {
    /// A default orbit camera.
    pub fn orbit() -> Self {
        Self::Orbit(OrbitCamera::new())
    }

    /// A default flying camera.
    pub fn flying() -> Self {
        Self::Flying(FlyingCamera::new())
    }

    /// Shared projection state.
    pub fn projection(&self) -> &Projection {
        match self {
            Self::Orbit(cam) => cam.projection(),
            Self::Flying(cam) => cam.projection(),
        }
    }

    /// Mutable projection state.
    pub fn projection_mut(&mut self) -> &mut Projection {
        match self {
            Self::Orbit(cam) => cam.projection_mut(),
            Self::Flying(cam) => cam.projection_mut(),
        }
    }

    /// World-space eye position.
    pub fn eye(&self) -> Vec3 {
        match self {
            Self::Orbit(cam) => cam.eye(),
            Self::Flying(cam) => cam.eye(),
        }
    }

    /// World-space look-at target.
    pub fn target(&self) -> Vec3 {
        match self {
            Self::Orbit(cam) => cam.target(),
            Self::Flying(cam) => cam.target(),
        }
    }

    /// Camera up vector.
    pub fn up(&self) -> Vec3 {
        match self {
            Self::Orbit(cam) => cam.up(),
            Self::Flying(cam) => cam.up(),
        }
    }

    /// View matrix, rebuilt from the current eye/target/up on every
    /// call.
    ///
    /// Deliberately not memoized: the look-at build is cheap and a
    /// fresh computation can never go stale.
    pub fn view(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye(), self.target(), self.up())
    }

    /// Near clipping plane distance.
    pub fn near(&self) -> f32 {
        self.projection().near()
    }

    /// Far clipping plane distance.
    pub fn far(&self) -> f32 {
        self.projection().far()
    }

    /// Vertical FOV in radians (infinite when not FOV-derived).
    pub fn vertical_fov(&self) -> f32 {
        self.projection().vertical_fov()
    }

    /// Viewport aspect ratio.
    pub fn aspect_ratio(&self) -> f32 {
        self.projection().aspect_ratio()
    }

    /// Viewport resolution in pixels.
    pub fn resolution(&self) -> UVec2 {
        self.projection().resolution()
    }

    /// Deliver a pointer button event.
    pub fn on_pointer_button(
        &mut self,
        x: f32,
        y: f32,
        button: PointerButton,
        state: ButtonState,
    ) {
        match self {
            Self::Orbit(cam) => cam.on_pointer_button(x, y, button, state),
            Self::Flying(cam) => cam.on_pointer_button(x, y, button, state),
        }
    }

    /// Deliver a pointer move event (window pixel coordinates).
    pub fn on_pointer_move(&mut self, x: f32, y: f32) {
        match self {
            Self::Orbit(cam) => cam.on_pointer_move(x, y),
            Self::Flying(cam) => cam.on_pointer_move(x, y),
        }
    }

    /// Deliver a discrete key press. No-op for the orbit variant.
    pub fn on_key(&mut self, key: MotionKey) {
        match self {
            Self::Orbit(_) => {}
            Self::Flying(cam) => cam.on_key(key),
        }
    }

    /// Per-frame held-key polling. No-op for the orbit variant.
    pub fn on_key_poll(&mut self, delta_time: f32, keys: &dyn KeyState) {
        match self {
            Self::Orbit(_) => {}
            Self::Flying(cam) => cam.on_key_poll(delta_time, keys),
        }
    }
}

impl From<OrbitCamera> for Camera {
    fn from(cam: OrbitCamera) -> Self {
        Self::Orbit(cam)
    }
}

impl From<FlyingCamera> for Camera {
    fn from(cam: FlyingCamera) -> Self {
        Self::Flying(cam)
    }
}
