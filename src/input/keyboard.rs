use serde::{Deserialize, Serialize};

/// Movement keys the flying camera reacts to.
///
/// Serde serializes as `snake_case` strings so persisted key bindings
/// stay readable. WASD and the arrow keys are deliberately distinct
/// values: embedders that remap bindings can tell them apart, while the
/// camera treats each WASD/arrow pair identically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MotionKey {
    /// Forward (`W`).
    W,
    /// Strafe left (`A`).
    A,
    /// Backward (`S`).
    S,
    /// Strafe right (`D`).
    D,
    /// Forward (up arrow).
    Up,
    /// Backward (down arrow).
    Down,
    /// Strafe left (left arrow).
    Left,
    /// Strafe right (right arrow).
    Right,
}

/// Capability for querying held keys during per-frame polling.
///
/// [`FlyingCamera::on_key_poll`](crate::camera::FlyingCamera::on_key_poll)
/// takes this by reference instead of a raw function pointer, so any
/// input backend (or a plain closure in tests) can supply key state.
pub trait KeyState {
    /// Whether `key` is currently held down.
    fn is_pressed(&self, key: MotionKey) -> bool;
}

impl<F> KeyState for F
where
    F: Fn(MotionKey) -> bool,
{
    fn is_pressed(&self, key: MotionKey) -> bool {
        self(key)
    }
}
