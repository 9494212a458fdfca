//! Input handling: the platform-agnostic event vocabulary and the
//! winit-backed translator that feeds window events to a camera.

/// Pointer button and press-state types.
pub mod event;
/// Movement keys and the held-key query capability.
pub mod keyboard;
/// Winit window-event translator.
#[cfg(feature = "viewer")]
pub mod translator;

pub use event::{ButtonState, PointerButton};
pub use keyboard::{KeyState, MotionKey};
#[cfg(feature = "viewer")]
pub use translator::{HeldKeys, InputTranslator};
