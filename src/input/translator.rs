use std::collections::HashSet;

use glam::Vec2;
use winit::event::{MouseScrollDelta, WindowEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

use super::event::{ButtonState, PointerButton};
use super::keyboard::{KeyState, MotionKey};
use crate::camera::Camera;

/// Set of movement keys currently held down.
///
/// Filled by [`InputTranslator::handle_event`] and handed to
/// [`Camera::on_key_poll`] once per frame.
#[derive(Debug, Default)]
pub struct HeldKeys {
    keys: HashSet<MotionKey>,
}

impl HeldKeys {
    fn press(&mut self, key: MotionKey) {
        let _ = self.keys.insert(key);
    }

    fn release(&mut self, key: MotionKey) {
        let _ = self.keys.remove(&key);
    }

    /// Whether any movement key is currently held.
    pub fn any_held(&self) -> bool {
        !self.keys.is_empty()
    }
}

impl KeyState for HeldKeys {
    fn is_pressed(&self, key: MotionKey) -> bool {
        self.keys.contains(&key)
    }
}

/// Translates winit window events into camera event calls.
///
/// Owns the transient input state the camera contract leaves to the
/// windowing layer: the current cursor position (wheel events carry no
/// coordinates of their own) and the held-movement-key set for
/// per-frame polling.
#[derive(Debug, Default)]
pub struct InputTranslator {
    last_cursor: Vec2,
    held: HeldKeys,
}

impl InputTranslator {
    /// Create a translator with no held keys and the cursor at the
    /// origin.
    pub fn new() -> Self {
        Self::default()
    }

    /// Movement keys currently held, for [`Camera::on_key_poll`].
    pub fn held_keys(&self) -> &HeldKeys {
        &self.held
    }

    /// Last observed cursor position in physical pixels.
    pub fn cursor(&self) -> Vec2 {
        self.last_cursor
    }

    /// Feed a window event to the camera. Returns `true` if the event
    /// was consumed.
    ///
    /// Wheel ticks become press events on the scroll buttons at the
    /// last cursor position, the way classic windowing layers report
    /// wheel input to cameras.
    pub fn handle_event(
        &mut self,
        camera: &mut Camera,
        event: &WindowEvent,
    ) -> bool {
        match event {
            WindowEvent::CursorMoved { position, .. } => {
                self.last_cursor =
                    Vec2::new(position.x as f32, position.y as f32);
                camera.on_pointer_move(self.last_cursor.x, self.last_cursor.y);
                true
            }
            WindowEvent::MouseInput { button, state, .. } => {
                camera.on_pointer_button(
                    self.last_cursor.x,
                    self.last_cursor.y,
                    PointerButton::from(*button),
                    ButtonState::from(*state),
                );
                true
            }
            WindowEvent::MouseWheel { delta, .. } => {
                let ticks = match delta {
                    MouseScrollDelta::LineDelta(_, y) => *y,
                    MouseScrollDelta::PixelDelta(pos) => pos.y as f32 * 0.01,
                };
                if ticks == 0.0 {
                    return false;
                }
                let button = if ticks > 0.0 {
                    PointerButton::ScrollUp
                } else {
                    PointerButton::ScrollDown
                };
                camera.on_pointer_button(
                    self.last_cursor.x,
                    self.last_cursor.y,
                    button,
                    ButtonState::Pressed,
                );
                true
            }
            WindowEvent::KeyboardInput { event, .. } => {
                let PhysicalKey::Code(code) = event.physical_key else {
                    return false;
                };
                let Some(key) = motion_key(code) else {
                    return false;
                };
                if event.state.is_pressed() {
                    self.held.press(key);
                } else {
                    self.held.release(key);
                }
                true
            }
            _ => false,
        }
    }
}

/// Map a physical key code to a movement key, if it is one.
fn motion_key(code: KeyCode) -> Option<MotionKey> {
    match code {
        KeyCode::KeyW => Some(MotionKey::W),
        KeyCode::KeyA => Some(MotionKey::A),
        KeyCode::KeyS => Some(MotionKey::S),
        KeyCode::KeyD => Some(MotionKey::D),
        KeyCode::ArrowUp => Some(MotionKey::Up),
        KeyCode::ArrowDown => Some(MotionKey::Down),
        KeyCode::ArrowLeft => Some(MotionKey::Left),
        KeyCode::ArrowRight => Some(MotionKey::Right),
        _ => None,
    }
}
