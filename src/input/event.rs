/// Platform-agnostic pointer event vocabulary.
///
/// These are the values fed into the camera command surface
/// ([`Camera::on_pointer_button`](crate::camera::Camera::on_pointer_button)
/// and friends). Scroll wheel ticks are delivered as press events on the
/// two scroll buttons, matching how classic windowing layers report wheel
/// input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerButton {
    /// Primary (left) mouse button.
    Left,
    /// Secondary (right) mouse button.
    Right,
    /// Middle mouse button (wheel click).
    Middle,
    /// One wheel tick away from the user.
    ScrollUp,
    /// One wheel tick toward the user.
    ScrollDown,
}

/// Press/release state accompanying a [`PointerButton`] event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ButtonState {
    /// Button went down.
    Pressed,
    /// Button came up.
    Released,
}

impl ButtonState {
    /// `true` for [`ButtonState::Pressed`].
    #[must_use]
    pub fn is_pressed(self) -> bool {
        self == Self::Pressed
    }
}

#[cfg(feature = "viewer")]
impl From<winit::event::MouseButton> for PointerButton {
    fn from(button: winit::event::MouseButton) -> Self {
        match button {
            winit::event::MouseButton::Right => Self::Right,
            winit::event::MouseButton::Middle => Self::Middle,
            _ => Self::Left,
        }
    }
}

#[cfg(feature = "viewer")]
impl From<winit::event::ElementState> for ButtonState {
    fn from(state: winit::event::ElementState) -> Self {
        match state {
            winit::event::ElementState::Pressed => Self::Pressed,
            winit::event::ElementState::Released => Self::Released,
        }
    }
}
