use glam::{Quat, Vec2, Vec3};

use super::projection::Projection;
use crate::input::{ButtonState, KeyState, MotionKey, PointerButton};

/// Scroll-up speed result never drops below this value.
const SPEED_UP_FLOOR: f32 = 32.0;
/// Scroll-down speed result never rises above this value.
const SPEED_DOWN_CAP: f32 = 0.0625;
/// Alignment threshold past which the up-vector rebuild switches to the
/// world-Y reference axis.
const POLE_DOT: f32 = 0.99;

/// Free-flight camera: a position, a unit forward direction, and a unit
/// up vector kept orthogonal to it.
///
/// Left-drag looks around; the angular deltas are back-projected through
/// the current perspective projection so a pixel of drag corresponds to
/// the true angle it subtends on screen, not a linear approximation.
/// WASD / arrow keys translate, either one direction-length per discrete
/// key event or `speed * delta_time` per polled frame.
#[derive(Debug, Clone)]
pub struct FlyingCamera {
    projection: Projection,
    position: Vec3,
    /// Unit forward vector.
    direction: Vec3,
    /// Unit vector orthogonal to `direction`.
    up: Vec3,
    /// Pointer position at the previous move event; `None` between
    /// gestures so a new drag starts with a zero delta.
    last_pos: Option<Vec2>,
    rotating: bool,
    /// Translation speed in world units per second.
    speed: f32,
}

impl Default for FlyingCamera {
    fn default() -> Self {
        Self {
            projection: Projection::default(),
            position: Vec3::ZERO,
            direction: Vec3::Y,
            up: Vec3::Z,
            last_pos: None,
            rotating: false,
            speed: 0.2,
        }
    }
}

impl FlyingCamera {
    /// Create a flying camera at the origin looking down +Y.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a flying camera with the given translation speed.
    pub fn with_speed(speed: f32) -> Self {
        Self {
            speed,
            ..Self::default()
        }
    }

    /// Shared projection state.
    pub fn projection(&self) -> &Projection {
        &self.projection
    }

    /// Mutable projection state.
    pub fn projection_mut(&mut self) -> &mut Projection {
        &mut self.projection
    }

    /// Current world-space position.
    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// Move the camera to `position`.
    pub fn set_position(&mut self, position: Vec3) {
        self.position = position;
    }

    /// Unit forward vector.
    pub fn direction(&self) -> Vec3 {
        self.direction
    }

    /// Current translation speed in world units per second.
    pub fn speed(&self) -> f32 {
        self.speed
    }

    /// Set the translation speed.
    pub fn set_speed(&mut self, speed: f32) {
        self.speed = speed;
    }

    /// World-space eye position.
    pub fn eye(&self) -> Vec3 {
        self.position
    }

    /// Look-at target, one direction-length ahead of the eye.
    pub fn target(&self) -> Vec3 {
        self.position + self.direction
    }

    /// Camera up vector.
    pub fn up(&self) -> Vec3 {
        self.up
    }

    /// Pointer button press/release.
    ///
    /// The left button gates the look-around drag. Scroll-up doubles the
    /// speed but the result never drops below 32; scroll-down halves it
    /// but the result never rises above 0.0625. Each bound makes its
    /// direction one-way once the speed crosses it. When the drag button
    /// is released the move tracker resets.
    pub fn on_pointer_button(
        &mut self,
        _x: f32,
        _y: f32,
        button: PointerButton,
        state: ButtonState,
    ) {
        match button {
            PointerButton::Left => self.rotating = state.is_pressed(),
            PointerButton::ScrollUp => {
                if state.is_pressed() {
                    self.speed = SPEED_UP_FLOOR.max(self.speed * 2.0);
                }
            }
            PointerButton::ScrollDown => {
                if state.is_pressed() {
                    self.speed = SPEED_DOWN_CAP.min(self.speed / 2.0);
                }
            }
            PointerButton::Right | PointerButton::Middle => {}
        }

        if !self.rotating {
            self.last_pos = None;
        }
    }

    /// Pointer moved to `(x, y)` in window pixel coordinates.
    ///
    /// While the drag is active, the horizontal and vertical pixel
    /// deltas become angular deltas under the current perspective
    /// projection: each coordinate maps to `[-1, 1]` NDC and the angle
    /// is the `atan2` difference against the half-FOV adjacent length
    /// `1 / tan(fov / 2)` (horizontal FOV = vertical FOV x aspect).
    /// A perspective projection with a nonzero resolution must be in
    /// effect.
    pub fn on_pointer_move(&mut self, x: f32, y: f32) {
        let pos = Vec2::new(x, y);
        // First move of a gesture: snap the tracker so the delta is zero
        let last = self.last_pos.unwrap_or(pos);

        if self.rotating {
            let fov = self.projection.vertical_fov();
            let resolution = self.projection.resolution();

            // Horizontal angular delta
            let h_fov = fov * self.projection.aspect_ratio();
            let h_adjacent = 1.0 / (h_fov * 0.5).tan();
            let h_prev = (last.x / resolution.x as f32) * 2.0 - 1.0;
            let h_curr = (pos.x / resolution.x as f32) * 2.0 - 1.0;
            let phi =
                h_curr.atan2(h_adjacent) - h_prev.atan2(h_adjacent);

            // Vertical angular delta
            let v_adjacent = 1.0 / (fov * 0.5).tan();
            let v_prev = (last.y / resolution.y as f32) * 2.0 - 1.0;
            let v_curr = (pos.y / resolution.y as f32) * 2.0 - 1.0;
            let theta =
                v_curr.atan2(v_adjacent) - v_prev.atan2(v_adjacent);

            // Yaw about up, then pitch about the right axis
            let right = self.direction.cross(self.up);
            let rotation = Quat::from_axis_angle(right, -theta)
                * Quat::from_axis_angle(self.up, -phi);
            self.direction = rotation * self.direction;

            // Keep up in the vertical plane containing the direction;
            // near the world-Z pole the cross product degenerates, so
            // fall back to world Y as the reference axis
            let reference = if self.direction.dot(Vec3::Z) < POLE_DOT {
                Vec3::Z
            } else {
                Vec3::Y
            };
            let right = self.direction.cross(reference).normalize();
            self.up = right.cross(self.direction).normalize();
        }

        self.last_pos = Some(pos);
    }

    /// Discrete key press: translate by one full direction-vector
    /// length (unscaled by time).
    pub fn on_key(&mut self, key: MotionKey) {
        match key {
            MotionKey::W | MotionKey::Up => self.position += self.direction,
            MotionKey::S | MotionKey::Down => self.position -= self.direction,
            MotionKey::A | MotionKey::Left => {
                self.position -= self.direction.cross(self.up);
            }
            MotionKey::D | MotionKey::Right => {
                self.position += self.direction.cross(self.up);
            }
        }
    }

    /// Per-frame held-key polling: translate by `speed * delta_time`.
    ///
    /// Keys are checked forward > back > left > right and only the
    /// first held key applies, so two keys held at once yield a single
    /// axis of motion per call.
    pub fn on_key_poll(&mut self, delta_time: f32, keys: &dyn KeyState) {
        let step = self.speed * delta_time;
        if keys.is_pressed(MotionKey::Up) || keys.is_pressed(MotionKey::W) {
            self.position += self.direction * step;
        } else if keys.is_pressed(MotionKey::Down)
            || keys.is_pressed(MotionKey::S)
        {
            self.position -= self.direction * step;
        } else if keys.is_pressed(MotionKey::Left)
            || keys.is_pressed(MotionKey::A)
        {
            self.position -= self.direction.cross(self.up) * step;
        } else if keys.is_pressed(MotionKey::Right)
            || keys.is_pressed(MotionKey::D)
        {
            self.position += self.direction.cross(self.up) * step;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_3;

    const EPS: f32 = 1e-4;

    fn perspective_cam() -> FlyingCamera {
        let mut cam = FlyingCamera::new();
        cam.projection_mut()
            .set_perspective(FRAC_PI_3, 800, 600, 0.1, 100.0);
        cam
    }

    fn press(cam: &mut FlyingCamera, button: PointerButton) {
        cam.on_pointer_button(0.0, 0.0, button, ButtonState::Pressed);
    }

    fn assert_orthonormal(cam: &FlyingCamera) {
        assert!((cam.direction().length() - 1.0).abs() < EPS);
        assert!((cam.up().length() - 1.0).abs() < EPS);
        assert!(cam.direction().dot(cam.up()).abs() < EPS);
    }

    #[test]
    fn default_basis_is_orthonormal() {
        assert_orthonormal(&FlyingCamera::new());
    }

    #[test]
    fn target_is_one_direction_length_ahead() {
        let cam = FlyingCamera::new();
        assert_eq!(cam.target() - cam.eye(), cam.direction());
    }

    #[test]
    fn basis_stays_orthonormal_across_drags() {
        let mut cam = perspective_cam();
        press(&mut cam, PointerButton::Left);
        cam.on_pointer_move(400.0, 300.0);
        for step in 1..30 {
            cam.on_pointer_move(
                400.0 + step as f32 * 13.0,
                300.0 - step as f32 * 7.0,
            );
            assert_orthonormal(&cam);
        }
    }

    #[test]
    fn horizontal_drag_yaws_by_backprojected_angle() {
        let mut cam = perspective_cam();
        press(&mut cam, PointerButton::Left);
        cam.on_pointer_move(400.0, 300.0);
        cam.on_pointer_move(500.0, 300.0);

        // Expected yaw: ndc goes 0 -> 0.25 against the horizontal
        // half-fov adjacent length
        let h_fov = FRAC_PI_3 * (800.0 / 600.0);
        let adjacent = 1.0 / (h_fov * 0.5).tan();
        let expected = 0.25_f32.atan2(adjacent);

        let yawed = cam.direction();
        assert!((yawed.angle_between(Vec3::Y) - expected).abs() < EPS);
        // Pure yaw keeps the direction in the ground plane and up at
        // world Z
        assert!(yawed.z.abs() < EPS);
        assert!((cam.up() - Vec3::Z).length() < EPS);
    }

    #[test]
    fn zero_delta_drag_leaves_direction_unchanged() {
        let mut cam = perspective_cam();
        press(&mut cam, PointerButton::Left);
        cam.on_pointer_move(400.0, 300.0);
        cam.on_pointer_move(400.0, 300.0);
        assert!((cam.direction() - Vec3::Y).length() < EPS);
    }

    #[test]
    fn up_rebuild_falls_back_near_the_pole() {
        let mut cam = perspective_cam();
        cam.direction = Vec3::Z;
        cam.up = Vec3::Y;
        press(&mut cam, PointerButton::Left);
        cam.on_pointer_move(400.0, 300.0);
        cam.on_pointer_move(402.0, 301.0);
        assert_orthonormal(&cam);
    }

    #[test]
    fn release_resets_move_tracker() {
        let mut cam = perspective_cam();
        press(&mut cam, PointerButton::Left);
        cam.on_pointer_move(400.0, 300.0);
        cam.on_pointer_move(500.0, 300.0);
        let dir_after_drag = cam.direction();

        cam.on_pointer_button(
            0.0,
            0.0,
            PointerButton::Left,
            ButtonState::Released,
        );
        press(&mut cam, PointerButton::Left);
        cam.on_pointer_move(0.0, 0.0);
        assert_eq!(cam.direction(), dir_after_drag);
    }

    #[test]
    fn discrete_keys_step_one_direction_length() {
        let mut cam = FlyingCamera::new();
        cam.on_key(MotionKey::W);
        assert!((cam.position() - Vec3::Y).length() < EPS);

        cam.on_key(MotionKey::Up);
        assert!((cam.position() - Vec3::Y * 2.0).length() < EPS);

        cam.on_key(MotionKey::S);
        cam.on_key(MotionKey::Down);
        assert!(cam.position().length() < EPS);
    }

    #[test]
    fn strafe_keys_step_along_the_right_axis() {
        let mut cam = FlyingCamera::new();
        // right = direction x up = Y x Z = X
        cam.on_key(MotionKey::D);
        assert!((cam.position() - Vec3::X).length() < EPS);
        cam.on_key(MotionKey::A);
        assert!(cam.position().length() < EPS);
    }

    #[test]
    fn key_poll_scales_by_speed_and_delta_time() {
        let mut cam = FlyingCamera::new();
        let held = |key: MotionKey| key == MotionKey::W;
        cam.on_key_poll(0.5, &held);
        assert!((cam.position() - Vec3::Y * 0.1).length() < EPS);
    }

    #[test]
    fn key_poll_applies_only_the_first_held_axis() {
        let mut cam = FlyingCamera::new();
        let held =
            |key: MotionKey| key == MotionKey::W || key == MotionKey::A;
        cam.on_key_poll(1.0, &held);
        // Forward wins; no strafe component
        assert!((cam.position() - Vec3::Y * 0.2).length() < EPS);

        let mut cam = FlyingCamera::new();
        let held =
            |key: MotionKey| key == MotionKey::S || key == MotionKey::Left;
        cam.on_key_poll(1.0, &held);
        assert!((cam.position() + Vec3::Y * 0.2).length() < EPS);
    }

    #[test]
    fn scroll_speed_ratchet_is_literal() {
        let mut cam = FlyingCamera::new();
        assert_eq!(cam.speed(), 0.2);

        press(&mut cam, PointerButton::ScrollUp);
        assert_eq!(cam.speed(), 32.0);
        press(&mut cam, PointerButton::ScrollUp);
        assert_eq!(cam.speed(), 64.0);

        press(&mut cam, PointerButton::ScrollDown);
        assert_eq!(cam.speed(), 0.0625);
        press(&mut cam, PointerButton::ScrollDown);
        assert_eq!(cam.speed(), 0.03125);
    }
}
