use std::f32::consts::{PI, TAU};

use glam::{Vec2, Vec3};

use super::projection::Projection;
use crate::input::{ButtonState, PointerButton};

/// Closest the orbit radius may shrink to.
const MIN_DISTANCE: f32 = 0.001;
/// Farthest the orbit radius may grow to.
const MAX_DISTANCE: f32 = 1e9;
/// Polar angle bounds, kept just off the poles so the up-vector basis
/// never degenerates.
const THETA_MIN: f32 = 0.01;
const THETA_MAX: f32 = 3.14;

/// Spherical-coordinate camera orbiting a focus point.
///
/// The eye sits at `focus_point + distance * (sin θ cos φ, sin θ sin φ,
/// cos θ)` with world Z as the fixed vertical reference. Left-drag
/// rotates (θ/φ), right-drag pans the focus point in the view plane,
/// and scroll wheel ticks zoom by a geometric step.
#[derive(Debug, Clone)]
pub struct OrbitCamera {
    projection: Projection,
    /// Polar angle in radians, clamped to `[THETA_MIN, THETA_MAX]`.
    theta: f32,
    /// Azimuth in radians, wrapped to `[0, 2π)`.
    phi: f32,
    /// Orbit radius, clamped to `[MIN_DISTANCE, MAX_DISTANCE]`.
    distance: f32,
    focus_point: Vec3,
    /// Fixed world up used to build the panning basis.
    phi_axis: Vec3,
    /// Pointer position at the previous move event; `None` between
    /// gestures so a new drag starts with a zero delta.
    last_pos: Option<Vec2>,
    panning: bool,
    rotating: bool,
    /// Zoom sensitivity (fraction of the distance per wheel tick).
    speed: f32,
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self {
            projection: Projection::default(),
            theta: PI * 0.5,
            phi: PI * 1.5,
            distance: 5.0,
            focus_point: Vec3::ZERO,
            phi_axis: Vec3::Z,
            last_pos: None,
            panning: false,
            rotating: false,
            speed: 0.2,
        }
    }
}

impl OrbitCamera {
    /// Create an orbit camera with default placement (five units out,
    /// looking at the origin).
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an orbit camera with the given zoom sensitivity.
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

    /// Current polar angle in radians.
    pub fn theta(&self) -> f32 {
        self.theta
    }

    /// Current azimuth in radians.
    pub fn phi(&self) -> f32 {
        self.phi
    }

    /// Current orbit radius.
    pub fn distance(&self) -> f32 {
        self.distance
    }

    /// The point the camera orbits and looks at.
    pub fn focus_point(&self) -> Vec3 {
        self.focus_point
    }

    /// Move the orbit target.
    pub fn set_focus_point(&mut self, focus_point: Vec3) {
        self.focus_point = focus_point;
    }

    /// Set the zoom/pan sensitivity.
    pub fn set_speed(&mut self, speed: f32) {
        self.speed = speed;
    }

    /// World-space eye position (spherical-to-Cartesian around the
    /// focus point).
    pub fn eye(&self) -> Vec3 {
        let sin_theta = self.theta.sin();
        self.focus_point
            + self.distance
                * Vec3::new(
                    sin_theta * self.phi.cos(),
                    sin_theta * self.phi.sin(),
                    self.theta.cos(),
                )
    }

    /// Look-at target (the focus point).
    pub fn target(&self) -> Vec3 {
        self.focus_point
    }

    /// Camera up vector, perpendicular to the radial direction.
    ///
    /// Built from two cross products against world Z rather than stored,
    /// so it stays well-defined across the whole clamped θ range.
    pub fn up(&self) -> Vec3 {
        let dir = self.eye() - self.focus_point;
        let right = Vec3::Z.cross(dir).normalize();
        dir.cross(right).normalize()
    }

    /// Pointer button press/release.
    ///
    /// Right button gates panning, left gates rotation; wheel ticks
    /// arrive as press events on the scroll buttons and zoom by
    /// `distance * speed` per tick. When the last gesture button is
    /// released the move tracker resets, so the next drag starts fresh.
    pub fn on_pointer_button(
        &mut self,
        _x: f32,
        _y: f32,
        button: PointerButton,
        state: ButtonState,
    ) {
        match button {
            PointerButton::Right => self.panning = state.is_pressed(),
            PointerButton::Left => self.rotating = state.is_pressed(),
            PointerButton::ScrollUp => {
                if state.is_pressed() {
                    self.distance -= self.distance * self.speed;
                    self.distance = self.distance.max(MIN_DISTANCE);
                }
            }
            PointerButton::ScrollDown => {
                if state.is_pressed() {
                    self.distance += self.distance * self.speed;
                    self.distance = self.distance.min(MAX_DISTANCE);
                }
            }
            PointerButton::Middle => {}
        }

        if !self.panning && !self.rotating {
            self.last_pos = None;
        }
    }

    /// Pointer moved to `(x, y)` in window pixel coordinates.
    ///
    /// Panning takes priority over rotation when both buttons are held.
    pub fn on_pointer_move(&mut self, x: f32, y: f32) {
        let pos = Vec2::new(x, y);
        // First move of a gesture: snap the tracker so the delta is zero
        let last = self.last_pos.unwrap_or(pos);

        if self.panning {
            let dir = self.focus_point - self.eye();
            let right = dir.cross(self.phi_axis).normalize();
            let up = right.cross(dir).normalize();

            let horizontal = self.distance * (pos.x - last.x) / 500.0;
            let vertical = self.distance * (pos.y - last.y) / 1000.0;
            self.focus_point += -horizontal * right + vertical * up;
        } else if self.rotating {
            self.phi -= (pos.x - last.x) / 100.0;
            self.theta -= (pos.y - last.y) / 200.0;

            self.theta = self.theta.clamp(THETA_MIN, THETA_MAX);

            // Shift negative angles up before the modulo, then wrap.
            // Theta is already clamped, so only the phi wrap can bite.
            if self.phi < 0.0 {
                self.phi += TAU;
            }
            if self.theta < 0.0 {
                self.theta += TAU;
            }
            self.phi %= TAU;
            self.theta %= PI;
        }

        self.last_pos = Some(pos);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    const EPS: f32 = 1e-4;

    fn press(cam: &mut OrbitCamera, button: PointerButton) {
        cam.on_pointer_button(0.0, 0.0, button, ButtonState::Pressed);
    }

    fn release(cam: &mut OrbitCamera, button: PointerButton) {
        cam.on_pointer_button(0.0, 0.0, button, ButtonState::Released);
    }

    #[test]
    fn default_eye_sits_on_negative_y() {
        let cam = OrbitCamera::new();
        let eye = cam.eye();
        assert!(eye.x.abs() < EPS, "x = {}", eye.x);
        assert!((eye.y + 5.0).abs() < EPS, "y = {}", eye.y);
        assert!(eye.z.abs() < EPS, "z = {}", eye.z);
    }

    #[test]
    fn eye_stays_exactly_distance_from_focus() {
        let mut cam = OrbitCamera::new();
        for (theta, phi) in [
            (0.01, 0.0),
            (0.5, 1.0),
            (FRAC_PI_2, PI * 1.5),
            (2.0, 5.9),
            (3.14, 0.2),
        ] {
            cam.theta = theta;
            cam.phi = phi;
            let radius = (cam.eye() - cam.target()).length();
            assert!(
                (radius - cam.distance()).abs() < EPS,
                "theta {theta}, phi {phi}: radius {radius}"
            );
        }
    }

    #[test]
    fn up_is_unit_and_orthogonal_to_view_direction() {
        let mut cam = OrbitCamera::new();
        press(&mut cam, PointerButton::Left);
        cam.on_pointer_move(0.0, 0.0);
        for step in 1..40 {
            cam.on_pointer_move(step as f32 * 17.0, step as f32 * 9.0);
            let up = cam.up();
            let dir = cam.eye() - cam.target();
            assert!((up.length() - 1.0).abs() < EPS);
            assert!(up.dot(dir).abs() < EPS * dir.length());
        }
    }

    #[test]
    fn scroll_up_shrinks_distance_geometrically() {
        let mut cam = OrbitCamera::new();
        let d0 = cam.distance();
        let speed = cam.speed;
        for n in 1..=5 {
            press(&mut cam, PointerButton::ScrollUp);
            let expected = d0 * (1.0 - speed).powi(n);
            assert!((cam.distance() - expected).abs() < EPS);
        }
    }

    #[test]
    fn scroll_up_floors_distance() {
        let mut cam = OrbitCamera::new();
        cam.distance = 0.0011;
        press(&mut cam, PointerButton::ScrollUp);
        assert_eq!(cam.distance(), 0.001);
    }

    #[test]
    fn scroll_down_grows_distance_and_caps() {
        let mut cam = OrbitCamera::new();
        let d0 = cam.distance();
        press(&mut cam, PointerButton::ScrollDown);
        assert!((cam.distance() - d0 * 1.2).abs() < EPS);

        cam.distance = 9.0e8;
        press(&mut cam, PointerButton::ScrollDown);
        assert_eq!(cam.distance(), 1e9);
    }

    #[test]
    fn pan_with_zero_delta_leaves_focus_unchanged() {
        let mut cam = OrbitCamera::new();
        press(&mut cam, PointerButton::Right);
        cam.on_pointer_move(100.0, 100.0);
        cam.on_pointer_move(100.0, 100.0);
        assert_eq!(cam.focus_point(), Vec3::ZERO);
    }

    #[test]
    fn horizontal_pan_stays_in_ground_plane() {
        let mut cam = OrbitCamera::new();
        press(&mut cam, PointerButton::Right);
        cam.on_pointer_move(0.0, 0.0);
        cam.on_pointer_move(250.0, 0.0);

        let focus = cam.focus_point();
        assert!(focus.length() > EPS, "focus should have moved");
        // The pan basis right vector is perpendicular to world Z
        assert!(focus.z.abs() < EPS);
    }

    #[test]
    fn pan_takes_priority_over_rotation() {
        let mut cam = OrbitCamera::new();
        let phi0 = cam.phi();
        press(&mut cam, PointerButton::Left);
        press(&mut cam, PointerButton::Right);
        cam.on_pointer_move(0.0, 0.0);
        cam.on_pointer_move(120.0, 0.0);
        assert_eq!(cam.phi(), phi0, "rotation must not run while panning");
        assert!(cam.focus_point().length() > EPS);
    }

    #[test]
    fn rotation_wraps_phi_into_range() {
        let mut cam = OrbitCamera::new();
        press(&mut cam, PointerButton::Left);
        cam.on_pointer_move(0.0, 0.0);
        // Large leftward drag: phi grows by 7 radians, past 2π
        cam.on_pointer_move(-700.0, 0.0);

        let expected = (PI * 1.5 + 7.0) % TAU;
        assert!((cam.phi() - expected).abs() < EPS);
        assert!(cam.phi() >= 0.0 && cam.phi() < TAU);
    }

    #[test]
    fn rotation_clamps_theta_at_poles() {
        let mut cam = OrbitCamera::new();
        press(&mut cam, PointerButton::Left);
        cam.on_pointer_move(0.0, 0.0);
        cam.on_pointer_move(0.0, 10_000.0);
        assert_eq!(cam.theta(), 0.01);

        cam.on_pointer_move(0.0, -20_000.0);
        assert_eq!(cam.theta(), 3.14);
    }

    #[test]
    fn release_resets_move_tracker() {
        let mut cam = OrbitCamera::new();
        press(&mut cam, PointerButton::Left);
        cam.on_pointer_move(0.0, 0.0);
        cam.on_pointer_move(50.0, 0.0);
        let phi_after_drag = cam.phi();

        release(&mut cam, PointerButton::Left);
        press(&mut cam, PointerButton::Left);
        // First move after re-press must produce a zero delta, however
        // far the pointer traveled in between
        cam.on_pointer_move(900.0, 400.0);
        assert_eq!(cam.phi(), phi_after_drag);

        cam.on_pointer_move(910.0, 400.0);
        assert!((cam.phi() - (phi_after_drag - 0.1)).abs() < EPS);
    }

    #[test]
    fn tracker_survives_while_any_button_is_held() {
        let mut cam = OrbitCamera::new();
        press(&mut cam, PointerButton::Left);
        press(&mut cam, PointerButton::Right);
        cam.on_pointer_move(10.0, 10.0);

        // Releasing only one of two held buttons keeps the tracker
        release(&mut cam, PointerButton::Right);
        assert!(cam.last_pos.is_some());

        release(&mut cam, PointerButton::Left);
        assert!(cam.last_pos.is_none());
    }
}
