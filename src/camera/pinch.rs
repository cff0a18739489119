//! Two-pointer pinch: pan, zoom and roll in one gesture.

use std::f32::consts::{PI, TAU};

use glam::{Quat, Vec2};

use super::core::CameraState;
use super::gesture::{GrabFrame, MAX_SCALE, MIN_SCALE};

/// Pinch parameters fixed when both pointers went down.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct PinchGesture {
    /// Anchored at the pointers' midpoint.
    pub(crate) frame: GrabFrame,
    pub(crate) first: Vec2,
    pub(crate) second: Vec2,
    span: f32,
    angle: f32,
    window_scale: f32,
}

impl PinchGesture {
    pub(crate) fn begin(camera: &CameraState, first: Vec2, second: Vec2) -> Self {
        let between = second - first;
        Self {
            frame: GrabFrame::capture(camera, (first + second) * 0.5),
            first,
            second,
            span: between.length(),
            angle: between.y.atan2(between.x),
            window_scale: camera.window_scale(),
        }
    }

    pub(crate) fn apply(
        &self,
        first: Vec2,
        second: Vec2,
        camera: &CameraState,
    ) -> CameraState {
        let frame = &self.frame;
        let between = second - first;
        let shift = (first + second) * 0.5 - frame.anchor;
        let mut next = *camera;

        let translation = (frame.basis.x * shift.x + frame.basis.y * shift.y)
            * self.window_scale;
        next.lookat = frame.lookat + translation;

        // Spreading the pointers pulls the camera in
        let span = between.length();
        let factor = if self.span > 0.0 && span > 0.0 {
            (self.span / span).clamp(MIN_SCALE, MAX_SCALE)
        } else {
            1.0
        };
        next.position = frame.lookat_to_camera * factor + next.lookat;

        let twist = wrap_angle(between.y.atan2(between.x) - self.angle);
        next.up = Quat::from_axis_angle(frame.basis.z, twist) * frame.basis.y;

        next
    }
}

/// Wrap an angle into (-π, π].
fn wrap_angle(angle: f32) -> f32 {
    let wrapped = (angle + PI).rem_euclid(TAU) - PI;
    if wrapped <= -PI {
        wrapped + TAU
    } else {
        wrapped
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec3;

    use super::*;

    fn camera() -> CameraState {
        CameraState::new(Vec3::ZERO, Vec3::new(0.0, 0.0, 10.0), Vec3::Y, 45.0)
            .unwrap()
    }

    #[test]
    fn wrap_angle_stays_in_half_open_range() {
        assert!((wrap_angle(0.5) - 0.5).abs() < 1e-6);
        assert!((wrap_angle(TAU + 0.5) - 0.5).abs() < 1e-5);
        assert!((wrap_angle(-PI) - PI).abs() < 1e-6);
        assert!((wrap_angle(1.5 * PI) + 0.5 * PI).abs() < 1e-5);
    }

    #[test]
    fn unchanged_pointers_leave_camera_alone() {
        let cam = camera();
        let a = Vec2::new(-0.2, 0.1);
        let b = Vec2::new(0.3, -0.1);
        let pinch = PinchGesture::begin(&cam, a, b);
        let next = pinch.apply(a, b, &cam);
        assert!((next.position - cam.position).length() < 1e-5);
        assert!((next.lookat - cam.lookat).length() < 1e-6);
        assert!((next.up - cam.up).length() < 1e-6);
    }

    #[test]
    fn spreading_fingers_zooms_in() {
        let cam = camera();
        let pinch = PinchGesture::begin(
            &cam,
            Vec2::new(-0.1, 0.0),
            Vec2::new(0.1, 0.0),
        );
        let next =
            pinch.apply(Vec2::new(-0.2, 0.0), Vec2::new(0.2, 0.0), &cam);
        assert!((next.distance_to_target() - 5.0).abs() < 1e-4);
        assert_eq!(next.lookat, Vec3::ZERO);
    }

    #[test]
    fn coincident_pointers_skip_zoom() {
        let cam = camera();
        let p = Vec2::new(0.1, 0.1);
        let pinch = PinchGesture::begin(&cam, p, p);
        let next = pinch.apply(p, Vec2::new(0.3, 0.1), &cam);
        assert!(next.position.is_finite());
        assert!((next.distance_to_target() - 10.0).abs() < 1e-4);
    }

    #[test]
    fn moving_midpoint_pans() {
        let cam = camera();
        let pinch = PinchGesture::begin(
            &cam,
            Vec2::new(-0.1, 0.0),
            Vec2::new(0.1, 0.0),
        );
        let next =
            pinch.apply(Vec2::new(0.1, 0.0), Vec2::new(0.3, 0.0), &cam);
        let expected = Vec3::NEG_X * 0.2 * cam.window_scale();
        assert!((next.lookat - expected).length() < 1e-5);
        assert!(
            (next.lookat_to_camera() - cam.lookat_to_camera()).length() < 1e-5
        );
    }

    #[test]
    fn twisting_fingers_rolls_up_vector() {
        let cam = camera();
        let pinch = PinchGesture::begin(
            &cam,
            Vec2::new(-0.1, 0.0),
            Vec2::new(0.1, 0.0),
        );
        // Quarter turn, same span and midpoint
        let next =
            pinch.apply(Vec2::new(0.0, -0.1), Vec2::new(0.0, 0.1), &cam);
        assert!((next.up - Vec3::NEG_X).length() < 1e-5);
        assert!((next.position - cam.position).length() < 1e-4);
    }
}
