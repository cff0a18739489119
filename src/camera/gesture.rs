//! Per-mode drag math.
//!
//! Every transform is evaluated against the `GrabFrame` captured when the
//! gesture began, never against the previous move, so the camera is a pure
//! function of the grab snapshot and the current pointer.

use glam::{Quat, Vec2, Vec3};

use super::core::{half_fov_tangent, CameraBasis, CameraState};
use crate::options::CameraOptions;

/// Gesture selected when the pointer grabs the view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GrabType {
    /// Orbit the camera around the fixed look-at point. Grabbing outside
    /// the unit circle rolls about the view axis instead.
    Rotate,
    /// Move the camera toward or away from the fixed look-at point.
    Zoom,
    /// Translate the camera and look-at point together.
    Pan,
    /// Widen or narrow the vertical field of view.
    FovAdjust,
}

/// Camera snapshot taken at grab time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct GrabFrame {
    /// Normalized pointer position where the grab began.
    pub(crate) anchor: Vec2,
    pub(crate) lookat: Vec3,
    pub(crate) lookat_to_camera: Vec3,
    pub(crate) basis: CameraBasis,
}

impl GrabFrame {
    pub(crate) fn capture(camera: &CameraState, anchor: Vec2) -> Self {
        let lookat_to_camera = camera.lookat_to_camera();
        Self {
            anchor,
            lookat: camera.lookat,
            lookat_to_camera,
            basis: CameraBasis::new(lookat_to_camera, camera.up),
        }
    }
}

/// Active gesture with the parameters it fixed at grab time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum Gesture {
    /// `roll` holds the grab angle when the grab landed outside the unit
    /// circle.
    Rotate { roll: Option<f32> },
    Zoom { t_scale: f32 },
    Pan { window_scale: f32 },
    FovAdjust { t_scale: f32, fov_tangent: f32 },
}

impl Gesture {
    pub(crate) fn begin(
        grab_type: GrabType,
        frame: &GrabFrame,
        camera: &CameraState,
    ) -> Self {
        let anchor = frame.anchor;
        match grab_type {
            GrabType::Rotate => Self::Rotate {
                roll: (anchor.length_squared() > 1.0)
                    .then(|| anchor.y.atan2(anchor.x)),
            },
            GrabType::Zoom => Self::Zoom {
                t_scale: t_scale(anchor.y),
            },
            GrabType::Pan => Self::Pan {
                window_scale: half_fov_tangent(camera.fovy)
                    * frame.lookat_to_camera.length(),
            },
            GrabType::FovAdjust => Self::FovAdjust {
                t_scale: t_scale(anchor.y),
                fov_tangent: half_fov_tangent(camera.fovy),
            },
        }
    }

    pub(crate) fn grab_type(&self) -> GrabType {
        match self {
            Self::Rotate { .. } => GrabType::Rotate,
            Self::Zoom { .. } => GrabType::Zoom,
            Self::Pan { .. } => GrabType::Pan,
            Self::FovAdjust { .. } => GrabType::FovAdjust,
        }
    }

    /// Camera state for the pointer at `pointer` (normalized coordinates).
    pub(crate) fn apply(
        &self,
        frame: &GrabFrame,
        pointer: Vec2,
        camera: &CameraState,
        options: &CameraOptions,
    ) -> CameraState {
        let delta = pointer - frame.anchor;
        let mut next = *camera;

        match *self {
            Self::Rotate { roll } => {
                let axis_angle = roll.map_or_else(
                    || {
                        // Perpendicular to the drag, in the screen plane
                        let axis = Vec3::new(delta.y, -delta.x, 0.0)
                            .try_normalize()?;
                        Some((axis, delta.length() * options.rotate_scale))
                    },
                    |grab_angle| {
                        let angle = pointer.y.atan2(pointer.x) - grab_angle;
                        Some((Vec3::Z, angle * options.roll_scale))
                    },
                );
                let Some((local_axis, angle)) = axis_angle else {
                    return next;
                };
                let rotation = Quat::from_axis_angle(
                    frame.basis.to_world(local_axis),
                    angle,
                );
                next.position =
                    rotation * frame.lookat_to_camera + frame.lookat;
                next.up = rotation * frame.basis.y;
            }
            Self::Zoom { t_scale } => {
                let factor = drag_scale(options.zoom_base, delta.y, t_scale);
                next.position =
                    frame.lookat_to_camera * factor + frame.lookat;
            }
            Self::Pan { window_scale } => {
                let translation = (frame.basis.x * delta.x
                    + frame.basis.y * delta.y)
                    * window_scale;
                next.lookat = frame.lookat + translation;
                next.position = frame.lookat_to_camera + next.lookat;
            }
            Self::FovAdjust {
                t_scale,
                fov_tangent,
            } => {
                let tangent = fov_tangent
                    * drag_scale(options.zoom_base, delta.y, t_scale);
                next.fovy = (2.0 * tangent.atan()).to_degrees();
            }
        }

        next
    }
}

/// Bounds on the factor a single zoom or fov drag may apply. Keeps long
/// drags off the look-at point and away from `inf`.
pub(crate) const MIN_SCALE: f32 = 1e-6;
pub(crate) const MAX_SCALE: f32 = 1e6;

/// `base^(dy / t_scale)`, clamped to `[MIN_SCALE, MAX_SCALE]`.
#[inline]
fn drag_scale(base: f32, dy: f32, t_scale: f32) -> f32 {
    base.powf(dy / t_scale).clamp(MIN_SCALE, MAX_SCALE)
}

/// Denominator for zoom and fov drags: `1 - y` above the `y = 0.5` row,
/// `y` at or below it.
#[inline]
fn t_scale(y: f32) -> f32 {
    if y < 0.5 {
        1.0 - y
    } else {
        y
    }
}
