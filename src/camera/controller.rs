use glam::Vec3;

use super::core::{CameraBasis, CameraState, Ray};
use super::gesture::{Gesture, GrabFrame, GrabType};
use super::pinch::PinchGesture;
use super::viewport::Viewport;
use crate::error::ArcballError;
use crate::options::CameraOptions;

/// Grab state; present only while the controller is grabbed.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Grab {
    Single { frame: GrabFrame, gesture: Gesture },
    Pinch(PinchGesture),
}

/// Arcball camera controller.
///
/// Turns pointer drags into orbit, zoom, pan and field-of-view changes
/// around a look-at point. A drag is a `grab` followed by any number of
/// `move_to` calls and a `release`; each move recomputes the camera from
/// the state captured at grab time, so the result depends only on where
/// the pointer is now, not on the path it took.
///
/// # Example
///
/// ```
/// use arcball::{ArcballController, GrabType};
/// use glam::Vec3;
///
/// let mut arcball = ArcballController::new(
///     800,
///     600,
///     Vec3::ZERO,
///     Vec3::new(0.0, 0.0, 10.0),
///     Vec3::Y,
///     45.0,
/// )?;
/// arcball.grab(400, 300, GrabType::Rotate);
/// arcball.move_to(430, 300);
/// arcball.release();
/// assert!((arcball.camera().distance_to_target() - 10.0).abs() < 1e-4);
/// # Ok::<(), arcball::ArcballError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ArcballController {
    viewport: Viewport,
    camera: CameraState,
    options: CameraOptions,
    grab: Option<Grab>,
}

impl ArcballController {
    /// Create an idle controller with default sensitivities.
    ///
    /// `up_hint` is re-orthogonalized against the view direction.
    ///
    /// # Errors
    ///
    /// Returns an error for a zero-sized viewport, a non-finite vector, a
    /// camera placed on the look-at point, an up hint parallel to the view
    /// direction, or a field of view outside (0, 180) degrees.
    pub fn new(
        width: u32,
        height: u32,
        lookat: Vec3,
        position: Vec3,
        up_hint: Vec3,
        fovy: f32,
    ) -> Result<Self, ArcballError> {
        let viewport = Viewport::new(width, height)
            .inspect_err(|e| log::warn!("Rejected arcball viewport: {e}"))?;
        let camera = CameraState::new(lookat, position, up_hint, fovy)
            .inspect_err(|e| log::warn!("Rejected arcball camera: {e}"))?;
        Ok(Self {
            viewport,
            camera,
            options: CameraOptions::default(),
            grab: None,
        })
    }

    /// Replace the default sensitivities.
    ///
    /// # Errors
    ///
    /// Returns [`ArcballError::InvalidOption`] if the options fail
    /// validation.
    pub fn with_options(
        mut self,
        options: CameraOptions,
    ) -> Result<Self, ArcballError> {
        self.set_options(options)?;
        Ok(self)
    }

    /// Current camera state.
    #[must_use]
    pub fn camera(&self) -> &CameraState {
        &self.camera
    }

    /// Point the camera looks toward.
    #[must_use]
    pub fn lookat_point(&self) -> Vec3 {
        self.camera.lookat
    }

    /// Camera position.
    #[must_use]
    pub fn camera_position(&self) -> Vec3 {
        self.camera.position
    }

    /// Unit up vector, orthogonal to the view direction.
    #[must_use]
    pub fn camera_up(&self) -> Vec3 {
        self.camera.up
    }

    /// Vertical field of view in degrees.
    #[must_use]
    pub fn vertical_fov(&self) -> f32 {
        self.camera.fovy
    }

    /// Viewport used to normalize pointer coordinates.
    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Active sensitivities.
    #[must_use]
    pub fn options(&self) -> &CameraOptions {
        &self.options
    }

    /// Replace the sensitivities. An active gesture picks them up on its
    /// next move.
    ///
    /// # Errors
    ///
    /// Returns [`ArcballError::InvalidOption`] if the options fail
    /// validation; the previous options stay in effect.
    pub fn set_options(
        &mut self,
        options: CameraOptions,
    ) -> Result<(), ArcballError> {
        options
            .validate()
            .inspect_err(|e| log::warn!("Rejected camera options: {e}"))?;
        self.options = options;
        Ok(())
    }

    /// Change the window size used to normalize pointer coordinates.
    ///
    /// An active grab keeps the anchor it normalized against the old size.
    ///
    /// # Errors
    ///
    /// Returns [`ArcballError::InvalidViewport`] if either dimension is
    /// zero; the previous size stays in effect.
    pub fn set_viewport_size(
        &mut self,
        width: u32,
        height: u32,
    ) -> Result<(), ArcballError> {
        self.viewport = Viewport::new(width, height)?;
        log::debug!("arcball viewport resized to {width}x{height}");
        Ok(())
    }

    /// Re-aim the camera, validating the new state like [`Self::new`].
    ///
    /// Releases any active grab on success.
    ///
    /// # Errors
    ///
    /// Same conditions as [`CameraState::new`]; the controller is left
    /// untouched on error.
    pub fn reset(
        &mut self,
        lookat: Vec3,
        position: Vec3,
        up_hint: Vec3,
        fovy: f32,
    ) -> Result<(), ArcballError> {
        self.camera = CameraState::new(lookat, position, up_hint, fovy)?;
        self.grab = None;
        log::debug!("arcball reset: lookat {lookat}, position {position}");
        Ok(())
    }

    /// Start a gesture at pixel `(x, y)`.
    ///
    /// Grabbing while already grabbed discards the previous gesture and
    /// starts a fresh one from the current camera.
    pub fn grab(&mut self, x: i32, y: i32, grab_type: GrabType) {
        let anchor = self.viewport.normalize(x, y);
        let frame = GrabFrame::capture(&self.camera, anchor);
        let gesture = Gesture::begin(grab_type, &frame, &self.camera);
        log::debug!(
            "arcball grab {grab_type:?} at ({:.3}, {:.3})",
            anchor.x,
            anchor.y
        );
        self.grab = Some(Grab::Single { frame, gesture });
    }

    /// Move the pointer of a single-pointer gesture to pixel `(x, y)`.
    ///
    /// Does nothing when idle, during a pinch, or when the pointer is back
    /// on the grab point. A move whose result is not
    /// [renderable](CameraState::is_renderable) is dropped and the camera
    /// keeps its last good state.
    pub fn move_to(&mut self, x: i32, y: i32) {
        let Some(Grab::Single { frame, gesture }) = self.grab else {
            return;
        };
        let pointer = self.viewport.normalize(x, y);
        if pointer == frame.anchor {
            return;
        }
        let next = gesture.apply(&frame, pointer, &self.camera, &self.options);
        if !next.is_renderable() {
            log::debug!("arcball {:?} move dropped", gesture.grab_type());
            return;
        }
        self.camera = next;
        log::trace!(
            "arcball {:?} move to ({:.3}, {:.3})",
            gesture.grab_type(),
            pointer.x,
            pointer.y
        );
    }

    /// Start a two-pointer pinch with pointers at `(x1, y1)` and `(x2, y2)`.
    ///
    /// Moving the midpoint pans, changing the pointer spacing zooms, and
    /// twisting the pointers rolls the camera about its view axis.
    pub fn grab_pinch(&mut self, x1: i32, y1: i32, x2: i32, y2: i32) {
        let first = self.viewport.normalize(x1, y1);
        let second = self.viewport.normalize(x2, y2);
        let pinch = PinchGesture::begin(&self.camera, first, second);
        log::debug!(
            "arcball pinch grab at ({:.3}, {:.3})",
            pinch.frame.anchor.x,
            pinch.frame.anchor.y
        );
        self.grab = Some(Grab::Pinch(pinch));
    }

    /// Move the pointers of an active pinch.
    ///
    /// Does nothing unless a pinch is active or when both pointers are back
    /// where the pinch began.
    pub fn move_pinch(&mut self, x1: i32, y1: i32, x2: i32, y2: i32) {
        let Some(Grab::Pinch(pinch)) = self.grab else {
            return;
        };
        let first = self.viewport.normalize(x1, y1);
        let second = self.viewport.normalize(x2, y2);
        if first == pinch.first && second == pinch.second {
            return;
        }
        let next = pinch.apply(first, second, &self.camera);
        if !next.is_renderable() {
            log::debug!("arcball pinch move dropped");
            return;
        }
        self.camera = next;
        log::trace!(
            "arcball pinch move to ({:.3}, {:.3}) ({:.3}, {:.3})",
            first.x,
            first.y,
            second.x,
            second.y
        );
    }

    /// End the current gesture. The camera keeps its last state.
    pub fn release(&mut self) {
        if self.grab.take().is_some() {
            log::debug!("arcball release");
        }
    }

    /// Whether a gesture (single-pointer or pinch) is in progress.
    #[must_use]
    pub fn is_grabbed(&self) -> bool {
        self.grab.is_some()
    }

    /// Whether a pinch is in progress.
    #[must_use]
    pub fn is_pinching(&self) -> bool {
        matches!(self.grab, Some(Grab::Pinch(_)))
    }

    /// Mode of the active single-pointer gesture, if any.
    #[must_use]
    pub fn grab_type(&self) -> Option<GrabType> {
        match self.grab {
            Some(Grab::Single { gesture, .. }) => Some(gesture.grab_type()),
            _ => None,
        }
    }

    /// World-space ray through pixel `(x, y)`, for picking.
    ///
    /// The pixel is projected onto the plane through the look-at point
    /// facing the camera, and the ray runs from the camera through that
    /// point. This is exact for objects at the look-at depth and an
    /// approximation elsewhere. Independent of any active grab.
    #[must_use]
    pub fn world_ray(&self, x: i32, y: i32) -> Ray {
        let pointer = self.viewport.normalize(x, y);
        let basis =
            CameraBasis::new(self.camera.lookat_to_camera(), self.camera.up);
        let window_scale = self.camera.window_scale();

        let clicked = self.camera.lookat
            - basis.x * (pointer.x * window_scale)
            - basis.y * (pointer.y * window_scale);

        let origin = self.camera.position;
        Ray {
            origin,
            direction: (clicked - origin).normalize(),
        }
    }
}
