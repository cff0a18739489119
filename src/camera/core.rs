use glam::Vec3;

use crate::error::ArcballError;

/// Logical camera state consumed by a renderer every frame.
///
/// The renderer builds its own view/projection matrices from these four
/// values; nothing here knows about clip space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraState {
    /// World-space point the camera looks toward.
    pub lookat: Vec3,
    /// Eye (camera) position in world space.
    pub position: Vec3,
    /// Unit up vector, orthogonal to the view direction.
    pub up: Vec3,
    /// Vertical field of view in degrees.
    pub fovy: f32,
}

impl CameraState {
    /// Build a camera state, re-orthogonalizing `up_hint` against the view
    /// direction.
    ///
    /// The hint need not be perpendicular to `lookat - position`; only the
    /// component orthogonal to the view direction survives.
    ///
    /// # Errors
    ///
    /// Returns an error if any vector is non-finite, the camera sits on the
    /// look-at point, the hint is parallel to the view direction, or `fovy`
    /// is not strictly inside (0, 180).
    pub fn new(
        lookat: Vec3,
        position: Vec3,
        up_hint: Vec3,
        fovy: f32,
    ) -> Result<Self, ArcballError> {
        if !lookat.is_finite() {
            return Err(ArcballError::NonFiniteInput("look-at point"));
        }
        if !position.is_finite() {
            return Err(ArcballError::NonFiniteInput("camera position"));
        }
        if !up_hint.is_finite() {
            return Err(ArcballError::NonFiniteInput("up vector"));
        }
        // NaN fails both comparisons
        let fovy_in_range = fovy > 0.0 && fovy < 180.0;
        if !fovy_in_range {
            return Err(ArcballError::InvalidFieldOfView(fovy));
        }

        let z = lookat - position;
        if z.length_squared() == 0.0 {
            return Err(ArcballError::DegenerateView);
        }
        let x = z.cross(up_hint);
        let up = x
            .cross(z)
            .try_normalize()
            .ok_or(ArcballError::DegenerateUpVector)?;

        Ok(Self {
            lookat,
            position,
            up,
            fovy,
        })
    }

    /// Offset from the look-at point to the camera.
    #[inline]
    #[must_use]
    pub fn lookat_to_camera(&self) -> Vec3 {
        self.position - self.lookat
    }

    /// Distance between the camera and the look-at point.
    #[inline]
    #[must_use]
    pub fn distance_to_target(&self) -> f32 {
        self.lookat_to_camera().length()
    }

    /// Unit direction the camera is facing (camera toward look-at point).
    #[must_use]
    pub fn view_direction(&self) -> Vec3 {
        (self.lookat - self.position).normalize_or_zero()
    }

    /// Orthonormal camera frame for the current state, or `None` if the
    /// camera sits on the look-at point or `up` is parallel to the view.
    #[must_use]
    pub fn basis(&self) -> Option<CameraBasis> {
        CameraBasis::try_new(self.lookat_to_camera(), self.up)
    }

    /// Whether a renderer can build a view from this state: every value
    /// finite, camera off the look-at point, `up` not parallel to the view,
    /// and `fovy` strictly inside (0, 180).
    #[must_use]
    pub fn is_renderable(&self) -> bool {
        self.lookat.is_finite()
            && self.position.is_finite()
            && self.up.is_finite()
            && self.fovy > 0.0
            && self.fovy < 180.0
            && self.basis().is_some()
    }

    /// Half-height of the view at the look-at depth, in world units.
    ///
    /// Multiplying a normalized pointer displacement by this gives the
    /// world-space distance it covers on the plane through the look-at
    /// point.
    #[must_use]
    pub fn window_scale(&self) -> f32 {
        half_fov_tangent(self.fovy) * self.distance_to_target()
    }
}

/// Orthonormal frame attached to the camera.
///
/// `z` points from the look-at point toward the camera, `x = z × up` and
/// `y = x × z`. With a standard up vector, `x` points to screen-left and `y`
/// to screen-up.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraBasis {
    /// Horizontal axis.
    pub x: Vec3,
    /// Vertical axis.
    pub y: Vec3,
    /// View axis, pointing back toward the camera.
    pub z: Vec3,
}

impl CameraBasis {
    /// Build the frame from a look-at-to-camera offset and an up vector.
    ///
    /// Returns `None` when the offset is zero or parallel to `up`.
    #[must_use]
    pub fn try_new(lookat_to_camera: Vec3, up: Vec3) -> Option<Self> {
        let z = lookat_to_camera.try_normalize()?;
        let x = z.cross(up).try_normalize()?;
        let y = x.cross(z).try_normalize()?;
        Some(Self { x, y, z })
    }

    /// Infallible variant for states already known to be renderable.
    pub(crate) fn new(lookat_to_camera: Vec3, up: Vec3) -> Self {
        let z = lookat_to_camera.normalize();
        let x = z.cross(up).normalize();
        let y = x.cross(z).normalize();
        Self { x, y, z }
    }

    /// Map a vector expressed in this frame into world space.
    #[inline]
    #[must_use]
    pub fn to_world(&self, local: Vec3) -> Vec3 {
        self.x * local.x + self.y * local.y + self.z * local.z
    }
}

/// World-space ray produced by a screen-to-world query.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    /// Ray origin (the camera position).
    pub origin: Vec3,
    /// Unit direction.
    pub direction: Vec3,
}

impl Ray {
    /// Point at parameter `t` along the ray.
    #[inline]
    #[must_use]
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }
}

/// `tan(fovy / 2)` for a field of view given in degrees.
#[inline]
pub(crate) fn half_fov_tangent(fovy: f32) -> f32 {
    (fovy.to_radians() * 0.5).tan()
}
