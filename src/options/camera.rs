use std::ops::RangeInclusive;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::ArcballError;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Camera", inline)]
#[serde(default)]
/// Gesture sensitivity parameters for the arcball controller.
pub struct CameraOptions {
    /// Radians of orbit per unit of normalized drag distance.
    #[schemars(title = "Rotate Speed", range(min = 0.5, max = 5.0), extend("step" = 0.1))]
    pub rotate_scale: f32,
    /// Multiplier on the tangential angle swept in roll mode.
    #[schemars(title = "Roll Speed", range(min = 0.5, max = 5.0), extend("step" = 0.1))]
    pub roll_scale: f32,
    /// Base of the exponential zoom and fov-adjust curves.
    ///
    /// A drag of one normalized unit scales the camera distance (or the
    /// fov tangent) by this factor.
    #[schemars(title = "Zoom Speed", range(min = 1.1, max = 10.0), extend("step" = 0.1))]
    pub zoom_base: f32,
}

impl Default for CameraOptions {
    fn default() -> Self {
        Self {
            rotate_scale: 2.0,
            roll_scale: 1.5,
            zoom_base: 3.0,
        }
    }
}

impl CameraOptions {
    /// Accepted `rotate_scale` values. Mirrors the schema range.
    pub const ROTATE_SCALE_RANGE: RangeInclusive<f32> = 0.5..=5.0;
    /// Accepted `roll_scale` values. Mirrors the schema range.
    pub const ROLL_SCALE_RANGE: RangeInclusive<f32> = 0.5..=5.0;
    /// Accepted `zoom_base` values. Mirrors the schema range.
    pub const ZOOM_BASE_RANGE: RangeInclusive<f32> = 1.1..=10.0;

    /// Check every field lies in the range the schema advertises.
    ///
    /// # Errors
    ///
    /// Returns [`ArcballError::InvalidOption`] naming the first field that
    /// is out of range or NaN.
    pub fn validate(&self) -> Result<(), ArcballError> {
        check_range(
            "rotate_scale",
            self.rotate_scale,
            &Self::ROTATE_SCALE_RANGE,
        )?;
        check_range("roll_scale", self.roll_scale, &Self::ROLL_SCALE_RANGE)?;
        check_range("zoom_base", self.zoom_base, &Self::ZOOM_BASE_RANGE)
    }
}

fn check_range(
    name: &str,
    value: f32,
    range: &RangeInclusive<f32>,
) -> Result<(), ArcballError> {
    if range.contains(&value) {
        Ok(())
    } else {
        Err(ArcballError::InvalidOption(format!(
            "{name} must be in {}..={}, got {value}",
            range.start(),
            range.end()
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let opts = CameraOptions::default();
        assert!(opts.validate().is_ok());
        assert_eq!(opts.rotate_scale, 2.0);
        assert_eq!(opts.roll_scale, 1.5);
        assert_eq!(opts.zoom_base, 3.0);
    }

    #[test]
    fn bad_values_rejected() {
        let opts = CameraOptions {
            zoom_base: 0.0,
            ..CameraOptions::default()
        };
        assert!(matches!(
            opts.validate(),
            Err(ArcballError::InvalidOption(_))
        ));

        let opts = CameraOptions {
            rotate_scale: f32::INFINITY,
            ..CameraOptions::default()
        };
        assert!(opts.validate().is_err());

        for opts in [
            CameraOptions {
                roll_scale: -1.5,
                ..CameraOptions::default()
            },
            CameraOptions {
                rotate_scale: -2.0,
                ..CameraOptions::default()
            },
            CameraOptions {
                zoom_base: 1.0,
                ..CameraOptions::default()
            },
            CameraOptions {
                zoom_base: f32::NAN,
                ..CameraOptions::default()
            },
            CameraOptions {
                rotate_scale: 5.5,
                ..CameraOptions::default()
            },
        ] {
            assert!(opts.validate().is_err(), "{opts:?}");
        }
    }

    #[test]
    fn range_ends_are_accepted() {
        let opts = CameraOptions {
            rotate_scale: *CameraOptions::ROTATE_SCALE_RANGE.start(),
            roll_scale: *CameraOptions::ROLL_SCALE_RANGE.end(),
            zoom_base: *CameraOptions::ZOOM_BASE_RANGE.start(),
        };
        assert!(opts.validate().is_ok());
    }
}
