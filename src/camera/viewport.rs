use glam::Vec2;

use crate::error::ArcballError;

/// Pixel dimensions of the window the pointer moves over.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    width: u32,
    height: u32,
}

impl Viewport {
    /// Create a viewport.
    ///
    /// # Errors
    ///
    /// Returns [`ArcballError::InvalidViewport`] if either dimension is zero.
    pub fn new(width: u32, height: u32) -> Result<Self, ArcballError> {
        if width == 0 || height == 0 {
            return Err(ArcballError::InvalidViewport { width, height });
        }
        Ok(Self { width, height })
    }

    /// Width in pixels.
    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Map a pixel coordinate to normalized pointer coordinates.
    ///
    /// The window center maps to the origin and both axes are divided by
    /// half the window *height*, so the top and bottom edges land on ±1
    /// while the horizontal extent grows with the aspect ratio. `y` keeps
    /// the screen-down convention. Coordinates outside the window
    /// extrapolate past ±1.
    #[inline]
    #[must_use]
    pub fn normalize(&self, x: i32, y: i32) -> Vec2 {
        let half_w = self.width as f32 * 0.5;
        let half_h = self.height as f32 * 0.5;
        Vec2::new((x as f32 - half_w) / half_h, (y as f32 - half_h) / half_h)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn center_maps_to_origin() {
        let vp = Viewport::new(800, 600).unwrap();
        assert_eq!(vp.normalize(400, 300), Vec2::ZERO);
    }

    #[test]
    fn both_axes_use_half_height() {
        let vp = Viewport::new(800, 600).unwrap();
        assert_eq!(vp.normalize(430, 300), Vec2::new(0.1, 0.0));
        assert_eq!(vp.normalize(400, 0), Vec2::new(0.0, -1.0));
        assert_eq!(vp.normalize(400, 600), Vec2::new(0.0, 1.0));
        // Right edge sits at the aspect ratio, not at 1
        let right = vp.normalize(800, 300);
        assert!((right.x - 4.0 / 3.0).abs() < 1e-6);
    }

    #[test]
    fn outside_window_extrapolates() {
        let vp = Viewport::new(800, 600).unwrap();
        let p = vp.normalize(-200, 900);
        assert!((p.x + 2.0).abs() < 1e-6);
        assert!((p.y - 2.0).abs() < 1e-6);
    }

    #[test]
    fn zero_dimension_rejected() {
        assert!(matches!(
            Viewport::new(0, 600),
            Err(ArcballError::InvalidViewport { width: 0, height: 600 })
        ));
        assert!(Viewport::new(800, 0).is_err());
    }
}
