//! Crate-level error types.

use std::fmt;

/// Errors produced by the arcball crate.
///
/// Pointer-driven operations (`grab`, `move_to`, `world_ray`) never fail;
/// these variants cover construction-time preconditions and the options
/// file layer.
#[derive(Debug)]
pub enum ArcballError {
    /// Viewport with a zero width or height.
    InvalidViewport {
        /// Requested width in pixels.
        width: u32,
        /// Requested height in pixels.
        height: u32,
    },
    /// Vertical field of view outside the open interval (0, 180) degrees.
    InvalidFieldOfView(f32),
    /// A supplied vector contains NaN or infinite components.
    NonFiniteInput(&'static str),
    /// Camera position coincides with the look-at point.
    DegenerateView,
    /// Up hint is parallel to the view direction.
    DegenerateUpVector,
    /// A camera option is outside its accepted range.
    InvalidOption(String),
    /// Generic I/O failure while reading or writing options.
    Io(std::io::Error),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
}

impl fmt::Display for ArcballError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidViewport { width, height } => {
                write!(f, "invalid viewport size {width}x{height}")
            }
            Self::InvalidFieldOfView(fovy) => write!(
                f,
                "vertical field of view must be in (0, 180) degrees, got \
                 {fovy}"
            ),
            Self::NonFiniteInput(what) => {
                write!(f, "non-finite value in {what}")
            }
            Self::DegenerateView => {
                write!(f, "camera position coincides with the look-at point")
            }
            Self::DegenerateUpVector => {
                write!(f, "up vector is parallel to the view direction")
            }
            Self::InvalidOption(msg) => write!(f, "invalid option: {msg}"),
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
        }
    }
}

impl std::error::Error for ArcballError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for ArcballError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
