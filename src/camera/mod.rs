//! Arcball camera control.
//!
//! Converts pointer drags into orbit, zoom, pan, field-of-view and pinch
//! changes of a look-at camera, and answers screen-to-world ray queries
//! for picking.

/// Pointer-driven state machine owning the camera.
pub mod controller;
/// Camera state, orthonormal camera frame and world rays.
pub mod core;
/// Single-pointer gesture modes and their transforms.
pub mod gesture;
/// Two-pointer pinch gesture.
mod pinch;
/// Window size and pointer normalization.
pub mod viewport;

pub use controller::ArcballController;
pub use self::core::{CameraBasis, CameraState, Ray};
pub use gesture::GrabType;
pub use viewport::Viewport;
