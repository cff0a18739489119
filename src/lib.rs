// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Complexity limits (thresholds in clippy.toml)
#![deny(clippy::cognitive_complexity)]
#![deny(clippy::too_many_lines)]
#![deny(clippy::excessive_nesting)]
// Function signature hygiene
#![deny(clippy::too_many_arguments)]
#![deny(clippy::fn_params_excessive_bools)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]

//! Arcball camera controller.
//!
//! Converts 2D pointer input inside a viewport into 3D camera changes:
//! orbiting around a look-at point, zooming, panning, adjusting the field
//! of view and two-pointer pinching. It also answers the inverse query,
//! mapping a pixel to a world-space ray for picking.
//!
//! # Key entry points
//!
//! - [`ArcballController`] - the grab / move / release state machine
//! - [`CameraState`] - look-at point, position, up vector and fov consumed
//!   by a renderer
//! - [`options::Options`] - gesture sensitivities with TOML presets
//!
//! The crate holds no rendering resources and performs no I/O outside the
//! options loader; building view/projection matrices from [`CameraState`]
//! is left to the renderer.

pub mod camera;
pub mod error;
pub mod options;

pub use camera::{
    ArcballController, CameraBasis, CameraState, GrabType, Ray, Viewport,
};
pub use error::ArcballError;
