// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
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
// Unused / redundant code
#![warn(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]
// Graphics math: exact-constant comparisons and pixel-coordinate casts are
// routine here
#![allow(clippy::float_cmp)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::similar_names)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::suboptimal_flops)]
#![allow(clippy::missing_const_for_fn)]

//! Orbit and flying camera controllers for interactive 3D viewports.
//!
//! Vantage converts raw pointer and keyboard events into an updated view
//! orientation and position, and hands the resulting view/projection
//! matrices to whatever renders the scene. Rendering itself is out of
//! scope: the crate's output surface is
//! [`Camera::view`](camera::Camera::view),
//! [`Camera::projection`](camera::Camera::projection) and the
//! GPU-uploadable [`CameraUniform`](camera::CameraUniform) block.
//!
//! # Key entry points
//!
//! - [`camera::Camera`] - the closed set of camera controllers
//! - [`camera::OrbitCamera`] - spherical-coordinate orbit around a focus
//!   point
//! - [`camera::FlyingCamera`] - free-flight position/direction camera
//! - [`options::Options`] - runtime configuration with TOML presets
//! - `viewer::Viewer` - standalone demo window (`viewer` feature)
//!
//! # Event model
//!
//! All camera mutation happens through the event hooks
//! (`on_pointer_button`, `on_pointer_move`, `on_key`, `on_key_poll`),
//! called on the thread that delivers window events. Button events
//! strictly precede the move events they gate; the camera trusts that
//! ordering and keeps no internal queue.

pub mod camera;
pub mod error;
pub mod input;
pub mod options;
pub mod util;
#[cfg(feature = "viewer")]
pub mod viewer;

pub use camera::{Camera, CameraUniform, FlyingCamera, OrbitCamera, Projection};
pub use error::VantageError;
pub use input::{ButtonState, KeyState, MotionKey, PointerButton};
#[cfg(feature = "viewer")]
pub use viewer::Viewer;
