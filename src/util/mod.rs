//! Small shared helpers.

/// Frame delta-time and FPS measurement.
pub mod frame_timing;

pub use frame_timing::FrameTiming;
