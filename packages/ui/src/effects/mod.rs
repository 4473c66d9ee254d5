//! Scroll and pointer driven decoration: reveal, glow, tilt, magnetic,
//! spotlight, animated counters and the 3D model viewer.

mod counter;
mod model_viewer;
mod pointer;
mod reveal;

pub use counter::{counter_text, counter_value, ease_out_cubic, Counter, COUNTER_DURATION_MS};
pub use model_viewer::{auto_rotate_attr, ModelViewer, MODEL_VIEWER_JS};
pub use pointer::{
    magnetic_offset, magnetic_transform, spotlight_style, tilt_transform, BoxSize, CursorGlow,
    GlowFollower, Magnetic, Spotlight, Tilt, GLOW_SMOOTHING, TILT_RESET,
};
pub use reveal::{RevealConfig, RevealScope};

use std::time::Duration;

/// Tick used for requestAnimationFrame-style loops.
pub(crate) const FRAME: Duration = Duration::from_millis(16);

pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

pub fn clamp(v: f64, min: f64, max: f64) -> f64 {
    v.max(min).min(max)
}
