//! Gesture tuning.

use serde::{Deserialize, Serialize};

/// Tuning parameters for the pinch engine. All observed constants are
/// configuration, not behavioral contracts; hosts adjust them per input
/// device.
#[derive(Copy, Clone, Debug, Serialize, Deserialize)]
pub struct GestureConfig {
    /// Distance change in pixels before an armed gesture locks on. Keeps
    /// micro-jitter from triggering a zoom when two fingers first land.
    pub start_threshold: f64,
    /// Exponential-approach coefficient for the pinch center, in `(0, 1]`.
    /// `1.0` disables smoothing.
    pub center_smoothing: f64,
    /// Exponential-approach coefficient for the visual scale, in `(0, 1]`.
    pub scale_smoothing: f64,
    /// Minimum zoom change accepted while pinching. Samples inside this
    /// dead-zone leave the target zoom untouched.
    pub min_zoom_delta: f64,
    /// Granted display frames to wait after the commit before the scroll
    /// correction reads layout geometry. The commit kicks off an expensive
    /// asynchronous re-render; one frame is the minimum, two is safe.
    pub settle_frames: u8,
}

impl GestureConfig {
    /// Immediate-lock variant: no start threshold, no smoothing. Matches the
    /// simpler gesture behavior some hosts prefer for stylus-heavy input.
    pub fn immediate() -> Self {
        Self {
            start_threshold: 0.0,
            center_smoothing: 1.0,
            scale_smoothing: 1.0,
            ..Self::default()
        }
    }
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            start_threshold: 8.0,
            center_smoothing: 0.25,
            scale_smoothing: 0.12,
            // 0.25% of the default [0.5, 4.0] committed-zoom range
            min_zoom_delta: 0.00875,
            settle_frames: 2,
        }
    }
}
