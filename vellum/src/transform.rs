//! Pure geometry shared by the pinching frames and the final correction.

use cgmath::{MetricSpace, Vector2};

use crate::coords::Zoom;

pub fn distance(a: Vector2<f64>, b: Vector2<f64>) -> f64 {
    a.distance(b)
}

pub fn midpoint(a: Vector2<f64>, b: Vector2<f64>) -> Vector2<f64> {
    (a + b) / 2.0
}

/// One exponential smoothing step: `value + (target - value) * factor`.
/// A factor of `1.0` jumps straight to the target.
pub fn approach(value: f64, target: f64, factor: f64) -> f64 {
    value + (target - value) * factor
}

pub fn approach_v(value: Vector2<f64>, target: Vector2<f64>, factor: f64) -> Vector2<f64> {
    value + (target - value) * factor
}

/// Scroll offset that keeps `content_point` under `center` while the content
/// is scaled by `scale`.
///
/// `content_point` is captured at gesture start in the committed layout's
/// pixel space; `scale` is the visual scale during the gesture, or the
/// committed-over-base ratio at correction time. This equality holding on
/// every frame is the core correctness property of the gesture.
pub fn scroll_to_hold(
    content_point: Vector2<f64>,
    center: Vector2<f64>,
    scale: f64,
) -> Vector2<f64> {
    content_point * scale - center
}

/// Dead-zone predicate: `raw` samples this close to the last accepted zoom
/// are noise, not intent.
pub fn within_dead_zone(raw: Zoom, accepted: Zoom, min_delta: f64) -> bool {
    (raw.value() - accepted.value()).abs() < min_delta
}
