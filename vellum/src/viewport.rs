//! The host surface the engine mutates during a gesture.

use cgmath::Vector2;

/// Scrollable extents of the gesture surface at one instant.
#[derive(Copy, Clone, Debug, Default)]
pub struct ScrollExtents {
    pub scroll_width: f64,
    pub scroll_height: f64,
    pub client_width: f64,
    pub client_height: f64,
}

impl ScrollExtents {
    /// Clamps a desired scroll offset to `[0, extent - client]` on both axes.
    /// Content smaller than the client area clamps to zero.
    pub fn clamp(&self, desired: Vector2<f64>) -> Vector2<f64> {
        Vector2::new(
            desired
                .x
                .min((self.scroll_width - self.client_width).max(0.0))
                .max(0.0),
            desired
                .y
                .min((self.scroll_height - self.client_height).max(0.0))
                .max(0.0),
        )
    }
}

/// Mutable view of the scroll container and its content node, implemented per
/// target platform. During a pinch the engine writes a compositor-level
/// transform and a scroll offset through this trait; it never touches a
/// platform API directly.
pub trait Viewport {
    /// Applies `scale(scale)` to the content node, anchored at the origin.
    fn set_visual_transform(&mut self, scale: f64);

    /// Restores the content node to no transform.
    fn clear_visual_transform(&mut self);

    fn scroll_extents(&self) -> ScrollExtents;

    fn scroll_position(&self) -> Vector2<f64>;

    /// Writes a scroll offset. Callers clamp via [`ScrollExtents::clamp`]
    /// first.
    fn set_scroll(&mut self, position: Vector2<f64>);

    /// Toggles native single-finger panning on the container. Disabled for
    /// the duration of a pinch so the platform does not scroll underneath
    /// the gesture.
    fn set_pan_enabled(&mut self, enabled: bool);
}

/// Viewport that ignores everything. An engine constructed over a surface
/// that no longer exists becomes a no-op rather than an error.
#[derive(Debug, Default)]
pub struct NopViewport;

impl Viewport for NopViewport {
    fn set_visual_transform(&mut self, _scale: f64) {}

    fn clear_visual_transform(&mut self) {}

    fn scroll_extents(&self) -> ScrollExtents {
        ScrollExtents::default()
    }

    fn scroll_position(&self) -> Vector2<f64> {
        Vector2::new(0.0, 0.0)
    }

    fn set_scroll(&mut self, _position: Vector2<f64>) {}

    fn set_pan_enabled(&mut self, _enabled: bool) {}
}
