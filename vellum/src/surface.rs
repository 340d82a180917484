//! Contract with the document render surface.

use cgmath::Vector2;

use crate::coords::{DocumentAnchor, Zoom};

/// The collaborator that owns the committed zoom and the expensive document
/// re-render.
///
/// The engine reads the committed zoom when a gesture starts, clamps raw
/// samples through the surface's policy while pinching, and calls [`commit`]
/// exactly once when the gesture ends. The projector pair is optional; a
/// surface that cannot map points to pages keeps the default `None`
/// implementations and the engine falls back to pure ratio math for the final
/// scroll correction.
///
/// [`commit`]: RenderSurface::commit
pub trait RenderSurface {
    /// Zoom currently driving the real render.
    fn committed_zoom(&self) -> Zoom;

    /// Applies the zoom policy (range, optional snapping) without committing.
    fn clamp_zoom(&self, zoom: Zoom) -> Zoom;

    /// Triggers the authoritative re-render and returns the zoom actually
    /// applied, which may be re-clamped or snapped. Called at most once per
    /// gesture.
    fn commit(&mut self, target: Zoom) -> Zoom;

    /// Maps a content-space point (pixels in the layout committed at `zoom`)
    /// to a page-relative, zoom-invariant anchor. Stateless.
    fn project_to_anchor(&self, _point: Vector2<f64>, _zoom: Zoom) -> Option<DocumentAnchor> {
        None
    }

    /// Inverse of [`project_to_anchor`]: the scroll offset that places
    /// `anchor` under the container-local `center` once the layout reflects
    /// `zoom`.
    ///
    /// [`project_to_anchor`]: RenderSurface::project_to_anchor
    fn anchor_to_scroll(
        &self,
        _anchor: &DocumentAnchor,
        _zoom: Zoom,
        _center: Vector2<f64>,
    ) -> Option<Vector2<f64>> {
        None
    }
}
