//! Finalization of a pinch: the post-commit wait and the scroll correction.

use cgmath::Vector2;

use crate::coords::{DocumentAnchor, Zoom};
use crate::session::GestureSession;
use crate::surface::RenderSurface;
use crate::transform;

/// What survives of a session once the commit has been issued. Building a
/// `SettleState` consumes the [`GestureSession`], so no code path can reach
/// the commit call twice for the same gesture.
#[derive(Debug)]
pub(crate) struct SettleState {
    committed: Zoom,
    base_zoom: Zoom,
    anchor: Option<DocumentAnchor>,
    center: Vector2<f64>,
    content_point: Vector2<f64>,
    frames_left: u8,
}

impl SettleState {
    pub(crate) fn new(session: GestureSession, committed: Zoom, frames: u8) -> Self {
        Self {
            committed,
            base_zoom: session.base_zoom,
            anchor: session.anchor,
            center: session.center,
            content_point: session.content_point,
            frames_left: frames,
        }
    }

    /// Advances the post-commit wait by one granted frame. Returns `true`
    /// once layout geometry may be read.
    pub(crate) fn tick(&mut self) -> bool {
        if self.frames_left == 0 {
            return true;
        }
        self.frames_left -= 1;
        self.frames_left == 0
    }

    /// Final scroll offset, before clamping: exact page-aware placement when
    /// an anchor was resolved and the reverse projector answers, otherwise
    /// the ratio fallback that scales the captured content point to the
    /// committed layout.
    pub(crate) fn resolve_scroll<R: RenderSurface>(&self, surface: &R) -> Vector2<f64> {
        if let Some(anchor) = &self.anchor {
            if let Some(scroll) = surface.anchor_to_scroll(anchor, self.committed, self.center) {
                return scroll;
            }
        }

        transform::scroll_to_hold(
            self.content_point,
            self.center,
            self.committed.ratio(&self.base_zoom),
        )
    }
}
