//! State of one active two-finger pinch.

use cgmath::Vector2;

use crate::coords::{DocumentAnchor, Zoom};
use crate::pointer::PointerId;

/// Gesture lifecycle. `Armed` is the window between two fingers landing and
/// the start threshold being crossed; releases inside it never zoom.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum GesturePhase {
    #[default]
    Idle,
    Armed,
    Pinching,
    Settling,
}

/// Transient state of one pinch, from lock-on to finalization. The engine
/// owns at most one at a time and passes it by reference into each handler;
/// no gesture state lives in callbacks.
#[derive(Clone, Debug)]
pub struct GestureSession {
    /// The two pointers whose geometry drives the session. Later pointers
    /// are tracked but never participate.
    pub pair: (PointerId, PointerId),
    /// Committed zoom at gesture start; the basis the visual scale is
    /// relative to, fixed for the whole session because the real layout does
    /// not change until commit.
    pub base_zoom: Zoom,
    /// Pointer distance the zoom ratio is measured against. Never below
    /// [`crate::coords::MIN_PINCH_DISTANCE`].
    pub base_distance: f64,
    /// Anchor under the pinch center at start, or `None` when no projector
    /// is available.
    pub anchor: Option<DocumentAnchor>,
    /// Smoothed pinch midpoint, container-local. Seeded with the midpoint at
    /// session start.
    pub center: Vector2<f64>,
    /// Content coordinate (base-zoom pixel space) under the pinch center at
    /// start. The per-frame scroll keeps this point under `center`.
    pub content_point: Vector2<f64>,
    /// Scale currently applied to the content surface; `1.0` at start.
    pub visual_scale: f64,
    /// Last accepted, dead-zone-filtered zoom. This is what gets committed.
    pub target_zoom: Zoom,
}
