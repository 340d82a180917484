//! The gesture engine: pointer lifecycle, the pinch state machine, and
//! frame-driven transform updates.

use cgmath::Vector2;

use crate::commit::SettleState;
use crate::config::GestureConfig;
use crate::coords::MIN_PINCH_DISTANCE;
use crate::pointer::{PointerId, PointerKind, PointerTracker};
use crate::scheduler::{FrameHandle, FrameScheduler};
use crate::session::{GesturePhase, GestureSession};
use crate::surface::RenderSurface;
use crate::transform;
use crate::viewport::Viewport;

/// Converts raw multi-touch pointer input into an anchor-preserving zoom
/// change on a scrollable document surface.
///
/// The engine is single-threaded and event-driven: the host forwards pointer
/// events in arrival order and grants display frames via [`on_frame`]. While
/// a pinch is active the engine owns the surface's visual transform and
/// scroll offset; the expensive re-render is triggered exactly once per
/// gesture, through [`RenderSurface::commit`], when the pinch ends.
///
/// [`on_frame`]: PinchEngine::on_frame
pub struct PinchEngine<V, R, F> {
    config: GestureConfig,
    tracker: PointerTracker,
    phase: GesturePhase,
    session: Option<GestureSession>,
    settle: Option<SettleState>,
    pending_frame: Option<FrameHandle>,
    enabled: bool,
    warned_no_scheduler: bool,
    viewport: V,
    surface: R,
    scheduler: F,
}

impl<V, R, F> PinchEngine<V, R, F>
where
    V: Viewport,
    R: RenderSurface,
    F: FrameScheduler,
{
    pub fn new(config: GestureConfig, viewport: V, surface: R, scheduler: F) -> Self {
        Self {
            config,
            tracker: PointerTracker::new(),
            phase: GesturePhase::Idle,
            session: None,
            settle: None,
            pending_frame: None,
            enabled: true,
            warned_no_scheduler: false,
            viewport,
            surface,
            scheduler,
        }
    }

    pub fn phase(&self) -> GesturePhase {
        self.phase
    }

    pub fn config(&self) -> &GestureConfig {
        &self.config
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn viewport(&self) -> &V {
        &self.viewport
    }

    pub fn viewport_mut(&mut self) -> &mut V {
        &mut self.viewport
    }

    pub fn surface(&self) -> &R {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut R {
        &mut self.surface
    }

    /// Reclaims the injected capabilities, tearing down any active gesture
    /// first.
    pub fn into_parts(mut self) -> (V, R, F) {
        self.teardown();
        (self.viewport, self.surface, self.scheduler)
    }

    /// Enables or disables the engine. Disabling mid-gesture cancels the
    /// pending frame and restores all mutated surface state synchronously;
    /// it never commits.
    pub fn set_enabled(&mut self, enabled: bool) {
        if self.enabled == enabled {
            return;
        }
        self.enabled = enabled;
        if !enabled {
            self.teardown();
        }
    }

    /// A pointer was pressed on the gesture surface. Positions are
    /// container-local; the adapter filters pointers that originate outside
    /// the surface.
    pub fn pointer_down(&mut self, id: PointerId, kind: PointerKind, position: Vector2<f64>) {
        if !self.enabled {
            return;
        }
        if !self.tracker.register(id, kind, position) {
            return;
        }
        if self.phase == GesturePhase::Idle && self.tracker.count() >= 2 {
            self.arm();
        }
    }

    pub fn pointer_move(&mut self, id: PointerId, position: Vector2<f64>) {
        if !self.tracker.update(id, position) {
            return;
        }

        match self.phase {
            GesturePhase::Armed => self.check_start_threshold(),
            GesturePhase::Pinching => self.schedule_frame(),
            GesturePhase::Idle | GesturePhase::Settling => {}
        }
    }

    /// A pointer was released. A pointer that vanished without an event
    /// (lost capture) goes through here as well.
    pub fn pointer_up(&mut self, id: PointerId) {
        if !self.tracker.remove(id) {
            return;
        }

        match self.phase {
            GesturePhase::Armed => {
                if self.tracker.count() < 2 {
                    self.disarm();
                } else if self.in_session_pair(id) {
                    self.relock();
                }
            }
            GesturePhase::Pinching => {
                if self.tracker.count() < 2 {
                    self.begin_settle();
                } else if self.in_session_pair(id) {
                    self.relock();
                }
            }
            GesturePhase::Idle | GesturePhase::Settling => {}
        }
    }

    /// Pointer cancellation tears down exactly like a release.
    pub fn pointer_cancel(&mut self, id: PointerId) {
        self.pointer_up(id);
    }

    /// Host callback for a granted display frame. Stray frames (superseded
    /// requests, redraws for other reasons) are ignored.
    pub fn on_frame(&mut self) {
        if self.pending_frame.take().is_none() {
            return;
        }
        self.run_frame();
    }

    fn in_session_pair(&self, id: PointerId) -> bool {
        self.session
            .as_ref()
            .is_some_and(|session| session.pair.0 == id || session.pair.1 == id)
    }

    fn arm(&mut self) {
        let Some((a, b)) = self.tracker.first_two() else {
            return;
        };

        let base_distance = transform::distance(a.position, b.position).max(MIN_PINCH_DISTANCE);
        let center = transform::midpoint(a.position, b.position);
        let base_zoom = self.surface.committed_zoom();
        let content_point = self.viewport.scroll_position() + center;

        self.session = Some(GestureSession {
            pair: (a.id, b.id),
            base_zoom,
            base_distance,
            anchor: self.surface.project_to_anchor(content_point, base_zoom),
            center,
            content_point,
            visual_scale: 1.0,
            target_zoom: base_zoom,
        });
        self.viewport.set_pan_enabled(false);

        if self.config.start_threshold > 0.0 {
            self.phase = GesturePhase::Armed;
            log::trace!("pinch armed, base distance {base_distance:.1}px");
        } else {
            self.phase = GesturePhase::Pinching;
            log::trace!("pinch locked on immediately");
        }
    }

    fn check_start_threshold(&mut self) {
        let Some(session) = &self.session else {
            return;
        };
        let Some((a, b)) = self.tracker.first_two() else {
            return;
        };

        let distance = transform::distance(a.position, b.position);
        if (distance - session.base_distance).abs() > self.config.start_threshold {
            self.phase = GesturePhase::Pinching;
            log::trace!("pinch locked on");
            self.schedule_frame();
        }
    }

    /// One of the session pair lifted while two or more pointers remain: the
    /// session re-locks onto the tracker's current first two. The base
    /// distance is rebased so the zoom ratio continues from the current
    /// target without a jump, and the held content point is re-derived under
    /// the new center so the scroll does not jump either.
    fn relock(&mut self) {
        let scroll = self.viewport.scroll_position();
        let Some(session) = self.session.as_mut() else {
            return;
        };
        let Some((a, b)) = self.tracker.first_two() else {
            return;
        };

        let distance = transform::distance(a.position, b.position).max(MIN_PINCH_DISTANCE);
        let center = transform::midpoint(a.position, b.position);
        let content_point = (scroll + center) / session.visual_scale;

        session.pair = (a.id, b.id);
        session.base_distance =
            (distance / session.target_zoom.ratio(&session.base_zoom)).max(MIN_PINCH_DISTANCE);
        session.center = center;
        session.content_point = content_point;
        session.anchor = self
            .surface
            .project_to_anchor(content_point, session.base_zoom);
        log::trace!("pinch re-locked onto {:?}/{:?}", a.id, b.id);
    }

    fn disarm(&mut self) {
        self.session = None;
        self.cancel_pending_frame();
        self.viewport.set_pan_enabled(true);
        self.phase = GesturePhase::Idle;
        log::trace!("pinch disarmed below start threshold");
    }

    fn schedule_frame(&mut self) {
        if self.pending_frame.is_some() {
            return;
        }

        match self.scheduler.request_frame() {
            Ok(handle) => self.pending_frame = Some(handle),
            Err(err) => {
                if !self.warned_no_scheduler {
                    log::warn!("{err}; applying gesture frames synchronously");
                    self.warned_no_scheduler = true;
                }
                self.run_frame();
            }
        }
    }

    fn cancel_pending_frame(&mut self) {
        if let Some(handle) = self.pending_frame.take() {
            self.scheduler.cancel(handle);
        }
    }

    fn run_frame(&mut self) {
        match self.phase {
            GesturePhase::Pinching => self.pinch_frame(),
            GesturePhase::Settling => self.settle_frame(),
            GesturePhase::Idle | GesturePhase::Armed => {}
        }
    }

    /// One display frame while pinching: accept or reject the latest zoom
    /// sample, smooth center and scale, then write the visual transform and
    /// the hold-center scroll as one atomic update.
    fn pinch_frame(&mut self) {
        let Some(session) = self.session.as_mut() else {
            return;
        };
        let (Some(p1), Some(p2)) = (
            self.tracker.position_of(session.pair.0),
            self.tracker.position_of(session.pair.1),
        ) else {
            return;
        };

        let distance = transform::distance(p1, p2).max(MIN_PINCH_DISTANCE);
        let raw = self
            .surface
            .clamp_zoom(session.base_zoom * (distance / session.base_distance));
        if !transform::within_dead_zone(raw, session.target_zoom, self.config.min_zoom_delta) {
            session.target_zoom = raw;
        }

        // The scroll keeps tracking the center even while the zoom sits
        // inside the dead-zone; two-finger panning must not freeze.
        session.center = transform::approach_v(
            session.center,
            transform::midpoint(p1, p2),
            self.config.center_smoothing,
        );
        session.visual_scale = transform::approach(
            session.visual_scale,
            session.target_zoom.ratio(&session.base_zoom),
            self.config.scale_smoothing,
        );

        let scroll =
            transform::scroll_to_hold(session.content_point, session.center, session.visual_scale);
        let scroll = self.viewport.scroll_extents().clamp(scroll);
        self.viewport.set_visual_transform(session.visual_scale);
        self.viewport.set_scroll(scroll);
    }

    /// Pinching ended: clear the visual transform, issue the single
    /// authoritative commit, then wait for the re-render before correcting
    /// the scroll.
    fn begin_settle(&mut self) {
        let Some(session) = self.session.take() else {
            return;
        };

        self.cancel_pending_frame();
        self.viewport.clear_visual_transform();
        let committed = self.surface.commit(session.target_zoom);
        log::debug!("committed zoom {committed}");

        self.phase = GesturePhase::Settling;
        self.settle = Some(SettleState::new(
            session,
            committed,
            self.config.settle_frames,
        ));
        self.schedule_frame();
    }

    fn settle_frame(&mut self) {
        let Some(settle) = self.settle.as_mut() else {
            return;
        };

        if settle.tick() {
            self.finish_settle();
        } else {
            self.schedule_frame();
        }
    }

    fn finish_settle(&mut self) {
        let Some(settle) = self.settle.take() else {
            return;
        };

        let scroll = settle.resolve_scroll(&self.surface);
        let scroll = self.viewport.scroll_extents().clamp(scroll);
        self.viewport.set_scroll(scroll);
        self.viewport.set_pan_enabled(true);
        self.phase = GesturePhase::Idle;
        log::trace!("pinch settled");

        // Pointers that pressed during settling may already form the next
        // gesture.
        if self.tracker.count() >= 2 {
            self.arm();
        }
    }

    /// Idempotent teardown shared by disable and drop paths: cancel the
    /// pending frame, restore every mutated surface property, forget all
    /// pointer and session state.
    fn teardown(&mut self) {
        self.cancel_pending_frame();
        self.viewport.clear_visual_transform();
        self.viewport.set_pan_enabled(true);
        self.tracker.clear();
        self.session = None;
        self.settle = None;
        self.phase = GesturePhase::Idle;
    }
}
