//! Handles the touch input which is dispatched by the main event loop.

use std::time::Duration;

use cgmath::Vector2;
use vellum::{
    engine::PinchEngine, FrameScheduler, PointerId, PointerKind, RenderSurface, Viewport,
};
use winit::event::{Touch, TouchPhase, WindowEvent};

/// Feeds winit window events to the pinch engine.
///
/// Only touch events reach the engine; mouse and keyboard input is reported
/// as unprocessed so the host's own handling (native scrolling, shortcuts)
/// stays untouched.
pub struct InputController<V, R, F> {
    engine: PinchEngine<V, R, F>,
}

impl<V, R, F> InputController<V, R, F>
where
    V: Viewport,
    R: RenderSurface,
    F: FrameScheduler,
{
    pub fn new(engine: PinchEngine<V, R, F>) -> Self {
        Self { engine }
    }

    pub fn engine(&self) -> &PinchEngine<V, R, F> {
        &self.engine
    }

    pub fn engine_mut(&mut self) -> &mut PinchEngine<V, R, F> {
        &mut self.engine
    }

    pub fn into_engine(self) -> PinchEngine<V, R, F> {
        self.engine
    }

    /// Process the given winit `[winit::event::WindowEvent]`.
    /// Returns true if the event has been processed and false otherwise.
    pub fn window_input(&mut self, event: &WindowEvent, scale_factor: f64) -> bool {
        match event {
            WindowEvent::Touch(Touch {
                id,
                phase,
                location,
                ..
            }) => {
                let position: (f64, f64) = location.to_owned().into();
                let position = Vector2::from(position) / scale_factor;
                self.process_touch(*id, *phase, position);
                true
            }
            _ => false,
        }
    }

    /// Runs the engine's frame step. Call once per granted redraw, after the
    /// frame's window events have been forwarded.
    pub fn update_state(&mut self, _dt: Duration) {
        self.engine.on_frame();
    }

    fn process_touch(&mut self, id: u64, phase: TouchPhase, position: Vector2<f64>) {
        let id = PointerId(id);
        match phase {
            TouchPhase::Started => self.engine.pointer_down(id, PointerKind::Touch, position),
            TouchPhase::Moved => self.engine.pointer_move(id, position),
            TouchPhase::Ended => self.engine.pointer_up(id),
            TouchPhase::Cancelled => self.engine.pointer_cancel(id),
        }
    }
}
