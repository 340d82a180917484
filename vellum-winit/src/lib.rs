//! Winit bindings for the vellum gesture engine.
//!
//! [`input::InputController`] translates `WindowEvent::Touch` sequences into
//! engine pointer events; [`RedrawScheduler`] maps the engine's frame
//! requests onto winit redraws. The host forwards window events as they
//! arrive and calls [`input::InputController::update_state`] from its
//! `RedrawRequested` handling.

#![deny(unused_imports)]

use std::sync::Arc;

use vellum::{FrameHandle, FrameScheduler, ScheduleError};
use winit::window::Window;

pub mod input;

/// [`FrameScheduler`] over winit redraw requests.
pub struct RedrawScheduler {
    window: Arc<Window>,
    next_handle: u64,
}

impl RedrawScheduler {
    pub fn new(window: Arc<Window>) -> Self {
        Self {
            window,
            next_handle: 0,
        }
    }
}

impl FrameScheduler for RedrawScheduler {
    fn request_frame(&mut self) -> Result<FrameHandle, ScheduleError> {
        self.window.request_redraw();
        self.next_handle += 1;
        Ok(FrameHandle(self.next_handle))
    }

    fn cancel(&mut self, _handle: FrameHandle) {
        // A redraw cannot be unrequested; the engine ignores frames it no
        // longer waits for.
    }
}
