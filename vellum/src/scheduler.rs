//! Display-frame scheduling.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScheduleError {
    #[error("frame scheduling is not available on this platform")]
    NotAvailable,
}

/// Opaque token for one requested frame callback.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct FrameHandle(pub u64);

/// Single-shot display-frame callback source.
///
/// `request_frame` asks the host loop to call
/// [`crate::engine::PinchEngine::on_frame`] once before the next paint — an
/// animation-frame callback in a browser, a redraw request under winit, a
/// tick in a bespoke render loop. The engine keeps at most one request
/// outstanding per gesture; that is what coalesces pointer-move bursts into
/// one transform update per displayed frame.
pub trait FrameScheduler {
    fn request_frame(&mut self) -> Result<FrameHandle, ScheduleError>;

    fn cancel(&mut self, handle: FrameHandle);
}

/// Scheduler for hosts without a frame callback source. The engine degrades
/// to applying updates synchronously, losing coalescing but nothing else.
#[derive(Debug, Default)]
pub struct NopFrameScheduler;

impl FrameScheduler for NopFrameScheduler {
    fn request_frame(&mut self) -> Result<FrameHandle, ScheduleError> {
        Err(ScheduleError::NotAvailable)
    }

    fn cancel(&mut self, _handle: FrameHandle) {}
}
