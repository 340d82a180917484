//! # Vellum
//!
//! An anchor-preserving pinch-zoom gesture engine for scrollable document
//! viewers.
//!
//! Vellum converts raw multi-touch pointer input into a smooth zoom change
//! while protecting the expensive document re-render from being triggered on
//! every touch-move event. During an active pinch only a cheap
//! compositor-level transform and the container's scroll offset are mutated,
//! computed so the content point under the fingers stays put; the single
//! authoritative zoom commit happens when the gesture ends, followed by an
//! anchor-based scroll correction once the re-render has settled.
//!
//! The engine is platform-independent. The host injects three capabilities:
//! a [`Viewport`] over its scroll container, a [`FrameScheduler`] over its
//! display loop, and a [`RenderSurface`] owning the committed zoom and the
//! optional page projector. The `vellum-winit` crate binds these to a winit
//! event loop; any other host loop works the same way.
//!
//! ### Example
//!
//! To import vellum in your `Cargo.toml`:
//!
//! ```toml
//! vellum = "0.1"
//! ```

pub mod config;
pub mod coords;
pub mod engine;
pub mod pointer;
pub mod scheduler;
pub mod session;
pub mod surface;
pub mod transform;
pub mod viewport;

// Internal modules
pub(crate) mod commit;

pub use config::GestureConfig;
pub use coords::{DocumentAnchor, Zoom, ZoomRange, MIN_PINCH_DISTANCE};
pub use engine::PinchEngine;
pub use pointer::{PointerId, PointerKind, PointerSample, PointerTracker};
pub use scheduler::{FrameHandle, FrameScheduler, NopFrameScheduler, ScheduleError};
pub use session::{GesturePhase, GestureSession};
pub use surface::RenderSurface;
pub use viewport::{NopViewport, ScrollExtents, Viewport};
