//! Tracking of currently pressed pointers.

use cgmath::Vector2;

/// Identifies one pointer for the duration of its press.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct PointerId(pub u64);

/// Device class reported with a pointer press.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PointerKind {
    Touch,
    Pen,
    Mouse,
}

/// Last known container-local position of one pressed pointer.
#[derive(Copy, Clone, Debug)]
pub struct PointerSample {
    pub id: PointerId,
    pub position: Vector2<f64>,
}

/// Insertion-ordered set of the currently pressed touch and pen pointers.
///
/// Mouse pointers are rejected at registration; a pinch is a touch gesture.
/// Pointer capture is the adapter's concern — a capture failure simply means
/// the pointer later vanishes, which callers treat exactly like a release.
#[derive(Debug, Default)]
pub struct PointerTracker {
    samples: Vec<PointerSample>,
}

impl PointerTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts tracking a pointer. Returns `false` when the pointer is not
    /// eligible (mouse). Re-registering a known id just updates its position.
    pub fn register(&mut self, id: PointerId, kind: PointerKind, position: Vector2<f64>) -> bool {
        if kind == PointerKind::Mouse {
            return false;
        }

        if self.update(id, position) {
            return true;
        }

        self.samples.push(PointerSample { id, position });
        true
    }

    /// Records a new position for a tracked pointer. Returns `false` for
    /// unknown ids.
    pub fn update(&mut self, id: PointerId, position: Vector2<f64>) -> bool {
        match self.samples.iter_mut().find(|sample| sample.id == id) {
            Some(sample) => {
                sample.position = position;
                true
            }
            None => false,
        }
    }

    /// Stops tracking a pointer. Returns `false` for unknown ids.
    pub fn remove(&mut self, id: PointerId) -> bool {
        let before = self.samples.len();
        self.samples.retain(|sample| sample.id != id);
        self.samples.len() != before
    }

    pub fn count(&self) -> usize {
        self.samples.len()
    }

    /// The two longest-pressed pointers, in registration order. These are the
    /// pointers a pinch session locks onto.
    pub fn first_two(&self) -> Option<(PointerSample, PointerSample)> {
        match self.samples.as_slice() {
            [first, second, ..] => Some((*first, *second)),
            _ => None,
        }
    }

    pub fn position_of(&self, id: PointerId) -> Option<Vector2<f64>> {
        self.samples
            .iter()
            .find(|sample| sample.id == id)
            .map(|sample| sample.position)
    }

    pub fn clear(&mut self) {
        self.samples.clear();
    }
}
