//! Pointer gesture bookkeeping: drag sessions and the capture register.
//!
//! Capture is modelled as a register of which pointer the camera currently
//! owns. Hosts with a platform capture API (the browser) implement
//! [`PointerCapture`] on top of it; tests and the native viewer use
//! [`CaptureRegister`] directly.

use glam::Vec2;

use crate::constants::DRAG_THRESHOLD_PX;
use crate::error::CaptureError;

pub type PointerId = i32;

/// One pointer event as seen by the controller. `point` is in viewport pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerSample {
    pub pointer_id: PointerId,
    pub point: Vec2,
}

impl PointerSample {
    #[inline]
    pub fn new(pointer_id: PointerId, x: f32, y: f32) -> Self {
        Self {
            pointer_id,
            point: Vec2::new(x, y),
        }
    }
}

/// Exclusive delivery of one pointer's events to a gesture owner.
pub trait PointerCapture {
    fn capture(&mut self, pointer_id: PointerId) -> Result<(), CaptureError>;
    fn release(&mut self, pointer_id: PointerId) -> Result<(), CaptureError>;
    fn has_capture(&self, pointer_id: PointerId) -> bool;
}

/// In-memory capture register: at most one pointer is owned at a time.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CaptureRegister {
    owner: Option<PointerId>,
}

impl CaptureRegister {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn owner(&self) -> Option<PointerId> {
        self.owner
    }
}

impl PointerCapture for CaptureRegister {
    fn capture(&mut self, pointer_id: PointerId) -> Result<(), CaptureError> {
        match self.owner {
            Some(current) if current != pointer_id => Err(CaptureError::AlreadyCaptured(current)),
            _ => {
                self.owner = Some(pointer_id);
                Ok(())
            }
        }
    }

    fn release(&mut self, pointer_id: PointerId) -> Result<(), CaptureError> {
        if self.owner == Some(pointer_id) {
            self.owner = None;
            Ok(())
        } else {
            Err(CaptureError::NotCaptured(pointer_id))
        }
    }

    fn has_capture(&self, pointer_id: PointerId) -> bool {
        self.owner == Some(pointer_id)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DragPhase {
    #[default]
    Idle,
    /// Pointer is down but has not moved far enough to count as a drag.
    Armed,
    Dragging,
}

/// Transient state between pointer-down and the end of the gesture.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragSession {
    pub pointer_id: PointerId,
    pub start_point: Vec2,
    pub origin_offset: Vec2,
    pub origin_parallax_offset: Vec2,
    pub has_crossed_drag_threshold: bool,
    pub holds_capture: bool,
}

impl DragSession {
    pub fn begin(sample: PointerSample, origin_offset: Vec2, origin_parallax_offset: Vec2) -> Self {
        Self {
            pointer_id: sample.pointer_id,
            start_point: sample.point,
            origin_offset,
            origin_parallax_offset,
            has_crossed_drag_threshold: false,
            holds_capture: false,
        }
    }

    #[inline]
    pub fn delta(&self, point: Vec2) -> Vec2 {
        point - self.start_point
    }

    #[inline]
    pub fn phase(&self) -> DragPhase {
        if self.has_crossed_drag_threshold {
            DragPhase::Dragging
        } else {
            DragPhase::Armed
        }
    }
}

/// Whether a displacement is large enough to turn a press into a pan.
#[inline]
pub fn exceeds_drag_threshold(delta: Vec2) -> bool {
    delta.x.abs().max(delta.y.abs()) >= DRAG_THRESHOLD_PX
}

/// How a pointer-up / cancel / leave ended the gesture.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GestureEnd {
    /// Released before the threshold was crossed: a plain click.
    Click { pointer_id: PointerId },
    /// Released after panning.
    Drag { pointer_id: PointerId },
    /// Cancelled or left the viewport without dragging.
    Abandoned { pointer_id: PointerId },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EndReason {
    Up,
    Cancel,
    Leave,
}
