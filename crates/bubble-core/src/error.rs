use thiserror::Error;

use crate::gesture::PointerId;

/// Rejected layout configuration.
///
/// Raised at configuration time; the layout never wraps the anchor table
/// because that would stack two items on the same spot.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LayoutError {
    #[error("item count must be at least 1")]
    NoItems,
    #[error("item count {requested} exceeds the {available} available anchors")]
    TooManyItems { requested: usize, available: usize },
    #[error("size sequence is empty")]
    EmptySizeSequence,
    #[error("offset sequence is empty")]
    EmptyOffsetSequence,
    #[error("product catalog is empty")]
    EmptyCatalog,
    #[error("invalid geometry: {0}")]
    InvalidGeometry(&'static str),
}

/// Pointer capture could not be taken or given back.
///
/// Never fatal: the controller keeps going as if the capture call succeeded
/// (or, for release, as if the gesture ended).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CaptureError {
    #[error("pointer {0} is already captured by another gesture")]
    AlreadyCaptured(PointerId),
    #[error("pointer {0} is not captured")]
    NotCaptured(PointerId),
    #[error("host rejected capture for pointer {pointer}: {reason}")]
    Host { pointer: PointerId, reason: String },
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum WorldError {
    #[error("layout rejected: {0}")]
    Layout(#[from] LayoutError),
    #[error("world has been torn down")]
    TornDown,
}
