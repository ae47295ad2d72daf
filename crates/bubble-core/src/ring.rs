use crate::constants::{RING_EXTRA, RING_INNER_GAP, RING_LABEL_REPEAT, RING_LABEL_SEPARATOR};
use crate::layout::Item;

/// Geometry of the captioned donut shown around a hovered bubble.
///
/// All lengths are in world units, relative to the item's top-left corner.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HoverRing {
    pub size: f32,
    pub offset: f32,
    pub inner_radius: f32,
    pub outer_radius: f32,
    pub text_radius: f32,
}

impl HoverRing {
    pub fn for_size(size: f32) -> Self {
        let ring_size = size + RING_EXTRA;
        let inner_radius = size / 2.0 + RING_INNER_GAP;
        let outer_radius = ring_size / 2.0;
        Self {
            size: ring_size,
            offset: (ring_size - size) / 2.0,
            inner_radius,
            outer_radius,
            text_radius: (inner_radius + outer_radius) / 2.0,
        }
    }

    pub fn for_item(item: &Item) -> Self {
        Self::for_size(item.size)
    }
}

/// Label repeated enough times to wrap the whole ring.
pub fn ring_caption(label: &str) -> String {
    let mut caption = String::with_capacity((label.len() + RING_LABEL_SEPARATOR.len()) * RING_LABEL_REPEAT);
    for _ in 0..RING_LABEL_REPEAT {
        caption.push_str(label);
        caption.push_str(RING_LABEL_SEPARATOR);
    }
    caption
}
