//! Hexagonal placement of the product bubbles in world space.
//!
//! Anchors sit on two concentric, vertically squashed ellipses: a flat-top
//! hexagon of six inside a ring of eight. Item count and sizes are known up
//! front, so spacing is tuned by hand rather than solved for. The output is
//! pure derived data: the same [`LayoutParams`] always yields the same
//! [`Layout`].

use glam::Vec2;

use crate::constants::{
    world_center_vec2, ANCHOR_COUNT, DEFAULT_ITEM_COUNT, EAGER_IMAGE_COUNT, INNER_RING_ANGLES_DEG,
    INNER_RING_SPACING, JITTER_OFFSETS, OUTER_RING_ANGLES_DEG, OUTER_RING_SPACING, PRODUCT_IMAGES,
    PRODUCT_LABELS, SIZE_CYCLE, VERTICAL_SQUASH,
};
use crate::error::LayoutError;

pub type ItemId = u32;

/// Display content for one bubble. Opaque to the layout.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Product {
    pub image_ref: String,
    pub label: String,
}

/// The shipped boot catalog, in display order.
pub fn default_catalog() -> Vec<Product> {
    PRODUCT_IMAGES
        .iter()
        .zip(PRODUCT_LABELS.iter())
        .map(|(image, label)| Product {
            image_ref: (*image).to_string(),
            label: (*label).to_string(),
        })
        .collect()
}

/// One placed bubble. `position` is the top-left corner in world space.
#[derive(Clone, Debug, PartialEq)]
pub struct Item {
    pub id: ItemId,
    pub position: Vec2,
    pub size: f32,
    pub image_ref: String,
    pub label: String,
}

impl Item {
    #[inline]
    pub fn center(&self) -> Vec2 {
        self.position + Vec2::splat(self.size * 0.5)
    }

    /// Bottom-right corner of the item's full extent.
    #[inline]
    pub fn max(&self) -> Vec2 {
        self.position + Vec2::splat(self.size)
    }

    #[inline]
    pub fn radius(&self) -> f32 {
        self.size * 0.5
    }

    /// Whether the host should load this item's image eagerly.
    #[inline]
    pub fn eager_image(&self) -> bool {
        self.id < EAGER_IMAGE_COUNT
    }
}

/// Axis-aligned box tightly enclosing every item.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ContentBounds {
    pub min_x: f32,
    pub min_y: f32,
    pub width: f32,
    pub height: f32,
    pub center_x: f32,
    pub center_y: f32,
}

impl ContentBounds {
    fn from_extents(min: Vec2, max: Vec2) -> Self {
        Self {
            min_x: min.x,
            min_y: min.y,
            width: max.x - min.x,
            height: max.y - min.y,
            center_x: (min.x + max.x) * 0.5,
            center_y: (min.y + max.y) * 0.5,
        }
    }

    #[inline]
    pub fn max_x(&self) -> f32 {
        self.min_x + self.width
    }

    #[inline]
    pub fn max_y(&self) -> f32 {
        self.min_y + self.height
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.center_x, self.center_y)
    }

    #[inline]
    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    pub fn encloses(&self, item: &Item) -> bool {
        let max = item.max();
        item.position.x >= self.min_x
            && item.position.y >= self.min_y
            && max.x <= self.max_x()
            && max.y <= self.max_y()
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct LayoutParams {
    pub item_count: usize,
    pub size_sequence: Vec<f32>,
    pub offset_sequence: Vec<Vec2>,
    pub inner_ring_spacing: f32,
    pub outer_ring_spacing: f32,
    pub vertical_squash: f32,
    pub world_center: Vec2,
}

impl Default for LayoutParams {
    fn default() -> Self {
        Self {
            item_count: DEFAULT_ITEM_COUNT,
            size_sequence: SIZE_CYCLE.to_vec(),
            offset_sequence: JITTER_OFFSETS.iter().map(|o| Vec2::from(*o)).collect(),
            inner_ring_spacing: INNER_RING_SPACING,
            outer_ring_spacing: OUTER_RING_SPACING,
            vertical_squash: VERTICAL_SQUASH,
            world_center: world_center_vec2(),
        }
    }
}

impl LayoutParams {
    fn validate(&self, catalog_len: usize) -> Result<(), LayoutError> {
        if self.item_count == 0 {
            return Err(LayoutError::NoItems);
        }
        if self.item_count > ANCHOR_COUNT {
            return Err(LayoutError::TooManyItems {
                requested: self.item_count,
                available: ANCHOR_COUNT,
            });
        }
        if self.size_sequence.is_empty() {
            return Err(LayoutError::EmptySizeSequence);
        }
        if self.offset_sequence.is_empty() {
            return Err(LayoutError::EmptyOffsetSequence);
        }
        if catalog_len == 0 {
            return Err(LayoutError::EmptyCatalog);
        }
        let positive = |v: f32| v.is_finite() && v > 0.0;
        if !positive(self.inner_ring_spacing) || !positive(self.outer_ring_spacing) {
            return Err(LayoutError::InvalidGeometry("ring spacing must be positive"));
        }
        if !positive(self.vertical_squash) {
            return Err(LayoutError::InvalidGeometry("vertical squash must be positive"));
        }
        if !self.size_sequence.iter().copied().all(positive) {
            return Err(LayoutError::InvalidGeometry("item sizes must be positive"));
        }
        if !self.offset_sequence.iter().all(|o| o.is_finite()) {
            return Err(LayoutError::InvalidGeometry("jitter offsets must be finite"));
        }
        if !self.world_center.is_finite() {
            return Err(LayoutError::InvalidGeometry("world center must be finite"));
        }
        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Layout {
    pub items: Vec<Item>,
    pub bounds: ContentBounds,
}

#[inline]
fn ring_point(center: Vec2, angle_deg: f32, spacing: f32, squash: f32) -> Vec2 {
    let (sin, cos) = angle_deg.to_radians().sin_cos();
    Vec2::new(center.x + cos * spacing, center.y + sin * spacing * squash)
}

/// The 14 anchor points: inner hexagon first, then the outer ring.
pub fn anchor_points(params: &LayoutParams) -> Vec<Vec2> {
    let inner = INNER_RING_ANGLES_DEG.iter().map(|deg| {
        ring_point(
            params.world_center,
            *deg,
            params.inner_ring_spacing,
            params.vertical_squash,
        )
    });
    let outer = OUTER_RING_ANGLES_DEG.iter().map(|deg| {
        ring_point(
            params.world_center,
            *deg,
            params.outer_ring_spacing,
            params.vertical_squash,
        )
    });
    inner.chain(outer).collect()
}

/// Place `params.item_count` items and report their bounding box.
///
/// Sizes, jitter offsets and catalog entries cycle; anchors do not.
pub fn compute_layout(params: &LayoutParams, catalog: &[Product]) -> Result<Layout, LayoutError> {
    params.validate(catalog.len())?;

    let anchors = anchor_points(params);
    let mut items = Vec::with_capacity(params.item_count);
    let mut min = Vec2::splat(f32::INFINITY);
    let mut max = Vec2::splat(f32::NEG_INFINITY);

    for (i, anchor) in anchors.iter().take(params.item_count).enumerate() {
        let size = params.size_sequence[i % params.size_sequence.len()];
        let jitter = params.offset_sequence[i % params.offset_sequence.len()];
        let product = &catalog[i % catalog.len()];

        let position = *anchor - Vec2::splat(size / 2.0) + jitter;
        min = min.min(position);
        max = max.max(position + Vec2::splat(size));

        items.push(Item {
            id: i as ItemId,
            position,
            size,
            image_ref: product.image_ref.clone(),
            label: product.label.clone(),
        });
    }

    let bounds = ContentBounds::from_extents(min, max);
    log::debug!(
        "[layout] items={} bounds=({:.1},{:.1}) {:.1}x{:.1}",
        items.len(),
        bounds.min_x,
        bounds.min_y,
        bounds.width,
        bounds.height
    );
    Ok(Layout { items, bounds })
}
