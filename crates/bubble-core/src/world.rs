//! The Bubble World as one object hosts can drive.
//!
//! Hosts forward viewport resizes, pointer events and frame ticks, then read
//! a [`FrameSnapshot`] plus per-item idle transforms to position the world
//! layer, the parallax logo and each bubble.

use glam::Vec2;

use crate::camera::{CameraController, CameraParams};
use crate::constants::DEFAULT_IDLE_SEED;
use crate::error::WorldError;
use crate::gesture::{DragPhase, EndReason, GestureEnd, PointerCapture, PointerSample};
use crate::idle::{IdleAnimator, IdleSample};
use crate::layout::{compute_layout, default_catalog, ContentBounds, Item, ItemId, Layout, LayoutParams, Product};

#[derive(Clone, Debug, PartialEq)]
pub struct WorldParams {
    pub layout: LayoutParams,
    pub camera: CameraParams,
    pub idle_seed: u64,
}

impl Default for WorldParams {
    fn default() -> Self {
        Self {
            layout: LayoutParams::default(),
            camera: CameraParams::default(),
            idle_seed: DEFAULT_IDLE_SEED,
        }
    }
}

/// What the renderer needs each frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameSnapshot {
    pub world_offset: Vec2,
    pub parallax_offset: Vec2,
    pub is_dragging: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerOutcome {
    Ignored,
    Armed,
    Dragging,
    /// A click (no drag) landed on this item.
    Selected(ItemId),
    /// Gesture ended without selecting anything.
    Released,
}

pub struct BubbleWorld {
    layout: Layout,
    camera: CameraController,
    idle: IdleAnimator,
    torn_down: bool,
}

impl BubbleWorld {
    pub fn new(params: WorldParams, catalog: &[Product]) -> Result<Self, WorldError> {
        let layout = compute_layout(&params.layout, catalog)?;
        let camera = CameraController::new(layout.bounds, params.camera);
        let mut idle = IdleAnimator::new(params.idle_seed);
        for item in &layout.items {
            idle.mount(item.id);
        }
        log::info!(
            "[world] {} items, content {:.0}x{:.0}",
            layout.items.len(),
            layout.bounds.width,
            layout.bounds.height
        );
        Ok(Self {
            layout,
            camera,
            idle,
            torn_down: false,
        })
    }

    /// The shipped configuration: 14 boots on the default rings.
    pub fn with_defaults() -> Result<Self, WorldError> {
        Self::new(WorldParams::default(), &default_catalog())
    }

    // --- Inputs ---

    pub fn resize(&mut self, width: f32, height: f32) {
        if self.torn_down {
            return;
        }
        self.camera.resize(Vec2::new(width, height));
    }

    pub fn pointer_down(&mut self, sample: PointerSample) -> PointerOutcome {
        if self.torn_down || !self.camera.pointer_down(sample) {
            return PointerOutcome::Ignored;
        }
        PointerOutcome::Armed
    }

    pub fn pointer_move<C>(&mut self, sample: PointerSample, capture: &mut C) -> PointerOutcome
    where
        C: PointerCapture + ?Sized,
    {
        if self.torn_down {
            return PointerOutcome::Ignored;
        }
        match self.camera.pointer_move(sample, capture) {
            DragPhase::Idle => PointerOutcome::Ignored,
            DragPhase::Armed => PointerOutcome::Armed,
            DragPhase::Dragging => PointerOutcome::Dragging,
        }
    }

    pub fn pointer_up<C>(&mut self, sample: PointerSample, capture: &mut C) -> PointerOutcome
    where
        C: PointerCapture + ?Sized,
    {
        self.end_gesture(sample, EndReason::Up, capture)
    }

    pub fn pointer_cancel<C>(&mut self, sample: PointerSample, capture: &mut C) -> PointerOutcome
    where
        C: PointerCapture + ?Sized,
    {
        self.end_gesture(sample, EndReason::Cancel, capture)
    }

    pub fn pointer_leave<C>(&mut self, sample: PointerSample, capture: &mut C) -> PointerOutcome
    where
        C: PointerCapture + ?Sized,
    {
        self.end_gesture(sample, EndReason::Leave, capture)
    }

    fn end_gesture<C>(&mut self, sample: PointerSample, reason: EndReason, capture: &mut C) -> PointerOutcome
    where
        C: PointerCapture + ?Sized,
    {
        if self.torn_down {
            return PointerOutcome::Ignored;
        }
        match self.camera.pointer_end(sample, reason, capture) {
            None => PointerOutcome::Ignored,
            Some(GestureEnd::Click { .. }) => match self.item_at(sample.point) {
                Some(id) => {
                    log::info!("[click] selected item {}", id);
                    PointerOutcome::Selected(id)
                }
                None => PointerOutcome::Released,
            },
            Some(GestureEnd::Drag { .. } | GestureEnd::Abandoned { .. }) => PointerOutcome::Released,
        }
    }

    /// Advance easing and idle motion by `dt` seconds.
    pub fn tick(&mut self, dt: f32) {
        if self.torn_down {
            return;
        }
        self.camera.step(dt);
        self.idle.advance(dt);
    }

    // --- Item lifecycle ---

    pub fn mount_item(&mut self, id: ItemId) {
        if !self.torn_down && self.item(id).is_some() {
            self.idle.mount(id);
        }
    }

    /// Stop the item's idle loop and release its state.
    pub fn unmount_item(&mut self, id: ItemId) -> bool {
        self.idle.unmount(id)
    }

    /// Stop everything: drop the drag session, give back capture and release
    /// every idle track. Later events and ticks are ignored.
    pub fn teardown<C>(&mut self, capture: &mut C)
    where
        C: PointerCapture + ?Sized,
    {
        if self.torn_down {
            return;
        }
        self.camera.cancel_session(capture);
        self.idle.clear();
        self.torn_down = true;
        log::info!("[world] torn down");
    }

    // --- Queries ---

    pub fn snapshot(&self) -> FrameSnapshot {
        FrameSnapshot {
            world_offset: self.camera.rendered_offset(),
            parallax_offset: self.camera.parallax_rendered_offset(),
            is_dragging: self.camera.is_dragging(),
        }
    }

    /// Current idle transform of an item; rest pose once unmounted.
    pub fn item_transform(&self, id: ItemId) -> IdleSample {
        self.idle.sample(id).unwrap_or(IdleSample::REST)
    }

    /// Topmost item under a viewport-space point.
    pub fn item_at(&self, point: Vec2) -> Option<ItemId> {
        let world_point = point - self.camera.rendered_offset();
        self.layout
            .items
            .iter()
            .rev()
            .find(|item| {
                let t = self.item_transform(item.id);
                let radius = item.radius() * t.scale;
                world_point.distance_squared(item.center() + t.offset) <= radius * radius
            })
            .map(|item| item.id)
    }

    #[inline]
    pub fn items(&self) -> &[Item] {
        &self.layout.items
    }

    pub fn item(&self, id: ItemId) -> Option<&Item> {
        self.layout.items.iter().find(|i| i.id == id)
    }

    #[inline]
    pub fn content_bounds(&self) -> &ContentBounds {
        &self.layout.bounds
    }

    #[inline]
    pub fn camera(&self) -> &CameraController {
        &self.camera
    }

    #[inline]
    pub fn idle(&self) -> &IdleAnimator {
        &self.idle
    }

    #[inline]
    pub fn is_torn_down(&self) -> bool {
        self.torn_down
    }

    pub fn ensure_live(&self) -> Result<(), WorldError> {
        if self.torn_down {
            Err(WorldError::TornDown)
        } else {
            Ok(())
        }
    }
}
