//! Per-item idle motion: a slow positional drift plus a float/breathing loop.
//!
//! Parameters are drawn once per item from a seeded stream keyed by the item
//! id, so bubbles desynchronize visually while staying reproducible. Each
//! loop is a sine in-out yoyo that starts after a per-item delay.

use std::collections::BTreeMap;
use std::f64::consts::PI;

use glam::Vec2;
use rand::prelude::*;

use crate::constants::{
    IDLE_DELAY_MAX_SEC, IDLE_DRIFT_DURATION_SEC, IDLE_DRIFT_X, IDLE_DRIFT_Y, IDLE_FLOAT_DELAY_RATIO,
    IDLE_FLOAT_DURATION_SEC, IDLE_FLOAT_Y, IDLE_SCALE_MAX, IDLE_SCALE_MIN,
};
use crate::layout::ItemId;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IdleMotion {
    pub drift: Vec2,
    pub drift_duration: f32,
    pub float_y: f32,
    pub scale_to: f32,
    pub float_duration: f32,
    pub delay: f32,
}

/// Transform to apply on top of an item's layout position.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IdleSample {
    pub offset: Vec2,
    pub scale: f32,
}

impl IdleSample {
    pub const REST: Self = Self {
        offset: Vec2::ZERO,
        scale: 1.0,
    };
}

/// Progress of a looping sine in-out yoyo: 0 at rest, 1 at full excursion.
#[inline]
fn sine_yoyo(elapsed: f64, duration: f32) -> f32 {
    if elapsed <= 0.0 {
        return 0.0;
    }
    ((1.0 - (PI * elapsed / f64::from(duration)).cos()) * 0.5) as f32
}

#[inline]
pub fn item_seed(base_seed: u64, id: ItemId) -> u64 {
    base_seed ^ u64::from(id).wrapping_mul(0x9E37_79B9_7F4A_7C15)
}

impl IdleMotion {
    pub fn for_item(id: ItemId, base_seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(item_seed(base_seed, id));
        let drift = Vec2::new(
            rng.gen_range(-IDLE_DRIFT_X..=IDLE_DRIFT_X),
            rng.gen_range(-IDLE_DRIFT_Y..=IDLE_DRIFT_Y),
        );
        let float_y = rng.gen_range(-IDLE_FLOAT_Y..=IDLE_FLOAT_Y);
        let scale_to = rng.gen_range(IDLE_SCALE_MIN..=IDLE_SCALE_MAX);
        let drift_duration = rng.gen_range(IDLE_DRIFT_DURATION_SEC[0]..=IDLE_DRIFT_DURATION_SEC[1]);
        let float_duration = rng.gen_range(IDLE_FLOAT_DURATION_SEC[0]..=IDLE_FLOAT_DURATION_SEC[1]);
        let delay = rng.gen_range(0.0..=IDLE_DELAY_MAX_SEC);
        Self {
            drift,
            drift_duration,
            float_y,
            scale_to,
            float_duration,
            delay,
        }
    }

    pub fn sample(&self, elapsed_sec: f64) -> IdleSample {
        let drift = sine_yoyo(elapsed_sec - f64::from(self.delay), self.drift_duration);
        let float_delay = self.delay * IDLE_FLOAT_DELAY_RATIO;
        let float = sine_yoyo(elapsed_sec - f64::from(float_delay), self.float_duration);
        IdleSample {
            offset: self.drift * drift + Vec2::new(0.0, self.float_y * float),
            scale: 1.0 + (self.scale_to - 1.0) * float,
        }
    }
}

#[derive(Clone, Copy, Debug)]
struct IdleTrack {
    motion: IdleMotion,
    elapsed: f64,
}

/// Owns the running idle tracks, one per mounted item.
#[derive(Clone, Debug, Default)]
pub struct IdleAnimator {
    seed: u64,
    tracks: BTreeMap<ItemId, IdleTrack>,
}

impl IdleAnimator {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            tracks: BTreeMap::new(),
        }
    }

    /// Start the item's loop. Mounting twice keeps the running track.
    pub fn mount(&mut self, id: ItemId) {
        let seed = self.seed;
        self.tracks.entry(id).or_insert_with(|| IdleTrack {
            motion: IdleMotion::for_item(id, seed),
            elapsed: 0.0,
        });
    }

    /// Stop the item's loop and drop its state.
    pub fn unmount(&mut self, id: ItemId) -> bool {
        self.tracks.remove(&id).is_some()
    }

    pub fn clear(&mut self) {
        self.tracks.clear();
    }

    pub fn advance(&mut self, dt: f32) {
        if !(dt.is_finite() && dt > 0.0) {
            return;
        }
        for track in self.tracks.values_mut() {
            track.elapsed += f64::from(dt);
        }
    }

    pub fn sample(&self, id: ItemId) -> Option<IdleSample> {
        self.tracks.get(&id).map(|t| t.motion.sample(t.elapsed))
    }

    pub fn motion(&self, id: ItemId) -> Option<&IdleMotion> {
        self.tracks.get(&id).map(|t| &t.motion)
    }

    #[inline]
    pub fn is_mounted(&self, id: ItemId) -> bool {
        self.tracks.contains_key(&id)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }
}
