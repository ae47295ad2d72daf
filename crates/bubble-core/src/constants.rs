// Shared layout/interaction tuning constants used by both web and native frontends.

// World
pub const WORLD_SIZE: f32 = 2000.0; // edge length of the square world layer
pub const WORLD_CENTER: [f32; 2] = [WORLD_SIZE / 2.0, WORLD_SIZE / 2.0];

// Ring layout
pub const INNER_RING_SPACING: f32 = 380.0; // inner ring distance from center
pub const OUTER_RING_SPACING: f32 = 720.0; // outer ring distance from center
pub const VERTICAL_SQUASH: f32 = 0.7; // 1 = circle, <1 = wider ellipse

pub const INNER_RING_ANGLES_DEG: [f32; 6] = [30.0, 90.0, 150.0, 210.0, 270.0, 330.0];
pub const OUTER_RING_ANGLES_DEG: [f32; 8] = [0.0, 45.0, 90.0, 135.0, 180.0, 225.0, 270.0, 315.0];
pub const ANCHOR_COUNT: usize = INNER_RING_ANGLES_DEG.len() + OUTER_RING_ANGLES_DEG.len();

pub const DEFAULT_ITEM_COUNT: usize = ANCHOR_COUNT;

pub const SIZE_CYCLE: [f32; 10] = [
    172.0, 160.0, 180.0, 200.0, 170.0, 180.0, 190.0, 165.0, 175.0, 160.0,
];

// Small hand-picked jitter so the rings do not read as a perfect lattice
pub const JITTER_OFFSETS: [[f32; 2]; 20] = [
    [-12.0, -10.0],
    [18.0, -6.0],
    [-8.0, 14.0],
    [20.0, 18.0],
    [-16.0, 6.0],
    [10.0, -14.0],
    [-6.0, 20.0],
    [14.0, -4.0],
    [-18.0, 10.0],
    [6.0, 16.0],
    [12.0, -12.0],
    [-14.0, -2.0],
    [16.0, 8.0],
    [-10.0, 18.0],
    [8.0, -16.0],
    [-20.0, 12.0],
    [22.0, -8.0],
    [-4.0, 14.0],
    [14.0, -18.0],
    [-12.0, 8.0],
];

// Product catalog
pub const PRODUCT_IMAGES: [&str; 11] = [
    "/images/studio-boots/bota-1.webp",
    "/images/studio-boots/bota-2.webp",
    "/images/studio-boots/bota-3.webp",
    "/images/studio-boots/bota-4.webp",
    "/images/studio-boots/bota-5.webp",
    "/images/studio-boots/bota-6.webp",
    "/images/studio-boots/bota-7.webp",
    "/images/studio-boots/bota-8.webp",
    "/images/studio-boots/bota-9.webp",
    "/images/studio-boots/bota-10.webp",
    "/images/studio-boots/bota-11.webp",
];

pub const PRODUCT_LABELS: [&str; 11] = [
    "Bota 1", "Bota 2", "Bota 3", "Bota 4", "Bota 5", "Bota 6", "Bota 7", "Bota 8", "Bota 9",
    "Bota 10", "Bota 11",
];

pub const EAGER_IMAGE_COUNT: u32 = 6; // first N items load their image eagerly

// Hover ring
pub const RING_EXTRA: f32 = 48.0; // ring diameter beyond the item
pub const RING_INNER_GAP: f32 = 2.0; // gap between item edge and ring
pub const RING_LABEL_REPEAT: usize = 10;
pub const RING_LABEL_SEPARATOR: &str = " • ";

// Camera
pub const BOUNDS_PADDING: f32 = 100.0; // slack around content for comfortable dragging
pub const DRAG_THRESHOLD_PX: f32 = 5.0; // below this a press is still a click
pub const PARALLAX_FACTOR: f32 = 0.2; // logo moves at 20% of camera speed

// Easing (seconds)
pub const CAMERA_SMOOTH_TIME_SEC: f32 = 0.6;
pub const PARALLAX_SMOOTH_TIME_SEC: f32 = 0.8; // slower than camera for depth
pub const SETTLE_EPSILON: f32 = 0.01;

// Idle motion
pub const IDLE_DRIFT_X: f32 = 22.0;
pub const IDLE_DRIFT_Y: f32 = 18.0;
pub const IDLE_FLOAT_Y: f32 = 26.0;
pub const IDLE_SCALE_MIN: f32 = 0.96;
pub const IDLE_SCALE_MAX: f32 = 1.06;
pub const IDLE_DRIFT_DURATION_SEC: [f32; 2] = [8.0, 14.0];
pub const IDLE_FLOAT_DURATION_SEC: [f32; 2] = [6.0, 12.0];
pub const IDLE_DELAY_MAX_SEC: f32 = 2.5;
pub const IDLE_FLOAT_DELAY_RATIO: f32 = 0.6;
pub const DEFAULT_IDLE_SEED: u64 = 42;

// Logo layer
pub const LOGO_SIZE: f32 = 400.0;

#[inline]
pub fn world_center_vec2() -> glam::Vec2 {
    glam::Vec2::new(WORLD_CENTER[0], WORLD_CENTER[1])
}
