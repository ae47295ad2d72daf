use glam::Vec2;

use crate::constants::{CURSOR_DRAGGING, CURSOR_IDLE, MAX_FRAME_DT_SEC};

// ---------------- Pointer helpers ----------------
/// Client coordinates relative to the top-left of a viewport rect.
#[inline]
pub fn client_to_viewport(client: Vec2, rect_left: f32, rect_top: f32) -> Vec2 {
    Vec2::new(client.x - rect_left, client.y - rect_top)
}

#[inline]
pub fn cursor_for(is_dragging: bool) -> &'static str {
    if is_dragging {
        CURSOR_DRAGGING
    } else {
        CURSOR_IDLE
    }
}

// ---------------- CSS helpers ----------------
#[inline]
pub fn px(v: f32) -> String {
    format!("{}px", round_css(v))
}

pub fn translate_css(offset: Vec2) -> String {
    format!("translate3d({}px, {}px, 0)", round_css(offset.x), round_css(offset.y))
}

/// Idle motion transform for one bubble.
pub fn idle_transform_css(offset: Vec2, scale: f32) -> String {
    format!(
        "translate3d({}px, {}px, 0) scale({})",
        round_css(offset.x),
        round_css(offset.y),
        round_scale(scale)
    )
}

/// Center a square of `size` on the layer-space point `center`.
pub fn logo_translate_css(center: Vec2, size: f32, parallax: Vec2) -> String {
    let half = size / 2.0;
    translate_css(Vec2::new(center.x - half + parallax.x, center.y - half + parallax.y))
}

// ---------------- Frame helpers ----------------
/// Frame delta in seconds; negative or non-finite deltas become zero.
#[inline]
pub fn clamp_frame_dt(dt_sec: f32) -> f32 {
    if dt_sec.is_finite() {
        dt_sec.clamp(0.0, MAX_FRAME_DT_SEC)
    } else {
        0.0
    }
}

#[inline]
fn round_css(v: f32) -> f32 {
    (v * 100.0).round() / 100.0
}

#[inline]
fn round_scale(v: f32) -> f32 {
    (v * 10_000.0).round() / 10_000.0
}
