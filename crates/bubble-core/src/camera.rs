//! Camera controller: pan limits, drag-to-pan and eased offsets.
//!
//! The camera offset is the translation applied to the world layer. Pan
//! limits are symmetric around the offset that centers the content in the
//! viewport, so the view can always return to fully centered and can never
//! travel further than needed to reveal the padded content edges.
//!
//! Pointer handlers only move *targets*. [`CameraController::step`] eases the
//! rendered offsets toward them; the parallax layer follows at a fraction of
//! the clamped camera movement with a slower spring.

use glam::Vec2;

use crate::constants::{
    BOUNDS_PADDING, CAMERA_SMOOTH_TIME_SEC, PARALLAX_FACTOR, PARALLAX_SMOOTH_TIME_SEC,
    SETTLE_EPSILON,
};
use crate::gesture::{
    exceeds_drag_threshold, DragPhase, DragSession, EndReason, GestureEnd, PointerCapture,
    PointerSample,
};
use crate::layout::ContentBounds;
use crate::spring::Spring2;

/// Legal range for the camera target offset.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PanBounds {
    pub min_x: f32,
    pub max_x: f32,
    pub min_y: f32,
    pub max_y: f32,
}

impl PanBounds {
    /// Zero-extent range pinned at `point`.
    pub fn degenerate_at(point: Vec2) -> Self {
        Self {
            min_x: point.x,
            max_x: point.x,
            min_y: point.y,
            max_y: point.y,
        }
    }

    /// Clamp each axis independently.
    #[inline]
    pub fn clamp(&self, v: Vec2) -> Vec2 {
        Vec2::new(
            v.x.max(self.min_x).min(self.max_x),
            v.y.max(self.min_y).min(self.max_y),
        )
    }

    #[inline]
    pub fn contains(&self, v: Vec2) -> bool {
        v.x >= self.min_x && v.x <= self.max_x && v.y >= self.min_y && v.y <= self.max_y
    }

    #[inline]
    pub fn extent(&self) -> Vec2 {
        Vec2::new(self.max_x - self.min_x, self.max_y - self.min_y)
    }
}

impl Default for PanBounds {
    fn default() -> Self {
        Self::degenerate_at(Vec2::ZERO)
    }
}

/// Pan bounds plus the offset that centers the content.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PanLimits {
    pub bounds: PanBounds,
    pub centered: Vec2,
}

#[inline]
fn is_measured(viewport: Vec2) -> bool {
    viewport.is_finite() && viewport.x > 0.0 && viewport.y > 0.0
}

/// Derive pan limits for a viewport. `None` while the viewport is unmeasured.
pub fn derive_pan_limits(viewport: Vec2, content: &ContentBounds, padding: f32) -> Option<PanLimits> {
    if !is_measured(viewport) {
        return None;
    }
    let extra = ((content.size() + Vec2::splat(padding * 2.0) - viewport) / 2.0).max(Vec2::ZERO);
    let centered = viewport / 2.0 - content.center();
    Some(PanLimits {
        bounds: PanBounds {
            min_x: centered.x - extra.x,
            max_x: centered.x + extra.x,
            min_y: centered.y - extra.y,
            max_y: centered.y + extra.y,
        },
        centered,
    })
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraParams {
    pub padding: f32,
    pub parallax_factor: f32,
    pub camera_smooth_time: f32,
    pub parallax_smooth_time: f32,
}

impl Default for CameraParams {
    fn default() -> Self {
        Self {
            padding: BOUNDS_PADDING,
            parallax_factor: PARALLAX_FACTOR,
            camera_smooth_time: CAMERA_SMOOTH_TIME_SEC,
            parallax_smooth_time: PARALLAX_SMOOTH_TIME_SEC,
        }
    }
}

pub struct CameraController {
    params: CameraParams,
    content: ContentBounds,
    viewport: Vec2,
    measured: bool,
    bounds: PanBounds,
    centered: Vec2,
    target: Vec2,
    parallax_target: Vec2,
    rendered: Spring2,
    parallax_rendered: Spring2,
    session: Option<DragSession>,
}

impl CameraController {
    pub fn new(content: ContentBounds, params: CameraParams) -> Self {
        Self {
            params,
            content,
            viewport: Vec2::ZERO,
            measured: false,
            bounds: PanBounds::default(),
            centered: Vec2::ZERO,
            target: Vec2::ZERO,
            parallax_target: Vec2::ZERO,
            rendered: Spring2::new(Vec2::ZERO, params.camera_smooth_time),
            parallax_rendered: Spring2::new(Vec2::ZERO, params.parallax_smooth_time),
            session: None,
        }
    }

    // --- Viewport ---

    /// Recompute pan bounds for a new viewport size.
    ///
    /// The first real measurement centers the camera and snaps the rendered
    /// offset there. Later calls only re-clamp the target; the rendered
    /// offset eases from wherever it currently is. An in-progress drag
    /// session survives.
    pub fn resize(&mut self, viewport: Vec2) {
        self.viewport = viewport;
        let Some(limits) = derive_pan_limits(viewport, &self.content, self.params.padding) else {
            log::debug!(
                "[camera] viewport {:.0}x{:.0} not measured yet; keeping bounds",
                viewport.x,
                viewport.y
            );
            return;
        };

        self.bounds = limits.bounds;
        self.centered = limits.centered;

        if self.measured {
            self.target = self.bounds.clamp(self.target);
            if let Some(session) = self.session.filter(|s| s.has_crossed_drag_threshold) {
                self.parallax_target = self.parallax_for(&session, self.target);
            }
            self.rendered.set_target(self.target);
            self.parallax_rendered.set_target(self.parallax_target);
        } else {
            self.measured = true;
            self.target = self.bounds.clamp(limits.centered);
            self.rendered.snap_to(self.target);
            log::info!(
                "[camera] first measurement {:.0}x{:.0}; centered at ({:.1},{:.1})",
                viewport.x,
                viewport.y,
                self.target.x,
                self.target.y
            );
        }

        log::debug!(
            "[camera] bounds x=[{:.1},{:.1}] y=[{:.1},{:.1}]",
            self.bounds.min_x,
            self.bounds.max_x,
            self.bounds.min_y,
            self.bounds.max_y
        );
    }

    // --- Pointer input ---

    /// Arm a drag session. Returns `false` if another pointer already owns one.
    pub fn pointer_down(&mut self, sample: PointerSample) -> bool {
        if let Some(existing) = &self.session {
            if existing.pointer_id != sample.pointer_id {
                log::debug!(
                    "[drag] ignoring pointer {} while pointer {} is down",
                    sample.pointer_id,
                    existing.pointer_id
                );
                return false;
            }
        }
        self.session = Some(DragSession::begin(sample, self.target, self.parallax_target));
        true
    }

    /// Track a move. Crossing the drag threshold captures the pointer.
    pub fn pointer_move<C>(&mut self, sample: PointerSample, capture: &mut C) -> DragPhase
    where
        C: PointerCapture + ?Sized,
    {
        let Some(mut session) = self.session else {
            return DragPhase::Idle;
        };
        if session.pointer_id != sample.pointer_id {
            return session.phase();
        }

        let delta = session.delta(sample.point);
        if !session.has_crossed_drag_threshold {
            if !exceeds_drag_threshold(delta) {
                return DragPhase::Armed;
            }
            session.has_crossed_drag_threshold = true;
            match capture.capture(session.pointer_id) {
                Ok(()) => session.holds_capture = true,
                Err(e) => log::warn!("[drag] capture failed, continuing without it: {}", e),
            }
            log::debug!("[drag] pointer {} started panning", session.pointer_id);
        }

        self.target = self.bounds.clamp(session.origin_offset + delta);
        self.parallax_target = self.parallax_for(&session, self.target);
        self.rendered.set_target(self.target);
        self.parallax_rendered.set_target(self.parallax_target);
        self.session = Some(session);
        DragPhase::Dragging
    }

    /// End the gesture for `sample.pointer_id`. The target stays where it is.
    pub fn pointer_end<C>(
        &mut self,
        sample: PointerSample,
        reason: EndReason,
        capture: &mut C,
    ) -> Option<GestureEnd>
    where
        C: PointerCapture + ?Sized,
    {
        let session = self.session?;
        if session.pointer_id != sample.pointer_id {
            return None;
        }
        self.session = None;
        Self::release_capture(&session, capture);

        let pointer_id = session.pointer_id;
        let end = match (session.has_crossed_drag_threshold, reason) {
            (true, _) => GestureEnd::Drag { pointer_id },
            (false, EndReason::Up) => GestureEnd::Click { pointer_id },
            (false, _) => GestureEnd::Abandoned { pointer_id },
        };
        log::debug!("[drag] pointer {} ended ({:?}): {:?}", pointer_id, reason, end);
        Some(end)
    }

    fn release_capture<C>(session: &DragSession, capture: &mut C)
    where
        C: PointerCapture + ?Sized,
    {
        if session.holds_capture || capture.has_capture(session.pointer_id) {
            if let Err(e) = capture.release(session.pointer_id) {
                log::warn!("[drag] release failed, treating gesture as ended: {}", e);
            }
        }
    }

    /// Drop any session and give back capture. Used on teardown.
    pub fn cancel_session<C>(&mut self, capture: &mut C)
    where
        C: PointerCapture + ?Sized,
    {
        if let Some(session) = self.session.take() {
            Self::release_capture(&session, capture);
        }
    }

    #[inline]
    fn parallax_for(&self, session: &DragSession, target: Vec2) -> Vec2 {
        let actual_delta = target - session.origin_offset;
        session.origin_parallax_offset + actual_delta * self.params.parallax_factor
    }

    // --- Animation ---

    pub fn step(&mut self, dt: f32) {
        self.rendered.step(dt);
        self.parallax_rendered.step(dt);
    }

    pub fn is_settled(&self) -> bool {
        self.rendered.is_settled(SETTLE_EPSILON) && self.parallax_rendered.is_settled(SETTLE_EPSILON)
    }

    // --- Queries ---

    #[inline]
    pub fn target_offset(&self) -> Vec2 {
        self.target
    }

    #[inline]
    pub fn rendered_offset(&self) -> Vec2 {
        self.rendered.value()
    }

    #[inline]
    pub fn parallax_target_offset(&self) -> Vec2 {
        self.parallax_target
    }

    #[inline]
    pub fn parallax_rendered_offset(&self) -> Vec2 {
        self.parallax_rendered.value()
    }

    #[inline]
    pub fn bounds(&self) -> PanBounds {
        self.bounds
    }

    /// Offset that puts the content center in the viewport center.
    #[inline]
    pub fn centered_offset(&self) -> Vec2 {
        self.centered
    }

    #[inline]
    pub fn viewport(&self) -> Vec2 {
        self.viewport
    }

    #[inline]
    pub fn session(&self) -> Option<&DragSession> {
        self.session.as_ref()
    }

    pub fn phase(&self) -> DragPhase {
        self.session.map_or(DragPhase::Idle, |s| s.phase())
    }

    #[inline]
    pub fn is_dragging(&self) -> bool {
        self.phase() == DragPhase::Dragging
    }

    #[inline]
    pub fn params(&self) -> &CameraParams {
        &self.params
    }
}
