use bubble_core::BubbleWorld;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::input;
use crate::render::WorldView;

pub struct FrameContext {
    pub world: Rc<RefCell<BubbleWorld>>,
    pub view: WorldView,
    pub last_instant: Instant,
}

impl FrameContext {
    /// Advance the world one frame and render it. Returns `false` once the
    /// world is torn down.
    pub fn frame(&mut self) -> bool {
        let now = Instant::now();
        let dt_sec = input::clamp_frame_dt((now - self.last_instant).as_secs_f32());
        self.last_instant = now;

        let mut world = self.world.borrow_mut();
        if let Err(e) = world.ensure_live() {
            log::info!("[frame] loop stopped: {}", e);
            return false;
        }
        world.tick(dt_sec);
        self.view.apply(&world);
        true
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        if frame_ctx_tick.borrow_mut().frame() {
            request_frame(&tick_clone);
        }
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
