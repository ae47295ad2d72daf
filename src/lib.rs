#![cfg(target_arch = "wasm32")]
use bubble_core::BubbleWorld;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;

mod constants;
mod dom;
mod events;
mod frame;
mod input;
mod render;

struct App {
    world: Rc<RefCell<BubbleWorld>>,
    capture: Rc<RefCell<events::ElementCapture>>,
}

thread_local! {
    static APP: RefCell<Option<App>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("bubble-web starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

/// Stop the frame loop, release idle tracks and any held pointer capture.
#[wasm_bindgen]
pub fn teardown() {
    APP.with(|app| {
        if let Some(app) = app.borrow_mut().take() {
            let mut capture = app.capture.borrow_mut();
            app.world.borrow_mut().teardown(&mut *capture);
        }
    });
}

fn init() -> anyhow::Result<()> {
    if APP.with(|app| app.borrow().is_some()) {
        log::warn!("bubble-web already started");
        return Ok(());
    }
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;

    let world = Rc::new(RefCell::new(BubbleWorld::with_defaults()?));
    let view = render::WorldView::build(&document, &world.borrow())?;
    let viewport = view.viewport.clone();
    let capture = Rc::new(RefCell::new(events::ElementCapture::new(viewport.clone().into())));

    events::wire_viewport_resize(&viewport, &world);
    events::wire_input_handlers(events::InputWiring {
        viewport: viewport.clone(),
        world: world.clone(),
        capture: capture.clone(),
    });

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        world: world.clone(),
        view,
        last_instant: Instant::now(),
    }));
    frame::start_loop(frame_ctx);

    APP.with(|app| *app.borrow_mut() = Some(App { world, capture }));
    Ok(())
}
