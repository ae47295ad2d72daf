use bubble_core::BubbleWorld;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::dom;

/// Measure the viewport now and again on every window resize.
pub fn wire_viewport_resize(viewport: &web::HtmlElement, world: &Rc<RefCell<BubbleWorld>>) {
    measure(viewport, world);

    let viewport_resize = viewport.clone();
    let world_resize = world.clone();
    let resize_closure = Closure::wrap(Box::new(move || {
        measure(&viewport_resize, &world_resize);
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window.add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref());
    }
    resize_closure.forget();
}

fn measure(viewport: &web::HtmlElement, world: &Rc<RefCell<BubbleWorld>>) {
    let size = dom::element_size(viewport);
    log::debug!("[camera] viewport {:.0}x{:.0}", size.x, size.y);
    world.borrow_mut().resize(size.x, size.y);
}
