use bubble_core::{BubbleWorld, CaptureError, PointerCapture, PointerId, PointerOutcome, PointerSample};
use glam::Vec2;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

use crate::constants::SELECT_EVENT;
use crate::dom;
use crate::input;

/// Browser pointer capture on one element.
#[derive(Clone)]
pub struct ElementCapture {
    element: web::Element,
}

impl ElementCapture {
    pub fn new(element: web::Element) -> Self {
        Self { element }
    }
}

impl PointerCapture for ElementCapture {
    fn capture(&mut self, pointer_id: PointerId) -> Result<(), CaptureError> {
        self.element
            .set_pointer_capture(pointer_id)
            .map_err(|e| CaptureError::Host {
                pointer: pointer_id,
                reason: format!("{:?}", e),
            })
    }

    fn release(&mut self, pointer_id: PointerId) -> Result<(), CaptureError> {
        if !self.element.has_pointer_capture(pointer_id) {
            return Err(CaptureError::NotCaptured(pointer_id));
        }
        self.element
            .release_pointer_capture(pointer_id)
            .map_err(|e| CaptureError::Host {
                pointer: pointer_id,
                reason: format!("{:?}", e),
            })
    }

    fn has_capture(&self, pointer_id: PointerId) -> bool {
        self.element.has_pointer_capture(pointer_id)
    }
}

#[derive(Clone)]
pub struct InputWiring {
    pub viewport: web::HtmlElement,
    pub world: Rc<RefCell<BubbleWorld>>,
    pub capture: Rc<RefCell<ElementCapture>>,
}

pub fn wire_input_handlers(w: InputWiring) {
    wire_pointerdown(&w);
    wire_pointermove(&w);
    wire_pointer_end(&w, "pointerup");
    wire_pointer_end(&w, "pointercancel");
    wire_pointer_end(&w, "pointerleave");
}

fn sample(ev: &web::PointerEvent, viewport: &web::HtmlElement) -> PointerSample {
    let origin = dom::element_origin(viewport);
    let client = Vec2::new(ev.client_x() as f32, ev.client_y() as f32);
    let p = input::client_to_viewport(client, origin.x, origin.y);
    PointerSample::new(ev.pointer_id(), p.x, p.y)
}

fn wire_pointerdown(w: &InputWiring) {
    let w = w.clone();
    let target = w.viewport.clone();

    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        if ev.button() != 0 {
            return;
        }
        let s = sample(&ev, &w.viewport);
        if w.world.borrow_mut().pointer_down(s) == PointerOutcome::Armed {
            ev.prevent_default();
        }
    }) as Box<dyn FnMut(_)>);
    _ = target.add_event_listener_with_callback("pointerdown", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_pointermove(w: &InputWiring) {
    let w = w.clone();
    let target = w.viewport.clone();

    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let s = sample(&ev, &w.viewport);
        let mut capture = w.capture.borrow_mut();
        if w.world.borrow_mut().pointer_move(s, &mut *capture) == PointerOutcome::Dragging {
            ev.prevent_default();
        }
    }) as Box<dyn FnMut(_)>);
    _ = target.add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_pointer_end(w: &InputWiring, kind: &'static str) {
    let w = w.clone();
    let target = w.viewport.clone();

    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let s = sample(&ev, &w.viewport);
        let outcome = {
            let mut capture = w.capture.borrow_mut();
            let mut world = w.world.borrow_mut();
            match kind {
                "pointerup" => world.pointer_up(s, &mut *capture),
                "pointercancel" => world.pointer_cancel(s, &mut *capture),
                _ => world.pointer_leave(s, &mut *capture),
            }
        };
        if let PointerOutcome::Selected(id) = outcome {
            dispatch_select(&w.viewport, id);
        }
    }) as Box<dyn FnMut(_)>);
    _ = target.add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref());
    closure.forget();
}

fn dispatch_select(target: &web::HtmlElement, id: bubble_core::ItemId) {
    let init = web::CustomEventInit::new();
    init.set_bubbles(true);
    init.set_detail(&JsValue::from(id));
    match web::CustomEvent::new_with_event_init_dict(SELECT_EVENT, &init) {
        Ok(ev) => {
            _ = target.dispatch_event(&ev);
        }
        Err(e) => log::warn!("[click] could not dispatch {}: {:?}", SELECT_EVENT, e),
    }
}
