use glam::Vec2;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// Look an element up by id, creating it under `parent` if it is missing.
pub fn ensure_element(
    document: &web::Document,
    parent: &web::Element,
    id: &str,
    tag: &str,
) -> anyhow::Result<web::HtmlElement> {
    if let Some(el) = document.get_element_by_id(id) {
        return as_html(el);
    }
    let el = document
        .create_element(tag)
        .map_err(|e| anyhow::anyhow!("create <{}>: {:?}", tag, e))?;
    el.set_id(id);
    parent
        .append_child(&el)
        .map_err(|e| anyhow::anyhow!("append #{}: {:?}", id, e))?;
    as_html(el)
}

pub fn create_child(
    document: &web::Document,
    parent: &web::Element,
    tag: &str,
    class: &str,
) -> anyhow::Result<web::HtmlElement> {
    let el = document
        .create_element(tag)
        .map_err(|e| anyhow::anyhow!("create <{}>: {:?}", tag, e))?;
    el.set_class_name(class);
    parent
        .append_child(&el)
        .map_err(|e| anyhow::anyhow!("append .{}: {:?}", class, e))?;
    as_html(el)
}

pub fn as_html(el: web::Element) -> anyhow::Result<web::HtmlElement> {
    el.dyn_into::<web::HtmlElement>()
        .map_err(|e| anyhow::anyhow!("not an HtmlElement: {:?}", e))
}

#[inline]
pub fn set_style(el: &web::HtmlElement, prop: &str, value: &str) {
    _ = el.style().set_property(prop, value);
}

/// CSS size of an element in pixels.
pub fn element_size(el: &web::Element) -> Vec2 {
    let rect = el.get_bounding_client_rect();
    Vec2::new(rect.width() as f32, rect.height() as f32)
}

/// Top-left of an element in client coordinates.
pub fn element_origin(el: &web::Element) -> Vec2 {
    let rect = el.get_bounding_client_rect();
    Vec2::new(rect.left() as f32, rect.top() as f32)
}
