use bubble_core::{ring_caption, BubbleWorld, HoverRing, Item, ItemId, LOGO_SIZE, WORLD_SIZE};
use web_sys as web;

use crate::constants::{CAMERA_LAYER_ID, ITEM_CLASS, ITEM_IMAGE_CLASS, LOGO_ID, RING_CLASS, VIEWPORT_ID};
use crate::dom;
use crate::input;

struct ItemView {
    id: ItemId,
    node: web::HtmlElement,
}

/// DOM nodes the frame loop writes transforms into.
pub struct WorldView {
    pub viewport: web::HtmlElement,
    camera_layer: web::HtmlElement,
    logo: web::HtmlElement,
    items: Vec<ItemView>,
    cursor: &'static str,
}

impl WorldView {
    pub fn build(document: &web::Document, world: &BubbleWorld) -> anyhow::Result<Self> {
        let body = document.body().ok_or_else(|| anyhow::anyhow!("no body"))?;
        let viewport = dom::ensure_element(document, &body, VIEWPORT_ID, "div")?;
        dom::set_style(&viewport, "position", "relative");
        dom::set_style(&viewport, "overflow", "hidden");
        dom::set_style(&viewport, "touch-action", "none");
        dom::set_style(&viewport, "user-select", "none");
        if viewport.style().get_property_value("height").unwrap_or_default().is_empty() {
            dom::set_style(&viewport, "width", "100%");
            dom::set_style(&viewport, "height", "100vh");
        }

        let logo = dom::ensure_element(document, &viewport, LOGO_ID, "div")?;
        dom::set_style(&logo, "position", "absolute");
        dom::set_style(&logo, "left", "0");
        dom::set_style(&logo, "top", "0");
        dom::set_style(&logo, "width", &input::px(LOGO_SIZE));
        dom::set_style(&logo, "height", &input::px(LOGO_SIZE));
        dom::set_style(&logo, "pointer-events", "none");
        dom::set_style(&logo, "will-change", "transform");

        let camera_layer = dom::ensure_element(document, &viewport, CAMERA_LAYER_ID, "div")?;
        dom::set_style(&camera_layer, "position", "absolute");
        dom::set_style(&camera_layer, "left", "0");
        dom::set_style(&camera_layer, "top", "0");
        dom::set_style(&camera_layer, "width", &input::px(WORLD_SIZE));
        dom::set_style(&camera_layer, "height", &input::px(WORLD_SIZE));
        dom::set_style(&camera_layer, "will-change", "transform");

        let mut items = Vec::with_capacity(world.items().len());
        for item in world.items() {
            let node = build_item(document, &camera_layer, item)?;
            items.push(ItemView { id: item.id, node });
        }
        log::info!("[render] built {} bubble nodes", items.len());

        Ok(Self {
            viewport,
            camera_layer,
            logo,
            items,
            cursor: "",
        })
    }

    /// Write the current camera, parallax and idle transforms.
    pub fn apply(&mut self, world: &BubbleWorld) {
        let snap = world.snapshot();
        dom::set_style(&self.camera_layer, "transform", &input::translate_css(snap.world_offset));

        let center = world.camera().viewport() / 2.0;
        dom::set_style(
            &self.logo,
            "transform",
            &input::logo_translate_css(center, LOGO_SIZE, snap.parallax_offset),
        );

        for view in &self.items {
            let t = world.item_transform(view.id);
            dom::set_style(&view.node, "transform", &input::idle_transform_css(t.offset, t.scale));
        }

        let cursor = input::cursor_for(snap.is_dragging);
        if cursor != self.cursor {
            dom::set_style(&self.viewport, "cursor", cursor);
            self.cursor = cursor;
        }
    }
}

fn build_item(
    document: &web::Document,
    layer: &web::HtmlElement,
    item: &Item,
) -> anyhow::Result<web::HtmlElement> {
    let node = dom::create_child(document, layer, "div", ITEM_CLASS)?;
    _ = node.set_attribute("data-item-id", &item.id.to_string());
    _ = node.set_attribute("aria-label", &item.label);
    dom::set_style(&node, "position", "absolute");
    dom::set_style(&node, "left", &input::px(item.position.x));
    dom::set_style(&node, "top", &input::px(item.position.y));
    dom::set_style(&node, "width", &input::px(item.size));
    dom::set_style(&node, "height", &input::px(item.size));
    dom::set_style(&node, "border-radius", "50%");
    dom::set_style(&node, "will-change", "transform");

    let ring = HoverRing::for_item(item);
    let ring_node = dom::create_child(document, &node, "div", RING_CLASS)?;
    _ = ring_node.set_attribute("data-caption", &ring_caption(&item.label));
    _ = ring_node.set_attribute("data-text-radius", &ring.text_radius.to_string());
    dom::set_style(&ring_node, "position", "absolute");
    dom::set_style(&ring_node, "left", &input::px(-ring.offset));
    dom::set_style(&ring_node, "top", &input::px(-ring.offset));
    dom::set_style(&ring_node, "width", &input::px(ring.size));
    dom::set_style(&ring_node, "height", &input::px(ring.size));
    dom::set_style(&ring_node, "pointer-events", "none");

    let img_el = document
        .create_element("img")
        .map_err(|e| anyhow::anyhow!("create <img>: {:?}", e))?;
    img_el.set_class_name(ITEM_IMAGE_CLASS);
    let img = wasm_bindgen::JsCast::dyn_into::<web::HtmlImageElement>(img_el)
        .map_err(|e| anyhow::anyhow!("not an image: {:?}", e))?;
    img.set_src(&item.image_ref);
    img.set_alt(&item.label);
    img.set_draggable(false);
    _ = img.set_attribute("loading", if item.eager_image() { "eager" } else { "lazy" });
    _ = img.style().set_property("width", "100%");
    _ = img.style().set_property("height", "100%");
    _ = img.style().set_property("border-radius", "50%");
    _ = img.style().set_property("pointer-events", "none");
    node.append_child(&img)
        .map_err(|e| anyhow::anyhow!("append image: {:?}", e))?;

    Ok(node)
}
