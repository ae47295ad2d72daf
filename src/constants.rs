/// DOM wiring and frame pacing for the browser host.
///
/// Element ids are looked up first; anything missing is created under the
/// viewport so the world can boot on a bare page.
// Elements
pub const VIEWPORT_ID: &str = "bubble-viewport";
pub const CAMERA_LAYER_ID: &str = "bubble-camera";
pub const LOGO_ID: &str = "bubble-logo";

// Class names applied to generated nodes
pub const ITEM_CLASS: &str = "bubble-item";
pub const ITEM_IMAGE_CLASS: &str = "bubble-image";
pub const RING_CLASS: &str = "bubble-ring";

// Emitted on the viewport when a bubble is clicked; detail is the item id
pub const SELECT_EVENT: &str = "bubble-select";

// Cursors
pub const CURSOR_IDLE: &str = "grab";
pub const CURSOR_DRAGGING: &str = "grabbing";

// Frame pacing
// Long gaps (background tab, debugger pause) are treated as one short frame.
pub const MAX_FRAME_DT_SEC: f32 = 0.1;
