pub mod pointer;
pub mod resize;

pub use pointer::{wire_input_handlers, ElementCapture, InputWiring};
pub use resize::wire_viewport_resize;
