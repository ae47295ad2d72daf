pub mod camera;
pub mod constants;
pub mod error;
pub mod gesture;
pub mod idle;
pub mod layout;
pub mod ring;
pub mod spring;
pub mod world;

pub use camera::*;
pub use constants::*;
pub use error::*;
pub use gesture::*;
pub use idle::*;
pub use layout::*;
pub use ring::*;
pub use spring::*;
pub use world::*;
