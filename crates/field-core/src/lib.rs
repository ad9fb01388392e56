pub mod camera;
pub mod clock;
pub mod connections;
pub mod constants;
pub mod controller;
pub mod cursor;
pub mod field;
pub mod node;
pub mod page;
pub mod pointer;
pub mod tier;

pub use camera::*;
pub use clock::*;
pub use connections::*;
pub use constants::*;
pub use controller::*;
pub use cursor::*;
pub use field::*;
pub use node::*;
pub use pointer::*;
pub use tier::*;

// Shaders bundled as string constants
pub static FIELD_WGSL: &str = include_str!("../../../shaders/field.wgsl");
