pub mod layer;
pub mod paint;
pub mod primitive;

pub use layer::Layer;
pub use paint::{Color, LineStyle, Paint};
pub use primitive::{Primitive, Shape, TextLabel};
