mod bounding_box;
pub(crate) mod point;
mod primitive;
mod shape;
pub mod stroke;

pub use bounding_box::BoundingBox;
pub use point::Point;
pub use primitive::Primitive;
pub use shape::Shape;
pub use stroke::Stroke;
