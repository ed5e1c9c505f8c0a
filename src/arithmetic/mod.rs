mod field;
mod modular;
mod point;

pub use field::FieldElement;
pub use modular::Modular;
pub use point::{Coordinate, Point};
