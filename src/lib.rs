#![deny(clippy::dbg_macro)]
#![deny(clippy::all)]

pub mod arithmetic;
pub mod curve;
mod error;

pub use bigint::U256;
pub use curve::Curve;
pub use error::PointError;
