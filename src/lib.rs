//! 2D polygon primitives.

#[macro_use]
extern crate failure_derive;
#[macro_use]
extern crate log;

mod point;
mod shape;
mod triangle;

pub use self::point::*;
pub use self::shape::*;
pub use self::triangle::*;
