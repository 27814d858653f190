mod color;
mod notation;

pub use color::*;
pub use notation::*;
