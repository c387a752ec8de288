pub mod collection;
pub mod error;
pub mod pack;
pub mod transform;

pub use error::{Error, Result};
pub use transform::render;
