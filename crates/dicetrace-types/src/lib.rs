pub mod context;
pub mod fragment;
pub mod report;
pub mod repr;

pub use context::*;
pub use fragment::*;
pub use report::*;
pub use repr::*;
