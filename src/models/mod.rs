pub mod assessment;
pub mod attributes;

pub use assessment::*;
pub use attributes::*;
