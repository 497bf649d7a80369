mod colors;
mod domain_types;

pub use colors::*;
pub use domain_types::*;
