mod player;
mod registry;

pub use player::*;
pub use registry::*;
