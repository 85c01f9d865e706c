mod arena;
mod error;
mod reply;
mod settings;
mod status;

pub use arena::*;
pub use error::*;
pub use reply::*;
pub use settings::*;
pub use status::*;
