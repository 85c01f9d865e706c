mod cities;
mod gazetteer;

pub use cities::*;
pub use gazetteer::*;
