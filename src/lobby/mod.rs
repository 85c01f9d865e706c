mod lobby;
mod matchmaker;

pub use lobby::*;
pub use matchmaker::*;
