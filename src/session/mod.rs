mod mailbox;
mod seat;
mod session;
mod table;
mod turn;
mod verdict;

pub use mailbox::*;
pub use seat::*;
pub use session::*;
pub use table::*;
pub use turn::*;
pub use verdict::*;
