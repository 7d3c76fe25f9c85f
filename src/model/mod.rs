pub mod config;
pub mod range;
pub mod store;
pub mod ticket;
pub mod view;

pub use config::*;
pub use range::*;
pub use store::*;
pub use ticket::*;
pub use view::*;
