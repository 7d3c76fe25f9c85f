pub mod ticket_ops;
pub mod view_ops;
