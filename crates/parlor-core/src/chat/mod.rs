pub mod conversation;
pub mod manager;
pub mod session;
