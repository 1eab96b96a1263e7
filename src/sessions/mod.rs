pub mod handlers;
pub mod message_types;
pub mod services;
