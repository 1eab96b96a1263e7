pub mod consts;
pub mod errors;
pub mod interface;
pub mod sessions;
pub mod sockets;
