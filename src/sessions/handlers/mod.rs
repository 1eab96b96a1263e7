pub mod player_actions;
pub mod rounds;
pub mod session;
pub mod ws;
