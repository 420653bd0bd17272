/// Generic list interface
pub mod list;
/// Player and address interface
pub mod player;
/// Season interface
pub mod season;
/// Team membership interface
pub mod team;
/// User and login interface
pub mod user;
