pub mod auth;
pub mod pokemon;
pub mod users;
