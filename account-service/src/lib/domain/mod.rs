pub mod captain;
pub mod principal;
pub mod session;
pub mod user;
