pub mod captain;
pub mod revocation;
pub mod user;

pub use captain::PostgresCaptainRepository;
pub use revocation::PostgresRevocationRepository;
pub use user::PostgresUserRepository;
