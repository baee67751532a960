pub mod config;
pub mod email;
pub mod error;
pub mod observability;
pub mod routes;
pub mod server;

pub use routes::AppState;
