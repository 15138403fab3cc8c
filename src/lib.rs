//! Credit Request System Library
//!
//! Customers, their addresses and the credit requests they file, behind a
//! thin actix-web API.

pub mod app;
pub mod config;
pub mod core;
pub mod middleware;
pub mod modules;
pub mod store;

// Re-export commonly used types
pub use app::AppServices;
pub use modules::credits;
pub use modules::customers;
