pub mod customer_controller;

pub use customer_controller::{configure, CustomerIdQuery};
