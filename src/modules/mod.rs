pub mod credits;
pub mod customers;
pub mod health;
