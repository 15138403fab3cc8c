//! Store backends that are not tied to a single module

pub mod memory;

pub use memory::InMemoryStore;
