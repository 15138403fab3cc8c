pub mod error;
pub mod money;
pub mod password;
pub mod traits;

pub use error::{AppError, Result};
pub use traits::Repository;
