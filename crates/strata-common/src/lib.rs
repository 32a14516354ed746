pub mod errors;
pub mod types;

pub use errors::{ConfigError, StrataError};
pub use types::{Rgb, Vec3};

pub type Result<T> = std::result::Result<T, StrataError>;
