pub mod errors;

pub use errors::{ConfigError, PromptkitError};

pub type Result<T> = std::result::Result<T, PromptkitError>;
