pub mod config;
pub mod logging;

pub use config::{ConfigError, GeneratorConfig};
pub use logging::{LoggingError, init_logging};
