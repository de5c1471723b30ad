pub mod config;
pub mod error;
pub mod render;

// Re-export key types for easier use
pub use config::{DemoConfig, Variant};
pub use error::{ConfigError, ConfigResult};
