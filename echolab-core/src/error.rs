use thiserror::Error;

/// The main result type for echolab-core configuration loading.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Enum representing possible errors while building a [`crate::DemoConfig`].
///
/// Both variants are fatal at startup; the server never starts with a
/// half-valid configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("PORT value {value:?} is not a valid TCP port: {source}")]
    InvalidPort {
        value: String,
        #[source]
        source: std::num::ParseIntError,
    },

    #[error("DEMO_VARIANT value {0:?} is not one of: presence, reveal, status, landing")]
    UnknownVariant(String),
}
