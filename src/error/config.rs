use thiserror::Error;

/// Configuration problems detected while loading the environment.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// A required environment variable is not set.
    #[error("Missing environment variable '{0}'")]
    MissingEnvVar(String),

    /// An environment variable is set but cannot be parsed.
    #[error("Invalid value '{value}' for environment variable '{name}'")]
    InvalidEnvVar {
        /// The variable name
        name: String,
        /// The unparseable value
        value: String,
    },
}
