use thiserror::Error;

/// Error types for configuration, CLI dispatch and batch runs
///
/// The validators themselves never fail; these cover the surrounding tooling.
#[derive(Error, Debug)]
pub enum DataValidError {
    // Configuration errors
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    #[error("Cannot read configuration file {path}: {source}")]
    InvalidConfig {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid length bounds: min {min} is greater than max {max}")]
    InvalidBounds { min: usize, max: usize },

    // Dispatch errors
    #[error("Unknown check: {name}")]
    UnknownCheck { name: String },

    #[error("Check '{check}' requires argument: {argument}")]
    MissingArgument { check: String, argument: String },

    // Batch errors
    #[error("Batch file error in {path}: {message}")]
    BatchFile { path: String, message: String },

    // Wrapped errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),
}

impl DataValidError {
    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Configuration { message: message.into() }
    }

    /// Create a batch file error
    pub fn batch(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::BatchFile {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Get error category for logging
    pub fn category(&self) -> &'static str {
        match self {
            Self::Configuration { .. } | Self::InvalidConfig { .. } | Self::InvalidBounds { .. } => {
                "configuration"
            }
            Self::UnknownCheck { .. } | Self::MissingArgument { .. } => "dispatch",
            Self::BatchFile { .. } => "batch",
            Self::Io(_) => "io",
            Self::TomlParse(_) => "serialization",
        }
    }
}

/// Result type alias for datavalid
pub type DataValidResult<T> = std::result::Result<T, DataValidError>;
