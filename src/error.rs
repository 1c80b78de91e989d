/// Result type alias for the library
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for document generation
#[derive(Debug)]
pub enum Error {
    /// No schema converter matched the given value. Fatal under
    /// `StrictMode::FailOnError`, degraded to a placeholder otherwise.
    MissingConverter { name: String },
    /// No parameter converter matched the given path-argument marker.
    MissingParameterConverter { name: String },
    /// No default-value converter matched the given default.
    MissingDefaultConverter { name: String },
    /// A conversion was attempted without an active documentation context.
    MissingContext,
    /// A documentation context was entered while another one was still active.
    ContextOccupied,
    /// Unrecognized configuration input, e.g. an unknown strict mode name.
    InvalidConfiguration(String),
    /// A documentation record failed validation on context entry.
    InvalidDocumentation(String),
    /// `example` and `examples` were both set on the same schema.
    ConflictingExamples { name: String },
    SerializationError(String),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Error::MissingConverter { name } => {
                write!(f, "no schema converter registered for `{}`", name)
            }
            Error::MissingParameterConverter { name } => {
                write!(f, "no parameter converter registered for `{}`", name)
            }
            Error::MissingDefaultConverter { name } => {
                write!(f, "no default converter registered for `{}`", name)
            }
            Error::MissingContext => {
                write!(f, "conversion requires an active documentation context")
            }
            Error::ContextOccupied => {
                write!(f, "a documentation context is already active")
            }
            Error::InvalidConfiguration(msg) => write!(f, "invalid configuration: {}", msg),
            Error::InvalidDocumentation(msg) => {
                write!(f, "invalid documentation record: {}", msg)
            }
            Error::ConflictingExamples { name } => {
                write!(
                    f,
                    "`example` and `examples` are mutually exclusive on schema `{}`",
                    name
                )
            }
            Error::SerializationError(msg) => write!(f, "serialization error: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::SerializationError(format!("JSON serialization error: {}", err))
    }
}

impl From<serde_yaml::Error> for Error {
    fn from(err: serde_yaml::Error) -> Self {
        Error::SerializationError(format!("YAML serialization error: {}", err))
    }
}
