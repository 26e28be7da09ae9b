//! Error types for the Lexis system.

/// Result type alias for Lexis operations.
pub type Result<T> = std::result::Result<T, LexisError>;

/// Main error type for the Lexis system.
///
/// "No path" between two nodes is not an error: distance and similarity
/// queries return `Option` and use `None` for it.
#[derive(Debug, thiserror::Error)]
pub enum LexisError {
    /// An identifier did not resolve in the lookup index
    #[error("Not found: {resource} with id {id}")]
    NotFound { resource: String, id: String },

    /// A metric that only compares within one part of speech got two
    #[error("Incompatible part of speech: {left} and {right} must share a part of speech")]
    IncompatiblePartOfSpeech { left: String, right: String },

    /// Graph construction found dangling, duplicated or inconsistent data
    #[error("Construction integrity error: {0}")]
    ConstructionIntegrity(String),

    /// An identifier string did not match the expected format
    #[error("Invalid identifier: {0}")]
    InvalidIdentifier(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl LexisError {
    /// Create a new not found error
    pub fn not_found(resource: impl Into<String>, id: impl Into<String>) -> Self {
        Self::NotFound {
            resource: resource.into(),
            id: id.into(),
        }
    }

    /// Create a new part-of-speech mismatch error
    pub fn incompatible_pos(left: impl Into<String>, right: impl Into<String>) -> Self {
        Self::IncompatiblePartOfSpeech {
            left: left.into(),
            right: right.into(),
        }
    }

    /// Create a new construction integrity error
    pub fn integrity(msg: impl Into<String>) -> Self {
        Self::ConstructionIntegrity(msg.into())
    }

    /// Create a new invalid identifier error
    pub fn invalid_identifier(msg: impl Into<String>) -> Self {
        Self::InvalidIdentifier(msg.into())
    }

    /// Create a new config error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Check if this is a not found error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is a part-of-speech mismatch
    pub fn is_incompatible_pos(&self) -> bool {
        matches!(self, Self::IncompatiblePartOfSpeech { .. })
    }

    /// Check if this is a construction integrity error
    pub fn is_integrity(&self) -> bool {
        matches!(self, Self::ConstructionIntegrity(_))
    }
}
