//! Core types and abstractions for the Lexis semantic graph engine.
//!
//! This crate provides the identifiers, relation vocabulary, error type and
//! configuration shared by the graph store, the query engine and the CLI.

pub mod config;
pub mod error;
pub mod id;
pub mod types;

pub use config::LexisConfig;
pub use error::{LexisError, Result};
pub use id::{LemmaName, SynsetName};
pub use types::{Depth, PartOfSpeech, RelationKind};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::config::LexisConfig;
    pub use crate::error::{LexisError, Result};
    pub use crate::id::{LemmaName, SynsetName};
    pub use crate::types::{Depth, PartOfSpeech, RelationKind};
}
