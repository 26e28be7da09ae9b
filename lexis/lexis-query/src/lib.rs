//! Query engine for the Lexis semantic graph.
//!
//! [`SemanticGraph`] answers structural queries over an immutable
//! [`lexis_graph::GraphStore`]: relation closures, taxonomy depths and
//! paths, common and lowest common hypernyms, shortest-path distance and
//! the path, Leacock-Chodorow and Wu-Palmer similarity scores.
//! [`LexisEngine`] wraps it with name-based lookups and serializable views.
//!
//! # Example
//!
//! ```no_run
//! use lexis_core::LexisConfig;
//! use lexis_query::LexisEngine;
//!
//! # async fn example() -> lexis_core::Result<()> {
//! let config = LexisConfig::load_or_default().await?;
//! let engine = LexisEngine::from_config(&config).await?;
//! let score = engine.path_similarity("dog.n.01", "cat.n.01", None)?;
//! println!("path similarity: {:?}", score);
//! # Ok(())
//! # }
//! ```

pub mod ancestors;
pub mod cache;
pub mod closure;
pub mod engine;
pub mod service;
pub mod similarity;
pub mod taxonomy;

pub use ancestors::{LcsOptions, Subsumer, VIRTUAL_ROOT_LABEL};
pub use cache::{CacheStats, DepthCache};
pub use closure::Closure;
pub use engine::SemanticGraph;
pub use service::{
    EngineStats, LemmaView, LexisEngine, SimilarityReport, SynsetView, TaxonomySummary, DEFAULT_OTHER_SYNSET,
};
pub use taxonomy::TaxonomyStats;
