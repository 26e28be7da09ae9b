//! Immutable synset/lemma graph for Lexis.
//!
//! The store owns every node and edge of a corpus. It is assembled once by
//! [`GraphBuilder`] (directly or from a [`CorpusSnapshot`]) and is read-only
//! afterwards, so query engines can share it freely across threads.

pub mod builder;
pub mod lookup;
pub mod node;
pub mod snapshot;
pub mod store;

pub use builder::{BuildStats, GraphBuilder};
pub use lookup::LookupIndex;
pub use node::{GraphNode, Lemma, LemmaId, RelationTable, Synset, SynsetId};
pub use snapshot::{CorpusSnapshot, LemmaRecord, SynsetRecord};
pub use store::GraphStore;
