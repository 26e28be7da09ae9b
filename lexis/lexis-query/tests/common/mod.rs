//! Shared fixtures for query integration tests.
#![allow(dead_code)]

use lexis_core::{LexisConfig, RelationKind, SynsetName};
use lexis_graph::{CorpusSnapshot, GraphBuilder, GraphStore, SynsetId, SynsetRecord};
use lexis_query::{LexisEngine, SemanticGraph};
use std::path::PathBuf;
use std::sync::Arc;

const MINI_WORDNET: &str = include_str!("../../../lexis-graph/tests/fixtures/mini_wordnet.json");

/// Path of the JSON corpus the fixtures are built from.
pub fn fixture_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../lexis-graph/tests/fixtures/mini_wordnet.json")
}

/// A small noun/verb/adjective taxonomy shaped like the top of WordNet.
///
/// Nouns have the single root `entity.n.01` and depth 14 (`puppy.n.01`);
/// verbs and adjectives have several roots.
pub fn fixture_store() -> Arc<GraphStore> {
    let store = CorpusSnapshot::from_json_str(MINI_WORDNET)
        .and_then(|snapshot| snapshot.into_store(true))
        .expect("fixture corpus should build");
    Arc::new(store)
}

pub fn fixture_graph() -> SemanticGraph {
    SemanticGraph::new(fixture_store())
}

pub fn fixture_engine() -> LexisEngine {
    LexisEngine::new(fixture_store(), &LexisConfig::default())
}

/// `top <- left, right <- bottom, other`: two equally deep subsumers.
pub fn diamond() -> SemanticGraph {
    let name = |raw: &str| -> SynsetName { raw.parse().unwrap() };
    let mut builder = GraphBuilder::new();
    builder
        .add_synset(SynsetRecord::new(name("top.n.01"), ""))
        .add_synset(
            SynsetRecord::new(name("left.n.01"), "").with_relation(RelationKind::Hypernym, name("top.n.01")),
        )
        .add_synset(
            SynsetRecord::new(name("right.n.01"), "").with_relation(RelationKind::Hypernym, name("top.n.01")),
        );
    for child in ["bottom.n.01", "other.n.01"] {
        builder.add_synset(
            SynsetRecord::new(name(child), "")
                .with_relation(RelationKind::Hypernym, name("right.n.01"))
                .with_relation(RelationKind::Hypernym, name("left.n.01")),
        );
    }
    SemanticGraph::new(Arc::new(builder.build().expect("diamond should build")))
}

pub fn id(graph: &SemanticGraph, name: &str) -> SynsetId {
    graph.store().synset_by_name(name).expect("fixture synset").id()
}

pub fn names(graph: &SemanticGraph, ids: impl IntoIterator<Item = SynsetId>) -> Vec<String> {
    ids.into_iter().map(|id| graph.label(id)).collect()
}

pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}
