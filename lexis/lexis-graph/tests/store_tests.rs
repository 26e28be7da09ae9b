//! Integration tests for snapshot loading and the graph store.

use lexis_core::{PartOfSpeech, RelationKind};
use lexis_graph::{CorpusSnapshot, GraphNode, GraphStore};
use std::path::PathBuf;

fn fixture_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/mini_wordnet.json")
}

async fn load_fixture() -> GraphStore {
    GraphStore::load_snapshot(&fixture_path(), true)
        .await
        .expect("fixture should build")
}

#[tokio::test]
async fn test_fixture_loads() {
    let store = load_fixture().await;
    assert_eq!(store.synset_count(), 37);
    assert_eq!(store.all_synsets(Some(PartOfSpeech::Noun)).count(), 26);
    assert_eq!(store.all_synsets(Some(PartOfSpeech::Verb)).count(), 7);
    assert_eq!(store.stats().synsets, 37);
}

#[tokio::test]
async fn test_mirrored_hyponyms() {
    let store = load_fixture().await;
    let carnivore = store.synset_by_name("carnivore.n.01").unwrap();
    let children: Vec<String> = carnivore
        .related(RelationKind::Hyponym)
        .iter()
        .map(|&id| id.label(&store))
        .collect();
    assert_eq!(children, ["canine.n.02", "feline.n.01"]);

    let physicist = store.synset_by_name("physicist.n.01").unwrap();
    let instances: Vec<String> = physicist
        .related(RelationKind::InstanceHyponym)
        .iter()
        .map(|&id| id.label(&store))
        .collect();
    assert_eq!(instances, ["einstein.n.01"]);

    let canis = store.synset_by_name("canis.n.01").unwrap();
    assert_eq!(canis.related(RelationKind::MemberMeronym).len(), 1);

    let physics = store.synset_by_name("physics.n.01").unwrap();
    assert_eq!(physics.related(RelationKind::InTopicDomain).len(), 1);
}

#[tokio::test]
async fn test_entailment_stays_one_way() {
    let store = load_fixture().await;
    let sleep = store.synset_by_name("sleep.v.01").unwrap();
    for kind in RelationKind::ALL {
        assert!(sleep.related(kind).is_empty(), "{kind}");
    }
}

#[tokio::test]
async fn test_lemma_details_survive() {
    let store = load_fixture().await;
    let dog = store.synset_by_name("dog.n.01").unwrap();
    let forms: Vec<&str> = dog
        .lemmas()
        .iter()
        .map(|&id| store.lemma(id).form())
        .collect();
    assert_eq!(forms, ["dog", "domestic_dog", "Canis_familiaris"]);

    let lemma = store.lemma_by_name("dog.n.01.dog").unwrap();
    assert_eq!(lemma.count(), 42);
    assert_eq!(lemma.key(), "dog%1:05:00::");
    assert_eq!(lemma.lang(), "eng");
    assert_eq!(store.owner(lemma.id()).name().to_string(), "dog.n.01");

    let travel = store.lemma_by_name("travel.v.01.travel").unwrap();
    assert_eq!(travel.frame_ids(), &[2]);
    assert_eq!(travel.frame_strings(), &["Somebody ----s".to_string()]);
}

#[tokio::test]
async fn test_lemma_relations_are_mirrored() {
    let store = load_fixture().await;
    let good = store.lemma_by_name("good.a.01.good").unwrap();
    let bad = store.lemma_by_name("bad.a.01.bad").unwrap();
    assert_eq!(bad.related(RelationKind::Antonym), &[good.id()]);

    // Pertainyms have no inverse
    let canine_noun = store.lemma_by_name("canine.n.02.canine").unwrap();
    assert!(canine_noun.relations().iter().next().is_none());
}

#[tokio::test]
async fn test_unknown_names_are_not_found() {
    let store = load_fixture().await;
    for name in ["wolf.n.01", "dog", "dog.x.01", ""] {
        assert!(store.synset_by_name(name).unwrap_err().is_not_found(), "{name:?}");
    }
    assert!(store.lemma_by_name("dog.n.01.hound").unwrap_err().is_not_found());
}

#[tokio::test]
async fn test_snapshot_export_reloads_identically() {
    let store = load_fixture().await;
    let exported = store.to_snapshot();

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("export.json");
    exported.save(&path).await.unwrap();

    // Exported snapshots carry mirror edges, so they build without completion
    let reloaded = CorpusSnapshot::load(&path)
        .await
        .unwrap()
        .into_store(false)
        .unwrap();

    assert_eq!(reloaded.synset_count(), store.synset_count());
    assert_eq!(reloaded.lemma_count(), store.lemma_count());
    assert_eq!(reloaded.stats().synset_edges, store.stats().synset_edges);
    assert_eq!(reloaded.stats().mirrored_edges, 0);
    assert_eq!(reloaded.to_snapshot(), exported);
}

#[tokio::test]
async fn test_missing_snapshot_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = GraphStore::load_snapshot(&dir.path().join("absent.json"), true)
        .await
        .unwrap_err();
    assert!(matches!(err, lexis_core::LexisError::Io(_)));
}

#[test]
fn test_non_canonical_synset_name_is_rejected() {
    let err = CorpusSnapshot::from_json_str(r#"{ "synsets": [ { "name": "dog.n.1" } ] }"#).unwrap_err();
    assert!(matches!(err, lexis_core::LexisError::Serialization(_)));
    assert!(err.to_string().contains("dog.n.1"));

    let snapshot = CorpusSnapshot::from_json_str(r#"{ "synsets": [ { "name": "dog.n.01" } ] }"#).unwrap();
    let store = snapshot.into_store(true).unwrap();
    assert_eq!(store.synset_by_name("dog.n.01").unwrap().name().to_string(), "dog.n.01");
    assert!(store.synset_by_name("dog.n.1").unwrap_err().is_not_found());
}
