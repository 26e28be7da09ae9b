//! Command tests against the fixture corpus

use lexis_cli::{commands, Metric, OutputFormat};
use lexis_core::{LexisConfig, PartOfSpeech, RelationKind};
use lexis_query::{LcsOptions, LexisEngine};
use std::path::PathBuf;
use tempfile::TempDir;

fn fixture_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../lexis-graph/tests/fixtures/mini_wordnet.json")
}

/// Write a config file pointing at the fixture corpus
async fn write_config(dir: &TempDir) -> PathBuf {
    let path = dir.path().join("config.toml");
    commands::config_init(Some(&path), Some(fixture_path()), false)
        .await
        .unwrap();
    path
}

async fn fixture_engine(dir: &TempDir) -> LexisEngine {
    let path = write_config(dir).await;
    let config = commands::load_config(Some(&path), None).await.unwrap();
    commands::load_engine(&config).await.unwrap()
}

// ============================================================================
// Config Command Tests
// ============================================================================

#[tokio::test]
async fn test_config_init_writes_corpus_path() {
    let temp = TempDir::new().unwrap();
    let path = write_config(&temp).await;

    let config = LexisConfig::load_from_path(&path).await.unwrap();
    assert_eq!(config.corpus.path, Some(fixture_path()));
    assert!(commands::config_show(&config, OutputFormat::Plain).is_ok());
}

#[tokio::test]
async fn test_config_init_refuses_overwrite() {
    let temp = TempDir::new().unwrap();
    let path = write_config(&temp).await;

    let err = commands::config_init(Some(&path), None, false).await.unwrap_err();
    assert!(err.to_string().contains("--force"));

    commands::config_init(Some(&path), None, true).await.unwrap();
    let config = LexisConfig::load_from_path(&path).await.unwrap();
    assert_eq!(config.corpus.path, None);
}

#[tokio::test]
async fn test_corpus_flag_overrides_config() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("config.toml");
    commands::config_init(Some(&path), None, false).await.unwrap();

    let config = commands::load_config(Some(&path), Some(fixture_path()))
        .await
        .unwrap();
    assert_eq!(config.corpus.path, Some(fixture_path()));
}

#[tokio::test]
async fn test_load_engine_without_corpus_fails() {
    let mut config = LexisConfig::default();
    config.corpus.path = None;
    let err = commands::load_engine(&config).await.unwrap_err();
    assert!(format!("{:#}", err).contains("corpus"));
}

#[tokio::test]
async fn test_missing_config_file_fails() {
    let temp = TempDir::new().unwrap();
    let missing = temp.path().join("nope.toml");
    assert!(commands::load_config(Some(&missing), None).await.is_err());
}

// ============================================================================
// Query Command Tests
// ============================================================================

#[tokio::test]
async fn test_lookup_commands() {
    let temp = TempDir::new().unwrap();
    let engine = fixture_engine(&temp).await;

    for format in [OutputFormat::Human, OutputFormat::Json] {
        commands::synset_show(&engine, "dog.n.01", format).unwrap();
        commands::lemma_show(&engine, "dog.n.01.dog", format).unwrap();
        commands::list_synsets(&engine, Some(PartOfSpeech::Verb), Some(3), format).unwrap();
    }

    assert!(commands::synset_show(&engine, "unicorn.n.01", OutputFormat::Plain).is_err());
    assert!(commands::lemma_show(&engine, "dog.n.01.wolf", OutputFormat::Plain).is_err());
}

#[tokio::test]
async fn test_traversal_commands() {
    let temp = TempDir::new().unwrap();
    let engine = fixture_engine(&temp).await;
    let format = OutputFormat::Plain;

    commands::closure(&engine, "dog.n.01", RelationKind::Hypernym, Some(2), false, format).unwrap();
    commands::closure(&engine, "good.a.01.good", RelationKind::Antonym, None, true, format).unwrap();
    commands::paths(&engine, "einstein.n.01", format).unwrap();
    commands::ancestors(&engine, "dog.n.01", OutputFormat::Json).unwrap();
    commands::common(&engine, "dog.n.01", "cat.n.01", format).unwrap();
    commands::lowest_common(&engine, "run.v.01", "eat.v.01", LcsOptions::default(), format).unwrap();
}

#[tokio::test]
async fn test_similarity_commands() {
    let temp = TempDir::new().unwrap();
    let engine = fixture_engine(&temp).await;

    commands::distance(&engine, "dog.n.01", "cat.n.01", None, OutputFormat::Json).unwrap();
    commands::distance(&engine, "run.v.01", "eat.v.01", Some(true), OutputFormat::Plain).unwrap();

    for metric in [Metric::Path, Metric::Wup, Metric::All] {
        commands::similarity(&engine, "dog.n.01", "run.v.01", metric, None, OutputFormat::Plain).unwrap();
    }
    commands::similarity(&engine, "dog.n.01", "cat.n.01", Metric::Lch, None, OutputFormat::Json).unwrap();

    // Leacock-Chodorow is undefined across parts of speech
    let err = commands::similarity(&engine, "dog.n.01", "run.v.01", Metric::Lch, None, OutputFormat::Plain)
        .unwrap_err();
    assert!(err.to_string().contains("run.v.01"));
}

#[tokio::test]
async fn test_stats_command() {
    let temp = TempDir::new().unwrap();
    let engine = fixture_engine(&temp).await;

    commands::stats(&engine, OutputFormat::Plain).unwrap();
    assert_eq!(engine.stats().build.synsets, 37);
}
