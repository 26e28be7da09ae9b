//! Unit tests for lexis-core public API

use lexis_core::config::{LexisConfig, CONFIG_VERSION};
use lexis_core::prelude::*;
use std::path::PathBuf;

// ============================================================================
// Error Tests
// ============================================================================

#[test]
fn test_not_found_is_distinct() {
    let err = LexisError::not_found("lemma", "dog.n.01.hound");
    assert!(err.is_not_found());
    assert!(!err.is_integrity());
    assert!(!err.is_incompatible_pos());
}

#[test]
fn test_serde_error_converts() {
    let parse: std::result::Result<serde_json::Value, _> = serde_json::from_str("{");
    let err: LexisError = parse.unwrap_err().into();
    assert!(matches!(err, LexisError::Serialization(_)));
}

// ============================================================================
// Identifier Tests
// ============================================================================

#[test]
fn test_identifier_pos_matches_letter() {
    let cases = [
        ("dog.n.01", PartOfSpeech::Noun),
        ("run.v.01", PartOfSpeech::Verb),
        ("good.a.01", PartOfSpeech::Adjective),
        ("beneficial.s.01", PartOfSpeech::AdjectiveSatellite),
        ("well.r.01", PartOfSpeech::Adverb),
    ];
    for (raw, pos) in cases {
        let name: SynsetName = raw.parse().unwrap();
        assert_eq!(name.pos(), pos);
        assert_eq!(name.to_string(), raw);
    }
}

#[test]
fn test_lemma_identifier_parts() {
    let name: LemmaName = "run.v.01.run".parse().unwrap();
    assert_eq!(name.synset().pos(), PartOfSpeech::Verb);
    assert_eq!(name.form(), "run");
}

// ============================================================================
// Config Tests
// ============================================================================

#[tokio::test]
async fn test_config_save_and_load() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("config.toml");

    let mut config = LexisConfig::default();
    config.corpus.path = Some(PathBuf::from("corpus.json"));
    config.corpus.complete_inverse_edges = false;
    config.save_to_path(&path).await.unwrap();

    assert!(path.exists());
    assert!(!path.with_extension("toml.tmp").exists());

    let loaded = LexisConfig::load_from_path(&path).await.unwrap();
    assert_eq!(loaded.general.version, CONFIG_VERSION);
    assert_eq!(loaded.corpus.path, Some(PathBuf::from("corpus.json")));
    assert!(!loaded.corpus.complete_inverse_edges);
}

#[tokio::test]
async fn test_config_load_rejects_invalid_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    tokio::fs::write(&path, "[general]\nlog_level = \"chatty\"\n")
        .await
        .unwrap();

    let result = LexisConfig::load_from_path(&path).await;
    assert!(matches!(result, Err(LexisError::Config(_))));
}

#[tokio::test]
async fn test_config_load_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let result = LexisConfig::load_from_path(&dir.path().join("absent.toml")).await;
    assert!(result.is_err());
}

mod property_tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn test_synset_name_roundtrip_property(
            lemma in "[a-z][a-z_'.]{0,12}",
            pos_index in 0usize..5,
            sense in 1u32..200,
        ) {
            let pos = PartOfSpeech::ALL[pos_index];
            let name = SynsetName::new(lemma.clone(), pos, sense);
            let parsed = SynsetName::parse(&name.to_string()).unwrap();
            prop_assert_eq!(parsed.lemma(), lemma.as_str());
            prop_assert_eq!(parsed.pos(), pos);
            prop_assert_eq!(parsed.sense(), sense);
        }

        #[test]
        fn test_lemma_name_roundtrip_property(
            lemma in "[a-z][a-z_]{0,10}",
            form in "[a-z][a-z_']{0,10}",
            sense in 1u32..60,
        ) {
            let synset = SynsetName::new(lemma, PartOfSpeech::Noun, sense);
            let name = LemmaName::new(synset.clone(), form.clone());
            let parsed = LemmaName::parse(&name.to_string()).unwrap();
            prop_assert_eq!(parsed.synset(), &synset);
            prop_assert_eq!(parsed.form(), form.as_str());
        }
    }
}
