//! CLI command implementations.
//!
//! Query commands run against a [`LexisEngine`] built once per invocation;
//! config commands work on the configuration file alone.

use crate::output::{self, format_distance, format_score, OutputFormat, TableBuilder};
use anyhow::{bail, Context, Result};
use lexis_core::{Depth, LexisConfig, PartOfSpeech, RelationKind};
use lexis_query::{LcsOptions, LexisEngine};
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::debug;

/// Which similarity score(s) to compute
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Metric {
    Path,
    Lch,
    Wup,
    All,
}

// ============================================================================
// Setup
// ============================================================================

/// Load configuration from `config_path` (or the default location) and
/// apply a `--corpus` override
pub async fn load_config(config_path: Option<&Path>, corpus: Option<PathBuf>) -> Result<LexisConfig> {
    let mut config = match config_path {
        Some(path) => LexisConfig::load_from_path(path)
            .await
            .with_context(|| format!("Failed to load configuration from {}", path.display()))?,
        None => LexisConfig::load_or_default()
            .await
            .context("Failed to load configuration")?,
    };

    if let Some(corpus) = corpus {
        config.corpus.path = Some(corpus);
    }
    Ok(config)
}

/// Load the configured corpus snapshot into a query engine
pub async fn load_engine(config: &LexisConfig) -> Result<LexisEngine> {
    let spinner = output::spinner("Loading corpus snapshot...");
    let started = Instant::now();
    let engine = LexisEngine::from_config(config).await;
    spinner.finish_and_clear();
    debug!("Corpus load finished in {:?}", started.elapsed());
    engine.context("Failed to load corpus")
}

// ============================================================================
// Lookup Commands
// ============================================================================

/// Show one synset
pub fn synset_show(engine: &LexisEngine, name: &str, format: OutputFormat) -> Result<()> {
    let view = engine.synset(name)?;
    if format.is_json() {
        return output::json(&view);
    }

    output::header(&view.name);
    output::kv("Part of speech", view.pos.as_str());
    output::kv("Definition", &view.definition);
    output::kv("Lexname", &view.lexname);
    output::kv("Offset", view.offset);
    output::kv("Depth", format!("min {} / max {}", view.min_depth, view.max_depth));
    output::kv("Lemmas", view.lemmas.join(", "));
    output::kv("Root hypernyms", view.root_hypernyms.join(", "));
    for example in &view.examples {
        output::kv("Example", example);
    }

    if !view.relations.is_empty() {
        let mut table = TableBuilder::new().header(vec!["Relation", "Targets"]);
        for (kind, targets) in &view.relations {
            table = table.row(vec![kind.to_string(), targets.join("\n")]);
        }
        println!();
        table.print();
    }
    Ok(())
}

/// Show one lemma
pub fn lemma_show(engine: &LexisEngine, id: &str, format: OutputFormat) -> Result<()> {
    let view = engine.lemma(id)?;
    if format.is_json() {
        return output::json(&view);
    }

    output::header(&view.id);
    output::kv("Form", &view.name);
    output::kv("Synset", &view.synset);
    output::kv("Count", view.count);
    output::kv("Language", &view.lang);
    if !view.key.is_empty() {
        output::kv("Sense key", &view.key);
    }
    if let Some(marker) = &view.syntactic_marker {
        output::kv("Syntactic marker", marker);
    }
    for (frame_id, frame) in view.frame_ids.iter().zip(&view.frame_strings) {
        output::kv(format!("Frame {}", frame_id), frame);
    }

    if !view.relations.is_empty() {
        let mut table = TableBuilder::new().header(vec!["Relation", "Targets"]);
        for (kind, targets) in &view.relations {
            table = table.row(vec![kind.to_string(), targets.join("\n")]);
        }
        println!();
        table.print();
    }
    Ok(())
}

/// List synsets in corpus order
pub fn list_synsets(
    engine: &LexisEngine,
    pos: Option<PartOfSpeech>,
    limit: Option<usize>,
    format: OutputFormat,
) -> Result<()> {
    let mut names = engine.all_synsets(pos);
    if let Some(limit) = limit {
        names.truncate(limit);
    }
    if format.is_json() {
        return output::json(&names);
    }

    let scope = pos.map_or("all parts of speech", |p| p.as_str());
    output::header(format!("Synsets ({}, {} shown)", scope, names.len()));
    output::names(&names);
    Ok(())
}

// ============================================================================
// Traversal Commands
// ============================================================================

/// Nodes reachable along one relation kind
pub fn closure(
    engine: &LexisEngine,
    start: &str,
    kind: RelationKind,
    depth: Option<usize>,
    lemma: bool,
    format: OutputFormat,
) -> Result<()> {
    let depth = Depth::from(depth);
    let reached = if lemma {
        engine.lemma_closure(start, kind, depth)?
    } else {
        engine.closure(start, kind, depth)?
    };
    if format.is_json() {
        return output::json(&reached);
    }

    output::header(format!("{} closure of {}", kind, start));
    output::names(&reached);
    Ok(())
}

/// Hypernym paths from a synset to its roots
pub fn paths(engine: &LexisEngine, name: &str, format: OutputFormat) -> Result<()> {
    let paths = engine.hypernym_paths(name)?;
    if format.is_json() {
        return output::json(&paths);
    }

    output::header(format!("Hypernym paths of {}", name));
    for (i, path) in paths.iter().enumerate() {
        println!("  {}. {}", i + 1, path.join(" → "));
    }
    Ok(())
}

#[derive(Serialize)]
struct AncestorOutput {
    synset: String,
    distance: usize,
}

/// Every hypernym of a synset with its hop distance
pub fn ancestors(engine: &LexisEngine, name: &str, format: OutputFormat) -> Result<()> {
    let distances = engine.hypernym_distances(name)?;
    if format.is_json() {
        let rows: Vec<AncestorOutput> = distances
            .into_iter()
            .map(|(synset, distance)| AncestorOutput { synset, distance })
            .collect();
        return output::json(&rows);
    }

    output::header(format!("Hypernyms of {}", name));
    let mut table = TableBuilder::new().header(vec!["Distance", "Synset"]);
    for (synset, distance) in distances {
        table = table.row(vec![distance.to_string(), synset]);
    }
    table.print();
    Ok(())
}

/// Every hypernym of `a` that is also a hypernym of `b`
pub fn common(engine: &LexisEngine, a: &str, b: &str, format: OutputFormat) -> Result<()> {
    let common = engine.common_hypernyms(a, b)?;
    if format.is_json() {
        return output::json(&common);
    }

    output::header(format!("Common hypernyms of {} and {}", a, b));
    output::names(&common);
    Ok(())
}

/// The deepest common hypernyms of `a` and `b`
pub fn lowest_common(
    engine: &LexisEngine,
    a: &str,
    b: &str,
    options: LcsOptions,
    format: OutputFormat,
) -> Result<()> {
    let lowest = engine.lowest_common_hypernyms(a, b, options)?;
    if format.is_json() {
        return output::json(&lowest);
    }

    output::header(format!("Lowest common hypernyms of {} and {}", a, b));
    output::names(&lowest);
    Ok(())
}

// ============================================================================
// Distance & Similarity Commands
// ============================================================================

#[derive(Serialize)]
struct DistanceOutput<'a> {
    left: &'a str,
    right: &'a str,
    simulate_root: bool,
    distance: Option<usize>,
}

/// Shortest path distance through a common hypernym
pub fn distance(
    engine: &LexisEngine,
    a: &str,
    b: &str,
    simulate_root: Option<bool>,
    format: OutputFormat,
) -> Result<()> {
    let distance = engine.shortest_path_distance(a, b, simulate_root)?;
    if format.is_json() {
        return output::json(&DistanceOutput {
            left: a,
            right: b,
            simulate_root: engine.distance_simulates_root(simulate_root),
            distance,
        });
    }

    output::kv(format!("Distance {} ↔ {}", a, b), format_distance(distance));
    Ok(())
}

/// Similarity score(s) between two synsets
pub fn similarity(
    engine: &LexisEngine,
    a: &str,
    b: &str,
    metric: Metric,
    simulate_root: Option<bool>,
    format: OutputFormat,
) -> Result<()> {
    let report = engine.similarity_report(a, b, simulate_root)?;

    let scores = match metric {
        Metric::Path => vec![("path", report.path)],
        Metric::Lch => {
            // Surface the part of speech mismatch instead of a blank score
            let score = engine.lch_similarity(a, b, simulate_root)?;
            vec![("lch", score)]
        }
        Metric::Wup => vec![("wup", report.wup)],
        Metric::All => vec![
            ("path", report.path),
            ("lch", report.lch),
            ("wup", report.wup),
        ],
    };

    if format.is_json() {
        return if metric == Metric::All {
            output::json(&report)
        } else {
            output::json(&scores.into_iter().collect::<std::collections::BTreeMap<_, _>>())
        };
    }

    output::header(format!("Similarity of {} and {}", a, b));
    output::kv("Simulated root", report.simulate_root);
    output::kv("Distance", format_distance(report.distance));
    let mut table = TableBuilder::new().header(vec!["Metric", "Score"]);
    for (name, score) in scores {
        table = table.row(vec![name.to_string(), format_score(score)]);
    }
    table.print();
    Ok(())
}

// ============================================================================
// Stats Command
// ============================================================================

/// Corpus, taxonomy and cache statistics
pub fn stats(engine: &LexisEngine, format: OutputFormat) -> Result<()> {
    let stats = engine.stats();
    if format.is_json() {
        return output::json(&stats);
    }

    output::header("Corpus");
    output::kv("Synsets", stats.build.synsets);
    output::kv("Lemmas", stats.build.lemmas);
    output::kv("Synset edges", stats.build.synset_edges);
    output::kv("Lemma edges", stats.build.lemma_edges);
    output::kv("Mirrored edges", stats.build.mirrored_edges);

    println!();
    let mut table = TableBuilder::new().header(vec!["Part of speech", "Synsets", "Roots", "Max depth"]);
    for taxonomy in &stats.taxonomies {
        table = table.row(vec![
            taxonomy.pos.as_str().to_string(),
            taxonomy.synsets.to_string(),
            taxonomy.roots.to_string(),
            taxonomy.max_depth.to_string(),
        ]);
    }
    table.print();

    output::header("Depth cache");
    output::kv("Enabled", stats.cache.enabled);
    output::kv("Entries", stats.cache.min_entries + stats.cache.max_entries);
    output::kv("Hits", stats.cache.hits);
    output::kv("Misses", stats.cache.misses);
    Ok(())
}

// ============================================================================
// Config Commands
// ============================================================================

/// Print the effective configuration
pub fn config_show(config: &LexisConfig, format: OutputFormat) -> Result<()> {
    if format.is_json() {
        return output::json(config);
    }

    output::header("Configuration");
    print!("{}", config.export_toml()?);
    Ok(())
}

/// Write a configuration file with defaults and an optional corpus path
pub async fn config_init(config_path: Option<&Path>, corpus: Option<PathBuf>, force: bool) -> Result<()> {
    let path = match config_path {
        Some(path) => path.to_path_buf(),
        None => LexisConfig::config_path()?,
    };

    if tokio::fs::try_exists(&path).await.unwrap_or(false) && !force {
        bail!(
            "Configuration already exists at {}. Use --force to overwrite",
            path.display()
        );
    }

    let mut config = LexisConfig::default();
    config.corpus.path = corpus;
    config
        .save_to_path(&path)
        .await
        .with_context(|| format!("Failed to write configuration to {}", path.display()))?;

    output::success(format!("Configuration written to {}", path.display()));
    if config.corpus.path.is_none() {
        output::warning("No corpus path set. Pass --corpus or edit corpus.path");
    }
    Ok(())
}
