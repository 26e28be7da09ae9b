//! Name-based query service.
//!
//! Resolves canonical identifiers, runs the id-level queries of
//! [`SemanticGraph`] and returns serializable views, so front ends never
//! handle internal ids.

use crate::ancestors::{LcsOptions, Subsumer, VIRTUAL_ROOT_LABEL};
use crate::cache::CacheStats;
use crate::engine::SemanticGraph;
use lexis_core::{Depth, LexisConfig, LexisError, PartOfSpeech, RelationKind, Result};
use lexis_graph::{BuildStats, GraphStore, Lemma, LemmaId, Synset, SynsetId};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::{debug, info};

/// Synset compared against when a pairwise query names only one synset
pub const DEFAULT_OTHER_SYNSET: &str = "entity.n.01";

/// `simulate_root` when neither the caller nor the config sets it
const DISTANCE_SIMULATES_ROOT: bool = false;
const SIMILARITY_SIMULATES_ROOT: bool = true;

/// Query service over one loaded corpus
#[derive(Debug, Clone)]
pub struct LexisEngine {
    graph: Arc<SemanticGraph>,
    simulate_root: Option<bool>,
}

impl LexisEngine {
    /// Create a new engine over a built store
    pub fn new(store: Arc<GraphStore>, config: &LexisConfig) -> Self {
        Self {
            graph: Arc::new(SemanticGraph::from_config(store, &config.query)),
            simulate_root: config.query.simulate_root,
        }
    }

    /// Load the corpus snapshot named by `corpus.path` and build an engine
    ///
    /// # Errors
    ///
    /// Returns a configuration error if no corpus path is set, or the load
    /// and construction errors of the snapshot itself
    pub async fn from_config(config: &LexisConfig) -> Result<Self> {
        let path = config.corpus.path.as_ref().ok_or_else(|| {
            LexisError::config(
                "No corpus snapshot configured. Set corpus.path or LEXIS_CORPUS_PATH",
            )
        })?;

        let store = GraphStore::load_snapshot(path, config.corpus.complete_inverse_edges).await?;
        info!(
            "Lexis engine ready: {} synsets, {} lemmas",
            store.synset_count(),
            store.lemma_count()
        );
        Ok(Self::new(Arc::new(store), config))
    }

    pub fn graph(&self) -> &SemanticGraph {
        &self.graph
    }

    fn store(&self) -> &GraphStore {
        self.graph.store()
    }

    /// Effective `simulate_root` for distance queries: the caller's flag,
    /// then the configured override, then `false`
    pub fn distance_simulates_root(&self, requested: Option<bool>) -> bool {
        requested.or(self.simulate_root).unwrap_or(DISTANCE_SIMULATES_ROOT)
    }

    /// Effective `simulate_root` for similarity scores: the caller's flag,
    /// then the configured override, then `true`
    pub fn similarity_simulates_root(&self, requested: Option<bool>) -> bool {
        requested.or(self.simulate_root).unwrap_or(SIMILARITY_SIMULATES_ROOT)
    }

    fn resolve(&self, name: &str) -> Result<SynsetId> {
        self.store().synset_by_name(name).map(Synset::id)
    }

    fn resolve_lemma(&self, id: &str) -> Result<LemmaId> {
        self.store().lemma_by_name(id).map(Lemma::id)
    }

    fn names(&self, ids: impl IntoIterator<Item = SynsetId>) -> Vec<String> {
        ids.into_iter().map(|id| self.graph.label(id)).collect()
    }

    fn lemma_names(&self, ids: impl IntoIterator<Item = LemmaId>) -> Vec<String> {
        ids.into_iter()
            .map(|id| self.store().lemma(id).name().to_string())
            .collect()
    }

    /// Get a synset with its attributes, depths and direct relations
    pub fn synset(&self, name: &str) -> Result<SynsetView> {
        debug!("Getting synset: {}", name);
        let id = self.resolve(name)?;
        Ok(SynsetView::from_synset(self, id))
    }

    /// Get a lemma by its `<synset>.<form>` identifier
    pub fn lemma(&self, id: &str) -> Result<LemmaView> {
        debug!("Getting lemma: {}", id);
        let lemma_id = self.resolve_lemma(id)?;
        Ok(LemmaView::from_lemma(self, lemma_id))
    }

    /// Names of every synset, optionally of one part of speech, in corpus order
    pub fn all_synsets(&self, pos: Option<PartOfSpeech>) -> Vec<String> {
        self.store()
            .all_synsets(pos)
            .map(|synset| synset.name().to_string())
            .collect()
    }

    /// Synsets reachable from `name` along `kind`
    pub fn closure(&self, name: &str, kind: RelationKind, depth: Depth) -> Result<Vec<String>> {
        debug!("Closure of {} along {} ({:?})", name, kind, depth);
        let id = self.resolve(name)?;
        Ok(self.names(self.graph.closure(id, kind, depth)))
    }

    /// Lemmas reachable from the lemma `id` along `kind`
    pub fn lemma_closure(&self, id: &str, kind: RelationKind, depth: Depth) -> Result<Vec<String>> {
        debug!("Lemma closure of {} along {} ({:?})", id, kind, depth);
        let lemma_id = self.resolve_lemma(id)?;
        Ok(self.lemma_names(self.graph.closure(lemma_id, kind, depth)))
    }

    pub fn hypernym_paths(&self, name: &str) -> Result<Vec<Vec<String>>> {
        let id = self.resolve(name)?;
        Ok(self
            .graph
            .hypernym_paths(id)
            .into_iter()
            .map(|path| self.names(path))
            .collect())
    }

    pub fn root_hypernyms(&self, name: &str) -> Result<Vec<String>> {
        let id = self.resolve(name)?;
        Ok(self.names(self.graph.root_hypernyms(id)))
    }

    /// Every ancestor of `name` with its shortest upward distance, sorted by
    /// distance then name
    pub fn hypernym_distances(&self, name: &str) -> Result<Vec<(String, usize)>> {
        let id = self.resolve(name)?;
        let mut distances: Vec<(String, usize)> = self
            .graph
            .hypernym_distances(id)
            .into_iter()
            .map(|(ancestor, hops)| (self.graph.label(ancestor), hops))
            .collect();
        distances.sort_by(|x, y| x.1.cmp(&y.1).then_with(|| x.0.cmp(&y.0)));
        Ok(distances)
    }

    pub fn common_hypernyms(&self, a: &str, b: &str) -> Result<Vec<String>> {
        let (a, b) = (self.resolve(a)?, self.resolve(b)?);
        Ok(self.names(self.graph.common_hypernyms(a, b)))
    }

    /// Lowest common hypernyms; the virtual root is reported as `*ROOT*`
    pub fn lowest_common_hypernyms(&self, a: &str, b: &str, options: LcsOptions) -> Result<Vec<String>> {
        let (a, b) = (self.resolve(a)?, self.resolve(b)?);
        Ok(self
            .graph
            .lowest_common_hypernyms_with(a, b, options)
            .into_iter()
            .map(|subsumer| match subsumer {
                Subsumer::Synset(id) => self.graph.label(id),
                Subsumer::VirtualRoot => VIRTUAL_ROOT_LABEL.to_string(),
            })
            .collect())
    }

    pub fn shortest_path_distance(
        &self,
        a: &str,
        b: &str,
        simulate_root: Option<bool>,
    ) -> Result<Option<usize>> {
        let (a, b) = (self.resolve(a)?, self.resolve(b)?);
        Ok(self.graph.shortest_path_distance(a, b, self.distance_simulates_root(simulate_root)))
    }

    pub fn path_similarity(&self, a: &str, b: &str, simulate_root: Option<bool>) -> Result<Option<f64>> {
        let (a, b) = (self.resolve(a)?, self.resolve(b)?);
        Ok(self.graph.path_similarity(a, b, self.similarity_simulates_root(simulate_root)))
    }

    pub fn lch_similarity(&self, a: &str, b: &str, simulate_root: Option<bool>) -> Result<Option<f64>> {
        let (a, b) = (self.resolve(a)?, self.resolve(b)?);
        self.graph.lch_similarity(a, b, self.similarity_simulates_root(simulate_root))
    }

    pub fn wup_similarity(&self, a: &str, b: &str, simulate_root: Option<bool>) -> Result<Option<f64>> {
        let (a, b) = (self.resolve(a)?, self.resolve(b)?);
        Ok(self.graph.wup_similarity(a, b, self.similarity_simulates_root(simulate_root)))
    }

    /// Distance and all three similarity scores in one pass, all under the
    /// similarity default for `simulate_root`
    pub fn similarity_report(&self, a: &str, b: &str, simulate_root: Option<bool>) -> Result<SimilarityReport> {
        let simulate = self.similarity_simulates_root(simulate_root);
        let (left, right) = (self.resolve(a)?, self.resolve(b)?);

        let lch = match self.graph.lch_similarity(left, right, simulate) {
            Ok(score) => score,
            Err(e) if e.is_incompatible_pos() => None,
            Err(e) => return Err(e),
        };

        Ok(SimilarityReport {
            left: a.to_string(),
            right: b.to_string(),
            simulate_root: simulate,
            distance: self.graph.shortest_path_distance(left, right, simulate),
            path: self.graph.path_similarity(left, right, simulate),
            lch,
            wup: self.graph.wup_similarity(left, right, simulate),
        })
    }

    /// Corpus, taxonomy and cache statistics
    pub fn stats(&self) -> EngineStats {
        let taxonomies = PartOfSpeech::ALL
            .into_iter()
            .map(|pos| {
                let taxonomy = self.graph.taxonomy(pos);
                TaxonomySummary {
                    pos,
                    synsets: taxonomy.synsets,
                    roots: taxonomy.roots.len(),
                    max_depth: taxonomy.max_depth,
                }
            })
            .collect();

        EngineStats {
            build: self.store().stats(),
            taxonomies,
            cache: self.graph.cache_stats(),
        }
    }
}

/// A synset as returned by [`LexisEngine::synset`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SynsetView {
    pub name: String,
    pub pos: PartOfSpeech,
    pub lemmas: Vec<String>,
    pub definition: String,
    pub examples: Vec<String>,
    pub offset: u64,
    pub lexname: String,
    pub min_depth: usize,
    pub max_depth: usize,
    pub root_hypernyms: Vec<String>,
    /// Non-empty relation kinds with target synset names
    pub relations: BTreeMap<RelationKind, Vec<String>>,
}

impl SynsetView {
    fn from_synset(engine: &LexisEngine, id: SynsetId) -> Self {
        let graph = engine.graph();
        let synset = graph.store().synset(id);

        let relations = RelationKind::synset_kinds()
            .filter_map(|kind| {
                let targets = synset.related(kind);
                (!targets.is_empty()).then(|| (kind, engine.names(targets.iter().copied())))
            })
            .collect();

        Self {
            name: synset.name().to_string(),
            pos: synset.pos(),
            lemmas: engine.lemma_names(synset.lemmas().iter().copied()),
            definition: synset.definition().to_string(),
            examples: synset.examples().to_vec(),
            offset: synset.offset(),
            lexname: synset.lexname().to_string(),
            min_depth: graph.min_depth(id),
            max_depth: graph.max_depth(id),
            root_hypernyms: engine.names(graph.root_hypernyms(id)),
            relations,
        }
    }

    /// Targets of one relation kind, empty if there are none
    pub fn related(&self, kind: RelationKind) -> &[String] {
        self.relations.get(&kind).map(Vec::as_slice).unwrap_or(&[])
    }
}

/// A lemma as returned by [`LexisEngine::lemma`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LemmaView {
    /// Full identifier, `<synset>.<form>`
    pub id: String,
    /// Surface form
    pub name: String,
    pub synset: String,
    pub syntactic_marker: Option<String>,
    pub count: u32,
    pub lang: String,
    pub key: String,
    pub frame_ids: Vec<u32>,
    pub frame_strings: Vec<String>,
    pub relations: BTreeMap<RelationKind, Vec<String>>,
}

impl LemmaView {
    fn from_lemma(engine: &LexisEngine, id: LemmaId) -> Self {
        let store = engine.store();
        let lemma = store.lemma(id);

        let relations = lemma
            .relations()
            .iter()
            .map(|(kind, targets)| (kind, engine.lemma_names(targets.iter().copied())))
            .collect();

        Self {
            id: lemma.name().to_string(),
            name: lemma.form().to_string(),
            synset: store.owner(id).name().to_string(),
            syntactic_marker: lemma.syntactic_marker().map(str::to_string),
            count: lemma.count(),
            lang: lemma.lang().to_string(),
            key: lemma.key().to_string(),
            frame_ids: lemma.frame_ids().to_vec(),
            frame_strings: lemma.frame_strings().to_vec(),
            relations,
        }
    }

    pub fn related(&self, kind: RelationKind) -> &[String] {
        self.relations.get(&kind).map(Vec::as_slice).unwrap_or(&[])
    }
}

/// Distance and similarity scores for one synset pair.
///
/// `lch` is `None` when the pair differs in part of speech.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimilarityReport {
    pub left: String,
    pub right: String,
    pub simulate_root: bool,
    pub distance: Option<usize>,
    pub path: Option<f64>,
    pub lch: Option<f64>,
    pub wup: Option<f64>,
}

/// Per part of speech taxonomy shape
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaxonomySummary {
    pub pos: PartOfSpeech,
    pub synsets: usize,
    pub roots: usize,
    pub max_depth: usize,
}

/// Statistics reported by [`LexisEngine::stats`]
#[derive(Debug, Clone, Serialize)]
pub struct EngineStats {
    pub build: BuildStats,
    pub taxonomies: Vec<TaxonomySummary>,
    pub cache: CacheStats,
}
