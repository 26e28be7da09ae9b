//! Id-level query engine over a shared graph store.

use crate::cache::{CacheStats, DepthCache};
use crate::closure::Closure;
use crate::taxonomy::TaxonomyStats;
use lexis_core::config::QueryConfig;
use lexis_core::{Depth, PartOfSpeech, RelationKind};
use lexis_graph::{GraphNode, GraphStore, SynsetId};
use once_cell::sync::OnceCell;
use std::sync::Arc;

/// Traversal, ancestor and similarity queries over one [`GraphStore`].
///
/// Every operation takes `&self` and is safe to call from many threads at
/// once; the only interior state is the depth memo and the per part of
/// speech taxonomy statistics, both compute-once.
#[derive(Debug)]
pub struct SemanticGraph {
    store: Arc<GraphStore>,
    cache: DepthCache,
    taxonomies: [OnceCell<TaxonomyStats>; 5],
}

impl SemanticGraph {
    pub fn new(store: Arc<GraphStore>) -> Self {
        Self::with_depth_cache(store, true)
    }

    pub fn with_depth_cache(store: Arc<GraphStore>, cache_depths: bool) -> Self {
        Self {
            store,
            cache: DepthCache::new(cache_depths),
            taxonomies: Default::default(),
        }
    }

    pub fn from_config(store: Arc<GraphStore>, config: &QueryConfig) -> Self {
        Self::with_depth_cache(store, config.cache_depths)
    }

    pub fn store(&self) -> &GraphStore {
        &self.store
    }

    pub fn shared_store(&self) -> Arc<GraphStore> {
        Arc::clone(&self.store)
    }

    pub(crate) fn depth_cache(&self) -> &DepthCache {
        &self.cache
    }

    pub(crate) fn taxonomy_cell(&self, pos: PartOfSpeech) -> &OnceCell<TaxonomyStats> {
        &self.taxonomies[pos.index()]
    }

    pub fn cache_stats(&self) -> CacheStats {
        self.cache.stats()
    }

    /// Direct neighbours of a synset or lemma along `kind`.
    pub fn related<N: GraphNode>(&self, node: N, kind: RelationKind) -> &[N] {
        node.related(&self.store, kind)
    }

    /// Lazy closure of `start` along `kind`, bounded by `depth` hops.
    pub fn closure<N: GraphNode>(&self, start: N, kind: RelationKind, depth: Depth) -> Closure<'_, N> {
        Closure::new(&self.store, start, vec![kind], depth)
    }

    /// Lazy closure along both hypernym and instance-hypernym edges.
    pub fn upward_closure(&self, start: SynsetId) -> Closure<'_, SynsetId> {
        Closure::new(&self.store, start, RelationKind::UPWARD.to_vec(), Depth::Unbounded)
    }

    /// Direct taxonomic parents (hypernyms, then instance hypernyms).
    pub fn parents(&self, id: SynsetId) -> impl Iterator<Item = SynsetId> + '_ {
        let synset = self.store.synset(id);
        RelationKind::UPWARD
            .into_iter()
            .flat_map(move |kind| synset.related(kind).iter().copied())
    }

    /// Whether a synset has no taxonomic parent.
    pub fn is_root(&self, id: SynsetId) -> bool {
        self.parents(id).next().is_none()
    }

    pub fn label(&self, id: SynsetId) -> String {
        id.label(&self.store)
    }
}
