//! Depths, hypernym paths and per part of speech taxonomy statistics.

use crate::engine::SemanticGraph;
use lexis_core::PartOfSpeech;
use lexis_graph::SynsetId;
use rayon::prelude::*;
use std::collections::{HashMap, HashSet, VecDeque};
use tracing::debug;

/// Shape of the taxonomy of one part of speech.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaxonomyStats {
    pub pos: PartOfSpeech,
    pub synsets: usize,
    /// Synsets with no taxonomic parent, in insertion order
    pub roots: Vec<SynsetId>,
    /// Largest `max_depth` over the part of speech
    pub max_depth: usize,
}

impl TaxonomyStats {
    /// More than one root means no real synset subsumes the whole part of
    /// speech, so queries may fall back to a virtual root.
    pub fn needs_root(&self) -> bool {
        self.roots.len() > 1
    }
}

impl SemanticGraph {
    /// Length of the shortest upward path to a root; 0 for a root.
    pub fn min_depth(&self, id: SynsetId) -> usize {
        if let Some(depth) = self.depth_cache().min_depth(id) {
            return depth;
        }

        let mut visited = HashSet::from([id]);
        let mut queue = VecDeque::from([(id, 0)]);
        let mut depth = 0;
        while let Some((current, hops)) = queue.pop_front() {
            if self.is_root(current) {
                depth = hops;
                break;
            }
            for parent in self.parents(current) {
                if visited.insert(parent) {
                    queue.push_back((parent, hops + 1));
                }
            }
        }

        self.depth_cache().store_min_depth(id, depth);
        depth
    }

    /// Length of the longest upward path to a root; 0 for a root.
    pub fn max_depth(&self, id: SynsetId) -> usize {
        let mut memo = HashMap::new();
        self.max_depth_memo(id, &mut memo)
    }

    fn max_depth_memo(&self, id: SynsetId, memo: &mut HashMap<SynsetId, usize>) -> usize {
        if let Some(&depth) = memo.get(&id) {
            return depth;
        }
        if let Some(depth) = self.depth_cache().max_depth(id) {
            return depth;
        }

        let depth = self
            .parents(id)
            .map(|parent| self.max_depth_memo(parent, memo) + 1)
            .max()
            .unwrap_or(0);

        memo.insert(id, depth);
        self.depth_cache().store_max_depth(id, depth);
        depth
    }

    /// Every upward path from `id` to a root, each starting at `id`.
    pub fn hypernym_paths(&self, id: SynsetId) -> Vec<Vec<SynsetId>> {
        let mut paths = Vec::new();
        let mut current = vec![id];
        self.collect_paths(id, &mut current, &mut paths);
        paths
    }

    fn collect_paths(&self, id: SynsetId, current: &mut Vec<SynsetId>, paths: &mut Vec<Vec<SynsetId>>) {
        let mut has_parent = false;
        for parent in self.parents(id) {
            has_parent = true;
            current.push(parent);
            self.collect_paths(parent, current, paths);
            current.pop();
        }
        if !has_parent {
            paths.push(current.clone());
        }
    }

    /// Roots above `id` (or `id` itself if it is one), in discovery order.
    pub fn root_hypernyms(&self, id: SynsetId) -> Vec<SynsetId> {
        std::iter::once(id)
            .chain(self.upward_closure(id))
            .filter(|&node| self.is_root(node))
            .collect()
    }

    /// Shortest upward hop count to every ancestor, `id` itself at 0.
    pub fn hypernym_distances(&self, id: SynsetId) -> HashMap<SynsetId, usize> {
        let mut distances = HashMap::from([(id, 0)]);
        let mut walk = self.upward_closure(id);
        while let Some((ancestor, hops)) = walk.next_with_hops() {
            distances.insert(ancestor, hops);
        }
        distances
    }

    /// Taxonomy statistics for `pos`, computed once per graph.
    pub fn taxonomy(&self, pos: PartOfSpeech) -> &TaxonomyStats {
        self.taxonomy_cell(pos).get_or_init(|| {
            let ids = self.store().synset_ids(pos);
            let max_depth = ids
                .par_iter()
                .map(|&id| self.max_depth(id))
                .max()
                .unwrap_or(0);
            let roots: Vec<SynsetId> = ids.iter().copied().filter(|&id| self.is_root(id)).collect();

            debug!(
                "Taxonomy for {}: {} synsets, {} roots, depth {}",
                pos.as_str(),
                ids.len(),
                roots.len(),
                max_depth
            );

            TaxonomyStats {
                pos,
                synsets: ids.len(),
                roots,
                max_depth,
            }
        })
    }

    /// Taxonomy roots of one part of speech.
    pub fn roots(&self, pos: PartOfSpeech) -> &[SynsetId] {
        &self.taxonomy(pos).roots
    }

    /// Whether a similarity query between `a` and `b` would need the
    /// virtual root to connect them.
    pub fn needs_root(&self, a: SynsetId, b: SynsetId) -> bool {
        let pos_a = self.store().synset(a).pos();
        let pos_b = self.store().synset(b).pos();
        pos_a != pos_b || self.taxonomy(pos_a).needs_root() || self.taxonomy(pos_b).needs_root()
    }
}
