//! Common and lowest common hypernym search.

use crate::engine::SemanticGraph;
use lexis_graph::SynsetId;
use std::collections::HashSet;

/// Label used for the virtual root in rendered output.
pub const VIRTUAL_ROOT_LABEL: &str = "*ROOT*";

/// A shared ancestor of two synsets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Subsumer {
    Synset(SynsetId),
    /// Stand-in parent of every taxonomy root
    VirtualRoot,
}

impl Subsumer {
    pub fn synset(&self) -> Option<SynsetId> {
        match self {
            Self::Synset(id) => Some(*id),
            Self::VirtualRoot => None,
        }
    }
}

/// Options for [`SemanticGraph::lowest_common_hypernyms_with`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LcsOptions {
    /// Fall back to the virtual root when no real ancestor is shared
    pub simulate_root: bool,
    /// Rank candidates by `min_depth` (true) or `max_depth` (false)
    pub use_min_depth: bool,
}

impl Default for LcsOptions {
    fn default() -> Self {
        Self {
            simulate_root: false,
            use_min_depth: true,
        }
    }
}

impl SemanticGraph {
    /// Ancestors shared by `a` and `b`, each counting as its own ancestor.
    ///
    /// Sorted by canonical name.
    pub fn common_hypernyms(&self, a: SynsetId, b: SynsetId) -> Vec<SynsetId> {
        let above_a: HashSet<SynsetId> = std::iter::once(a).chain(self.upward_closure(a)).collect();
        let mut common: Vec<SynsetId> = std::iter::once(b)
            .chain(self.upward_closure(b))
            .filter(|id| above_a.contains(id))
            .collect();
        self.sort_by_name(&mut common);
        common
    }

    /// The deepest common hypernyms by `min_depth`, ties sorted by name.
    pub fn lowest_common_hypernyms(&self, a: SynsetId, b: SynsetId) -> Vec<SynsetId> {
        self.lowest_common_hypernyms_with(a, b, LcsOptions::default())
            .into_iter()
            .filter_map(|subsumer| subsumer.synset())
            .collect()
    }

    pub fn lowest_common_hypernyms_with(
        &self,
        a: SynsetId,
        b: SynsetId,
        options: LcsOptions,
    ) -> Vec<Subsumer> {
        if a == b {
            return vec![Subsumer::Synset(a)];
        }

        let common = self.common_hypernyms(a, b);
        if common.is_empty() {
            return if options.simulate_root {
                vec![Subsumer::VirtualRoot]
            } else {
                Vec::new()
            };
        }

        let rank = |id: SynsetId| {
            if options.use_min_depth {
                self.min_depth(id)
            } else {
                self.max_depth(id)
            }
        };
        let deepest = common.iter().map(|&id| rank(id)).max().unwrap_or(0);

        common
            .into_iter()
            .filter(|&id| rank(id) == deepest)
            .map(Subsumer::Synset)
            .collect()
    }

    fn sort_by_name(&self, ids: &mut [SynsetId]) {
        let store = self.store();
        ids.sort_by_cached_key(|&id| store.synset(id).name().to_string());
    }
}
