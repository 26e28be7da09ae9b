//! Shortest-path distance and the path, Leacock-Chodorow and Wu-Palmer
//! similarity scores.
//!
//! Queries that may simulate a root only do so when it can matter: when the
//! two synsets differ in part of speech or either taxonomy has several roots.

use crate::ancestors::{LcsOptions, Subsumer};
use crate::engine::SemanticGraph;
use lexis_core::{LexisError, Result};
use lexis_graph::SynsetId;

impl SemanticGraph {
    /// Fewest edges between `a` and `b` through a common hypernym.
    ///
    /// `None` when the two share no ancestor. With `simulate_root`, a path
    /// through the virtual root (one extra edge above each real root) is
    /// also a candidate.
    pub fn shortest_path_distance(
        &self,
        a: SynsetId,
        b: SynsetId,
        simulate_root: bool,
    ) -> Option<usize> {
        if a == b {
            return Some(0);
        }

        let from_a = self.hypernym_distances(a);
        let from_b = self.hypernym_distances(b);
        let through_common = from_a
            .iter()
            .filter_map(|(ancestor, up_a)| from_b.get(ancestor).map(|up_b| up_a + up_b))
            .min();

        if simulate_root && self.needs_root(a, b) {
            let through_root = self.min_depth(a) + self.min_depth(b) + 2;
            Some(through_common.map_or(through_root, |d| d.min(through_root)))
        } else {
            through_common
        }
    }

    /// `1 / (distance + 1)`, in (0, 1].
    pub fn path_similarity(&self, a: SynsetId, b: SynsetId, simulate_root: bool) -> Option<f64> {
        self.shortest_path_distance(a, b, simulate_root)
            .map(|distance| 1.0 / (distance as f64 + 1.0))
    }

    /// Leacock-Chodorow: `-ln(distance / (2 * taxonomy depth))`.
    ///
    /// # Errors
    ///
    /// Returns `IncompatiblePartOfSpeech` if `a` and `b` differ in part of
    /// speech
    pub fn lch_similarity(&self, a: SynsetId, b: SynsetId, simulate_root: bool) -> Result<Option<f64>> {
        let pos = self.store().synset(a).pos();
        if pos != self.store().synset(b).pos() {
            return Err(LexisError::incompatible_pos(self.label(a), self.label(b)));
        }

        let taxonomy = self.taxonomy(pos);
        let simulate = simulate_root && taxonomy.needs_root();
        let depth = taxonomy.max_depth + usize::from(simulate);
        if depth == 0 {
            return Ok(None);
        }

        Ok(self
            .shortest_path_distance(a, b, simulate)
            .map(|distance| -(distance.max(1) as f64 / (2.0 * depth as f64)).ln()))
    }

    /// Wu-Palmer: `2 * depth(lcs) / (depth(a) + depth(b))`.
    ///
    /// Depths are `min_depth` values. With a simulated root every real depth
    /// grows by one and the virtual root sits at depth 0. The score is not
    /// clamped: an input with a shorter route to a root that bypasses the
    /// subsumer can score above 1.
    pub fn wup_similarity(&self, a: SynsetId, b: SynsetId, simulate_root: bool) -> Option<f64> {
        if a == b {
            return Some(1.0);
        }

        let simulate = simulate_root && self.needs_root(a, b);
        let options = LcsOptions {
            simulate_root: simulate,
            use_min_depth: true,
        };
        let subsumers = self.lowest_common_hypernyms_with(a, b, options);
        let lcs = if subsumers.contains(&Subsumer::Synset(a)) {
            Subsumer::Synset(a)
        } else {
            *subsumers.first()?
        };

        let shift = usize::from(simulate);
        let lcs_depth = match lcs {
            Subsumer::Synset(c) => self.min_depth(c) + shift,
            Subsumer::VirtualRoot => 0,
        };
        let denominator = self.min_depth(a) + self.min_depth(b) + 2 * shift;
        if denominator == 0 {
            return None;
        }
        Some((2 * lcs_depth) as f64 / denominator as f64)
    }
}
