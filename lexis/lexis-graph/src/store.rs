//! The immutable graph store.

use crate::builder::BuildStats;
use crate::lookup::LookupIndex;
use crate::node::{Lemma, LemmaId, Synset, SynsetId};
use lexis_core::{LexisError, PartOfSpeech, Result};
use std::path::Path;

/// All synsets, lemmas and edges of one corpus.
///
/// Built once through [`crate::GraphBuilder`] and never mutated afterwards,
/// so it can be shared behind an `Arc` by any number of readers.
#[derive(Debug)]
pub struct GraphStore {
    synsets: Vec<Synset>,
    lemmas: Vec<Lemma>,
    by_pos: [Vec<SynsetId>; 5],
    index: LookupIndex,
    stats: BuildStats,
}

impl GraphStore {
    pub(crate) fn from_parts(
        synsets: Vec<Synset>,
        lemmas: Vec<Lemma>,
        index: LookupIndex,
        stats: BuildStats,
    ) -> Self {
        let mut by_pos: [Vec<SynsetId>; 5] = Default::default();
        for synset in &synsets {
            by_pos[synset.pos().index()].push(synset.id());
        }

        Self {
            synsets,
            lemmas,
            by_pos,
            index,
            stats,
        }
    }

    /// Load a JSON snapshot and build a store from it
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, or if the
    /// corpus fails construction checks
    pub async fn load_snapshot(path: &Path, complete_inverse_edges: bool) -> Result<Self> {
        crate::snapshot::CorpusSnapshot::load(path)
            .await?
            .into_store(complete_inverse_edges)
    }

    /// Synset by id.
    ///
    /// Ids are only handed out by this store, so every id is in range.
    pub fn synset(&self, id: SynsetId) -> &Synset {
        &self.synsets[id.index()]
    }

    /// Lemma by id.
    pub fn lemma(&self, id: LemmaId) -> &Lemma {
        &self.lemmas[id.index()]
    }

    /// Resolve a canonical synset identifier
    ///
    /// # Errors
    ///
    /// Returns `NotFound` for unknown or malformed identifiers
    pub fn synset_by_name(&self, name: &str) -> Result<&Synset> {
        self.index.resolve_synset(name).map(|id| self.synset(id))
    }

    /// Resolve a lemma identifier (`<synset>.<form>`)
    ///
    /// # Errors
    ///
    /// Returns `NotFound` for unknown or malformed identifiers
    pub fn lemma_by_name(&self, name: &str) -> Result<&Lemma> {
        self.index.resolve_lemma(name).map(|id| self.lemma(id))
    }

    /// The synset that owns `lemma`.
    pub fn owner(&self, lemma: LemmaId) -> &Synset {
        self.synset(self.lemma(lemma).synset())
    }

    /// Every synset in insertion order.
    pub fn synsets(&self) -> impl ExactSizeIterator<Item = &Synset> {
        self.synsets.iter()
    }

    /// Synsets of one part of speech (or all of them) in insertion order.
    pub fn all_synsets(&self, pos: Option<PartOfSpeech>) -> Box<dyn Iterator<Item = &Synset> + '_> {
        match pos {
            Some(pos) => Box::new(self.by_pos[pos.index()].iter().map(|&id| self.synset(id))),
            None => Box::new(self.synsets.iter()),
        }
    }

    /// Ids of one part of speech, in insertion order.
    pub fn synset_ids(&self, pos: PartOfSpeech) -> &[SynsetId] {
        &self.by_pos[pos.index()]
    }

    /// Synset at a position within `all_synsets(pos)`.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if the position is past the end
    pub fn synset_at(&self, pos: Option<PartOfSpeech>, position: usize) -> Result<&Synset> {
        let id = match pos {
            Some(pos) => self.by_pos[pos.index()].get(position).copied(),
            None => self.synsets.get(position).map(Synset::id),
        };
        id.map(|id| self.synset(id)).ok_or_else(|| {
            let scope = pos.map_or("all", |p| p.as_str());
            LexisError::not_found("synset position", format!("{} in {}", position, scope))
        })
    }

    /// Every lemma in insertion order.
    pub fn lemmas(&self) -> impl ExactSizeIterator<Item = &Lemma> {
        self.lemmas.iter()
    }

    pub fn index(&self) -> &LookupIndex {
        &self.index
    }

    pub fn stats(&self) -> BuildStats {
        self.stats
    }

    pub fn synset_count(&self) -> usize {
        self.synsets.len()
    }

    pub fn lemma_count(&self) -> usize {
        self.lemmas.len()
    }
}

#[cfg(test)]
mod tests {
    use crate::builder::GraphBuilder;
    use crate::snapshot::SynsetRecord;
    use lexis_core::{PartOfSpeech, RelationKind};

    fn store() -> super::GraphStore {
        let mut builder = GraphBuilder::new();
        for raw in ["entity.n.01", "run.v.01", "object.n.01", "walk.v.01"] {
            let mut record = SynsetRecord::new(raw.parse().unwrap(), "");
            if raw == "object.n.01" {
                record = record.with_relation(RelationKind::Hypernym, "entity.n.01".parse().unwrap());
            }
            builder.add_synset(record);
        }
        builder.build().unwrap()
    }

    #[test]
    fn test_iteration_keeps_insertion_order() {
        let store = store();
        let all: Vec<String> = store.all_synsets(None).map(|s| s.name().to_string()).collect();
        assert_eq!(all, ["entity.n.01", "run.v.01", "object.n.01", "walk.v.01"]);

        let verbs: Vec<String> = store
            .all_synsets(Some(PartOfSpeech::Verb))
            .map(|s| s.name().to_string())
            .collect();
        assert_eq!(verbs, ["run.v.01", "walk.v.01"]);
        assert_eq!(store.all_synsets(Some(PartOfSpeech::Adverb)).count(), 0);
    }

    #[test]
    fn test_positional_access() {
        let store = store();
        assert_eq!(
            store.synset_at(Some(PartOfSpeech::Noun), 1).unwrap().name().to_string(),
            "object.n.01"
        );
        assert!(store.synset_at(Some(PartOfSpeech::Verb), 2).unwrap_err().is_not_found());
    }

    #[test]
    fn test_lemma_owner() {
        let store = store();
        let lemma = store.lemma_by_name("run.v.01.run").unwrap();
        assert_eq!(store.owner(lemma.id()).name().to_string(), "run.v.01");
    }
}
