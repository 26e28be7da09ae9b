//! Node types stored in the graph: synsets, lemmas and their edge tables.

use crate::store::GraphStore;
use lexis_core::{LemmaName, PartOfSpeech, RelationKind, SynsetName};
use std::fmt;
use std::hash::Hash;

/// Position of a synset in the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SynsetId(u32);

/// Position of a lemma in the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LemmaId(u32);

impl SynsetId {
    pub(crate) fn new(index: usize) -> Self {
        Self(index as u32)
    }

    pub fn index(&self) -> usize {
        self.0 as usize
    }
}

impl LemmaId {
    pub(crate) fn new(index: usize) -> Self {
        Self(index as u32)
    }

    pub fn index(&self) -> usize {
        self.0 as usize
    }
}

/// Outgoing edges of one node, grouped by relation kind.
///
/// Most nodes carry only a handful of kinds, so the table is a short list
/// rather than one slot per kind. Targets keep insertion order and never
/// repeat within a kind.
#[derive(Debug, Clone)]
pub struct RelationTable<K> {
    entries: Vec<(RelationKind, Vec<K>)>,
}

impl<K> Default for RelationTable<K> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<K: Copy + Eq> RelationTable<K> {
    /// Targets of `kind`, in insertion order.
    pub fn get(&self, kind: RelationKind) -> &[K] {
        self.entries
            .iter()
            .find(|(k, _)| *k == kind)
            .map(|(_, targets)| targets.as_slice())
            .unwrap_or(&[])
    }

    /// Add an edge; returns false if it was already present.
    pub(crate) fn insert(&mut self, kind: RelationKind, target: K) -> bool {
        match self.entries.iter_mut().find(|(k, _)| *k == kind) {
            Some((_, targets)) => {
                if targets.contains(&target) {
                    false
                } else {
                    targets.push(target);
                    true
                }
            }
            None => {
                self.entries.push((kind, vec![target]));
                true
            }
        }
    }

    pub fn contains(&self, kind: RelationKind, target: K) -> bool {
        self.get(kind).contains(&target)
    }

    /// Non-empty kinds with their targets.
    pub fn iter(&self) -> impl Iterator<Item = (RelationKind, &[K])> {
        self.entries
            .iter()
            .map(|(kind, targets)| (*kind, targets.as_slice()))
    }

    pub fn edge_count(&self) -> usize {
        self.entries.iter().map(|(_, targets)| targets.len()).sum()
    }
}

/// A word sense.
#[derive(Debug, Clone)]
pub struct Synset {
    pub(crate) id: SynsetId,
    pub(crate) name: SynsetName,
    pub(crate) definition: String,
    pub(crate) examples: Vec<String>,
    pub(crate) lexname: String,
    pub(crate) offset: u64,
    pub(crate) lemmas: Vec<LemmaId>,
    pub(crate) relations: RelationTable<SynsetId>,
}

impl Synset {
    pub fn id(&self) -> SynsetId {
        self.id
    }

    pub fn name(&self) -> &SynsetName {
        &self.name
    }

    pub fn pos(&self) -> PartOfSpeech {
        self.name.pos()
    }

    pub fn definition(&self) -> &str {
        &self.definition
    }

    pub fn examples(&self) -> &[String] {
        &self.examples
    }

    /// Lexicographer file, e.g. `noun.animal`.
    pub fn lexname(&self) -> &str {
        &self.lexname
    }

    pub fn offset(&self) -> u64 {
        self.offset
    }

    /// Member lemmas in database order.
    pub fn lemmas(&self) -> &[LemmaId] {
        &self.lemmas
    }

    pub fn related(&self, kind: RelationKind) -> &[SynsetId] {
        self.relations.get(kind)
    }

    pub fn relations(&self) -> &RelationTable<SynsetId> {
        &self.relations
    }
}

/// A surface form of a synset.
#[derive(Debug, Clone)]
pub struct Lemma {
    pub(crate) id: LemmaId,
    pub(crate) name: LemmaName,
    pub(crate) synset: SynsetId,
    pub(crate) syntactic_marker: Option<String>,
    pub(crate) count: u32,
    pub(crate) lang: String,
    pub(crate) key: String,
    pub(crate) frame_ids: Vec<u32>,
    pub(crate) frame_strings: Vec<String>,
    pub(crate) relations: RelationTable<LemmaId>,
}

impl Lemma {
    pub fn id(&self) -> LemmaId {
        self.id
    }

    /// Full identifier, `<synset>.<form>`.
    pub fn name(&self) -> &LemmaName {
        &self.name
    }

    /// The surface form alone.
    pub fn form(&self) -> &str {
        self.name.form()
    }

    pub fn synset(&self) -> SynsetId {
        self.synset
    }

    /// Adjective position marker (`a`, `p`, `ip`).
    pub fn syntactic_marker(&self) -> Option<&str> {
        self.syntactic_marker.as_deref()
    }

    /// Tagged-corpus frequency.
    pub fn count(&self) -> u32 {
        self.count
    }

    pub fn lang(&self) -> &str {
        &self.lang
    }

    /// Stable sense key.
    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn frame_ids(&self) -> &[u32] {
        &self.frame_ids
    }

    pub fn frame_strings(&self) -> &[String] {
        &self.frame_strings
    }

    pub fn related(&self, kind: RelationKind) -> &[LemmaId] {
        self.relations.get(kind)
    }

    pub fn relations(&self) -> &RelationTable<LemmaId> {
        &self.relations
    }
}

/// A node category the traversal engine can walk: synsets or lemmas.
pub trait GraphNode: Copy + Eq + Hash + Ord + fmt::Debug + Send + Sync + 'static {
    /// Direct neighbours along `kind`, in stored order.
    fn related(self, store: &GraphStore, kind: RelationKind) -> &[Self];

    /// Display identifier of the node.
    fn label(self, store: &GraphStore) -> String;
}

impl GraphNode for SynsetId {
    fn related(self, store: &GraphStore, kind: RelationKind) -> &[Self] {
        store.synset(self).related(kind)
    }

    fn label(self, store: &GraphStore) -> String {
        store.synset(self).name().to_string()
    }
}

impl GraphNode for LemmaId {
    fn related(self, store: &GraphStore, kind: RelationKind) -> &[Self] {
        store.lemma(self).related(kind)
    }

    fn label(self, store: &GraphStore) -> String {
        store.lemma(self).name().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relation_table_dedups() {
        let mut table = RelationTable::default();
        assert!(table.insert(RelationKind::Hypernym, SynsetId::new(1)));
        assert!(table.insert(RelationKind::Hypernym, SynsetId::new(2)));
        assert!(!table.insert(RelationKind::Hypernym, SynsetId::new(1)));
        assert!(table.insert(RelationKind::AlsoSee, SynsetId::new(1)));

        assert_eq!(
            table.get(RelationKind::Hypernym),
            &[SynsetId::new(1), SynsetId::new(2)]
        );
        assert!(table.get(RelationKind::Hyponym).is_empty());
        assert_eq!(table.edge_count(), 3);
        assert!(table.contains(RelationKind::AlsoSee, SynsetId::new(1)));
    }
}
