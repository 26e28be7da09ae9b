//! Name-to-node resolution.

use crate::node::{LemmaId, SynsetId};
use lexis_core::{LexisError, Result};
use std::collections::HashMap;

/// Maps canonical identifiers to node positions.
///
/// Keys are the exact identifier strings (`dog.n.01`, `dog.n.01.dog`), so a
/// malformed identifier simply misses and reports `NotFound`.
#[derive(Debug, Clone, Default)]
pub struct LookupIndex {
    synsets: HashMap<String, SynsetId>,
    lemmas: HashMap<String, LemmaId>,
}

impl LookupIndex {
    /// Register a synset name; false if the name is taken.
    pub(crate) fn insert_synset(&mut self, name: String, id: SynsetId) -> bool {
        match self.synsets.entry(name) {
            std::collections::hash_map::Entry::Occupied(_) => false,
            std::collections::hash_map::Entry::Vacant(slot) => {
                slot.insert(id);
                true
            }
        }
    }

    /// Register a lemma identifier; false if the identifier is taken.
    pub(crate) fn insert_lemma(&mut self, name: String, id: LemmaId) -> bool {
        match self.lemmas.entry(name) {
            std::collections::hash_map::Entry::Occupied(_) => false,
            std::collections::hash_map::Entry::Vacant(slot) => {
                slot.insert(id);
                true
            }
        }
    }

    pub fn synset_id(&self, name: &str) -> Option<SynsetId> {
        self.synsets.get(name).copied()
    }

    pub fn lemma_id(&self, name: &str) -> Option<LemmaId> {
        self.lemmas.get(name).copied()
    }

    /// Resolve a synset identifier such as `dog.n.01`
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if no synset has this name
    pub fn resolve_synset(&self, name: &str) -> Result<SynsetId> {
        self.synset_id(name)
            .ok_or_else(|| LexisError::not_found("synset", name))
    }

    /// Resolve a lemma identifier such as `dog.n.01.dog`
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if no lemma has this identifier
    pub fn resolve_lemma(&self, name: &str) -> Result<LemmaId> {
        self.lemma_id(name)
            .ok_or_else(|| LexisError::not_found("lemma", name))
    }

    pub fn synset_count(&self) -> usize {
        self.synsets.len()
    }

    pub fn lemma_count(&self) -> usize {
        self.lemmas.len()
    }
}
