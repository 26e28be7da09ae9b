//! JSON corpus snapshots.
//!
//! A snapshot is the interchange format between an external corpus loader
//! and the graph store: one record per synset, carrying its lemmas and the
//! outgoing edges of both. Mirror edges may be omitted; the builder adds
//! them.
//!
//! ```json
//! {
//!   "synsets": [
//!     {
//!       "name": "dog.n.01",
//!       "definition": "a member of the genus Canis",
//!       "lexname": "noun.animal",
//!       "lemmas": [{ "form": "dog", "count": 42 }],
//!       "relations": { "hypernym": ["canine.n.02"] }
//!     }
//!   ]
//! }
//! ```

use crate::builder::GraphBuilder;
use crate::store::GraphStore;
use lexis_core::{LemmaName, LexisError, RelationKind, Result, SynsetName};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use tracing::{debug, info};

fn default_lang() -> String {
    "eng".to_string()
}

/// One lemma of a synset record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LemmaRecord {
    pub form: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub syntactic_marker: Option<String>,
    #[serde(default)]
    pub count: u32,
    #[serde(default = "default_lang")]
    pub lang: String,
    #[serde(default)]
    pub key: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub frame_ids: Vec<u32>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub frame_strings: Vec<String>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub relations: BTreeMap<RelationKind, Vec<LemmaName>>,
}

impl LemmaRecord {
    pub fn new(form: impl Into<String>) -> Self {
        Self {
            form: form.into(),
            syntactic_marker: None,
            count: 0,
            lang: default_lang(),
            key: String::new(),
            frame_ids: Vec::new(),
            frame_strings: Vec::new(),
            relations: BTreeMap::new(),
        }
    }

    pub fn with_count(mut self, count: u32) -> Self {
        self.count = count;
        self
    }

    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = key.into();
        self
    }

    pub fn with_syntactic_marker(mut self, marker: impl Into<String>) -> Self {
        self.syntactic_marker = Some(marker.into());
        self
    }

    pub fn with_frame(mut self, id: u32, frame: impl Into<String>) -> Self {
        self.frame_ids.push(id);
        self.frame_strings.push(frame.into());
        self
    }

    pub fn with_relation(mut self, kind: RelationKind, target: LemmaName) -> Self {
        self.relations.entry(kind).or_default().push(target);
        self
    }
}

/// One synset with its lemmas and outgoing edges.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SynsetRecord {
    pub name: SynsetName,
    #[serde(default)]
    pub definition: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub examples: Vec<String>,
    #[serde(default)]
    pub lexname: String,
    #[serde(default)]
    pub offset: u64,
    #[serde(default)]
    pub lemmas: Vec<LemmaRecord>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub relations: BTreeMap<RelationKind, Vec<SynsetName>>,
}

impl SynsetRecord {
    /// A record whose only lemma is the one in its name.
    pub fn new(name: SynsetName, definition: impl Into<String>) -> Self {
        let lemma = LemmaRecord::new(name.lemma());
        Self {
            name,
            definition: definition.into(),
            examples: Vec::new(),
            lexname: String::new(),
            offset: 0,
            lemmas: vec![lemma],
            relations: BTreeMap::new(),
        }
    }

    pub fn with_lexname(mut self, lexname: impl Into<String>) -> Self {
        self.lexname = lexname.into();
        self
    }

    pub fn with_offset(mut self, offset: u64) -> Self {
        self.offset = offset;
        self
    }

    pub fn with_example(mut self, example: impl Into<String>) -> Self {
        self.examples.push(example.into());
        self
    }

    /// Replace the lemma list.
    pub fn with_lemmas(mut self, lemmas: Vec<LemmaRecord>) -> Self {
        self.lemmas = lemmas;
        self
    }

    pub fn with_relation(mut self, kind: RelationKind, target: SynsetName) -> Self {
        self.relations.entry(kind).or_default().push(target);
        self
    }
}

/// A whole corpus in interchange form.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CorpusSnapshot {
    pub synsets: Vec<SynsetRecord>,
}

impl CorpusSnapshot {
    /// Parse a snapshot from JSON text
    ///
    /// # Errors
    ///
    /// Returns a serialization error if the JSON does not match the format
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Read a snapshot file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed
    pub async fn load(path: &Path) -> Result<Self> {
        debug!("Reading corpus snapshot from {}", path.display());

        let content = tokio::fs::read_to_string(path).await.map_err(|e| {
            LexisError::Io(std::io::Error::new(
                e.kind(),
                format!("Failed to read corpus snapshot {}: {}", path.display(), e),
            ))
        })?;

        let snapshot = Self::from_json_str(&content)?;
        info!(
            "Read corpus snapshot with {} synsets from {}",
            snapshot.synsets.len(),
            path.display()
        );
        Ok(snapshot)
    }

    /// Write the snapshot as pretty JSON
    pub async fn save(&self, path: &Path) -> Result<()> {
        tokio::fs::write(path, self.to_json_string()?).await?;
        Ok(())
    }

    /// Build an immutable store from this snapshot
    ///
    /// # Errors
    ///
    /// Returns a construction integrity error if the records are inconsistent
    pub fn into_store(self, complete_inverse_edges: bool) -> Result<GraphStore> {
        let mut builder = GraphBuilder::new().complete_inverse_edges(complete_inverse_edges);
        for record in self.synsets {
            builder.add_synset(record);
        }
        builder.build()
    }
}

impl GraphStore {
    /// Export every node and edge, mirror edges included, as a snapshot.
    pub fn to_snapshot(&self) -> CorpusSnapshot {
        let synsets = self
            .synsets()
            .map(|synset| {
                let lemmas = synset
                    .lemmas()
                    .iter()
                    .map(|&lemma_id| {
                        let lemma = self.lemma(lemma_id);
                        LemmaRecord {
                            form: lemma.form().to_string(),
                            syntactic_marker: lemma.syntactic_marker.clone(),
                            count: lemma.count(),
                            lang: lemma.lang().to_string(),
                            key: lemma.key().to_string(),
                            frame_ids: lemma.frame_ids().to_vec(),
                            frame_strings: lemma.frame_strings().to_vec(),
                            relations: lemma
                                .relations()
                                .iter()
                                .map(|(kind, targets)| {
                                    let names = targets
                                        .iter()
                                        .map(|&t| self.lemma(t).name().clone())
                                        .collect();
                                    (kind, names)
                                })
                                .collect(),
                        }
                    })
                    .collect();

                SynsetRecord {
                    name: synset.name().clone(),
                    definition: synset.definition().to_string(),
                    examples: synset.examples().to_vec(),
                    lexname: synset.lexname().to_string(),
                    offset: synset.offset(),
                    lemmas,
                    relations: synset
                        .relations()
                        .iter()
                        .map(|(kind, targets)| {
                            let names = targets
                                .iter()
                                .map(|&t| self.synset(t).name().clone())
                                .collect();
                            (kind, names)
                        })
                        .collect(),
                }
            })
            .collect();

        CorpusSnapshot { synsets }
    }
}
