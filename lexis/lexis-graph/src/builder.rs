//! One-shot construction of a [`GraphStore`].
//!
//! The builder collects synset records and loose edges, then `build()`
//! resolves every name, mirrors edges whose kind has an inverse, and runs a
//! validation pass. Any inconsistency is a [`LexisError::ConstructionIntegrity`];
//! there is no partially built store.

use crate::lookup::LookupIndex;
use crate::node::{Lemma, LemmaId, RelationTable, Synset, SynsetId};
use crate::snapshot::SynsetRecord;
use crate::store::GraphStore;
use lexis_core::{LemmaName, LexisError, PartOfSpeech, RelationKind, Result, SynsetName};
use serde::Serialize;
use std::collections::{HashMap, VecDeque};
use tracing::{debug, info};

/// Accumulates records until `build()`.
#[derive(Debug, Default)]
pub struct GraphBuilder {
    records: Vec<SynsetRecord>,
    synset_edges: Vec<(SynsetName, RelationKind, SynsetName)>,
    lemma_edges: Vec<(LemmaName, RelationKind, LemmaName)>,
    keep_one_way: bool,
}

/// Counters reported after a successful build.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct BuildStats {
    pub synsets: usize,
    pub lemmas: usize,
    pub synset_edges: usize,
    pub lemma_edges: usize,
    pub mirrored_edges: usize,
}

impl GraphBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether to add the mirror of every edge whose kind has an inverse
    /// (default true). When disabled, a missing mirror fails validation.
    pub fn complete_inverse_edges(mut self, enabled: bool) -> Self {
        self.keep_one_way = !enabled;
        self
    }

    /// Declare a synset, its lemmas and its outgoing edges.
    pub fn add_synset(&mut self, record: SynsetRecord) -> &mut Self {
        self.records.push(record);
        self
    }

    pub fn add_synset_edge(
        &mut self,
        from: SynsetName,
        kind: RelationKind,
        to: SynsetName,
    ) -> &mut Self {
        self.synset_edges.push((from, kind, to));
        self
    }

    pub fn add_lemma_edge(&mut self, from: LemmaName, kind: RelationKind, to: LemmaName) -> &mut Self {
        self.lemma_edges.push((from, kind, to));
        self
    }

    /// Resolve, mirror and validate everything declared so far.
    ///
    /// # Errors
    ///
    /// Returns a construction integrity error for duplicate names, edges to
    /// unknown nodes, lemma-only kinds between synsets, missing mirror edges
    /// (when completion is disabled) or a cycle in the taxonomy.
    pub fn build(self) -> Result<GraphStore> {
        let GraphBuilder {
            records,
            mut synset_edges,
            mut lemma_edges,
            keep_one_way,
        } = self;

        debug!("Building graph store from {} synset records", records.len());

        let mut synsets = Vec::with_capacity(records.len());
        let mut lemmas = Vec::new();
        let mut index = LookupIndex::default();

        // Pass 1: allocate nodes in declaration order
        for record in records {
            let synset_id = SynsetId::new(synsets.len());
            if !index.insert_synset(record.name.to_string(), synset_id) {
                return Err(LexisError::integrity(format!(
                    "duplicate synset name {}",
                    record.name
                )));
            }

            let mut member_ids = Vec::with_capacity(record.lemmas.len());
            for lemma_record in record.lemmas {
                let lemma_id = LemmaId::new(lemmas.len());
                let lemma_name = LemmaName::new(record.name.clone(), lemma_record.form);
                if !index.insert_lemma(lemma_name.to_string(), lemma_id) {
                    return Err(LexisError::integrity(format!(
                        "duplicate lemma {}",
                        lemma_name
                    )));
                }

                for (kind, targets) in lemma_record.relations {
                    for target in targets {
                        lemma_edges.push((lemma_name.clone(), kind, target));
                    }
                }

                member_ids.push(lemma_id);
                lemmas.push(Lemma {
                    id: lemma_id,
                    name: lemma_name,
                    synset: synset_id,
                    syntactic_marker: lemma_record.syntactic_marker,
                    count: lemma_record.count,
                    lang: lemma_record.lang,
                    key: lemma_record.key,
                    frame_ids: lemma_record.frame_ids,
                    frame_strings: lemma_record.frame_strings,
                    relations: RelationTable::default(),
                });
            }

            for (kind, targets) in record.relations {
                for target in targets {
                    synset_edges.push((record.name.clone(), kind, target));
                }
            }

            synsets.push(Synset {
                id: synset_id,
                name: record.name,
                definition: record.definition,
                examples: record.examples,
                lexname: record.lexname,
                offset: record.offset,
                lemmas: member_ids,
                relations: RelationTable::default(),
            });
        }

        debug!("Synsets per part of speech: {:?}", pos_histogram(&synsets));

        let mut stats = BuildStats {
            synsets: synsets.len(),
            lemmas: lemmas.len(),
            ..BuildStats::default()
        };

        // Pass 2: resolve edges, mirroring where the kind has an inverse
        for (from, kind, to) in synset_edges {
            if kind.is_lemma_only() {
                return Err(LexisError::integrity(format!(
                    "relation {} only connects lemmas, found on synset {}",
                    kind, from
                )));
            }
            let source = resolve_synset(&index, &from, kind, &to)?;
            let target = resolve_synset(&index, &to, kind, &from)?;
            synsets[source.index()].relations.insert(kind, target);
            if !keep_one_way {
                if let Some(inverse) = kind.inverse() {
                    if synsets[target.index()].relations.insert(inverse, source) {
                        stats.mirrored_edges += 1;
                    }
                }
            }
        }

        for (from, kind, to) in lemma_edges {
            let source = resolve_lemma(&index, &from, kind, &to)?;
            let target = resolve_lemma(&index, &to, kind, &from)?;
            lemmas[source.index()].relations.insert(kind, target);
            if !keep_one_way {
                if let Some(inverse) = kind.inverse() {
                    if lemmas[target.index()].relations.insert(inverse, source) {
                        stats.mirrored_edges += 1;
                    }
                }
            }
        }

        // Pass 3: validation
        check_reciprocity(&synsets, |s| &s.relations, |s| s.name.to_string())?;
        check_reciprocity(&lemmas, |l| &l.relations, |l| l.name.to_string())?;
        check_taxonomy_acyclic(&synsets)?;

        stats.synset_edges = synsets.iter().map(|s| s.relations.edge_count()).sum();
        stats.lemma_edges = lemmas.iter().map(|l| l.relations.edge_count()).sum();

        info!(
            "Built graph store: {} synsets, {} lemmas, {} synset edges, {} lemma edges ({} mirrored)",
            stats.synsets, stats.lemmas, stats.synset_edges, stats.lemma_edges, stats.mirrored_edges
        );

        Ok(GraphStore::from_parts(synsets, lemmas, index, stats))
    }
}

fn resolve_synset(
    index: &LookupIndex,
    name: &SynsetName,
    kind: RelationKind,
    other: &SynsetName,
) -> Result<SynsetId> {
    index.synset_id(&name.to_string()).ok_or_else(|| {
        LexisError::integrity(format!(
            "{} edge between {} and {} references missing synset {}",
            kind, name, other, name
        ))
    })
}

fn resolve_lemma(
    index: &LookupIndex,
    name: &LemmaName,
    kind: RelationKind,
    other: &LemmaName,
) -> Result<LemmaId> {
    index.lemma_id(&name.to_string()).ok_or_else(|| {
        LexisError::integrity(format!(
            "{} edge between {} and {} references missing lemma {}",
            kind, name, other, name
        ))
    })
}

/// Every edge whose kind has an inverse must be mirrored.
fn check_reciprocity<N, K>(
    nodes: &[N],
    relations: impl Fn(&N) -> &RelationTable<K>,
    label: impl Fn(&N) -> String,
) -> Result<()>
where
    K: Copy + Eq + NodeIndex,
{
    for (position, node) in nodes.iter().enumerate() {
        for (kind, targets) in relations(node).iter() {
            let Some(inverse) = kind.inverse() else {
                continue;
            };
            for target in targets {
                let mirrored = relations(&nodes[target.position()])
                    .get(inverse)
                    .iter()
                    .any(|back| back.position() == position);
                if !mirrored {
                    return Err(LexisError::integrity(format!(
                        "{} -{}-> {} has no {} edge back",
                        label(node),
                        kind,
                        label(&nodes[target.position()]),
                        inverse
                    )));
                }
            }
        }
    }
    Ok(())
}

/// Kahn's algorithm over the upward (hypernym + instance-hypernym) edges.
fn check_taxonomy_acyclic(synsets: &[Synset]) -> Result<()> {
    let mut children_left = vec![0usize; synsets.len()];
    for synset in synsets {
        for kind in RelationKind::UPWARD {
            for parent in synset.relations.get(kind) {
                children_left[parent.index()] += 1;
            }
        }
    }

    // Start from leaves and peel upward.
    let mut ready: VecDeque<usize> = children_left
        .iter()
        .enumerate()
        .filter(|(_, count)| **count == 0)
        .map(|(i, _)| i)
        .collect();
    let mut peeled = 0;

    while let Some(i) = ready.pop_front() {
        peeled += 1;
        for kind in RelationKind::UPWARD {
            for parent in synsets[i].relations.get(kind) {
                let left = &mut children_left[parent.index()];
                *left -= 1;
                if *left == 0 {
                    ready.push_back(parent.index());
                }
            }
        }
    }

    if peeled < synsets.len() {
        let on_cycle = children_left
            .iter()
            .position(|count| *count > 0)
            .map(|i| synsets[i].name.to_string())
            .unwrap_or_default();
        return Err(LexisError::integrity(format!(
            "hypernym cycle through {}",
            on_cycle
        )));
    }

    Ok(())
}

/// Positional access shared by both id types, for validation passes.
trait NodeIndex {
    fn position(&self) -> usize;
}

impl NodeIndex for SynsetId {
    fn position(&self) -> usize {
        self.index()
    }
}

impl NodeIndex for LemmaId {
    fn position(&self) -> usize {
        self.index()
    }
}

/// Count of synsets per part of speech, for build logging.
fn pos_histogram(synsets: &[Synset]) -> HashMap<PartOfSpeech, usize> {
    let mut counts = HashMap::new();
    for synset in synsets {
        *counts.entry(synset.pos()).or_insert(0) += 1;
    }
    counts
}
