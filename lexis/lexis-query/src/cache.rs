//! Memoized per-synset depths.
//!
//! Depth queries are pure functions of the immutable store, so caching only
//! trades memory for speed. Entries are computed at most a few times under
//! contention and never invalidated.

use dashmap::DashMap;
use lexis_graph::SynsetId;
use serde::Serialize;
use std::sync::atomic::{AtomicU64, Ordering};

/// Min/max depth memo shared by every query on one graph.
#[derive(Debug)]
pub struct DepthCache {
    enabled: bool,
    min: DashMap<SynsetId, usize>,
    max: DashMap<SynsetId, usize>,
    hits: AtomicU64,
    misses: AtomicU64,
}

impl DepthCache {
    pub fn new(enabled: bool) -> Self {
        Self {
            enabled,
            min: DashMap::new(),
            max: DashMap::new(),
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
        }
    }

    pub fn min_depth(&self, id: SynsetId) -> Option<usize> {
        self.lookup(&self.min, id)
    }

    pub fn max_depth(&self, id: SynsetId) -> Option<usize> {
        self.lookup(&self.max, id)
    }

    pub fn store_min_depth(&self, id: SynsetId, depth: usize) {
        if self.enabled {
            self.min.insert(id, depth);
        }
    }

    pub fn store_max_depth(&self, id: SynsetId, depth: usize) {
        if self.enabled {
            self.max.insert(id, depth);
        }
    }

    fn lookup(&self, map: &DashMap<SynsetId, usize>, id: SynsetId) -> Option<usize> {
        if !self.enabled {
            return None;
        }
        // Copy out so no shard guard outlives this call
        let found = map.get(&id).map(|entry| *entry);
        match found {
            Some(_) => self.hits.fetch_add(1, Ordering::Relaxed),
            None => self.misses.fetch_add(1, Ordering::Relaxed),
        };
        found
    }

    /// Drop every memoized depth.
    pub fn clear(&self) {
        self.min.clear();
        self.max.clear();
        self.hits.store(0, Ordering::Relaxed);
        self.misses.store(0, Ordering::Relaxed);
    }

    pub fn stats(&self) -> CacheStats {
        CacheStats {
            enabled: self.enabled,
            min_entries: self.min.len(),
            max_entries: self.max.len(),
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
        }
    }
}

impl Default for DepthCache {
    fn default() -> Self {
        Self::new(true)
    }
}

/// Cache statistics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CacheStats {
    pub enabled: bool,
    pub min_entries: usize,
    pub max_entries: usize,
    pub hits: u64,
    pub misses: u64,
}
