//! Memoized analysis results
//!
//! Results are keyed by (dataset, filter) and shared as `Arc` so repeated
//! requests for the same view (zone click, interval toggle) skip the
//! pipeline. The cache is bounded; once full, the oldest entry is evicted.
//! Callers own the cache and must `invalidate` a dataset whose events change.

use std::collections::VecDeque;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use fxhash::{FxHashMap, FxHasher};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::AnalysisConfig;
use crate::events::MatchEvent;
use crate::pipeline::{analyze, AnalysisFilter, MatchAnalysis};

/// Identity of an event list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct DatasetId(pub u64);

impl DatasetId {
    /// Content fingerprint of an event list over every serialized field,
    /// display names included. Equal lists always produce the same id.
    pub fn fingerprint(events: &[MatchEvent]) -> Self {
        let mut hasher = FxHasher::default();
        events.len().hash(&mut hasher);
        for ev in events {
            match serde_json::to_vec(ev) {
                Ok(bytes) => bytes.hash(&mut hasher),
                Err(_) => format!("{:?}", ev).hash(&mut hasher),
            }
        }
        DatasetId(hasher.finish())
    }
}

type CacheKey = (DatasetId, AnalysisFilter);

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
    pub evictions: u64,
}

#[derive(Debug)]
pub struct AnalysisCache {
    capacity: usize,
    entries: FxHashMap<CacheKey, Arc<MatchAnalysis>>,
    /// Insertion order, oldest first
    order: VecDeque<CacheKey>,
    stats: CacheStats,
}

impl AnalysisCache {
    pub const DEFAULT_CAPACITY: usize = 64;

    /// Capacity 0 is bumped to 1
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity: capacity.max(1),
            entries: FxHashMap::default(),
            order: VecDeque::new(),
            stats: CacheStats::default(),
        }
    }

    pub fn get(&self, dataset: DatasetId, filter: &AnalysisFilter) -> Option<Arc<MatchAnalysis>> {
        self.entries.get(&(dataset, filter.clone())).cloned()
    }

    /// Cached analysis for (dataset, filter), computing it on a miss.
    ///
    /// `config` is not part of the key; invalidate or clear after changing it.
    pub fn get_or_compute(
        &mut self,
        dataset: DatasetId,
        events: &[MatchEvent],
        filter: &AnalysisFilter,
        config: &AnalysisConfig,
    ) -> Arc<MatchAnalysis> {
        let key = (dataset, filter.clone());
        if let Some(hit) = self.entries.get(&key) {
            self.stats.hits += 1;
            return Arc::clone(hit);
        }

        self.stats.misses += 1;
        let analysis = Arc::new(analyze(events, filter, config));
        self.insert(key, Arc::clone(&analysis));
        analysis
    }

    fn insert(&mut self, key: CacheKey, value: Arc<MatchAnalysis>) {
        while self.entries.len() >= self.capacity {
            let Some(oldest) = self.order.pop_front() else {
                break;
            };
            if self.entries.remove(&oldest).is_some() {
                self.stats.evictions += 1;
                debug!(dataset = oldest.0 .0, "evicted cached analysis");
            }
        }
        self.order.push_back(key.clone());
        self.entries.insert(key, value);
    }

    /// Drop every entry for `dataset`. Returns how many were removed.
    pub fn invalidate(&mut self, dataset: DatasetId) -> usize {
        let before = self.entries.len();
        self.entries.retain(|(id, _), _| *id != dataset);
        self.order.retain(|(id, _)| *id != dataset);
        before - self.entries.len()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.order.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn stats(&self) -> CacheStats {
        self.stats
    }
}

impl Default for AnalysisCache {
    fn default() -> Self {
        Self::new(Self::DEFAULT_CAPACITY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::{EventBase, PassEvent, ShotEvent};
    use crate::interval::TimeInterval;

    fn events() -> Vec<MatchEvent> {
        vec![
            MatchEvent::Pass(PassEvent::new(EventBase::new(10, 70.0, 50.0, true), 90.0, 50.0)),
            MatchEvent::Tackle(EventBase::new(50, 30.0, 30.0, true)),
        ]
    }

    fn interval(s: &str) -> AnalysisFilter {
        AnalysisFilter::new().with_interval(TimeInterval::parse(s).unwrap())
    }

    #[test]
    fn test_hit_returns_same_arc() {
        let evs = events();
        let id = DatasetId::fingerprint(&evs);
        let mut cache = AnalysisCache::default();
        let config = AnalysisConfig::default();

        let first = cache.get_or_compute(id, &evs, &AnalysisFilter::new(), &config);
        let second = cache.get_or_compute(id, &evs, &AnalysisFilter::new(), &config);
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(cache.stats(), CacheStats { hits: 1, misses: 1, evictions: 0 });

        let other = cache.get_or_compute(id, &evs, &interval("40-50"), &config);
        assert!(!Arc::ptr_eq(&first, &other));
        assert_eq!(other.event_count, 0);
        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn test_oldest_entry_is_evicted() {
        let evs = events();
        let id = DatasetId(1);
        let config = AnalysisConfig::default();
        let mut cache = AnalysisCache::new(2);

        cache.get_or_compute(id, &evs, &interval("0-10"), &config);
        cache.get_or_compute(id, &evs, &interval("10-20"), &config);
        cache.get_or_compute(id, &evs, &interval("20-30"), &config);

        assert_eq!(cache.len(), 2);
        assert!(cache.get(id, &interval("0-10")).is_none());
        assert!(cache.get(id, &interval("20-30")).is_some());
        assert_eq!(cache.stats().evictions, 1);
    }

    #[test]
    fn test_invalidate_only_touches_one_dataset() {
        let evs = events();
        let config = AnalysisConfig::default();
        let mut cache = AnalysisCache::new(8);

        cache.get_or_compute(DatasetId(1), &evs, &AnalysisFilter::new(), &config);
        cache.get_or_compute(DatasetId(1), &evs, &interval("10-20"), &config);
        cache.get_or_compute(DatasetId(2), &evs, &AnalysisFilter::new(), &config);

        assert_eq!(cache.invalidate(DatasetId(1)), 2);
        assert_eq!(cache.len(), 1);
        assert!(cache.get(DatasetId(2), &AnalysisFilter::new()).is_some());

        cache.clear();
        assert!(cache.is_empty());
    }

    #[test]
    fn test_fingerprint_tracks_content() {
        let a = events();
        let mut b = events();
        assert_eq!(DatasetId::fingerprint(&a), DatasetId::fingerprint(&b));

        b[0].base_mut().x = 71.0;
        assert_ne!(DatasetId::fingerprint(&a), DatasetId::fingerprint(&b));
        assert_ne!(DatasetId::fingerprint(&a), DatasetId::fingerprint(&a[..1]));
    }

    #[test]
    fn test_renamed_player_gets_fresh_analysis() {
        let named = |name: &str| {
            let mut pass = PassEvent::new(EventBase::new(10, 70.0, 50.0, true).with_player("8"), 90.0, 50.0).with_receiver("9");
            pass.base.player_name = Some(name.to_string());
            vec![MatchEvent::Pass(pass)]
        };
        let old = named("Old");
        let new = named("New");
        let (old_id, new_id) = (DatasetId::fingerprint(&old), DatasetId::fingerprint(&new));
        assert_ne!(old_id, new_id);

        let mut cache = AnalysisCache::default();
        let config = AnalysisConfig::default();
        cache.get_or_compute(old_id, &old, &AnalysisFilter::new(), &config);
        let fresh = cache.get_or_compute(new_id, &new, &AnalysisFilter::new(), &config);
        assert_eq!(cache.stats().misses, 2);
        let passer = fresh.network.nodes.iter().find(|n| n.player == "8").unwrap();
        assert_eq!(passer.name.as_deref(), Some("New"));
    }

    #[test]
    fn test_fingerprint_covers_shot_target() {
        let shot = |ty: f64| {
            let mut s = ShotEvent::new(EventBase::new(30, 88.0, 50.0, true));
            s.target_y = ty;
            vec![MatchEvent::Shot(s)]
        };
        assert_ne!(DatasetId::fingerprint(&shot(48.0)), DatasetId::fingerprint(&shot(52.0)));
    }
}
