//! History-keyed profile cache

use dashmap::DashMap;
use shared::models::ConsumptionInterval;

use crate::analytics::TrendAnalysis;

/// Intermediate per-item figures shared by the downstream components
#[derive(Debug, Clone)]
pub(crate) struct ItemProfile {
    pub intervals: Vec<ConsumptionInterval>,
    pub trend: TrendAnalysis,
    /// Latest counted quantity, 0.0 with no readings
    pub current_stock: f64,
    /// Cumulative consumed quantity over the observed window
    pub total_consumed: f64,
}

#[derive(Debug, Clone)]
struct CachedProfile {
    latest_ts: Option<i64>,
    record_count: usize,
    profile: ItemProfile,
}

/// Cache of per-item profiles keyed by history state
///
/// A profile is a pure function of an item's history, so it stays
/// valid until that history changes. The validity key is the pair
/// (latest record timestamp, record count): an append carrying an old
/// or duplicate timestamp leaves the maximum unchanged but still bumps
/// the count.
#[derive(Debug, Default)]
pub(crate) struct ProfileCache {
    entries: DashMap<i64, CachedProfile>,
}

impl ProfileCache {
    pub fn new() -> Self {
        Self {
            entries: DashMap::new(),
        }
    }

    pub fn get(
        &self,
        item_id: i64,
        latest_ts: Option<i64>,
        record_count: usize,
    ) -> Option<ItemProfile> {
        self.entries
            .get(&item_id)
            .filter(|entry| entry.latest_ts == latest_ts && entry.record_count == record_count)
            .map(|entry| entry.profile.clone())
    }

    pub fn insert(
        &self,
        item_id: i64,
        latest_ts: Option<i64>,
        record_count: usize,
        profile: ItemProfile,
    ) {
        self.entries.insert(
            item_id,
            CachedProfile {
                latest_ts,
                record_count,
                profile,
            },
        );
    }
}
