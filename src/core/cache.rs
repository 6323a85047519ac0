//! Short-lived memoization of patient lookups
//!
//! Entries are keyed by `authority/value` and expire after a fixed TTL.
//! Only found patients are ever stored. Expired entries are evicted lazily on
//! read or by [`PatientCache::purge_expired`]; there is no background janitor.

use crate::domain::Patient;
use dashmap::DashMap;
use std::time::Duration;
use tokio::time::Instant;

struct CacheEntry {
    patient: Patient,
    /// `None` when the TTL reaches past the clock's range
    expires_at: Option<Instant>,
}

impl CacheEntry {
    fn is_live(&self, now: Instant) -> bool {
        self.expires_at.map_or(true, |expires_at| expires_at > now)
    }
}

/// Thread-safe TTL cache of patients
///
/// One instance is shared by all callers; no external locking is needed.
/// A zero TTL disables the cache: reads always miss and writes are ignored.
pub struct PatientCache {
    entries: DashMap<String, CacheEntry>,
    ttl: Duration,
}

impl PatientCache {
    /// Create a cache whose entries live for `ttl`
    pub fn new(ttl: Duration) -> Self {
        Self {
            entries: DashMap::new(),
            ttl,
        }
    }

    /// Create a cache with a TTL given in minutes
    pub fn from_minutes(minutes: u64) -> Self {
        Self::new(Duration::from_secs(minutes.saturating_mul(60)))
    }

    /// Cache key for an authority code and identifier value
    pub fn key(authority: &str, value: &str) -> String {
        format!("{authority}/{value}")
    }

    pub fn is_enabled(&self) -> bool {
        !self.ttl.is_zero()
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Fetch an unexpired entry
    pub fn get(&self, key: &str) -> Option<Patient> {
        if !self.is_enabled() {
            return None;
        }

        let now = Instant::now();
        match self.entries.get(key) {
            Some(entry) if entry.is_live(now) => return Some(entry.patient.clone()),
            Some(_) => {}
            None => return None,
        }

        // The read guard is released above; removing while holding it would deadlock.
        self.entries.remove_if(key, |_, entry| !entry.is_live(now));
        None
    }

    /// Store a found patient under `key`, replacing any previous entry
    pub fn insert(&self, key: impl Into<String>, patient: Patient) {
        if !self.is_enabled() {
            return;
        }

        self.entries.insert(
            key.into(),
            CacheEntry {
                patient,
                expires_at: Instant::now().checked_add(self.ttl),
            },
        );
    }

    /// Remove every expired entry, returning how many were removed
    pub fn purge_expired(&self) -> usize {
        let before = self.entries.len();
        let now = Instant::now();
        self.entries.retain(|_, entry| entry.is_live(now));
        before.saturating_sub(self.entries.len())
    }

    /// Number of stored entries, including expired ones not yet evicted
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&self) {
        self.entries.clear();
    }
}
