use std::collections::HashMap;
use std::sync::RwLock;
use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

/// Read-query cache keyed by (operation, parameters).
///
/// A repeated query inside the staleness window reuses the stored
/// result instead of touching the network. Mutations call
/// [`QueryCache::invalidate`] with the operations they affect; each
/// named operation is dropped (and its invalidation counter bumped)
/// exactly once per call.
pub struct QueryCache {
    staleness: chrono::Duration,
    entries: RwLock<HashMap<String, CacheEntry>>,
    invalidations: RwLock<HashMap<String, u64>>,
}

struct CacheEntry {
    operation: String,
    value: serde_json::Value,
    stored_at: DateTime<Utc>,
}

impl QueryCache {
    pub fn new(staleness: Duration) -> Self {
        Self {
            staleness: chrono::Duration::from_std(staleness)
                .unwrap_or_else(|_| chrono::Duration::seconds(30)),
            entries: RwLock::new(HashMap::new()),
            invalidations: RwLock::new(HashMap::new()),
        }
    }

    fn key(operation: &str, params: &str) -> String {
        format!("{}?{}", operation, params)
    }

    /// Fresh cached value for (operation, params), if any.
    pub fn get<T: DeserializeOwned>(&self, operation: &str, params: &str) -> Option<T> {
        let entries = self.entries.read().ok()?;
        let entry = entries.get(&Self::key(operation, params))?;
        if Utc::now() - entry.stored_at > self.staleness {
            return None;
        }
        serde_json::from_value(entry.value.clone()).ok()
    }

    pub fn put<T: Serialize>(&self, operation: &str, params: &str, value: &T) {
        let Ok(value) = serde_json::to_value(value) else {
            return;
        };
        if let Ok(mut entries) = self.entries.write() {
            entries.insert(
                Self::key(operation, params),
                CacheEntry {
                    operation: operation.to_string(),
                    value,
                    stored_at: Utc::now(),
                },
            );
        }
    }

    /// Drop every cached result for the named operations, regardless of
    /// parameters.
    pub fn invalidate(&self, operations: &[&str]) {
        if let Ok(mut entries) = self.entries.write() {
            entries.retain(|_, entry| !operations.contains(&entry.operation.as_str()));
        }
        if let Ok(mut counters) = self.invalidations.write() {
            for op in operations {
                *counters.entry((*op).to_string()).or_insert(0) += 1;
                debug!(operation = *op, "query cache invalidated");
            }
        }
    }

    /// How many times an operation has been invalidated since startup.
    pub fn invalidation_count(&self, operation: &str) -> u64 {
        self.invalidations
            .read()
            .ok()
            .and_then(|counters| counters.get(operation).copied())
            .unwrap_or(0)
    }

    pub fn clear(&self) {
        if let Ok(mut entries) = self.entries.write() {
            entries.clear();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_entry_is_reused() {
        let cache = QueryCache::new(Duration::from_secs(30));
        cache.put("medicines", "search=para", &vec!["Paracetamol".to_string()]);

        let hit: Option<Vec<String>> = cache.get("medicines", "search=para");
        assert_eq!(hit, Some(vec!["Paracetamol".to_string()]));

        // Different parameters are a different key.
        let miss: Option<Vec<String>> = cache.get("medicines", "search=ibu");
        assert!(miss.is_none());
    }

    #[test]
    fn stale_entry_is_ignored() {
        let cache = QueryCache::new(Duration::from_secs(0));
        cache.put("stock-levels", "", &42_u32);

        std::thread::sleep(Duration::from_millis(5));
        let hit: Option<u32> = cache.get("stock-levels", "");
        assert!(hit.is_none());
    }

    #[test]
    fn invalidate_drops_all_params_for_operation() {
        let cache = QueryCache::new(Duration::from_secs(30));
        cache.put("medicines", "search=a", &1_u32);
        cache.put("medicines", "search=b", &2_u32);
        cache.put("alerts", "", &3_u32);

        cache.invalidate(&["medicines"]);

        assert!(cache.get::<u32>("medicines", "search=a").is_none());
        assert!(cache.get::<u32>("medicines", "search=b").is_none());
        assert_eq!(cache.get::<u32>("alerts", ""), Some(3));
        assert_eq!(cache.invalidation_count("medicines"), 1);
        assert_eq!(cache.invalidation_count("alerts"), 0);
    }
}
