use std::collections::HashMap;
use std::time::{Duration, Instant};

use parking_lot::Mutex;
use redis::Client;
use snafu::ResultExt;

use crate::errors::{CacheSnafu, CustomResult};
use crate::modules::redis::Redis;

/// # response cache
/// a keyed store of rendered responses. keys are full request uris,
/// query included. implementations must be safe to share between requests.
pub trait ResponseCache: Send + Sync {
    /// the payload stored under `key`, unless it expired
    fn get(&self, key: &str) -> CustomResult<Option<String>>;

    fn put(&self, key: &str, payload: String) -> CustomResult<()>;
}

#[derive(Debug, Clone)]
struct CacheHit {
    payload: String,
    valid_until: Instant,
}

/// In process cache. Every lookup and store takes the same lock.
pub struct MemoryCache {
    ttl: Duration,
    entries: Mutex<HashMap<String, CacheHit>>,
}

impl MemoryCache {
    pub fn new(ttl: Duration) -> MemoryCache {
        MemoryCache {
            ttl,
            entries: Mutex::new(HashMap::new()),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl ResponseCache for MemoryCache {
    fn get(&self, key: &str) -> CustomResult<Option<String>> {
        let mut entries = self.entries.lock();

        match entries.get(key) {
            Some(hit) if hit.valid_until > Instant::now() => Ok(Some(hit.payload.clone())),
            Some(_) => {
                entries.remove(key);
                Ok(None)
            }
            None => Ok(None),
        }
    }

    fn put(&self, key: &str, payload: String) -> CustomResult<()> {
        let now = Instant::now();
        let hit = CacheHit {
            payload,
            valid_until: now + self.ttl,
        };

        let mut entries = self.entries.lock();
        // keys carry the query string, so most of them are never read again
        entries.retain(|_, e| e.valid_until > now);
        entries.insert(key.to_string(), hit);
        Ok(())
    }
}

/// Cache shared between instances through redis. expiry is left to redis.
pub struct RedisCache {
    client: Client,
    ttl: Duration,
}

impl RedisCache {
    pub fn new(redis_url: &str, ttl: Duration) -> CustomResult<RedisCache> {
        let client = Client::open(redis_url).context(CacheSnafu)?;

        Ok(RedisCache { client, ttl })
    }
}

impl ResponseCache for RedisCache {
    fn get(&self, key: &str) -> CustomResult<Option<String>> {
        let conn = &mut Redis::connect(&self.client).context(CacheSnafu)?;

        Redis::get_data::<&str, String>(conn, key).context(CacheSnafu)
    }

    fn put(&self, key: &str, payload: String) -> CustomResult<()> {
        let conn = &mut Redis::connect(&self.client).context(CacheSnafu)?;
        // SETEX rejects a ttl of 0
        let seconds = self.ttl.as_secs().max(1) as usize;

        Redis::set_data_ex(conn, key, payload, seconds).context(CacheSnafu)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::thread;

    use super::*;

    #[test]
    fn stored_payload_is_returned() {
        let cache = MemoryCache::new(Duration::from_secs(300));

        cache.put("/competitions/cup/ranking", "{}".to_string()).unwrap();

        assert_eq!(cache.get("/competitions/cup/ranking").unwrap().as_deref(), Some("{}"));
        assert_eq!(cache.get("/competitions/cup/csv").unwrap(), None);
    }

    #[test]
    fn query_strings_are_part_of_the_key() {
        let cache = MemoryCache::new(Duration::from_secs(300));

        cache.put("/competitions/cup/ranking?page=1", "one".to_string()).unwrap();

        assert_eq!(cache.get("/competitions/cup/ranking").unwrap(), None);
        assert_eq!(cache.get("/competitions/cup/ranking?page=1").unwrap().as_deref(), Some("one"));
    }

    #[test]
    fn expired_entries_are_evicted() {
        let cache = MemoryCache::new(Duration::ZERO);

        cache.put("/competitions/cup/ranking", "{}".to_string()).unwrap();

        assert_eq!(cache.get("/competitions/cup/ranking").unwrap(), None);
        assert!(cache.is_empty());
    }

    #[test]
    fn expired_entries_of_other_keys_are_dropped_on_store() {
        let cache = MemoryCache::new(Duration::ZERO);

        for n in 0..10_000 {
            cache.put(&format!("/competitions/cup/ranking?x={}", n), "{}".to_string()).unwrap();
        }
        cache.put("/competitions/cup/csv", "custId,name\n".to_string()).unwrap();
        assert_eq!(cache.get("/competitions/cup/csv").unwrap(), None);

        assert!(cache.is_empty());
    }

    #[test]
    fn live_entries_survive_a_store() {
        let cache = MemoryCache::new(Duration::from_secs(300));

        cache.put("/competitions/cup/ranking?x=1", "one".to_string()).unwrap();
        cache.put("/competitions/cup/ranking?x=2", "two".to_string()).unwrap();

        assert_eq!(cache.len(), 2);
        assert_eq!(cache.get("/competitions/cup/ranking?x=1").unwrap().as_deref(), Some("one"));
    }

    #[test]
    fn concurrent_writers_keep_every_key() {
        let cache = Arc::new(MemoryCache::new(Duration::from_secs(300)));

        let handles: Vec<_> = (0..8)
            .map(|worker| {
                let cache = Arc::clone(&cache);
                thread::spawn(move || {
                    for n in 0..50 {
                        let key = format!("/competitions/{}/ranking?n={}", worker, n);
                        cache.put(&key, key.clone()).unwrap();
                        assert_eq!(cache.get(&key).unwrap(), Some(key));
                    }
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(cache.len(), 8 * 50);
    }
}
