use async_trait::async_trait;
use moka::Expiry;
use moka::future::Cache;
use std::time::{Duration, Instant};
use tracing::{debug, error};

use crate::cache::{CacheResult, ObjectCache};
use crate::config::AppConfig;
use crate::declare_object_cache_plugin;

declare_object_cache_plugin!("moka", MokaCacheWrapper);

/// 缓存值及其存活时间
#[derive(Clone)]
struct Entry {
    value: String,
    ttl: Duration,
}

/// 按条目各自的 TTL 过期；更新时重新计时
struct PerEntryTtl;

impl Expiry<String, Entry> for PerEntryTtl {
    fn expire_after_create(
        &self,
        _key: &String,
        entry: &Entry,
        _created_at: Instant,
    ) -> Option<Duration> {
        Some(entry.ttl)
    }

    fn expire_after_update(
        &self,
        _key: &String,
        entry: &Entry,
        _updated_at: Instant,
        _duration_until_expiry: Option<Duration>,
    ) -> Option<Duration> {
        Some(entry.ttl)
    }
}

pub struct MokaCacheWrapper {
    inner: Cache<String, Entry>,
    default_ttl: Duration,
}

impl MokaCacheWrapper {
    pub fn new() -> Result<Self, String> {
        let config = AppConfig::get();
        Ok(Self::with_settings(
            config.cache.memory.max_capacity,
            config.cache.default_ttl,
        ))
    }

    /// 指定容量与默认 TTL（秒）构建；`insert_raw` 的 ttl 为 0 时使用默认值
    pub fn with_settings(max_capacity: u64, ttl_secs: u64) -> Self {
        let inner = Cache::builder()
            .max_capacity(max_capacity)
            .expire_after(PerEntryTtl)
            .support_invalidation_closures()
            .build();

        debug!(
            "MokaCacheWrapper initialized with max capacity: {}, default TTL: {}s",
            max_capacity, ttl_secs
        );
        Self {
            inner,
            default_ttl: Duration::from_secs(ttl_secs),
        }
    }
}

#[async_trait]
impl ObjectCache for MokaCacheWrapper {
    async fn get_raw(&self, key: &str) -> CacheResult<String> {
        if let Some(entry) = self.inner.get(key).await {
            debug!("Successfully retrieved key: {}", key);
            CacheResult::Found(entry.value)
        } else {
            debug!("Key not found in cache: {}", key);
            CacheResult::NotFound
        }
    }

    async fn insert_raw(&self, key: String, value: String, ttl: u64) {
        let ttl = if ttl == 0 {
            self.default_ttl
        } else {
            Duration::from_secs(ttl)
        };
        self.inner.insert(key, Entry { value, ttl }).await;
    }

    async fn remove(&self, key: &str) {
        self.inner.invalidate(key).await;
    }

    async fn remove_by_prefix(&self, prefix: &str) {
        let prefix = prefix.to_string();
        if let Err(e) = self
            .inner
            .invalidate_entries_if(move |key, _| key.starts_with(&prefix))
        {
            error!("Failed to invalidate entries by prefix: {}", e);
        }
        self.inner.run_pending_tasks().await;
    }

    async fn invalidate_all(&self) {
        self.inner.invalidate_all();
        self.inner.run_pending_tasks().await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_insert_get_remove() {
        let cache = MokaCacheWrapper::with_settings(100, 60);
        cache.insert_raw("a".into(), "1".into(), 0).await;
        assert_eq!(cache.get_raw("a").await, CacheResult::Found("1".into()));

        cache.remove("a").await;
        assert_eq!(cache.get_raw("a").await, CacheResult::NotFound);
    }

    #[tokio::test]
    async fn test_remove_by_prefix_keeps_other_keys() {
        let cache = MokaCacheWrapper::with_settings(100, 60);
        cache.insert_raw("chat:1".into(), "x".into(), 0).await;
        cache.insert_raw("chat:2".into(), "y".into(), 0).await;
        cache.insert_raw("other".into(), "z".into(), 0).await;

        cache.remove_by_prefix("chat:").await;

        assert_eq!(cache.get_raw("chat:1").await, CacheResult::NotFound);
        assert_eq!(cache.get_raw("chat:2").await, CacheResult::NotFound);
        assert_eq!(cache.get_raw("other").await, CacheResult::Found("z".into()));
    }

    #[tokio::test]
    async fn test_per_entry_ttl_overrides_default() {
        let cache = MokaCacheWrapper::with_settings(100, 1);
        cache.insert_raw("curto".into(), "a".into(), 0).await;
        cache.insert_raw("longo".into(), "b".into(), 3600).await;

        tokio::time::sleep(Duration::from_millis(1500)).await;

        assert_eq!(cache.get_raw("curto").await, CacheResult::NotFound);
        assert_eq!(cache.get_raw("longo").await, CacheResult::Found("b".into()));
    }

    #[tokio::test]
    async fn test_invalidate_all() {
        let cache = MokaCacheWrapper::with_settings(100, 60);
        cache.insert_raw("a".into(), "1".into(), 0).await;
        cache.invalidate_all().await;
        assert_eq!(cache.get_raw("a").await, CacheResult::NotFound);
    }
}
