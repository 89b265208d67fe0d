use async_trait::async_trait;

/// 缓存查询结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CacheResult<T> {
    Found(T),
    NotFound,
    /// 后端不可用或读取失败
    ExistsButNoValue,
}

/// 字符串键值对象缓存
///
/// 值统一以 JSON 文本存储，序列化由调用方负责。
#[async_trait]
pub trait ObjectCache: Send + Sync {
    async fn get_raw(&self, key: &str) -> CacheResult<String>;

    /// `ttl` 为 0 时使用后端默认 TTL
    async fn insert_raw(&self, key: String, value: String, ttl: u64);

    async fn remove(&self, key: &str);

    /// 删除所有以 `prefix` 开头的键
    async fn remove_by_prefix(&self, prefix: &str);

    async fn invalidate_all(&self);
}
