//! 法律助手会话存储
//!
//! 会话历史以 JSON 存放在对象缓存中（键 `legal_chat:{session}`），
//! 第一条消息始终是系统提示。同一进程内同一会话的对话轮次串行执行。

use std::sync::Arc;

use dashmap::DashMap;
use tokio::sync::{Mutex, OwnedMutexGuard};
use tracing::{debug, warn};

use super::prompts::LEGAL_ASSISTANT_PROMPT;
use crate::ai::CompletionClient;
use crate::cache::{CacheResult, ObjectCache};
use crate::config::AssistantConfig;
use crate::errors::Result;
use crate::models::assistant::entities::{ChatMessage, ChatRole};

const KEY_PREFIX: &str = "legal_chat:";
pub const DEFAULT_SESSION: &str = "default";

/// 一轮对话的结果
#[derive(Debug, Clone, PartialEq)]
pub struct Exchange {
    pub response: String,
    /// 不含系统提示的消息数
    pub history_length: usize,
}

pub struct ConversationStore {
    cache: Arc<dyn ObjectCache>,
    history_limit: usize,
    session_ttl: u64,
    locks: DashMap<String, Arc<Mutex<()>>>,
}

impl ConversationStore {
    pub fn new(cache: Arc<dyn ObjectCache>, history_limit: usize, session_ttl: u64) -> Self {
        Self {
            cache,
            history_limit: history_limit.max(1),
            session_ttl,
            locks: DashMap::new(),
        }
    }

    pub fn from_config(cache: Arc<dyn ObjectCache>, config: &AssistantConfig) -> Self {
        Self::new(cache, config.history_limit, config.session_ttl)
    }

    fn key(session_id: &str) -> String {
        format!("{KEY_PREFIX}{session_id}")
    }

    async fn lock_session(&self, session_id: &str) -> SessionTurn<'_> {
        let lock = self
            .locks
            .entry(session_id.to_string())
            .or_insert_with(|| Arc::new(Mutex::new(())))
            .clone();
        SessionTurn {
            locks: &self.locks,
            session_id: session_id.to_string(),
            guard: Some(lock.lock_owned().await),
        }
    }

    /// 当前持有或等待中的会话锁数量
    pub fn active_sessions(&self) -> usize {
        self.locks.len()
    }

    /// 读取会话历史；不存在或无法解析时返回只含系统提示的新历史
    pub async fn load(&self, session_id: &str) -> Vec<ChatMessage> {
        let seeded = || vec![ChatMessage::system(LEGAL_ASSISTANT_PROMPT)];

        match self.cache.get_raw(&Self::key(session_id)).await {
            CacheResult::Found(raw) => match serde_json::from_str::<Vec<ChatMessage>>(&raw) {
                Ok(history) if history.first().is_some_and(|m| m.role == ChatRole::System) => {
                    history
                }
                Ok(_) => seeded(),
                Err(e) => {
                    warn!("Discarding unreadable history for session {}: {}", session_id, e);
                    seeded()
                }
            },
            CacheResult::NotFound | CacheResult::ExistsButNoValue => seeded(),
        }
    }

    async fn save(&self, session_id: &str, history: &[ChatMessage]) -> Result<()> {
        let raw = serde_json::to_string(history)?;
        self.cache
            .insert_raw(Self::key(session_id), raw, self.session_ttl)
            .await;
        Ok(())
    }

    /// 保留系统提示和最近 `history_limit` 条消息
    pub fn cap(&self, history: &mut Vec<ChatMessage>) {
        let overflow = history.len().saturating_sub(self.history_limit + 1);
        if overflow > 0 {
            history.drain(1..1 + overflow);
        }
    }

    /// 执行一轮对话：追加用户消息、请求补全、追加回复、截断并保存
    ///
    /// 补全失败时不保存本轮的用户消息。
    pub async fn exchange(
        &self,
        session_id: &str,
        message: &str,
        client: &dyn CompletionClient,
    ) -> Result<Exchange> {
        let _guard = self.lock_session(session_id).await;

        let mut history = self.load(session_id).await;
        history.push(ChatMessage::user(message));

        let response = client.complete(&history).await?;
        history.push(ChatMessage::assistant(response.clone()));

        self.cap(&mut history);
        self.save(session_id, &history).await?;

        debug!(
            "Session {} now holds {} message(s)",
            session_id,
            history.len() - 1
        );

        Ok(Exchange {
            response,
            history_length: history.len() - 1,
        })
    }

    /// 清除指定会话，未指定时清除全部会话
    pub async fn clear(&self, session_id: Option<&str>) {
        match session_id {
            Some(session_id) => self.cache.remove(&Self::key(session_id)).await,
            None => self.cache.remove_by_prefix(KEY_PREFIX).await,
        }
    }
}

/// 一轮对话持有的会话锁
///
/// 释放时若没有其他轮次持有或等待同一把锁，就把它从表中移除。
struct SessionTurn<'a> {
    locks: &'a DashMap<String, Arc<Mutex<()>>>,
    session_id: String,
    guard: Option<OwnedMutexGuard<()>>,
}

impl Drop for SessionTurn<'_> {
    fn drop(&mut self) {
        self.guard.take();
        // 只剩表中一份引用时才能移除；entry() 与 remove_if 在同一分片锁下互斥
        self.locks
            .remove_if(&self.session_id, |_, lock| Arc::strong_count(lock) == 1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::ImageInput;
    use crate::cache::object_cache::moka::MokaCacheWrapper;
    use crate::errors::GestaoError;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// 按序号回复并记录收到的消息数
    struct CountingClient {
        calls: AtomicUsize,
        seen_lengths: std::sync::Mutex<Vec<usize>>,
    }

    impl CountingClient {
        fn new() -> Self {
            Self {
                calls: AtomicUsize::new(0),
                seen_lengths: std::sync::Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl CompletionClient for CountingClient {
        async fn complete(&self, messages: &[ChatMessage]) -> Result<String> {
            self.seen_lengths.lock().unwrap().push(messages.len());
            let n = self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(format!("resposta {n}"))
        }

        async fn complete_vision(&self, _prompt: &str, _image: &ImageInput) -> Result<String> {
            Err(GestaoError::external_service("unsupported"))
        }
    }

    struct FailingClient;

    #[async_trait]
    impl CompletionClient for FailingClient {
        async fn complete(&self, _messages: &[ChatMessage]) -> Result<String> {
            Err(GestaoError::external_service("down"))
        }

        async fn complete_vision(&self, _prompt: &str, _image: &ImageInput) -> Result<String> {
            Err(GestaoError::external_service("down"))
        }
    }

    fn store(limit: usize) -> ConversationStore {
        ConversationStore::new(Arc::new(MokaCacheWrapper::with_settings(100, 60)), limit, 0)
    }

    #[test]
    fn test_cap_keeps_system_prompt_and_tail() {
        let store = store(4);
        let mut history = vec![ChatMessage::system("s")];
        for i in 0..7 {
            history.push(ChatMessage::user(format!("m{i}")));
        }

        store.cap(&mut history);

        assert_eq!(history.len(), 5);
        assert_eq!(history[0], ChatMessage::system("s"));
        assert_eq!(history[1].content, "m3");
        assert_eq!(history[4].content, "m6");
    }

    #[tokio::test]
    async fn test_exchange_seeds_and_caps_history() {
        let store = store(20);
        let client = CountingClient::new();

        let first = store.exchange("s1", "olá", &client).await.unwrap();
        assert_eq!(first.response, "resposta 0");
        assert_eq!(first.history_length, 2);

        for i in 0..15 {
            store
                .exchange("s1", &format!("pergunta {i}"), &client)
                .await
                .unwrap();
        }

        let history = store.load("s1").await;
        assert_eq!(history.len(), 21);
        assert_eq!(history[0].role, ChatRole::System);
        assert_eq!(history[0].content, LEGAL_ASSISTANT_PROMPT);
        assert_eq!(history[20].content, "resposta 15");

        // 发送给模型的消息数不超过 系统提示 + 上限 + 新消息
        let seen = client.seen_lengths.lock().unwrap().clone();
        assert_eq!(seen[0], 2);
        assert!(seen.iter().all(|len| *len <= 22));
    }

    #[tokio::test]
    async fn test_sessions_are_isolated_and_cleared() {
        let store = store(20);
        let client = CountingClient::new();

        store.exchange("a", "1", &client).await.unwrap();
        store.exchange("b", "2", &client).await.unwrap();

        store.clear(Some("a")).await;
        assert_eq!(store.load("a").await.len(), 1);
        assert_eq!(store.load("b").await.len(), 3);

        store.clear(None).await;
        assert_eq!(store.load("b").await.len(), 1);
    }

    #[tokio::test]
    async fn test_failed_completion_is_not_persisted() {
        let store = store(20);

        let err = store.exchange("s", "olá", &FailingClient).await.unwrap_err();
        assert!(matches!(err, GestaoError::ExternalService(_)));
        assert_eq!(store.load("s").await.len(), 1);
    }

    #[tokio::test]
    async fn test_concurrent_turns_are_serialized() {
        let store = Arc::new(store(50));
        let client = Arc::new(CountingClient::new());

        let mut handles = Vec::new();
        for i in 0..8 {
            let store = store.clone();
            let client = client.clone();
            handles.push(tokio::spawn(async move {
                store
                    .exchange("shared", &format!("m{i}"), client.as_ref())
                    .await
                    .unwrap()
            }));
        }
        for handle in handles {
            handle.await.unwrap();
        }

        // 每轮都保存成功：8 条用户消息 + 8 条回复
        assert_eq!(store.load("shared").await.len(), 17);
        assert_eq!(store.active_sessions(), 0);
    }

    #[tokio::test]
    async fn test_session_locks_are_released_after_turns() {
        let store = store(20);
        let client = CountingClient::new();

        for i in 0..5 {
            store
                .exchange(&format!("sessao-{i}"), "olá", &client)
                .await
                .unwrap();
        }
        assert_eq!(store.active_sessions(), 0);

        store.exchange("falha", "olá", &FailingClient).await.unwrap_err();
        assert_eq!(store.active_sessions(), 0);

        // 历史仍在缓存中
        assert_eq!(store.load("sessao-3").await.len(), 3);
    }
}
