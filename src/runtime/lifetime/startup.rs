use crate::ai::{CompletionClient, OpenAiCompatibleClient};
use crate::cache::{ObjectCache, register::get_object_cache_plugin};
use crate::config::AppConfig;
use crate::services::auto_heal::{HealExecutor, HealQueue, INTERRUPTED_MESSAGE};
use crate::services::ConversationStore;
use crate::storage::Storage;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, warn};

pub struct StartupContext {
    pub storage: Arc<dyn Storage>,
    pub cache: Arc<dyn ObjectCache>,
    pub completion: Arc<dyn CompletionClient>,
    pub conversations: Arc<ConversationStore>,
    pub heal_queue: Arc<HealQueue>,
}

async fn build_cache(name: &str) -> Option<Arc<dyn ObjectCache>> {
    let Some(constructor) = get_object_cache_plugin(name) else {
        warn!("Cache backend '{}' not found in registry", name);
        return None;
    };
    match constructor().await {
        Ok(cache) => {
            warn!("Successfully created {} cache backend", name);
            Some(Arc::from(cache))
        }
        Err(e) => {
            warn!("Failed to create {} cache: {}", name, e);
            None
        }
    }
}

/// 创建缓存实例，配置的后端不可用时回退到 moka
async fn create_cache() -> Result<Arc<dyn ObjectCache>, Box<dyn std::error::Error>> {
    let cache_type = &AppConfig::get().cache.cache_type;

    warn!("Attempting to create {} cache backend", cache_type);
    if let Some(cache) = build_cache(cache_type).await {
        return Ok(cache);
    }

    if cache_type != "moka" {
        warn!("Falling back to Moka (in-memory) cache");
        if let Some(cache) = build_cache("moka").await {
            return Ok(cache);
        }
    }

    Err(format!("No cache backend available (tried: {cache_type})").into())
}

/// 上一进程遗留的 PENDING/EXECUTING 动作不会再被执行
async fn recover_heal_actions(storage: &Arc<dyn Storage>) {
    match storage.fail_unfinished_heal_actions(INTERRUPTED_MESSAGE).await {
        Ok(0) => debug!("No unfinished heal actions to recover"),
        Ok(count) => warn!("Marked {} unfinished heal action(s) as FAILED", count),
        Err(e) => warn!("Failed to recover unfinished heal actions: {}", e),
    }
}

/// 准备服务器启动的上下文
/// 包括存储、缓存、AI 客户端、会话存储和修复队列
pub async fn prepare_server_startup() -> StartupContext {
    rustls::crypto::ring::default_provider()
        .install_default()
        .expect("Failed to install rustls crypto provider");

    crate::cache::register_builtin_plugins();
    if cfg!(debug_assertions) {
        crate::cache::register::debug_object_cache_registry();
    }

    let config = AppConfig::get();

    let storage = crate::storage::create_storage()
        .await
        .expect("Failed to create storage backend");
    warn!("Storage backend initialized and migrations completed");

    recover_heal_actions(&storage).await;

    let cache = create_cache().await.expect("Failed to create cache");
    warn!("Cache backend initialized");

    let client = OpenAiCompatibleClient::new(&config.ai).expect("Failed to create AI client");
    if config.ai.api_key.is_empty() {
        warn!("AI api_key is empty, completion requests are sent without authorization");
    }
    let completion: Arc<dyn CompletionClient> = Arc::new(client);
    info!(
        "AI client configured: {} (model {})",
        config.ai.base_url, config.ai.model
    );

    let conversations = Arc::new(ConversationStore::from_config(
        cache.clone(),
        &config.assistant,
    ));

    let executor = HealExecutor::new(
        storage.clone(),
        cache.clone(),
        Duration::from_secs(config.heal.job_timeout_secs),
    );
    let heal_queue = Arc::new(HealQueue::start(executor, &config.heal));

    StartupContext {
        storage,
        cache,
        completion,
        conversations,
        heal_queue,
    }
}
