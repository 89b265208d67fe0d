//! 自动修复任务队列
//!
//! 请求处理只负责入队，由后台调度任务在信号量限制下执行，每个任务有超时。
//! 状态通过条件更新推进，同一动作最多执行一次。

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{Notify, Semaphore, mpsc};
use tokio::task::JoinHandle;
use tracing::{debug, error, info, warn};

use crate::cache::ObjectCache;
use crate::config::HealConfig;
use crate::errors::{GestaoError, Result};
use crate::models::auto_heal::entities::{HealActionType, HealStatus};
use crate::storage::Storage;

/// 启动时回收上一进程遗留动作使用的结果消息
pub const INTERRUPTED_MESSAGE: &str = "Ação interrompida por reinício do servidor";

#[derive(Debug, Clone)]
pub struct HealJob {
    pub acao_id: String,
    pub tipo: HealActionType,
}

/// 执行单个修复动作
#[derive(Clone)]
pub struct HealExecutor {
    storage: Arc<dyn Storage>,
    cache: Arc<dyn ObjectCache>,
    timeout: Duration,
}

impl HealExecutor {
    pub fn new(storage: Arc<dyn Storage>, cache: Arc<dyn ObjectCache>, timeout: Duration) -> Self {
        Self {
            storage,
            cache,
            timeout,
        }
    }

    async fn perform(&self, tipo: HealActionType) -> Result<String> {
        let mensagem = match tipo {
            HealActionType::ClearCache => {
                self.cache.invalidate_all().await;
                "Cache limpo com sucesso"
            }
            HealActionType::RestartService => "Serviços reiniciados",
            HealActionType::OptimizeDb => "Banco de dados otimizado",
            HealActionType::FixConfig => "Configurações corrigidas",
            HealActionType::CheckDependencies => "Dependências verificadas",
        };
        Ok(mensagem.to_string())
    }

    /// PENDING → EXECUTING → SUCCESS | FAILED
    ///
    /// 动作已被其他执行者接手时返回 `None`。
    pub async fn run(&self, job: &HealJob) -> Result<Option<HealStatus>> {
        let claimed = self
            .storage
            .transition_heal_action(&job.acao_id, HealStatus::Pending, HealStatus::Executing, None)
            .await?;
        if !claimed {
            debug!("Heal action {} is no longer pending, skipping", job.acao_id);
            return Ok(None);
        }

        let (status, mensagem) = match tokio::time::timeout(self.timeout, self.perform(job.tipo)).await
        {
            Ok(Ok(mensagem)) => (HealStatus::Success, mensagem),
            Ok(Err(e)) => {
                error!("Heal action {} ({}) failed: {}", job.acao_id, job.tipo, e);
                (HealStatus::Failed, e.message().to_string())
            }
            Err(_) => {
                error!(
                    "Heal action {} ({}) timed out after {}s",
                    job.acao_id,
                    job.tipo,
                    self.timeout.as_secs()
                );
                (HealStatus::Failed, "Tempo limite de execução excedido".to_string())
            }
        };

        self.storage
            .transition_heal_action(&job.acao_id, HealStatus::Executing, status, Some(mensagem))
            .await?;

        info!("Heal action {} ({}) finished: {}", job.acao_id, job.tipo, status);
        Ok(Some(status))
    }
}

pub struct HealQueue {
    sender: mpsc::Sender<HealJob>,
    shutdown: Arc<Notify>,
    dispatcher: std::sync::Mutex<Option<JoinHandle<()>>>,
}

impl HealQueue {
    /// 创建队列并启动调度任务
    pub fn start(executor: HealExecutor, config: &HealConfig) -> Self {
        let (sender, receiver) = mpsc::channel(config.queue_capacity.max(1));
        let semaphore = Arc::new(Semaphore::new(config.max_concurrent.max(1)));
        let shutdown = Arc::new(Notify::new());

        info!(
            "Starting heal queue (capacity {}, max {} concurrent, timeout {}s)",
            config.queue_capacity, config.max_concurrent, config.job_timeout_secs
        );

        let handle = tokio::spawn(Self::dispatch(
            receiver,
            Arc::new(executor),
            semaphore,
            shutdown.clone(),
        ));

        Self {
            sender,
            shutdown,
            dispatcher: std::sync::Mutex::new(Some(handle)),
        }
    }

    async fn dispatch(
        mut receiver: mpsc::Receiver<HealJob>,
        executor: Arc<HealExecutor>,
        semaphore: Arc<Semaphore>,
        shutdown: Arc<Notify>,
    ) {
        loop {
            let job = tokio::select! {
                biased;

                _ = shutdown.notified() => break,
                job = receiver.recv() => match job {
                    Some(job) => job,
                    None => break,
                },
            };

            let permit = match semaphore.clone().acquire_owned().await {
                Ok(permit) => permit,
                Err(_) => break,
            };

            let executor = executor.clone();
            tokio::spawn(async move {
                if let Err(e) = executor.run(&job).await {
                    error!("Heal action {} could not be updated: {}", job.acao_id, e);
                }
                drop(permit);
            });
        }

        semaphore.close();
        info!("Heal queue dispatcher stopped");
    }

    /// 提交任务，不等待执行
    pub fn submit(&self, job: HealJob) -> Result<()> {
        self.sender.try_send(job).map_err(|e| match e {
            mpsc::error::TrySendError::Full(job) => {
                warn!("Heal queue is full, rejecting action {}", job.acao_id);
                GestaoError::queue_unavailable("Fila de ações cheia, tente novamente mais tarde")
            }
            mpsc::error::TrySendError::Closed(job) => {
                warn!("Heal queue is closed, rejecting action {}", job.acao_id);
                GestaoError::queue_unavailable("Fila de ações indisponível")
            }
        })
    }

    /// 停止调度任务，已开始的动作继续执行
    pub async fn stop(&self) {
        self.shutdown.notify_one();
        let handle = self
            .dispatcher
            .lock()
            .expect("heal queue lock poisoned")
            .take();
        let Some(handle) = handle else {
            return;
        };
        if tokio::time::timeout(Duration::from_secs(5), handle).await.is_err() {
            warn!("Heal queue dispatcher did not stop within timeout");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::CacheResult;
    use crate::cache::object_cache::moka::MokaCacheWrapper;
    use crate::storage::sea_orm_storage::SeaOrmStorage;
    use sea_orm::Database;

    async fn storage() -> Arc<dyn Storage> {
        let db = Database::connect("sqlite::memory:").await.unwrap();
        Arc::new(SeaOrmStorage::from_connection(db).await.unwrap())
    }

    fn config(capacity: usize) -> HealConfig {
        HealConfig {
            queue_capacity: capacity,
            max_concurrent: 1,
            job_timeout_secs: 5,
        }
    }

    async fn wait_terminal(storage: &Arc<dyn Storage>, id: &str) -> HealStatus {
        for _ in 0..100 {
            let action = storage.get_heal_action(id).await.unwrap().unwrap();
            if action.status.is_terminal() {
                return action.status;
            }
            tokio::time::sleep(Duration::from_millis(20)).await;
        }
        panic!("heal action {id} did not finish");
    }

    #[tokio::test]
    async fn test_clear_cache_really_invalidates() {
        let storage = storage().await;
        let cache: Arc<dyn ObjectCache> = Arc::new(MokaCacheWrapper::with_settings(100, 60));
        cache.insert_raw("legal_chat:x".into(), "[]".into(), 0).await;

        let executor = HealExecutor::new(storage.clone(), cache.clone(), Duration::from_secs(5));
        let action = storage
            .create_heal_action(HealActionType::ClearCache, None, None)
            .await
            .unwrap();

        let job = HealJob {
            acao_id: action.id.clone(),
            tipo: HealActionType::ClearCache,
        };
        assert_eq!(executor.run(&job).await.unwrap(), Some(HealStatus::Success));
        assert_eq!(cache.get_raw("legal_chat:x").await, CacheResult::NotFound);

        let stored = storage.get_heal_action(&action.id).await.unwrap().unwrap();
        assert_eq!(stored.mensagem_resultado.as_deref(), Some("Cache limpo com sucesso"));
        assert!(stored.executada_em.is_some());

        // 第二次执行不会再改变状态
        assert_eq!(executor.run(&job).await.unwrap(), None);
        let again = storage.get_heal_action(&action.id).await.unwrap().unwrap();
        assert_eq!(again.status, HealStatus::Success);
    }

    #[tokio::test]
    async fn test_submitted_jobs_reach_success() {
        let storage = storage().await;
        let cache: Arc<dyn ObjectCache> = Arc::new(MokaCacheWrapper::with_settings(100, 60));
        let executor = HealExecutor::new(storage.clone(), cache, Duration::from_secs(5));
        let queue = HealQueue::start(executor, &config(8));

        let mut ids = Vec::new();
        for tipo in [HealActionType::OptimizeDb, HealActionType::CheckDependencies] {
            let action = storage.create_heal_action(tipo, None, None).await.unwrap();
            queue
                .submit(HealJob {
                    acao_id: action.id.clone(),
                    tipo,
                })
                .unwrap();
            ids.push(action.id);
        }

        for id in &ids {
            assert_eq!(wait_terminal(&storage, id).await, HealStatus::Success);
        }
        queue.stop().await;
    }

    #[tokio::test]
    async fn test_stopped_queue_rejects_jobs() {
        let storage = storage().await;
        let cache: Arc<dyn ObjectCache> = Arc::new(MokaCacheWrapper::with_settings(100, 60));
        let executor = HealExecutor::new(storage, cache, Duration::from_secs(5));
        let queue = HealQueue::start(executor, &config(1));
        queue.stop().await;

        let err = queue
            .submit(HealJob {
                acao_id: "x".to_string(),
                tipo: HealActionType::FixConfig,
            })
            .unwrap_err();
        assert!(matches!(err, GestaoError::QueueUnavailable(_)));
    }
}
