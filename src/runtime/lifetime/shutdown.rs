use std::sync::Arc;
use tokio::signal;
use tracing::warn;

use crate::services::HealQueue;

pub async fn listen_for_shutdown(heal_queue: Arc<HealQueue>) {
    // 等待 Ctrl+C 信号
    signal::ctrl_c().await.expect("Failed to listen for Ctrl+C");
    warn!("Shutdown signal received, initiating graceful shutdown...");

    // 停止接收新的修复动作；已开始的动作由下次启动时回收
    heal_queue.stop().await;
}
