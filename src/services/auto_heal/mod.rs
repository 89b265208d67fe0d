pub mod actions;
pub mod analyze;
pub mod apply_fix;
pub mod logs;
pub mod metrics;
pub mod queue;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::ai::CompletionClient;
use crate::models::IdQuery;
use crate::models::auto_heal::requests::{
    AnalyzeRequest, ApplyFixRequest, CreateActionRequest, CreateLogRequest, CreateMetricRequest,
};
use crate::storage::Storage;

pub use queue::{HealExecutor, HealJob, HealQueue, INTERRUPTED_MESSAGE};

pub struct AutoHealService {
    storage: Option<Arc<dyn Storage>>,
}

impl AutoHealService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> Arc<dyn Storage> {
        if let Some(storage) = &self.storage {
            storage.clone()
        } else {
            super::shared::<dyn Storage>(request)
        }
    }

    pub(crate) fn get_completion_client(&self, request: &HttpRequest) -> Arc<dyn CompletionClient> {
        super::shared::<dyn CompletionClient>(request)
    }

    pub(crate) fn get_queue(&self, request: &HttpRequest) -> Arc<HealQueue> {
        super::shared::<HealQueue>(request)
    }

    // 记录日志
    pub async fn create_log(
        &self,
        log_data: CreateLogRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        logs::create_log(self, log_data, request).await
    }

    // 列出日志
    pub async fn list_logs(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        logs::list_logs(self, request).await
    }

    // 删除日志（未指定 ID 时删除全部）
    pub async fn delete_logs(
        &self,
        query: IdQuery,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        logs::delete_logs(self, query, request).await
    }

    // 上报指标
    pub async fn create_metric(
        &self,
        metric_data: CreateMetricRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        metrics::create_metric(self, metric_data, request).await
    }

    // 各类型最新指标
    pub async fn latest_metrics(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        metrics::latest_metrics(self, request).await
    }

    // 分析日志
    pub async fn analyze(
        &self,
        analyze_data: AnalyzeRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        analyze::analyze_log(self, analyze_data, request).await
    }

    // 应用修正
    pub async fn apply_fix(
        &self,
        fix_data: ApplyFixRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        apply_fix::apply_fix(self, fix_data, request).await
    }

    // 列出修正
    pub async fn list_correcoes(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        apply_fix::list_correcoes(self, request).await
    }

    // 触发修复动作
    pub async fn create_action(
        &self,
        action_data: CreateActionRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        actions::create_action(self, action_data, request).await
    }

    // 列出修复动作
    pub async fn list_actions(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        actions::list_actions(self, request).await
    }
}
