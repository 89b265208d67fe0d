use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::models::IdQuery;
use crate::models::auto_heal::requests::{
    AnalyzeRequest, ApplyFixRequest, CreateActionRequest, CreateLogRequest, CreateMetricRequest,
};
use crate::services::AutoHealService;

static AUTO_HEAL_SERVICE: Lazy<AutoHealService> = Lazy::new(AutoHealService::new_lazy);

pub async fn create_log(
    req: HttpRequest,
    log_data: web::Json<CreateLogRequest>,
) -> ActixResult<HttpResponse> {
    AUTO_HEAL_SERVICE.create_log(log_data.into_inner(), &req).await
}

pub async fn list_logs(req: HttpRequest) -> ActixResult<HttpResponse> {
    AUTO_HEAL_SERVICE.list_logs(&req).await
}

pub async fn delete_logs(req: HttpRequest, query: web::Query<IdQuery>) -> ActixResult<HttpResponse> {
    AUTO_HEAL_SERVICE.delete_logs(query.into_inner(), &req).await
}

pub async fn create_metric(
    req: HttpRequest,
    metric_data: web::Json<CreateMetricRequest>,
) -> ActixResult<HttpResponse> {
    AUTO_HEAL_SERVICE
        .create_metric(metric_data.into_inner(), &req)
        .await
}

pub async fn latest_metrics(req: HttpRequest) -> ActixResult<HttpResponse> {
    AUTO_HEAL_SERVICE.latest_metrics(&req).await
}

pub async fn analyze(
    req: HttpRequest,
    analyze_data: web::Json<AnalyzeRequest>,
) -> ActixResult<HttpResponse> {
    AUTO_HEAL_SERVICE.analyze(analyze_data.into_inner(), &req).await
}

pub async fn apply_fix(
    req: HttpRequest,
    fix_data: web::Json<ApplyFixRequest>,
) -> ActixResult<HttpResponse> {
    AUTO_HEAL_SERVICE.apply_fix(fix_data.into_inner(), &req).await
}

pub async fn list_correcoes(req: HttpRequest) -> ActixResult<HttpResponse> {
    AUTO_HEAL_SERVICE.list_correcoes(&req).await
}

pub async fn create_action(
    req: HttpRequest,
    action_data: web::Json<CreateActionRequest>,
) -> ActixResult<HttpResponse> {
    AUTO_HEAL_SERVICE
        .create_action(action_data.into_inner(), &req)
        .await
}

pub async fn list_actions(req: HttpRequest) -> ActixResult<HttpResponse> {
    AUTO_HEAL_SERVICE.list_actions(&req).await
}

// 配置路由
pub fn configure_auto_heal_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/auto-heal")
            .route("/logs", web::post().to(create_log))
            .route("/logs", web::get().to(list_logs))
            .route("/logs", web::delete().to(delete_logs))
            .route("/metrics", web::post().to(create_metric))
            .route("/metrics", web::get().to(latest_metrics))
            .route("/analyze", web::post().to(analyze))
            .route("/apply-fix", web::post().to(apply_fix))
            .route("/apply-fix", web::get().to(list_correcoes))
            .route("/actions", web::post().to(create_action))
            .route("/actions", web::get().to(list_actions)),
    );
}
