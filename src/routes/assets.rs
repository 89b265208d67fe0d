use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::models::IdQuery;
use crate::models::assets::requests::{CreateAtivoRequest, UpdateAtivoRequest};
use crate::services::AssetService;

// 懒加载的全局 AssetService 实例
static ASSET_SERVICE: Lazy<AssetService> = Lazy::new(AssetService::new_lazy);

pub async fn list_ativos(req: HttpRequest) -> ActixResult<HttpResponse> {
    ASSET_SERVICE.list_ativos(&req).await
}

pub async fn create_ativo(
    req: HttpRequest,
    ativo_data: web::Json<CreateAtivoRequest>,
) -> ActixResult<HttpResponse> {
    ASSET_SERVICE.create_ativo(ativo_data.into_inner(), &req).await
}

pub async fn update_ativo(
    req: HttpRequest,
    query: web::Query<IdQuery>,
    update_data: web::Json<UpdateAtivoRequest>,
) -> ActixResult<HttpResponse> {
    ASSET_SERVICE
        .update_ativo(query.into_inner(), update_data.into_inner(), &req)
        .await
}

pub async fn delete_ativo(
    req: HttpRequest,
    query: web::Query<IdQuery>,
) -> ActixResult<HttpResponse> {
    ASSET_SERVICE.delete_ativo(query.into_inner(), &req).await
}

// 配置路由
pub fn configure_asset_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/assets")
            .route("/list", web::get().to(list_ativos))
            .route("/create", web::post().to(create_ativo))
            .route("/update", web::put().to(update_ativo))
            .route("/delete", web::delete().to(delete_ativo)),
    );
}
