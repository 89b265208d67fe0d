use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::models::IdQuery;
use crate::models::roles::requests::{CreateRoleRequest, UpdateRoleRequest};
use crate::services::RoleService;

static ROLE_SERVICE: Lazy<RoleService> = Lazy::new(RoleService::new_lazy);

pub async fn list_roles(req: HttpRequest) -> ActixResult<HttpResponse> {
    ROLE_SERVICE.list_roles(&req).await
}

pub async fn create_role(
    req: HttpRequest,
    role_data: web::Json<CreateRoleRequest>,
) -> ActixResult<HttpResponse> {
    ROLE_SERVICE.create_role(role_data.into_inner(), &req).await
}

pub async fn update_role(
    req: HttpRequest,
    query: web::Query<IdQuery>,
    update_data: web::Json<UpdateRoleRequest>,
) -> ActixResult<HttpResponse> {
    ROLE_SERVICE
        .update_role(query.into_inner(), update_data.into_inner(), &req)
        .await
}

pub async fn delete_role(req: HttpRequest, query: web::Query<IdQuery>) -> ActixResult<HttpResponse> {
    ROLE_SERVICE.delete_role(query.into_inner(), &req).await
}

// 配置路由
pub fn configure_role_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/roles")
            .route("/list", web::get().to(list_roles))
            .route("/create", web::post().to(create_role))
            .route("/update", web::put().to(update_role))
            .route("/delete", web::delete().to(delete_role)),
    );
}
