use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::models::IdQuery;
use crate::models::users::requests::{
    AssignRoleRequest, CreateUserRequest, UnassignRoleQuery, UpdateUserRequest,
};
use crate::services::UserService;

// 懒加载的全局 UserService 实例
static USER_SERVICE: Lazy<UserService> = Lazy::new(UserService::new_lazy);

// HTTP处理程序
pub async fn list_users(req: HttpRequest) -> ActixResult<HttpResponse> {
    USER_SERVICE.list_users(&req).await
}

pub async fn create_user(
    req: HttpRequest,
    user_data: web::Json<CreateUserRequest>,
) -> ActixResult<HttpResponse> {
    USER_SERVICE.create_user(user_data.into_inner(), &req).await
}

pub async fn update_user(
    req: HttpRequest,
    query: web::Query<IdQuery>,
    update_data: web::Json<UpdateUserRequest>,
) -> ActixResult<HttpResponse> {
    USER_SERVICE
        .update_user(query.into_inner(), update_data.into_inner(), &req)
        .await
}

pub async fn delete_user(req: HttpRequest, query: web::Query<IdQuery>) -> ActixResult<HttpResponse> {
    USER_SERVICE.delete_user(query.into_inner(), &req).await
}

pub async fn assign_role(
    req: HttpRequest,
    assign_data: web::Json<AssignRoleRequest>,
) -> ActixResult<HttpResponse> {
    USER_SERVICE.assign_role(assign_data.into_inner(), &req).await
}

pub async fn unassign_role(
    req: HttpRequest,
    query: web::Query<UnassignRoleQuery>,
) -> ActixResult<HttpResponse> {
    USER_SERVICE.unassign_role(query.into_inner(), &req).await
}

// 配置路由
pub fn configure_user_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/users")
            .route("/list", web::get().to(list_users))
            .route("/create", web::post().to(create_user))
            .route("/update", web::put().to(update_user))
            .route("/delete", web::delete().to(delete_user))
            .route("/assign-role", web::post().to(assign_role))
            .route("/assign-role", web::delete().to(unassign_role)),
    );
}
