use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::RoleService;
use crate::models::ApiResponse;
use crate::services::error_response;

pub async fn list_roles(service: &RoleService, request: &HttpRequest) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.list_roles_with_count().await {
        Ok(roles) => Ok(HttpResponse::Ok().json(ApiResponse::success(roles, "Papéis listados"))),
        Err(e) => Ok(error_response(&e, "Erro ao listar papéis")),
    }
}
