use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::UserService;
use crate::models::ApiResponse;
use crate::services::error_response;

pub async fn list_users(service: &UserService, request: &HttpRequest) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.list_users_with_roles().await {
        Ok(users) => Ok(HttpResponse::Ok().json(ApiResponse::success(users, "Utilizadores listados"))),
        Err(e) => Ok(error_response(&e, "Erro ao listar utilizadores")),
    }
}
