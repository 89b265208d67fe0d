use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::UserService;
use crate::models::{ApiResponse, ErrorCode, IdQuery, SuccessResponse};
use crate::services::{bad_request, error_response};

pub async fn delete_user(
    service: &UserService,
    query: IdQuery,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let Some(id) = query.non_empty() else {
        return Ok(bad_request("ID do utilizador não fornecido"));
    };

    let storage = service.get_storage(request);

    match storage.delete_user(id).await {
        Ok(true) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            SuccessResponse::ok(),
            "Utilizador eliminado com sucesso",
        ))),
        Ok(false) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::UserNotFound,
            "Utilizador não encontrado",
        ))),
        Err(e) => Ok(error_response(&e, "Erro ao eliminar utilizador")),
    }
}
