use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::UserService;
use crate::errors::GestaoError;
use crate::models::{ApiResponse, ErrorCode, IdQuery, users::requests::UpdateUserRequest};
use crate::services::{bad_request, error_response};

pub async fn update_user(
    service: &UserService,
    query: IdQuery,
    update_data: UpdateUserRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let Some(id) = query.non_empty() else {
        return Ok(bad_request("ID do utilizador não fornecido"));
    };

    let storage = service.get_storage(request);

    match storage.update_user(id, update_data).await {
        Ok(Some(user)) => Ok(HttpResponse::Ok()
            .json(ApiResponse::success(user, "Utilizador atualizado com sucesso"))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::UserNotFound,
            "Utilizador não encontrado",
        ))),
        Err(GestaoError::Conflict(_)) => Ok(HttpResponse::Conflict().json(
            ApiResponse::error_empty(ErrorCode::UserAlreadyExists, "Email já registado"),
        )),
        Err(e) => Ok(error_response(&e, "Erro ao atualizar utilizador")),
    }
}
