use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::RoleService;
use crate::errors::GestaoError;
use crate::models::{ApiResponse, ErrorCode, IdQuery, roles::requests::UpdateRoleRequest};
use crate::services::{bad_request, error_response};

pub async fn update_role(
    service: &RoleService,
    query: IdQuery,
    update_data: UpdateRoleRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let Some(id) = query.non_empty() else {
        return Ok(bad_request("ID do papel não fornecido"));
    };

    let storage = service.get_storage(request);

    match storage.update_role(id, update_data).await {
        Ok(Some(role)) => {
            Ok(HttpResponse::Ok().json(ApiResponse::success(role, "Papel atualizado com sucesso")))
        }
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::RoleNotFound,
            "Papel não encontrado",
        ))),
        Err(GestaoError::Conflict(_)) => Ok(HttpResponse::Conflict().json(
            ApiResponse::error_empty(ErrorCode::RoleAlreadyExists, "Já existe um papel com este nome"),
        )),
        Err(e) => Ok(error_response(&e, "Erro ao atualizar papel")),
    }
}
