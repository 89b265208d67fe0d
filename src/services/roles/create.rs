use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::RoleService;
use crate::errors::GestaoError;
use crate::models::{ApiResponse, ErrorCode, roles::requests::CreateRoleRequest};
use crate::services::{bad_request, error_response};

pub async fn create_role(
    service: &RoleService,
    role_data: CreateRoleRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let Some(nome) = role_data
        .nome
        .as_deref()
        .map(str::trim)
        .filter(|n| !n.is_empty())
        .map(str::to_string)
    else {
        return Ok(bad_request("Nome é obrigatório"));
    };

    let storage = service.get_storage(request);

    match storage.create_role(nome, role_data).await {
        Ok(role) => {
            Ok(HttpResponse::Created().json(ApiResponse::success(role, "Papel criado com sucesso")))
        }
        Err(GestaoError::Conflict(_)) => Ok(HttpResponse::Conflict().json(
            ApiResponse::error_empty(ErrorCode::RoleAlreadyExists, "Já existe um papel com este nome"),
        )),
        Err(e) => Ok(error_response(&e, "Erro ao criar papel")),
    }
}
