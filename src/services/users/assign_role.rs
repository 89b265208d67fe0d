use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::UserService;
use crate::errors::GestaoError;
use crate::models::{
    ApiResponse, ErrorCode, SuccessResponse,
    users::requests::{AssignRoleRequest, UnassignRoleQuery},
};
use crate::services::{bad_request, error_response};

const IDS_REQUIRED: &str = "ID do utilizador e ID do papel são obrigatórios";

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

pub async fn assign_role(
    service: &UserService,
    assign_data: AssignRoleRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let (Some(user_id), Some(role_id)) = (
        non_empty(&assign_data.user_id),
        non_empty(&assign_data.role_id),
    ) else {
        return Ok(bad_request(IDS_REQUIRED));
    };

    let storage = service.get_storage(request);

    match storage.assign_role(user_id, role_id).await {
        Ok(link) => Ok(HttpResponse::Created()
            .json(ApiResponse::success(link, "Papel atribuído com sucesso"))),
        Err(GestaoError::Conflict(_)) => Ok(HttpResponse::Conflict().json(
            ApiResponse::error_empty(
                ErrorCode::UserRoleAlreadyAssigned,
                "Papel já atribuído a este utilizador",
            ),
        )),
        Err(e) => Ok(error_response(&e, "Erro ao atribuir papel ao utilizador")),
    }
}

pub async fn unassign_role(
    service: &UserService,
    query: UnassignRoleQuery,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let (Some(user_id), Some(role_id)) = (non_empty(&query.user_id), non_empty(&query.role_id))
    else {
        return Ok(bad_request(IDS_REQUIRED));
    };

    let storage = service.get_storage(request);

    match storage.unassign_role(user_id, role_id).await {
        Ok(removed) => {
            tracing::debug!("Removed {} role link(s) for user {}", removed, user_id);
            Ok(HttpResponse::Ok().json(ApiResponse::success(
                SuccessResponse::ok(),
                "Papel removido do utilizador",
            )))
        }
        Err(e) => Ok(error_response(&e, "Erro ao remover papel do utilizador")),
    }
}
