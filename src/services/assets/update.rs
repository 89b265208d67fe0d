use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::AssetService;
use crate::models::{ApiResponse, ErrorCode, IdQuery, assets::requests::UpdateAtivoRequest};
use crate::services::{bad_request, error_response};

pub async fn update_ativo(
    service: &AssetService,
    query: IdQuery,
    update_data: UpdateAtivoRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let Some(id) = query.non_empty() else {
        return Ok(bad_request("ID do ativo não fornecido"));
    };

    let storage = service.get_storage(request);

    match storage.update_ativo(id, update_data).await {
        Ok(Some(ativo)) => {
            Ok(HttpResponse::Ok().json(ApiResponse::success(ativo, "Ativo atualizado com sucesso")))
        }
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::AtivoNotFound,
            "Ativo não encontrado",
        ))),
        Err(e) => Ok(error_response(&e, "Erro ao atualizar ativo")),
    }
}
