use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::AssetService;
use crate::models::ApiResponse;
use crate::services::error_response;

pub async fn list_ativos(service: &AssetService, request: &HttpRequest) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.list_ativos().await {
        Ok(ativos) => Ok(HttpResponse::Ok().json(ApiResponse::success(ativos, "Ativos listados"))),
        Err(e) => Ok(error_response(&e, "Erro ao listar ativos")),
    }
}
