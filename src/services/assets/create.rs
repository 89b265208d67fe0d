use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::AssetService;
use crate::models::{ApiResponse, assets::requests::CreateAtivoRequest};
use crate::services::error_response;

pub async fn create_ativo(
    service: &AssetService,
    ativo_data: CreateAtivoRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.create_ativo(ativo_data).await {
        Ok(ativo) => {
            tracing::info!("Asset {} created", ativo.id);
            Ok(HttpResponse::Created().json(ApiResponse::success(ativo, "Ativo criado com sucesso")))
        }
        Err(e) => Ok(error_response(&e, "Erro ao criar ativo")),
    }
}
