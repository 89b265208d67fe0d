use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::TemplateService;
use crate::models::ApiResponse;
use crate::services::error_response;

pub async fn list_generated(
    service: &TemplateService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.list_documentos_gerados().await {
        Ok(documentos) => Ok(HttpResponse::Ok()
            .json(ApiResponse::success(documentos, "Documentos gerados listados"))),
        Err(e) => Ok(error_response(&e, "Erro ao listar documentos gerados")),
    }
}
