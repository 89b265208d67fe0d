use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::TemplateService;
use crate::models::ApiResponse;
use crate::services::error_response;

pub async fn list_templates(
    service: &TemplateService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.list_templates().await {
        Ok(templates) => {
            Ok(HttpResponse::Ok().json(ApiResponse::success(templates, "Templates listados")))
        }
        Err(e) => Ok(error_response(&e, "Erro ao listar templates")),
    }
}
