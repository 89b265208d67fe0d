use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::TemplateService;
use crate::models::{ApiResponse, templates::requests::TemplateRequest};
use crate::services::error_response;

pub async fn create_template(
    service: &TemplateService,
    template_data: TemplateRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.create_template(template_data).await {
        Ok(template) => Ok(HttpResponse::Created()
            .json(ApiResponse::success(template, "Template criado com sucesso"))),
        Err(e) => Ok(error_response(&e, "Erro ao criar template")),
    }
}
