use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::TemplateService;
use crate::models::{ApiResponse, ErrorCode, IdQuery, templates::requests::TemplateRequest};
use crate::services::{bad_request, error_response};

pub async fn update_template(
    service: &TemplateService,
    query: IdQuery,
    template_data: TemplateRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let Some(id) = query.non_empty() else {
        return Ok(bad_request("ID do template não fornecido"));
    };

    let storage = service.get_storage(request);

    match storage.update_template(id, template_data).await {
        Ok(Some(template)) => Ok(HttpResponse::Ok()
            .json(ApiResponse::success(template, "Template atualizado com sucesso"))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::TemplateNotFound,
            "Template não encontrado",
        ))),
        Err(e) => Ok(error_response(&e, "Erro ao atualizar template")),
    }
}
