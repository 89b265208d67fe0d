use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::TemplateService;
use crate::models::{ApiResponse, ErrorCode, IdQuery, SuccessResponse};
use crate::services::{bad_request, error_response};

pub async fn delete_template(
    service: &TemplateService,
    query: IdQuery,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let Some(id) = query.non_empty() else {
        return Ok(bad_request("ID do template não fornecido"));
    };

    let storage = service.get_storage(request);

    match storage.delete_template(id).await {
        Ok(true) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            SuccessResponse::ok(),
            "Template excluído com sucesso",
        ))),
        Ok(false) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::TemplateNotFound,
            "Template não encontrado",
        ))),
        Err(e) => Ok(error_response(&e, "Erro ao excluir template")),
    }
}
