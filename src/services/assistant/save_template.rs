use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::LegalAssistantService;
use crate::models::{
    ApiResponse, assistant::responses::SaveTemplateResponse,
    templates::requests::TemplateRequest,
};
use crate::services::{bad_request, error_response, required};

pub async fn save_template(
    service: &LegalAssistantService,
    template_data: TemplateRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    if required(&template_data.nome).is_none() || required(&template_data.conteudo).is_none() {
        return Ok(bad_request("Nome e conteúdo são obrigatórios"));
    }

    let storage = service.get_storage(request);

    match storage.create_template(template_data).await {
        Ok(template) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            SaveTemplateResponse {
                success: true,
                template,
            },
            "Template salvo com sucesso",
        ))),
        Err(e) => Ok(error_response(&e, "Erro ao salvar template")),
    }
}
