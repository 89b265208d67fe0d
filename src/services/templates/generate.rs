use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use base64::Engine;
use tracing::info;

use super::{TemplateService, docx};
use crate::errors::GestaoError;
use crate::models::{
    ApiResponse, ErrorCode,
    templates::{requests::GenerateDocumentRequest, responses::GenerateDocumentResponse},
};
use crate::services::{bad_request, error_response};
use crate::utils::render_placeholders;

const GENERATE_FAILED: &str = "Erro ao gerar documento";

pub async fn generate_document(
    service: &TemplateService,
    generate_data: GenerateDocumentRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let Some(template_id) = generate_data
        .template_id
        .as_deref()
        .map(str::trim)
        .filter(|id| !id.is_empty())
    else {
        return Ok(bad_request("ID do template não fornecido"));
    };

    let storage = service.get_storage(request);

    let template = match storage.get_template(template_id).await {
        Ok(Some(template)) => template,
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::TemplateNotFound,
                "Template não encontrado",
            )));
        }
        Err(e) => return Ok(error_response(&e, GENERATE_FAILED)),
    };

    // null 或缺失的数据视为空
    let dados = generate_data.dados.unwrap_or_default();
    let conteudo = render_placeholders(template.conteudo.as_deref().unwrap_or_default(), &dados);

    let buffer = match docx::render_docx(&conteudo) {
        Ok(bytes) => bytes,
        Err(e) => return Ok(error_response(&e, GENERATE_FAILED)),
    };

    let dados_json = match serde_json::to_string(&dados) {
        Ok(json) => json,
        Err(e) => return Ok(error_response(&GestaoError::from(e), GENERATE_FAILED)),
    };
    let arquivo_url = format!(
        "/documents/generated/{}.docx",
        chrono::Utc::now().timestamp_millis()
    );

    match storage
        .create_documento_gerado(&template.id, dados_json, arquivo_url)
        .await
    {
        Ok(gerado) => {
            info!(
                "Generated document {} from template {} ({} bytes)",
                gerado.id,
                template.id,
                buffer.len()
            );
            Ok(HttpResponse::Ok().json(ApiResponse::success(
                GenerateDocumentResponse {
                    success: true,
                    documento_id: gerado.id,
                    buffer: base64::engine::general_purpose::STANDARD.encode(&buffer),
                },
                "Documento gerado com sucesso",
            )))
        }
        Err(e) => Ok(error_response(&e, GENERATE_FAILED)),
    }
}
