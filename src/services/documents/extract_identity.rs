use actix_multipart::Multipart;
use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use serde_json::Value;
use tracing::{debug, error};

use super::DocumentService;
use super::upload::read_image_form;
use crate::ai::ImageInput;
use crate::config::AppConfig;
use crate::errors::{GestaoError, Result};
use crate::models::{ApiResponse, ErrorCode};
use crate::services::error_response;
use crate::utils::strip_code_fences;

const EXTRACT_FAILED: &str = "Erro ao extrair dados do documento";

pub const EXTRACT_IDENTITY_PROMPT: &str = r#"Extraia todas as informações deste documento de identificação português e retorne em formato JSON com estes campos:
{
  "numero": "número do documento",
  "nome": "nome completo",
  "apelido": "apelido",
  "dataNascimento": "data de nascimento no formato DD/MM/YYYY",
  "naturalidade": "naturalidade",
  "nacionalidade": "nacionalidade",
  "sexo": "sexo (M/F)",
  "altura": "altura",
  "filiado": "filiado (pai e mãe)",
  "validade": "data de validade no formato DD/MM/YYYY",
  "emissao": "data de emissão no formato DD/MM/YYYY",
  "morada": "morada completa"
}

Retorne APENAS JSON válido, sem texto adicional."#;

/// 解析模型返回的 JSON 对象
pub(crate) fn parse_extracted(content: &str) -> Result<Value> {
    let cleaned = strip_code_fences(content);
    match serde_json::from_str::<Value>(&cleaned) {
        Ok(value @ Value::Object(_)) => Ok(value),
        Ok(_) => Err(GestaoError::ai_response("Resposta do modelo não é um objeto JSON")),
        Err(e) => {
            debug!("Unparseable extraction reply: {}", content);
            Err(GestaoError::ai_response(format!(
                "Erro ao processar a resposta do modelo: {e}"
            )))
        }
    }
}

pub async fn extract_identity(
    service: &DocumentService,
    request: &HttpRequest,
    payload: Multipart,
) -> ActixResult<HttpResponse> {
    let config = AppConfig::get();

    let form = match read_image_form(payload, config.upload.max_size).await {
        Ok(form) => form,
        Err(response) => return Ok(response),
    };

    let Some(image) = form.file else {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::FileNotFound,
            "Nenhum arquivo enviado",
        )));
    };

    let client = service.get_completion_client(request);
    let input = ImageInput {
        mime_type: image.content_type,
        bytes: image.bytes,
    };

    let reply = match client.complete_vision(EXTRACT_IDENTITY_PROMPT, &input).await {
        Ok(reply) => reply,
        Err(e) => return Ok(error_response(&e, EXTRACT_FAILED)),
    };

    match parse_extracted(&reply) {
        Ok(dados) => Ok(HttpResponse::Ok().json(ApiResponse::success(dados, "Dados extraídos"))),
        Err(e) => {
            error!("Identity extraction failed: {}", e);
            Ok(error_response(&e, EXTRACT_FAILED))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_extracted_strips_fences() {
        let value = parse_extracted("```json\n{\"numero\": \"123\", \"nome\": \"Ana\"}\n```").unwrap();
        assert_eq!(value["numero"], "123");
        assert_eq!(value["nome"], "Ana");
    }

    #[test]
    fn test_parse_extracted_rejects_non_objects() {
        assert!(matches!(
            parse_extracted("[1, 2]"),
            Err(GestaoError::AiResponse(_))
        ));
        assert!(matches!(
            parse_extracted("não sei"),
            Err(GestaoError::AiResponse(_))
        ));
    }
}
