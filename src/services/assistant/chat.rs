use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::{DEFAULT_SESSION, LegalAssistantService};
use crate::models::ApiResponse;
use crate::models::assistant::{requests::ChatRequest, responses::ChatResponse};
use crate::services::{bad_request, error_response};

pub async fn chat(
    service: &LegalAssistantService,
    chat_data: ChatRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let Some(message) = chat_data.message.filter(|m| !m.trim().is_empty()) else {
        return Ok(bad_request("Mensagem é obrigatória"));
    };

    let session_id = chat_data
        .session_id
        .filter(|s| !s.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_SESSION.to_string());

    let conversations = service.get_conversations(request);
    let client = service.get_completion_client(request);

    match conversations
        .exchange(&session_id, &message, client.as_ref())
        .await
    {
        Ok(exchange) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            ChatResponse {
                success: true,
                response: exchange.response,
                history_length: exchange.history_length,
            },
            "Resposta gerada",
        ))),
        Err(e) => Ok(error_response(&e, "Erro ao processar a mensagem")),
    }
}
