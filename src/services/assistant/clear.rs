use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::LegalAssistantService;
use crate::models::{ApiResponse, SuccessResponse, assistant::requests::ClearChatQuery};

pub async fn clear_conversation(
    service: &LegalAssistantService,
    query: ClearChatQuery,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let conversations = service.get_conversations(request);
    let session_id = query.session_id.as_deref().filter(|s| !s.is_empty());

    conversations.clear(session_id).await;
    info!(
        "Cleared legal assistant conversation(s): {}",
        session_id.unwrap_or("*")
    );

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        SuccessResponse::ok(),
        "Conversa limpa",
    )))
}
