use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::models::assistant::requests::{ChatRequest, ClearChatQuery};
use crate::models::templates::requests::TemplateRequest;
use crate::services::LegalAssistantService;

static ASSISTANT_SERVICE: Lazy<LegalAssistantService> =
    Lazy::new(LegalAssistantService::new_lazy);

pub async fn chat(req: HttpRequest, chat_data: web::Json<ChatRequest>) -> ActixResult<HttpResponse> {
    ASSISTANT_SERVICE.chat(chat_data.into_inner(), &req).await
}

pub async fn clear_chat(
    req: HttpRequest,
    query: web::Query<ClearChatQuery>,
) -> ActixResult<HttpResponse> {
    ASSISTANT_SERVICE.clear(query.into_inner(), &req).await
}

pub async fn save_template(
    req: HttpRequest,
    template_data: web::Json<TemplateRequest>,
) -> ActixResult<HttpResponse> {
    ASSISTANT_SERVICE
        .save_template(template_data.into_inner(), &req)
        .await
}

// 配置路由
pub fn configure_legal_assistant_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/legal-assistant")
            .route("/chat", web::post().to(chat))
            .route("/chat", web::delete().to(clear_chat))
            .route("/save-template", web::post().to(save_template)),
    );
}
