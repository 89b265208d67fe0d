pub mod chat;
pub mod clear;
pub mod conversation;
pub mod prompts;
pub mod save_template;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::ai::CompletionClient;
use crate::models::assistant::requests::{ChatRequest, ClearChatQuery};
use crate::models::templates::requests::TemplateRequest;
use crate::storage::Storage;

pub use conversation::{ConversationStore, DEFAULT_SESSION, Exchange};

pub struct LegalAssistantService {
    storage: Option<Arc<dyn Storage>>,
}

impl LegalAssistantService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> Arc<dyn Storage> {
        if let Some(storage) = &self.storage {
            storage.clone()
        } else {
            super::shared::<dyn Storage>(request)
        }
    }

    pub(crate) fn get_conversations(&self, request: &HttpRequest) -> Arc<ConversationStore> {
        super::shared::<ConversationStore>(request)
    }

    pub(crate) fn get_completion_client(&self, request: &HttpRequest) -> Arc<dyn CompletionClient> {
        super::shared::<dyn CompletionClient>(request)
    }

    // 发送消息
    pub async fn chat(
        &self,
        chat_data: ChatRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        chat::chat(self, chat_data, request).await
    }

    // 清除会话
    pub async fn clear(
        &self,
        query: ClearChatQuery,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        clear::clear_conversation(self, query, request).await
    }

    // 将助手生成的内容保存为模板
    pub async fn save_template(
        &self,
        template_data: TemplateRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        save_template::save_template(self, template_data, request).await
    }
}
