//! OpenAI 兼容的 `/chat/completions` 客户端

use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{Value, json};
use tracing::{debug, error};

use super::{CompletionClient, ImageInput};
use crate::config::AiConfig;
use crate::errors::{GestaoError, Result};
use crate::models::assistant::entities::ChatMessage;

pub struct OpenAiCompatibleClient {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
    model: String,
    vision_model: String,
}

#[derive(Debug, Deserialize)]
struct CompletionResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}

impl OpenAiCompatibleClient {
    pub fn new(config: &AiConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| GestaoError::external_service(format!("HTTP 客户端创建失败: {e}")))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
            model: config.model.clone(),
            vision_model: config.vision_model.clone(),
        })
    }

    async fn send(&self, body: Value) -> Result<String> {
        let url = format!("{}/chat/completions", self.base_url);
        debug!("Sending completion request to {}", url);

        let mut request = self.client.post(&url).json(&body);
        if !self.api_key.is_empty() {
            request = request.bearer_auth(&self.api_key);
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!("Completion service returned {}: {}", status, body);
            return Err(GestaoError::external_service(format!(
                "Serviço de IA respondeu {status}"
            )));
        }

        let parsed: CompletionResponse = response
            .json()
            .await
            .map_err(|e| GestaoError::ai_response(format!("Resposta de IA inválida: {e}")))?;

        parsed
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .filter(|c| !c.is_empty())
            .ok_or_else(|| GestaoError::ai_response("Nenhuma resposta do modelo"))
    }
}

#[async_trait]
impl CompletionClient for OpenAiCompatibleClient {
    async fn complete(&self, messages: &[ChatMessage]) -> Result<String> {
        self.send(json!({
            "model": self.model,
            "messages": messages,
        }))
        .await
    }

    async fn complete_vision(&self, prompt: &str, image: &ImageInput) -> Result<String> {
        self.send(json!({
            "model": self.vision_model,
            "messages": [{
                "role": "user",
                "content": [
                    { "type": "text", "text": prompt },
                    { "type": "image_url", "image_url": { "url": image.to_data_uri() } },
                ],
            }],
        }))
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Matcher;

    fn config(base_url: String) -> AiConfig {
        AiConfig {
            base_url,
            api_key: "test-key".to_string(),
            model: "chat-model".to_string(),
            vision_model: "vision-model".to_string(),
            timeout_secs: 5,
        }
    }

    fn reply(content: &str) -> String {
        json!({ "choices": [{ "message": { "role": "assistant", "content": content } }] })
            .to_string()
    }

    #[tokio::test]
    async fn test_complete_sends_messages_and_returns_reply() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/chat/completions")
            .match_header("authorization", "Bearer test-key")
            .match_body(Matcher::PartialJson(json!({
                "model": "chat-model",
                "messages": [
                    { "role": "system", "content": "s" },
                    { "role": "user", "content": "olá" },
                ],
            })))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(reply("Bom dia"))
            .expect(1)
            .create_async()
            .await;

        let client = OpenAiCompatibleClient::new(&config(server.url())).unwrap();
        let answer = client
            .complete(&[ChatMessage::system("s"), ChatMessage::user("olá")])
            .await
            .unwrap();

        assert_eq!(answer, "Bom dia");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_vision_uses_vision_model_and_data_uri() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/chat/completions")
            .match_body(Matcher::AllOf(vec![
                Matcher::PartialJson(json!({ "model": "vision-model" })),
                Matcher::Regex("data:image/jpeg;base64,".to_string()),
            ]))
            .with_status(200)
            .with_body(reply("{}"))
            .create_async()
            .await;

        let client = OpenAiCompatibleClient::new(&config(server.url())).unwrap();
        let image = ImageInput {
            mime_type: "image/jpeg".to_string(),
            bytes: vec![0xFF, 0xD8, 0xFF],
        };
        assert_eq!(client.complete_vision("extrai", &image).await.unwrap(), "{}");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_error_status_is_external_service_error() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/chat/completions")
            .with_status(500)
            .with_body("boom")
            .create_async()
            .await;

        let client = OpenAiCompatibleClient::new(&config(server.url())).unwrap();
        let err = client.complete(&[ChatMessage::user("x")]).await.unwrap_err();
        assert!(matches!(err, GestaoError::ExternalService(_)));
    }

    #[tokio::test]
    async fn test_empty_choices_is_ai_response_error() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/chat/completions")
            .with_status(200)
            .with_body(r#"{"choices":[]}"#)
            .create_async()
            .await;

        let client = OpenAiCompatibleClient::new(&config(server.url())).unwrap();
        let err = client.complete(&[ChatMessage::user("x")]).await.unwrap_err();
        assert!(matches!(err, GestaoError::AiResponse(_)));
    }
}
