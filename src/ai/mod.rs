//! 外部 AI 补全服务
//!
//! `CompletionClient` 是服务层唯一依赖的接口；生产环境使用
//! OpenAI 兼容的 HTTP 实现，测试中可替换为脚本化的假实现。

pub mod openai;

use async_trait::async_trait;

use crate::errors::Result;
use crate::models::assistant::entities::ChatMessage;

pub use openai::OpenAiCompatibleClient;

/// 随视觉请求发送的图片
#[derive(Debug, Clone)]
pub struct ImageInput {
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

impl ImageInput {
    /// 编码为 `data:` URI
    pub fn to_data_uri(&self) -> String {
        use base64::Engine;
        format!(
            "data:{};base64,{}",
            self.mime_type,
            base64::engine::general_purpose::STANDARD.encode(&self.bytes)
        )
    }
}

#[async_trait]
pub trait CompletionClient: Send + Sync {
    /// 文本对话补全，返回第一条候选回复
    async fn complete(&self, messages: &[ChatMessage]) -> Result<String>;

    /// 单轮视觉补全：一段提示词加一张图片
    async fn complete_vision(&self, prompt: &str, image: &ImageInput) -> Result<String>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_uri() {
        let image = ImageInput {
            mime_type: "image/png".to_string(),
            bytes: b"abc".to_vec(),
        };
        assert_eq!(image.to_data_uri(), "data:image/png;base64,YWJj");
    }
}
