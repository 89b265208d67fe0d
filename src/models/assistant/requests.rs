use serde::Deserialize;
use ts_rs::TS;

// 法律助手对话请求
#[derive(Debug, Clone, Default, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/assistant.ts")]
pub struct ChatRequest {
    pub message: Option<String>,
    pub session_id: Option<String>,
}

// 清除会话（?sessionId=）
#[derive(Debug, Clone, Default, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/assistant.ts")]
pub struct ClearChatQuery {
    pub session_id: Option<String>,
}
