use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::models::templates::entities::DocumentoTemplate;

// 法律助手回复
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/assistant.ts")]
pub struct ChatResponse {
    pub success: bool,
    pub response: String,
    /// 不含系统提示的消息数
    pub history_length: usize,
}

// 助手保存的模板
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/assistant.ts")]
pub struct SaveTemplateResponse {
    pub success: bool,
    pub template: DocumentoTemplate,
}
