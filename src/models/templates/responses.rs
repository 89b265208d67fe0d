use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 文档生成结果
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/template.ts")]
pub struct GenerateDocumentResponse {
    pub success: bool,
    pub documento_id: String,
    /// base64 编码的 .docx
    pub buffer: String,
}
