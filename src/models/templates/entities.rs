use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 文档模板
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/template.ts")]
pub struct DocumentoTemplate {
    pub id: String,
    pub nome: Option<String>,
    pub descricao: Option<String>,
    pub tipo: Option<String>,
    pub conteudo: Option<String>,
    pub campos: Vec<String>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

// 已生成文档记录
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/template.ts")]
pub struct DocumentoGerado {
    pub id: String,
    pub template_id: String,
    pub template_nome: Option<String>,
    pub dados: Option<serde_json::Value>,
    pub arquivo_url: Option<String>,
    pub created_at: chrono::DateTime<chrono::Utc>,
}
