use serde::Deserialize;
use std::collections::HashMap;
use ts_rs::TS;

// 模板创建/更新请求
#[derive(Debug, Clone, Default, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/template.ts")]
pub struct TemplateRequest {
    pub nome: Option<String>,
    pub descricao: Option<String>,
    pub tipo: Option<String>,
    pub conteudo: Option<String>,
    pub campos: Option<Vec<String>>,
}

// 文档生成请求
#[derive(Debug, Clone, Default, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/template.ts")]
pub struct GenerateDocumentRequest {
    pub template_id: Option<String>,
    pub dados: Option<HashMap<String, serde_json::Value>>,
}
