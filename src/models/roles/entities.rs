use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 角色实体
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/role.ts")]
pub struct Role {
    pub id: String,
    pub nome: String,
    pub descricao: Option<String>,
    pub permissoes: Option<serde_json::Value>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}
