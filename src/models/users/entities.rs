use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 用户实体
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/user.ts")]
pub struct User {
    pub id: String,
    pub email: Option<String>,
    pub name: Option<String>,
    pub apelido: Option<String>,
    pub telefone: Option<String>,
    pub morada: Option<String>,
    pub data_nascimento: Option<String>,
    pub ativo: bool,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}
