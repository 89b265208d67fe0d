use serde::Deserialize;
use ts_rs::TS;

// 角色创建请求
#[derive(Debug, Clone, Default, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/role.ts")]
pub struct CreateRoleRequest {
    pub nome: Option<String>,
    pub descricao: Option<String>,
    pub permissoes: Option<serde_json::Value>,
}

// 角色更新请求
#[derive(Debug, Clone, Default, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/role.ts")]
pub struct UpdateRoleRequest {
    pub nome: Option<String>,
    pub descricao: Option<String>,
    pub permissoes: Option<serde_json::Value>,
}
