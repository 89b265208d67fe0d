use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::entities::User;
use crate::models::roles::entities::Role;

// 用户列表中的角色摘要
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/user.ts")]
pub struct RoleSummary {
    pub id: String,
    pub nome: String,
    pub descricao: Option<String>,
}

// 带角色的用户
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/user.ts")]
pub struct UserWithRoles {
    #[serde(flatten)]
    #[ts(flatten)]
    pub user: User,
    pub roles: Vec<RoleSummary>,
}

// 用户角色关联（包含两端实体）
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/user.ts")]
pub struct UserRoleLink {
    pub id: String,
    pub user_id: String,
    pub role_id: String,
    pub user: User,
    pub role: Role,
    pub created_at: chrono::DateTime<chrono::Utc>,
}
