use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::entities::Role;

// 带关联用户数的角色
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/role.ts")]
pub struct RoleWithCount {
    #[serde(flatten)]
    #[ts(flatten)]
    pub role: Role,
    pub user_roles: u64,
}
