use serde::Deserialize;
use ts_rs::TS;

use crate::models::common::lenient::double_option;

// 用户创建请求
#[derive(Debug, Clone, Default, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/user.ts")]
pub struct CreateUserRequest {
    pub email: Option<String>,
    pub name: Option<String>,
    pub apelido: Option<String>,
    pub telefone: Option<String>,
    pub morada: Option<String>,
    pub data_nascimento: Option<String>,
    pub ativo: Option<bool>,
}

// 用户更新请求
#[derive(Debug, Clone, Default, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/user.ts")]
pub struct UpdateUserRequest {
    #[serde(default, deserialize_with = "double_option")]
    #[ts(optional)]
    pub email: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    #[ts(optional)]
    pub name: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    #[ts(optional)]
    pub apelido: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    #[ts(optional)]
    pub telefone: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    #[ts(optional)]
    pub morada: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    #[ts(optional)]
    pub data_nascimento: Option<Option<String>>,
    pub ativo: Option<bool>,
}

// 角色分配请求
#[derive(Debug, Clone, Default, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/user.ts")]
pub struct AssignRoleRequest {
    pub user_id: Option<String>,
    pub role_id: Option<String>,
}

// 取消角色分配（?userId=&roleId=）
#[derive(Debug, Clone, Default, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/user.ts")]
pub struct UnassignRoleQuery {
    pub user_id: Option<String>,
    pub role_id: Option<String>,
}
