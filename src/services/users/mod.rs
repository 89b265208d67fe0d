pub mod assign_role;
pub mod create;
pub mod delete;
pub mod list;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::IdQuery;
use crate::models::users::requests::{
    AssignRoleRequest, CreateUserRequest, UnassignRoleQuery, UpdateUserRequest,
};
use crate::storage::Storage;

pub struct UserService {
    storage: Option<Arc<dyn Storage>>,
}

impl UserService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> Arc<dyn Storage> {
        if let Some(storage) = &self.storage {
            storage.clone()
        } else {
            super::shared::<dyn Storage>(request)
        }
    }

    // 获取用户列表（含角色）
    pub async fn list_users(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        list::list_users(self, request).await
    }

    // 创建用户
    pub async fn create_user(
        &self,
        user_data: CreateUserRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_user(self, user_data, request).await
    }

    // 更新用户信息
    pub async fn update_user(
        &self,
        query: IdQuery,
        update_data: UpdateUserRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_user(self, query, update_data, request).await
    }

    // 删除用户
    pub async fn delete_user(
        &self,
        query: IdQuery,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        delete::delete_user(self, query, request).await
    }

    // 分配角色
    pub async fn assign_role(
        &self,
        assign_data: AssignRoleRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        assign_role::assign_role(self, assign_data, request).await
    }

    // 取消角色分配
    pub async fn unassign_role(
        &self,
        query: UnassignRoleQuery,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        assign_role::unassign_role(self, query, request).await
    }
}
