pub mod create;
pub mod delete;
pub mod list;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::IdQuery;
use crate::models::roles::requests::{CreateRoleRequest, UpdateRoleRequest};
use crate::storage::Storage;

pub struct RoleService {
    storage: Option<Arc<dyn Storage>>,
}

impl RoleService {
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

    pub async fn list_roles(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        list::list_roles(self, request).await
    }

    pub async fn create_role(
        &self,
        role_data: CreateRoleRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_role(self, role_data, request).await
    }

    pub async fn update_role(
        &self,
        query: IdQuery,
        update_data: UpdateRoleRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_role(self, query, update_data, request).await
    }

    pub async fn delete_role(
        &self,
        query: IdQuery,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        delete::delete_role(self, query, request).await
    }
}
