pub mod create;
pub mod delete;
pub mod list;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::assets::requests::{CreateAtivoRequest, UpdateAtivoRequest};
use crate::models::IdQuery;
use crate::storage::Storage;

pub struct AssetService {
    storage: Option<Arc<dyn Storage>>,
}

impl AssetService {
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

    // 列出资产
    pub async fn list_ativos(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        list::list_ativos(self, request).await
    }

    // 创建资产
    pub async fn create_ativo(
        &self,
        ativo_data: CreateAtivoRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_ativo(self, ativo_data, request).await
    }

    // 更新资产
    pub async fn update_ativo(
        &self,
        query: IdQuery,
        update_data: UpdateAtivoRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_ativo(self, query, update_data, request).await
    }

    // 删除资产
    pub async fn delete_ativo(
        &self,
        query: IdQuery,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        delete::delete_ativo(self, query, request).await
    }
}
