pub mod extract_identity;
pub mod identities;
pub mod licenses;
pub mod serve;
pub mod upload;

use actix_multipart::Multipart;
use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::ai::CompletionClient;
use crate::models::IdQuery;
use crate::models::documents::requests::{SaveIdentityRequest, SaveLicenseRequest};
use crate::storage::Storage;

pub use upload::PhotoOwner;

pub struct DocumentService {
    storage: Option<Arc<dyn Storage>>,
}

impl DocumentService {
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

    pub(crate) fn get_completion_client(&self, request: &HttpRequest) -> Arc<dyn CompletionClient> {
        super::shared::<dyn CompletionClient>(request)
    }

    // 保存身份证件
    pub async fn save_identity(
        &self,
        identity_data: SaveIdentityRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        identities::save_identity(self, identity_data, request).await
    }

    // 列出身份证件
    pub async fn list_identities(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        identities::list_identities(self, request).await
    }

    // 删除身份证件
    pub async fn delete_identity(
        &self,
        query: IdQuery,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        identities::delete_identity(self, query, request).await
    }

    // 保存驾驶证
    pub async fn save_license(
        &self,
        license_data: SaveLicenseRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        licenses::save_license(self, license_data, request).await
    }

    // 列出驾驶证
    pub async fn list_licenses(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        licenses::list_licenses(self, request).await
    }

    // 删除驾驶证
    pub async fn delete_license(
        &self,
        query: IdQuery,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        licenses::delete_license(self, query, request).await
    }

    // 上传证件照片
    pub async fn upload_photo(
        &self,
        owner: PhotoOwner,
        payload: Multipart,
    ) -> ActixResult<HttpResponse> {
        upload::upload_photo(owner, payload).await
    }

    // 识别身份证件图片
    pub async fn extract_identity(
        &self,
        request: &HttpRequest,
        payload: Multipart,
    ) -> ActixResult<HttpResponse> {
        extract_identity::extract_identity(self, request, payload).await
    }

    // 读取已上传的照片
    pub async fn serve_upload(&self, filename: String) -> ActixResult<HttpResponse> {
        serve::serve_upload(filename).await
    }
}
