pub mod create;
pub mod delete;
pub mod docx;
pub mod generate;
pub mod generated;
pub mod list;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::IdQuery;
use crate::models::templates::requests::{GenerateDocumentRequest, TemplateRequest};
use crate::storage::Storage;

pub struct TemplateService {
    storage: Option<Arc<dyn Storage>>,
}

impl TemplateService {
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

    // 列出模板
    pub async fn list_templates(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        list::list_templates(self, request).await
    }

    // 创建模板
    pub async fn create_template(
        &self,
        template_data: TemplateRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_template(self, template_data, request).await
    }

    // 更新模板
    pub async fn update_template(
        &self,
        query: IdQuery,
        template_data: TemplateRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_template(self, query, template_data, request).await
    }

    // 删除模板
    pub async fn delete_template(
        &self,
        query: IdQuery,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        delete::delete_template(self, query, request).await
    }

    // 根据模板生成 .docx
    pub async fn generate_document(
        &self,
        generate_data: GenerateDocumentRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        generate::generate_document(self, generate_data, request).await
    }

    // 列出已生成的文档
    pub async fn list_generated(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        generated::list_generated(self, request).await
    }
}
