use actix_multipart::Multipart;
use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::models::IdQuery;
use crate::models::documents::requests::{SaveIdentityRequest, SaveLicenseRequest};
use crate::models::templates::requests::{GenerateDocumentRequest, TemplateRequest};
use crate::services::documents::PhotoOwner;
use crate::services::{DocumentService, TemplateService};

// 懒加载的全局服务实例
static TEMPLATE_SERVICE: Lazy<TemplateService> = Lazy::new(TemplateService::new_lazy);
static DOCUMENT_SERVICE: Lazy<DocumentService> = Lazy::new(DocumentService::new_lazy);

// 模板
pub async fn list_templates(req: HttpRequest) -> ActixResult<HttpResponse> {
    TEMPLATE_SERVICE.list_templates(&req).await
}

pub async fn create_template(
    req: HttpRequest,
    template_data: web::Json<TemplateRequest>,
) -> ActixResult<HttpResponse> {
    TEMPLATE_SERVICE
        .create_template(template_data.into_inner(), &req)
        .await
}

pub async fn update_template(
    req: HttpRequest,
    query: web::Query<IdQuery>,
    template_data: web::Json<TemplateRequest>,
) -> ActixResult<HttpResponse> {
    TEMPLATE_SERVICE
        .update_template(query.into_inner(), template_data.into_inner(), &req)
        .await
}

pub async fn delete_template(
    req: HttpRequest,
    query: web::Query<IdQuery>,
) -> ActixResult<HttpResponse> {
    TEMPLATE_SERVICE
        .delete_template(query.into_inner(), &req)
        .await
}

pub async fn generate_document(
    req: HttpRequest,
    generate_data: web::Json<GenerateDocumentRequest>,
) -> ActixResult<HttpResponse> {
    TEMPLATE_SERVICE
        .generate_document(generate_data.into_inner(), &req)
        .await
}

pub async fn list_generated(req: HttpRequest) -> ActixResult<HttpResponse> {
    TEMPLATE_SERVICE.list_generated(&req).await
}

// 证件
pub async fn save_identity(
    req: HttpRequest,
    identity_data: web::Json<SaveIdentityRequest>,
) -> ActixResult<HttpResponse> {
    DOCUMENT_SERVICE
        .save_identity(identity_data.into_inner(), &req)
        .await
}

pub async fn list_identities(req: HttpRequest) -> ActixResult<HttpResponse> {
    DOCUMENT_SERVICE.list_identities(&req).await
}

pub async fn delete_identity(
    req: HttpRequest,
    query: web::Query<IdQuery>,
) -> ActixResult<HttpResponse> {
    DOCUMENT_SERVICE
        .delete_identity(query.into_inner(), &req)
        .await
}

pub async fn save_license(
    req: HttpRequest,
    license_data: web::Json<SaveLicenseRequest>,
) -> ActixResult<HttpResponse> {
    DOCUMENT_SERVICE
        .save_license(license_data.into_inner(), &req)
        .await
}

pub async fn list_licenses(req: HttpRequest) -> ActixResult<HttpResponse> {
    DOCUMENT_SERVICE.list_licenses(&req).await
}

pub async fn delete_license(
    req: HttpRequest,
    query: web::Query<IdQuery>,
) -> ActixResult<HttpResponse> {
    DOCUMENT_SERVICE
        .delete_license(query.into_inner(), &req)
        .await
}

pub async fn upload_identity_photo(payload: Multipart) -> ActixResult<HttpResponse> {
    DOCUMENT_SERVICE
        .upload_photo(PhotoOwner::Identity, payload)
        .await
}

pub async fn upload_license_photo(payload: Multipart) -> ActixResult<HttpResponse> {
    DOCUMENT_SERVICE
        .upload_photo(PhotoOwner::License, payload)
        .await
}

pub async fn extract_identity(req: HttpRequest, payload: Multipart) -> ActixResult<HttpResponse> {
    DOCUMENT_SERVICE.extract_identity(&req, payload).await
}

pub async fn serve_upload(filename: web::Path<String>) -> ActixResult<HttpResponse> {
    DOCUMENT_SERVICE.serve_upload(filename.into_inner()).await
}

// 配置路由
pub fn configure_document_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/documents")
            .route("/templates", web::get().to(list_templates))
            .route("/create-template", web::post().to(create_template))
            .route("/update-template", web::put().to(update_template))
            .route("/delete-template", web::delete().to(delete_template))
            .route("/generate", web::post().to(generate_document))
            .route("/generated", web::get().to(list_generated))
            .route("/save-identity", web::post().to(save_identity))
            .route("/identities", web::get().to(list_identities))
            .route("/identities", web::delete().to(delete_identity))
            .route("/save-license", web::post().to(save_license))
            .route("/licenses", web::get().to(list_licenses))
            .route("/licenses", web::delete().to(delete_license))
            .route(
                "/upload-identity-photo",
                web::post().to(upload_identity_photo),
            )
            .route("/upload-license-photo", web::post().to(upload_license_photo))
            .route("/extract-identity", web::post().to(extract_identity)),
    );
}

// 已上传照片的公开访问路径
pub fn configure_upload_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/uploads/documentos/{filename}", web::get().to(serve_upload));
}
