use actix_multipart::Multipart;
use actix_web::{HttpResponse, Result as ActixResult};
use futures_util::TryStreamExt;
use futures_util::stream::StreamExt;
use std::fs;
use std::path::Path;
use tracing::{error, info};
use uuid::Uuid;

use crate::config::AppConfig;
use crate::errors::GestaoError;
use crate::models::{
    ApiResponse, ErrorCode,
    documents::{entities::TipoFoto, responses::UploadPhotoResponse},
};
use crate::utils::{detect_image_extension, validate_magic_bytes};

/// 照片所属的证件类型
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhotoOwner {
    Identity,
    License,
}

impl PhotoOwner {
    fn label(&self) -> &'static str {
        match self {
            PhotoOwner::Identity => "identity document",
            PhotoOwner::License => "driving license",
        }
    }
}

/// 表单中的图片文件
pub(super) struct UploadedImage {
    pub original_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

/// 解析后的上传表单
pub(super) struct ImageForm {
    pub file: Option<UploadedImage>,
    pub tipo: Option<String>,
}

fn reject(code: ErrorCode, message: &str) -> HttpResponse {
    HttpResponse::BadRequest().json(ApiResponse::error_empty(code, message))
}

/// 读取 multipart 表单：`file` 必须是图片且不超过 `max_size`，`tipo` 为可选文本
pub(super) async fn read_image_form(
    mut payload: Multipart,
    max_size: usize,
) -> Result<ImageForm, HttpResponse> {
    let mut form = ImageForm {
        file: None,
        tipo: None,
    };

    while let Ok(Some(mut field)) = payload.try_next().await {
        let content_disposition = field.content_disposition();
        let name = content_disposition
            .and_then(|cd| cd.get_name())
            .unwrap_or_default()
            .to_string();

        match name.as_str() {
            "file" => {
                if form.file.is_some() {
                    return Err(reject(
                        ErrorCode::BadRequest,
                        "Envie apenas um arquivo de cada vez",
                    ));
                }

                let original_name = content_disposition
                    .and_then(|cd| cd.get_filename())
                    .map(|s| s.to_string())
                    .unwrap_or_default();

                let content_type = field
                    .content_type()
                    .map(|ct| ct.to_string())
                    .unwrap_or_default();
                if !content_type.starts_with("image/") {
                    return Err(reject(
                        ErrorCode::FileTypeNotAllowed,
                        "Por favor, selecione apenas imagens",
                    ));
                }

                let mut bytes = Vec::new();
                while let Some(chunk) = field.next().await {
                    let data = chunk.map_err(|e| {
                        error!("Failed to read upload chunk: {}", e);
                        reject(ErrorCode::FileUploadFailed, "Erro ao ler o arquivo")
                    })?;
                    if bytes.len() + data.len() > max_size {
                        return Err(reject(
                            ErrorCode::FileSizeExceeded,
                            "Arquivo excede o tamanho máximo permitido",
                        ));
                    }
                    bytes.extend_from_slice(&data);
                }

                form.file = Some(UploadedImage {
                    original_name,
                    content_type,
                    bytes,
                });
            }
            "tipo" => {
                let mut raw = Vec::new();
                while let Some(chunk) = field.next().await {
                    if let Ok(data) = chunk {
                        raw.extend_from_slice(&data);
                    }
                }
                let tipo = String::from_utf8_lossy(&raw).trim().to_string();
                if !tipo.is_empty() {
                    form.tipo = Some(tipo);
                }
            }
            // 其他字段忽略
            _ => while field.next().await.is_some() {},
        }
    }

    Ok(form)
}

/// 确定存储扩展名：优先使用文件名中的扩展名，缺失时按内容识别
fn resolve_extension(image: &UploadedImage) -> Option<String> {
    Path::new(&image.original_name)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| format!(".{}", ext.to_lowercase()))
        .or_else(|| detect_image_extension(&image.bytes).map(str::to_string))
}

pub async fn upload_photo(owner: PhotoOwner, payload: Multipart) -> ActixResult<HttpResponse> {
    let config = AppConfig::get();
    let upload = &config.upload;

    let form = match read_image_form(payload, upload.max_size).await {
        Ok(form) => form,
        Err(response) => return Ok(response),
    };

    let Some(image) = form.file else {
        return Ok(reject(ErrorCode::FileNotFound, "Arquivo não fornecido"));
    };

    let tipo = match form.tipo.as_deref().map(str::parse::<TipoFoto>) {
        None => None,
        Some(Ok(tipo)) => Some(tipo),
        Some(Err(_)) => return Ok(reject(ErrorCode::BadRequest, "Tipo de foto inválido")),
    };

    let Some(extension) = resolve_extension(&image) else {
        return Ok(reject(
            ErrorCode::FileTypeNotAllowed,
            "Por favor, selecione apenas imagens",
        ));
    };

    if !upload
        .allowed_types
        .iter()
        .any(|t| t.to_lowercase() == extension)
    {
        return Ok(reject(
            ErrorCode::FileTypeNotAllowed,
            "Tipo de arquivo não permitido",
        ));
    }

    if !validate_magic_bytes(&image.bytes, &extension) {
        return Ok(reject(
            ErrorCode::FileTypeNotAllowed,
            "Conteúdo do arquivo não corresponde à extensão",
        ));
    }

    let filename = format!("{}{}", Uuid::new_v4(), extension);
    let file_path = Path::new(&upload.dir).join(&filename);

    if let Err(e) = fs::create_dir_all(&upload.dir).and_then(|_| fs::write(&file_path, &image.bytes))
    {
        error!("{}", GestaoError::file_operation(format!("{e}")));
        return Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::FileUploadFailed,
                "Erro ao fazer upload da foto",
            )),
        );
    }

    info!(
        "Stored {} photo {} ({} bytes, {})",
        owner.label(),
        filename,
        image.bytes.len(),
        image.content_type
    );

    let message = "Foto carregada com sucesso!";
    Ok(HttpResponse::Ok().json(ApiResponse::success(
        UploadPhotoResponse {
            success: true,
            url: format!("{}/{}", upload.public_prefix.trim_end_matches('/'), filename),
            filename,
            tipo,
            message: message.to_string(),
        },
        message,
    )))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn image(name: &str, bytes: &[u8]) -> UploadedImage {
        UploadedImage {
            original_name: name.to_string(),
            content_type: "image/png".to_string(),
            bytes: bytes.to_vec(),
        }
    }

    #[test]
    fn test_resolve_extension_prefers_filename() {
        assert_eq!(
            resolve_extension(&image("Frente.JPG", &[0xFF, 0xD8, 0xFF])).as_deref(),
            Some(".jpg")
        );
    }

    #[test]
    fn test_resolve_extension_falls_back_to_content() {
        let png = [0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];
        assert_eq!(resolve_extension(&image("blob", &png)).as_deref(), Some(".png"));
        assert_eq!(resolve_extension(&image("blob", b"text")), None);
    }
}
