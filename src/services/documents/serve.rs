use actix_web::{HttpResponse, Result as ActixResult, http::header};
use std::path::Path;
use tracing::error;

use crate::config::AppConfig;
use crate::errors::GestaoError;
use crate::models::{ApiResponse, ErrorCode};
use crate::utils::file_magic::image_content_type;

/// 只允许上传时生成的平铺文件名
fn is_safe_filename(filename: &str) -> bool {
    !filename.is_empty()
        && !filename.starts_with('.')
        && !filename.contains("..")
        && filename
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'))
}

pub async fn serve_upload(filename: String) -> ActixResult<HttpResponse> {
    if !is_safe_filename(&filename) {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            "Nome de arquivo inválido",
        )));
    }

    let config = AppConfig::get();
    let file_path = Path::new(&config.upload.dir).join(&filename);

    let data = match std::fs::read(&file_path) {
        Ok(data) => data,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::FileNotFound,
                "Arquivo não encontrado",
            )));
        }
        Err(e) => {
            error!("{}", GestaoError::file_operation(format!("{e}")));
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Erro ao ler o arquivo",
                )),
            );
        }
    };

    let extension = Path::new(&filename)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| format!(".{ext}"))
        .unwrap_or_default();

    Ok(HttpResponse::Ok()
        .insert_header((header::CONTENT_TYPE, image_content_type(&extension)))
        .insert_header((header::CACHE_CONTROL, "public, max-age=86400"))
        .body(data))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_safe_filename() {
        assert!(is_safe_filename("0f8e2a1c-1234-4cde-9abc-000000000000.jpg"));
        assert!(!is_safe_filename("../config.toml"));
        assert!(!is_safe_filename("a/b.png"));
        assert!(!is_safe_filename(".env"));
        assert!(!is_safe_filename(""));
        assert!(!is_safe_filename("a\\b.png"));
    }
}
