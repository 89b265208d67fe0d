//! 管理面板静态资源
//!
//! 面板构建产物通过 rust-embed 编译进二进制，`frontend-custom/` 下的同名文件优先（开发用）。
//! 未知路径回退到 index.html；未知的 `/api` 路径返回 JSON 404。

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use rust_embed::Embed;
use std::path::Path;

use crate::config::AppConfig;
use crate::models::{ApiResponse, ErrorCode};

#[derive(Embed)]
#[folder = "frontend/dist/"]
struct DashboardAssets;

const CUSTOM_DIR: &str = "./frontend-custom";

const MISSING_DASHBOARD: &str = r#"<!DOCTYPE html>
<html lang="pt">
<head><meta charset="utf-8"><title>Gestão Documental</title></head>
<body>
    <h1>Painel não encontrado</h1>
    <p>Os ficheiros do painel não foram incluídos nesta compilação.</p>
</body>
</html>"#;

fn extension(path: &str) -> &str {
    Path::new(path)
        .extension()
        .and_then(|s| s.to_str())
        .unwrap_or("")
}

fn mime_for(path: &str) -> &'static str {
    match extension(path) {
        "html" => "text/html; charset=utf-8",
        "js" | "mjs" => "application/javascript; charset=utf-8",
        "css" => "text/css; charset=utf-8",
        "json" | "map" => "application/json; charset=utf-8",
        "svg" => "image/svg+xml",
        "ico" => "image/x-icon",
        "woff2" => "font/woff2",
        "woff" => "font/woff",
        "txt" => "text/plain; charset=utf-8",
        ext => crate::utils::file_magic::image_content_type(&format!(".{ext}")),
    }
}

/// 带内容哈希的构建产物可长期缓存
fn is_immutable(path: &str) -> bool {
    path.starts_with("_next/static/") || path.starts_with("assets/")
}

/// 替换 HTML 中的系统名称占位符
fn render_html(content: &[u8], config: &AppConfig) -> Vec<u8> {
    String::from_utf8_lossy(content)
        .replace("%SYSTEM_NAME%", &config.app.system_name)
        .into_bytes()
}

fn load(path: &str) -> Option<Vec<u8>> {
    if path.split('/').any(|segment| segment == "..") {
        return None;
    }
    std::fs::read(format!("{CUSTOM_DIR}/{path}"))
        .ok()
        .or_else(|| DashboardAssets::get(path).map(|f| f.data.to_vec()))
}

pub async fn serve_dashboard(req: HttpRequest) -> ActixResult<HttpResponse> {
    let path = req.match_info().query("tail").trim_start_matches('/');

    if path == "api" || path.starts_with("api/") {
        return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::NotFound,
            "Rota não encontrada",
        )));
    }

    let (content, file_path) = match (path.is_empty(), load(path)) {
        (false, Some(content)) => (Some(content), path),
        _ => (load("index.html"), "index.html"),
    };

    let Some(mut data) = content else {
        return Ok(HttpResponse::NotFound()
            .content_type("text/html; charset=utf-8")
            .body(MISSING_DASHBOARD));
    };

    let mime = mime_for(file_path);
    if mime.starts_with("text/html") {
        data = render_html(&data, AppConfig::get());
    }

    let cache_control = if is_immutable(file_path) {
        "public, max-age=31536000, immutable"
    } else {
        "no-cache, no-store, must-revalidate"
    };

    Ok(HttpResponse::Ok()
        .content_type(mime)
        .insert_header(("Cache-Control", cache_control))
        .body(data))
}

/// 放在最后作为兜底路由
pub fn configure_frontend_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/{tail:.*}", web::get().to(serve_dashboard));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mime_for() {
        assert_eq!(mime_for("index.html"), "text/html; charset=utf-8");
        assert_eq!(mime_for("app.mjs"), "application/javascript; charset=utf-8");
        assert_eq!(mime_for("logo.png"), "image/png");
        assert_eq!(mime_for("unknown.xyz"), "application/octet-stream");
    }

    #[test]
    fn test_is_immutable() {
        assert!(is_immutable("_next/static/chunks/main.js"));
        assert!(!is_immutable("index.html"));
    }

    #[test]
    fn test_load_rejects_parent_segments() {
        assert!(load("../Cargo.toml").is_none());
    }
}
