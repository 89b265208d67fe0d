pub mod assets;
pub mod assistant;
pub mod auto_heal;
pub mod documents;
pub mod roles;
pub mod templates;
pub mod users;

pub use assets::AssetService;
pub use assistant::{ConversationStore, LegalAssistantService};
pub use auto_heal::{AutoHealService, HealQueue};
pub use documents::DocumentService;
pub use roles::RoleService;
pub use templates::TemplateService;
pub use users::UserService;

use actix_web::{HttpRequest, HttpResponse};
use std::sync::Arc;
use tracing::error;

use crate::errors::GestaoError;
use crate::models::{ApiResponse, ErrorCode};

/// 从 app_data 取出共享组件
pub(crate) fn shared<T: ?Sized + 'static>(request: &HttpRequest) -> Arc<T> {
    request
        .app_data::<actix_web::web::Data<Arc<T>>>()
        .unwrap_or_else(|| {
            panic!(
                "{} not found in app data",
                std::any::type_name::<T>()
            )
        })
        .get_ref()
        .clone()
}

/// 将业务错误转换为 HTTP 响应
///
/// 服务端错误记录完整信息，客户端只看到 `fallback` 的本地化提示。
pub(crate) fn error_response(err: &GestaoError, fallback: &str) -> HttpResponse {
    let (code, message) = match err {
        GestaoError::NotFound(msg) => (ErrorCode::NotFound, msg.as_str()),
        GestaoError::Validation(msg) => (ErrorCode::BadRequest, msg.as_str()),
        GestaoError::Conflict(_) => (ErrorCode::Conflict, "Registo já existe"),
        GestaoError::ExternalService(_) | GestaoError::AiResponse(_) => {
            (ErrorCode::ExternalServiceError, fallback)
        }
        GestaoError::QueueUnavailable(msg) => (ErrorCode::ServiceUnavailable, msg.as_str()),
        _ => (ErrorCode::InternalServerError, fallback),
    };

    if !err.is_client_error() {
        error!("{}", err);
    }

    HttpResponse::build(err.status_code()).json(ApiResponse::error_empty(code, message))
}

/// 去掉空白后非空的字符串字段
pub(crate) fn required(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

/// 缺少必填参数时的 400 响应
pub(crate) fn bad_request(message: &str) -> HttpResponse {
    HttpResponse::BadRequest().json(ApiResponse::error_empty(ErrorCode::BadRequest, message))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::StatusCode;

    #[test]
    fn test_error_status_mapping() {
        let cases = [
            (GestaoError::not_found("x"), StatusCode::NOT_FOUND),
            (GestaoError::validation("x"), StatusCode::BAD_REQUEST),
            (GestaoError::conflict("x"), StatusCode::CONFLICT),
            (GestaoError::external_service("x"), StatusCode::BAD_GATEWAY),
            (GestaoError::ai_response("x"), StatusCode::BAD_GATEWAY),
            (GestaoError::queue_unavailable("x"), StatusCode::SERVICE_UNAVAILABLE),
            (
                GestaoError::database_operation("x"),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];
        for (err, status) in cases {
            assert_eq!(error_response(&err, "falha").status(), status);
        }
    }
}
