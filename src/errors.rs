//! 统一错误处理模块
//!
//! 每个错误变体声明错误代码、类型名称和对应的 HTTP 状态码，
//! 服务层据此把存储、缓存、AI 与修复队列的错误转换为响应。

use std::fmt;

use actix_web::http::StatusCode;

/// 定义错误类型的宏
///
/// 自动生成：
/// - enum 定义
/// - code() 方法 - 返回错误代码
/// - error_type() 方法 - 返回错误类型名称
/// - message() 方法 - 返回错误详情
/// - status_code() 方法 - 返回 HTTP 状态码
/// - 便捷构造函数
macro_rules! define_gestao_errors {
    ($(
        $variant:ident($code:literal, $type_name:literal, $status:ident)
    ),* $(,)?) => {
        #[derive(Debug, Clone)]
        pub enum GestaoError {
            $($variant(String),)*
        }

        impl GestaoError {
            /// 获取错误代码
            pub fn code(&self) -> &'static str {
                match self {
                    $(GestaoError::$variant(_) => $code,)*
                }
            }

            /// 获取错误类型名称
            pub fn error_type(&self) -> &'static str {
                match self {
                    $(GestaoError::$variant(_) => $type_name,)*
                }
            }

            /// 获取错误详情
            pub fn message(&self) -> &str {
                match self {
                    $(GestaoError::$variant(msg) => msg,)*
                }
            }

            /// 获取对应的 HTTP 状态码
            pub fn status_code(&self) -> StatusCode {
                match self {
                    $(GestaoError::$variant(_) => StatusCode::$status,)*
                }
            }
        }

        // 生成便捷构造函数
        paste::paste! {
            impl GestaoError {
                $(
                    pub fn [<$variant:snake>]<T: Into<String>>(msg: T) -> Self {
                        GestaoError::$variant(msg.into())
                    }
                )*
            }
        }
    };
}

define_gestao_errors! {
    CacheConnection("E001", "Cache Connection Error", INTERNAL_SERVER_ERROR),
    CachePluginNotFound("E002", "Cache Plugin Not Found", INTERNAL_SERVER_ERROR),
    DatabaseConfig("E003", "Database Configuration Error", INTERNAL_SERVER_ERROR),
    DatabaseConnection("E004", "Database Connection Error", INTERNAL_SERVER_ERROR),
    DatabaseOperation("E005", "Database Operation Error", INTERNAL_SERVER_ERROR),
    FileOperation("E006", "File Operation Error", INTERNAL_SERVER_ERROR),
    Validation("E007", "Validation Error", BAD_REQUEST),
    NotFound("E008", "Resource Not Found", NOT_FOUND),
    Serialization("E009", "Serialization Error", INTERNAL_SERVER_ERROR),
    // 唯一约束冲突：重复邮箱、角色名、用户角色关联
    Conflict("E010", "Resource Conflict", CONFLICT),
    // AI 补全服务不可达或返回非 2xx
    ExternalService("E011", "External Service Error", BAD_GATEWAY),
    // AI 回复无法解析为预期的 JSON
    AiResponse("E012", "AI Response Error", BAD_GATEWAY),
    // 自动修复队列已满或已关闭
    QueueUnavailable("E013", "Queue Unavailable", SERVICE_UNAVAILABLE),
}

impl GestaoError {
    /// 由请求内容引起的错误，无需按服务端故障记录
    pub fn is_client_error(&self) -> bool {
        self.status_code().is_client_error() && !matches!(self, GestaoError::Conflict(_))
    }

    /// 格式化为彩色输出（用于开发环境）
    #[cfg(debug_assertions)]
    pub fn format_colored(&self) -> String {
        format!(
            "\x1b[1;31m[ERROR]\x1b[0m \x1b[33m{}\x1b[0m \x1b[31m{}\x1b[0m\n  {}",
            self.code(),
            self.error_type(),
            self.message()
        )
    }

    /// 格式化为简洁输出
    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }
}

impl fmt::Display for GestaoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for GestaoError {}

// 为常见的错误类型实现 From trait
impl From<sea_orm::DbErr> for GestaoError {
    fn from(err: sea_orm::DbErr) -> Self {
        GestaoError::DatabaseOperation(err.to_string())
    }
}

impl From<std::io::Error> for GestaoError {
    fn from(err: std::io::Error) -> Self {
        GestaoError::FileOperation(err.to_string())
    }
}

impl From<serde_json::Error> for GestaoError {
    fn from(err: serde_json::Error) -> Self {
        GestaoError::Serialization(err.to_string())
    }
}

impl From<reqwest::Error> for GestaoError {
    fn from(err: reqwest::Error) -> Self {
        GestaoError::ExternalService(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, GestaoError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(GestaoError::cache_connection("redis indisponível").code(), "E001");
        assert_eq!(GestaoError::database_config("url inválida").code(), "E003");
        assert_eq!(GestaoError::validation("Mensagem é obrigatória").code(), "E007");
        assert_eq!(GestaoError::ai_response("resposta vazia").code(), "E012");
        assert_eq!(GestaoError::queue_unavailable("fila cheia").code(), "E013");
    }

    #[test]
    fn test_error_types() {
        assert_eq!(
            GestaoError::cache_connection("redis indisponível").error_type(),
            "Cache Connection Error"
        );
        assert_eq!(
            GestaoError::external_service("timeout").error_type(),
            "External Service Error"
        );
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(GestaoError::validation("x").status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(GestaoError::not_found("x").status_code(), StatusCode::NOT_FOUND);
        assert_eq!(GestaoError::conflict("x").status_code(), StatusCode::CONFLICT);
        assert_eq!(GestaoError::ai_response("x").status_code(), StatusCode::BAD_GATEWAY);
        assert_eq!(
            GestaoError::queue_unavailable("x").status_code(),
            StatusCode::SERVICE_UNAVAILABLE
        );
        assert_eq!(
            GestaoError::database_operation("x").status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_client_errors() {
        assert!(GestaoError::validation("x").is_client_error());
        assert!(GestaoError::not_found("x").is_client_error());
        // 冲突通常意味着并发写入，需要记录
        assert!(!GestaoError::conflict("x").is_client_error());
        assert!(!GestaoError::external_service("x").is_client_error());
    }

    #[test]
    fn test_error_message() {
        let err = GestaoError::not_found("Template não encontrado");
        assert_eq!(err.message(), "Template não encontrado");
    }

    #[test]
    fn test_format_simple() {
        let err = GestaoError::validation("ID do log é obrigatório");
        let formatted = err.format_simple();
        assert!(formatted.contains("Validation Error"));
        assert!(formatted.contains("ID do log é obrigatório"));
    }

    #[test]
    fn test_from_serde_json() {
        // 会话历史损坏时的解析错误
        let err: GestaoError = serde_json::from_str::<serde_json::Value>("[{\"role\":")
            .unwrap_err()
            .into();
        assert_eq!(err.code(), "E009");
    }
}
