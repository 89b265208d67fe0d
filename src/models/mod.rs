pub mod assets;
pub mod assistant;
pub mod auto_heal;
pub mod common;
pub mod documents;
pub mod roles;
pub mod templates;
pub mod users;

pub use common::response::ApiResponse;
pub use common::{IdQuery, SuccessResponse};

/// 程序启动时间
#[derive(Debug, Clone)]
pub struct AppStartTime {
    pub start_datetime: chrono::DateTime<chrono::Utc>,
}

/// 业务错误码
///
/// 0 表示成功；1xxx 通用错误；2xxx 起按业务模块划分。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ErrorCode {
    Success = 0,

    BadRequest = 1000,
    NotFound = 1004,
    Conflict = 1009,
    InternalServerError = 1500,
    ExternalServiceError = 1502,
    ServiceUnavailable = 1503,

    AtivoNotFound = 2001,

    UserNotFound = 3001,
    UserAlreadyExists = 3002,
    RoleNotFound = 3101,
    RoleAlreadyExists = 3102,
    UserRoleAlreadyAssigned = 3103,

    TemplateNotFound = 4001,
    DocumentNotFound = 4101,
    FileUploadFailed = 4201,
    FileTypeNotAllowed = 4202,
    FileSizeExceeded = 4203,
    FileNotFound = 4204,

    AiResponseInvalid = 5001,

    LogNotFound = 6001,
    CorrecaoNotFound = 6002,
    HealActionInvalid = 6003,
}
