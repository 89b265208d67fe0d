pub mod lenient;
pub mod response;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 通过查询参数传递的 ID（?id=）
#[derive(Debug, Clone, Default, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/common.ts")]
pub struct IdQuery {
    pub id: Option<String>,
}

impl IdQuery {
    /// 去掉空白后非空的 ID
    pub fn non_empty(&self) -> Option<&str> {
        self.id.as_deref().map(str::trim).filter(|id| !id.is_empty())
    }
}

// 仅包含成功标记的响应
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/common.ts")]
pub struct SuccessResponse {
    pub success: bool,
}

impl SuccessResponse {
    pub fn ok() -> Self {
        Self { success: true }
    }
}
