use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::entities::TipoFoto;

// 保存身份证件结果
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/documento.ts")]
pub struct SaveIdentityResponse {
    pub success: bool,
    pub documento_id: String,
    pub message: String,
}

// 保存驾驶证结果
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/documento.ts")]
pub struct SaveLicenseResponse {
    pub success: bool,
    pub carta_id: String,
    pub message: String,
}

// 照片上传结果
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/documento.ts")]
pub struct UploadPhotoResponse {
    pub success: bool,
    pub url: String,
    pub filename: String,
    pub tipo: Option<TipoFoto>,
    pub message: String,
}
