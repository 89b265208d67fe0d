use serde::Deserialize;
use ts_rs::TS;

use crate::models::common::lenient::null_as_default;

use super::entities::TipoFoto;

// 随证件提交的照片
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/documento.ts")]
pub struct FotoInput {
    pub tipo: TipoFoto,
    pub url: String,
}

// 保存身份证件请求
#[derive(Debug, Clone, Default, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/documento.ts")]
pub struct SaveIdentityRequest {
    pub numero: Option<String>,
    pub nome: Option<String>,
    pub apelido: Option<String>,
    pub data_nascimento: Option<String>,
    pub naturalidade: Option<String>,
    pub nacionalidade: Option<String>,
    pub sexo: Option<String>,
    pub altura: Option<String>,
    pub filiado: Option<String>,
    pub validade: Option<String>,
    pub emissao: Option<String>,
    pub morada: Option<String>,
    pub tipo_documento_id: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub fotos: Vec<FotoInput>,
}

// 保存驾驶证请求
#[derive(Debug, Clone, Default, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/documento.ts")]
pub struct SaveLicenseRequest {
    pub numero: Option<String>,
    pub nome: Option<String>,
    pub apelido: Option<String>,
    pub data_nascimento: Option<String>,
    pub naturalidade: Option<String>,
    pub categoria: Option<String>,
    pub validade: Option<String>,
    pub emissao: Option<String>,
    pub numero_registo: Option<String>,
    pub morada: Option<String>,
    pub raw_extraido: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub fotos: Vec<FotoInput>,
}

// 存储层使用的身份证件数据（必填字段已校验）
#[derive(Debug, Clone)]
pub struct NewIdentity {
    pub numero: String,
    pub nome: String,
    pub request: SaveIdentityRequest,
}

// 存储层使用的驾驶证数据（必填字段已校验）
#[derive(Debug, Clone)]
pub struct NewLicense {
    pub numero: String,
    pub nome: String,
    pub request: SaveLicenseRequest,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_null_fotos_become_empty() {
        let req: SaveIdentityRequest =
            serde_json::from_str(r#"{"numero":"1","nome":"Ana","fotos":null}"#).unwrap();
        assert_eq!(req.nome.as_deref(), Some("Ana"));
        assert!(req.fotos.is_empty());

        let req: SaveLicenseRequest =
            serde_json::from_str(r#"{"numero":"2","nome":"Rui","fotos":null}"#).unwrap();
        assert!(req.fotos.is_empty());
    }

    #[test]
    fn test_missing_fotos_become_empty() {
        let req: SaveLicenseRequest = serde_json::from_str(r#"{"numero":"2","nome":"Rui"}"#).unwrap();
        assert!(req.fotos.is_empty());
    }
}
