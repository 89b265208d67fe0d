use serde::Deserialize;
use ts_rs::TS;

use crate::models::common::lenient::double_option;

// 资产创建请求
#[derive(Debug, Clone, Default, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/ativo.ts")]
pub struct CreateAtivoRequest {
    pub tipo_id: Option<String>,
    pub nome: Option<String>,
    pub descricao: Option<String>,
    pub marca: Option<String>,
    pub modelo: Option<String>,
    pub ano: Option<String>,
    pub placa_matricula: Option<String>,
    pub numero_serie: Option<String>,
    pub valor_diario: Option<f64>,
    pub valor_semanal: Option<f64>,
    pub valor_mensal: Option<f64>,
    pub disponivel: Option<bool>,
    pub estado: Option<String>,
    pub observacoes: Option<String>,
}

// 资产更新请求（只覆盖出现的字段）
#[derive(Debug, Clone, Default, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/ativo.ts")]
pub struct UpdateAtivoRequest {
    #[serde(default, deserialize_with = "double_option")]
    #[ts(optional)]
    pub nome: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    #[ts(optional)]
    pub descricao: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    #[ts(optional)]
    pub marca: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    #[ts(optional)]
    pub modelo: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    #[ts(optional)]
    pub ano: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    #[ts(optional)]
    pub placa_matricula: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    #[ts(optional)]
    pub numero_serie: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    #[ts(optional)]
    pub valor_diario: Option<Option<f64>>,
    #[serde(default, deserialize_with = "double_option")]
    #[ts(optional)]
    pub valor_semanal: Option<Option<f64>>,
    #[serde(default, deserialize_with = "double_option")]
    #[ts(optional)]
    pub valor_mensal: Option<Option<f64>>,
    pub disponivel: Option<bool>,
    #[serde(default, deserialize_with = "double_option")]
    #[ts(optional)]
    pub estado: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    #[ts(optional)]
    pub observacoes: Option<Option<String>>,
}
