use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 可租赁资产
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/ativo.ts")]
pub struct Ativo {
    pub id: String,
    pub tipo_id: String,
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
    pub disponivel: bool,
    pub estado: Option<String>,
    pub observacoes: Option<String>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}
