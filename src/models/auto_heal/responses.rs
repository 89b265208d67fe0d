use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::models::common::lenient::{loose_string, string_list};

use super::entities::{CorrecaoSistema, SystemLog, SystemMetric};

// 带修正建议的日志
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/auto_heal.ts")]
pub struct SystemLogWithCorrecoes {
    #[serde(flatten)]
    #[ts(flatten)]
    pub log: SystemLog,
    pub correcoes: Vec<CorrecaoSistema>,
}

// 带日志的修正建议
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/auto_heal.ts")]
pub struct CorrecaoWithLog {
    #[serde(flatten)]
    #[ts(flatten)]
    pub correcao: CorrecaoSistema,
    pub log: Option<SystemLog>,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/auto_heal.ts")]
pub struct CreateLogResponse {
    pub success: bool,
    pub log_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/auto_heal.ts")]
pub struct CreateMetricResponse {
    pub success: bool,
    pub metrica: SystemMetric,
}

// 模型返回的分析结果
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/auto_heal.ts")]
pub struct AnaliseProblema {
    #[serde(default, deserialize_with = "loose_string")]
    pub tipo_problema: Option<String>,
    #[serde(default, deserialize_with = "loose_string")]
    pub descricao: Option<String>,
    #[serde(default, deserialize_with = "loose_string")]
    pub causa_provavel: Option<String>,
    #[serde(default, deserialize_with = "loose_string")]
    pub solucao: Option<String>,
    #[serde(default, deserialize_with = "loose_string")]
    pub codigo_correcao: Option<String>,
    #[serde(default, deserialize_with = "loose_string")]
    pub severidade: Option<String>,
    #[serde(default, deserialize_with = "string_list")]
    pub melhorias_adicionais: Vec<String>,
}

// 分析后的修正建议（ID + 分析内容）
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/auto_heal.ts")]
pub struct AnaliseCorrecao {
    pub id: String,
    #[serde(flatten)]
    #[ts(flatten)]
    pub analise: AnaliseProblema,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/auto_heal.ts")]
pub struct AnalyzeResponse {
    pub success: bool,
    pub correcao: AnaliseCorrecao,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/auto_heal.ts")]
pub struct ApplyFixResponse {
    pub success: bool,
    pub correcao: CorrecaoSistema,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/auto_heal.ts")]
pub struct CreateActionResponse {
    pub success: bool,
    pub acao_id: String,
    pub mensagem: String,
}
