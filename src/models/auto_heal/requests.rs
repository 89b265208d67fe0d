use serde::Deserialize;
use ts_rs::TS;

// 记录日志请求
#[derive(Debug, Clone, Default, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/auto_heal.ts")]
pub struct CreateLogRequest {
    pub nivel: Option<String>,
    pub tipo: Option<String>,
    pub mensagem: Option<String>,
    /// 任意 JSON，存储为文本
    pub detalhes: Option<serde_json::Value>,
    pub arquivo: Option<String>,
    pub linha: Option<i32>,
    pub stack_trace: Option<String>,
}

// 上报指标请求
#[derive(Debug, Clone, Default, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/auto_heal.ts")]
pub struct CreateMetricRequest {
    pub tipo: Option<String>,
    pub valor: Option<f64>,
    pub unidade: Option<String>,
}

// 分析日志请求
#[derive(Debug, Clone, Default, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/auto_heal.ts")]
pub struct AnalyzeRequest {
    pub log_id: Option<String>,
}

// 应用修正请求
#[derive(Debug, Clone, Default, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/auto_heal.ts")]
pub struct ApplyFixRequest {
    pub correcao_id: Option<String>,
    pub confirmada: Option<bool>,
}

// 触发修复动作请求
#[derive(Debug, Clone, Default, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/auto_heal.ts")]
pub struct CreateActionRequest {
    pub tipo: Option<String>,
    pub parametro: Option<String>,
    pub valor_novo: Option<String>,
}

// 存储层使用的新日志
#[derive(Debug, Clone)]
pub struct NewSystemLog {
    pub nivel: String,
    pub tipo: String,
    pub mensagem: String,
    pub detalhes: Option<String>,
    pub arquivo: Option<String>,
    pub linha: Option<i32>,
    pub stack_trace: Option<String>,
}

// 存储层使用的新指标（已分级）
#[derive(Debug, Clone)]
pub struct NewSystemMetric {
    pub tipo: String,
    pub valor: f64,
    pub unidade: String,
    pub status: String,
    pub alerta: bool,
    pub descricao_alerta: Option<String>,
}

// 存储层使用的新修正建议
#[derive(Debug, Clone)]
pub struct NewCorrecao {
    pub log_id: String,
    pub tipo_problema: String,
    pub descricao: String,
    pub causa_provavel: Option<String>,
    pub solucao: Option<String>,
    pub codigo_correcao: Option<String>,
    pub severidade: String,
}
