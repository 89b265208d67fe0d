use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 系统日志
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/auto_heal.ts")]
pub struct SystemLog {
    pub id: String,
    pub nivel: String,
    pub tipo: String,
    pub mensagem: String,
    pub detalhes: Option<String>,
    pub arquivo: Option<String>,
    pub linha: Option<i32>,
    pub stack_trace: Option<String>,
    pub resolved: bool,
    pub auto_resolved: bool,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

// 修正建议
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/auto_heal.ts")]
pub struct CorrecaoSistema {
    pub id: String,
    pub log_id: String,
    pub tipo_problema: String,
    pub descricao: String,
    pub causa_provavel: Option<String>,
    pub solucao: Option<String>,
    pub codigo_correcao: Option<String>,
    pub severidade: String,
    pub aplicada: bool,
    pub confirmada: bool,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

// 修复动作状态，只能向前推进
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, TS)]
#[serde(rename_all = "UPPERCASE")]
#[ts(export, export_to = "../frontend/src/types/generated/auto_heal.ts")]
pub enum HealStatus {
    Pending,
    Executing,
    Success,
    Failed,
}

impl HealStatus {
    pub const PENDING: &'static str = "PENDING";
    pub const EXECUTING: &'static str = "EXECUTING";
    pub const SUCCESS: &'static str = "SUCCESS";
    pub const FAILED: &'static str = "FAILED";

    pub fn as_str(&self) -> &'static str {
        match self {
            HealStatus::Pending => Self::PENDING,
            HealStatus::Executing => Self::EXECUTING,
            HealStatus::Success => Self::SUCCESS,
            HealStatus::Failed => Self::FAILED,
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, HealStatus::Success | HealStatus::Failed)
    }
}

impl std::fmt::Display for HealStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for HealStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            Self::PENDING => Ok(HealStatus::Pending),
            Self::EXECUTING => Ok(HealStatus::Executing),
            Self::SUCCESS => Ok(HealStatus::Success),
            Self::FAILED => Ok(HealStatus::Failed),
            _ => Err(format!("Invalid heal status: {s}")),
        }
    }
}

// 可执行的修复动作类型
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, TS)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[ts(export, export_to = "../frontend/src/types/generated/auto_heal.ts")]
pub enum HealActionType {
    ClearCache,
    RestartService,
    OptimizeDb,
    FixConfig,
    CheckDependencies,
}

impl HealActionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            HealActionType::ClearCache => "CLEAR_CACHE",
            HealActionType::RestartService => "RESTART_SERVICE",
            HealActionType::OptimizeDb => "OPTIMIZE_DB",
            HealActionType::FixConfig => "FIX_CONFIG",
            HealActionType::CheckDependencies => "CHECK_DEPENDENCIES",
        }
    }

    pub fn descricao(&self) -> &'static str {
        match self {
            HealActionType::ClearCache => "Limpar cache do sistema",
            HealActionType::RestartService => "Reiniciar serviços",
            HealActionType::OptimizeDb => "Otimizar banco de dados",
            HealActionType::FixConfig => "Corrigir configurações",
            HealActionType::CheckDependencies => "Verificar dependências",
        }
    }
}

impl std::fmt::Display for HealActionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for HealActionType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "CLEAR_CACHE" => Ok(HealActionType::ClearCache),
            "RESTART_SERVICE" => Ok(HealActionType::RestartService),
            "OPTIMIZE_DB" => Ok(HealActionType::OptimizeDb),
            "FIX_CONFIG" => Ok(HealActionType::FixConfig),
            "CHECK_DEPENDENCIES" => Ok(HealActionType::CheckDependencies),
            _ => Err(format!("Tipo de ação inválido: {s}")),
        }
    }
}

// 修复动作记录
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/auto_heal.ts")]
pub struct AutoHealAction {
    pub id: String,
    pub tipo: String,
    pub descricao: String,
    pub parametro: Option<String>,
    pub valor_novo: Option<String>,
    pub status: HealStatus,
    pub mensagem_resultado: Option<String>,
    pub executada_em: Option<chrono::DateTime<chrono::Utc>>,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

// 指标状态
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, TS)]
#[serde(rename_all = "UPPERCASE")]
#[ts(export, export_to = "../frontend/src/types/generated/auto_heal.ts")]
pub enum MetricStatus {
    Normal,
    Warning,
    Critical,
}

impl MetricStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            MetricStatus::Normal => "NORMAL",
            MetricStatus::Warning => "WARNING",
            MetricStatus::Critical => "CRITICAL",
        }
    }
}

impl std::fmt::Display for MetricStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for MetricStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "NORMAL" => Ok(MetricStatus::Normal),
            "WARNING" => Ok(MetricStatus::Warning),
            "CRITICAL" => Ok(MetricStatus::Critical),
            _ => Err(format!("Invalid metric status: {s}")),
        }
    }
}

// 系统指标
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/auto_heal.ts")]
pub struct SystemMetric {
    pub id: String,
    pub tipo: String,
    pub valor: f64,
    pub unidade: Option<String>,
    pub status: MetricStatus,
    pub alerta: bool,
    pub descricao_alerta: Option<String>,
    pub created_at: chrono::DateTime<chrono::Utc>,
}
