//! 系统指标实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "system_metrics")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub tipo: String,
    pub valor: f64,
    pub unidade: Option<String>,
    pub status: String,
    pub alerta: bool,
    pub descricao_alerta: Option<String>,
    pub created_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_metric(self) -> crate::models::auto_heal::entities::SystemMetric {
        use crate::models::auto_heal::entities::{MetricStatus, SystemMetric};
        use chrono::{DateTime, Utc};

        SystemMetric {
            id: self.id,
            tipo: self.tipo,
            valor: self.valor,
            unidade: self.unidade,
            status: self
                .status
                .parse::<MetricStatus>()
                .unwrap_or(MetricStatus::Normal),
            alerta: self.alerta,
            descricao_alerta: self.descricao_alerta,
            created_at: DateTime::<Utc>::from_timestamp_millis(self.created_at).unwrap_or_default(),
        }
    }
}
