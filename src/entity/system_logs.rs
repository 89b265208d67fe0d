//! 系统日志实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "system_logs")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
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
    pub created_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::correcoes_sistema::Entity")]
    Correcoes,
}

impl Related<super::correcoes_sistema::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Correcoes.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_log(self) -> crate::models::auto_heal::entities::SystemLog {
        use crate::models::auto_heal::entities::SystemLog;
        use chrono::{DateTime, Utc};

        SystemLog {
            id: self.id,
            nivel: self.nivel,
            tipo: self.tipo,
            mensagem: self.mensagem,
            detalhes: self.detalhes,
            arquivo: self.arquivo,
            linha: self.linha,
            stack_trace: self.stack_trace,
            resolved: self.resolved,
            auto_resolved: self.auto_resolved,
            created_at: DateTime::<Utc>::from_timestamp_millis(self.created_at).unwrap_or_default(),
        }
    }
}
