//! 自动修复动作实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "auto_heal_actions")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub tipo: String,
    pub descricao: String,
    pub parametro: Option<String>,
    pub valor_novo: Option<String>,
    pub status: String,
    pub mensagem_resultado: Option<String>,
    pub executada_em: Option<i64>,
    pub created_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_action(self) -> crate::models::auto_heal::entities::AutoHealAction {
        use crate::models::auto_heal::entities::{AutoHealAction, HealStatus};
        use chrono::{DateTime, Utc};

        AutoHealAction {
            id: self.id,
            tipo: self.tipo,
            descricao: self.descricao,
            parametro: self.parametro,
            valor_novo: self.valor_novo,
            status: self.status.parse::<HealStatus>().unwrap_or(HealStatus::Failed),
            mensagem_resultado: self.mensagem_resultado,
            executada_em: self
                .executada_em
                .and_then(DateTime::<Utc>::from_timestamp_millis),
            created_at: DateTime::<Utc>::from_timestamp_millis(self.created_at).unwrap_or_default(),
        }
    }
}
