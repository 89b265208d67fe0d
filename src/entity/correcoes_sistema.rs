//! 系统修正建议实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "correcoes_sistema")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
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
    pub created_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::system_logs::Entity",
        from = "Column::LogId",
        to = "super::system_logs::Column::Id"
    )]
    Log,
}

impl Related<super::system_logs::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Log.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_correcao(self) -> crate::models::auto_heal::entities::CorrecaoSistema {
        use crate::models::auto_heal::entities::CorrecaoSistema;
        use chrono::{DateTime, Utc};

        CorrecaoSistema {
            id: self.id,
            log_id: self.log_id,
            tipo_problema: self.tipo_problema,
            descricao: self.descricao,
            causa_provavel: self.causa_provavel,
            solucao: self.solucao,
            codigo_correcao: self.codigo_correcao,
            severidade: self.severidade,
            aplicada: self.aplicada,
            confirmada: self.confirmada,
            created_at: DateTime::<Utc>::from_timestamp_millis(self.created_at).unwrap_or_default(),
        }
    }
}
