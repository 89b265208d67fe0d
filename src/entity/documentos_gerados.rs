//! 生成文档记录实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "documentos_gerados")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub template_id: String,
    pub dados: Option<String>,
    pub arquivo_url: Option<String>,
    pub created_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::documento_templates::Entity",
        from = "Column::TemplateId",
        to = "super::documento_templates::Column::Id"
    )]
    Template,
}

impl Related<super::documento_templates::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Template.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_documento_gerado(
        self,
        template_nome: Option<String>,
    ) -> crate::models::templates::entities::DocumentoGerado {
        use crate::models::templates::entities::DocumentoGerado;
        use chrono::{DateTime, Utc};

        DocumentoGerado {
            id: self.id,
            template_id: self.template_id,
            template_nome,
            dados: self
                .dados
                .and_then(|text| serde_json::from_str(&text).ok()),
            arquivo_url: self.arquivo_url,
            created_at: DateTime::<Utc>::from_timestamp_millis(self.created_at).unwrap_or_default(),
        }
    }
}
