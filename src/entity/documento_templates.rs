//! 文档模板实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "documento_templates")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub nome: Option<String>,
    pub descricao: Option<String>,
    pub tipo: Option<String>,
    pub conteudo: Option<String>,
    /// 字段名列表的 JSON 文本
    pub campos: Option<String>,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::documentos_gerados::Entity")]
    DocumentosGerados,
}

impl Related<super::documentos_gerados::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::DocumentosGerados.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_template(self) -> crate::models::templates::entities::DocumentoTemplate {
        use crate::models::templates::entities::DocumentoTemplate;
        use chrono::{DateTime, Utc};

        DocumentoTemplate {
            id: self.id,
            nome: self.nome,
            descricao: self.descricao,
            tipo: self.tipo,
            conteudo: self.conteudo,
            campos: self
                .campos
                .and_then(|text| serde_json::from_str::<Vec<String>>(&text).ok())
                .unwrap_or_default(),
            created_at: DateTime::<Utc>::from_timestamp_millis(self.created_at).unwrap_or_default(),
            updated_at: DateTime::<Utc>::from_timestamp_millis(self.updated_at).unwrap_or_default(),
        }
    }
}
