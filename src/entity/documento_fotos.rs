//! 证件照片实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "documento_fotos")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub documento_id: Option<String>,
    pub carta_id: Option<String>,
    pub tipo: String,
    pub url: String,
    pub ordem: i32,
    pub created_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::documentos_identificacao::Entity",
        from = "Column::DocumentoId",
        to = "super::documentos_identificacao::Column::Id"
    )]
    Documento,
    #[sea_orm(
        belongs_to = "super::cartas_conducao::Entity",
        from = "Column::CartaId",
        to = "super::cartas_conducao::Column::Id"
    )]
    Carta,
}

impl Related<super::documentos_identificacao::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Documento.def()
    }
}

impl Related<super::cartas_conducao::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Carta.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_foto(self) -> crate::models::documents::entities::DocumentoFoto {
        use crate::models::documents::entities::{DocumentoFoto, TipoFoto};

        DocumentoFoto {
            id: self.id,
            tipo: self.tipo.parse::<TipoFoto>().unwrap_or(TipoFoto::Outra),
            url: self.url,
            ordem: self.ordem,
        }
    }
}
