//! 身份证件实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "documentos_identificacao")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub numero: String,
    pub nome: String,
    pub apelido: Option<String>,
    pub data_nascimento: Option<String>,
    pub naturalidade: Option<String>,
    pub nacionalidade: Option<String>,
    pub sexo: Option<String>,
    pub altura: Option<String>,
    pub filiado: Option<String>,
    pub validade: Option<String>,
    pub emissao: Option<String>,
    pub morada: Option<String>,
    pub tipo_documento_id: String,
    pub ativo: bool,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::documento_fotos::Entity")]
    Fotos,
}

impl Related<super::documento_fotos::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Fotos.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_documento(
        self,
        fotos: Vec<crate::models::documents::entities::DocumentoFoto>,
    ) -> crate::models::documents::entities::DocumentoIdentificacao {
        use crate::models::documents::entities::DocumentoIdentificacao;
        use chrono::{DateTime, Utc};

        DocumentoIdentificacao {
            id: self.id,
            numero: self.numero,
            nome: self.nome,
            apelido: self.apelido,
            data_nascimento: self.data_nascimento,
            naturalidade: self.naturalidade,
            nacionalidade: self.nacionalidade,
            sexo: self.sexo,
            altura: self.altura,
            filiado: self.filiado,
            validade: self.validade,
            emissao: self.emissao,
            morada: self.morada,
            tipo_documento_id: self.tipo_documento_id,
            ativo: self.ativo,
            fotos,
            created_at: DateTime::<Utc>::from_timestamp_millis(self.created_at).unwrap_or_default(),
            updated_at: DateTime::<Utc>::from_timestamp_millis(self.updated_at).unwrap_or_default(),
        }
    }
}
