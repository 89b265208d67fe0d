//! 资产实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "ativos")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub tipo_id: String,
    pub nome: Option<String>,
    pub descricao: Option<String>,
    pub marca: Option<String>,
    pub modelo: Option<String>,
    pub ano: Option<String>,
    pub placa_matricula: Option<String>,
    pub numero_serie: Option<String>,
    pub valor_diario: Option<f64>,
    pub valor_semanal: Option<f64>,
    pub valor_mensal: Option<f64>,
    pub disponivel: bool,
    pub estado: Option<String>,
    pub observacoes: Option<String>,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

// 从数据库模型转换为业务模型
impl Model {
    pub fn into_ativo(self) -> crate::models::assets::entities::Ativo {
        use crate::models::assets::entities::Ativo;
        use chrono::{DateTime, Utc};

        Ativo {
            id: self.id,
            tipo_id: self.tipo_id,
            nome: self.nome,
            descricao: self.descricao,
            marca: self.marca,
            modelo: self.modelo,
            ano: self.ano,
            placa_matricula: self.placa_matricula,
            numero_serie: self.numero_serie,
            valor_diario: self.valor_diario,
            valor_semanal: self.valor_semanal,
            valor_mensal: self.valor_mensal,
            disponivel: self.disponivel,
            estado: self.estado,
            observacoes: self.observacoes,
            created_at: DateTime::<Utc>::from_timestamp_millis(self.created_at).unwrap_or_default(),
            updated_at: DateTime::<Utc>::from_timestamp_millis(self.updated_at).unwrap_or_default(),
        }
    }
}
