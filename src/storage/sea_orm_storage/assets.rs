use super::{SeaOrmStorage, new_id, now_millis};
use crate::entity::ativos::{ActiveModel, Column, Entity as Ativos};
use crate::errors::{GestaoError, Result};
use crate::models::assets::{
    entities::Ativo,
    requests::{CreateAtivoRequest, UpdateAtivoRequest},
};
use sea_orm::{ActiveModelTrait, EntityTrait, QueryOrder, Set};

impl SeaOrmStorage {
    /// 列出资产
    pub async fn list_ativos_impl(&self) -> Result<Vec<Ativo>> {
        let ativos = Ativos::find()
            .order_by_desc(Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(|e| GestaoError::database_operation(format!("查询资产列表失败: {e}")))?;

        Ok(ativos.into_iter().map(|m| m.into_ativo()).collect())
    }

    /// 创建资产
    pub async fn create_ativo_impl(&self, req: CreateAtivoRequest) -> Result<Ativo> {
        let now = now_millis();

        let model = ActiveModel {
            id: Set(new_id()),
            tipo_id: Set(req
                .tipo_id
                .filter(|t| !t.is_empty())
                .unwrap_or_else(|| "default".to_string())),
            nome: Set(req.nome),
            descricao: Set(req.descricao),
            marca: Set(req.marca),
            modelo: Set(req.modelo),
            ano: Set(req.ano),
            placa_matricula: Set(req.placa_matricula),
            numero_serie: Set(req.numero_serie),
            valor_diario: Set(req.valor_diario),
            valor_semanal: Set(req.valor_semanal),
            valor_mensal: Set(req.valor_mensal),
            disponivel: Set(req.disponivel.unwrap_or(true)),
            estado: Set(req.estado),
            observacoes: Set(req.observacoes),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| GestaoError::database_operation(format!("创建资产失败: {e}")))?;

        Ok(result.into_ativo())
    }

    /// 更新资产，只覆盖请求中出现的字段
    pub async fn update_ativo_impl(
        &self,
        id: &str,
        req: UpdateAtivoRequest,
    ) -> Result<Option<Ativo>> {
        let existing = Ativos::find_by_id(id.to_string())
            .one(&self.db)
            .await
            .map_err(|e| GestaoError::database_operation(format!("查询资产失败: {e}")))?;
        let Some(existing) = existing else {
            return Ok(None);
        };

        let mut model: ActiveModel = existing.into();
        model.updated_at = Set(now_millis());

        if let Some(nome) = req.nome {
            model.nome = Set(nome);
        }
        if let Some(descricao) = req.descricao {
            model.descricao = Set(descricao);
        }
        if let Some(marca) = req.marca {
            model.marca = Set(marca);
        }
        if let Some(modelo) = req.modelo {
            model.modelo = Set(modelo);
        }
        if let Some(ano) = req.ano {
            model.ano = Set(ano);
        }
        if let Some(placa) = req.placa_matricula {
            model.placa_matricula = Set(placa);
        }
        if let Some(serie) = req.numero_serie {
            model.numero_serie = Set(serie);
        }
        if let Some(valor) = req.valor_diario {
            model.valor_diario = Set(valor);
        }
        if let Some(valor) = req.valor_semanal {
            model.valor_semanal = Set(valor);
        }
        if let Some(valor) = req.valor_mensal {
            model.valor_mensal = Set(valor);
        }
        if let Some(disponivel) = req.disponivel {
            model.disponivel = Set(disponivel);
        }
        if let Some(estado) = req.estado {
            model.estado = Set(estado);
        }
        if let Some(observacoes) = req.observacoes {
            model.observacoes = Set(observacoes);
        }

        let updated = model
            .update(&self.db)
            .await
            .map_err(|e| GestaoError::database_operation(format!("更新资产失败: {e}")))?;

        Ok(Some(updated.into_ativo()))
    }

    /// 删除资产
    pub async fn delete_ativo_impl(&self, id: &str) -> Result<bool> {
        let result = Ativos::delete_by_id(id.to_string())
            .exec(&self.db)
            .await
            .map_err(|e| GestaoError::database_operation(format!("删除资产失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }
}
