use std::collections::HashMap;

use super::{SeaOrmStorage, new_id, now_millis, write_error};
use crate::entity::documento_templates::{ActiveModel, Column, Entity as DocumentoTemplates};
use crate::entity::documentos_gerados::{
    ActiveModel as GeradoActiveModel, Column as GeradoColumn, Entity as DocumentosGerados,
};
use crate::errors::{GestaoError, Result};
use crate::models::templates::{
    entities::{DocumentoGerado, DocumentoTemplate},
    requests::TemplateRequest,
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set, TransactionTrait,
};

fn campos_to_text(campos: Option<Vec<String>>) -> Option<String> {
    campos.and_then(|c| serde_json::to_string(&c).ok())
}

impl SeaOrmStorage {
    /// 列出模板
    pub async fn list_templates_impl(&self) -> Result<Vec<DocumentoTemplate>> {
        let templates = DocumentoTemplates::find()
            .order_by_desc(Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(|e| GestaoError::database_operation(format!("查询模板列表失败: {e}")))?;

        Ok(templates.into_iter().map(|m| m.into_template()).collect())
    }

    /// 通过 ID 获取模板
    pub async fn get_template_impl(&self, id: &str) -> Result<Option<DocumentoTemplate>> {
        let result = DocumentoTemplates::find_by_id(id.to_string())
            .one(&self.db)
            .await
            .map_err(|e| GestaoError::database_operation(format!("查询模板失败: {e}")))?;

        Ok(result.map(|m| m.into_template()))
    }

    /// 创建模板
    pub async fn create_template_impl(&self, req: TemplateRequest) -> Result<DocumentoTemplate> {
        let now = now_millis();

        let model = ActiveModel {
            id: Set(new_id()),
            nome: Set(req.nome),
            descricao: Set(req.descricao),
            tipo: Set(req.tipo),
            conteudo: Set(req.conteudo),
            campos: Set(campos_to_text(Some(req.campos.unwrap_or_default()))),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| write_error(e, "创建模板失败"))?;

        Ok(result.into_template())
    }

    /// 更新模板
    pub async fn update_template_impl(
        &self,
        id: &str,
        req: TemplateRequest,
    ) -> Result<Option<DocumentoTemplate>> {
        let existing = DocumentoTemplates::find_by_id(id.to_string())
            .one(&self.db)
            .await
            .map_err(|e| GestaoError::database_operation(format!("查询模板失败: {e}")))?;
        let Some(existing) = existing else {
            return Ok(None);
        };

        let mut model: ActiveModel = existing.into();
        model.updated_at = Set(now_millis());

        if let Some(nome) = req.nome {
            model.nome = Set(Some(nome));
        }
        if let Some(descricao) = req.descricao {
            model.descricao = Set(Some(descricao));
        }
        if let Some(tipo) = req.tipo {
            model.tipo = Set(Some(tipo));
        }
        if let Some(conteudo) = req.conteudo {
            model.conteudo = Set(Some(conteudo));
        }
        if req.campos.is_some() {
            model.campos = Set(campos_to_text(req.campos));
        }

        let updated = model
            .update(&self.db)
            .await
            .map_err(|e| write_error(e, "更新模板失败"))?;

        Ok(Some(updated.into_template()))
    }

    /// 删除模板及其生成记录
    pub async fn delete_template_impl(&self, id: &str) -> Result<bool> {
        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| GestaoError::database_operation(format!("开启事务失败: {e}")))?;

        DocumentosGerados::delete_many()
            .filter(GeradoColumn::TemplateId.eq(id))
            .exec(&txn)
            .await
            .map_err(|e| GestaoError::database_operation(format!("删除生成记录失败: {e}")))?;

        let result = DocumentoTemplates::delete_by_id(id.to_string())
            .exec(&txn)
            .await
            .map_err(|e| GestaoError::database_operation(format!("删除模板失败: {e}")))?;

        txn.commit()
            .await
            .map_err(|e| GestaoError::database_operation(format!("提交事务失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }

    /// 记录生成的文档
    pub async fn create_documento_gerado_impl(
        &self,
        template_id: &str,
        dados: String,
        arquivo_url: String,
    ) -> Result<DocumentoGerado> {
        let model = GeradoActiveModel {
            id: Set(new_id()),
            template_id: Set(template_id.to_string()),
            dados: Set(Some(dados)),
            arquivo_url: Set(Some(arquivo_url)),
            created_at: Set(now_millis()),
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| write_error(e, "保存生成记录失败"))?;

        let template_nome = DocumentoTemplates::find_by_id(template_id.to_string())
            .one(&self.db)
            .await
            .map_err(|e| GestaoError::database_operation(format!("查询模板失败: {e}")))?
            .and_then(|t| t.nome);

        Ok(result.into_documento_gerado(template_nome))
    }

    /// 列出生成的文档（最新在前）
    pub async fn list_documentos_gerados_impl(&self) -> Result<Vec<DocumentoGerado>> {
        let gerados = DocumentosGerados::find()
            .order_by_desc(GeradoColumn::CreatedAt)
            .all(&self.db)
            .await
            .map_err(|e| GestaoError::database_operation(format!("查询生成记录失败: {e}")))?;

        let nomes: HashMap<String, Option<String>> = DocumentoTemplates::find()
            .all(&self.db)
            .await
            .map_err(|e| GestaoError::database_operation(format!("查询模板列表失败: {e}")))?
            .into_iter()
            .map(|t| (t.id, t.nome))
            .collect();

        Ok(gerados
            .into_iter()
            .map(|m| {
                let nome = nomes.get(&m.template_id).cloned().flatten();
                m.into_documento_gerado(nome)
            })
            .collect())
    }
}
