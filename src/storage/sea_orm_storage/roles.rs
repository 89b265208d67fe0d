use std::collections::HashMap;

use super::{SeaOrmStorage, new_id, now_millis, write_error};
use crate::entity::roles::{ActiveModel, Column, Entity as Roles};
use crate::entity::user_roles::{Column as UserRoleColumn, Entity as UserRoles};
use crate::errors::{GestaoError, Result};
use crate::models::roles::{
    entities::Role,
    requests::{CreateRoleRequest, UpdateRoleRequest},
    responses::RoleWithCount,
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set, TransactionTrait,
};

/// 权限以 JSON 文本存储；null 视为未设置
fn permissoes_to_text(value: Option<serde_json::Value>) -> Option<String> {
    value.filter(|v| !v.is_null()).map(|v| v.to_string())
}

impl SeaOrmStorage {
    /// 列出角色及关联用户数
    pub async fn list_roles_with_count_impl(&self) -> Result<Vec<RoleWithCount>> {
        let roles = Roles::find()
            .order_by_desc(Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(|e| GestaoError::database_operation(format!("查询角色列表失败: {e}")))?;

        let links = UserRoles::find()
            .all(&self.db)
            .await
            .map_err(|e| GestaoError::database_operation(format!("查询用户角色失败: {e}")))?;

        let mut counts: HashMap<String, u64> = HashMap::new();
        for link in links {
            *counts.entry(link.role_id).or_insert(0) += 1;
        }

        Ok(roles
            .into_iter()
            .map(|m| {
                let user_roles = counts.get(&m.id).copied().unwrap_or(0);
                RoleWithCount {
                    role: m.into_role(),
                    user_roles,
                }
            })
            .collect())
    }

    /// 创建角色
    pub async fn create_role_impl(&self, nome: String, req: CreateRoleRequest) -> Result<Role> {
        let now = now_millis();

        let model = ActiveModel {
            id: Set(new_id()),
            nome: Set(nome),
            descricao: Set(req.descricao),
            permissoes: Set(permissoes_to_text(req.permissoes)),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| write_error(e, "创建角色失败"))?;

        Ok(result.into_role())
    }

    /// 更新角色
    pub async fn update_role_impl(
        &self,
        id: &str,
        req: UpdateRoleRequest,
    ) -> Result<Option<Role>> {
        let existing = Roles::find_by_id(id.to_string())
            .one(&self.db)
            .await
            .map_err(|e| GestaoError::database_operation(format!("查询角色失败: {e}")))?;
        let Some(existing) = existing else {
            return Ok(None);
        };

        let mut model: ActiveModel = existing.into();
        model.updated_at = Set(now_millis());

        if let Some(nome) = req.nome.filter(|n| !n.trim().is_empty()) {
            model.nome = Set(nome);
        }
        if let Some(descricao) = req.descricao {
            model.descricao = Set(Some(descricao));
        }
        if req.permissoes.is_some() {
            model.permissoes = Set(permissoes_to_text(req.permissoes));
        }

        let updated = model
            .update(&self.db)
            .await
            .map_err(|e| write_error(e, "更新角色失败"))?;

        Ok(Some(updated.into_role()))
    }

    /// 删除角色及其用户关联
    pub async fn delete_role_impl(&self, id: &str) -> Result<bool> {
        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| GestaoError::database_operation(format!("开启事务失败: {e}")))?;

        UserRoles::delete_many()
            .filter(UserRoleColumn::RoleId.eq(id))
            .exec(&txn)
            .await
            .map_err(|e| GestaoError::database_operation(format!("删除用户角色失败: {e}")))?;

        let result = Roles::delete_by_id(id.to_string())
            .exec(&txn)
            .await
            .map_err(|e| GestaoError::database_operation(format!("删除角色失败: {e}")))?;

        txn.commit()
            .await
            .map_err(|e| GestaoError::database_operation(format!("提交事务失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_permissoes_to_text() {
        assert_eq!(permissoes_to_text(None), None);
        assert_eq!(permissoes_to_text(Some(serde_json::Value::Null)), None);
        assert_eq!(
            permissoes_to_text(Some(serde_json::json!(["ler", "escrever"]))),
            Some("[\"ler\",\"escrever\"]".to_string())
        );
    }
}
