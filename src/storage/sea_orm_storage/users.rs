use std::collections::HashMap;

use super::{SeaOrmStorage, new_id, now_millis, write_error};
use crate::entity::roles::Entity as Roles;
use crate::entity::user_roles::{
    ActiveModel as UserRoleActiveModel, Column as UserRoleColumn, Entity as UserRoles,
};
use crate::entity::users::{ActiveModel, Column, Entity as Users};
use crate::errors::{GestaoError, Result};
use crate::models::users::{
    entities::User,
    requests::{CreateUserRequest, UpdateUserRequest},
    responses::{RoleSummary, UserRoleLink, UserWithRoles},
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set, TransactionTrait,
};

impl SeaOrmStorage {
    /// 列出用户及其角色
    pub async fn list_users_with_roles_impl(&self) -> Result<Vec<UserWithRoles>> {
        let users = Users::find()
            .order_by_desc(Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(|e| GestaoError::database_operation(format!("查询用户列表失败: {e}")))?;

        let links = UserRoles::find()
            .find_also_related(Roles)
            .order_by_asc(UserRoleColumn::CreatedAt)
            .all(&self.db)
            .await
            .map_err(|e| GestaoError::database_operation(format!("查询用户角色失败: {e}")))?;

        let mut roles_by_user: HashMap<String, Vec<RoleSummary>> = HashMap::new();
        for (link, role) in links {
            if let Some(role) = role {
                roles_by_user
                    .entry(link.user_id)
                    .or_default()
                    .push(RoleSummary {
                        id: role.id,
                        nome: role.nome,
                        descricao: role.descricao,
                    });
            }
        }

        Ok(users
            .into_iter()
            .map(|m| {
                let roles = roles_by_user.remove(&m.id).unwrap_or_default();
                UserWithRoles {
                    user: m.into_user(),
                    roles,
                }
            })
            .collect())
    }

    /// 创建用户
    pub async fn create_user_impl(&self, req: CreateUserRequest) -> Result<User> {
        let now = now_millis();

        let model = ActiveModel {
            id: Set(new_id()),
            email: Set(req.email),
            name: Set(req.name),
            apelido: Set(req.apelido),
            telefone: Set(req.telefone),
            morada: Set(req.morada),
            data_nascimento: Set(req.data_nascimento),
            ativo: Set(req.ativo.unwrap_or(true)),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| write_error(e, "创建用户失败"))?;

        Ok(result.into_user())
    }

    /// 更新用户信息
    pub async fn update_user_impl(
        &self,
        id: &str,
        update: UpdateUserRequest,
    ) -> Result<Option<User>> {
        let existing = Users::find_by_id(id.to_string())
            .one(&self.db)
            .await
            .map_err(|e| GestaoError::database_operation(format!("查询用户失败: {e}")))?;
        let Some(existing) = existing else {
            return Ok(None);
        };

        let mut model: ActiveModel = existing.into();
        model.updated_at = Set(now_millis());

        if let Some(email) = update.email {
            model.email = Set(email);
        }
        if let Some(name) = update.name {
            model.name = Set(name);
        }
        if let Some(apelido) = update.apelido {
            model.apelido = Set(apelido);
        }
        if let Some(telefone) = update.telefone {
            model.telefone = Set(telefone);
        }
        if let Some(morada) = update.morada {
            model.morada = Set(morada);
        }
        if let Some(data) = update.data_nascimento {
            model.data_nascimento = Set(data);
        }
        if let Some(ativo) = update.ativo {
            model.ativo = Set(ativo);
        }

        let updated = model
            .update(&self.db)
            .await
            .map_err(|e| write_error(e, "更新用户失败"))?;

        Ok(Some(updated.into_user()))
    }

    /// 删除用户及其角色关联
    pub async fn delete_user_impl(&self, id: &str) -> Result<bool> {
        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| GestaoError::database_operation(format!("开启事务失败: {e}")))?;

        UserRoles::delete_many()
            .filter(UserRoleColumn::UserId.eq(id))
            .exec(&txn)
            .await
            .map_err(|e| GestaoError::database_operation(format!("删除用户角色失败: {e}")))?;

        let result = Users::delete_by_id(id.to_string())
            .exec(&txn)
            .await
            .map_err(|e| GestaoError::database_operation(format!("删除用户失败: {e}")))?;

        txn.commit()
            .await
            .map_err(|e| GestaoError::database_operation(format!("提交事务失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }

    /// 为用户分配角色
    pub async fn assign_role_impl(&self, user_id: &str, role_id: &str) -> Result<UserRoleLink> {
        let user = Users::find_by_id(user_id.to_string())
            .one(&self.db)
            .await
            .map_err(|e| GestaoError::database_operation(format!("查询用户失败: {e}")))?
            .ok_or_else(|| GestaoError::not_found("Utilizador não encontrado"))?;

        let role = Roles::find_by_id(role_id.to_string())
            .one(&self.db)
            .await
            .map_err(|e| GestaoError::database_operation(format!("查询角色失败: {e}")))?
            .ok_or_else(|| GestaoError::not_found("Papel não encontrado"))?;

        let existing = UserRoles::find()
            .filter(UserRoleColumn::UserId.eq(user_id))
            .filter(UserRoleColumn::RoleId.eq(role_id))
            .one(&self.db)
            .await
            .map_err(|e| GestaoError::database_operation(format!("查询用户角色失败: {e}")))?;
        if existing.is_some() {
            return Err(GestaoError::conflict("Papel já atribuído a este utilizador"));
        }

        let link = UserRoleActiveModel {
            id: Set(new_id()),
            user_id: Set(user_id.to_string()),
            role_id: Set(role_id.to_string()),
            created_at: Set(now_millis()),
        }
        .insert(&self.db)
        .await
        .map_err(|e| write_error(e, "分配角色失败"))?;

        Ok(UserRoleLink {
            id: link.id,
            user_id: link.user_id,
            role_id: link.role_id,
            user: user.into_user(),
            role: role.into_role(),
            created_at: chrono::DateTime::<chrono::Utc>::from_timestamp_millis(link.created_at)
                .unwrap_or_default(),
        })
    }

    /// 取消角色分配
    pub async fn unassign_role_impl(&self, user_id: &str, role_id: &str) -> Result<u64> {
        let result = UserRoles::delete_many()
            .filter(UserRoleColumn::UserId.eq(user_id))
            .filter(UserRoleColumn::RoleId.eq(role_id))
            .exec(&self.db)
            .await
            .map_err(|e| GestaoError::database_operation(format!("取消角色分配失败: {e}")))?;

        Ok(result.rows_affected)
    }
}
