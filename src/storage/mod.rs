use std::sync::Arc;

use crate::models::{
    assets::{
        entities::Ativo,
        requests::{CreateAtivoRequest, UpdateAtivoRequest},
    },
    auto_heal::{
        entities::{AutoHealAction, CorrecaoSistema, HealActionType, HealStatus, SystemLog, SystemMetric},
        requests::{NewCorrecao, NewSystemLog, NewSystemMetric},
        responses::{CorrecaoWithLog, SystemLogWithCorrecoes},
    },
    documents::{
        entities::{CartaConducao, DocumentoIdentificacao},
        requests::{NewIdentity, NewLicense},
    },
    roles::{
        entities::Role,
        requests::{CreateRoleRequest, UpdateRoleRequest},
        responses::RoleWithCount,
    },
    templates::{
        entities::{DocumentoGerado, DocumentoTemplate},
        requests::TemplateRequest,
    },
    users::{
        entities::User,
        requests::{CreateUserRequest, UpdateUserRequest},
        responses::{UserRoleLink, UserWithRoles},
    },
};

use crate::errors::Result;

pub mod sea_orm_storage;

#[async_trait::async_trait]
pub trait Storage: Send + Sync {
    /// 资产管理方法
    // 列出资产（最新在前）
    async fn list_ativos(&self) -> Result<Vec<Ativo>>;
    // 创建资产
    async fn create_ativo(&self, req: CreateAtivoRequest) -> Result<Ativo>;
    // 更新资产
    async fn update_ativo(&self, id: &str, req: UpdateAtivoRequest) -> Result<Option<Ativo>>;
    // 删除资产
    async fn delete_ativo(&self, id: &str) -> Result<bool>;

    /// 用户管理方法
    // 列出用户及其角色
    async fn list_users_with_roles(&self) -> Result<Vec<UserWithRoles>>;
    // 创建用户
    async fn create_user(&self, req: CreateUserRequest) -> Result<User>;
    // 更新用户
    async fn update_user(&self, id: &str, req: UpdateUserRequest) -> Result<Option<User>>;
    // 删除用户（同时删除角色关联）
    async fn delete_user(&self, id: &str) -> Result<bool>;
    // 为用户分配角色
    async fn assign_role(&self, user_id: &str, role_id: &str) -> Result<UserRoleLink>;
    // 取消角色分配，返回删除的关联数
    async fn unassign_role(&self, user_id: &str, role_id: &str) -> Result<u64>;

    /// 角色管理方法
    // 列出角色及关联用户数
    async fn list_roles_with_count(&self) -> Result<Vec<RoleWithCount>>;
    // 创建角色
    async fn create_role(&self, nome: String, req: CreateRoleRequest) -> Result<Role>;
    // 更新角色
    async fn update_role(&self, id: &str, req: UpdateRoleRequest) -> Result<Option<Role>>;
    // 删除角色
    async fn delete_role(&self, id: &str) -> Result<bool>;

    /// 模板与文档生成方法
    // 列出模板
    async fn list_templates(&self) -> Result<Vec<DocumentoTemplate>>;
    // 通过ID获取模板
    async fn get_template(&self, id: &str) -> Result<Option<DocumentoTemplate>>;
    // 创建模板
    async fn create_template(&self, req: TemplateRequest) -> Result<DocumentoTemplate>;
    // 更新模板
    async fn update_template(
        &self,
        id: &str,
        req: TemplateRequest,
    ) -> Result<Option<DocumentoTemplate>>;
    // 删除模板
    async fn delete_template(&self, id: &str) -> Result<bool>;
    // 记录生成的文档
    async fn create_documento_gerado(
        &self,
        template_id: &str,
        dados: String,
        arquivo_url: String,
    ) -> Result<DocumentoGerado>;
    // 列出生成的文档（带模板名）
    async fn list_documentos_gerados(&self) -> Result<Vec<DocumentoGerado>>;

    /// 证件管理方法
    // 保存身份证件及照片
    async fn save_identity(&self, doc: NewIdentity) -> Result<DocumentoIdentificacao>;
    // 保存驾驶证及照片
    async fn save_license(&self, carta: NewLicense) -> Result<CartaConducao>;
    // 列出身份证件
    async fn list_identities(&self) -> Result<Vec<DocumentoIdentificacao>>;
    // 删除身份证件
    async fn delete_identity(&self, id: &str) -> Result<bool>;
    // 列出驾驶证
    async fn list_licenses(&self) -> Result<Vec<CartaConducao>>;
    // 删除驾驶证
    async fn delete_license(&self, id: &str) -> Result<bool>;

    /// 自动修复方法
    // 记录系统日志
    async fn create_log(&self, log: NewSystemLog) -> Result<SystemLog>;
    // 获取日志
    async fn get_log(&self, id: &str) -> Result<Option<SystemLog>>;
    // 列出最近的日志及修正建议
    async fn list_logs_with_correcoes(&self, limit: u64) -> Result<Vec<SystemLogWithCorrecoes>>;
    // 删除日志
    async fn delete_log(&self, id: &str) -> Result<bool>;
    // 删除全部日志
    async fn delete_all_logs(&self) -> Result<u64>;
    // 记录指标
    async fn create_metric(&self, metric: NewSystemMetric) -> Result<SystemMetric>;
    // 列出最近的指标
    async fn list_recent_metrics(&self, limit: u64) -> Result<Vec<SystemMetric>>;
    // 保存修正建议
    async fn create_correcao(&self, correcao: NewCorrecao) -> Result<CorrecaoSistema>;
    // 标记修正已应用，并将日志标为已解决
    async fn apply_correcao(
        &self,
        id: &str,
        confirmada: bool,
    ) -> Result<Option<CorrecaoSistema>>;
    // 列出修正建议及其日志
    async fn list_correcoes_with_log(&self) -> Result<Vec<CorrecaoWithLog>>;
    // 创建 PENDING 状态的修复动作
    async fn create_heal_action(
        &self,
        tipo: HealActionType,
        parametro: Option<String>,
        valor_novo: Option<String>,
    ) -> Result<AutoHealAction>;
    // 获取修复动作
    async fn get_heal_action(&self, id: &str) -> Result<Option<AutoHealAction>>;
    // 列出最近的修复动作
    async fn list_heal_actions(&self, limit: u64) -> Result<Vec<AutoHealAction>>;
    // 条件状态转换：仅当当前状态为 `from` 时更新为 `to`
    async fn transition_heal_action(
        &self,
        id: &str,
        from: HealStatus,
        to: HealStatus,
        mensagem: Option<String>,
    ) -> Result<bool>;
    // 将所有未完成的动作标为失败
    async fn fail_unfinished_heal_actions(&self, mensagem: &str) -> Result<u64>;
}

pub async fn create_storage() -> Result<Arc<dyn Storage>> {
    let storage = sea_orm_storage::SeaOrmStorage::new_async().await?;
    Ok(Arc::new(storage))
}
