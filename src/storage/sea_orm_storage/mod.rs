//! SeaORM 存储实现
//!
//! 统一的数据库存储层，支持 SQLite、PostgreSQL 和 MySQL。

mod assets;
mod auto_heal;
mod documents;
mod roles;
mod templates;
mod users;

use crate::config::AppConfig;
use crate::errors::{GestaoError, Result};
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use std::time::Duration;
use tracing::info;

/// 当前 Unix 毫秒时间戳
pub(crate) fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

/// 新记录 ID
pub(crate) fn new_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

/// 将写入错误转换为业务错误，唯一约束冲突单独识别
pub(crate) fn write_error(err: sea_orm::DbErr, context: &str) -> GestaoError {
    match err.sql_err() {
        Some(sea_orm::SqlErr::UniqueConstraintViolation(detail)) => {
            GestaoError::conflict(format!("{context}: {detail}"))
        }
        _ => GestaoError::database_operation(format!("{context}: {err}")),
    }
}

/// SeaORM 存储实现
#[derive(Clone)]
pub struct SeaOrmStorage {
    pub(crate) db: DatabaseConnection,
}

impl SeaOrmStorage {
    /// 创建新的 SeaORM 存储实例
    pub async fn new_async() -> Result<Self> {
        let config = AppConfig::get();
        let db_url = Self::build_database_url(&config.database.url)?;

        // 根据数据库类型选择连接方式
        let db = if db_url.starts_with("sqlite://") {
            Self::connect_sqlite(&db_url, config).await?
        } else {
            Self::connect_generic(&db_url, config).await?
        };

        // 运行迁移
        Migrator::up(&db, None)
            .await
            .map_err(|e| GestaoError::database_operation(format!("数据库迁移失败: {e}")))?;

        info!("SeaORM 存储初始化完成，数据库: {}", db_url);

        Ok(Self { db })
    }

    /// 使用已有连接创建存储实例（运行迁移）
    pub async fn from_connection(db: DatabaseConnection) -> Result<Self> {
        Migrator::up(&db, None)
            .await
            .map_err(|e| GestaoError::database_operation(format!("数据库迁移失败: {e}")))?;
        Ok(Self { db })
    }

    /// SQLite 专用连接（WAL + pragma 优化）
    async fn connect_sqlite(url: &str, config: &AppConfig) -> Result<DatabaseConnection> {
        use sea_orm::SqlxSqliteConnector;
        use sea_orm::sqlx::sqlite::{
            SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous,
        };
        use std::str::FromStr;

        let opt = SqliteConnectOptions::from_str(url)
            .map_err(|e| GestaoError::database_config(format!("SQLite URL 解析失败: {e}")))?
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Normal)
            .busy_timeout(Duration::from_secs(5))
            .pragma("cache_size", "-64000")
            .pragma("temp_store", "memory")
            .pragma("mmap_size", "536870912")
            .pragma("wal_autocheckpoint", "1000");

        let pool = SqlitePoolOptions::new()
            .max_connections(config.database.pool_size)
            .min_connections(1)
            .test_before_acquire(true)
            .acquire_timeout(Duration::from_secs(config.database.timeout))
            .idle_timeout(Duration::from_secs(300))
            .connect_with(opt)
            .await
            .map_err(|e| GestaoError::database_connection(format!("SQLite 连接失败: {e}")))?;

        Ok(SqlxSqliteConnector::from_sqlx_sqlite_pool(pool))
    }

    /// 通用连接（PostgreSQL、MySQL 等）
    async fn connect_generic(url: &str, config: &AppConfig) -> Result<DatabaseConnection> {
        let mut opt = ConnectOptions::new(url);
        opt.max_connections(config.database.pool_size)
            .min_connections(5)
            .connect_timeout(Duration::from_secs(config.database.timeout))
            .acquire_timeout(Duration::from_secs(config.database.timeout))
            .idle_timeout(Duration::from_secs(600))
            .max_lifetime(Duration::from_secs(1800))
            .sqlx_logging(false)
            .sqlx_logging_level(tracing::log::LevelFilter::Debug);

        Database::connect(opt)
            .await
            .map_err(|e| GestaoError::database_connection(format!("无法连接到数据库: {e}")))
    }

    /// 从 URL 自动推断数据库类型并构建连接 URL
    fn build_database_url(url: &str) -> Result<String> {
        if url.starts_with("sqlite://") {
            Ok(url.to_string())
        } else if url.ends_with(".db") || url.ends_with(".sqlite") || url == ":memory:" {
            Ok(format!("sqlite://{}?mode=rwc", url))
        } else if url.starts_with("postgres://")
            || url.starts_with("postgresql://")
            || url.starts_with("mysql://")
            || url.starts_with("mariadb://")
        {
            Ok(url.to_string())
        } else {
            Err(GestaoError::database_config(format!(
                "无法从 URL 推断数据库类型: {url}. 支持: sqlite://, postgres://, mysql://, 或 .db/.sqlite 文件路径"
            )))
        }
    }
}

// Storage trait 实现
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
use crate::storage::Storage;
use async_trait::async_trait;

#[async_trait]
impl Storage for SeaOrmStorage {
    // 资产模块
    async fn list_ativos(&self) -> Result<Vec<Ativo>> {
        self.list_ativos_impl().await
    }

    async fn create_ativo(&self, req: CreateAtivoRequest) -> Result<Ativo> {
        self.create_ativo_impl(req).await
    }

    async fn update_ativo(&self, id: &str, req: UpdateAtivoRequest) -> Result<Option<Ativo>> {
        self.update_ativo_impl(id, req).await
    }

    async fn delete_ativo(&self, id: &str) -> Result<bool> {
        self.delete_ativo_impl(id).await
    }

    // 用户模块
    async fn list_users_with_roles(&self) -> Result<Vec<UserWithRoles>> {
        self.list_users_with_roles_impl().await
    }

    async fn create_user(&self, req: CreateUserRequest) -> Result<User> {
        self.create_user_impl(req).await
    }

    async fn update_user(&self, id: &str, req: UpdateUserRequest) -> Result<Option<User>> {
        self.update_user_impl(id, req).await
    }

    async fn delete_user(&self, id: &str) -> Result<bool> {
        self.delete_user_impl(id).await
    }

    async fn assign_role(&self, user_id: &str, role_id: &str) -> Result<UserRoleLink> {
        self.assign_role_impl(user_id, role_id).await
    }

    async fn unassign_role(&self, user_id: &str, role_id: &str) -> Result<u64> {
        self.unassign_role_impl(user_id, role_id).await
    }

    // 角色模块
    async fn list_roles_with_count(&self) -> Result<Vec<RoleWithCount>> {
        self.list_roles_with_count_impl().await
    }

    async fn create_role(&self, nome: String, req: CreateRoleRequest) -> Result<Role> {
        self.create_role_impl(nome, req).await
    }

    async fn update_role(&self, id: &str, req: UpdateRoleRequest) -> Result<Option<Role>> {
        self.update_role_impl(id, req).await
    }

    async fn delete_role(&self, id: &str) -> Result<bool> {
        self.delete_role_impl(id).await
    }

    // 模板模块
    async fn list_templates(&self) -> Result<Vec<DocumentoTemplate>> {
        self.list_templates_impl().await
    }

    async fn get_template(&self, id: &str) -> Result<Option<DocumentoTemplate>> {
        self.get_template_impl(id).await
    }

    async fn create_template(&self, req: TemplateRequest) -> Result<DocumentoTemplate> {
        self.create_template_impl(req).await
    }

    async fn update_template(
        &self,
        id: &str,
        req: TemplateRequest,
    ) -> Result<Option<DocumentoTemplate>> {
        self.update_template_impl(id, req).await
    }

    async fn delete_template(&self, id: &str) -> Result<bool> {
        self.delete_template_impl(id).await
    }

    async fn create_documento_gerado(
        &self,
        template_id: &str,
        dados: String,
        arquivo_url: String,
    ) -> Result<DocumentoGerado> {
        self.create_documento_gerado_impl(template_id, dados, arquivo_url)
            .await
    }

    async fn list_documentos_gerados(&self) -> Result<Vec<DocumentoGerado>> {
        self.list_documentos_gerados_impl().await
    }

    // 证件模块
    async fn save_identity(&self, doc: NewIdentity) -> Result<DocumentoIdentificacao> {
        self.save_identity_impl(doc).await
    }

    async fn save_license(&self, carta: NewLicense) -> Result<CartaConducao> {
        self.save_license_impl(carta).await
    }

    async fn list_identities(&self) -> Result<Vec<DocumentoIdentificacao>> {
        self.list_identities_impl().await
    }

    async fn delete_identity(&self, id: &str) -> Result<bool> {
        self.delete_identity_impl(id).await
    }

    async fn list_licenses(&self) -> Result<Vec<CartaConducao>> {
        self.list_licenses_impl().await
    }

    async fn delete_license(&self, id: &str) -> Result<bool> {
        self.delete_license_impl(id).await
    }

    // 自动修复模块
    async fn create_log(&self, log: NewSystemLog) -> Result<SystemLog> {
        self.create_log_impl(log).await
    }

    async fn get_log(&self, id: &str) -> Result<Option<SystemLog>> {
        self.get_log_impl(id).await
    }

    async fn list_logs_with_correcoes(&self, limit: u64) -> Result<Vec<SystemLogWithCorrecoes>> {
        self.list_logs_with_correcoes_impl(limit).await
    }

    async fn delete_log(&self, id: &str) -> Result<bool> {
        self.delete_log_impl(id).await
    }

    async fn delete_all_logs(&self) -> Result<u64> {
        self.delete_all_logs_impl().await
    }

    async fn create_metric(&self, metric: NewSystemMetric) -> Result<SystemMetric> {
        self.create_metric_impl(metric).await
    }

    async fn list_recent_metrics(&self, limit: u64) -> Result<Vec<SystemMetric>> {
        self.list_recent_metrics_impl(limit).await
    }

    async fn create_correcao(&self, correcao: NewCorrecao) -> Result<CorrecaoSistema> {
        self.create_correcao_impl(correcao).await
    }

    async fn apply_correcao(
        &self,
        id: &str,
        confirmada: bool,
    ) -> Result<Option<CorrecaoSistema>> {
        self.apply_correcao_impl(id, confirmada).await
    }

    async fn list_correcoes_with_log(&self) -> Result<Vec<CorrecaoWithLog>> {
        self.list_correcoes_with_log_impl().await
    }

    async fn create_heal_action(
        &self,
        tipo: HealActionType,
        parametro: Option<String>,
        valor_novo: Option<String>,
    ) -> Result<AutoHealAction> {
        self.create_heal_action_impl(tipo, parametro, valor_novo)
            .await
    }

    async fn get_heal_action(&self, id: &str) -> Result<Option<AutoHealAction>> {
        self.get_heal_action_impl(id).await
    }

    async fn list_heal_actions(&self, limit: u64) -> Result<Vec<AutoHealAction>> {
        self.list_heal_actions_impl(limit).await
    }

    async fn transition_heal_action(
        &self,
        id: &str,
        from: HealStatus,
        to: HealStatus,
        mensagem: Option<String>,
    ) -> Result<bool> {
        self.transition_heal_action_impl(id, from, to, mensagem)
            .await
    }

    async fn fail_unfinished_heal_actions(&self, mensagem: &str) -> Result<u64> {
        self.fail_unfinished_heal_actions_impl(mensagem).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_database_url() {
        assert_eq!(
            SeaOrmStorage::build_database_url("gestao.db").unwrap(),
            "sqlite://gestao.db?mode=rwc"
        );
        assert_eq!(
            SeaOrmStorage::build_database_url("postgres://u:p@localhost/gestao").unwrap(),
            "postgres://u:p@localhost/gestao"
        );
        assert!(SeaOrmStorage::build_database_url("ftp://nope").is_err());
    }
}
