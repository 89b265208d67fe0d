use std::collections::HashMap;

use super::{SeaOrmStorage, new_id, now_millis, write_error};
use crate::entity::auto_heal_actions::{
    ActiveModel as ActionActiveModel, Column as ActionColumn, Entity as AutoHealActions,
};
use crate::entity::correcoes_sistema::{
    ActiveModel as CorrecaoActiveModel, Column as CorrecaoColumn, Entity as CorrecoesSistema,
};
use crate::entity::system_logs::{
    ActiveModel as LogActiveModel, Column as LogColumn, Entity as SystemLogs,
};
use crate::entity::system_metrics::{
    ActiveModel as MetricActiveModel, Column as MetricColumn, Entity as SystemMetrics,
};
use crate::errors::{GestaoError, Result};
use crate::models::auto_heal::{
    entities::{
        AutoHealAction, CorrecaoSistema, HealActionType, HealStatus, SystemLog, SystemMetric,
    },
    requests::{NewCorrecao, NewSystemLog, NewSystemMetric},
    responses::{CorrecaoWithLog, SystemLogWithCorrecoes},
};
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, QuerySelect, Set,
    TransactionTrait,
};

impl SeaOrmStorage {
    /// 记录系统日志
    pub async fn create_log_impl(&self, log: NewSystemLog) -> Result<SystemLog> {
        let model = LogActiveModel {
            id: Set(new_id()),
            nivel: Set(log.nivel),
            tipo: Set(log.tipo),
            mensagem: Set(log.mensagem),
            detalhes: Set(log.detalhes),
            arquivo: Set(log.arquivo),
            linha: Set(log.linha),
            stack_trace: Set(log.stack_trace),
            resolved: Set(false),
            auto_resolved: Set(false),
            created_at: Set(now_millis()),
        }
        .insert(&self.db)
        .await
        .map_err(|e| write_error(e, "记录系统日志失败"))?;

        Ok(model.into_log())
    }

    /// 通过ID获取日志
    pub async fn get_log_impl(&self, id: &str) -> Result<Option<SystemLog>> {
        let result = SystemLogs::find_by_id(id.to_string())
            .one(&self.db)
            .await
            .map_err(|e| GestaoError::database_operation(format!("查询系统日志失败: {e}")))?;

        Ok(result.map(|m| m.into_log()))
    }

    /// 最近的日志（最新在前）及其修正建议
    pub async fn list_logs_with_correcoes_impl(
        &self,
        limit: u64,
    ) -> Result<Vec<SystemLogWithCorrecoes>> {
        let logs = SystemLogs::find()
            .order_by_desc(LogColumn::CreatedAt)
            .limit(limit)
            .all(&self.db)
            .await
            .map_err(|e| GestaoError::database_operation(format!("查询系统日志失败: {e}")))?;

        if logs.is_empty() {
            return Ok(Vec::new());
        }

        let log_ids: Vec<String> = logs.iter().map(|l| l.id.clone()).collect();
        let correcoes = CorrecoesSistema::find()
            .filter(CorrecaoColumn::LogId.is_in(log_ids))
            .order_by_desc(CorrecaoColumn::CreatedAt)
            .all(&self.db)
            .await
            .map_err(|e| GestaoError::database_operation(format!("查询修正建议失败: {e}")))?;

        let mut grouped: HashMap<String, Vec<CorrecaoSistema>> = HashMap::new();
        for correcao in correcoes {
            grouped
                .entry(correcao.log_id.clone())
                .or_default()
                .push(correcao.into_correcao());
        }

        Ok(logs
            .into_iter()
            .map(|m| {
                let correcoes = grouped.remove(&m.id).unwrap_or_default();
                SystemLogWithCorrecoes {
                    log: m.into_log(),
                    correcoes,
                }
            })
            .collect())
    }

    /// 删除日志及其修正建议
    pub async fn delete_log_impl(&self, id: &str) -> Result<bool> {
        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| GestaoError::database_operation(format!("开启事务失败: {e}")))?;

        CorrecoesSistema::delete_many()
            .filter(CorrecaoColumn::LogId.eq(id))
            .exec(&txn)
            .await
            .map_err(|e| GestaoError::database_operation(format!("删除修正建议失败: {e}")))?;

        let result = SystemLogs::delete_by_id(id.to_string())
            .exec(&txn)
            .await
            .map_err(|e| GestaoError::database_operation(format!("删除系统日志失败: {e}")))?;

        txn.commit()
            .await
            .map_err(|e| GestaoError::database_operation(format!("提交事务失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }

    /// 清空全部日志，返回删除的日志数
    pub async fn delete_all_logs_impl(&self) -> Result<u64> {
        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| GestaoError::database_operation(format!("开启事务失败: {e}")))?;

        CorrecoesSistema::delete_many()
            .exec(&txn)
            .await
            .map_err(|e| GestaoError::database_operation(format!("删除修正建议失败: {e}")))?;

        let result = SystemLogs::delete_many()
            .exec(&txn)
            .await
            .map_err(|e| GestaoError::database_operation(format!("删除系统日志失败: {e}")))?;

        txn.commit()
            .await
            .map_err(|e| GestaoError::database_operation(format!("提交事务失败: {e}")))?;

        Ok(result.rows_affected)
    }

    /// 记录已分级的指标
    pub async fn create_metric_impl(&self, metric: NewSystemMetric) -> Result<SystemMetric> {
        let model = MetricActiveModel {
            id: Set(new_id()),
            tipo: Set(metric.tipo),
            valor: Set(metric.valor),
            unidade: Set(Some(metric.unidade)),
            status: Set(metric.status),
            alerta: Set(metric.alerta),
            descricao_alerta: Set(metric.descricao_alerta),
            created_at: Set(now_millis()),
        }
        .insert(&self.db)
        .await
        .map_err(|e| write_error(e, "记录系统指标失败"))?;

        Ok(model.into_metric())
    }

    /// 最近的指标（最新在前）
    pub async fn list_recent_metrics_impl(&self, limit: u64) -> Result<Vec<SystemMetric>> {
        let metrics = SystemMetrics::find()
            .order_by_desc(MetricColumn::CreatedAt)
            .limit(limit)
            .all(&self.db)
            .await
            .map_err(|e| GestaoError::database_operation(format!("查询系统指标失败: {e}")))?;

        Ok(metrics.into_iter().map(|m| m.into_metric()).collect())
    }

    /// 保存修正建议
    pub async fn create_correcao_impl(&self, correcao: NewCorrecao) -> Result<CorrecaoSistema> {
        let model = CorrecaoActiveModel {
            id: Set(new_id()),
            log_id: Set(correcao.log_id),
            tipo_problema: Set(correcao.tipo_problema),
            descricao: Set(correcao.descricao),
            causa_provavel: Set(correcao.causa_provavel),
            solucao: Set(correcao.solucao),
            codigo_correcao: Set(correcao.codigo_correcao),
            severidade: Set(correcao.severidade),
            aplicada: Set(false),
            confirmada: Set(false),
            created_at: Set(now_millis()),
        }
        .insert(&self.db)
        .await
        .map_err(|e| write_error(e, "保存修正建议失败"))?;

        Ok(model.into_correcao())
    }

    /// 标记修正已应用，并将对应日志标为自动解决
    pub async fn apply_correcao_impl(
        &self,
        id: &str,
        confirmada: bool,
    ) -> Result<Option<CorrecaoSistema>> {
        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| GestaoError::database_operation(format!("开启事务失败: {e}")))?;

        let Some(existing) = CorrecoesSistema::find_by_id(id.to_string())
            .one(&txn)
            .await
            .map_err(|e| GestaoError::database_operation(format!("查询修正建议失败: {e}")))?
        else {
            return Ok(None);
        };

        let log_id = existing.log_id.clone();
        let mut model: CorrecaoActiveModel = existing.into();
        model.aplicada = Set(true);
        model.confirmada = Set(confirmada);
        let updated = model
            .update(&txn)
            .await
            .map_err(|e| write_error(e, "更新修正建议失败"))?;

        SystemLogs::update_many()
            .col_expr(LogColumn::Resolved, Expr::value(true))
            .col_expr(LogColumn::AutoResolved, Expr::value(true))
            .filter(LogColumn::Id.eq(log_id))
            .exec(&txn)
            .await
            .map_err(|e| GestaoError::database_operation(format!("更新系统日志失败: {e}")))?;

        txn.commit()
            .await
            .map_err(|e| GestaoError::database_operation(format!("提交事务失败: {e}")))?;

        Ok(Some(updated.into_correcao()))
    }

    /// 全部修正建议（最新在前）及其日志
    pub async fn list_correcoes_with_log_impl(&self) -> Result<Vec<CorrecaoWithLog>> {
        let rows = CorrecoesSistema::find()
            .find_also_related(SystemLogs)
            .order_by_desc(CorrecaoColumn::CreatedAt)
            .all(&self.db)
            .await
            .map_err(|e| GestaoError::database_operation(format!("查询修正建议失败: {e}")))?;

        Ok(rows
            .into_iter()
            .map(|(correcao, log)| CorrecaoWithLog {
                correcao: correcao.into_correcao(),
                log: log.map(|l| l.into_log()),
            })
            .collect())
    }

    /// 创建 PENDING 状态的修复动作
    pub async fn create_heal_action_impl(
        &self,
        tipo: HealActionType,
        parametro: Option<String>,
        valor_novo: Option<String>,
    ) -> Result<AutoHealAction> {
        let model = ActionActiveModel {
            id: Set(new_id()),
            tipo: Set(tipo.as_str().to_string()),
            descricao: Set(tipo.descricao().to_string()),
            parametro: Set(parametro),
            valor_novo: Set(valor_novo),
            status: Set(HealStatus::PENDING.to_string()),
            mensagem_resultado: Set(None),
            executada_em: Set(None),
            created_at: Set(now_millis()),
        }
        .insert(&self.db)
        .await
        .map_err(|e| write_error(e, "创建修复动作失败"))?;

        Ok(model.into_action())
    }

    /// 通过ID获取修复动作
    pub async fn get_heal_action_impl(&self, id: &str) -> Result<Option<AutoHealAction>> {
        let result = AutoHealActions::find_by_id(id.to_string())
            .one(&self.db)
            .await
            .map_err(|e| GestaoError::database_operation(format!("查询修复动作失败: {e}")))?;

        Ok(result.map(|m| m.into_action()))
    }

    /// 最近的修复动作（最新在前）
    pub async fn list_heal_actions_impl(&self, limit: u64) -> Result<Vec<AutoHealAction>> {
        let actions = AutoHealActions::find()
            .order_by_desc(ActionColumn::CreatedAt)
            .limit(limit)
            .all(&self.db)
            .await
            .map_err(|e| GestaoError::database_operation(format!("查询修复动作失败: {e}")))?;

        Ok(actions.into_iter().map(|m| m.into_action()).collect())
    }

    /// 条件状态转换，当前状态不是 `from` 时不更新并返回 false
    pub async fn transition_heal_action_impl(
        &self,
        id: &str,
        from: HealStatus,
        to: HealStatus,
        mensagem: Option<String>,
    ) -> Result<bool> {
        let mut update = AutoHealActions::update_many()
            .col_expr(ActionColumn::Status, Expr::value(to.as_str()))
            .filter(ActionColumn::Id.eq(id))
            .filter(ActionColumn::Status.eq(from.as_str()));

        if let Some(mensagem) = mensagem {
            update = update.col_expr(ActionColumn::MensagemResultado, Expr::value(mensagem));
        }
        if to.is_terminal() {
            update = update.col_expr(ActionColumn::ExecutadaEm, Expr::value(now_millis()));
        }

        let result = update
            .exec(&self.db)
            .await
            .map_err(|e| GestaoError::database_operation(format!("更新修复动作状态失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }

    /// 将 PENDING/EXECUTING 的动作标为失败
    pub async fn fail_unfinished_heal_actions_impl(&self, mensagem: &str) -> Result<u64> {
        let result = AutoHealActions::update_many()
            .col_expr(ActionColumn::Status, Expr::value(HealStatus::FAILED))
            .col_expr(ActionColumn::MensagemResultado, Expr::value(mensagem))
            .col_expr(ActionColumn::ExecutadaEm, Expr::value(now_millis()))
            .filter(
                ActionColumn::Status.is_in([HealStatus::PENDING, HealStatus::EXECUTING]),
            )
            .exec(&self.db)
            .await
            .map_err(|e| GestaoError::database_operation(format!("更新修复动作状态失败: {e}")))?;

        Ok(result.rows_affected)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::Database;

    async fn storage() -> SeaOrmStorage {
        let db = Database::connect("sqlite::memory:").await.unwrap();
        SeaOrmStorage::from_connection(db).await.unwrap()
    }

    fn new_log(mensagem: &str) -> NewSystemLog {
        NewSystemLog {
            nivel: "ERROR".to_string(),
            tipo: "RUNTIME".to_string(),
            mensagem: mensagem.to_string(),
            detalhes: None,
            arquivo: None,
            linha: None,
            stack_trace: None,
        }
    }

    #[tokio::test]
    async fn test_transition_is_conditional() {
        let storage = storage().await;
        let action = storage
            .create_heal_action_impl(HealActionType::ClearCache, None, None)
            .await
            .unwrap();
        assert_eq!(action.status, HealStatus::Pending);

        // 状态不匹配时不更新
        let moved = storage
            .transition_heal_action_impl(
                &action.id,
                HealStatus::Executing,
                HealStatus::Success,
                None,
            )
            .await
            .unwrap();
        assert!(!moved);

        assert!(
            storage
                .transition_heal_action_impl(
                    &action.id,
                    HealStatus::Pending,
                    HealStatus::Executing,
                    None,
                )
                .await
                .unwrap()
        );
        assert!(
            storage
                .transition_heal_action_impl(
                    &action.id,
                    HealStatus::Executing,
                    HealStatus::Success,
                    Some("Cache limpo com sucesso".to_string()),
                )
                .await
                .unwrap()
        );

        let done = storage
            .get_heal_action_impl(&action.id)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(done.status, HealStatus::Success);
        assert!(done.executada_em.is_some());
        assert_eq!(
            done.mensagem_resultado.as_deref(),
            Some("Cache limpo com sucesso")
        );
    }

    #[tokio::test]
    async fn test_fail_unfinished_leaves_terminal_actions() {
        let storage = storage().await;
        let pending = storage
            .create_heal_action_impl(HealActionType::OptimizeDb, None, None)
            .await
            .unwrap();
        let finished = storage
            .create_heal_action_impl(HealActionType::FixConfig, None, None)
            .await
            .unwrap();
        storage
            .transition_heal_action_impl(
                &finished.id,
                HealStatus::Pending,
                HealStatus::Failed,
                Some("erro".to_string()),
            )
            .await
            .unwrap();

        let count = storage
            .fail_unfinished_heal_actions_impl("interrompida")
            .await
            .unwrap();
        assert_eq!(count, 1);

        let pending = storage
            .get_heal_action_impl(&pending.id)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(pending.status, HealStatus::Failed);
        assert_eq!(pending.mensagem_resultado.as_deref(), Some("interrompida"));

        let finished = storage
            .get_heal_action_impl(&finished.id)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(finished.mensagem_resultado.as_deref(), Some("erro"));
    }

    #[tokio::test]
    async fn test_apply_correcao_resolves_log() {
        let storage = storage().await;
        let log = storage.create_log_impl(new_log("falha")).await.unwrap();
        let correcao = storage
            .create_correcao_impl(NewCorrecao {
                log_id: log.id.clone(),
                tipo_problema: "NULL_POINTER".to_string(),
                descricao: "Valor nulo".to_string(),
                causa_provavel: None,
                solucao: None,
                codigo_correcao: None,
                severidade: "HIGH".to_string(),
            })
            .await
            .unwrap();

        let applied = storage
            .apply_correcao_impl(&correcao.id, true)
            .await
            .unwrap()
            .unwrap();
        assert!(applied.aplicada);
        assert!(applied.confirmada);

        let log = storage.get_log_impl(&log.id).await.unwrap().unwrap();
        assert!(log.resolved);
        assert!(log.auto_resolved);

        assert!(
            storage
                .apply_correcao_impl("desconhecido", true)
                .await
                .unwrap()
                .is_none()
        );
    }

    #[tokio::test]
    async fn test_delete_all_logs_removes_correcoes() {
        let storage = storage().await;
        let log = storage.create_log_impl(new_log("a")).await.unwrap();
        storage.create_log_impl(new_log("b")).await.unwrap();
        storage
            .create_correcao_impl(NewCorrecao {
                log_id: log.id,
                tipo_problema: "UNKNOWN".to_string(),
                descricao: "Sem descrição".to_string(),
                causa_provavel: None,
                solucao: None,
                codigo_correcao: None,
                severidade: "MEDIUM".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(storage.delete_all_logs_impl().await.unwrap(), 2);
        assert!(
            storage
                .list_correcoes_with_log_impl()
                .await
                .unwrap()
                .is_empty()
        );
    }
}
