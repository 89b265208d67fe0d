use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // 创建系统日志表
        manager
            .create_table(
                Table::create()
                    .table(SystemLogs::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(SystemLogs::Id)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(SystemLogs::Nivel).string().not_null())
                    .col(ColumnDef::new(SystemLogs::Tipo).string().not_null())
                    .col(ColumnDef::new(SystemLogs::Mensagem).text().not_null())
                    .col(ColumnDef::new(SystemLogs::Detalhes).text().null())
                    .col(ColumnDef::new(SystemLogs::Arquivo).string().null())
                    .col(ColumnDef::new(SystemLogs::Linha).integer().null())
                    .col(ColumnDef::new(SystemLogs::StackTrace).text().null())
                    .col(
                        ColumnDef::new(SystemLogs::Resolved)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(SystemLogs::AutoResolved)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(SystemLogs::CreatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建系统修正建议表
        manager
            .create_table(
                Table::create()
                    .table(CorrecoesSistema::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(CorrecoesSistema::Id)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(CorrecoesSistema::LogId).string().not_null())
                    .col(
                        ColumnDef::new(CorrecoesSistema::TipoProblema)
                            .string()
                            .not_null(),
                    )
                    .col(ColumnDef::new(CorrecoesSistema::Descricao).text().not_null())
                    .col(ColumnDef::new(CorrecoesSistema::CausaProvavel).text().null())
                    .col(ColumnDef::new(CorrecoesSistema::Solucao).text().null())
                    .col(ColumnDef::new(CorrecoesSistema::CodigoCorrecao).text().null())
                    .col(ColumnDef::new(CorrecoesSistema::Severidade).string().not_null())
                    .col(
                        ColumnDef::new(CorrecoesSistema::Aplicada)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(CorrecoesSistema::Confirmada)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(CorrecoesSistema::CreatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(CorrecoesSistema::Table, CorrecoesSistema::LogId)
                            .to(SystemLogs::Table, SystemLogs::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建自动修复动作表
        manager
            .create_table(
                Table::create()
                    .table(AutoHealActions::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(AutoHealActions::Id)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(AutoHealActions::Tipo).string().not_null())
                    .col(ColumnDef::new(AutoHealActions::Descricao).text().not_null())
                    .col(ColumnDef::new(AutoHealActions::Parametro).string().null())
                    .col(ColumnDef::new(AutoHealActions::ValorNovo).string().null())
                    .col(ColumnDef::new(AutoHealActions::Status).string().not_null())
                    .col(
                        ColumnDef::new(AutoHealActions::MensagemResultado)
                            .text()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(AutoHealActions::ExecutadaEm)
                            .big_integer()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(AutoHealActions::CreatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建系统指标表
        manager
            .create_table(
                Table::create()
                    .table(SystemMetrics::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(SystemMetrics::Id)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(SystemMetrics::Tipo).string().not_null())
                    .col(ColumnDef::new(SystemMetrics::Valor).double().not_null())
                    .col(ColumnDef::new(SystemMetrics::Unidade).string().null())
                    .col(ColumnDef::new(SystemMetrics::Status).string().not_null())
                    .col(
                        ColumnDef::new(SystemMetrics::Alerta)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(SystemMetrics::DescricaoAlerta)
                            .text()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(SystemMetrics::CreatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_system_logs_created_at")
                    .table(SystemLogs::Table)
                    .col(SystemLogs::CreatedAt)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_correcoes_sistema_log_id")
                    .table(CorrecoesSistema::Table)
                    .col(CorrecoesSistema::LogId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_auto_heal_actions_status")
                    .table(AutoHealActions::Table)
                    .col(AutoHealActions::Status)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_system_metrics_tipo_created_at")
                    .table(SystemMetrics::Table)
                    .col(SystemMetrics::Tipo)
                    .col(SystemMetrics::CreatedAt)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(SystemMetrics::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(AutoHealActions::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(CorrecoesSistema::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(SystemLogs::Table).to_owned())
            .await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
enum SystemLogs {
    #[sea_orm(iden = "system_logs")]
    Table,
    Id,
    Nivel,
    Tipo,
    Mensagem,
    Detalhes,
    Arquivo,
    Linha,
    StackTrace,
    Resolved,
    AutoResolved,
    CreatedAt,
}

#[derive(DeriveIden)]
enum CorrecoesSistema {
    #[sea_orm(iden = "correcoes_sistema")]
    Table,
    Id,
    LogId,
    TipoProblema,
    Descricao,
    CausaProvavel,
    Solucao,
    CodigoCorrecao,
    Severidade,
    Aplicada,
    Confirmada,
    CreatedAt,
}

#[derive(DeriveIden)]
enum AutoHealActions {
    #[sea_orm(iden = "auto_heal_actions")]
    Table,
    Id,
    Tipo,
    Descricao,
    Parametro,
    ValorNovo,
    Status,
    MensagemResultado,
    ExecutadaEm,
    CreatedAt,
}

#[derive(DeriveIden)]
enum SystemMetrics {
    #[sea_orm(iden = "system_metrics")]
    Table,
    Id,
    Tipo,
    Valor,
    Unidade,
    Status,
    Alerta,
    DescricaoAlerta,
    CreatedAt,
}
