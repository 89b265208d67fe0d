use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // 创建资产表
        manager
            .create_table(
                Table::create()
                    .table(Ativos::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Ativos::Id).string().not_null().primary_key())
                    .col(ColumnDef::new(Ativos::TipoId).string().not_null())
                    .col(ColumnDef::new(Ativos::Nome).string().null())
                    .col(ColumnDef::new(Ativos::Descricao).text().null())
                    .col(ColumnDef::new(Ativos::Marca).string().null())
                    .col(ColumnDef::new(Ativos::Modelo).string().null())
                    .col(ColumnDef::new(Ativos::Ano).string().null())
                    .col(ColumnDef::new(Ativos::PlacaMatricula).string().null())
                    .col(ColumnDef::new(Ativos::NumeroSerie).string().null())
                    .col(ColumnDef::new(Ativos::ValorDiario).double().null())
                    .col(ColumnDef::new(Ativos::ValorSemanal).double().null())
                    .col(ColumnDef::new(Ativos::ValorMensal).double().null())
                    .col(
                        ColumnDef::new(Ativos::Disponivel)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(ColumnDef::new(Ativos::Estado).string().null())
                    .col(ColumnDef::new(Ativos::Observacoes).text().null())
                    .col(ColumnDef::new(Ativos::CreatedAt).big_integer().not_null())
                    .col(ColumnDef::new(Ativos::UpdatedAt).big_integer().not_null())
                    .to_owned(),
            )
            .await?;

        // 创建用户表
        manager
            .create_table(
                Table::create()
                    .table(Users::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Users::Id).string().not_null().primary_key())
                    .col(ColumnDef::new(Users::Email).string().null().unique_key())
                    .col(ColumnDef::new(Users::Name).string().null())
                    .col(ColumnDef::new(Users::Apelido).string().null())
                    .col(ColumnDef::new(Users::Telefone).string().null())
                    .col(ColumnDef::new(Users::Morada).text().null())
                    .col(ColumnDef::new(Users::DataNascimento).string().null())
                    .col(
                        ColumnDef::new(Users::Ativo)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(ColumnDef::new(Users::CreatedAt).big_integer().not_null())
                    .col(ColumnDef::new(Users::UpdatedAt).big_integer().not_null())
                    .to_owned(),
            )
            .await?;

        // 创建角色表
        manager
            .create_table(
                Table::create()
                    .table(Roles::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Roles::Id).string().not_null().primary_key())
                    .col(ColumnDef::new(Roles::Nome).string().not_null().unique_key())
                    .col(ColumnDef::new(Roles::Descricao).text().null())
                    .col(ColumnDef::new(Roles::Permissoes).text().null())
                    .col(ColumnDef::new(Roles::CreatedAt).big_integer().not_null())
                    .col(ColumnDef::new(Roles::UpdatedAt).big_integer().not_null())
                    .to_owned(),
            )
            .await?;

        // 创建用户角色关联表
        manager
            .create_table(
                Table::create()
                    .table(UserRoles::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(UserRoles::Id)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(UserRoles::UserId).string().not_null())
                    .col(ColumnDef::new(UserRoles::RoleId).string().not_null())
                    .col(
                        ColumnDef::new(UserRoles::CreatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(UserRoles::Table, UserRoles::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(UserRoles::Table, UserRoles::RoleId)
                            .to(Roles::Table, Roles::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建文档模板表
        manager
            .create_table(
                Table::create()
                    .table(DocumentoTemplates::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(DocumentoTemplates::Id)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(DocumentoTemplates::Nome).string().null())
                    .col(ColumnDef::new(DocumentoTemplates::Descricao).text().null())
                    .col(ColumnDef::new(DocumentoTemplates::Tipo).string().null())
                    .col(ColumnDef::new(DocumentoTemplates::Conteudo).text().null())
                    .col(ColumnDef::new(DocumentoTemplates::Campos).text().null())
                    .col(
                        ColumnDef::new(DocumentoTemplates::CreatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(DocumentoTemplates::UpdatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建生成文档记录表
        manager
            .create_table(
                Table::create()
                    .table(DocumentosGerados::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(DocumentosGerados::Id)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(DocumentosGerados::TemplateId)
                            .string()
                            .not_null(),
                    )
                    .col(ColumnDef::new(DocumentosGerados::Dados).text().null())
                    .col(ColumnDef::new(DocumentosGerados::ArquivoUrl).string().null())
                    .col(
                        ColumnDef::new(DocumentosGerados::CreatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(DocumentosGerados::Table, DocumentosGerados::TemplateId)
                            .to(DocumentoTemplates::Table, DocumentoTemplates::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建身份证件表
        manager
            .create_table(
                Table::create()
                    .table(DocumentosIdentificacao::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(DocumentosIdentificacao::Id)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(DocumentosIdentificacao::Numero)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(DocumentosIdentificacao::Nome)
                            .string()
                            .not_null(),
                    )
                    .col(ColumnDef::new(DocumentosIdentificacao::Apelido).string().null())
                    .col(
                        ColumnDef::new(DocumentosIdentificacao::DataNascimento)
                            .string()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(DocumentosIdentificacao::Naturalidade)
                            .string()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(DocumentosIdentificacao::Nacionalidade)
                            .string()
                            .null(),
                    )
                    .col(ColumnDef::new(DocumentosIdentificacao::Sexo).string().null())
                    .col(ColumnDef::new(DocumentosIdentificacao::Altura).string().null())
                    .col(ColumnDef::new(DocumentosIdentificacao::Filiado).text().null())
                    .col(ColumnDef::new(DocumentosIdentificacao::Validade).string().null())
                    .col(ColumnDef::new(DocumentosIdentificacao::Emissao).string().null())
                    .col(ColumnDef::new(DocumentosIdentificacao::Morada).text().null())
                    .col(
                        ColumnDef::new(DocumentosIdentificacao::TipoDocumentoId)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(DocumentosIdentificacao::Ativo)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(DocumentosIdentificacao::CreatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(DocumentosIdentificacao::UpdatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建驾驶证表
        manager
            .create_table(
                Table::create()
                    .table(CartasConducao::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(CartasConducao::Id)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(CartasConducao::Numero).string().not_null())
                    .col(ColumnDef::new(CartasConducao::Nome).string().not_null())
                    .col(ColumnDef::new(CartasConducao::Apelido).string().null())
                    .col(ColumnDef::new(CartasConducao::DataNascimento).string().null())
                    .col(ColumnDef::new(CartasConducao::Naturalidade).string().null())
                    .col(ColumnDef::new(CartasConducao::Categoria).string().null())
                    .col(ColumnDef::new(CartasConducao::Validade).string().null())
                    .col(ColumnDef::new(CartasConducao::Emissao).string().null())
                    .col(ColumnDef::new(CartasConducao::NumeroRegisto).string().null())
                    .col(ColumnDef::new(CartasConducao::Morada).text().null())
                    .col(ColumnDef::new(CartasConducao::RawExtraido).text().null())
                    .col(
                        ColumnDef::new(CartasConducao::Ativo)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(
                        ColumnDef::new(CartasConducao::CreatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(CartasConducao::UpdatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建证件照片表（只属于一个身份证件或一个驾驶证）
        manager
            .create_table(
                Table::create()
                    .table(DocumentoFotos::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(DocumentoFotos::Id)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(DocumentoFotos::DocumentoId).string().null())
                    .col(ColumnDef::new(DocumentoFotos::CartaId).string().null())
                    .col(ColumnDef::new(DocumentoFotos::Tipo).string().not_null())
                    .col(ColumnDef::new(DocumentoFotos::Url).string().not_null())
                    .col(ColumnDef::new(DocumentoFotos::Ordem).integer().not_null())
                    .col(
                        ColumnDef::new(DocumentoFotos::CreatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(DocumentoFotos::Table, DocumentoFotos::DocumentoId)
                            .to(DocumentosIdentificacao::Table, DocumentosIdentificacao::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(DocumentoFotos::Table, DocumentoFotos::CartaId)
                            .to(CartasConducao::Table, CartasConducao::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建索引
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_user_roles_user_role")
                    .table(UserRoles::Table)
                    .col(UserRoles::UserId)
                    .col(UserRoles::RoleId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_documentos_gerados_template_id")
                    .table(DocumentosGerados::Table)
                    .col(DocumentosGerados::TemplateId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_documento_fotos_documento_id")
                    .table(DocumentoFotos::Table)
                    .col(DocumentoFotos::DocumentoId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_documento_fotos_carta_id")
                    .table(DocumentoFotos::Table)
                    .col(DocumentoFotos::CartaId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // 按照创建的相反顺序删除
        manager
            .drop_table(Table::drop().table(DocumentoFotos::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(CartasConducao::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(DocumentosIdentificacao::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(DocumentosGerados::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(DocumentoTemplates::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(UserRoles::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Roles::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Users::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Ativos::Table).to_owned())
            .await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
enum Ativos {
    #[sea_orm(iden = "ativos")]
    Table,
    Id,
    TipoId,
    Nome,
    Descricao,
    Marca,
    Modelo,
    Ano,
    PlacaMatricula,
    NumeroSerie,
    ValorDiario,
    ValorSemanal,
    ValorMensal,
    Disponivel,
    Estado,
    Observacoes,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Users {
    #[sea_orm(iden = "users")]
    Table,
    Id,
    Email,
    Name,
    Apelido,
    Telefone,
    Morada,
    DataNascimento,
    Ativo,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Roles {
    #[sea_orm(iden = "roles")]
    Table,
    Id,
    Nome,
    Descricao,
    Permissoes,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum UserRoles {
    #[sea_orm(iden = "user_roles")]
    Table,
    Id,
    UserId,
    RoleId,
    CreatedAt,
}

#[derive(DeriveIden)]
enum DocumentoTemplates {
    #[sea_orm(iden = "documento_templates")]
    Table,
    Id,
    Nome,
    Descricao,
    Tipo,
    Conteudo,
    Campos,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum DocumentosGerados {
    #[sea_orm(iden = "documentos_gerados")]
    Table,
    Id,
    TemplateId,
    Dados,
    ArquivoUrl,
    CreatedAt,
}

#[derive(DeriveIden)]
enum DocumentosIdentificacao {
    #[sea_orm(iden = "documentos_identificacao")]
    Table,
    Id,
    Numero,
    Nome,
    Apelido,
    DataNascimento,
    Naturalidade,
    Nacionalidade,
    Sexo,
    Altura,
    Filiado,
    Validade,
    Emissao,
    Morada,
    TipoDocumentoId,
    Ativo,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum CartasConducao {
    #[sea_orm(iden = "cartas_conducao")]
    Table,
    Id,
    Numero,
    Nome,
    Apelido,
    DataNascimento,
    Naturalidade,
    Categoria,
    Validade,
    Emissao,
    NumeroRegisto,
    Morada,
    RawExtraido,
    Ativo,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum DocumentoFotos {
    #[sea_orm(iden = "documento_fotos")]
    Table,
    Id,
    DocumentoId,
    CartaId,
    Tipo,
    Url,
    Ordem,
    CreatedAt,
}
