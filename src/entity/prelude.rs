//! 预导入模块，方便使用

pub use super::ativos::{ActiveModel as AtivoActiveModel, Entity as Ativos, Model as AtivoModel};
pub use super::auto_heal_actions::{
    ActiveModel as AutoHealActionActiveModel, Entity as AutoHealActions,
    Model as AutoHealActionModel,
};
pub use super::cartas_conducao::{
    ActiveModel as CartaConducaoActiveModel, Entity as CartasConducao, Model as CartaConducaoModel,
};
pub use super::correcoes_sistema::{
    ActiveModel as CorrecaoActiveModel, Entity as CorrecoesSistema, Model as CorrecaoModel,
};
pub use super::documento_fotos::{
    ActiveModel as DocumentoFotoActiveModel, Entity as DocumentoFotos, Model as DocumentoFotoModel,
};
pub use super::documento_templates::{
    ActiveModel as TemplateActiveModel, Entity as DocumentoTemplates, Model as TemplateModel,
};
pub use super::documentos_gerados::{
    ActiveModel as DocumentoGeradoActiveModel, Entity as DocumentosGerados,
    Model as DocumentoGeradoModel,
};
pub use super::documentos_identificacao::{
    ActiveModel as DocumentoIdentificacaoActiveModel, Entity as DocumentosIdentificacao,
    Model as DocumentoIdentificacaoModel,
};
pub use super::roles::{ActiveModel as RoleActiveModel, Entity as Roles, Model as RoleModel};
pub use super::system_logs::{
    ActiveModel as SystemLogActiveModel, Entity as SystemLogs, Model as SystemLogModel,
};
pub use super::system_metrics::{
    ActiveModel as SystemMetricActiveModel, Entity as SystemMetrics, Model as SystemMetricModel,
};
pub use super::user_roles::{
    ActiveModel as UserRoleActiveModel, Entity as UserRoles, Model as UserRoleModel,
};
pub use super::users::{ActiveModel as UserActiveModel, Entity as Users, Model as UserModel};
