//! SeaORM 实体定义
//!
//! 这些实体用于数据库操作，与 models 模块中的业务实体分离。
//! Storage 层使用这些实体进行 CRUD 操作，然后转换为 models 中的业务实体。

pub mod prelude;

pub mod ativos;
pub mod auto_heal_actions;
pub mod cartas_conducao;
pub mod correcoes_sistema;
pub mod documento_fotos;
pub mod documento_templates;
pub mod documentos_gerados;
pub mod documentos_identificacao;
pub mod roles;
pub mod system_logs;
pub mod system_metrics;
pub mod user_roles;
pub mod users;
