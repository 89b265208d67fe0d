pub mod assets;

pub mod users;

pub mod roles;

pub mod documents;

pub mod legal_assistant;

pub mod auto_heal;

pub mod frontend;

pub use assets::configure_asset_routes;
pub use auto_heal::configure_auto_heal_routes;
pub use documents::{configure_document_routes, configure_upload_routes};
pub use frontend::configure_frontend_routes;
pub use legal_assistant::configure_legal_assistant_routes;
pub use roles::configure_role_routes;
pub use users::configure_user_routes;
