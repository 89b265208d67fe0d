pub mod file_magic;
pub mod parameter_error_handler;
pub mod text;

pub use file_magic::{detect_image_extension, validate_magic_bytes};
pub use parameter_error_handler::json_error_handler;
pub use parameter_error_handler::query_error_handler;
pub use text::{render_placeholders, strip_code_fences};
