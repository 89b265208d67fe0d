//! 缓存层
//!
//! 通过插件注册表选择后端（moka 内存缓存或 redis）。

pub mod object_cache;
pub mod register;
pub mod traits;

pub use traits::{CacheResult, ObjectCache};

/// 声明对象缓存插件
///
/// 为后端类型生成 `register()`，启动时由 [`register_builtin_plugins`] 调用。
/// 后端类型需提供 `fn new() -> Result<Self, String>`。
#[macro_export]
macro_rules! declare_object_cache_plugin {
    ($name:literal, $ty:ty) => {
        pub fn register() {
            $crate::cache::register::register_object_cache_plugin(
                $name,
                std::sync::Arc::new(|| {
                    Box::pin(async {
                        let cache = <$ty>::new()
                            .map_err($crate::errors::GestaoError::cache_connection)?;
                        Ok(Box::new(cache) as Box<dyn $crate::cache::ObjectCache>)
                    })
                }),
            );
        }
    };
}

/// 注册内置缓存后端
pub fn register_builtin_plugins() {
    object_cache::moka::register();
    object_cache::redis::register();
}
