//! Web 请求处理器

pub mod api;

pub use api::*;
