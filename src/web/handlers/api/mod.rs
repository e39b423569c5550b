//! API 处理器

pub mod translate;

pub use translate::*;
