//! # Transkarte Backend
//!
//! 教育类地图游戏的翻译后端：点击国家即可把文本翻译成该国的官方语言。
//!
//! ## 模块组织
//!
//! - `data` - 静态国家/语言映射表
//! - `env` - 类型安全的环境变量系统
//! - `translation` - 翻译管道（语言检测、封锁策略、提供方适配、缓存、编排）
//! - `web` - Web 服务器功能

pub mod data;
pub mod env;
pub mod translation;
pub mod web;

// 常用项的便捷再导出
pub use data::CountryIndex;
pub use translation::{
    CountryBlockResolver, LanguageDetector, ProviderAdapter, TranslateError, TranslationOutcome,
    TranslationService,
};
