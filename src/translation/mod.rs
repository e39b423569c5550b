//! 翻译管道
//!
//! 模块划分：
//! - [`detector`]：两级语言检测（关键词 + 统计模型）
//! - [`blocklist`]：按源语言推导封锁国家集
//! - [`provider`]：主/备翻译后端与适配策略
//! - [`storage`]:   MongoDB 翻译缓存
//! - [`service`]：把以上组件编排成完整请求处理
//! - [`error`]：管道错误类型

pub mod blocklist;
pub mod detector;
pub mod error;
pub mod provider;
pub mod service;
pub mod storage;

pub use blocklist::CountryBlockResolver;
pub use detector::LanguageDetector;
pub use error::{TranslateError, TranslateResult};
pub use provider::{ProviderAdapter, ProviderError, TranslationBackend};
pub use service::{TranslationOutcome, TranslationService, MAX_TEXT_CHARS};
pub use storage::{MongoTranslationStore, TranslationStore};
