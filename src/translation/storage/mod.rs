//! 翻译结果持久化存储

pub mod cache;

pub use cache::{
    normalize_text, MongoTranslationStore, StoreError, TranslationCacheEntry, TranslationStore,
};
