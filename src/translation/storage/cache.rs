//! 翻译缓存
//!
//! 以（归一化文本，目标国家 Alpha-3）为键的持久化键值存储，避免对
//! 提供方的重复调用。条目创建后不再修改，也不做过期清理。
//!
//! 约定：
//! - 读失败按"未命中"处理（fail-open），管道继续走检测与翻译
//! - 写是尽力而为的，重复键（并发请求先写入了同一对）为良性冲突

use async_trait::async_trait;
use bson::{doc, DateTime};
use mongodb::error::{ErrorKind, WriteFailure};
use mongodb::options::IndexOptions;
use mongodb::{Collection, Database, IndexModel};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// MongoDB E11000 重复键错误码
const DUPLICATE_KEY_CODE: i32 = 11000;

/// 缓存键的文本归一化：trim + 小写
pub fn normalize_text(text: &str) -> String {
    text.trim().to_lowercase()
}

/// 一条缓存的翻译结果
///
/// 不变式：(original_text, destination_country_code) 对唯一，由集合上的
/// 唯一复合索引保证。
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct TranslationCacheEntry {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<bson::oid::ObjectId>,
    /// 归一化后的源文本
    pub original_text: String,
    /// 目标国家 ISO Alpha-3 代码
    pub destination_country_code: String,
    /// 目标语言的人类可读名称
    pub language_name: String,
    /// 提供方输出的译文
    pub translated_text: String,
    /// 创建时间
    pub created_at: DateTime,
}

impl TranslationCacheEntry {
    pub fn new(
        text: &str,
        country_code: &str,
        language_name: &str,
        translated_text: &str,
    ) -> Self {
        Self {
            id: None,
            original_text: normalize_text(text),
            destination_country_code: country_code.to_string(),
            language_name: language_name.to_string(),
            translated_text: translated_text.to_string(),
            created_at: DateTime::now(),
        }
    }
}

/// 缓存写入错误
#[derive(Error, Debug)]
pub enum StoreError {
    /// 该 (文本, 国家) 对已存在；并发请求抢先写入时出现，按良性处理
    #[error("cache entry already exists for this (text, country) pair")]
    DuplicateKey,

    /// 其他持久化错误
    #[error("cache backend error: {0}")]
    Backend(String),
}

/// 缓存存储契约
///
/// 读错误在实现内部消化为"未命中"；调用方只看到 Option。
#[async_trait]
pub trait TranslationStore: Send + Sync {
    /// 精确查找归一化文本 + 国家代码对应的条目
    async fn lookup(&self, text: &str, country_code: &str) -> Option<TranslationCacheEntry>;

    /// 写入新条目；重复键返回 [`StoreError::DuplicateKey`]
    async fn store(&self, entry: TranslationCacheEntry) -> Result<(), StoreError>;
}

/// 基于 MongoDB 的缓存存储
pub struct MongoTranslationStore {
    collection: Collection<TranslationCacheEntry>,
}

impl MongoTranslationStore {
    pub fn new(db: &Database, collection_name: &str) -> Self {
        Self {
            collection: db.collection::<TranslationCacheEntry>(collection_name),
        }
    }

    /// 创建 (original_text, destination_country_code) 唯一复合索引
    ///
    /// 失败只记录日志：没有索引时重复键约定不会触发，但正确性不受影响。
    pub async fn ensure_indexes(&self) {
        let index = IndexModel::builder()
            .keys(doc! { "original_text": 1, "destination_country_code": 1 })
            .options(IndexOptions::builder().unique(true).build())
            .build();

        if let Err(err) = self.collection.create_index(index).await {
            tracing::warn!(error = %err, "创建缓存唯一索引失败，继续运行");
        }
    }

    fn is_duplicate_key(err: &mongodb::error::Error) -> bool {
        match err.kind.as_ref() {
            ErrorKind::Write(WriteFailure::WriteError(write_error)) => {
                write_error.code == DUPLICATE_KEY_CODE
            }
            _ => false,
        }
    }
}

#[async_trait]
impl TranslationStore for MongoTranslationStore {
    async fn lookup(&self, text: &str, country_code: &str) -> Option<TranslationCacheEntry> {
        let filter = doc! {
            "original_text": normalize_text(text),
            "destination_country_code": country_code,
        };

        match self.collection.find_one(filter).await {
            Ok(entry) => entry,
            Err(err) => {
                // fail-open：读错误按未命中处理
                tracing::warn!(error = %err, "缓存读取失败，按未命中继续");
                None
            }
        }
    }

    async fn store(&self, entry: TranslationCacheEntry) -> Result<(), StoreError> {
        match self.collection.insert_one(entry).await {
            Ok(_) => Ok(()),
            Err(err) if Self::is_duplicate_key(&err) => Err(StoreError::DuplicateKey),
            Err(err) => Err(StoreError::Backend(err.to_string())),
        }
    }
}
