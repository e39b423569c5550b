//! 集成测试共用的测试替身
#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use transkarte::translation::provider::ProviderAdapter;
use transkarte::translation::storage::{
    normalize_text, StoreError, TranslationCacheEntry, TranslationStore,
};
use transkarte::translation::{ProviderError, TranslationBackend, TranslationService};

/// 可编程的翻译后端替身，记录调用次数
pub struct MockBackend {
    behavior: MockBehavior,
    calls: Arc<AtomicUsize>,
    name: &'static str,
}

#[derive(Clone)]
pub enum MockBehavior {
    /// 每次调用返回固定译文
    Succeed(String),
    /// 每次调用返回固定错误
    Fail(ProviderError),
}

impl MockBackend {
    pub fn new(name: &'static str, behavior: MockBehavior) -> (Arc<Self>, Arc<AtomicUsize>) {
        let calls = Arc::new(AtomicUsize::new(0));
        let backend = Arc::new(Self {
            behavior,
            calls: Arc::clone(&calls),
            name,
        });
        (backend, calls)
    }
}

#[async_trait]
impl TranslationBackend for MockBackend {
    async fn translate(
        &self,
        _text: &str,
        _source_lang: &str,
        _target_lang: &str,
    ) -> Result<String, ProviderError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.behavior {
            MockBehavior::Succeed(translated) => Ok(translated.clone()),
            MockBehavior::Fail(err) => Err(err.clone()),
        }
    }

    fn name(&self) -> &'static str {
        self.name
    }
}

/// 内存版缓存存储，带重复键语义
#[derive(Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<(String, String), TranslationCacheEntry>>,
}

impl MemoryStore {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn len(&self) -> usize {
        self.entries.lock().unwrap().len()
    }
}

#[async_trait]
impl TranslationStore for MemoryStore {
    async fn lookup(&self, text: &str, country_code: &str) -> Option<TranslationCacheEntry> {
        let key = (normalize_text(text), country_code.to_string());
        self.entries.lock().unwrap().get(&key).cloned()
    }

    async fn store(&self, entry: TranslationCacheEntry) -> Result<(), StoreError> {
        let key = (
            entry.original_text.clone(),
            entry.destination_country_code.clone(),
        );
        let mut entries = self.entries.lock().unwrap();
        if entries.contains_key(&key) {
            return Err(StoreError::DuplicateKey);
        }
        entries.insert(key, entry);
        Ok(())
    }
}

/// 写入总是失败的存储，用于验证写失败不影响请求
pub struct FailingStore;

#[async_trait]
impl TranslationStore for FailingStore {
    async fn lookup(&self, _text: &str, _country_code: &str) -> Option<TranslationCacheEntry> {
        None
    }

    async fn store(&self, _entry: TranslationCacheEntry) -> Result<(), StoreError> {
        Err(StoreError::Backend("disk on fire".to_string()))
    }
}

/// 用替身装配一个完整的翻译服务
pub fn service_with(
    primary: Option<Arc<dyn TranslationBackend>>,
    fallback: Arc<dyn TranslationBackend>,
    store: Arc<dyn TranslationStore>,
) -> TranslationService {
    TranslationService::with_defaults(ProviderAdapter::new(primary, fallback), store)
}
