//! 翻译编排服务
//!
//! 把检测、封锁策略、提供方适配和缓存组合成完整的请求处理：
//!
//! ```text
//! VALIDATE → CACHE_LOOKUP → {命中: RESPOND}
//!                         → {未命中: DETECT → BLOCK_CHECK → {封锁: REJECT}
//!                                  → SAME_LANGUAGE_CHECK → {相同: 原文返回}
//!                                  → TRANSLATE → PERSIST → RESPOND}
//! ```
//!
//! 缓存命中完全跳过检测与封锁检查：能存在缓存条目就说明该对
//! 当初没有被封锁，重复检查是多余的。

use std::sync::Arc;

use crate::data::{CountryIndex, CountryRecord};
use crate::translation::blocklist::CountryBlockResolver;
use crate::translation::detector::LanguageDetector;
use crate::translation::error::{TranslateError, TranslateResult};
use crate::translation::provider::{strip_dialect, ProviderAdapter};
use crate::translation::storage::{StoreError, TranslationCacheEntry, TranslationStore};

/// 请求文本的最大字符数（含）
pub const MAX_TEXT_CHARS: usize = 500;

/// 一次成功翻译的结果
#[derive(Debug, Clone, PartialEq)]
pub struct TranslationOutcome {
    pub translation: String,
    pub language_code: String,
    pub language_name: String,
    pub country_name: String,
    pub country_code: String,
    pub from_cache: bool,
    /// 源语言与目标语言相同时的说明文字
    pub note: Option<String>,
}

/// 翻译编排器
///
/// 所有组件在进程启动时构造一次并注入，无全局单例。
pub struct TranslationService {
    countries: Arc<CountryIndex>,
    detector: LanguageDetector,
    resolver: CountryBlockResolver,
    provider: ProviderAdapter,
    store: Arc<dyn TranslationStore>,
}

impl TranslationService {
    pub fn new(
        countries: Arc<CountryIndex>,
        detector: LanguageDetector,
        resolver: CountryBlockResolver,
        provider: ProviderAdapter,
        store: Arc<dyn TranslationStore>,
    ) -> Self {
        Self {
            countries,
            detector,
            resolver,
            provider,
            store,
        }
    }

    /// 用默认的检测器/解析器装配服务（静态表只加载一份）
    pub fn with_defaults(provider: ProviderAdapter, store: Arc<dyn TranslationStore>) -> Self {
        let countries = Arc::new(CountryIndex::new());
        let resolver = CountryBlockResolver::new(Arc::clone(&countries));
        Self::new(
            countries,
            LanguageDetector::new(),
            resolver,
            provider,
            store,
        )
    }

    /// 端到端处理一次翻译请求
    pub async fn translate_for_country(
        &self,
        text: &str,
        country_name: &str,
    ) -> TranslateResult<TranslationOutcome> {
        // VALIDATE
        let text = validate_text(text)?;
        let country = self.resolve_country(country_name)?;

        // CACHE_LOOKUP：命中则短路整个管道
        if let Some(entry) = self.store.lookup(text, country.alpha3).await {
            tracing::debug!(country = country.alpha3, "缓存命中");
            return Ok(TranslationOutcome {
                translation: entry.translated_text,
                language_code: country.lang_code.to_string(),
                language_name: entry.language_name,
                country_name: country.name.to_string(),
                country_code: country.alpha3.to_string(),
                from_cache: true,
                note: None,
            });
        }

        // DETECT
        let source_lang = self.detector.detect(text);

        // BLOCK_CHECK
        let blocked = self.resolver.blocked_countries(&source_lang);
        if blocked.iter().any(|code| code == country.alpha3) {
            tracing::info!(
                country = country.alpha3,
                source_lang = %source_lang,
                "目标国家在封锁集内，拒绝翻译"
            );
            return Err(TranslateError::BlockedCountry {
                blocked_countries: blocked,
                source_lang,
            });
        }

        // SAME_LANGUAGE_CHECK：目标语言剥离方言后缀后与源语言相同时直接返回原文
        if strip_dialect(country.lang_code).eq_ignore_ascii_case(&source_lang) {
            return Ok(TranslationOutcome {
                translation: text.to_string(),
                language_code: country.lang_code.to_string(),
                language_name: country.lang_name.to_string(),
                country_name: country.name.to_string(),
                country_code: country.alpha3.to_string(),
                from_cache: false,
                note: Some(format!(
                    "Text is already in {}; no translation performed",
                    country.lang_name
                )),
            });
        }

        // TRANSLATE
        let translated = self
            .provider
            .translate(text, &source_lang, country.lang_code)
            .await?;

        // PERSIST：尽力而为，绝不因此让请求失败
        let entry =
            TranslationCacheEntry::new(text, country.alpha3, country.lang_name, &translated);
        match self.store.store(entry).await {
            Ok(()) => {}
            Err(StoreError::DuplicateKey) => {
                tracing::debug!(country = country.alpha3, "并发请求已写入同一缓存条目，忽略");
            }
            Err(err) => {
                tracing::warn!(error = %err, "缓存写入失败，仍返回译文");
            }
        }

        // RESPOND
        Ok(TranslationOutcome {
            translation: translated,
            language_code: country.lang_code.to_string(),
            language_name: country.lang_name.to_string(),
            country_name: country.name.to_string(),
            country_code: country.alpha3.to_string(),
            from_cache: false,
            note: None,
        })
    }

    /// 独立的封锁集查询（客户端主动置灰地图用）
    pub async fn blocked_countries_for_text(
        &self,
        text: &str,
    ) -> TranslateResult<(Vec<String>, String)> {
        let text = validate_text(text)?;
        let source_lang = self.detector.detect(text);
        let blocked = self.resolver.blocked_countries(&source_lang);
        Ok((blocked, source_lang))
    }

    fn resolve_country(&self, country_name: &str) -> TranslateResult<&'static CountryRecord> {
        self.countries
            .resolve_name(country_name)
            .ok_or_else(|| TranslateError::UnknownCountry(country_name.trim().to_string()))
    }
}

/// 输入校验：非空、不超过 500 字符
fn validate_text(text: &str) -> TranslateResult<&str> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(TranslateError::InvalidInput(
            "text must not be empty".to_string(),
        ));
    }
    if trimmed.chars().count() > MAX_TEXT_CHARS {
        return Err(TranslateError::InvalidInput(format!(
            "text exceeds the {} character limit",
            MAX_TEXT_CHARS
        )));
    }
    Ok(trimmed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_text_boundaries() {
        assert!(validate_text("").is_err());
        assert!(validate_text("   ").is_err());

        let exactly_500 = "a".repeat(MAX_TEXT_CHARS);
        assert_eq!(validate_text(&exactly_500).unwrap(), exactly_500);

        let over_limit = "a".repeat(MAX_TEXT_CHARS + 1);
        assert!(validate_text(&over_limit).is_err());
    }

    #[test]
    fn test_validate_counts_chars_not_bytes() {
        // 500 个多字节字符也必须通过
        let exactly_500 = "é".repeat(MAX_TEXT_CHARS);
        assert!(validate_text(&exactly_500).is_ok());
    }
}
