//! 翻译提供方适配层
//!
//! 把两个可互换的后端（付费主提供方 DeepL + 免费备用提供方）收拢到
//! 一个调用契约后面。选择策略：
//!
//! - 源语言和目标语言都在主提供方支持集内时先走主提供方
//! - 主提供方报"语言不支持"时在同一请求内静默改走备用提供方
//! - 任一语言一开始就不在支持集内时直接走备用提供方，不浪费调用
//! - 其余主提供方错误（认证、配额、超时、网络）原样上抛，不做回退
//! - 备用提供方失败即为最终失败
//!
//! 错误分类在失败点直接产生类型化的 [`ProviderError`]，调用方不需要
//! 也不应该解析错误消息文本。

pub mod deepl;
pub mod google;

use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;

pub use deepl::DeepLBackend;
pub use google::GoogleFallbackBackend;

/// 提供方错误，按调用方需要区分的维度分类
#[derive(Error, Debug, Clone)]
pub enum ProviderError {
    /// 凭据无效或过期
    #[error("provider authentication failed: {0}")]
    Auth(String),

    /// 配额耗尽或触发速率限制
    #[error("provider quota exceeded: {0}")]
    Quota(String),

    /// 请求超时
    #[error("provider request timed out: {0}")]
    Timeout(String),

    /// 网络不可达
    #[error("provider network error: {0}")]
    Network(String),

    /// 语言对不受支持（仅此类错误触发主→备回退）
    #[error("language pair not supported: {0}")]
    Unsupported(String),

    /// 其他失败：响应畸形、译文为空等
    #[error("provider error: {0}")]
    Other(String),
}

impl ProviderError {
    /// 稳定的机器可读分类名，用于响应里的 details 字段
    pub fn kind(&self) -> &'static str {
        match self {
            ProviderError::Auth(_) => "AUTH",
            ProviderError::Quota(_) => "QUOTA",
            ProviderError::Timeout(_) => "TIMEOUT",
            ProviderError::Network(_) => "NETWORK",
            ProviderError::Unsupported(_) => "UNSUPPORTED",
            ProviderError::Other(_) => "OTHER",
        }
    }
}

/// 翻译后端调用契约
///
/// 实现必须无状态（每次调用独立），并在失败点完成错误分类。
#[async_trait]
pub trait TranslationBackend: Send + Sync {
    async fn translate(
        &self,
        text: &str,
        source_lang: &str,
        target_lang: &str,
    ) -> Result<String, ProviderError>;

    fn name(&self) -> &'static str;
}

/// 主提供方（DeepL）支持的语言代码
const PRIMARY_LANGS: &[&str] = &[
    "bg", "cs", "da", "de", "el", "en", "es", "et", "fi", "fr", "hu", "id", "it", "ja", "ko",
    "lt", "lv", "nb", "nl", "pl", "pt", "ro", "ru", "sk", "sl", "sv", "tr", "uk", "zh",
];

/// 去掉方言后缀："pt-BR" → "pt"，"zh_CN" → "zh"
pub fn strip_dialect(code: &str) -> &str {
    code.split(['-', '_']).next().unwrap_or(code)
}

/// 主提供方是否支持该语言（方言后缀剥离一次后查支持集）
pub fn is_supported_by_primary(lang: &str) -> bool {
    let base = strip_dialect(lang.trim()).to_lowercase();
    PRIMARY_LANGS.contains(&base.as_str())
}

/// 双后端适配器
///
/// 主提供方可缺席（未配置 API 密钥时），此时所有请求直接走备用提供方。
pub struct ProviderAdapter {
    primary: Option<Arc<dyn TranslationBackend>>,
    fallback: Arc<dyn TranslationBackend>,
}

impl ProviderAdapter {
    pub fn new(
        primary: Option<Arc<dyn TranslationBackend>>,
        fallback: Arc<dyn TranslationBackend>,
    ) -> Self {
        Self { primary, fallback }
    }

    /// 按选择策略翻译文本
    ///
    /// 输出保证为非空的去除首尾空白的译文；两个后端返回空串都按
    /// [`ProviderError::Other`] 处理而不是当成成功的空翻译。
    pub async fn translate(
        &self,
        text: &str,
        source_lang: &str,
        target_lang: &str,
    ) -> Result<String, ProviderError> {
        let primary_eligible = self.primary.is_some()
            && is_supported_by_primary(source_lang)
            && is_supported_by_primary(target_lang);

        if primary_eligible {
            // 上面的条件保证 primary 存在
            let primary = self.primary.as_ref().ok_or_else(|| {
                ProviderError::Other("primary provider vanished".to_string())
            })?;

            match primary.translate(text, source_lang, target_lang).await {
                Ok(translated) => return finish(translated, primary.name()),
                Err(ProviderError::Unsupported(reason)) => {
                    tracing::warn!(
                        provider = primary.name(),
                        reason = %reason,
                        "主提供方不支持该语言对，改走备用提供方"
                    );
                }
                Err(err) => return Err(err),
            }
        } else {
            tracing::debug!(
                source = source_lang,
                target = target_lang,
                "语言对不在主提供方支持集内，直接走备用提供方"
            );
        }

        let translated = self
            .fallback
            .translate(text, source_lang, target_lang)
            .await?;
        finish(translated, self.fallback.name())
    }

    pub fn has_primary(&self) -> bool {
        self.primary.is_some()
    }
}

/// 输出契约检查：空白译文视为失败
fn finish(translated: String, provider: &'static str) -> Result<String, ProviderError> {
    let trimmed = translated.trim();
    if trimmed.is_empty() {
        return Err(ProviderError::Other(format!(
            "{} returned an empty translation",
            provider
        )));
    }
    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_dialect() {
        assert_eq!(strip_dialect("pt-BR"), "pt");
        assert_eq!(strip_dialect("zh_CN"), "zh");
        assert_eq!(strip_dialect("fr"), "fr");
    }

    #[test]
    fn test_is_supported_by_primary() {
        assert!(is_supported_by_primary("fr"));
        assert!(is_supported_by_primary("PT-BR"));
        assert!(is_supported_by_primary(" de "));
        assert!(!is_supported_by_primary("th"));
        assert!(!is_supported_by_primary("lb"));
        assert!(!is_supported_by_primary(""));
    }

    #[test]
    fn test_error_kind_names_are_stable() {
        assert_eq!(ProviderError::Auth(String::new()).kind(), "AUTH");
        assert_eq!(ProviderError::Quota(String::new()).kind(), "QUOTA");
        assert_eq!(ProviderError::Timeout(String::new()).kind(), "TIMEOUT");
        assert_eq!(ProviderError::Network(String::new()).kind(), "NETWORK");
        assert_eq!(ProviderError::Unsupported(String::new()).kind(), "UNSUPPORTED");
        assert_eq!(ProviderError::Other(String::new()).kind(), "OTHER");
    }

    #[test]
    fn test_finish_rejects_whitespace_output() {
        assert!(finish("   ".to_string(), "test").is_err());
        assert_eq!(finish(" Bonjour ".to_string(), "test").unwrap(), "Bonjour");
    }
}
