//! 免费备用翻译后端
//!
//! 走 Google 未认证的公共翻译端点（GET），覆盖面广但质量较低。
//! 此后端失败即为最终失败，不再有下一级回退。

use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;

use super::{ProviderError, TranslationBackend};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

const DEFAULT_ENDPOINT: &str = "https://translate.googleapis.com/translate_a/single";

/// 公共翻译端点后端
pub struct GoogleFallbackBackend {
    endpoint: String,
    client: reqwest::Client,
}

impl GoogleFallbackBackend {
    pub fn new() -> Result<Self, ProviderError> {
        Self::with_endpoint(DEFAULT_ENDPOINT.to_string())
    }

    pub fn with_endpoint(endpoint: String) -> Result<Self, ProviderError> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| ProviderError::Other(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self { endpoint, client })
    }
}

#[async_trait]
impl TranslationBackend for GoogleFallbackBackend {
    async fn translate(
        &self,
        text: &str,
        source_lang: &str,
        target_lang: &str,
    ) -> Result<String, ProviderError> {
        let url = format!(
            "{}?client=gtx&sl={}&tl={}&dt=t&q={}",
            self.endpoint,
            source_lang.trim().to_lowercase(),
            strip_dialect_lower(target_lang),
            urlencoding::encode(text)
        );

        let response = self.client.get(&url).send().await.map_err(|e| {
            if e.is_timeout() {
                ProviderError::Timeout(e.to_string())
            } else {
                ProviderError::Network(e.to_string())
            }
        })?;

        if !response.status().is_success() {
            return Err(ProviderError::Other(format!(
                "fallback endpoint returned HTTP {}",
                response.status().as_u16()
            )));
        }

        let value: Value = response
            .json()
            .await
            .map_err(|e| ProviderError::Other(format!("malformed fallback response: {}", e)))?;

        parse_response(&value)
    }

    fn name(&self) -> &'static str {
        "GoogleFallback"
    }
}

/// 公共端点只认基础语言代码
fn strip_dialect_lower(code: &str) -> String {
    super::strip_dialect(code.trim()).to_lowercase()
}

/// 解析公共端点的嵌套数组响应
///
/// 形如 `[[["Bonjour","Hello",...],["le monde","the world",...]],...]`，
/// 第一层数组的每个元素的第 0 项是一段译文，按顺序拼接。
pub fn parse_response(value: &Value) -> Result<String, ProviderError> {
    let segments = value
        .get(0)
        .and_then(Value::as_array)
        .ok_or_else(|| ProviderError::Other("fallback response missing segments".into()))?;

    let mut translated = String::new();
    for segment in segments {
        if let Some(piece) = segment.get(0).and_then(Value::as_str) {
            translated.push_str(piece);
        }
    }

    if translated.trim().is_empty() {
        return Err(ProviderError::Other(
            "fallback response contained no translated text".into(),
        ));
    }

    Ok(translated)
}
