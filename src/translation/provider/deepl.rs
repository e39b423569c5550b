//! DeepL 主提供方后端
//!
//! 调用 DeepL v2 JSON 接口，按 HTTP 状态码在失败点完成错误分类。

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::{ProviderError, TranslationBackend};

/// 单次请求超时
const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

#[derive(Serialize)]
struct DeepLRequest<'a> {
    text: [&'a str; 1],
    source_lang: String,
    target_lang: String,
}

#[derive(Deserialize)]
struct DeepLResponse {
    translations: Vec<DeepLTranslation>,
}

#[derive(Deserialize)]
struct DeepLTranslation {
    text: String,
}

/// DeepL 后端
pub struct DeepLBackend {
    api_key: String,
    api_url: String,
    client: reqwest::Client,
}

impl DeepLBackend {
    pub fn new(api_key: String, api_url: String) -> Result<Self, ProviderError> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| ProviderError::Other(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self {
            api_key,
            api_url,
            client,
        })
    }
}

impl std::fmt::Debug for DeepLBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DeepLBackend")
            .field("api_key", &"***")
            .field("api_url", &self.api_url)
            .finish()
    }
}

#[async_trait]
impl TranslationBackend for DeepLBackend {
    async fn translate(
        &self,
        text: &str,
        source_lang: &str,
        target_lang: &str,
    ) -> Result<String, ProviderError> {
        let body = DeepLRequest {
            text: [text],
            source_lang: deepl_lang(source_lang),
            target_lang: deepl_lang(target_lang),
        };

        let response = self
            .client
            .post(&self.api_url)
            .header(
                reqwest::header::AUTHORIZATION,
                format!("DeepL-Auth-Key {}", self.api_key),
            )
            .json(&body)
            .send()
            .await
            .map_err(classify_transport_error)?;

        let status = response.status().as_u16();
        if !response.status().is_success() {
            let detail = response.text().await.unwrap_or_default();
            return Err(classify_status(status, &detail));
        }

        let parsed: DeepLResponse = response
            .json()
            .await
            .map_err(|e| ProviderError::Other(format!("malformed DeepL response: {}", e)))?;

        parsed
            .translations
            .into_iter()
            .next()
            .map(|t| t.text)
            .ok_or_else(|| ProviderError::Other("DeepL response contained no translation".into()))
    }

    fn name(&self) -> &'static str {
        "DeepL"
    }
}

/// DeepL 侧的语言代码形式：大写，保留方言后缀（DeepL 接受 PT-BR 等）
fn deepl_lang(code: &str) -> String {
    code.trim().to_uppercase()
}

/// 传输层错误分类
fn classify_transport_error(err: reqwest::Error) -> ProviderError {
    if err.is_timeout() {
        ProviderError::Timeout(err.to_string())
    } else {
        ProviderError::Network(err.to_string())
    }
}

/// 按 DeepL 返回的 HTTP 状态码分类
///
/// 456 是 DeepL 特有的"字符配额用尽"状态码。
///
/// 400 一律归为 Unsupported：DeepL 对不支持的语言对和其他畸形请求
/// 返回同一个状态码，只靠状态码无法区分，畸形请求会改走备用后端。
pub fn classify_status(status: u16, detail: &str) -> ProviderError {
    let detail = if detail.is_empty() {
        format!("HTTP {}", status)
    } else {
        format!("HTTP {}: {}", status, detail)
    };

    match status {
        401 | 403 => ProviderError::Auth(detail),
        429 | 456 => ProviderError::Quota(detail),
        400 => ProviderError::Unsupported(detail),
        504 => ProviderError::Timeout(detail),
        _ => ProviderError::Other(detail),
    }
}
