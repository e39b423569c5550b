//! 翻译相关 API 处理器

use std::sync::Arc;

use axum::{
    extract::{Json as ExtractJson, State},
    http::StatusCode,
    response::Json,
};
use serde_json::{json, Value};

use crate::translation::{ProviderError, TranslateError};
use crate::web::types::{
    AppState, BlockedCountriesRequest, BlockedCountriesResponse, TranslateRequest,
    TranslateResponse,
};

/// POST /api/translate 处理器
pub async fn translate(
    State(state): State<Arc<AppState>>,
    ExtractJson(request): ExtractJson<TranslateRequest>,
) -> Result<Json<TranslateResponse>, (StatusCode, Json<Value>)> {
    let country_name = &request.geo.properties.name;
    tracing::info!(country = %country_name, "处理翻译请求");

    match state
        .service
        .translate_for_country(&request.text, country_name)
        .await
    {
        Ok(outcome) => Ok(Json(outcome.into())),
        Err(err) => Err(error_response(err)),
    }
}

/// POST /api/translate/blocked-countries 处理器
pub async fn blocked_countries(
    State(state): State<Arc<AppState>>,
    ExtractJson(request): ExtractJson<BlockedCountriesRequest>,
) -> Result<Json<BlockedCountriesResponse>, (StatusCode, Json<Value>)> {
    match state.service.blocked_countries_for_text(&request.text).await {
        Ok((blocked, source_lang)) => Ok(Json(BlockedCountriesResponse {
            blocked_countries: blocked,
            source_lang,
        })),
        Err(err) => Err(error_response(err)),
    }
}

/// GET /api/health 处理器
pub async fn health() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "service": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

/// 把管道错误映射为 HTTP 状态码和响应体
///
/// 对外的 message 是稳定文案，内部分类只出现在 details 里。
pub fn error_response(err: TranslateError) -> (StatusCode, Json<Value>) {
    match err {
        TranslateError::InvalidInput(detail) => (
            StatusCode::BAD_REQUEST,
            Json(json!({
                "success": false,
                "message": "Invalid request",
                "details": detail,
            })),
        ),
        TranslateError::UnknownCountry(name) => (
            StatusCode::NOT_FOUND,
            Json(json!({
                "success": false,
                "message": "Country not supported",
                "details": format!("no language mapping for country '{}'", name),
            })),
        ),
        TranslateError::BlockedCountry {
            blocked_countries,
            source_lang,
        } => (
            StatusCode::FORBIDDEN,
            Json(json!({
                "success": false,
                "message": "Target country already speaks the detected language",
                "blockedCountries": blocked_countries,
                "sourceLang": source_lang,
            })),
        ),
        TranslateError::Provider(provider_err) => {
            let status = provider_status(&provider_err);
            tracing::error!(kind = provider_err.kind(), error = %provider_err, "提供方调用失败");
            (
                status,
                Json(json!({
                    "success": false,
                    "message": "Translation service unavailable",
                    "details": provider_err.kind(),
                })),
            )
        }
    }
}

fn provider_status(err: &ProviderError) -> StatusCode {
    match err {
        ProviderError::Auth(_) => StatusCode::BAD_GATEWAY,
        ProviderError::Quota(_) => StatusCode::TOO_MANY_REQUESTS,
        ProviderError::Timeout(_) => StatusCode::GATEWAY_TIMEOUT,
        ProviderError::Network(_) => StatusCode::BAD_GATEWAY,
        ProviderError::Unsupported(_) => StatusCode::BAD_GATEWAY,
        ProviderError::Other(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_error_statuses() {
        let (status, _) = error_response(TranslateError::InvalidInput("empty".into()));
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (status, _) = error_response(TranslateError::UnknownCountry("Atlantis".into()));
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_blocked_country_body_contains_block_set() {
        let (status, Json(body)) = error_response(TranslateError::BlockedCountry {
            blocked_countries: vec!["FRA".to_string(), "BEL".to_string()],
            source_lang: "fr".to_string(),
        });
        assert_eq!(status, StatusCode::FORBIDDEN);
        assert_eq!(body["blockedCountries"][0], "FRA");
        assert_eq!(body["sourceLang"], "fr");
        assert_eq!(body["success"], false);
    }

    #[test]
    fn test_provider_error_statuses() {
        let cases = [
            (ProviderError::Auth("bad key".into()), StatusCode::BAD_GATEWAY),
            (
                ProviderError::Quota("exhausted".into()),
                StatusCode::TOO_MANY_REQUESTS,
            ),
            (
                ProviderError::Timeout("15s".into()),
                StatusCode::GATEWAY_TIMEOUT,
            ),
            (
                ProviderError::Network("refused".into()),
                StatusCode::BAD_GATEWAY,
            ),
            (
                ProviderError::Unsupported("xx".into()),
                StatusCode::BAD_GATEWAY,
            ),
            (
                ProviderError::Other("empty body".into()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (err, expected) in cases {
            let (status, Json(body)) = error_response(TranslateError::Provider(err));
            assert_eq!(status, expected);
            // 对外文案稳定，内部分类只在 details
            assert_eq!(body["message"], "Translation service unavailable");
        }
    }
}
