//! 错误分类与 HTTP 映射测试

mod common;

use std::sync::atomic::Ordering;

use axum::http::StatusCode;
use serde_json::json;

use common::{MockBackend, MockBehavior};
use transkarte::translation::provider::{deepl, google, is_supported_by_primary, ProviderAdapter};
use transkarte::translation::{ProviderError, TranslateError};
use transkarte::web::handlers::api::translate::error_response;

#[test]
fn deepl_status_codes_map_to_typed_errors() {
    assert_eq!(deepl::classify_status(401, "").kind(), "AUTH");
    assert_eq!(deepl::classify_status(403, "invalid key").kind(), "AUTH");
    assert_eq!(deepl::classify_status(429, "").kind(), "QUOTA");
    // 456 是字符配额用尽
    assert_eq!(deepl::classify_status(456, "").kind(), "QUOTA");
    assert_eq!(deepl::classify_status(400, "bad target_lang").kind(), "UNSUPPORTED");
    assert_eq!(deepl::classify_status(504, "").kind(), "TIMEOUT");
    assert_eq!(deepl::classify_status(500, "").kind(), "OTHER");
    assert_eq!(deepl::classify_status(503, "").kind(), "OTHER");
}

#[test]
fn fallback_response_parsing() {
    let ok = json!([[["Bonjour ", "Hello ", null], ["le monde", "world", null]], null, "en"]);
    assert_eq!(google::parse_response(&ok).unwrap(), "Bonjour le monde");

    assert!(google::parse_response(&json!(null)).is_err());
    assert!(google::parse_response(&json!([])).is_err());
    assert!(google::parse_response(&json!({"error": 1})).is_err());

    // 只有空白的译文按失败处理
    let blank = json!([[["  ", "Hello", null]], null, "en"]);
    assert_eq!(google::parse_response(&blank).unwrap_err().kind(), "OTHER");
}

#[test]
fn primary_allow_list_handles_dialects() {
    assert!(is_supported_by_primary("pt"));
    assert!(is_supported_by_primary("pt-BR"));
    assert!(is_supported_by_primary("PT-br"));
    assert!(!is_supported_by_primary("th"));
    assert!(!is_supported_by_primary("tl"));
}

#[tokio::test]
async fn adapter_only_falls_back_on_unsupported() {
    let cases = [
        (ProviderError::Auth("x".into()), false),
        (ProviderError::Quota("x".into()), false),
        (ProviderError::Timeout("x".into()), false),
        (ProviderError::Network("x".into()), false),
        (ProviderError::Other("x".into()), false),
        (ProviderError::Unsupported("x".into()), true),
    ];

    for (err, should_fall_back) in cases {
        let kind = err.kind();
        let (primary, _) = MockBackend::new("primary", MockBehavior::Fail(err));
        let (fallback, fallback_calls) =
            MockBackend::new("fallback", MockBehavior::Succeed("ok".to_string()));
        let adapter = ProviderAdapter::new(Some(primary), fallback);

        let result = adapter.translate("hola", "es", "fr").await;

        if should_fall_back {
            assert_eq!(result.unwrap(), "ok", "kind {}", kind);
            assert_eq!(fallback_calls.load(Ordering::SeqCst), 1, "kind {}", kind);
        } else {
            assert_eq!(result.unwrap_err().kind(), kind);
            assert_eq!(fallback_calls.load(Ordering::SeqCst), 0, "kind {}", kind);
        }
    }
}

#[tokio::test]
async fn fallback_failure_is_final() {
    let (fallback, fallback_calls) = MockBackend::new(
        "fallback",
        MockBehavior::Fail(ProviderError::Network("refused".to_string())),
    );
    let adapter = ProviderAdapter::new(None, fallback);

    let err = adapter.translate("hola", "es", "th").await.unwrap_err();
    assert_eq!(err.kind(), "NETWORK");
    assert_eq!(fallback_calls.load(Ordering::SeqCst), 1);
}

#[test]
fn http_status_mapping_covers_all_error_kinds() {
    let (status, _) = error_response(TranslateError::InvalidInput("too long".into()));
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = error_response(TranslateError::UnknownCountry("Narnia".into()));
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, body) = error_response(TranslateError::BlockedCountry {
        blocked_countries: vec!["ESP".to_string(), "MEX".to_string()],
        source_lang: "es".to_string(),
    });
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body.0["sourceLang"], "es");
    assert_eq!(body.0["blockedCountries"], json!(["ESP", "MEX"]));

    let provider_cases = [
        (ProviderError::Auth("".into()), StatusCode::BAD_GATEWAY),
        (ProviderError::Quota("".into()), StatusCode::TOO_MANY_REQUESTS),
        (ProviderError::Timeout("".into()), StatusCode::GATEWAY_TIMEOUT),
        (ProviderError::Network("".into()), StatusCode::BAD_GATEWAY),
        (ProviderError::Unsupported("".into()), StatusCode::BAD_GATEWAY),
        (
            ProviderError::Other("".into()),
            StatusCode::INTERNAL_SERVER_ERROR,
        ),
    ];
    for (err, expected) in provider_cases {
        let kind = err.kind();
        let (status, body) = error_response(TranslateError::Provider(err));
        assert_eq!(status, expected, "kind {}", kind);
        assert_eq!(body.0["details"], kind);
        assert_eq!(body.0["success"], false);
    }
}
