//! Web 层共享类型

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::translation::service::TranslationOutcome;
use crate::translation::TranslationService;

/// 应用共享状态
pub struct AppState {
    pub service: Arc<TranslationService>,
}

/// GeoJSON feature 的 properties 部分（只取国家名）
#[derive(Debug, Deserialize)]
pub struct GeoProperties {
    pub name: String,
}

/// 客户端点击地图后发来的 GeoJSON 片段
#[derive(Debug, Deserialize)]
pub struct GeoFeature {
    pub properties: GeoProperties,
}

/// 翻译请求
#[derive(Debug, Deserialize)]
pub struct TranslateRequest {
    pub text: String,
    pub geo: GeoFeature,
}

/// 翻译成功响应
#[derive(Debug, Serialize)]
pub struct TranslateResponse {
    pub success: bool,
    pub translation: String,
    /// 目标语言的人类可读名称
    pub language: String,
    pub country: String,
    #[serde(rename = "languageCode")]
    pub language_code: String,
    #[serde(rename = "fromCache")]
    pub from_cache: bool,
    /// 源语言与目标语言相同时的说明
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl From<TranslationOutcome> for TranslateResponse {
    fn from(outcome: TranslationOutcome) -> Self {
        Self {
            success: true,
            translation: outcome.translation,
            language: outcome.language_name,
            country: outcome.country_name,
            language_code: outcome.language_code,
            from_cache: outcome.from_cache,
            note: outcome.note,
        }
    }
}

/// 封锁国家查询请求
#[derive(Debug, Deserialize)]
pub struct BlockedCountriesRequest {
    pub text: String,
}

/// 封锁国家查询响应
#[derive(Debug, Serialize)]
pub struct BlockedCountriesResponse {
    #[serde(rename = "blockedCountries")]
    pub blocked_countries: Vec<String>,
    #[serde(rename = "sourceLang")]
    pub source_lang: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_translate_request_deserializes_geojson_shape() {
        let body = r#"{
            "text": "Hola",
            "geo": {"properties": {"name": "France"}, "geometry": null}
        }"#;
        let request: TranslateRequest = serde_json::from_str(body).unwrap();
        assert_eq!(request.text, "Hola");
        assert_eq!(request.geo.properties.name, "France");
    }

    #[test]
    fn test_response_field_names() {
        let response = TranslateResponse {
            success: true,
            translation: "Bonjour".to_string(),
            language: "French".to_string(),
            country: "France".to_string(),
            language_code: "fr".to_string(),
            from_cache: false,
            note: None,
        };
        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value["languageCode"], "fr");
        assert_eq!(value["fromCache"], false);
        assert!(value.get("note").is_none());
    }

    #[test]
    fn test_blocked_countries_field_names() {
        let response = BlockedCountriesResponse {
            blocked_countries: vec!["FRA".to_string()],
            source_lang: "fr".to_string(),
        };
        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value["blockedCountries"][0], "FRA");
        assert_eq!(value["sourceLang"], "fr");
    }
}
