//! Web 服务器模块
//!
//! 提供地图点击翻译的 HTTP API 与可选的静态文件服务

pub mod config;
pub mod handlers;
pub mod routes;
pub mod types;

pub use config::*;
pub use routes::*;
pub use types::*;

use std::sync::Arc;

use axum::Router;
use mongodb::Client;
use tower_http::{cors::CorsLayer, services::ServeDir};

use crate::translation::provider::{DeepLBackend, GoogleFallbackBackend, ProviderAdapter};
use crate::translation::storage::MongoTranslationStore;
use crate::translation::{TranslationBackend, TranslationService};

/// Web 服务器错误
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("configuration error: {0}")]
    Config(#[from] crate::env::EnvError),

    #[error("mongodb error: {0}")]
    Mongo(#[from] mongodb::error::Error),

    #[error("provider setup error: {0}")]
    Provider(#[from] crate::translation::ProviderError),

    #[error("server error: {0}")]
    Io(#[from] std::io::Error),
}

/// Web 服务器
pub struct WebServer {
    config: WebConfig,
}

impl WebServer {
    /// 创建新的 Web 服务器
    pub fn new(config: WebConfig) -> Self {
        Self { config }
    }

    /// 装配所有组件并启动服务
    pub async fn start(&self) -> Result<(), ServerError> {
        self.config.validate()?;

        // 启动配置摘要；密钥只报告存在与否
        tracing::info!(
            listen = %self.config.listen_address(),
            static_dir = ?self.config.static_dir,
            database = %self.config.mongo_config.database_name,
            deepl = if self.config.provider_config.deepl_api_key.is_some() {
                "configured"
            } else {
                "disabled"
            },
            "加载配置完成"
        );

        // MongoDB 连接与缓存集合
        let mongo = &self.config.mongo_config;
        let client = Client::with_uri_str(&mongo.connection_string).await?;
        let database = client.database(&mongo.database_name);
        let store = MongoTranslationStore::new(&database, &mongo.collection_name);
        store.ensure_indexes().await;
        tracing::info!(
            database = %mongo.database_name,
            collection = %mongo.collection_name,
            "MongoDB 缓存就绪"
        );

        // 翻译后端：DeepL 主 + 公共端点备用；无密钥时只用备用
        let provider_cfg = &self.config.provider_config;
        let primary: Option<Arc<dyn TranslationBackend>> = match &provider_cfg.deepl_api_key {
            Some(key) => {
                let backend =
                    DeepLBackend::new(key.clone(), provider_cfg.deepl_api_url.clone())?;
                Some(Arc::new(backend) as Arc<dyn TranslationBackend>)
            }
            None => {
                tracing::warn!("未配置 DEEPL_API_KEY，只使用备用翻译后端");
                None
            }
        };
        let fallback: Arc<dyn TranslationBackend> = Arc::new(GoogleFallbackBackend::new()?);
        let provider = ProviderAdapter::new(primary, fallback);

        let service = TranslationService::with_defaults(provider, Arc::new(store));
        let app_state = Arc::new(AppState {
            service: Arc::new(service),
        });

        let app = create_router(app_state, &self.config);

        let listener = tokio::net::TcpListener::bind(self.config.listen_address()).await?;
        tracing::info!("Web server starting at http://{}", self.config.listen_address());

        axum::serve(listener, app).await?;

        Ok(())
    }
}

/// 创建路由器
fn create_router(app_state: Arc<AppState>, config: &WebConfig) -> Router {
    let mut app = create_routes().with_state(app_state);

    // 添加 CORS 支持
    app = app.layer(CorsLayer::permissive());

    // 添加静态文件服务（如果配置了）
    if let Some(static_dir) = &config.static_dir {
        app = app.nest_service("/static", ServeDir::new(static_dir));
    }

    app
}
