//! Web 服务器配置
//!
//! 使用类型安全的环境变量系统进行配置管理

use crate::env::{EnvError, EnvResult, EnvVar};

/// MongoDB 配置
#[derive(Debug, Clone)]
pub struct MongoConfig {
    /// MongoDB 连接字符串
    pub connection_string: String,
    /// 数据库名称
    pub database_name: String,
    /// 集合名称
    pub collection_name: String,
}

impl MongoConfig {
    /// 从环境变量创建配置
    pub fn from_env() -> EnvResult<Self> {
        use crate::env::mongodb;

        Ok(Self {
            connection_string: mongodb::ConnectionString::get()?,
            database_name: mongodb::DatabaseName::get()?,
            collection_name: mongodb::CollectionName::get()?,
        })
    }

    /// 验证配置
    pub fn validate(&self) -> EnvResult<()> {
        if self.connection_string.is_empty() {
            return Err(EnvError {
                variable: "MONGODB_URL".to_string(),
                message: "Connection string cannot be empty".to_string(),
            });
        }

        if self.database_name.is_empty() {
            return Err(EnvError {
                variable: "MONGODB_DATABASE".to_string(),
                message: "Database name cannot be empty".to_string(),
            });
        }

        if self.collection_name.is_empty() {
            return Err(EnvError {
                variable: "MONGODB_COLLECTION".to_string(),
                message: "Collection name cannot be empty".to_string(),
            });
        }

        Ok(())
    }
}

/// 翻译提供方配置
#[derive(Debug, Clone)]
pub struct ProviderConfig {
    /// DeepL API 密钥；缺失时只使用备用后端
    pub deepl_api_key: Option<String>,
    /// DeepL API 端点
    pub deepl_api_url: String,
}

impl ProviderConfig {
    /// 从环境变量创建配置
    pub fn from_env() -> EnvResult<Self> {
        use crate::env::provider;

        let key = provider::DeepLApiKey::get()?;
        let deepl_api_key = if key.is_empty() { None } else { Some(key) };

        Ok(Self {
            deepl_api_key,
            deepl_api_url: provider::DeepLApiUrl::get()?,
        })
    }
}

/// Web 服务器配置
#[derive(Debug, Clone)]
pub struct WebConfig {
    /// 绑定地址
    pub bind_addr: String,
    /// 端口
    pub port: u16,
    /// 静态文件目录
    pub static_dir: Option<String>,
    /// MongoDB 配置
    pub mongo_config: MongoConfig,
    /// 提供方配置
    pub provider_config: ProviderConfig,
}

impl WebConfig {
    /// 从环境变量创建配置
    pub fn from_env() -> EnvResult<Self> {
        use crate::env::web;

        let bind_addr = web::BindAddress::get()?;
        let port = web::Port::get()?;
        let static_dir_str = web::StaticDir::get()?;
        let static_dir = if static_dir_str.is_empty() {
            None
        } else {
            Some(static_dir_str)
        };

        Ok(Self {
            bind_addr,
            port,
            static_dir,
            mongo_config: MongoConfig::from_env()?,
            provider_config: ProviderConfig::from_env()?,
        })
    }

    /// 验证配置
    pub fn validate(&self) -> EnvResult<()> {
        if self.bind_addr.is_empty() {
            return Err(EnvError {
                variable: "TRANSKARTE_BIND_ADDRESS".to_string(),
                message: "Bind address cannot be empty".to_string(),
            });
        }

        if self.port == 0 {
            return Err(EnvError {
                variable: "TRANSKARTE_PORT".to_string(),
                message: "Port cannot be 0".to_string(),
            });
        }

        if let Some(ref static_dir) = self.static_dir {
            let path = std::path::Path::new(static_dir);
            if !path.exists() {
                tracing::warn!("Static directory '{}' does not exist", static_dir);
            }
        }

        self.mongo_config.validate()?;

        Ok(())
    }

    /// 获取完整的监听地址
    pub fn listen_address(&self) -> String {
        format!("{}:{}", self.bind_addr, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_listen_address() {
        let config = WebConfig {
            bind_addr: "0.0.0.0".to_string(),
            port: 8080,
            static_dir: None,
            mongo_config: MongoConfig {
                connection_string: "mongodb://localhost:27017".to_string(),
                database_name: "transkarte".to_string(),
                collection_name: "translations".to_string(),
            },
            provider_config: ProviderConfig {
                deepl_api_key: None,
                deepl_api_url: "https://api-free.deepl.com/v2/translate".to_string(),
            },
        };
        assert_eq!(config.listen_address(), "0.0.0.0:8080");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_port_zero() {
        let config = WebConfig {
            bind_addr: "127.0.0.1".to_string(),
            port: 0,
            static_dir: None,
            mongo_config: MongoConfig {
                connection_string: "mongodb://localhost:27017".to_string(),
                database_name: "transkarte".to_string(),
                collection_name: "translations".to_string(),
            },
            provider_config: ProviderConfig {
                deepl_api_key: None,
                deepl_api_url: "https://api-free.deepl.com/v2/translate".to_string(),
            },
        };
        assert!(config.validate().is_err());
    }
}
