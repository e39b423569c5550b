//! 统一的环境变量管理系统
//!
//! 提供类型安全、可验证的环境变量访问，所有配置入口集中在这里。

use std::env;
use std::fmt;

/// 环境变量解析错误
#[derive(Debug, Clone)]
pub struct EnvError {
    pub variable: String,
    pub message: String,
}

impl fmt::Display for EnvError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Environment variable '{}': {}",
            self.variable, self.message
        )
    }
}

impl std::error::Error for EnvError {}

pub type EnvResult<T> = Result<T, EnvError>;

/// 环境变量访问器特性
pub trait EnvVar<T> {
    const NAME: &'static str;
    const DEFAULT: Option<T>;
    const DESCRIPTION: &'static str;

    fn parse(value: &str) -> EnvResult<T>;

    fn get() -> EnvResult<T> {
        match env::var(Self::NAME) {
            Ok(value) => Self::parse(&value),
            Err(_) => {
                if let Some(default) = Self::DEFAULT {
                    Ok(default)
                } else {
                    Err(EnvError {
                        variable: Self::NAME.to_string(),
                        message: "Required environment variable not set".to_string(),
                    })
                }
            }
        }
    }
}

/// 核心环境变量定义
pub mod core {
    use super::*;

    /// 日志级别
    pub struct LogLevel;
    impl EnvVar<String> for LogLevel {
        const NAME: &'static str = "TRANSKARTE_LOG_LEVEL";
        const DEFAULT: Option<String> = None;
        const DESCRIPTION: &'static str = "Log level: trace, debug, info, warn, error";

        fn get() -> EnvResult<String> {
            match env::var(Self::NAME) {
                Ok(value) => Self::parse(&value),
                Err(_) => Ok("info".to_string()),
            }
        }

        fn parse(value: &str) -> EnvResult<String> {
            match value.to_lowercase().as_str() {
                "trace" | "debug" | "info" | "warn" | "error" => Ok(value.to_lowercase()),
                _ => Err(EnvError {
                    variable: Self::NAME.to_string(),
                    message: format!(
                        "Invalid log level '{}'. Use: trace, debug, info, warn, error",
                        value
                    ),
                }),
            }
        }
    }
}

/// Web 服务器相关环境变量
pub mod web {
    use super::*;

    /// 绑定地址
    pub struct BindAddress;
    impl EnvVar<String> for BindAddress {
        const NAME: &'static str = "TRANSKARTE_BIND_ADDRESS";
        const DEFAULT: Option<String> = None;
        const DESCRIPTION: &'static str = "Web server bind address";

        fn get() -> EnvResult<String> {
            match env::var(Self::NAME) {
                Ok(value) => Self::parse(&value),
                Err(_) => Ok("127.0.0.1".to_string()),
            }
        }

        fn parse(value: &str) -> EnvResult<String> {
            let addr = value.trim();
            if addr.is_empty() {
                return Err(EnvError {
                    variable: Self::NAME.to_string(),
                    message: "Address cannot be empty".to_string(),
                });
            }
            Ok(addr.to_string())
        }
    }

    /// 端口
    pub struct Port;
    impl EnvVar<u16> for Port {
        const NAME: &'static str = "TRANSKARTE_PORT";
        const DEFAULT: Option<u16> = Some(3000);
        const DESCRIPTION: &'static str = "Web server port";

        fn parse(value: &str) -> EnvResult<u16> {
            let port: u16 = value.parse().map_err(|_| EnvError {
                variable: Self::NAME.to_string(),
                message: "Must be a valid port number (1-65535)".to_string(),
            })?;

            if port == 0 {
                return Err(EnvError {
                    variable: Self::NAME.to_string(),
                    message: "Port cannot be 0".to_string(),
                });
            }

            Ok(port)
        }
    }

    /// 静态文件目录（为空表示不挂载静态服务）
    pub struct StaticDir;
    impl EnvVar<String> for StaticDir {
        const NAME: &'static str = "TRANSKARTE_STATIC_DIR";
        const DEFAULT: Option<String> = None;
        const DESCRIPTION: &'static str = "Static files directory (empty disables)";

        fn get() -> EnvResult<String> {
            match env::var(Self::NAME) {
                Ok(value) => Self::parse(&value),
                Err(_) => Ok(String::new()),
            }
        }

        fn parse(value: &str) -> EnvResult<String> {
            Ok(value.trim().to_string())
        }
    }
}

/// MongoDB 相关环境变量
pub mod mongodb {
    use super::*;

    /// MongoDB 连接字符串
    pub struct ConnectionString;
    impl EnvVar<String> for ConnectionString {
        const NAME: &'static str = "MONGODB_URL";
        const DEFAULT: Option<String> = None;
        const DESCRIPTION: &'static str = "MongoDB connection string";

        fn get() -> EnvResult<String> {
            match env::var(Self::NAME) {
                Ok(value) => Self::parse(&value),
                Err(_) => Ok("mongodb://localhost:27017".to_string()),
            }
        }

        fn parse(value: &str) -> EnvResult<String> {
            let url = value.trim();
            if url.starts_with("mongodb://") || url.starts_with("mongodb+srv://") {
                Ok(url.to_string())
            } else {
                Err(EnvError {
                    variable: Self::NAME.to_string(),
                    message: "MongoDB URL must start with mongodb:// or mongodb+srv://"
                        .to_string(),
                })
            }
        }
    }

    /// 数据库名称
    pub struct DatabaseName;
    impl EnvVar<String> for DatabaseName {
        const NAME: &'static str = "MONGODB_DATABASE";
        const DEFAULT: Option<String> = None;
        const DESCRIPTION: &'static str = "MongoDB database name";

        fn get() -> EnvResult<String> {
            match env::var(Self::NAME) {
                Ok(value) => Self::parse(&value),
                Err(_) => Ok("transkarte".to_string()),
            }
        }

        fn parse(value: &str) -> EnvResult<String> {
            non_empty(value, Self::NAME, "Database name cannot be empty")
        }
    }

    /// 集合名称
    pub struct CollectionName;
    impl EnvVar<String> for CollectionName {
        const NAME: &'static str = "MONGODB_COLLECTION";
        const DEFAULT: Option<String> = None;
        const DESCRIPTION: &'static str = "MongoDB collection for cached translations";

        fn get() -> EnvResult<String> {
            match env::var(Self::NAME) {
                Ok(value) => Self::parse(&value),
                Err(_) => Ok("translations".to_string()),
            }
        }

        fn parse(value: &str) -> EnvResult<String> {
            non_empty(value, Self::NAME, "Collection name cannot be empty")
        }
    }
}

/// 翻译提供方相关环境变量
pub mod provider {
    use super::*;

    /// DeepL API 密钥；缺失时返回空串，主提供方被整体禁用，仅走备用提供方
    pub struct DeepLApiKey;
    impl EnvVar<String> for DeepLApiKey {
        const NAME: &'static str = "DEEPL_API_KEY";
        const DEFAULT: Option<String> = None;
        const DESCRIPTION: &'static str = "DeepL API key (absence disables the primary provider)";

        fn get() -> EnvResult<String> {
            match env::var(Self::NAME) {
                Ok(value) => Self::parse(&value),
                Err(_) => Ok(String::new()),
            }
        }

        fn parse(value: &str) -> EnvResult<String> {
            non_empty(value, Self::NAME, "API key cannot be empty")
        }
    }

    /// DeepL API 地址
    pub struct DeepLApiUrl;
    impl EnvVar<String> for DeepLApiUrl {
        const NAME: &'static str = "DEEPL_API_URL";
        const DEFAULT: Option<String> = None;
        const DESCRIPTION: &'static str = "DeepL translate endpoint URL";

        fn get() -> EnvResult<String> {
            match env::var(Self::NAME) {
                Ok(value) => Self::parse(&value),
                Err(_) => Ok("https://api-free.deepl.com/v2/translate".to_string()),
            }
        }

        fn parse(value: &str) -> EnvResult<String> {
            let url = value.trim();
            if url.starts_with("http://") || url.starts_with("https://") {
                Ok(url.to_string())
            } else {
                Err(EnvError {
                    variable: Self::NAME.to_string(),
                    message: "API URL must start with http:// or https://".to_string(),
                })
            }
        }
    }
}

/// 辅助函数
fn non_empty(value: &str, var_name: &str, message: &str) -> EnvResult<String> {
    let value = value.trim();
    if value.is_empty() {
        return Err(EnvError {
            variable: var_name.to_string(),
            message: message.to_string(),
        });
    }
    Ok(value.to_string())
}
