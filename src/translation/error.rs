//! 翻译请求统一错误处理
//!
//! 区分客户端错误（校验、未知国家、封锁策略）与提供方错误；
//! 错误类型在失败点直接构造，绝不从错误消息文本反向解析。

use thiserror::Error;

use crate::translation::provider::ProviderError;

/// 一次翻译请求可能的失败方式
#[derive(Error, Debug, Clone)]
pub enum TranslateError {
    /// 输入校验失败（空文本、超长文本等）
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// 目标国家无法解析或没有配置语言
    #[error("unknown country: {0}")]
    UnknownCountry(String),

    /// 目标国家已使用检测到的源语言，按策略拒绝翻译
    #[error("target country speaks the detected source language '{source_lang}'")]
    BlockedCountry {
        /// 完整封锁集（Alpha-3），便于客户端一次性置灰
        blocked_countries: Vec<String>,
        /// 检测到的源语言代码
        source_lang: String,
    },

    /// 提供方调用失败（已分类）
    #[error(transparent)]
    Provider(#[from] ProviderError),
}

pub type TranslateResult<T> = Result<T, TranslateError>;
