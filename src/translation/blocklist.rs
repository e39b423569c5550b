//! 国家封锁策略
//!
//! 给定检测到的源语言，计算"已经说这种语言"的国家集合。
//! 这些国家不允许作为翻译目标；客户端也可以主动查询这份集合来置灰地图。

use std::sync::Arc;

use crate::data::CountryIndex;

/// 封锁集解析器
pub struct CountryBlockResolver {
    countries: Arc<CountryIndex>,
}

impl CountryBlockResolver {
    pub fn new(countries: Arc<CountryIndex>) -> Self {
        Self { countries }
    }

    /// 返回映射语言与源语言前缀匹配（不区分大小写）的国家集合
    ///
    /// 前缀匹配处理复合代码："pt-BR" 匹配源语言 "pt"。
    /// 输出按 Alpha-3 排序，保证确定性。
    pub fn blocked_countries(&self, source_lang: &str) -> Vec<String> {
        let source = source_lang.trim().to_lowercase();
        if source.is_empty() {
            return Vec::new();
        }

        let mut blocked: Vec<String> = self
            .countries
            .records()
            .filter(|record| record.lang_code.to_lowercase().starts_with(&source))
            .map(|record| record.alpha3.to_string())
            .collect();

        blocked.sort_unstable();
        blocked
    }
}
