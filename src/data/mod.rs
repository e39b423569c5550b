//! 静态数据表
//!
//! 国家↔语言映射在进程启动时加载一次，之后只读。

pub mod countries;

pub use countries::{CountryIndex, CountryRecord, COUNTRY_LANGUAGES};
