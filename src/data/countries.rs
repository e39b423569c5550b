//! 国家↔语言静态映射表
//!
//! 每个国家只保留一种"游戏语言"（地图点击后翻译的目标语言）。
//! 映射在进程启动时构建成索引，进程生命周期内不可变。

use std::collections::HashMap;

/// 一条国家记录：ISO Alpha-3 代码、显示名称、目标语言代码与名称
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CountryRecord {
    /// ISO Alpha-3 国家代码（如 "FRA"）
    pub alpha3: &'static str,
    /// 英文国家名（与前端 GeoJSON 的 properties.name 对齐）
    pub name: &'static str,
    /// 目标语言代码（ISO 639-1，可带方言后缀，如 "pt-BR"）
    pub lang_code: &'static str,
    /// 目标语言的人类可读名称
    pub lang_name: &'static str,
}

const fn rec(
    alpha3: &'static str,
    name: &'static str,
    lang_code: &'static str,
    lang_name: &'static str,
) -> CountryRecord {
    CountryRecord {
        alpha3,
        name,
        lang_code,
        lang_name,
    }
}

/// 全部国家记录，按大洲粗略分组
pub const COUNTRY_LANGUAGES: &[CountryRecord] = &[
    // 欧洲
    rec("FRA", "France", "fr", "French"),
    rec("DEU", "Germany", "de", "German"),
    rec("ESP", "Spain", "es", "Spanish"),
    rec("ITA", "Italy", "it", "Italian"),
    rec("PRT", "Portugal", "pt", "Portuguese"),
    rec("GBR", "United Kingdom", "en", "English"),
    rec("IRL", "Ireland", "en", "English"),
    rec("NLD", "Netherlands", "nl", "Dutch"),
    rec("BEL", "Belgium", "nl", "Dutch"),
    rec("CHE", "Switzerland", "de", "German"),
    rec("AUT", "Austria", "de", "German"),
    rec("LUX", "Luxembourg", "lb", "Luxembourgish"),
    rec("POL", "Poland", "pl", "Polish"),
    rec("CZE", "Czech Republic", "cs", "Czech"),
    rec("SVK", "Slovakia", "sk", "Slovak"),
    rec("HUN", "Hungary", "hu", "Hungarian"),
    rec("ROU", "Romania", "ro", "Romanian"),
    rec("BGR", "Bulgaria", "bg", "Bulgarian"),
    rec("GRC", "Greece", "el", "Greek"),
    rec("CYP", "Cyprus", "el", "Greek"),
    rec("MLT", "Malta", "mt", "Maltese"),
    rec("SWE", "Sweden", "sv", "Swedish"),
    rec("NOR", "Norway", "nb", "Norwegian"),
    rec("DNK", "Denmark", "da", "Danish"),
    rec("FIN", "Finland", "fi", "Finnish"),
    rec("ISL", "Iceland", "is", "Icelandic"),
    rec("EST", "Estonia", "et", "Estonian"),
    rec("LVA", "Latvia", "lv", "Latvian"),
    rec("LTU", "Lithuania", "lt", "Lithuanian"),
    rec("UKR", "Ukraine", "uk", "Ukrainian"),
    rec("RUS", "Russia", "ru", "Russian"),
    rec("BLR", "Belarus", "be", "Belarusian"),
    rec("SRB", "Serbia", "sr", "Serbian"),
    rec("HRV", "Croatia", "hr", "Croatian"),
    rec("BIH", "Bosnia and Herzegovina", "bs", "Bosnian"),
    rec("SVN", "Slovenia", "sl", "Slovenian"),
    rec("MKD", "North Macedonia", "mk", "Macedonian"),
    rec("ALB", "Albania", "sq", "Albanian"),
    rec("TUR", "Turkey", "tr", "Turkish"),
    rec("GEO", "Georgia", "ka", "Georgian"),
    rec("ARM", "Armenia", "hy", "Armenian"),
    rec("AZE", "Azerbaijan", "az", "Azerbaijani"),
    // 美洲
    rec("USA", "United States of America", "en", "English"),
    rec("CAN", "Canada", "en", "English"),
    rec("MEX", "Mexico", "es", "Spanish"),
    rec("BRA", "Brazil", "pt-BR", "Brazilian Portuguese"),
    rec("ARG", "Argentina", "es", "Spanish"),
    rec("CHL", "Chile", "es", "Spanish"),
    rec("COL", "Colombia", "es", "Spanish"),
    rec("PER", "Peru", "es", "Spanish"),
    rec("VEN", "Venezuela", "es", "Spanish"),
    rec("ECU", "Ecuador", "es", "Spanish"),
    rec("BOL", "Bolivia", "es", "Spanish"),
    rec("PRY", "Paraguay", "es", "Spanish"),
    rec("URY", "Uruguay", "es", "Spanish"),
    rec("CUB", "Cuba", "es", "Spanish"),
    rec("GTM", "Guatemala", "es", "Spanish"),
    rec("HND", "Honduras", "es", "Spanish"),
    rec("NIC", "Nicaragua", "es", "Spanish"),
    rec("SLV", "El Salvador", "es", "Spanish"),
    rec("CRI", "Costa Rica", "es", "Spanish"),
    rec("PAN", "Panama", "es", "Spanish"),
    rec("DOM", "Dominican Republic", "es", "Spanish"),
    rec("HTI", "Haiti", "ht", "Haitian Creole"),
    // 亚洲
    rec("CHN", "China", "zh", "Chinese"),
    rec("JPN", "Japan", "ja", "Japanese"),
    rec("KOR", "South Korea", "ko", "Korean"),
    rec("PRK", "North Korea", "ko", "Korean"),
    rec("IND", "India", "hi", "Hindi"),
    rec("IDN", "Indonesia", "id", "Indonesian"),
    rec("THA", "Thailand", "th", "Thai"),
    rec("VNM", "Vietnam", "vi", "Vietnamese"),
    rec("PHL", "Philippines", "tl", "Filipino"),
    rec("MYS", "Malaysia", "ms", "Malay"),
    rec("PAK", "Pakistan", "ur", "Urdu"),
    rec("BGD", "Bangladesh", "bn", "Bengali"),
    rec("NPL", "Nepal", "ne", "Nepali"),
    rec("LKA", "Sri Lanka", "si", "Sinhala"),
    rec("MMR", "Myanmar", "my", "Burmese"),
    rec("KHM", "Cambodia", "km", "Khmer"),
    rec("LAO", "Laos", "lo", "Lao"),
    rec("MNG", "Mongolia", "mn", "Mongolian"),
    rec("KAZ", "Kazakhstan", "kk", "Kazakh"),
    rec("UZB", "Uzbekistan", "uz", "Uzbek"),
    rec("IRN", "Iran", "fa", "Persian"),
    rec("IRQ", "Iraq", "ar", "Arabic"),
    rec("SAU", "Saudi Arabia", "ar", "Arabic"),
    rec("ARE", "United Arab Emirates", "ar", "Arabic"),
    rec("JOR", "Jordan", "ar", "Arabic"),
    rec("LBN", "Lebanon", "ar", "Arabic"),
    rec("SYR", "Syria", "ar", "Arabic"),
    rec("ISR", "Israel", "he", "Hebrew"),
    // 非洲
    rec("EGY", "Egypt", "ar", "Arabic"),
    rec("MAR", "Morocco", "ar", "Arabic"),
    rec("DZA", "Algeria", "ar", "Arabic"),
    rec("TUN", "Tunisia", "ar", "Arabic"),
    rec("LBY", "Libya", "ar", "Arabic"),
    rec("NGA", "Nigeria", "en", "English"),
    rec("GHA", "Ghana", "en", "English"),
    rec("ZAF", "South Africa", "af", "Afrikaans"),
    rec("KEN", "Kenya", "sw", "Swahili"),
    rec("TZA", "Tanzania", "sw", "Swahili"),
    rec("ETH", "Ethiopia", "am", "Amharic"),
    rec("SEN", "Senegal", "fr", "French"),
    rec("CIV", "Ivory Coast", "fr", "French"),
    rec("CMR", "Cameroon", "fr", "French"),
    rec("COD", "Democratic Republic of the Congo", "fr", "French"),
    rec("AGO", "Angola", "pt", "Portuguese"),
    rec("MOZ", "Mozambique", "pt", "Portuguese"),
    // 大洋洲
    rec("AUS", "Australia", "en", "English"),
    rec("NZL", "New Zealand", "en", "English"),
];

/// 启动时构建一次的国家索引
///
/// 名称查询不区分大小写；代码查询使用 Alpha-3 原样大写形式。
#[derive(Debug)]
pub struct CountryIndex {
    by_name: HashMap<String, &'static CountryRecord>,
    by_alpha3: HashMap<&'static str, &'static CountryRecord>,
}

impl CountryIndex {
    pub fn new() -> Self {
        let mut by_name = HashMap::with_capacity(COUNTRY_LANGUAGES.len());
        let mut by_alpha3 = HashMap::with_capacity(COUNTRY_LANGUAGES.len());

        for record in COUNTRY_LANGUAGES {
            by_name.insert(record.name.to_lowercase(), record);
            by_alpha3.insert(record.alpha3, record);
        }

        Self { by_name, by_alpha3 }
    }

    /// 按国家名解析（前端传来的 GeoJSON properties.name）
    pub fn resolve_name(&self, name: &str) -> Option<&'static CountryRecord> {
        self.by_name.get(&name.trim().to_lowercase()).copied()
    }

    /// 按 Alpha-3 代码解析
    pub fn resolve_alpha3(&self, code: &str) -> Option<&'static CountryRecord> {
        self.by_alpha3
            .get(code.trim().to_uppercase().as_str())
            .copied()
    }

    /// 遍历全部记录（封锁策略扫描用）
    pub fn records(&self) -> impl Iterator<Item = &'static CountryRecord> + '_ {
        self.by_alpha3.values().copied()
    }

    pub fn len(&self) -> usize {
        self.by_alpha3.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_alpha3.is_empty()
    }
}

impl Default for CountryIndex {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_covers_all_records() {
        let index = CountryIndex::new();
        assert_eq!(index.len(), COUNTRY_LANGUAGES.len());
    }

    #[test]
    fn test_resolve_name_case_insensitive() {
        let index = CountryIndex::new();
        let france = index.resolve_name("  fRaNcE ").expect("France should resolve");
        assert_eq!(france.alpha3, "FRA");
        assert_eq!(france.lang_code, "fr");
        assert!(index.resolve_name("Atlantis").is_none());
    }

    #[test]
    fn test_resolve_alpha3() {
        let index = CountryIndex::new();
        let brazil = index.resolve_alpha3("bra").expect("BRA should resolve");
        assert_eq!(brazil.lang_code, "pt-BR");
        assert_eq!(brazil.lang_name, "Brazilian Portuguese");
    }

    #[test]
    fn test_no_duplicate_codes_or_names() {
        let index = CountryIndex::new();
        // HashMap 去重后长度不变说明表里没有重复键
        assert_eq!(index.by_name.len(), COUNTRY_LANGUAGES.len());
        assert_eq!(index.by_alpha3.len(), COUNTRY_LANGUAGES.len());
    }
}
