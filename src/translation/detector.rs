//! 源语言检测
//!
//! 两级检测，纯函数、无外部调用：
//!
//! 1. 关键词层：对固定语言集合做特征词包含匹配并计分
//! 2. 统计层：whatlang 三元组（trigram）识别，置信度过低时退回默认语言
//!
//! 检测永不失败：无法识别的输入退化为默认语言而不是报错。

use whatlang::{Detector, Lang};

/// 统计层置信度下限，低于此值一律使用默认语言
const CONFIDENCE_THRESHOLD: f64 = 0.3;

/// 默认语言代码（检测失败时的兜底）
pub const FALLBACK_LANG: &str = "en";

/// 关键词表：语言代码 → 特征词/短语
///
/// 声明顺序即平局裁决顺序（得分相同取先声明者），匹配时先对输入做
/// trim + 小写归一化。
const KEYWORDS: &[(&str, &[&str])] = &[
    ("es", &["hola", "¿", "gracias", "buenos días", "cómo estás", "por favor"]),
    ("fr", &["bonjour", "merci", "s'il vous plaît", "au revoir", "comment ça va"]),
    ("de", &["hallo", "guten tag", "danke", "bitte", "wie geht", "auf wiedersehen"]),
    ("en", &["hello", "thank you", "please", "good morning", "how are you"]),
    ("it", &["ciao", "grazie", "buongiorno", "per favore", "come stai"]),
    ("pt", &["olá", "obrigado", "obrigada", "bom dia", "tudo bem"]),
    ("ru", &["привет", "спасибо", "здравствуйте", "пожалуйста"]),
    ("ja", &["こんにちは", "ありがとう", "すみません"]),
    ("zh", &["你好", "谢谢", "再见"]),
    ("nl", &["goedemorgen", "dank je", "alstublieft"]),
    ("pl", &["dzień dobry", "dziękuję", "cześć"]),
    ("tr", &["merhaba", "teşekkür"]),
    ("sv", &["hej då", "tack"]),
    ("ko", &["안녕하세요", "감사합니다"]),
    ("ar", &["مرحبا", "شكرا"]),
];

/// 语言检测器
///
/// 进程启动时构建一次并注入编排器；detect 是输入文本加静态表的纯函数。
pub struct LanguageDetector {
    detector: Detector,
}

impl LanguageDetector {
    pub fn new() -> Self {
        Self {
            detector: Detector::new(),
        }
    }

    /// 检测文本的源语言，总是返回合法的 2 字母代码
    pub fn detect(&self, text: &str) -> String {
        let normalized = text.trim().to_lowercase();

        if let Some(lang) = keyword_match(&normalized) {
            return lang.to_string();
        }

        match self.detector.detect(text) {
            Some(info) if info.confidence() >= CONFIDENCE_THRESHOLD => {
                map_lang_code(info.lang()).to_string()
            }
            Some(info) => {
                tracing::debug!(
                    lang = info.lang().code(),
                    confidence = info.confidence(),
                    "统计检测置信度过低，使用默认语言"
                );
                FALLBACK_LANG.to_string()
            }
            None => FALLBACK_LANG.to_string(),
        }
    }
}

impl Default for LanguageDetector {
    fn default() -> Self {
        Self::new()
    }
}

/// 关键词计分：取严格最高分的语言，平局按声明顺序
fn keyword_match(normalized: &str) -> Option<&'static str> {
    let mut best: Option<(&'static str, usize)> = None;

    for (lang, words) in KEYWORDS {
        let score = words.iter().filter(|w| normalized.contains(**w)).count();
        if score == 0 {
            continue;
        }
        match best {
            Some((_, best_score)) if score <= best_score => {}
            _ => best = Some((lang, score)),
        }
    }

    best.map(|(lang, _)| lang)
}

/// whatlang 的 3 字母代码 → 系统内部使用的 2 字母代码
///
/// 未映射的语言退回默认语言。
fn map_lang_code(lang: Lang) -> &'static str {
    match lang {
        Lang::Eng => "en",
        Lang::Fra => "fr",
        Lang::Spa => "es",
        Lang::Deu => "de",
        Lang::Ita => "it",
        Lang::Por => "pt",
        Lang::Rus => "ru",
        Lang::Ukr => "uk",
        Lang::Pol => "pl",
        Lang::Ces => "cs",
        Lang::Slk => "sk",
        Lang::Hun => "hu",
        Lang::Ron => "ro",
        Lang::Bul => "bg",
        Lang::Ell => "el",
        Lang::Nld => "nl",
        Lang::Swe => "sv",
        Lang::Dan => "da",
        Lang::Fin => "fi",
        Lang::Est => "et",
        Lang::Lav => "lv",
        Lang::Lit => "lt",
        Lang::Tur => "tr",
        Lang::Ara => "ar",
        Lang::Heb => "he",
        Lang::Pes => "fa",
        Lang::Hin => "hi",
        Lang::Ben => "bn",
        Lang::Urd => "ur",
        Lang::Tha => "th",
        Lang::Vie => "vi",
        Lang::Ind => "id",
        Lang::Cmn => "zh", // whatlang 用 Cmn 表示普通话
        Lang::Jpn => "ja",
        Lang::Kor => "ko",
        Lang::Afr => "af",
        Lang::Amh => "am",
        Lang::Aze => "az",
        Lang::Kat => "ka",
        Lang::Hye => "hy",
        Lang::Uzb => "uz",
        Lang::Mkd => "mk",
        Lang::Srp => "sr",
        Lang::Hrv => "hr",
        Lang::Slv => "sl",
        Lang::Bel => "be",
        Lang::Sin => "si",
        Lang::Mya => "my",
        Lang::Khm => "km",
        Lang::Nep => "ne",
        Lang::Tgl => "tl",
        _ => FALLBACK_LANG,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyword_tier_spanish() {
        let detector = LanguageDetector::new();
        assert_eq!(detector.detect("Hola, ¿cómo estás?"), "es");
    }

    #[test]
    fn test_keyword_tier_french() {
        let detector = LanguageDetector::new();
        assert_eq!(detector.detect("Bonjour"), "fr");
        assert_eq!(detector.detect("  BONJOUR  "), "fr");
    }

    #[test]
    fn test_keyword_tie_breaks_by_declaration_order() {
        let detector = LanguageDetector::new();
        // "ciao" (it) 与 "hola" (es) 各得一分，es 先声明
        assert_eq!(detector.detect("ciao hola"), "es");
    }

    #[test]
    fn test_statistical_tier() {
        let detector = LanguageDetector::new();
        // 无关键词命中，交给统计层
        let lang = detector.detect("Съешь же ещё этих мягких французских булок, да выпей чаю");
        assert_eq!(lang, "ru");
    }

    #[test]
    fn test_fallback_on_unusable_input() {
        let detector = LanguageDetector::new();
        assert_eq!(detector.detect("12345 67890"), FALLBACK_LANG);
    }

    #[test]
    fn test_detect_is_deterministic() {
        let detector = LanguageDetector::new();
        let first = detector.detect("guten tag zusammen");
        for _ in 0..10 {
            assert_eq!(detector.detect("guten tag zusammen"), first);
        }
        assert_eq!(first, "de");
    }
}
