//! Stopword filtering
//!
//! This module provides stopword filtering with a built-in Chinese list,
//! the `stop-words` crate lists for other languages, and flat stopword files
//! (one word per line, UTF-8).

use crate::errors::{Result, SummaryError};
use rustc_hash::FxHashSet;
use std::path::Path;
use stop_words::{get, LANGUAGE};

/// A filter for removing stopwords from token sequences
#[derive(Debug, Clone)]
pub struct StopwordFilter {
    /// Set of stopwords (lowercase)
    stopwords: FxHashSet<String>,
    /// Whether the filter is case-sensitive
    case_sensitive: bool,
}

impl Default for StopwordFilter {
    fn default() -> Self {
        Self::new("zh")
    }
}

impl StopwordFilter {
    /// Create a new stopword filter for the given language
    ///
    /// Supported languages: zh, en, de, fr, es, it, pt, nl, ru, sv, no, da,
    /// fi, hu, tr, pl, ar
    pub fn new(language: &str) -> Self {
        let stopwords = Self::load_stopwords(language);
        Self {
            stopwords,
            case_sensitive: false,
        }
    }

    /// Create an empty stopword filter (no filtering)
    pub fn empty() -> Self {
        Self {
            stopwords: FxHashSet::default(),
            case_sensitive: false,
        }
    }

    /// Create a stopword filter from a custom list
    pub fn from_list(words: &[&str]) -> Self {
        let stopwords: FxHashSet<String> = words.iter().map(|w| w.to_lowercase()).collect();
        Self {
            stopwords,
            case_sensitive: false,
        }
    }

    /// Load a stopword file with one word per line.
    ///
    /// Lines are trimmed and blank lines skipped. A missing or non-UTF-8
    /// file is a [`SummaryError::Configuration`].
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .map_err(|err| SummaryError::configuration(path, err.to_string()))?;

        let stopwords: FxHashSet<String> = contents
            .trim_start_matches('\u{feff}')
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_lowercase)
            .collect();

        tracing::debug!(path = %path.display(), count = stopwords.len(), "loaded stopword file");

        Ok(Self {
            stopwords,
            case_sensitive: false,
        })
    }

    /// Set case sensitivity
    pub fn with_case_sensitive(mut self, case_sensitive: bool) -> Self {
        self.case_sensitive = case_sensitive;
        self
    }

    /// Add additional stopwords to the filter
    pub fn add_stopwords(&mut self, words: &[&str]) {
        for word in words {
            self.stopwords.insert(word.to_lowercase());
        }
    }

    /// Remove stopwords from the filter
    pub fn remove_stopwords(&mut self, words: &[&str]) {
        for word in words {
            self.stopwords.remove(&word.to_lowercase());
        }
    }

    /// Check if a word is a stopword
    pub fn is_stopword(&self, word: &str) -> bool {
        if self.case_sensitive {
            self.stopwords.contains(word)
        } else {
            self.stopwords.contains(&word.to_lowercase())
        }
    }

    /// Drop stopwords and tokens without any letter or digit (whitespace,
    /// punctuation), preserving order
    pub fn filter(&self, tokens: impl IntoIterator<Item = String>) -> Vec<String> {
        tokens
            .into_iter()
            .filter(|t| t.chars().any(char::is_alphanumeric))
            .filter(|t| !self.is_stopword(t))
            .collect()
    }

    /// Get the number of stopwords in the filter
    pub fn len(&self) -> usize {
        self.stopwords.len()
    }

    /// Check if the filter is empty
    pub fn is_empty(&self) -> bool {
        self.stopwords.is_empty()
    }

    /// Load stopwords for a language
    fn load_stopwords(language: &str) -> FxHashSet<String> {
        let lang = match language.to_lowercase().as_str() {
            "zh" | "chinese" => return Self::chinese_stopwords(),
            "en" | "english" => LANGUAGE::English,
            "de" | "german" => LANGUAGE::German,
            "fr" | "french" => LANGUAGE::French,
            "es" | "spanish" => LANGUAGE::Spanish,
            "it" | "italian" => LANGUAGE::Italian,
            "pt" | "portuguese" => LANGUAGE::Portuguese,
            "nl" | "dutch" => LANGUAGE::Dutch,
            "ru" | "russian" => LANGUAGE::Russian,
            "sv" | "swedish" => LANGUAGE::Swedish,
            "no" | "norwegian" => LANGUAGE::Norwegian,
            "da" | "danish" => LANGUAGE::Danish,
            "fi" | "finnish" => LANGUAGE::Finnish,
            "hu" | "hungarian" => LANGUAGE::Hungarian,
            "tr" | "turkish" => LANGUAGE::Turkish,
            "pl" | "polish" => LANGUAGE::Polish,
            "ar" | "arabic" => LANGUAGE::Arabic,
            _ => {
                // Default to Chinese for unknown languages
                return Self::chinese_stopwords();
            }
        };

        get(lang).iter().map(|s| s.to_string()).collect()
    }

    /// Common Chinese stopwords
    fn chinese_stopwords() -> FxHashSet<String> {
        [
            "的", "是", "在", "有", "和", "与", "或", "不", "了", "也", "就", "都", "而", "及",
            "这", "那", "个", "为", "以", "等", "但", "被", "给", "让", "把", "从", "到", "对",
            "将", "于", "能", "会", "可", "要", "很", "还", "更", "最", "只", "已", "又", "再",
            "着", "之", "其", "并", "且", "所", "则", "即", "地", "得", "我", "你", "他", "她",
            "它", "我们", "你们", "他们", "这个", "那个", "这些", "那些", "一个", "没有",
            "因为", "所以", "但是", "如果", "虽然", "而且", "并且", "或者", "以及", "对于",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_chinese_stopwords_default() {
        let filter = StopwordFilter::default();

        assert!(filter.is_stopword("的"));
        assert!(filter.is_stopword("是"));
        assert!(filter.is_stopword("我们"));
        assert!(!filter.is_stopword("人工智能"));
    }

    #[test]
    fn test_english_stopwords() {
        let filter = StopwordFilter::new("en");

        assert!(filter.is_stopword("the"));
        assert!(filter.is_stopword("The")); // case insensitive
        assert!(!filter.is_stopword("learning"));
    }

    #[test]
    fn test_custom_stopwords() {
        let mut filter = StopwordFilter::from_list(&["习近平", "指出"]);

        assert!(filter.is_stopword("习近平"));
        assert!(!filter.is_stopword("的"));

        filter.add_stopwords(&["强调"]);
        assert!(filter.is_stopword("强调"));

        filter.remove_stopwords(&["指出"]);
        assert!(!filter.is_stopword("指出"));
    }

    #[test]
    fn test_empty_filter() {
        let filter = StopwordFilter::empty();

        assert!(!filter.is_stopword("的"));
        assert!(filter.is_empty());
    }

    #[test]
    fn test_case_sensitivity() {
        let filter = StopwordFilter::from_list(&["ai"]).with_case_sensitive(true);

        assert!(filter.is_stopword("ai"));
        assert!(!filter.is_stopword("AI"));
    }

    #[test]
    fn test_filter_drops_stopwords_and_punctuation() {
        let filter = StopwordFilter::default();
        let tokens = ["人工智能", "是", "，", "战略性", " ", "技术", "。"]
            .iter()
            .map(|s| s.to_string());

        assert_eq!(filter.filter(tokens), vec!["人工智能", "战略性", "技术"]);
    }

    #[test]
    fn test_from_file() {
        let path = std::env::temp_dir().join(format!(
            "rapid_summary_stopwords_{}.txt",
            std::process::id()
        ));
        {
            let mut file = std::fs::File::create(&path).unwrap();
            writeln!(file, "\u{feff}的").unwrap();
            writeln!(file, "  了  ").unwrap();
            writeln!(file).unwrap();
            writeln!(file, "我们").unwrap();
        }

        let filter = StopwordFilter::from_file(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(filter.len(), 3);
        assert!(filter.is_stopword("的"));
        assert!(filter.is_stopword("了"));
        assert!(filter.is_stopword("我们"));
        assert!(!filter.is_stopword(""));
    }

    #[test]
    fn test_from_missing_file_is_configuration_error() {
        let err =
            StopwordFilter::from_file("/nonexistent/rapid_summary/stopwords.txt").unwrap_err();
        assert!(matches!(err, SummaryError::Configuration { .. }));
    }
}
