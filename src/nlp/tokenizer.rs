//! Word segmentation
//!
//! Chinese text has no spaces between words, so sentences are segmented by a
//! [`Segmenter`] before stopword filtering. Two implementations are provided:
//!
//! - [`JiebaSegmenter`] (feature `jieba`, on by default): dictionary-based
//!   segmentation with `jieba-rs`
//! - [`UnicodeSegmenter`]: UAX #29 word bounds, with CJK runs split into
//!   single characters

use unicode_segmentation::UnicodeSegmentation;

/// Splits a sentence into word tokens
pub trait Segmenter: Send + Sync + std::fmt::Debug {
    /// Segment `text` into tokens in order.
    ///
    /// Tokens may include punctuation and whitespace; stopword filtering
    /// removes those downstream.
    fn segment(&self, text: &str) -> Vec<String>;
}

/// Check if a character is CJK
pub fn is_cjk(c: char) -> bool {
    matches!(c,
        '\u{4E00}'..='\u{9FFF}' |   // CJK Unified Ideographs
        '\u{3400}'..='\u{4DBF}' |   // CJK Extension A
        '\u{20000}'..='\u{2A6DF}' | // CJK Extension B
        '\u{2A700}'..='\u{2B73F}' | // CJK Extension C
        '\u{2B740}'..='\u{2B81F}' | // CJK Extension D
        '\u{F900}'..='\u{FAFF}' |   // CJK Compatibility
        '\u{3040}'..='\u{309F}' |   // Hiragana
        '\u{30A0}'..='\u{30FF}'     // Katakana
    )
}

/// UAX #29 word segmentation
#[derive(Debug, Clone)]
pub struct UnicodeSegmenter {
    /// Lowercase non-CJK words
    lowercase: bool,
}

impl Default for UnicodeSegmenter {
    fn default() -> Self {
        Self { lowercase: true }
    }
}

impl UnicodeSegmenter {
    /// Create a segmenter that lowercases Latin-script words
    pub fn new() -> Self {
        Self::default()
    }

    /// Set lowercasing
    pub fn with_lowercase(mut self, lowercase: bool) -> Self {
        self.lowercase = lowercase;
        self
    }

    fn normalize(&self, word: &str) -> String {
        if self.lowercase {
            word.to_lowercase()
        } else {
            word.to_string()
        }
    }
}

impl Segmenter for UnicodeSegmenter {
    fn segment(&self, text: &str) -> Vec<String> {
        let mut tokens = Vec::new();
        for word in text.unicode_words() {
            if word.chars().any(is_cjk) {
                // Without a dictionary each ideograph is its own term
                let mut rest = String::new();
                for c in word.chars() {
                    if is_cjk(c) {
                        if !rest.is_empty() {
                            tokens.push(self.normalize(&rest));
                            rest.clear();
                        }
                        tokens.push(c.to_string());
                    } else {
                        rest.push(c);
                    }
                }
                if !rest.is_empty() {
                    tokens.push(self.normalize(&rest));
                }
            } else {
                tokens.push(self.normalize(word));
            }
        }
        tokens
    }
}

#[cfg(feature = "jieba")]
mod jieba {
    use super::Segmenter;
    use jieba_rs::Jieba;
    use std::sync::OnceLock;

    /// Process-wide dictionary, loaded on first use
    static JIEBA: OnceLock<Jieba> = OnceLock::new();

    fn get_jieba() -> &'static Jieba {
        JIEBA.get_or_init(|| {
            tracing::debug!("loading jieba dictionary");
            Jieba::new()
        })
    }

    /// Dictionary-based Chinese segmentation backed by `jieba-rs`
    #[derive(Debug, Clone)]
    pub struct JiebaSegmenter {
        /// Use the HMM model for words missing from the dictionary
        hmm: bool,
    }

    impl Default for JiebaSegmenter {
        fn default() -> Self {
            Self { hmm: true }
        }
    }

    impl JiebaSegmenter {
        /// Create a segmenter with HMM enabled
        pub fn new() -> Self {
            Self::default()
        }

        /// Enable or disable HMM discovery of unknown words
        pub fn with_hmm(mut self, hmm: bool) -> Self {
            self.hmm = hmm;
            self
        }
    }

    impl Segmenter for JiebaSegmenter {
        fn segment(&self, text: &str) -> Vec<String> {
            get_jieba()
                .cut(text, self.hmm)
                .into_iter()
                .map(|word| word.trim())
                .filter(|word| !word.is_empty())
                .map(str::to_lowercase)
                .collect()
        }
    }
}

#[cfg(feature = "jieba")]
pub use jieba::JiebaSegmenter;

/// The segmenter used when none is configured
#[cfg(feature = "jieba")]
pub fn default_segmenter() -> Box<dyn Segmenter> {
    Box::new(JiebaSegmenter::new())
}

/// The segmenter used when none is configured (`jieba` feature disabled)
#[cfg(not(feature = "jieba"))]
pub fn default_segmenter() -> Box<dyn Segmenter> {
    Box::new(UnicodeSegmenter::new())
}
