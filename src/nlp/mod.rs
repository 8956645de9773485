//! Natural Language Processing components
//!
//! This module provides sentence splitting, word segmentation and stopword
//! filtering, combined by [`Preprocessor`].

pub mod preprocess;
pub mod splitter;
pub mod stopwords;
pub mod tokenizer;

pub use preprocess::Preprocessor;
pub use splitter::SentenceSplitter;
pub use stopwords::StopwordFilter;
#[cfg(feature = "jieba")]
pub use tokenizer::JiebaSegmenter;
pub use tokenizer::{Segmenter, UnicodeSegmenter};
