//! # rapid_summary
//!
//! Extractive summarization for Chinese text.
//!
//! This library selects a subset of a document's sentences using one of two
//! unsupervised algorithms: Maximal Marginal Relevance (MMR) reranking, or
//! TextRank (PageRank over a sentence-similarity graph).
//!
//! ## Features
//!
//! - **Two algorithms**: [`MmrSummarizer`] and [`TextRankSummarizer`] behind
//!   the shared [`Summarize`] trait
//! - **Pluggable preprocessing**: sentence splitting, jieba or Unicode word
//!   segmentation, and stopword lists
//! - **Reusable PageRank**: the power-iteration solver also ranks explicit
//!   link graphs via [`rank_links`]
//!
//! ```no_run
//! use rapid_summary::{MmrSummarizer, Summarize, SummaryConfig};
//!
//! let summarizer = MmrSummarizer::new(SummaryConfig::default().with_ratio(0.3));
//! let summary = summarizer.summarize("第一句话。第二句话！第三句话？")?;
//! println!("{}", summary.text);
//! # Ok::<(), rapid_summary::SummaryError>(())
//! ```

pub mod errors;
pub mod graph;
pub mod nlp;
pub mod pagerank;
pub mod similarity;
pub mod summarizer;
pub mod types;

// Re-export commonly used types
pub use errors::{Result, SummaryError};
pub use types::{RedundancyMode, Sentence, SummaryConfig, TargetRounding, TermWeighting};

// Re-export main functionality
pub use graph::{LinkGraph, TransitionMatrix};
#[cfg(feature = "jieba")]
pub use nlp::JiebaSegmenter;
pub use nlp::{Preprocessor, Segmenter, SentenceSplitter, StopwordFilter, UnicodeSegmenter};
pub use pagerank::{rank_links, PageRankResult, StandardPageRank};
pub use similarity::{document_similarity, sentence_similarity, SentenceIndex};
pub use summarizer::{
    MmrSelector, MmrSummarizer, Summarize, Summary, SummarySentence, SummarySet,
    TextRankSummarizer,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
