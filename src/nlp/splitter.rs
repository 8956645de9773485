//! Sentence boundary splitting
//!
//! Splits on terminal punctuation, keeping the terminator with its sentence.
//! Runs of terminators (`？！`) and closing quotes or brackets that follow a
//! terminator (`。”`) stay attached to the sentence they end.

/// Default terminal punctuation
pub const DEFAULT_TERMINATORS: [char; 5] = ['。', '？', '!', '！', '?'];

/// Closing marks absorbed into the preceding sentence
const CLOSERS: [char; 9] = ['”', '’', '」', '』', '）', ')', '》', '"', '\''];

/// Splits a document into raw sentence strings
#[derive(Debug, Clone)]
pub struct SentenceSplitter {
    terminators: Vec<char>,
    keep_trailing: bool,
}

impl Default for SentenceSplitter {
    fn default() -> Self {
        Self {
            terminators: DEFAULT_TERMINATORS.to_vec(),
            keep_trailing: true,
        }
    }
}

impl SentenceSplitter {
    /// Create a splitter with the default terminators
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the terminator set
    pub fn with_terminators(mut self, terminators: &[char]) -> Self {
        self.terminators = terminators.to_vec();
        self
    }

    /// Whether text after the last terminator becomes a final sentence
    pub fn with_keep_trailing(mut self, keep: bool) -> Self {
        self.keep_trailing = keep;
        self
    }

    fn is_terminator(&self, c: char) -> bool {
        self.terminators.contains(&c)
    }

    /// Split `text` into trimmed, non-empty sentences in document order
    pub fn split(&self, text: &str) -> Vec<String> {
        let mut sentences = Vec::new();
        let mut start = 0;
        let mut chars = text.char_indices().peekable();

        while let Some((i, c)) = chars.next() {
            if !self.is_terminator(c) {
                continue;
            }

            let mut end = i + c.len_utf8();
            while let Some(&(j, next)) = chars.peek() {
                if self.is_terminator(next) || CLOSERS.contains(&next) {
                    end = j + next.len_utf8();
                    chars.next();
                } else {
                    break;
                }
            }

            push_trimmed(&mut sentences, &text[start..end]);
            start = end;
        }

        if self.keep_trailing && start < text.len() {
            push_trimmed(&mut sentences, &text[start..]);
        }

        sentences
    }
}

fn push_trimmed(out: &mut Vec<String>, segment: &str) {
    let trimmed = segment.trim();
    if !trimmed.is_empty() {
        out.push(trimmed.to_string());
    }
}
