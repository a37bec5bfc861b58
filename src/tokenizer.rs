use unicode_segmentation::UnicodeSegmentation;

use crate::token::{Token, TokenStream, TokenType};

/// Tokenizer that splits text on Unicode word boundaries.
///
/// Han ideographs come out one character per token and typed
/// [`TokenType::Ideographic`], which is the shape
/// [`JiebaFilter`](crate::JiebaFilter) expects on its input. Segments with
/// no alphanumeric character (whitespace, punctuation) are dropped.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnicodeTokenizer;

impl UnicodeTokenizer {
    /// Creates a tokenizer.
    pub fn new() -> Self {
        UnicodeTokenizer
    }

    /// Tokenizes `text` into a stream with 1-based positions and byte
    /// offsets.
    pub fn tokenize(&self, text: &str) -> TokenStream {
        let mut tokens = Vec::new();
        for (start, word) in text.split_word_bound_indices() {
            if !word.chars().any(char::is_alphanumeric) {
                continue;
            }
            let position = tokens.len() + 1;
            tokens.push(Token::new(
                word,
                start,
                start + word.len(),
                position,
                classify(word),
            ));
        }
        tokens
    }
}

fn classify(word: &str) -> TokenType {
    if word.chars().next().is_some_and(is_han) {
        TokenType::Ideographic
    } else if word.chars().all(|c| c.is_ascii_digit()) {
        TokenType::Numeric
    } else {
        TokenType::AlphaNumeric
    }
}

fn is_han(c: char) -> bool {
    matches!(
        u32::from(c),
        0x4E00..=0x9FFF     // CJK Unified Ideographs
        | 0x3400..=0x4DBF   // Extension A
        | 0x20000..=0x2A6DF // Extension B
        | 0xF900..=0xFAFF   // Compatibility Ideographs
    )
}
