/// Classification assigned to a token by the tokenizer that produced it.
///
/// The filter in this crate only distinguishes [`TokenType::Ideographic`]
/// from everything else; the remaining variants pass through untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenType {
    /// Letters, or letters mixed with digits.
    AlphaNumeric,
    /// Digits only.
    Numeric,
    /// A single Han character, or a word re-segmented from a run of them.
    Ideographic,
}

/// A span of analyzed text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// Raw UTF-8 bytes of the span.
    pub term: String,
    /// Byte offset of the span's first byte in the original input.
    pub start: usize,
    /// Byte offset one past the span's last byte in the original input.
    pub end: usize,
    /// 1-based position in emission order.
    pub position: usize,
    /// Classification of the span.
    pub token_type: TokenType,
}

impl Token {
    /// Creates a token.
    pub fn new(
        term: impl Into<String>,
        start: usize,
        end: usize,
        position: usize,
        token_type: TokenType,
    ) -> Self {
        Self {
            term: term.into(),
            start,
            end,
            position,
            token_type,
        }
    }
}

/// An ordered sequence of tokens.
///
/// Positions are contiguous ascending from 1 in every stream this crate
/// emits, regardless of how many tokens were merged or dropped on the way.
pub type TokenStream = Vec<Token>;

#[cfg(test)]
mod token_tests {
    use super::{Token, TokenType};

    #[test]
    fn new_fills_all_fields() {
        let token = Token::new("世界", 7, 13, 2, TokenType::Ideographic);
        assert_eq!(token.term, "世界");
        assert_eq!(token.start, 7);
        assert_eq!(token.end, 13);
        assert_eq!(token.position, 2);
        assert_eq!(token.token_type, TokenType::Ideographic);
    }
}
