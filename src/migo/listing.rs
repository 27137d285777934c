//! Renders tokens for people looking at a token stream, such as the `tokenize` command.
use crate::migo::token::tokens::{Token, TokenType};

/// One line per token: span, class name and, for tokens that carry one, their payload,
/// separated by tabs.
pub trait TokenListing {
    /// Formats this token as a single listing line.
    fn listing(&self) -> String;
}

impl TokenListing for Token {
    #[inline]
    fn listing(&self) -> String {
        let Token {
            ref token_type,
            span,
        } = *self;

        match *token_type {
            TokenType::Identifier(ref id) => format!("{span}\t{}\t{}", token_type.name(), id.as_str()),
            TokenType::Number(num) => format!("{span}\t{}\t{num}", token_type.name()),
            TokenType::Colon
            | TokenType::Semicolon
            | TokenType::Comma
            | TokenType::LeftParen
            | TokenType::RightParen
            | TokenType::Equals
            | TokenType::Keyword(_)
            | TokenType::Illegal
            | TokenType::EndOfInput => format!("{span}\t{}", token_type.name()),
        }
    }
}

#[cfg(test)]
mod test {
    use super::TokenListing;
    use crate::migo::token::scanner::Scanner;

    #[test]
    fn listing_lines() {
        let mut scanner = Scanner::for_source("send ch 42\n");
        let lines: Vec<String> = (0..4).map(|_| scanner.next_token().listing()).collect();
        assert_eq!(
            lines,
            vec!["1:0-1:4\tSEND", "1:5-1:7\tIDENT\tch", "1:8-1:10\tDIGITS\t42", "2:0\tEOF"]
        );
    }
}
