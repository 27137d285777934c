//! Encapsulates all behaviour necessary to scan MiGo source text.
//!
//! The [Scanner] is pull-based: every call to [`Scanner::next_token`] consumes just
//! enough characters to produce exactly one [Token]. It never needs to look more
//! than a single character ahead, so the underlying character source only has
//! to support one character of pushback.
//!
//! ```rust
//! use rust_migo::migo::token::scanner::tokenize;
//!
//! let tokens = tokenize("spawn worker(ch); -- start a worker\n").unwrap();
//! assert_eq!(tokens.len(), 7);
//! ```

use core::iter::Fuse;
use core::str::Chars;

use log::{debug, trace};
use thiserror::Error;

use crate::migo::token::tokens::{Token, TokenType, KEYWORDS};
use crate::migo::types::{Identifier, Location, Position, Span};

/// Errors that can happen during scanning.
///
/// The [Scanner] itself never fails; it reports these as [`TokenType::Illegal`]
/// tokens and leaves the decision to its consumer. [tokenize] collects them.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum LexingError {
    /// A character that starts no token of the language.
    #[error("illegal character at {0}")]
    IllegalCharacter(Span),
}

/// A character source that can take back the character it handed out last.
struct Pushback<I: Iterator<Item = char>> {
    /// Remaining characters. Fused, so that end of input stays end of input.
    chars: Fuse<I>,
    /// The character most recently handed out.
    last: Option<char>,
    /// Whether `last` has been put back and is to be handed out again.
    pushed_back: bool,
}

impl<I: Iterator<Item = char>> Pushback<I> {
    /// Wraps the given characters.
    fn new(chars: I) -> Self {
        Pushback {
            chars: chars.fuse(),
            last: None,
            pushed_back: false,
        }
    }

    /// The next character, or [None] at end of input.
    fn read(&mut self) -> Option<char> {
        if self.pushed_back {
            self.pushed_back = false;
        } else {
            self.last = self.chars.next();
        }
        self.last
    }

    /// Puts the most recently read character back.
    fn unread(&mut self) {
        debug_assert!(
            !self.pushed_back && self.last.is_some(),
            "only a single, successfully read character can be pushed back"
        );
        self.pushed_back = true;
    }
}

/// Turns a stream of characters into a stream of [Tokens](Token).
///
/// The scanner owns its character source and exactly one [Position]. Once the
/// source is exhausted, every further call to [`next_token`](Scanner::next_token) returns
/// an [`EndOfInput`](TokenType::EndOfInput) token with an empty span.
///
/// As an [Iterator], the scanner yields every token up to, but excluding, the
/// end of input.
pub struct Scanner<I: Iterator<Item = char>> {
    /// Where the characters come from.
    source: Pushback<I>,
    /// Where the scanner is in the source.
    position: Position,
}

impl<'src> Scanner<Chars<'src>> {
    /// A scanner over the characters of an in-memory source text.
    #[must_use]
    #[inline]
    pub fn for_source(source: &'src str) -> Self {
        Scanner::new(source.chars())
    }
}

impl<I: Iterator<Item = char>> Scanner<I> {
    /// A scanner over an arbitrary character source, positioned at line 1, column 0.
    #[must_use]
    #[inline]
    pub fn new(chars: I) -> Self {
        Scanner {
            source: Pushback::new(chars),
            position: Position::new(),
        }
    }

    /// The position of the next character to be read.
    #[must_use]
    #[inline]
    pub fn location(&self) -> Location {
        self.position.snapshot()
    }

    /// Scans the next token.
    ///
    /// Whitespace and comments in front of the token are skipped. Characters that
    /// start no token become [`Illegal`](TokenType::Illegal) tokens; scanning can
    /// simply continue after them.
    #[inline]
    pub fn next_token(&mut self) -> Token {
        let token = loop {
            self.skip_whitespace();

            let start = self.position.snapshot();
            let Some(char) = self.read() else {
                break self.emit(TokenType::EndOfInput, start);
            };

            if is_identifier(char) {
                break self.scan_identifier(char, start);
            }

            let token_type = match char {
                ':' => TokenType::Colon,
                ';' => TokenType::Semicolon,
                ',' => TokenType::Comma,
                '(' => TokenType::LeftParen,
                ')' => TokenType::RightParen,
                '=' => TokenType::Equals,
                '-' if self.next_is('-') => {
                    self.skip_comment(start);
                    continue;
                }
                illegal => {
                    debug!("illegal character {illegal:?} at {start}");
                    TokenType::Illegal
                }
            };
            break self.emit(token_type, start);
        };
        trace!("scanned {token}");
        token
    }

    /// Finishes a token that started at `start` and ends here.
    fn emit(&self, token_type: TokenType, start: Location) -> Token {
        Token {
            token_type,
            span: Span::from(start, self.position.snapshot()),
        }
    }

    /// Scans a run of identifier characters starting with `first` and classifies it:
    /// keywords first, then integers, and identifiers for everything else.
    fn scan_identifier(&mut self, first: char, start: Location) -> Token {
        let mut text = String::from(first);
        while let Some(char) = self.read_if(is_identifier) {
            text.push(char);
        }

        let token_type = if let Some(&kw) = KEYWORDS.get(text.as_str()) {
            TokenType::Keyword(kw)
        } else if let Ok(num) = text.parse::<i64>() {
            TokenType::Number(num)
        } else {
            TokenType::Identifier(Identifier(text))
        };
        self.emit(token_type, start)
    }

    /// Discards the rest of a comment whose `--` has already been read,
    /// up to and including the line break.
    fn skip_comment(&mut self, start: Location) {
        while self.read().is_some_and(|char| char != '\n') {
            // do nothing...
        }
        debug!("skipped comment from {start} to {}", self.position);
    }

    /// Discards consecutive whitespace.
    fn skip_whitespace(&mut self) {
        while self.read_if(is_whitespace).is_some() {
            // do nothing...
        }
    }

    /// Reads the next character, keeping the position up to date.
    fn read(&mut self) -> Option<char> {
        let char = self.source.read()?;
        self.position.advance(char);
        Some(char)
    }

    /// Puts the most recently read character back, reversing its position update.
    fn unread(&mut self) {
        self.source.unread();
        self.position.retreat();
    }

    /// Reads the next character only if it matches the predicate.
    fn read_if<F: Fn(char) -> bool>(&mut self, test: F) -> Option<char> {
        let char = self.read()?;
        if test(char) {
            Some(char)
        } else {
            self.unread();
            None
        }
    }

    /// Reads the next character only if it is exactly the expected one.
    fn next_is(&mut self, expected: char) -> bool {
        self.read_if(|char| char == expected).is_some()
    }
}

impl<I: Iterator<Item = char>> Iterator for Scanner<I> {
    type Item = Token;

    #[inline]
    fn next(&mut self) -> Option<Token> {
        let token = self.next_token();
        (!token.is_end()).then_some(token)
    }
}

/// Scans the given source code of MiGo into either a [Vec] of [`Tokens`](Token),
/// ending with the [`EndOfInput`](TokenType::EndOfInput) token, or returns all
/// [`LexingErrors`](LexingError) if any did occur.
/// Thus, you cannot proceed with the list of tokens if scanning had any errors.
///
/// # Errors
///
/// One [`LexingError::IllegalCharacter`] per illegal token in the source.
#[inline]
pub fn tokenize<S: AsRef<str>>(source: S) -> Result<Vec<Token>, Vec<LexingError>> {
    let mut scanner = Scanner::for_source(source.as_ref());

    let mut errs: Vec<LexingError> = vec![];
    let mut tokens: Vec<Token> = vec![];
    loop {
        let token = scanner.next_token();
        match token.token_type {
            TokenType::EndOfInput => {
                tokens.push(token);
                break;
            }
            TokenType::Illegal => errs.push(LexingError::IllegalCharacter(token.span)),
            TokenType::Colon
            | TokenType::Semicolon
            | TokenType::Comma
            | TokenType::LeftParen
            | TokenType::RightParen
            | TokenType::Equals
            | TokenType::Keyword(_)
            | TokenType::Identifier(_)
            | TokenType::Number(_) => tokens.push(token),
        }
    }

    if errs.is_empty() {
        Ok(tokens)
    } else {
        Err(errs)
    }
}

/// Can the character appear in a name, number or keyword?
#[inline]
fn is_identifier(char: char) -> bool {
    char.is_ascii_alphanumeric() || matches!(char, '_' | '.' | '#' | '/')
}

/// Does the character separate tokens?
#[inline]
fn is_whitespace(char: char) -> bool {
    matches!(char, ' ' | '\t' | '\n' | '\r')
}
