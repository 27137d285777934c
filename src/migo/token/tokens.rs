//! Data types representing tokens available in the MiGo language.
use core::fmt::{Display, Formatter};
use std::collections::HashMap;
use std::sync::LazyLock;

use crate::migo::types::{Identifier, Span};
use crate::migo::util::map;

/// Keywords in the MiGo language.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[expect(
    clippy::exhaustive_enums,
    reason = "the grammar matches on every keyword, adding one is a breaking change."
)]
pub enum Keyword {
    // Definitions
    /// `"def"`
    Def,
    /// `"call"`
    Call,
    /// `"spawn"`
    Spawn,
    /// `"let"`
    Let,

    // Channels
    /// `"newchan"`
    Newchan,
    /// `"close"`
    Close,
    /// `"send"`
    Send,
    /// `"recv"`
    Recv,

    // Choice
    /// `"select"`
    Select,
    /// `"case"`
    Case,
    /// `"endselect"`
    Endselect,
    /// `"tau"`
    Tau,

    // Control flow
    /// `"if"`
    If,
    /// `"else"`
    Else,
    /// `"endif"`
    Endif,
}

impl Keyword {
    /// Extract the raw representation as it occurs in the source code.
    #[must_use]
    #[inline]
    pub fn to_raw(self) -> &'static str {
        match self {
            Keyword::Def => "def",
            Keyword::Call => "call",
            Keyword::Spawn => "spawn",
            Keyword::Let => "let",
            Keyword::Newchan => "newchan",
            Keyword::Close => "close",
            Keyword::Send => "send",
            Keyword::Recv => "recv",
            Keyword::Select => "select",
            Keyword::Case => "case",
            Keyword::Endselect => "endselect",
            Keyword::Tau => "tau",
            Keyword::If => "if",
            Keyword::Else => "else",
            Keyword::Endif => "endif",
        }
    }

    /// The class name the grammar uses for this keyword.
    #[must_use]
    #[inline]
    pub fn name(self) -> &'static str {
        match self {
            Keyword::Def => "DEF",
            Keyword::Call => "CALL",
            Keyword::Spawn => "SPAWN",
            Keyword::Let => "LET",
            Keyword::Newchan => "NEWCHAN",
            Keyword::Close => "CLOSE",
            Keyword::Send => "SEND",
            Keyword::Recv => "RECV",
            Keyword::Select => "SELECT",
            Keyword::Case => "CASE",
            Keyword::Endselect => "ENDSELECT",
            Keyword::Tau => "TAU",
            Keyword::If => "IF",
            Keyword::Else => "ELSE",
            Keyword::Endif => "ENDIF",
        }
    }
}

/// Lookup table for keywords to distinguish them from identifiers and numbers.
pub static KEYWORDS: LazyLock<HashMap<&'static str, Keyword>> = LazyLock::new(|| {
    map! {
        "def"       => Keyword::Def,
        "call"      => Keyword::Call,
        "spawn"     => Keyword::Spawn,
        "let"       => Keyword::Let,

        "newchan"   => Keyword::Newchan,
        "close"     => Keyword::Close,
        "send"      => Keyword::Send,
        "recv"      => Keyword::Recv,

        "select"    => Keyword::Select,
        "case"      => Keyword::Case,
        "endselect" => Keyword::Endselect,
        "tau"       => Keyword::Tau,

        "if"        => Keyword::If,
        "else"      => Keyword::Else,
        "endif"     => Keyword::Endif,
    }
});

/// The lexical class of a token, together with whatever payload that class carries.
///
/// The default is [`EndOfInput`](TokenType::EndOfInput), the class a scanner keeps
/// producing once the source is exhausted.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[expect(
    clippy::exhaustive_enums,
    reason = "adding a new variant MUST be handled and is a breaking change."
)]
pub enum TokenType {
    // Punctuation
    /// `":"`
    Colon,
    /// `";"`
    Semicolon,
    /// `","`
    Comma,
    /// `"("`
    LeftParen,
    /// `")"`
    RightParen,
    /// `"="`
    Equals,

    /// A reserved word.
    Keyword(Keyword),
    /// A process, channel or variable name.
    Identifier(Identifier),
    /// A base-10 integer literal.
    Number(i64),

    /// A character that starts no known token.
    Illegal,
    /// End of Input. Carries an empty span.
    #[default]
    EndOfInput,
}

impl TokenType {
    /// The upper-case class name the grammar knows this token by.
    #[must_use]
    #[inline]
    pub fn name(&self) -> &'static str {
        match *self {
            TokenType::Colon => "COLON",
            TokenType::Semicolon => "SEMICOLON",
            TokenType::Comma => "COMMA",
            TokenType::LeftParen => "LPAREN",
            TokenType::RightParen => "RPAREN",
            TokenType::Equals => "EQ",
            TokenType::Keyword(kw) => kw.name(),
            TokenType::Identifier(_) => "IDENT",
            TokenType::Number(_) => "DIGITS",
            TokenType::Illegal => "ILLEGAL",
            TokenType::EndOfInput => "EOF",
        }
    }

    /// Extract the raw representation as it occurs in the source code.
    /// Illegal tokens do not remember their character, so they render as `"?"`;
    /// the scanner logs the rejected character at `debug` level instead.
    #[must_use]
    #[inline]
    pub fn to_raw(&self) -> String {
        match *self {
            TokenType::Colon => ":".to_owned(),
            TokenType::Semicolon => ";".to_owned(),
            TokenType::Comma => ",".to_owned(),
            TokenType::LeftParen => "(".to_owned(),
            TokenType::RightParen => ")".to_owned(),
            TokenType::Equals => "=".to_owned(),
            TokenType::Keyword(kw) => kw.to_raw().to_owned(),
            TokenType::Identifier(ref id) => id.as_str().to_owned(),
            TokenType::Number(num) => num.to_string(),
            TokenType::Illegal => "?".to_owned(),
            TokenType::EndOfInput => String::new(),
        }
    }
}

/// A thin wrapper that bundles the token type with a source span.
#[derive(Clone, Debug, PartialEq, Eq)]
#[expect(clippy::exhaustive_structs, reason = "a token is its class and its span.")]
pub struct Token {
    /// Type of this token.
    pub token_type: TokenType,
    /// Span the token takes up in source code.
    pub span: Span,
}

impl Token {
    /// Whether this is the terminal token of the stream.
    #[must_use]
    #[inline]
    pub fn is_end(&self) -> bool {
        self.token_type == TokenType::EndOfInput
    }
}

/// Renders as `<raw @ span>`, see [`TokenType::to_raw`].
impl Display for Token {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        write!(f, "<{} @ {}>", self.token_type.to_raw(), self.span)
    }
}

#[cfg(test)]
mod test {
    use super::{Keyword, KEYWORDS, Token, TokenType};
    use crate::migo::types::{Location, Span};

    #[test]
    fn keyword_table_round_trips_raw_text() {
        assert_eq!(KEYWORDS.len(), 15);
        for (&raw, &kw) in KEYWORDS.iter() {
            assert_eq!(kw.to_raw(), raw);
            assert_eq!(kw.name(), raw.to_uppercase());
        }
    }

    #[test]
    fn end_of_input_is_the_default_class() {
        assert_eq!(TokenType::default(), TokenType::EndOfInput);
        assert_eq!(TokenType::default().name(), "EOF");
    }

    #[test]
    fn class_names() {
        assert_eq!(TokenType::Keyword(Keyword::Endselect).name(), "ENDSELECT");
        assert_eq!(TokenType::Number(42).name(), "DIGITS");
        assert_eq!(TokenType::Number(42).to_raw(), "42");
        assert_eq!(TokenType::LeftParen.name(), "LPAREN");
    }

    #[test]
    fn illegal_tokens_display_without_their_character() {
        let token = Token {
            token_type: TokenType::Illegal,
            span: Span::from(Location { line: 1, col: 0 }, Location { line: 1, col: 1 }),
        };
        assert_eq!(token.to_string(), "<? @ 1:0-1:1>");
    }
}
