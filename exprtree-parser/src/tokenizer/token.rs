use logos::Logos;
use std::ops::Range;

/// The different kinds of tokens that can be produced by the tokenizer.
///
/// Only the single-character operator symbols and brackets are recognized here. Every other
/// maximal run of non-whitespace characters (identifiers, numeric literals, and anything the
/// registries will later reject) is a single [`TokenKind::Word`].
#[derive(Logos, Clone, Copy, Debug, PartialEq, Eq)]
#[logos(skip r"[ \t\r\n\f]+")]
pub enum TokenKind {
    #[token("+")]
    Add,

    #[token("-")]
    Sub,

    #[token("*")]
    Mul,

    #[token("/")]
    Div,

    #[token("%")]
    Mod,

    #[token("^")]
    Exp,

    #[token("(")]
    OpenParen,

    #[token(")")]
    CloseParen,

    #[regex(r"[^ \t\r\n\f+\-*/%^()]+")]
    Word,
}

/// A token produced by the tokenizer.
#[derive(Debug, Clone, PartialEq)]
pub struct Token<'source> {
    /// The region of the source code that this token originated from.
    pub span: Range<usize>,

    /// The kind of token.
    pub kind: TokenKind,

    /// The raw lexeme that was parsed into this token.
    pub lexeme: &'source str,
}

impl Token<'_> {
    /// Returns the case-normalized text of the token, which is what the registries and the symbol
    /// table are matched against.
    pub fn normalized(&self) -> String {
        self.lexeme.to_lowercase()
    }

    /// Returns true if the token is an opening parenthesis.
    pub fn is_open_paren(&self) -> bool {
        self.kind == TokenKind::OpenParen
    }

    /// Returns true if the token is a closing parenthesis.
    pub fn is_close_paren(&self) -> bool {
        self.kind == TokenKind::CloseParen
    }
}
