pub mod token;

use crate::parser::error::{kind, Error};
use logos::{Lexer, Logos};
pub use token::{Token, TokenKind};

/// Returns an iterator over the token kinds produced by the tokenizer.
pub fn tokenize(input: &str) -> Lexer<TokenKind> {
    TokenKind::lexer(input)
}

/// Returns an owned array containing all of the tokens produced by the tokenizer.
///
/// Returns an [`kind::EmptyInput`] error if the input contains nothing but whitespace.
pub fn tokenize_complete(input: &str) -> Result<Box<[Token]>, Error> {
    if input.trim().is_empty() {
        return Err(Error::new(vec![0..input.len()], kind::EmptyInput));
    }

    let mut lexer = tokenize(input);
    let mut tokens = Vec::new();

    while let Some(result) = lexer.next() {
        // every character is matched by some token, so the lexer cannot actually fail; anything
        // it does not recognize is left for the registries to reject
        let kind = result.unwrap_or(TokenKind::Word);
        tokens.push(Token {
            span: lexer.span(),
            kind,
            lexeme: lexer.slice(),
        });
    }

    Ok(tokens.into_boxed_slice())
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Compares the tokens produced by the tokenizer to the raw expected tokens.
    fn compare_tokens<'source, const N: usize>(input: &'source str, expected: [(TokenKind, &'source str); N]) {
        let mut lexer = tokenize(input);

        for (expected_kind, expected_lexeme) in expected.into_iter() {
            assert_eq!(lexer.next(), Some(Ok(expected_kind)));
            assert_eq!(lexer.slice(), expected_lexeme);
        }

        assert_eq!(lexer.next(), None);
    }

    #[test]
    fn basic_expr() {
        compare_tokens(
            "1 + 2",
            [
                (TokenKind::Word, "1"),
                (TokenKind::Add, "+"),
                (TokenKind::Word, "2"),
            ],
        );
    }

    #[test]
    fn complex_expr() {
        compare_tokens(
            "sqrt(X^2+y2 )%  3.25/pi",
            [
                (TokenKind::Word, "sqrt"),
                (TokenKind::OpenParen, "("),
                (TokenKind::Word, "X"),
                (TokenKind::Exp, "^"),
                (TokenKind::Word, "2"),
                (TokenKind::Add, "+"),
                (TokenKind::Word, "y2"),
                (TokenKind::CloseParen, ")"),
                (TokenKind::Mod, "%"),
                (TokenKind::Word, "3.25"),
                (TokenKind::Div, "/"),
                (TokenKind::Word, "pi"),
            ],
        );
    }

    #[test]
    fn garbage_is_one_word() {
        compare_tokens(
            "a$b - 1e5",
            [
                (TokenKind::Word, "a$b"),
                (TokenKind::Sub, "-"),
                (TokenKind::Word, "1e5"),
            ],
        );
    }

    #[test]
    fn spans_and_normalization() {
        let tokens = tokenize_complete("  Sin (T)").unwrap();
        assert_eq!(tokens.len(), 4);
        assert_eq!(tokens[0].span, 2..5);
        assert_eq!(tokens[0].normalized(), "sin");
        assert_eq!(tokens[2].normalized(), "t");
        assert!(tokens[1].is_open_paren());
        assert!(tokens[3].is_close_paren());
    }

    #[test]
    fn empty_input() {
        for input in ["", "   ", "\t\n"] {
            let err = tokenize_complete(input).unwrap_err();
            assert!(err.is::<kind::EmptyInput>());
        }
    }
}
