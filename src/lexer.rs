//! Tokenizer for normalized expressions.
//!
//! At each position, after skipping whitespace, the scanner tries in order:
//! the biconditional `<->`, the implication `->`, a single structural or
//! operator character (`(`, `)`, `~`, `&`, `|`, `^`), a constant digit
//! (`0`, `1`) and an identifier run. If nothing matches, the remainder of the
//! input is reported in a [`ParseError::Lexical`].

use log::debug;

use crate::error::ParseError;
use crate::token::{is_ident_continue, is_ident_start, Token};

const SINGLE_CHAR_OPERATORS: [char; 4] = ['~', '&', '|', '^'];

pub fn tokenize(input: &str) -> Result<Vec<Token>, ParseError> {
    let mut tokens = Vec::new();
    let mut pos = 0;

    loop {
        let rest = &input[pos..];
        let trimmed = rest.trim_start();
        pos += rest.len() - trimmed.len();
        if trimmed.is_empty() {
            break;
        }

        let (token, len) = match_token(trimmed).ok_or_else(|| ParseError::Lexical {
            position: pos,
            remainder: trimmed.to_string(),
        })?;
        tokens.push(token);
        pos += len;
    }

    debug!("tokenize({:?}) = {:?}", input, tokens);
    Ok(tokens)
}

/// Matches one token at the start of `s`, returning it with its byte length.
fn match_token(s: &str) -> Option<(Token, usize)> {
    for long in ["<->", "->"] {
        if s.starts_with(long) {
            return Some((Token::Symbol(long.to_string()), long.len()));
        }
    }

    let c = s.chars().next()?;
    match c {
        '(' => Some((Token::LParen, 1)),
        ')' => Some((Token::RParen, 1)),
        '0' => Some((Token::Const(false), 1)),
        '1' => Some((Token::Const(true), 1)),
        c if SINGLE_CHAR_OPERATORS.contains(&c) => Some((Token::Symbol(c.to_string()), 1)),
        c if is_ident_start(c) => {
            let len = s.find(|c: char| !is_ident_continue(c)).unwrap_or(s.len());
            Some((Token::Ident(s[..len].to_string()), len))
        }
        _ => None,
    }
}
