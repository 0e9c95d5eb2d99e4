use std::fmt::{Display, Formatter};

/// An atomic piece of a normalized expression.
///
/// Operator symbols are kept as spelled in the input; the parser resolves them
/// against the [descriptor table][crate::operator::DESCRIPTORS].
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub enum Token {
    /// Variable name, `[A-Za-z_][A-Za-z0-9_]*`.
    Ident(String),
    /// Constant `0` or `1`.
    Const(bool),
    /// Operator spelling, e.g. `&` or `<->`.
    Symbol(String),
    LParen,
    RParen,
}

impl Token {
    pub fn as_str(&self) -> &str {
        match self {
            Token::Ident(name) => name.as_str(),
            Token::Const(true) => "1",
            Token::Const(false) => "0",
            Token::Symbol(symbol) => symbol.as_str(),
            Token::LParen => "(",
            Token::RParen => ")",
        }
    }
}

impl Display for Token {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

pub fn is_ident_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

pub fn is_ident_continue(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Spells a token sequence with single spaces between tokens.
pub fn join(tokens: &[Token]) -> String {
    tokens.iter().map(Token::as_str).collect::<Vec<_>>().join(" ")
}

/// Collects the distinct variable names of a token sequence, sorted by name.
pub fn variables(tokens: &[Token]) -> Vec<String> {
    let mut vars: Vec<String> = tokens
        .iter()
        .filter_map(|t| match t {
            Token::Ident(name) => Some(name.clone()),
            _ => None,
        })
        .collect();
    vars.sort();
    vars.dedup();
    vars
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_as_str() {
        assert_eq!(Token::Ident("p".to_string()).as_str(), "p");
        assert_eq!(Token::Const(true).as_str(), "1");
        assert_eq!(Token::Symbol("<->".to_string()).to_string(), "<->");
        assert_eq!(Token::LParen.to_string(), "(");
    }

    #[test]
    fn test_variables_sorted_and_distinct() {
        let tokens = vec![
            Token::Ident("q".to_string()),
            Token::Symbol("&".to_string()),
            Token::Ident("p".to_string()),
            Token::Symbol("|".to_string()),
            Token::Ident("q".to_string()),
            Token::Symbol("&".to_string()),
            Token::Const(true),
        ];
        assert_eq!(variables(&tokens), vec!["p", "q"]);
    }

    #[test]
    fn test_join() {
        let tokens = vec![
            Token::Symbol("~".to_string()),
            Token::LParen,
            Token::Ident("p".to_string()),
            Token::Symbol("<->".to_string()),
            Token::Const(false),
            Token::RParen,
        ];
        assert_eq!(join(&tokens), "~ ( p <-> 0 )");
        assert_eq!(join(&[]), "");
    }
}
