//! Infix to postfix conversion (shunting-yard).

use std::fmt::{Display, Formatter};

use log::debug;

use crate::error::ParseError;
use crate::operator::Operator;
use crate::token::Token;

/// An element of a postfix sequence.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub enum Item {
    Var(String),
    Const(bool),
    Op(Operator),
}

impl Display for Item {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Item::Var(name) => write!(f, "{}", name),
            Item::Const(value) => write!(f, "{}", *value as u8),
            Item::Op(op) => write!(f, "{}", op),
        }
    }
}

/// Expression in Reverse Polish order. Contains no parentheses.
#[derive(Debug, Clone, Default, Eq, PartialEq, Hash)]
pub struct Postfix {
    items: Vec<Item>,
}

impl Postfix {
    pub fn new(items: Vec<Item>) -> Self {
        Self { items }
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Spellings of all items, in order.
    pub fn to_strings(&self) -> Vec<String> {
        self.items.iter().map(|item| item.to_string()).collect()
    }
}

impl Display for Postfix {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for (i, item) in self.items.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", item)?;
        }
        Ok(())
    }
}

enum Pending {
    Op(Operator),
    /// Open parenthesis with its index in the token sequence.
    Open(usize),
}

pub fn to_postfix(tokens: &[Token]) -> Result<Postfix, ParseError> {
    let mut output = Vec::with_capacity(tokens.len());
    let mut stack: Vec<Pending> = Vec::new();

    for (position, token) in tokens.iter().enumerate() {
        match token {
            Token::Ident(name) => output.push(Item::Var(name.clone())),
            Token::Const(value) => output.push(Item::Const(*value)),
            Token::LParen => stack.push(Pending::Open(position)),
            Token::RParen => loop {
                match stack.pop() {
                    Some(Pending::Op(op)) => output.push(Item::Op(op)),
                    Some(Pending::Open(_)) => break,
                    None => return Err(ParseError::UnbalancedParen { position }),
                }
            },
            Token::Symbol(symbol) => {
                let o1 = Operator::from_symbol(symbol).ok_or_else(|| ParseError::UnknownOperator(symbol.clone()))?;
                while let Some(&Pending::Op(o2)) = stack.last() {
                    if !o1.yields_to(o2) {
                        break;
                    }
                    output.push(Item::Op(o2));
                    stack.pop();
                }
                stack.push(Pending::Op(o1));
            }
        }
    }

    while let Some(pending) = stack.pop() {
        match pending {
            Pending::Op(op) => output.push(Item::Op(op)),
            Pending::Open(position) => return Err(ParseError::UnbalancedParen { position }),
        }
    }

    let postfix = Postfix::new(output);
    debug!("to_postfix = [{}]", postfix);
    Ok(postfix)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::tokenize;

    fn rpn(input: &str) -> Vec<String> {
        to_postfix(&tokenize(input).unwrap()).unwrap().to_strings()
    }

    #[test]
    fn test_precedence() {
        assert_eq!(rpn("A & B | C"), vec!["A", "B", "&", "C", "|"]);
        assert_eq!(rpn("A | B & C"), vec!["A", "B", "C", "&", "|"]);
        assert_eq!(rpn("A ^ B & C | D"), vec!["A", "B", "C", "&", "^", "D", "|"]);
    }

    #[test]
    fn test_left_associative() {
        assert_eq!(rpn("A | B | C"), vec!["A", "B", "|", "C", "|"]);
        assert_eq!(rpn("A <-> B <-> C"), vec!["A", "B", "<->", "C", "<->"]);
    }

    #[test]
    fn test_right_associative() {
        assert_eq!(rpn("A -> B -> C"), vec!["A", "B", "C", "->", "->"]);
        assert_eq!(rpn("~~A"), vec!["A", "~", "~"]);
    }

    #[test]
    fn test_negation_binds_tightest() {
        assert_eq!(rpn("~A & B"), vec!["A", "~", "B", "&"]);
        assert_eq!(rpn("A & ~B"), vec!["A", "B", "~", "&"]);
        assert_eq!(rpn("~(A & B)"), vec!["A", "B", "&", "~"]);
    }

    #[test]
    fn test_parentheses() {
        assert_eq!(rpn("p -> (q & r)"), vec!["p", "q", "r", "&", "->"]);
        assert_eq!(rpn("(p -> q) & r"), vec!["p", "q", "->", "r", "&"]);
        assert_eq!(rpn("((p))"), vec!["p"]);
    }

    #[test]
    fn test_constants() {
        assert_eq!(rpn("1 -> 0"), vec!["1", "0", "->"]);
    }

    #[test]
    fn test_unclosed_paren() {
        let err = to_postfix(&tokenize("(A").unwrap()).unwrap_err();
        assert_eq!(err, ParseError::UnbalancedParen { position: 0 });
    }

    #[test]
    fn test_unopened_paren() {
        let err = to_postfix(&tokenize(")").unwrap()).unwrap_err();
        assert_eq!(err, ParseError::UnbalancedParen { position: 0 });
        let err = to_postfix(&tokenize("A & B)").unwrap()).unwrap_err();
        assert_eq!(err, ParseError::UnbalancedParen { position: 3 });
    }

    #[test]
    fn test_unknown_operator() {
        let tokens = vec![
            Token::Ident("A".to_string()),
            Token::Symbol("=>".to_string()),
            Token::Ident("B".to_string()),
        ];
        let err = to_postfix(&tokens).unwrap_err();
        assert_eq!(err, ParseError::UnknownOperator("=>".to_string()));
    }

    #[test]
    fn test_display() {
        let postfix = to_postfix(&tokenize("~p | q").unwrap()).unwrap();
        assert_eq!(postfix.to_string(), "p ~ q |");
    }
}
