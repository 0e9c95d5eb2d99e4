//! Logical operators and their static descriptor table.
//!
//! | Operator | Symbol | Precedence | Associativity | Arity |
//! |----------|--------|------------|---------------|-------|
//! | NOT      | `~`    | 5          | right         | 1     |
//! | AND      | `&`    | 4          | left          | 2     |
//! | XOR      | `^`    | 3          | left          | 2     |
//! | OR       | `\|`   | 2          | left          | 2     |
//! | IMPLIES  | `->`   | 1          | right         | 2     |
//! | IFF      | `<->`  | 0          | left          | 2     |

use std::fmt::{Display, Formatter};

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Operator {
    Not,
    And,
    Xor,
    Or,
    Implies,
    Iff,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Assoc {
    Left,
    Right,
}

/// Static attributes of an operator.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Descriptor {
    pub operator: Operator,
    /// Canonical ASCII spelling.
    pub symbol: &'static str,
    /// Higher binds tighter.
    pub precedence: u8,
    pub assoc: Assoc,
    pub arity: usize,
}

pub static DESCRIPTORS: [Descriptor; 6] = [
    Descriptor {
        operator: Operator::Not,
        symbol: "~",
        precedence: 5,
        assoc: Assoc::Right,
        arity: 1,
    },
    Descriptor {
        operator: Operator::And,
        symbol: "&",
        precedence: 4,
        assoc: Assoc::Left,
        arity: 2,
    },
    Descriptor {
        operator: Operator::Xor,
        symbol: "^",
        precedence: 3,
        assoc: Assoc::Left,
        arity: 2,
    },
    Descriptor {
        operator: Operator::Or,
        symbol: "|",
        precedence: 2,
        assoc: Assoc::Left,
        arity: 2,
    },
    Descriptor {
        operator: Operator::Implies,
        symbol: "->",
        precedence: 1,
        assoc: Assoc::Right,
        arity: 2,
    },
    Descriptor {
        operator: Operator::Iff,
        symbol: "<->",
        precedence: 0,
        assoc: Assoc::Left,
        arity: 2,
    },
];

impl Operator {
    /// Looks up an operator by its canonical spelling.
    pub fn from_symbol(symbol: &str) -> Option<Operator> {
        DESCRIPTORS.iter().find(|d| d.symbol == symbol).map(|d| d.operator)
    }

    pub fn descriptor(self) -> &'static Descriptor {
        let index = match self {
            Operator::Not => 0,
            Operator::And => 1,
            Operator::Xor => 2,
            Operator::Or => 3,
            Operator::Implies => 4,
            Operator::Iff => 5,
        };
        &DESCRIPTORS[index]
    }

    pub fn symbol(self) -> &'static str {
        self.descriptor().symbol
    }

    pub fn precedence(self) -> u8 {
        self.descriptor().precedence
    }

    pub fn assoc(self) -> Assoc {
        self.descriptor().assoc
    }

    pub fn arity(self) -> usize {
        self.descriptor().arity
    }

    /// Human-readable name used in evaluation traces.
    pub fn name(self) -> &'static str {
        match self {
            Operator::Not => "NOT",
            Operator::And => "AND",
            Operator::Xor => "XOR",
            Operator::Or => "OR",
            Operator::Implies => "IMPLIES",
            Operator::Iff => "IFF",
        }
    }

    /// Returns `true` if a stack-top operator `other` must be popped
    /// before `self` is pushed in the shunting-yard algorithm.
    pub fn yields_to(self, other: Operator) -> bool {
        match self.assoc() {
            Assoc::Left => self.precedence() <= other.precedence(),
            Assoc::Right => self.precedence() < other.precedence(),
        }
    }

    /// Truth function of a unary operator.
    ///
    /// Binary operators are not defined on a single operand; they yield `None`.
    pub fn apply_unary(self, a: bool) -> Option<bool> {
        match self {
            Operator::Not => Some(!a),
            _ => None,
        }
    }

    /// Truth function of a binary operator.
    pub fn apply_binary(self, a: bool, b: bool) -> Option<bool> {
        match self {
            Operator::Not => None,
            Operator::And => Some(a && b),
            Operator::Xor => Some(a != b),
            Operator::Or => Some(a || b),
            Operator::Implies => Some(!a || b),
            Operator::Iff => Some(a == b),
        }
    }
}

impl Display for Operator {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_descriptor_table_is_consistent() {
        for d in DESCRIPTORS.iter() {
            assert_eq!(d.operator.descriptor(), d);
            assert_eq!(Operator::from_symbol(d.symbol), Some(d.operator));
        }
    }

    #[test]
    fn test_unknown_symbol() {
        assert_eq!(Operator::from_symbol("=>"), None);
        assert_eq!(Operator::from_symbol("("), None);
    }

    #[test]
    fn test_yields_to() {
        // Left-associative operators pop equal precedence.
        assert!(Operator::Or.yields_to(Operator::Or));
        assert!(Operator::Or.yields_to(Operator::And));
        assert!(!Operator::And.yields_to(Operator::Or));
        // Right-associative operators do not.
        assert!(!Operator::Implies.yields_to(Operator::Implies));
        assert!(!Operator::Not.yields_to(Operator::Not));
        assert!(Operator::Implies.yields_to(Operator::Not));
    }

    #[test]
    fn test_truth_functions() {
        assert_eq!(Operator::Not.apply_unary(false), Some(true));
        assert_eq!(Operator::And.apply_unary(false), None);
        assert_eq!(Operator::Not.apply_binary(true, true), None);

        let pairs = [(false, false), (false, true), (true, false), (true, true)];
        let column = |op: Operator| -> Vec<bool> {
            pairs.iter().map(|&(a, b)| op.apply_binary(a, b).unwrap()).collect()
        };
        assert_eq!(column(Operator::And), [false, false, false, true]);
        assert_eq!(column(Operator::Or), [false, true, true, true]);
        assert_eq!(column(Operator::Xor), [false, true, true, false]);
        assert_eq!(column(Operator::Implies), [true, true, false, true]);
        assert_eq!(column(Operator::Iff), [true, false, false, true]);
    }
}
