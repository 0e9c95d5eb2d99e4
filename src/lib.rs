//! # logic-table: truth tables for propositional formulas
//!
//! **`logic-table`** parses a propositional formula written with ASCII or Unicode
//! connectives, converts it to postfix form and evaluates it under every
//! assignment of its variables. Each row comes with the value of every
//! subexpression and a step-by-step explanation of how it was obtained.
//!
//! ## Syntax
//!
//! | Connective | ASCII | Unicode | Precedence |
//! |------------|-------|---------|------------|
//! | negation   | `~`   | `¬`     | 5 (right)  |
//! | and        | `&`   | `∧`     | 4          |
//! | xor        | `^`   | `⊕`     | 3          |
//! | or         | `\|`  | `∨`     | 2          |
//! | implies    | `->`  | `→`     | 1 (right)  |
//! | iff        | `<->` | `↔`     | 0          |
//!
//! Variables match `[A-Za-z_][A-Za-z0-9_]*`; `0`/`1` (or `⊥`/`⊤`) are constants.
//!
//! ## Basic Usage
//!
//! ```rust
//! use logic_table::evaluate_expression;
//! use logic_table::types::Cell;
//!
//! let table = evaluate_expression("p → (q ∧ r)").unwrap();
//!
//! assert_eq!(table.variables, vec!["p", "q", "r"]);
//! assert_eq!(table.postfix.to_string(), "p q r & ->");
//! assert_eq!(table.headers(), vec!["p", "q", "r", "(q&r)", "(p->(q&r))"]);
//! assert_eq!(table.num_rows(), 8);
//!
//! // Row 0b101 is p=T, q=F, r=T.
//! let row = &table.rows[0b101];
//! assert_eq!(row.cells[3], Cell::Value(false));
//! assert_eq!(row.cells[4], Cell::Value(false));
//! ```
//!
//! ## Pipeline
//!
//! - **[`normalize`]**: Unicode glyphs to ASCII, whitespace collapsed.
//! - **[`lexer`]**: normalized text to [`Token`][crate::token::Token]s.
//! - **[`parser`]**: shunting-yard conversion to a [`Postfix`][crate::parser::Postfix] sequence.
//! - **[`ast`]**: postfix replay into a [`NodeList`][crate::ast::NodeList].
//! - **[`eval`]**: evaluation of the node list under one assignment, with a trace.
//! - **[`table`]**: enumeration of all assignments into a [`TruthTable`][crate::table::TruthTable].

pub mod ast;
pub mod config;
pub mod error;
pub mod eval;
pub mod lexer;
pub mod normalize;
pub mod operator;
pub mod parser;
pub mod table;
pub mod token;
pub mod types;

use log::debug;

use crate::ast::NodeList;
use crate::config::Config;
use crate::error::Error;
use crate::table::TruthTable;

/// Runs the whole pipeline with the default [`Config`].
pub fn evaluate_expression(raw: &str) -> Result<TruthTable, Error> {
    evaluate_expression_with_config(raw, &Config::default())
}

/// Runs the whole pipeline.
///
/// Tokenizer and parser failures abort with an error. A structurally invalid
/// expression still yields a table when it has variables: every row is marked
/// as failed and carries the reason in its trace. Without variables there is
/// no table to fill, so the defect is returned as [`Error::Eval`].
pub fn evaluate_expression_with_config(raw: &str, config: &Config) -> Result<TruthTable, Error> {
    let expression = normalize::normalize(raw);
    debug!("normalize({:?}) = {:?}", raw, expression);
    let len = expression.chars().count();
    if len > config.max_length {
        return Err(Error::ExpressionTooLong {
            len,
            limit: config.max_length,
        });
    }

    let tokens = lexer::tokenize(&expression)?;
    let variables = token::variables(&tokens);
    let limit = config.variable_limit();
    if variables.len() > limit {
        return Err(Error::TooManyVariables {
            count: variables.len(),
            limit,
        });
    }

    let postfix = parser::to_postfix(&tokens)?;
    let nodes = NodeList::build(&postfix, &variables)?;
    if let (true, Some(e)) = (variables.is_empty(), nodes.malformed()) {
        return Err(Error::Eval(e.clone()));
    }
    let rows = table::generate(&variables, &nodes, config)?;

    Ok(TruthTable {
        expression,
        tokens,
        postfix,
        variables,
        nodes,
        rows,
        config: config.clone(),
    })
}
