//! Truth table generation.
//!
//! For `n` distinct variables the generator walks `i = 0..2^n` and assigns
//! bit `n-1-j` of `i` to the `j`-th variable (sorted by name), so the first
//! variable is the most significant bit and rows come out in conventional
//! order. Each assignment is evaluated independently: a row that fails is
//! kept in the table with [`Cell::Error`] in its operator columns, and the
//! remaining rows are still produced.

use std::fmt::{Display, Formatter};

use log::{debug, warn};

use crate::ast::NodeList;
use crate::config::Config;
use crate::error::{Error, EvalError};
use crate::eval::{Assignment, Trace};
use crate::parser::Postfix;
use crate::token::Token;
use crate::types::Cell;

/// One assignment with the value of every node and its explanation.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct TableRow {
    /// Row number; also the bit pattern of the assignment.
    pub index: u64,
    pub assignment: Assignment,
    /// One cell per node, in node list order.
    pub cells: Vec<Cell>,
    pub trace: Trace,
    /// Why the row failed to evaluate, if it did.
    pub error: Option<EvalError>,
}

impl TableRow {
    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }
}

/// Evaluates `nodes` under every assignment of `variables`.
///
/// With no variables, the expression is evaluated once and the result has a
/// single row.
pub fn generate(variables: &[String], nodes: &NodeList, config: &Config) -> Result<Vec<TableRow>, Error> {
    let n = variables.len();
    let limit = config.variable_limit();
    if n > limit {
        return Err(Error::TooManyVariables { count: n, limit });
    }

    let combos: u64 = 1 << n;
    debug!("generate: {} variables, {} rows, {} nodes", n, combos, nodes.len());

    let rows = (0..combos)
        .map(|index| {
            let assignment = Assignment::from_bits(variables, index);
            evaluate_row(index, assignment, nodes, config)
        })
        .collect();

    Ok(rows)
}

fn evaluate_row(index: u64, assignment: Assignment, nodes: &NodeList, config: &Config) -> TableRow {
    match nodes.evaluate(&assignment, config) {
        Ok(eval) => TableRow {
            index,
            assignment,
            cells: eval.values.into_iter().map(Cell::Value).collect(),
            trace: eval.trace,
            error: None,
        },
        Err(e) => {
            warn!("row {} failed: {}", index, e);
            // Variable columns keep the assignment; everything after them is unknown.
            let mut cells: Vec<Cell> = nodes
                .variables()
                .iter()
                .map(|node| Cell::Value(assignment.get(&node.label)))
                .collect();
            cells.resize(nodes.len(), Cell::Error);
            TableRow {
                index,
                assignment,
                cells,
                trace: vec![format!("ERROR: {}", e)],
                error: Some(e),
            }
        }
    }
}

/// Everything produced for one expression, ready to hand to a renderer.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct TruthTable {
    /// The normalized expression.
    pub expression: String,
    pub tokens: Vec<Token>,
    pub postfix: Postfix,
    /// Distinct variables, sorted by name.
    pub variables: Vec<String>,
    pub nodes: NodeList,
    pub rows: Vec<TableRow>,
    pub config: Config,
}

impl TruthTable {
    pub fn num_rows(&self) -> usize {
        self.rows.len()
    }

    /// `true` when the expression has no variables and the table is a single value.
    pub fn is_constant(&self) -> bool {
        self.variables.is_empty()
    }

    /// Column headers, one per node.
    pub fn headers(&self) -> Vec<&str> {
        self.nodes.labels()
    }

    /// Value of the whole expression in each row.
    pub fn result_column(&self) -> Vec<Cell> {
        let root = self.nodes.root().index();
        self.rows
            .iter()
            .map(|row| match row.error {
                Some(_) => Cell::Error,
                None => row.cells.get(root).copied().unwrap_or(Cell::Error),
            })
            .collect()
    }

    /// Number of rows where the expression is true.
    pub fn sat_count(&self) -> usize {
        self.result_column().into_iter().filter(|&c| c == Cell::Value(true)).count()
    }

    /// Rows that failed to evaluate.
    pub fn error_count(&self) -> usize {
        self.rows.iter().filter(|row| row.is_error()).count()
    }

    /// True in every row.
    pub fn is_tautology(&self) -> bool {
        self.error_count() == 0 && self.sat_count() == self.num_rows()
    }

    /// False in every row.
    pub fn is_contradiction(&self) -> bool {
        self.error_count() == 0 && self.sat_count() == 0
    }

    /// True in some rows and false in others.
    pub fn is_contingency(&self) -> bool {
        let column = self.result_column();
        column.contains(&Cell::Value(true)) && column.contains(&Cell::Value(false))
    }

    fn cell_text(&self, cell: Cell) -> &'static str {
        match cell {
            Cell::Value(v) => self.config.bool_text(v),
            Cell::Error => self.config.error_symbol,
        }
    }
}

/// Renders the table as plain text; the alternate form (`{:#}`) adds
/// each row's trace below it.
impl Display for TruthTable {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let headers = self.headers();
        let mut cell_width = self.config.true_symbol.chars().count().max(self.config.false_symbol.chars().count());
        if self.error_count() > 0 {
            cell_width = cell_width.max(self.config.error_symbol.chars().count());
        }
        let widths: Vec<usize> = headers.iter().map(|h| h.chars().count().max(cell_width)).collect();

        write_line(f, &headers, &widths)?;
        let total = widths.iter().sum::<usize>() + 3 * widths.len().saturating_sub(1);
        writeln!(f, "{}", "-".repeat(total))?;

        for row in &self.rows {
            let cells: Vec<&str> = row.cells.iter().map(|&c| self.cell_text(c)).collect();
            write_line(f, &cells, &widths)?;
            if f.alternate() {
                for step in &row.trace {
                    writeln!(f, "    {}", step)?;
                }
            }
        }
        Ok(())
    }
}

fn write_line(f: &mut Formatter<'_>, cells: &[&str], widths: &[usize]) -> std::fmt::Result {
    let mut line = String::new();
    for (i, (text, width)) in cells.iter().zip(widths).enumerate() {
        if i > 0 {
            line.push_str(" | ");
        }
        line.push_str(&format!("{:^width$}", text, width = *width));
    }
    writeln!(f, "{}", line.trim_end())
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::ast::Node;
    use crate::lexer::tokenize;
    use crate::operator::Operator;
    use crate::parser::to_postfix;
    use crate::token::variables;
    use crate::types::NodeId;

    fn rows(input: &str) -> Vec<TableRow> {
        let tokens = tokenize(input).unwrap();
        let vars = variables(&tokens);
        let nodes = NodeList::build(&to_postfix(&tokens).unwrap(), &vars).unwrap();
        generate(&vars, &nodes, &Config::default()).unwrap()
    }

    #[test]
    fn test_row_count() {
        assert_eq!(rows("p").len(), 2);
        assert_eq!(rows("p & q").len(), 4);
        assert_eq!(rows("a | b | c | d").len(), 16);
    }

    #[test]
    fn test_variable_columns_follow_row_index() {
        for row in rows("c ^ a -> b") {
            let bits: Vec<bool> = row.cells[..3].iter().map(|c| c.value().unwrap()).collect();
            let expected: Vec<bool> = (0..3).map(|j| (row.index >> (2 - j)) & 1 == 1).collect();
            assert_eq!(bits, expected);
        }
    }

    #[test]
    fn test_no_variables_single_row() {
        let rows = rows("1 -> 0");
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].cells.last(), Some(&Cell::Value(false)));
        assert!(rows[0].assignment.is_empty());
    }

    #[test]
    fn test_too_many_variables() {
        let tokens = tokenize("a & b & c").unwrap();
        let vars = variables(&tokens);
        let nodes = NodeList::build(&to_postfix(&tokens).unwrap(), &vars).unwrap();
        let config = Config {
            max_variables: 2,
            ..Config::default()
        };
        let err = generate(&vars, &nodes, &config).unwrap_err();
        assert_eq!(err, Error::TooManyVariables { count: 3, limit: 2 });
    }

    #[test]
    fn test_failed_rows_are_local() {
        // `~b` refers to a node that is never evaluated before it.
        let a = Node::var(NodeId::new(0), "a");
        let ghost = Node::var(NodeId::new(5), "b");
        let bad = Node::unary(NodeId::new(1), Operator::Not, &ghost);
        let nodes = NodeList::from_nodes(vec![a, bad], NodeId::new(1));
        let vars = vec!["a".to_string()];

        let rows = generate(&vars, &nodes, &Config::default()).unwrap();
        assert_eq!(rows.len(), 2);
        for row in &rows {
            assert!(row.is_error());
            assert_eq!(row.cells[0], Cell::Value(row.index == 1));
            assert_eq!(row.cells[1], Cell::Error);
            assert_eq!(row.trace.len(), 1);
            assert!(row.trace[0].starts_with("ERROR: "));
        }
    }

    #[test]
    fn test_malformed_list_fails_every_row() {
        let rows = rows("p & q r");
        assert_eq!(rows.len(), 8);
        for row in &rows {
            assert_eq!(row.error, Some(EvalError::DanglingOperands { count: 2 }));
            assert_eq!(row.cells.len(), 4);
            assert_eq!(row.cells[3], Cell::Error);
            for (j, var) in ["p", "q", "r"].iter().enumerate() {
                assert_eq!(row.cells[j], Cell::Value(row.assignment.get(var)));
            }
            assert_eq!(
                row.trace,
                vec!["ERROR: malformed expression: 2 values left without an operator"]
            );
        }
    }
}
