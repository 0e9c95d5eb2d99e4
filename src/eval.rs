//! Evaluation of a node list under one assignment, with a readable trace.

use std::collections::BTreeMap;

use log::trace;

use crate::ast::{NodeKind, NodeList};
use crate::config::Config;
use crate::error::EvalError;
use crate::types::NodeId;

/// Explanation lines, one per evaluated node.
pub type Trace = Vec<String>;

/// Boolean values of variables. Absent variables read as `false`.
#[derive(Debug, Clone, Default, Eq, PartialEq, Hash)]
pub struct Assignment(BTreeMap<String, bool>);

impl Assignment {
    pub fn new() -> Self {
        Self::default()
    }

    /// Assigns bit `n-1-j` of `bits` to the `j`-th of the `n` variables,
    /// so the first variable is the most significant bit.
    pub fn from_bits(variables: &[String], bits: u64) -> Self {
        let n = variables.len();
        variables
            .iter()
            .enumerate()
            .map(|(j, name)| (name.clone(), (bits >> (n - 1 - j)) & 1 == 1))
            .collect()
    }

    pub fn set(&mut self, name: impl Into<String>, value: bool) {
        self.0.insert(name.into(), value);
    }

    pub fn get(&self, name: &str) -> bool {
        self.0.get(name).copied().unwrap_or(false)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates in variable-name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, bool)> {
        self.0.iter().map(|(k, v)| (k.as_str(), *v))
    }
}

impl FromIterator<(String, bool)> for Assignment {
    fn from_iter<I: IntoIterator<Item = (String, bool)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Values of all nodes (in node list order) and the trace that produced them.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Evaluation {
    pub values: Vec<bool>,
    pub trace: Trace,
}

impl NodeList {
    /// Evaluates every node in list order.
    ///
    /// Fails if a node refers to an operand that does not precede it, or if
    /// an operator node does not carry as many operands as its arity.
    pub fn evaluate(&self, assignment: &Assignment, config: &Config) -> Result<Evaluation, EvalError> {
        if let Some(e) = self.malformed() {
            return Err(e.clone());
        }
        let text = |v: bool| config.bool_text(v);
        let mut values: Vec<bool> = Vec::with_capacity(self.len());
        let mut trace = Trace::with_capacity(self.len());

        for (i, node) in self.iter().enumerate() {
            let lookup = |operand: NodeId| -> Result<bool, EvalError> {
                values.get(operand.index()).copied().ok_or(EvalError::ForwardReference {
                    node: NodeId::new(i),
                    operand,
                })
            };

            let (value, line) = match &node.kind {
                NodeKind::Var(name) => {
                    let v = assignment.get(name);
                    (v, format!("Variable {} = {}.", name, text(v)))
                }
                NodeKind::Const(v) => (*v, format!("Constant {} = {}.", node.label, text(*v))),
                NodeKind::Unary(op, a) => {
                    let a = lookup(*a)?;
                    let res = op.apply_unary(a).ok_or(EvalError::ArityMismatch {
                        operator: *op,
                        operands: 1,
                    })?;
                    let line = format!(
                        "{} = {}: {} ({}) applied to {} gives {}.",
                        node.label,
                        text(res),
                        op.name(),
                        op,
                        text(a),
                        text(res)
                    );
                    (res, line)
                }
                NodeKind::Binary(op, a, b) => {
                    let a = lookup(*a)?;
                    let b = lookup(*b)?;
                    let res = op.apply_binary(a, b).ok_or(EvalError::ArityMismatch {
                        operator: *op,
                        operands: 2,
                    })?;
                    let line = format!(
                        "{} = {}: {} ({}) applied to {} and {} gives {}.",
                        node.label,
                        text(res),
                        op.name(),
                        op,
                        text(a),
                        text(b),
                        text(res)
                    );
                    (res, line)
                }
            };

            trace!("{}", line);
            values.push(value);
            trace.push(line);
        }

        Ok(Evaluation { values, trace })
    }
}
