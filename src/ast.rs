//! Expression nodes and the node list built from a postfix sequence.
//!
//! The node list is an arena: operator nodes refer to their operands by
//! [`NodeId`], and every operand is stored before the node that uses it.
//! Walking the list front to back is therefore a valid evaluation order,
//! and the labels double as table column headers.

use std::fmt::{Display, Formatter};

use log::debug;

use crate::error::EvalError;
use crate::operator::Operator;
use crate::parser::{Item, Postfix};
use crate::types::NodeId;

#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub enum NodeKind {
    Var(String),
    Const(bool),
    Unary(Operator, NodeId),
    Binary(Operator, NodeId, NodeId),
}

#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct Node {
    pub id: NodeId,
    /// Fully parenthesized rendering of the subexpression.
    pub label: String,
    pub kind: NodeKind,
}

impl Node {
    pub fn var(id: NodeId, name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            id,
            label: name.clone(),
            kind: NodeKind::Var(name),
        }
    }

    pub fn constant(id: NodeId, value: bool) -> Self {
        Self {
            id,
            label: (value as u8).to_string(),
            kind: NodeKind::Const(value),
        }
    }

    /// Builds `<symbol><operand>`.
    ///
    /// Labels embed their operands' labels, so label memory grows with the
    /// square of the nesting depth; the pipeline bounds input length through
    /// [`Config::max_length`][crate::config::Config::max_length].
    pub fn unary(id: NodeId, op: Operator, arg: &Node) -> Self {
        Self {
            id,
            label: format!("{}{}", op, arg.label),
            kind: NodeKind::Unary(op, arg.id),
        }
    }

    /// Builds `(<lhs><symbol><rhs>)`. See [`Node::unary`] on label size.
    pub fn binary(id: NodeId, op: Operator, lhs: &Node, rhs: &Node) -> Self {
        Self {
            id,
            label: format!("({}{}{})", lhs.label, op, rhs.label),
            kind: NodeKind::Binary(op, lhs.id, rhs.id),
        }
    }

    pub fn is_var(&self) -> bool {
        matches!(self.kind, NodeKind::Var(_))
    }

    /// Operand ids, left to right. Empty for leaves.
    pub fn operands(&self) -> Vec<NodeId> {
        match self.kind {
            NodeKind::Var(_) | NodeKind::Const(_) => vec![],
            NodeKind::Unary(_, a) => vec![a],
            NodeKind::Binary(_, a, b) => vec![a, b],
        }
    }
}

impl Display for Node {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label)
    }
}

#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct NodeList {
    /// Variables first (sorted by name), then the remaining nodes in build order.
    nodes: Vec<Node>,
    num_vars: usize,
    root: NodeId,
    /// Structural defect found while replaying the postfix sequence.
    malformed: Option<EvalError>,
}

impl NodeList {
    /// Assembles a node list without checking operand order.
    ///
    /// Out-of-order operands are reported per row by the evaluator.
    pub fn from_nodes(nodes: Vec<Node>, root: NodeId) -> Self {
        let num_vars = nodes.iter().take_while(|n| n.is_var()).count();
        Self {
            nodes,
            num_vars,
            root,
            malformed: None,
        }
    }

    /// Replays `postfix` with a stack of node ids.
    ///
    /// `variables` must be sorted and distinct; each gets a leaf node up front.
    ///
    /// An operator without enough operands, or values left without an operator,
    /// do not fail the build: the list keeps the nodes built so far and records
    /// the defect in [`NodeList::malformed`], which every evaluation then reports.
    /// An empty sequence or an identifier outside `variables` is an error.
    pub fn build(postfix: &Postfix, variables: &[String]) -> Result<Self, EvalError> {
        let mut nodes: Vec<Node> = variables
            .iter()
            .enumerate()
            .map(|(i, name)| Node::var(NodeId::new(i), name.as_str()))
            .collect();
        let mut stack: Vec<NodeId> = Vec::new();
        let mut malformed = None;

        for item in postfix.items() {
            let id = NodeId::new(nodes.len());
            match item {
                Item::Var(name) => {
                    let index = variables
                        .iter()
                        .position(|v| v == name)
                        .ok_or_else(|| EvalError::UnknownVariable(name.clone()))?;
                    stack.push(NodeId::new(index));
                }
                Item::Const(value) => {
                    nodes.push(Node::constant(id, *value));
                    stack.push(id);
                }
                Item::Op(op) => {
                    if stack.len() < op.arity() {
                        malformed = Some(EvalError::MissingOperand(*op));
                        break;
                    }
                    let node = if op.arity() == 1 {
                        let a = stack[stack.len() - 1];
                        Node::unary(id, *op, &nodes[a.index()])
                    } else {
                        let a = stack[stack.len() - 2];
                        let b = stack[stack.len() - 1];
                        Node::binary(id, *op, &nodes[a.index()], &nodes[b.index()])
                    };
                    stack.truncate(stack.len() - op.arity());
                    debug!("build: {} = {}", id, node.label);
                    nodes.push(node);
                    stack.push(id);
                }
            }
        }

        if malformed.is_none() && stack.len() > 1 {
            malformed = Some(EvalError::DanglingOperands { count: stack.len() });
        }
        let root = match stack.last() {
            Some(&root) => root,
            None if malformed.is_none() => return Err(EvalError::EmptyExpression),
            None => NodeId::new(nodes.len()),
        };
        if let Some(e) = &malformed {
            debug!("build: {}", e);
        }

        Ok(Self {
            nodes,
            num_vars: variables.len(),
            root,
            malformed,
        })
    }

    /// The structural defect of this list, if any.
    pub fn malformed(&self) -> Option<&EvalError> {
        self.malformed.as_ref()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn num_vars(&self) -> usize {
        self.num_vars
    }

    /// The node whose value is the value of the whole expression.
    pub fn root(&self) -> NodeId {
        self.root
    }

    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.index())
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Node> {
        self.nodes.iter()
    }

    pub fn variables(&self) -> &[Node] {
        &self.nodes[..self.num_vars]
    }

    /// Column headers, one per node.
    pub fn labels(&self) -> Vec<&str> {
        self.nodes.iter().map(|n| n.label.as_str()).collect()
    }
}

impl<'a> IntoIterator for &'a NodeList {
    type Item = &'a Node;
    type IntoIter = std::slice::Iter<'a, Node>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
