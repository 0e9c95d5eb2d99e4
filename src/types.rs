//! Small value types shared across the pipeline.
//!
//! [`NodeId`] addresses a node inside a [`NodeList`][crate::ast::NodeList],
//! [`Cell`] is one displayed value of a table row.
use std::fmt;

/// Index of a node in a node list (0-indexed).
///
/// # Invariants
///
/// - Variable nodes occupy ids `0..n` for `n` distinct variables
/// - An operator node's operands always have smaller ids than the node itself
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct NodeId(usize);

impl NodeId {
    pub fn new(index: usize) -> Self {
        NodeId(index)
    }

    /// Returns the raw position in the node list.
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

impl From<NodeId> for usize {
    fn from(id: NodeId) -> Self {
        id.0
    }
}

impl From<usize> for NodeId {
    fn from(index: usize) -> Self {
        NodeId(index)
    }
}

/// One column value of a table row.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Cell {
    Value(bool),
    /// The row failed to evaluate; this column has no value.
    Error,
}

impl Cell {
    pub fn value(self) -> Option<bool> {
        match self {
            Cell::Value(value) => Some(value),
            Cell::Error => None,
        }
    }

    pub fn is_error(self) -> bool {
        matches!(self, Cell::Error)
    }
}

impl From<bool> for Cell {
    fn from(value: bool) -> Self {
        Cell::Value(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_id() {
        let a = NodeId::new(0);
        let b = NodeId::from(3);
        assert!(a < b);
        assert_eq!(b.index(), 3);
        assert_eq!(usize::from(b), 3);
        assert_eq!(b.to_string(), "#3");
    }

    #[test]
    fn test_cell() {
        assert_eq!(Cell::from(true).value(), Some(true));
        assert_eq!(Cell::Error.value(), None);
        assert!(Cell::Error.is_error());
        assert!(!Cell::Value(false).is_error());
    }
}
