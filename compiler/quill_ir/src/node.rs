//! The closed set of node kinds.

use crate::{Name, NodeId};

/// Arithmetic operator of a [`Node::Arith`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ArithOp {
    Plus,
    Minus,
    Mult,
}

/// Boolean operator of a [`Node::Logic`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LogicOp {
    And,
    Or,
    Xor,
}

impl LogicOp {
    /// Apply the operator to two already-coerced operands.
    #[inline]
    pub fn apply(self, left: bool, right: bool) -> bool {
        match self {
            LogicOp::And => left && right,
            LogicOp::Or => left || right,
            LogicOp::Xor => left != right,
        }
    }
}

/// One node of the tree.
///
/// Nodes are built by the parser, stored in a [`NodeArena`](crate::NodeArena)
/// and never mutated afterwards.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Node {
    /// Integer constant.
    Literal(i64),
    /// Bare identifier used as a label, e.g. a formal parameter. Evaluates to 0.
    Name(Name),
    /// Variable read.
    Variable(Name),
    /// `target = value`, evaluates to the stored value.
    Assign { target: Name, value: NodeId },
    /// Two statements; evaluates both and yields the first one's value.
    Sequence { first: NodeId, second: NodeId },
    /// New scope around `inner`; yields the scope's result slot.
    Block(NodeId),
    /// Writes the innermost result slot and yields the value.
    Return(NodeId),
    /// `left op right` on integers.
    Arith {
        op: ArithOp,
        left: NodeId,
        right: NodeId,
    },
    /// 1 if both sides are equal, else 0.
    Equals { left: NodeId, right: NodeId },
    /// Non-short-circuiting boolean operator.
    Logic {
        op: LogicOp,
        left: NodeId,
        right: NodeId,
    },
    /// Boolean negation.
    Not(NodeId),
    /// Conditional without else branch.
    If { cond: NodeId, body: NodeId },
    /// Prints the value on its own line.
    Log(NodeId),
    /// Registers a function in the global table.
    FunctionDef {
        name: Name,
        params: Option<NodeId>,
        body: NodeId,
    },
    /// One link of a parameter or argument list.
    Tuple { current: NodeId, next: Option<NodeId> },
    /// Calls a function by name.
    Call { name: Name, args: Option<NodeId> },
}

impl Node {
    /// Short human-readable kind name, for diagnostics and tracing.
    pub fn kind(&self) -> &'static str {
        match self {
            Node::Literal(_) => "literal",
            Node::Name(_) => "name",
            Node::Variable(_) => "variable",
            Node::Assign { .. } => "assign",
            Node::Sequence { .. } => "sequence",
            Node::Block(_) => "block",
            Node::Return(_) => "return",
            Node::Arith { .. } => "arith",
            Node::Equals { .. } => "equals",
            Node::Logic { .. } => "logic",
            Node::Not(_) => "not",
            Node::If { .. } => "if",
            Node::Log(_) => "log",
            Node::FunctionDef { .. } => "function",
            Node::Tuple { .. } => "tuple",
            Node::Call { .. } => "call",
        }
    }

    /// The identifier this node names, if it can stand as a formal parameter.
    pub fn as_param_name(&self) -> Option<Name> {
        match self {
            Node::Name(name) | Node::Variable(name) => Some(*name),
            _ => None,
        }
    }
}
