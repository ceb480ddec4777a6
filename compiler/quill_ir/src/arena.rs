//! Arena storage for the node tree.
//!
//! The parser allocates nodes bottom-up, children first, so every child
//! edge points at a smaller [`NodeId`] and the tree cannot contain cycles.

use crate::{ArithOp, LogicOp, Name, Node, NodeId};

/// Contiguous storage for every node of one program.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NodeArena {
    nodes: Vec<Node>,
}

impl NodeArena {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        NodeArena {
            nodes: Vec::with_capacity(capacity),
        }
    }

    /// Allocate a node, return its ID.
    #[inline]
    pub fn alloc(&mut self, node: Node) -> NodeId {
        #[expect(
            clippy::cast_possible_truncation,
            reason = "arenas never approach u32::MAX nodes"
        )]
        let id = NodeId::new(self.nodes.len() as u32);
        self.nodes.push(node);
        id
    }

    /// Get node by ID.
    ///
    /// # Panics
    /// Panics if `id` did not come from this arena.
    #[inline]
    #[track_caller]
    pub fn get(&self, id: NodeId) -> &Node {
        &self.nodes[id.index()]
    }

    /// Get node by ID, or `None` if `id` is out of range.
    #[inline]
    pub fn try_get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.index())
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Iterate the elements of a `Tuple` chain.
    pub fn tuple_items(&self, list: Option<NodeId>) -> TupleIter<'_> {
        TupleIter { arena: self, next: list }
    }

    /// Number of elements in a `Tuple` chain.
    pub fn tuple_len(&self, list: Option<NodeId>) -> usize {
        self.tuple_items(list).count()
    }

    // ===== Construction helpers =====

    pub fn literal(&mut self, value: i64) -> NodeId {
        self.alloc(Node::Literal(value))
    }

    pub fn name(&mut self, name: Name) -> NodeId {
        self.alloc(Node::Name(name))
    }

    pub fn variable(&mut self, name: Name) -> NodeId {
        self.alloc(Node::Variable(name))
    }

    pub fn assign(&mut self, target: Name, value: NodeId) -> NodeId {
        self.alloc(Node::Assign { target, value })
    }

    pub fn seq(&mut self, first: NodeId, second: NodeId) -> NodeId {
        self.alloc(Node::Sequence { first, second })
    }

    /// Chain statements right-nested: `seq(a, seq(b, c))`.
    ///
    /// Returns `None` for an empty slice.
    pub fn seq_all(&mut self, stmts: &[NodeId]) -> Option<NodeId> {
        let (&last, rest) = stmts.split_last()?;
        Some(
            rest.iter()
                .rev()
                .fold(last, |acc, &stmt| self.seq(stmt, acc)),
        )
    }

    pub fn block(&mut self, inner: NodeId) -> NodeId {
        self.alloc(Node::Block(inner))
    }

    pub fn ret(&mut self, value: NodeId) -> NodeId {
        self.alloc(Node::Return(value))
    }

    pub fn arith(&mut self, op: ArithOp, left: NodeId, right: NodeId) -> NodeId {
        self.alloc(Node::Arith { op, left, right })
    }

    pub fn plus(&mut self, left: NodeId, right: NodeId) -> NodeId {
        self.arith(ArithOp::Plus, left, right)
    }

    pub fn minus(&mut self, left: NodeId, right: NodeId) -> NodeId {
        self.arith(ArithOp::Minus, left, right)
    }

    pub fn mult(&mut self, left: NodeId, right: NodeId) -> NodeId {
        self.arith(ArithOp::Mult, left, right)
    }

    pub fn equals(&mut self, left: NodeId, right: NodeId) -> NodeId {
        self.alloc(Node::Equals { left, right })
    }

    pub fn logic(&mut self, op: LogicOp, left: NodeId, right: NodeId) -> NodeId {
        self.alloc(Node::Logic { op, left, right })
    }

    pub fn and(&mut self, left: NodeId, right: NodeId) -> NodeId {
        self.logic(LogicOp::And, left, right)
    }

    pub fn or(&mut self, left: NodeId, right: NodeId) -> NodeId {
        self.logic(LogicOp::Or, left, right)
    }

    pub fn xor(&mut self, left: NodeId, right: NodeId) -> NodeId {
        self.logic(LogicOp::Xor, left, right)
    }

    pub fn not(&mut self, operand: NodeId) -> NodeId {
        self.alloc(Node::Not(operand))
    }

    pub fn if_then(&mut self, cond: NodeId, body: NodeId) -> NodeId {
        self.alloc(Node::If { cond, body })
    }

    pub fn log(&mut self, value: NodeId) -> NodeId {
        self.alloc(Node::Log(value))
    }

    pub fn tuple(&mut self, current: NodeId, next: Option<NodeId>) -> NodeId {
        self.alloc(Node::Tuple { current, next })
    }

    /// Build a `Tuple` chain from `items`, in order. `None` for an empty slice.
    pub fn list(&mut self, items: &[NodeId]) -> Option<NodeId> {
        items
            .iter()
            .rev()
            .fold(None, |next, &current| Some(self.tuple(current, next)))
    }

    /// Define `name(params...) = body`; each parameter becomes a `Name` node.
    pub fn function(&mut self, name: Name, params: &[Name], body: NodeId) -> NodeId {
        let param_nodes: Vec<NodeId> = params.iter().map(|&p| self.name(p)).collect();
        let params = self.list(&param_nodes);
        self.alloc(Node::FunctionDef { name, params, body })
    }

    pub fn call(&mut self, name: Name, args: &[NodeId]) -> NodeId {
        let args = self.list(args);
        self.alloc(Node::Call { name, args })
    }
}

/// Iterator over the `current` element of each link in a `Tuple` chain.
///
/// A link that is not a `Tuple` is yielded as the final element, so a
/// single bare expression works as a one-element list. A link outside the
/// arena is yielded too, leaving the caller to report it.
pub struct TupleIter<'a> {
    arena: &'a NodeArena,
    next: Option<NodeId>,
}

impl Iterator for TupleIter<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let id = self.next.take()?;
        match self.arena.try_get(id) {
            Some(Node::Tuple { current, next }) => {
                self.next = *next;
                Some(*current)
            }
            _ => Some(id),
        }
    }
}
