//! Quill IR - the node tree handed from the parser to the evaluator.
//!
//! The tree is flat: every [`Node`] lives in a [`NodeArena`] and refers to
//! its children by [`NodeId`]. Identifiers are interned into [`Name`]s by a
//! [`StringInterner`] that the parser and evaluator share.

mod arena;
mod interner;
mod name;
mod node;
mod node_id;

pub use arena::{NodeArena, TupleIter};
pub use interner::{InternError, SharedInterner, StringInterner};
pub use name::Name;
pub use node::{ArithOp, LogicOp, Node};
pub use node_id::NodeId;
