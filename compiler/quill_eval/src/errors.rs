//! Evaluation errors.
//!
//! Every error is fatal to the current evaluation: it propagates out of
//! [`Interpreter::evaluate`](crate::Interpreter::evaluate) unchanged and the
//! driver decides how to report it. Names are resolved to strings when the
//! error is built so the driver does not need the interner.
//!
//! Build errors through the constructor functions rather than the variants
//! directly; they keep message construction in one place.

use quill_ir::NodeId;

use crate::Value;

/// Result of evaluating a node.
pub type EvalResult = Result<Value, EvalError>;

/// Why an evaluation aborted.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum EvalError {
    /// A call names a function that was never defined.
    #[error("undefined function: {name}")]
    UndefinedFunction { name: String },

    /// Argument and parameter lists differ in length.
    #[error("{name} expects {expected} {}, got {got}", arg_word(.expected))]
    ArityMismatch {
        name: String,
        expected: usize,
        got: usize,
    },

    /// Scope stack was empty where a frame was required. Indicates an
    /// unbalanced push/pop in the driver.
    #[error("scope stack is empty")]
    EmptyScopeStack,

    /// Frame-local resolution found the name only in an enclosing frame.
    #[error("variable {name} is not visible in this scope")]
    OutOfScope { name: String },

    /// A function's parameter list holds something other than a name.
    #[error("function {function} has a parameter that is not a name (found {found})")]
    InvalidParameter { function: String, found: &'static str },

    /// A child edge points outside the arena.
    #[error("node {node:?} is not in the arena")]
    DanglingNode { node: NodeId },
}

fn arg_word(count: &usize) -> &'static str {
    if *count == 1 {
        "argument"
    } else {
        "arguments"
    }
}

#[cold]
pub fn undefined_function(name: &str) -> EvalError {
    EvalError::UndefinedFunction {
        name: name.to_owned(),
    }
}

#[cold]
pub fn arity_mismatch(name: &str, expected: usize, got: usize) -> EvalError {
    EvalError::ArityMismatch {
        name: name.to_owned(),
        expected,
        got,
    }
}

#[cold]
pub fn out_of_scope(name: &str) -> EvalError {
    EvalError::OutOfScope {
        name: name.to_owned(),
    }
}

#[cold]
pub fn invalid_parameter(function: &str, found: &'static str) -> EvalError {
    EvalError::InvalidParameter {
        function: function.to_owned(),
        found,
    }
}

#[cold]
pub fn dangling_node(node: NodeId) -> EvalError {
    EvalError::DanglingNode { node }
}
