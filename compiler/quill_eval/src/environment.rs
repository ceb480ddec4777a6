//! Runtime environment: the scope stack, per-frame result slots, and the
//! global function table.
//!
//! Frames follow strict stack discipline. Blocks and calls push one on entry
//! and pop it on exit through [`ScopedInterpreter`](crate::interpreter::ScopedInterpreter),
//! so a frame never outlives the node that pushed it. The function table is
//! never rolled back when a frame pops.

use rustc_hash::FxHashMap;

use quill_ir::{Name, NodeId};

use crate::errors::EvalError;
use crate::Value;

/// One frame of the scope stack.
#[derive(Clone, Debug, Default)]
struct Frame {
    bindings: FxHashMap<Name, Value>,
    /// Written by `Return`, read back when the owning block closes.
    result: Value,
}

/// A registered function: its body and formal parameter list.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct FunctionEntry {
    pub body: NodeId,
    pub params: Option<NodeId>,
}

/// The sole mutable runtime state of an evaluation.
#[derive(Clone, Debug)]
pub struct Environment {
    /// Innermost frame last.
    frames: Vec<Frame>,
    functions: FxHashMap<Name, FunctionEntry>,
}

impl Environment {
    /// Create an environment with the root frame already pushed.
    pub fn new() -> Self {
        let mut env = Self::empty();
        env.push_scope();
        env
    }

    /// Create an environment with no frames at all.
    ///
    /// The driver must `push_scope` before evaluating anything.
    pub fn empty() -> Self {
        Environment {
            frames: Vec::new(),
            functions: FxHashMap::default(),
        }
    }

    /// Number of active frames.
    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    /// Push an empty frame with its result slot set to 0.
    #[inline]
    pub fn push_scope(&mut self) {
        self.frames.push(Frame::default());
    }

    /// Pop the innermost frame and its result slot.
    #[inline]
    pub fn pop_scope(&mut self) -> Result<(), EvalError> {
        self.frames
            .pop()
            .map(|_| ())
            .ok_or(EvalError::EmptyScopeStack)
    }

    fn innermost(&mut self) -> Result<&mut Frame, EvalError> {
        self.frames.last_mut().ok_or(EvalError::EmptyScopeStack)
    }

    /// Find `name` from the innermost frame outwards, declaring it as 0 in
    /// the innermost frame if no frame binds it.
    ///
    /// The returned slot serves both reads and assignments.
    pub fn lookup_or_declare(&mut self, name: Name) -> Result<&mut Value, EvalError> {
        let index = match self
            .frames
            .iter()
            .rposition(|frame| frame.bindings.contains_key(&name))
        {
            Some(index) => index,
            None => self
                .frames
                .len()
                .checked_sub(1)
                .ok_or(EvalError::EmptyScopeStack)?,
        };
        Ok(self.frames[index].bindings.entry(name).or_default())
    }

    /// Slot for `name` in the innermost frame only, declared as 0 if absent.
    pub fn declare_local(&mut self, name: Name) -> Result<&mut Value, EvalError> {
        Ok(self.innermost()?.bindings.entry(name).or_default())
    }

    /// Bind `name` to `value` in the innermost frame, shadowing outer frames.
    pub fn bind_local(&mut self, name: Name, value: Value) -> Result<(), EvalError> {
        self.innermost()?.bindings.insert(name, value);
        Ok(())
    }

    /// Read `name` without declaring it.
    pub fn lookup(&self, name: Name) -> Option<Value> {
        self.frames
            .iter()
            .rev()
            .find_map(|frame| frame.bindings.get(&name).copied())
    }

    /// Whether the innermost frame binds `name`.
    pub fn is_local(&self, name: Name) -> bool {
        self.frames
            .last()
            .is_some_and(|frame| frame.bindings.contains_key(&name))
    }

    /// Overwrite the innermost frame's result slot.
    #[inline]
    pub fn set_return_value(&mut self, value: Value) -> Result<(), EvalError> {
        self.innermost()?.result = value;
        Ok(())
    }

    /// Read the innermost frame's result slot.
    #[inline]
    pub fn return_value(&self) -> Result<Value, EvalError> {
        self.frames
            .last()
            .map(|frame| frame.result)
            .ok_or(EvalError::EmptyScopeStack)
    }

    /// Register `name`, replacing any earlier definition. Returns the
    /// replaced entry.
    pub fn define_function(
        &mut self,
        name: Name,
        body: NodeId,
        params: Option<NodeId>,
    ) -> Option<FunctionEntry> {
        self.functions.insert(name, FunctionEntry { body, params })
    }

    /// Look up a function by name.
    pub fn resolve_function(&self, name: Name) -> Option<FunctionEntry> {
        self.functions.get(&name).copied()
    }

    pub fn function_count(&self) -> usize {
        self.functions.len()
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self::new()
    }
}
