//! Function call evaluation.

use quill_ir::{Name, NodeId};

use super::Interpreter;
use crate::errors::{
    arity_mismatch, dangling_node, invalid_parameter, undefined_function, EvalResult,
};
use crate::Value;

impl Interpreter<'_> {
    /// Call `name` with the argument list `args`.
    ///
    /// Lookup, arity and parameter checks all happen before the call frame
    /// is pushed, so a failed call leaves the environment untouched and
    /// evaluates nothing. Arguments are then evaluated in order inside the
    /// new frame, each bound to its parameter before the next is evaluated.
    /// In `EvalMode::FrameLocal` the arguments are evaluated in the caller's
    /// frame instead, before the call frame exists.
    /// The call yields the body's own value, not the frame's result slot.
    #[tracing::instrument(
        level = "debug",
        skip_all,
        fields(function = self.interner.lookup(name))
    )]
    pub(super) fn eval_call(&mut self, name: Name, args: Option<NodeId>) -> EvalResult {
        let arena = self.arena;
        let function_name = self.interner.lookup(name);

        let Some(function) = self.env.resolve_function(name) else {
            return Err(undefined_function(function_name));
        };

        let expected = arena.tuple_len(function.params);
        let got = arena.tuple_len(args);
        if expected != got {
            return Err(arity_mismatch(function_name, expected, got));
        }

        let params = arena
            .tuple_items(function.params)
            .map(|id| {
                let node = arena.try_get(id).ok_or_else(|| dangling_node(id))?;
                node.as_param_name()
                    .ok_or_else(|| invalid_parameter(function_name, node.kind()))
            })
            .collect::<Result<Vec<Name>, _>>()?;

        // Frame-local resolution can't see the caller's bindings from inside
        // the call frame, so arguments are evaluated before it is pushed.
        if !self.mode.sees_enclosing_frames() {
            let values = arena
                .tuple_items(args)
                .map(|arg| self.eval(arg))
                .collect::<Result<Vec<Value>, _>>()?;
            let mut scoped = self.scoped();
            for (param, value) in params.into_iter().zip(values) {
                scoped.env.bind_local(param, value)?;
            }
            return scoped.eval(function.body);
        }

        let mut scoped = self.scoped();
        for (param, arg) in params.into_iter().zip(arena.tuple_items(args)) {
            let value = scoped.eval(arg)?;
            scoped.env.bind_local(param, value)?;
        }
        scoped.eval(function.body)
    }
}
