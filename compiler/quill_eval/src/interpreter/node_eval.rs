//! Per-node evaluation.

use quill_ir::{ArithOp, Node, NodeId};

use super::Interpreter;
use crate::errors::{dangling_node, EvalResult};
use crate::value::{from_bool, is_truthy};

impl Interpreter<'_> {
    #[tracing::instrument(level = "trace", skip(self))]
    pub(super) fn eval_node(&mut self, id: NodeId) -> EvalResult {
        // The arena outlives the interpreter borrow, so `node` can be held
        // across recursive calls.
        let arena = self.arena;
        let node = arena.try_get(id).ok_or_else(|| dangling_node(id))?;
        match node {
            Node::Literal(value) => Ok(*value),

            // Labels only mean something to their parent node.
            Node::Name(_) => Ok(0),

            Node::Variable(name) => Ok(*self.variable_slot(*name)?),

            Node::Assign { target, value } => {
                let value = self.eval(*value)?;
                *self.variable_slot(*target)? = value;
                Ok(value)
            }

            Node::Sequence { first, second } => {
                let value = self.eval(*first)?;
                self.eval(*second)?;
                Ok(value)
            }

            Node::Block(inner) => {
                let mut scoped = self.scoped();
                scoped.eval(*inner)?;
                scoped.env.return_value()
            }

            Node::Return(inner) => {
                let value = self.eval(*inner)?;
                self.env.set_return_value(value)?;
                Ok(value)
            }

            Node::Arith { op, left, right } => {
                let left = self.eval(*left)?;
                let right = self.eval(*right)?;
                Ok(match op {
                    ArithOp::Plus => left.wrapping_add(right),
                    ArithOp::Minus => left.wrapping_sub(right),
                    ArithOp::Mult => left.wrapping_mul(right),
                })
            }

            Node::Equals { left, right } => {
                let left = self.eval(*left)?;
                let right = self.eval(*right)?;
                Ok(from_bool(left == right))
            }

            // Both operands are always evaluated; there is no short-circuit.
            Node::Logic { op, left, right } => {
                let left = is_truthy(self.eval(*left)?);
                let right = is_truthy(self.eval(*right)?);
                Ok(from_bool(op.apply(left, right)))
            }

            Node::Not(operand) => Ok(from_bool(!is_truthy(self.eval(*operand)?))),

            Node::If { cond, body } => {
                if is_truthy(self.eval(*cond)?) {
                    self.eval(*body)
                } else {
                    Ok(0)
                }
            }

            Node::Log(inner) => {
                let value = self.eval(*inner)?;
                self.print_handler.println(&value.to_string());
                Ok(value)
            }

            Node::FunctionDef { name, params, body } => {
                let replaced = self.env.define_function(*name, *body, *params);
                tracing::debug!(
                    function = self.interner.lookup(*name),
                    redefined = replaced.is_some(),
                    "function registered"
                );
                Ok(0)
            }

            // Plain evaluation sees only the head; calls walk the rest.
            Node::Tuple { current, .. } => self.eval(*current),

            Node::Call { name, args } => self.eval_call(*name, *args),
        }
    }
}
