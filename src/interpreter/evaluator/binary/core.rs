use crate::{
    ast::BinaryOperator,
    interpreter::evaluator::core::{Context, EvalResult},
};

impl Context {
    /// Applies a binary operator to two already evaluated operands.
    ///
    /// # Parameters
    /// - `left`: Left operand.
    /// - `op`: The operator.
    /// - `right`: Right operand.
    /// - `line`: Line number for error reporting.
    pub fn eval_binary_op(&self,
                          left: i64,
                          op: BinaryOperator,
                          right: i64,
                          line: usize)
                          -> EvalResult<i64> {
        let policy = self.config.overflow;
        match op {
            BinaryOperator::Add => Self::eval_add(left, right, policy, line),
            BinaryOperator::Sub => Self::eval_sub(left, right, policy, line),
            BinaryOperator::Mul => Self::eval_mul(left, right, policy, line),
            BinaryOperator::Div => Self::eval_div(left, right, policy, line),
            BinaryOperator::Pow => Self::eval_pow(left, right, policy, line),
        }
    }
}
