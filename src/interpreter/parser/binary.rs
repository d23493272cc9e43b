use crate::{
    ast::{BinaryOperator, Expr},
    interpreter::{
        cursor::Cursor,
        parser::{core::ParseResult, factor::parse_factor},
    },
};

/// Parses addition and subtraction expressions.
///
/// Handles left-associative binary operators: `+` and `-`.
///
/// The rule is: `expr := term (("+" | "-") term)*`
///
/// # Parameters
/// - `cursor`: Cursor positioned at the first operand.
///
/// # Returns
/// An `Expr::BinaryOp` tree folded left to right, or the single operand.
///
/// # Errors
/// Every fold makes the tree one level deeper, so a long operator chain ends
/// in `NestingTooDeep` just like deep parentheses do.
pub fn parse_additive(cursor: &mut Cursor) -> ParseResult<Expr> {
    let mut left = parse_multiplicative(cursor)?;
    let mut folds = 0;
    while let Some(op) = peek_operator(cursor, &[BinaryOperator::Add, BinaryOperator::Sub]) {
        let line = cursor.line();
        cursor.consume_char();
        cursor.enter_nesting()?;
        folds += 1;
        let right = parse_multiplicative(cursor)?;
        left = Expr::BinaryOp { left: Box::new(left),
                                op,
                                right: Box::new(right),
                                line };
    }
    cursor.leave_nesting(folds);
    Ok(left)
}

/// Parses multiplication-level expressions.
///
/// Handles left-associative operators `*` and `/`.
///
/// The rule is: `term := power (("*" | "/") power)*`
pub fn parse_multiplicative(cursor: &mut Cursor) -> ParseResult<Expr> {
    let mut left = parse_exponent(cursor)?;
    let mut folds = 0;
    while let Some(op) = peek_operator(cursor, &[BinaryOperator::Mul, BinaryOperator::Div]) {
        let line = cursor.line();
        cursor.consume_char();
        cursor.enter_nesting()?;
        folds += 1;
        let right = parse_exponent(cursor)?;
        left = Expr::BinaryOp { left: Box::new(left),
                                op,
                                right: Box::new(right),
                                line };
    }
    cursor.leave_nesting(folds);
    Ok(left)
}

/// Parses exponentiation expressions.
///
/// Exponentiation is right-associative: `a ^ b ^ c` parses as `a ^ (b ^ c)`.
/// The right operand is parsed by recursing into this rule rather than by
/// looping.
///
/// The rule is: `power := factor ("^" power)?`
pub fn parse_exponent(cursor: &mut Cursor) -> ParseResult<Expr> {
    let base = parse_factor(cursor)?;
    if peek_operator(cursor, &[BinaryOperator::Pow]).is_none() {
        return Ok(base);
    }

    let line = cursor.line();
    cursor.consume_char();
    cursor.enter_nesting()?;
    let exponent = parse_exponent(cursor)?;
    cursor.leave_nesting(1);
    Ok(Expr::BinaryOp { left: Box::new(base),
                        op: BinaryOperator::Pow,
                        right: Box::new(exponent),
                        line })
}

/// Returns the operator at the cursor if it is one of `accepted`, without
/// consuming it.
fn peek_operator(cursor: &Cursor, accepted: &[BinaryOperator]) -> Option<BinaryOperator> {
    let c = cursor.peek_char()?;
    accepted.iter().copied().find(|op| op.symbol() == c)
}
