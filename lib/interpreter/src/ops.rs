use parser::Operator;

use crate::{Error, Result};

/// Applies a binary operator to two evaluated operands, refusing to leave the `i64` range.
pub fn apply(operator: Operator, l: i64, r: i64) -> Result<i64> {
    match operator {
        Operator::Add => l.checked_add(r).ok_or(Error::Overflow),
        // Subtracting `i64::MIN` is rejected even where the difference would fit,
        // since `-r` is not representable.
        Operator::Sub if r == i64::MIN => Err(Error::Overflow),
        Operator::Sub => l.checked_sub(r).ok_or(Error::Overflow),
        Operator::Mul => l.checked_mul(r).ok_or(Error::Overflow),
        Operator::Div if r == 0 => Err(Error::DivisionByZero),
        // Only `i64::MIN / -1` is left to fail here
        Operator::Div => l.checked_div(r).ok_or(Error::Overflow),
    }
}
