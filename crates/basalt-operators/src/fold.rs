//! Host-side evaluation of catalogue operators over scalars and columns.
//!
//! This is the constant-folding path: the same semantics the generated
//! device kernels have, run on the CPU. [`apply`] dispatches one scalar
//! pair through the catalogue; the `map_*` helpers cover the three kernel
//! forms (vector⊕vector, vector⊕scalar, scalar⊕vector).

use basalt_core::{Error, Numeric, Result};
use num_traits::AsPrimitive;

use crate::catalogue::BinaryOperator;
use crate::semantics::{
    Add, Div, Equal, FloorDiv, Greater, GreaterEqual, Less, LessEqual, Mod, Modulo, Mul, NotEqual,
    Pow, RDiv, RFloorDiv, RGreater, RGreaterEqual, RLess, RLessEqual, RMod, RPow, RSub, RTrueDiv,
    Sub, TrueDiv,
};

/// Apply one catalogue operator to a pair of scalars.
///
/// The `Modulo` bound on the output type carries the compile-time gate for
/// `Mod`/`RMod` through the dispatcher; every supported numeric type
/// satisfies it.
///
/// Commutative reflected operators share the forward match arm; the alias
/// is structural, there is no second body to drift.
pub fn apply<Out, Lhs, Rhs>(op: BinaryOperator, x: Lhs, y: Rhs) -> Out
where
    Out: Modulo,
    Lhs: Numeric + AsPrimitive<Out>,
    Rhs: Numeric + AsPrimitive<Out>,
{
    match op {
        BinaryOperator::Add | BinaryOperator::RAdd => Add::operate(x, y),
        BinaryOperator::Sub => Sub::operate(x, y),
        BinaryOperator::RSub => RSub::operate(x, y),
        BinaryOperator::Mul | BinaryOperator::RMul => Mul::operate(x, y),
        BinaryOperator::Div => Div::operate(x, y),
        BinaryOperator::RDiv => RDiv::operate(x, y),
        BinaryOperator::TrueDiv => TrueDiv::operate(x, y),
        BinaryOperator::RTrueDiv => RTrueDiv::operate(x, y),
        BinaryOperator::FloorDiv => FloorDiv::operate(x, y),
        BinaryOperator::RFloorDiv => RFloorDiv::operate(x, y),
        BinaryOperator::Mod => Mod::operate(x, y),
        BinaryOperator::RMod => RMod::operate(x, y),
        BinaryOperator::Pow => Pow::operate(x, y),
        BinaryOperator::RPow => RPow::operate(x, y),
        BinaryOperator::Equal | BinaryOperator::REqual => Equal::operate(x, y),
        BinaryOperator::NotEqual | BinaryOperator::RNotEqual => NotEqual::operate(x, y),
        BinaryOperator::Less => Less::operate(x, y),
        BinaryOperator::RLess => RLess::operate(x, y),
        BinaryOperator::Greater => Greater::operate(x, y),
        BinaryOperator::RGreater => RGreater::operate(x, y),
        BinaryOperator::LessEqual => LessEqual::operate(x, y),
        BinaryOperator::RLessEqual => RLessEqual::operate(x, y),
        BinaryOperator::GreaterEqual => GreaterEqual::operate(x, y),
        BinaryOperator::RGreaterEqual => RGreaterEqual::operate(x, y),
    }
}

/// Apply an operator elementwise over two columns of equal length.
pub fn map_vv<Out, Lhs, Rhs>(op: BinaryOperator, lhs: &[Lhs], rhs: &[Rhs]) -> Result<Vec<Out>>
where
    Out: Modulo,
    Lhs: Numeric + AsPrimitive<Out>,
    Rhs: Numeric + AsPrimitive<Out>,
{
    if lhs.len() != rhs.len() {
        return Err(Error::Shape(format!(
            "column length mismatch: lhs {}, rhs {}",
            lhs.len(),
            rhs.len()
        )));
    }
    Ok(lhs
        .iter()
        .zip(rhs.iter())
        .map(|(&x, &y)| apply(op, x, y))
        .collect())
}

/// Apply an operator over a column and a right-hand scalar.
pub fn map_vs<Out, Lhs, Rhs>(op: BinaryOperator, lhs: &[Lhs], rhs: Rhs) -> Vec<Out>
where
    Out: Modulo,
    Lhs: Numeric + AsPrimitive<Out>,
    Rhs: Numeric + AsPrimitive<Out>,
{
    lhs.iter().map(|&x| apply(op, x, rhs)).collect()
}

/// Apply an operator over a left-hand scalar and a column.
pub fn map_sv<Out, Lhs, Rhs>(op: BinaryOperator, lhs: Lhs, rhs: &[Rhs]) -> Vec<Out>
where
    Out: Modulo,
    Lhs: Numeric + AsPrimitive<Out>,
    Rhs: Numeric + AsPrimitive<Out>,
{
    rhs.iter().map(|&y| apply(op, lhs, y)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_vv_length_mismatch() {
        let lhs = [1i32, 2, 3];
        let rhs = [1i32, 2];
        let err = map_vv::<i32, _, _>(BinaryOperator::Add, &lhs, &rhs).unwrap_err();
        assert!(matches!(err, Error::Shape(_)));
    }

    #[test]
    fn test_map_vv_add() {
        let lhs = [1i32, 2, 3, 4];
        let rhs = [5i32, 6, 7, 8];
        let out: Vec<i32> = map_vv(BinaryOperator::Add, &lhs, &rhs).unwrap();
        assert_eq!(out, vec![6, 8, 10, 12]);
    }

    #[test]
    fn test_map_vs_reflected_sub() {
        // evaluating `5 - col` through the vector⊕scalar kernel shape
        let col = [1i32, 2, 3];
        let forward: Vec<i32> = map_vs(BinaryOperator::Sub, &col, 5i32);
        let reflected: Vec<i32> = map_vs(BinaryOperator::RSub, &col, 5i32);
        assert_eq!(forward, vec![-4, -3, -2]);
        assert_eq!(reflected, vec![4, 3, 2]);
    }

    #[test]
    fn test_map_sv_matches_swapped_vs() {
        let col = [2.0f64, 4.0, 8.0];
        let sv: Vec<f64> = map_sv(BinaryOperator::Div, 16.0f64, &col);
        let vs: Vec<f64> = map_vs(BinaryOperator::RDiv, &col, 16.0f64);
        assert_eq!(sv, vs);
    }

    #[test]
    fn test_mixed_operand_types_promote_to_output() {
        let lhs = [1i32, 2, 3];
        let out: Vec<f64> = map_vs(BinaryOperator::Add, &lhs, 0.5f32);
        assert_eq!(out, vec![1.5, 2.5, 3.5]);
    }
}
