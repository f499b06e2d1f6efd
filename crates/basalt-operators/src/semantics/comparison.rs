//! Comparison operator family.
//!
//! Covers: Equal, NotEqual, Less, Greater, LessEqual, GreaterEqual and
//! their reflected forms.
//!
//! Operands of different types are compared in double precision, the
//! library's common internal precision. The boolean result is materialized
//! in the caller's output type as 1 or 0, so a comparison can feed an
//! integer output column directly. NaN compares unequal and unordered, as
//! in the host arithmetic.

use basalt_core::Numeric;

/// `x == y`, materialized as 1/0 in the output type.
pub struct Equal;

impl Equal {
    pub fn operate<Out, Lhs, Rhs>(x: Lhs, y: Rhs) -> Out
    where
        Out: Numeric,
        Lhs: Numeric,
        Rhs: Numeric,
    {
        Out::from_bool(x.to_f64() == y.to_f64())
    }
}

/// Equality commutes; the reflected name is the same definition.
pub type REqual = Equal;

/// `x != y`, materialized as 1/0 in the output type.
pub struct NotEqual;

impl NotEqual {
    pub fn operate<Out, Lhs, Rhs>(x: Lhs, y: Rhs) -> Out
    where
        Out: Numeric,
        Lhs: Numeric,
        Rhs: Numeric,
    {
        Out::from_bool(x.to_f64() != y.to_f64())
    }
}

/// Inequality commutes; the reflected name is the same definition.
pub type RNotEqual = NotEqual;

/// `x < y`, materialized as 1/0 in the output type.
pub struct Less;

impl Less {
    pub fn operate<Out, Lhs, Rhs>(x: Lhs, y: Rhs) -> Out
    where
        Out: Numeric,
        Lhs: Numeric,
        Rhs: Numeric,
    {
        Out::from_bool(x.to_f64() < y.to_f64())
    }
}

/// Reflected `Less`: `y < x`.
pub struct RLess;

impl RLess {
    pub fn operate<Out, Lhs, Rhs>(x: Lhs, y: Rhs) -> Out
    where
        Out: Numeric,
        Lhs: Numeric,
        Rhs: Numeric,
    {
        Less::operate(y, x)
    }
}

/// `x > y`, materialized as 1/0 in the output type.
pub struct Greater;

impl Greater {
    pub fn operate<Out, Lhs, Rhs>(x: Lhs, y: Rhs) -> Out
    where
        Out: Numeric,
        Lhs: Numeric,
        Rhs: Numeric,
    {
        Out::from_bool(x.to_f64() > y.to_f64())
    }
}

/// Reflected `Greater`: `y > x`.
pub struct RGreater;

impl RGreater {
    pub fn operate<Out, Lhs, Rhs>(x: Lhs, y: Rhs) -> Out
    where
        Out: Numeric,
        Lhs: Numeric,
        Rhs: Numeric,
    {
        Greater::operate(y, x)
    }
}

/// `x <= y`, materialized as 1/0 in the output type.
pub struct LessEqual;

impl LessEqual {
    pub fn operate<Out, Lhs, Rhs>(x: Lhs, y: Rhs) -> Out
    where
        Out: Numeric,
        Lhs: Numeric,
        Rhs: Numeric,
    {
        Out::from_bool(x.to_f64() <= y.to_f64())
    }
}

/// Reflected `LessEqual`: `y <= x`.
pub struct RLessEqual;

impl RLessEqual {
    pub fn operate<Out, Lhs, Rhs>(x: Lhs, y: Rhs) -> Out
    where
        Out: Numeric,
        Lhs: Numeric,
        Rhs: Numeric,
    {
        LessEqual::operate(y, x)
    }
}

/// `x >= y`, materialized as 1/0 in the output type.
pub struct GreaterEqual;

impl GreaterEqual {
    pub fn operate<Out, Lhs, Rhs>(x: Lhs, y: Rhs) -> Out
    where
        Out: Numeric,
        Lhs: Numeric,
        Rhs: Numeric,
    {
        Out::from_bool(x.to_f64() >= y.to_f64())
    }
}

/// Reflected `GreaterEqual`: `y >= x`.
pub struct RGreaterEqual;

impl RGreaterEqual {
    pub fn operate<Out, Lhs, Rhs>(x: Lhs, y: Rhs) -> Out
    where
        Out: Numeric,
        Lhs: Numeric,
        Rhs: Numeric,
    {
        GreaterEqual::operate(y, x)
    }
}
