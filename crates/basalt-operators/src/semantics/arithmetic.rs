//! Arithmetic operator family.
//!
//! Covers: Add, Sub, Mul, Div, TrueDiv, FloorDiv, Mod, Pow and their
//! reflected forms.
//!
//! Two casting disciplines exist in this family:
//! - `Add`, `Sub`, `Mul`, `Div` and `Mod` cast both operands to the output
//!   type first and operate there, so truncation and wrapping are properties
//!   of the output type's class.
//! - `TrueDiv`, `FloorDiv` and `Pow` do their core math in double precision
//!   regardless of the output type, narrowing only at the end. This keeps
//!   `TrueDiv::operate::<f64>(7i32, 2i32)` at `3.5` instead of the integer
//!   quotient.

use basalt_core::Numeric;
use num_traits::AsPrimitive;

/// Elementwise addition: `(TypeOut)x + (TypeOut)y`.
pub struct Add;

impl Add {
    pub fn operate<Out, Lhs, Rhs>(x: Lhs, y: Rhs) -> Out
    where
        Out: Numeric,
        Lhs: Numeric + AsPrimitive<Out>,
        Rhs: Numeric + AsPrimitive<Out>,
    {
        Out::native_add(x.as_(), y.as_())
    }
}

/// Addition commutes; the reflected name is the same definition.
pub type RAdd = Add;

/// Elementwise subtraction: `(TypeOut)x - (TypeOut)y`.
pub struct Sub;

impl Sub {
    pub fn operate<Out, Lhs, Rhs>(x: Lhs, y: Rhs) -> Out
    where
        Out: Numeric,
        Lhs: Numeric + AsPrimitive<Out>,
        Rhs: Numeric + AsPrimitive<Out>,
    {
        Out::native_sub(x.as_(), y.as_())
    }
}

/// Reflected subtraction: `Sub` with the operands swapped.
pub struct RSub;

impl RSub {
    pub fn operate<Out, Lhs, Rhs>(x: Lhs, y: Rhs) -> Out
    where
        Out: Numeric,
        Lhs: Numeric + AsPrimitive<Out>,
        Rhs: Numeric + AsPrimitive<Out>,
    {
        Sub::operate(y, x)
    }
}

/// Elementwise multiplication: `(TypeOut)x * (TypeOut)y`.
pub struct Mul;

impl Mul {
    pub fn operate<Out, Lhs, Rhs>(x: Lhs, y: Rhs) -> Out
    where
        Out: Numeric,
        Lhs: Numeric + AsPrimitive<Out>,
        Rhs: Numeric + AsPrimitive<Out>,
    {
        Out::native_mul(x.as_(), y.as_())
    }
}

/// Multiplication commutes; the reflected name is the same definition.
pub type RMul = Mul;

/// Elementwise division in the output type: truncates when the output type
/// is integral, IEEE division otherwise.
pub struct Div;

impl Div {
    pub fn operate<Out, Lhs, Rhs>(x: Lhs, y: Rhs) -> Out
    where
        Out: Numeric,
        Lhs: Numeric + AsPrimitive<Out>,
        Rhs: Numeric + AsPrimitive<Out>,
    {
        Out::native_div(x.as_(), y.as_())
    }
}

/// Reflected division: `Div` with the operands swapped.
pub struct RDiv;

impl RDiv {
    pub fn operate<Out, Lhs, Rhs>(x: Lhs, y: Rhs) -> Out
    where
        Out: Numeric,
        Lhs: Numeric + AsPrimitive<Out>,
        Rhs: Numeric + AsPrimitive<Out>,
    {
        Div::operate(y, x)
    }
}

/// Division carried out in double precision regardless of the output type,
/// then narrowed.
pub struct TrueDiv;

impl TrueDiv {
    pub fn operate<Out, Lhs, Rhs>(x: Lhs, y: Rhs) -> Out
    where
        Out: Numeric,
        Lhs: Numeric,
        Rhs: Numeric,
    {
        Out::from_f64(x.to_f64() / y.to_f64())
    }
}

/// Reflected `TrueDiv`.
pub struct RTrueDiv;

impl RTrueDiv {
    pub fn operate<Out, Lhs, Rhs>(x: Lhs, y: Rhs) -> Out
    where
        Out: Numeric,
        Lhs: Numeric,
        Rhs: Numeric,
    {
        TrueDiv::operate(y, x)
    }
}

/// Double-precision division floored before narrowing.
///
/// Floors rather than truncates: `FloorDiv::operate::<f64>(-7, 2)` is `-4.0`.
pub struct FloorDiv;

impl FloorDiv {
    pub fn operate<Out, Lhs, Rhs>(x: Lhs, y: Rhs) -> Out
    where
        Out: Numeric,
        Lhs: Numeric,
        Rhs: Numeric,
    {
        Out::from_f64((x.to_f64() / y.to_f64()).floor())
    }
}

/// Reflected `FloorDiv`.
pub struct RFloorDiv;

impl RFloorDiv {
    pub fn operate<Out, Lhs, Rhs>(x: Lhs, y: Rhs) -> Out
    where
        Out: Numeric,
        Lhs: Numeric,
        Rhs: Numeric,
    {
        FloorDiv::operate(y, x)
    }
}

/// Output-type gate for `Mod` and `RMod`.
///
/// The remainder has three distinct bodies, selected at compile time from
/// the output type's class:
/// - integral types use the native `%` (wrapping, truncated toward zero)
/// - `f32` uses the single-precision fmod
/// - `f64` uses the double-precision fmod
///
/// Exactly one impl exists per supported type. Instantiating `Mod` with an
/// output type that has no impl is a compile error, which is the intended
/// failure mode; there is no runtime fallback. Coherence rules out blanket
/// impls over the `Integral`/`SingleFloat`/`DoubleFloat` markers, so the
/// integral body is stamped per type below.
pub trait Modulo: Numeric {
    fn modulo(x: Self, y: Self) -> Self;
}

macro_rules! impl_integral_modulo {
    ($($t:ty),* $(,)?) => {$(
        impl Modulo for $t {
            fn modulo(x: Self, y: Self) -> Self {
                x.wrapping_rem(y)
            }
        }
    )*};
}

impl_integral_modulo!(i8, i16, i32, i64, u8, u16, u32, u64);

impl Modulo for f32 {
    fn modulo(x: Self, y: Self) -> Self {
        // single-precision fmod
        x % y
    }
}

impl Modulo for f64 {
    fn modulo(x: Self, y: Self) -> Self {
        // double-precision fmod
        x % y
    }
}

/// Elementwise remainder in the output type; see [`Modulo`] for the
/// per-class bodies.
pub struct Mod;

impl Mod {
    pub fn operate<Out, Lhs, Rhs>(x: Lhs, y: Rhs) -> Out
    where
        Out: Modulo,
        Lhs: Numeric + AsPrimitive<Out>,
        Rhs: Numeric + AsPrimitive<Out>,
    {
        Out::modulo(x.as_(), y.as_())
    }
}

/// Reflected `Mod`.
pub struct RMod;

impl RMod {
    pub fn operate<Out, Lhs, Rhs>(x: Lhs, y: Rhs) -> Out
    where
        Out: Modulo,
        Lhs: Numeric + AsPrimitive<Out>,
        Rhs: Numeric + AsPrimitive<Out>,
    {
        Mod::operate(y, x)
    }
}

/// Exponentiation in double precision, narrowed to the output type.
pub struct Pow;

impl Pow {
    pub fn operate<Out, Lhs, Rhs>(x: Lhs, y: Rhs) -> Out
    where
        Out: Numeric,
        Lhs: Numeric,
        Rhs: Numeric,
    {
        Out::from_f64(x.to_f64().powf(y.to_f64()))
    }
}

/// Reflected `Pow`: `pow(y, x)`.
pub struct RPow;

impl RPow {
    pub fn operate<Out, Lhs, Rhs>(x: Lhs, y: Rhs) -> Out
    where
        Out: Numeric,
        Lhs: Numeric,
        Rhs: Numeric,
    {
        Pow::operate(y, x)
    }
}
