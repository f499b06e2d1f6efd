//! Operator semantics: one stateless struct per forward operator, with
//! reflected forms as literal aliases (commutative) or operand-swapping
//! delegations (everything else).
//!
//! All structs expose the same shape of entry point:
//!
//! ```
//! use basalt_operators::semantics::Sub;
//!
//! let d: f64 = Sub::operate(7i32, 2u8);
//! assert_eq!(d, 5.0);
//! ```
//!
//! The output type is always chosen by the caller; it is never inferred
//! from the operands.

pub mod arithmetic;
pub mod comparison;

pub use arithmetic::{
    Add, Div, FloorDiv, Mod, Modulo, Mul, Pow, RAdd, RDiv, RFloorDiv, RMod, RMul, RPow, RSub,
    RTrueDiv, Sub, TrueDiv,
};
pub use comparison::{
    Equal, Greater, GreaterEqual, Less, LessEqual, NotEqual, REqual, RGreater, RGreaterEqual,
    RLess, RLessEqual, RNotEqual,
};
