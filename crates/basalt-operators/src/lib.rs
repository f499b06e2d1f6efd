//! Binary operator catalogue and type-generic semantics for basalt.
//!
//! This crate is the operation library itself: a closed set of named binary
//! operators over numeric columns, each exposing one generic entry point
//!
//! ```ignore
//! Op::operate::<TypeOut, TypeLhs, TypeRhs>(x, y) -> TypeOut
//! ```
//!
//! with the output type chosen by the caller. Every operator has a
//! reflected (operand-swapped) counterpart; for commutative operators the
//! reflected name is a literal alias of the forward definition, never a
//! second implementation.
//!
//! # Families
//!
//! - **Arithmetic**: Add, Sub, Mul, Div, TrueDiv, FloorDiv, Mod, Pow
//! - **Comparison**: Equal, NotEqual, Less, Greater, LessEqual, GreaterEqual
//!
//! The [`catalogue::BinaryOperator`] enum enumerates all 28 names (forward
//! plus reflected) and is what the code generator selects operators from.
//! [`fold`] provides the host-side evaluation used for constant folding.

pub mod catalogue;
pub mod fold;
pub mod semantics;

pub use catalogue::BinaryOperator;
pub use fold::{apply, map_sv, map_vs, map_vv};
pub use semantics::Modulo;

// The crate reuses basalt-core's error type; fold helpers report bad column
// shapes through it.
pub use basalt_core::{Error, Result};
