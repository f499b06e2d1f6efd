//! Data-type model and numeric trait preamble for basalt.
//!
//! This crate provides the foundations the operator catalogue and the
//! kernel codegen build on:
//! - The supported numeric types (`DataType`) and their classification
//!   into mutually exclusive type classes (`TypeClass`)
//! - The `Numeric` trait family binding Rust primitives to those types,
//!   with the marker traits (`Integral`, `SingleFloat`, `DoubleFloat`)
//!   used for compile-time gated operator selection

pub mod numeric;
pub mod types;

pub use numeric::{DoubleFloat, Integral, Numeric, SingleFloat};
pub use types::{DataType, TypeClass};

/// Result type using the crate's error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type shared by the basalt crates.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Shape error: {0}")]
    Shape(String),
}
