//! Device source assembly for specialized binary-operation kernels.
//!
//! This crate is the textual side of the operation library: it embeds the
//! operator functor block and the elementwise kernel shapes, and assembles
//! complete translation units for the JIT driver, one per
//! `(operator, TypeOut, TypeLhs, TypeRhs, form)` specialization.
//!
//! The driver hands over its trait preamble and a [`KernelRequest`]; this
//! crate returns text. Compiling and launching that text is the driver's
//! business.
//!
//! # Example
//!
//! ```
//! use basalt_codegen::{resolve_operator, KernelForm, KernelRequest, UnitCache};
//! use basalt_core::DataType;
//!
//! let op = resolve_operator("Add").unwrap();
//! let request = KernelRequest::new(
//!     op,
//!     DataType::F64,
//!     DataType::I32,
//!     DataType::I32,
//!     KernelForm::VectorVector,
//! );
//!
//! let mut cache = UnitCache::new("// trait preamble supplied by the driver\n");
//! let unit = cache.unit(&request);
//! assert!(unit.contains("struct Add {"));
//! ```

pub mod error;
pub mod kernel;
pub mod sources;

pub use error::{CodegenError, Result};
pub use kernel::{KernelForm, KernelRequest, UnitCache};
pub use sources::{kernel_source, operation_source};

use basalt_core::DataType;
use basalt_operators::BinaryOperator;

/// Resolve an operator by its exact catalogue name.
///
/// The catalogue is closed; anything else is a caller error.
pub fn resolve_operator(name: &str) -> Result<BinaryOperator> {
    BinaryOperator::from_name(name).ok_or_else(|| CodegenError::UnknownOperator(name.to_string()))
}

/// Resolve a data type by its short name (`i32`, `f64`, ...).
pub fn resolve_data_type(name: &str) -> Result<DataType> {
    DataType::from_name(name).ok_or_else(|| CodegenError::UnknownDataType(name.to_string()))
}

/// Resolve a kernel form by its short name (`vv`, `vs`, `sv`).
pub fn resolve_form(name: &str) -> Result<KernelForm> {
    KernelForm::from_name(name).ok_or_else(|| CodegenError::UnknownKernelForm(name.to_string()))
}
