//! Error types for kernel source assembly.

use thiserror::Error;

/// Result type for codegen operations.
pub type Result<T> = std::result::Result<T, CodegenError>;

/// Errors that can occur while resolving a kernel request.
///
/// These are all caller errors: the catalogue and the type set are closed,
/// so a failed lookup means the request itself was wrong. There is no
/// recovery path.
#[derive(Debug, Error)]
pub enum CodegenError {
    #[error("Unknown operator: {0}")]
    UnknownOperator(String),

    #[error("Unknown data type: {0}")]
    UnknownDataType(String),

    #[error("Unknown kernel form: {0}")]
    UnknownKernelForm(String),
}
