//! Embedded device source blocks.
//!
//! The operator library and the kernel shapes are fixed text, embedded at
//! build time and substituted verbatim into every assembled unit. The trait
//! preamble they compile against (`isIntegral`, `isFloat`, `isDouble`,
//! `enableIf`) is supplied by the caller at assembly time; it is not part
//! of this crate.

/// The operator functor library: one struct per forward operator, alias
/// lines for commutative reflections, trait-gated overloads for `Mod` and
/// `RMod`.
pub fn operation_source() -> &'static str {
    include_str!("../device/operation.cu")
}

/// The three elementwise kernel shapes (vector⊕vector, vector⊕scalar,
/// scalar⊕vector) as generic templates.
pub fn kernel_source() -> &'static str {
    include_str!("../device/kernel.cu")
}
