//! Kernel request resolution and unit assembly.
//!
//! The JIT driver names an operator, three concrete types and a kernel
//! form; this module turns that into a complete translation unit: the
//! caller's trait preamble, the operator library, the kernel shapes, and
//! an explicit instantiation of the requested specialization. Units are
//! cached by label so repeated requests assemble once.

use std::collections::hash_map::Entry;
use std::collections::HashMap;

use basalt_core::DataType;
use basalt_operators::BinaryOperator;
use tracing::debug;

use crate::sources::{kernel_source, operation_source};

/// Operand layout of the generated kernel.
///
/// The reflected operator table exists so the scalar forms can serve both
/// operand orders: `5 - col` compiles as `kernel_v_s` with `RSub` rather
/// than needing a third scalar slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KernelForm {
    /// Both operands are columns of equal length.
    VectorVector,
    /// Left operand is a column, right operand a scalar.
    VectorScalar,
    /// Left operand is a scalar, right operand a column.
    ScalarVector,
}

impl KernelForm {
    /// All kernel forms.
    pub const ALL: [KernelForm; 3] = [
        KernelForm::VectorVector,
        KernelForm::VectorScalar,
        KernelForm::ScalarVector,
    ];

    /// Entry point name in the kernel source.
    pub fn entry_point(self) -> &'static str {
        match self {
            KernelForm::VectorVector => "kernel_v_v",
            KernelForm::VectorScalar => "kernel_v_s",
            KernelForm::ScalarVector => "kernel_s_v",
        }
    }

    /// Short name used in labels and on the command line.
    pub fn name(self) -> &'static str {
        match self {
            KernelForm::VectorVector => "vv",
            KernelForm::VectorScalar => "vs",
            KernelForm::ScalarVector => "sv",
        }
    }

    /// Look up a kernel form by its short name.
    pub fn from_name(name: &str) -> Option<Self> {
        KernelForm::ALL.iter().copied().find(|f| f.name() == name)
    }
}

/// One specialization request: operator, concrete types, operand layout.
///
/// The output type is chosen by the driver, not inferred from the operands;
/// promotion decisions happen upstream of this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KernelRequest {
    pub op: BinaryOperator,
    pub out: DataType,
    pub lhs: DataType,
    pub rhs: DataType,
    pub form: KernelForm,
}

impl KernelRequest {
    pub fn new(
        op: BinaryOperator,
        out: DataType,
        lhs: DataType,
        rhs: DataType,
        form: KernelForm,
    ) -> Self {
        Self {
            op,
            out,
            lhs,
            rhs,
            form,
        }
    }

    /// Cache label: operator, types and form, unique per specialization.
    pub fn label(&self) -> String {
        format!(
            "{}_{}_{}_{}_{}",
            self.op,
            self.out.name(),
            self.lhs.name(),
            self.rhs.name(),
            self.form.name()
        )
    }

    /// The explicit template instantiation for this request.
    pub fn instantiation(&self) -> String {
        let out = self.out.device_name();
        let lhs = self.lhs.device_name();
        let rhs = self.rhs.device_name();
        let args = match self.form {
            KernelForm::VectorVector => format!("int, {out}*, const {lhs}*, const {rhs}*"),
            KernelForm::VectorScalar => format!("int, {out}*, const {lhs}*, {rhs}"),
            KernelForm::ScalarVector => format!("int, {out}*, {lhs}, const {rhs}*"),
        };
        format!(
            "template __global__ void {entry}<{out}, {lhs}, {rhs}, {op}>({args});",
            entry = self.form.entry_point(),
            op = self.op,
        )
    }

    /// Assemble the complete translation unit for this request.
    ///
    /// `preamble` is the trait header the operator library compiles
    /// against; the driver owns it and passes it in verbatim.
    pub fn assemble(&self, preamble: &str) -> String {
        let mut unit = String::with_capacity(
            preamble.len() + operation_source().len() + kernel_source().len() + 256,
        );
        unit.push_str(preamble);
        unit.push('\n');
        unit.push_str(operation_source());
        unit.push('\n');
        unit.push_str(kernel_source());
        unit.push('\n');
        unit.push_str(&self.instantiation());
        unit.push('\n');
        unit
    }
}

/// Deduplicating store of assembled units, keyed by request label.
///
/// Owns the trait preamble all units share. Repeated requests for the same
/// specialization return the already-assembled text.
pub struct UnitCache {
    preamble: String,
    units: HashMap<String, String>,
}

impl UnitCache {
    pub fn new(preamble: impl Into<String>) -> Self {
        Self {
            preamble: preamble.into(),
            units: HashMap::new(),
        }
    }

    /// Get the assembled unit for a request, rendering it on first use.
    pub fn unit(&mut self, request: &KernelRequest) -> &str {
        match self.units.entry(request.label()) {
            Entry::Occupied(entry) => entry.into_mut(),
            Entry::Vacant(entry) => {
                debug!(label = %entry.key(), "assembling kernel unit");
                entry.insert(request.assemble(&self.preamble))
            }
        }
    }

    /// Number of distinct units assembled so far.
    pub fn len(&self) -> usize {
        self.units.len()
    }

    /// Whether no unit has been assembled yet.
    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> KernelRequest {
        KernelRequest::new(
            BinaryOperator::Add,
            DataType::F64,
            DataType::I32,
            DataType::F32,
            KernelForm::VectorVector,
        )
    }

    #[test]
    fn test_label_is_unique_per_specialization() {
        let a = request();
        let mut b = request();
        assert_eq!(a.label(), "Add_f64_i32_f32_vv");
        b.form = KernelForm::ScalarVector;
        assert_ne!(a.label(), b.label());
    }

    #[test]
    fn test_instantiation_text() {
        assert_eq!(
            request().instantiation(),
            "template __global__ void kernel_v_v<double, int32_t, float, Add>\
             (int, double*, const int32_t*, const float*);"
        );

        let scalar = KernelRequest::new(
            BinaryOperator::RSub,
            DataType::I64,
            DataType::I64,
            DataType::I32,
            KernelForm::VectorScalar,
        );
        assert_eq!(
            scalar.instantiation(),
            "template __global__ void kernel_v_s<int64_t, int64_t, int32_t, RSub>\
             (int, int64_t*, const int64_t*, int32_t);"
        );
    }

    #[test]
    fn test_kernel_form_names() {
        for form in KernelForm::ALL {
            assert_eq!(KernelForm::from_name(form.name()), Some(form));
        }
        assert_eq!(KernelForm::from_name("ss"), None);
    }
}
