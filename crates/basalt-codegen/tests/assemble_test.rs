//! End-to-end assembly tests: a driver-shaped walk from operator name to
//! complete translation unit.

use basalt_codegen::{
    resolve_data_type, resolve_form, resolve_operator, KernelForm, KernelRequest, UnitCache,
};
use basalt_core::DataType;
use basalt_operators::BinaryOperator;

const PREAMBLE: &str = "// traits.h stand-in for tests\n";

#[test]
fn test_unit_contains_preamble_library_and_instantiation() {
    let request = KernelRequest::new(
        BinaryOperator::Mod,
        DataType::F32,
        DataType::F32,
        DataType::I32,
        KernelForm::VectorVector,
    );
    let unit = request.assemble(PREAMBLE);

    // preamble first, then the operator library, then the kernel shapes
    assert!(unit.starts_with(PREAMBLE));
    let library_at = unit.find("struct Add {").unwrap();
    let kernels_at = unit.find("__global__ void kernel_v_v").unwrap();
    assert!(library_at < kernels_at);

    // the requested specialization is explicitly instantiated
    assert!(unit.ends_with(
        "template __global__ void kernel_v_v<float, float, int32_t, Mod>\
         (int, float*, const float*, const int32_t*);\n"
    ));
}

#[test]
fn test_driver_resolution_path() {
    // the driver works from name strings; resolve all three and assemble
    let op = resolve_operator("RTrueDiv").unwrap();
    let out = resolve_data_type("f64").unwrap();
    let lhs = resolve_data_type("i64").unwrap();
    let form = resolve_form("sv").unwrap();
    let request = KernelRequest::new(op, out, lhs, lhs, form);

    let unit = request.assemble(PREAMBLE);
    assert!(unit.contains("struct RTrueDiv {"));
    assert!(unit.contains(
        "template __global__ void kernel_s_v<double, int64_t, int64_t, RTrueDiv>"
    ));
}

#[test]
fn test_cache_assembles_each_specialization_once() {
    let mut cache = UnitCache::new(PREAMBLE);
    let a = KernelRequest::new(
        BinaryOperator::Add,
        DataType::I32,
        DataType::I32,
        DataType::I32,
        KernelForm::VectorVector,
    );
    let mut b = a;
    b.op = BinaryOperator::Mul;

    let first = cache.unit(&a).to_string();
    let again = cache.unit(&a).to_string();
    assert_eq!(first, again);
    assert_eq!(cache.len(), 1);

    cache.unit(&b);
    assert_eq!(cache.len(), 2);
}

#[test]
fn test_every_catalogue_operator_assembles() {
    let mut cache = UnitCache::new(PREAMBLE);
    for op in BinaryOperator::ALL {
        for form in KernelForm::ALL {
            let request =
                KernelRequest::new(op, DataType::F64, DataType::I32, DataType::F32, form);
            let unit = cache.unit(&request);
            assert!(unit.contains(&format!("{op}>")), "missing {op} instantiation");
        }
    }
    assert_eq!(cache.len(), 28 * 3);
}
