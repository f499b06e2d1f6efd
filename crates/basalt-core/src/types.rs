//! Supported numeric types and their type-class classification.

use std::fmt;

/// Numeric element type of a column.
///
/// This is the closed set of types the operator catalogue is generic over.
/// Each type belongs to exactly one [`TypeClass`], which is what gated
/// operators (`Mod`, `RMod`) select their implementation on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DataType {
    I8,
    I16,
    I32,
    I64,
    U8,
    U16,
    U32,
    U64,
    F32,
    F64,
}

impl DataType {
    /// All supported data types, in declaration order.
    pub const ALL: [DataType; 10] = [
        DataType::I8,
        DataType::I16,
        DataType::I32,
        DataType::I64,
        DataType::U8,
        DataType::U16,
        DataType::U32,
        DataType::U64,
        DataType::F32,
        DataType::F64,
    ];

    /// The type class this type belongs to.
    ///
    /// Classes are mutually exclusive and exhaustive over the supported set.
    pub fn type_class(self) -> TypeClass {
        match self {
            DataType::I8
            | DataType::I16
            | DataType::I32
            | DataType::I64
            | DataType::U8
            | DataType::U16
            | DataType::U32
            | DataType::U64 => TypeClass::Integral,
            DataType::F32 => TypeClass::Float,
            DataType::F64 => TypeClass::Double,
        }
    }

    /// Size of one element in bytes.
    pub fn size(self) -> usize {
        match self {
            DataType::I8 | DataType::U8 => 1,
            DataType::I16 | DataType::U16 => 2,
            DataType::I32 | DataType::U32 | DataType::F32 => 4,
            DataType::I64 | DataType::U64 | DataType::F64 => 8,
        }
    }

    /// The C type name used in generated device source.
    pub fn device_name(self) -> &'static str {
        match self {
            DataType::I8 => "int8_t",
            DataType::I16 => "int16_t",
            DataType::I32 => "int32_t",
            DataType::I64 => "int64_t",
            DataType::U8 => "uint8_t",
            DataType::U16 => "uint16_t",
            DataType::U32 => "uint32_t",
            DataType::U64 => "uint64_t",
            DataType::F32 => "float",
            DataType::F64 => "double",
        }
    }

    /// Short lowercase name, used in labels and on the command line.
    pub fn name(self) -> &'static str {
        match self {
            DataType::I8 => "i8",
            DataType::I16 => "i16",
            DataType::I32 => "i32",
            DataType::I64 => "i64",
            DataType::U8 => "u8",
            DataType::U16 => "u16",
            DataType::U32 => "u32",
            DataType::U64 => "u64",
            DataType::F32 => "f32",
            DataType::F64 => "f64",
        }
    }

    /// Look up a data type by its short name.
    ///
    /// Returns `None` for anything outside the supported set.
    pub fn from_name(name: &str) -> Option<Self> {
        DataType::ALL.iter().copied().find(|t| t.name() == name)
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Type class used for compile-time gated operator selection.
///
/// Matches the trait predicates the generated device source is compiled
/// against: `isIntegral`, `isFloat`, `isDouble`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeClass {
    /// Signed or unsigned integer.
    Integral,
    /// Single-precision floating point.
    Float,
    /// Double-precision floating point.
    Double,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_classes_partition_the_set() {
        let integral: Vec<_> = DataType::ALL
            .iter()
            .filter(|t| t.type_class() == TypeClass::Integral)
            .collect();
        assert_eq!(integral.len(), 8);
        assert_eq!(DataType::F32.type_class(), TypeClass::Float);
        assert_eq!(DataType::F64.type_class(), TypeClass::Double);
    }

    #[test]
    fn test_from_name_round_trip() {
        for dtype in DataType::ALL {
            assert_eq!(DataType::from_name(dtype.name()), Some(dtype));
        }
        assert_eq!(DataType::from_name("int"), None);
        assert_eq!(DataType::from_name("F32"), None);
    }

    #[test]
    fn test_device_names() {
        assert_eq!(DataType::I32.device_name(), "int32_t");
        assert_eq!(DataType::U64.device_name(), "uint64_t");
        assert_eq!(DataType::F32.device_name(), "float");
        assert_eq!(DataType::F64.device_name(), "double");
    }

    #[test]
    fn test_sizes() {
        assert_eq!(DataType::I8.size(), 1);
        assert_eq!(DataType::U16.size(), 2);
        assert_eq!(DataType::F32.size(), 4);
        assert_eq!(DataType::I64.size(), 8);
    }
}
