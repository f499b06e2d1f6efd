//! The closed operator catalogue.
//!
//! One variant per operator name the code generator may select, forward and
//! reflected forms included. The set is fixed: growing it is an API change,
//! and `from_name` matches exact names only.

use std::fmt;

/// A named binary operator from the catalogue.
///
/// Reflected variants (`R`-prefixed) swap the operand order relative to
/// their forward form: `ROp(x, y) = Op(y, x)`. For commutative operators
/// the reflected variant shares the forward implementation; dispatch in
/// [`crate::fold::apply`] and the device source both alias it structurally
/// rather than restating the body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
    Add,
    RAdd,
    Sub,
    RSub,
    Mul,
    RMul,
    Div,
    RDiv,
    TrueDiv,
    RTrueDiv,
    FloorDiv,
    RFloorDiv,
    Mod,
    RMod,
    Pow,
    RPow,
    Equal,
    REqual,
    NotEqual,
    RNotEqual,
    Less,
    RLess,
    Greater,
    RGreater,
    LessEqual,
    RLessEqual,
    GreaterEqual,
    RGreaterEqual,
}

impl BinaryOperator {
    /// Every operator in the catalogue, forward and reflected.
    pub const ALL: [BinaryOperator; 28] = [
        BinaryOperator::Add,
        BinaryOperator::RAdd,
        BinaryOperator::Sub,
        BinaryOperator::RSub,
        BinaryOperator::Mul,
        BinaryOperator::RMul,
        BinaryOperator::Div,
        BinaryOperator::RDiv,
        BinaryOperator::TrueDiv,
        BinaryOperator::RTrueDiv,
        BinaryOperator::FloorDiv,
        BinaryOperator::RFloorDiv,
        BinaryOperator::Mod,
        BinaryOperator::RMod,
        BinaryOperator::Pow,
        BinaryOperator::RPow,
        BinaryOperator::Equal,
        BinaryOperator::REqual,
        BinaryOperator::NotEqual,
        BinaryOperator::RNotEqual,
        BinaryOperator::Less,
        BinaryOperator::RLess,
        BinaryOperator::Greater,
        BinaryOperator::RGreater,
        BinaryOperator::LessEqual,
        BinaryOperator::RLessEqual,
        BinaryOperator::GreaterEqual,
        BinaryOperator::RGreaterEqual,
    ];

    /// The exact catalogue name, as the code generator selects it.
    pub fn name(self) -> &'static str {
        match self {
            BinaryOperator::Add => "Add",
            BinaryOperator::RAdd => "RAdd",
            BinaryOperator::Sub => "Sub",
            BinaryOperator::RSub => "RSub",
            BinaryOperator::Mul => "Mul",
            BinaryOperator::RMul => "RMul",
            BinaryOperator::Div => "Div",
            BinaryOperator::RDiv => "RDiv",
            BinaryOperator::TrueDiv => "TrueDiv",
            BinaryOperator::RTrueDiv => "RTrueDiv",
            BinaryOperator::FloorDiv => "FloorDiv",
            BinaryOperator::RFloorDiv => "RFloorDiv",
            BinaryOperator::Mod => "Mod",
            BinaryOperator::RMod => "RMod",
            BinaryOperator::Pow => "Pow",
            BinaryOperator::RPow => "RPow",
            BinaryOperator::Equal => "Equal",
            BinaryOperator::REqual => "REqual",
            BinaryOperator::NotEqual => "NotEqual",
            BinaryOperator::RNotEqual => "RNotEqual",
            BinaryOperator::Less => "Less",
            BinaryOperator::RLess => "RLess",
            BinaryOperator::Greater => "Greater",
            BinaryOperator::RGreater => "RGreater",
            BinaryOperator::LessEqual => "LessEqual",
            BinaryOperator::RLessEqual => "RLessEqual",
            BinaryOperator::GreaterEqual => "GreaterEqual",
            BinaryOperator::RGreaterEqual => "RGreaterEqual",
        }
    }

    /// Look up an operator by exact name.
    ///
    /// Returns `None` for anything outside the catalogue; the caller decides
    /// how to report that (see `basalt-codegen`).
    pub fn from_name(name: &str) -> Option<Self> {
        BinaryOperator::ALL.iter().copied().find(|op| op.name() == name)
    }

    /// The operand-swapped counterpart of this operator.
    ///
    /// Reflection is involutive: `op.reflected().reflected() == op`.
    pub fn reflected(self) -> Self {
        match self {
            BinaryOperator::Add => BinaryOperator::RAdd,
            BinaryOperator::RAdd => BinaryOperator::Add,
            BinaryOperator::Sub => BinaryOperator::RSub,
            BinaryOperator::RSub => BinaryOperator::Sub,
            BinaryOperator::Mul => BinaryOperator::RMul,
            BinaryOperator::RMul => BinaryOperator::Mul,
            BinaryOperator::Div => BinaryOperator::RDiv,
            BinaryOperator::RDiv => BinaryOperator::Div,
            BinaryOperator::TrueDiv => BinaryOperator::RTrueDiv,
            BinaryOperator::RTrueDiv => BinaryOperator::TrueDiv,
            BinaryOperator::FloorDiv => BinaryOperator::RFloorDiv,
            BinaryOperator::RFloorDiv => BinaryOperator::FloorDiv,
            BinaryOperator::Mod => BinaryOperator::RMod,
            BinaryOperator::RMod => BinaryOperator::Mod,
            BinaryOperator::Pow => BinaryOperator::RPow,
            BinaryOperator::RPow => BinaryOperator::Pow,
            BinaryOperator::Equal => BinaryOperator::REqual,
            BinaryOperator::REqual => BinaryOperator::Equal,
            BinaryOperator::NotEqual => BinaryOperator::RNotEqual,
            BinaryOperator::RNotEqual => BinaryOperator::NotEqual,
            BinaryOperator::Less => BinaryOperator::RLess,
            BinaryOperator::RLess => BinaryOperator::Less,
            BinaryOperator::Greater => BinaryOperator::RGreater,
            BinaryOperator::RGreater => BinaryOperator::Greater,
            BinaryOperator::LessEqual => BinaryOperator::RLessEqual,
            BinaryOperator::RLessEqual => BinaryOperator::LessEqual,
            BinaryOperator::GreaterEqual => BinaryOperator::RGreaterEqual,
            BinaryOperator::RGreaterEqual => BinaryOperator::GreaterEqual,
        }
    }

    /// The forward form: strips reflection, identity on forward operators.
    pub fn canonical(self) -> Self {
        if self.is_reflected() { self.reflected() } else { self }
    }

    /// Whether this is a reflected (`R`-prefixed) variant.
    pub fn is_reflected(self) -> bool {
        matches!(
            self,
            BinaryOperator::RAdd
                | BinaryOperator::RSub
                | BinaryOperator::RMul
                | BinaryOperator::RDiv
                | BinaryOperator::RTrueDiv
                | BinaryOperator::RFloorDiv
                | BinaryOperator::RMod
                | BinaryOperator::RPow
                | BinaryOperator::REqual
                | BinaryOperator::RNotEqual
                | BinaryOperator::RLess
                | BinaryOperator::RGreater
                | BinaryOperator::RLessEqual
                | BinaryOperator::RGreaterEqual
        )
    }

    /// Whether operand order is irrelevant.
    ///
    /// For these operators the reflected form is defined as an alias of the
    /// forward form, so this is also the "reflection is the identity" set.
    pub fn commutes(self) -> bool {
        matches!(
            self.canonical(),
            BinaryOperator::Add
                | BinaryOperator::Mul
                | BinaryOperator::Equal
                | BinaryOperator::NotEqual
        )
    }

    /// Whether the operator compares its operands (boolean-valued result,
    /// materialized as 1/0 in the output type).
    pub fn is_comparison(self) -> bool {
        matches!(
            self.canonical(),
            BinaryOperator::Equal
                | BinaryOperator::NotEqual
                | BinaryOperator::Less
                | BinaryOperator::Greater
                | BinaryOperator::LessEqual
                | BinaryOperator::GreaterEqual
        )
    }
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalogue_is_closed_and_exact() {
        assert_eq!(BinaryOperator::ALL.len(), 28);
        for op in BinaryOperator::ALL {
            assert_eq!(BinaryOperator::from_name(op.name()), Some(op));
        }
        assert_eq!(BinaryOperator::from_name("add"), None);
        assert_eq!(BinaryOperator::from_name("Modulo"), None);
        assert_eq!(BinaryOperator::from_name(""), None);
    }

    #[test]
    fn test_reflection_is_involutive() {
        for op in BinaryOperator::ALL {
            assert_eq!(op.reflected().reflected(), op);
            assert_ne!(op.reflected(), op);
        }
    }

    #[test]
    fn test_forward_and_reflected_halves() {
        let reflected = BinaryOperator::ALL.iter().filter(|op| op.is_reflected());
        assert_eq!(reflected.count(), 14);
        for op in BinaryOperator::ALL {
            assert!(!op.canonical().is_reflected());
            assert_eq!(op.canonical().name(), op.name().trim_start_matches('R'));
        }
    }

    #[test]
    fn test_commutative_set() {
        let commuting: Vec<_> = BinaryOperator::ALL
            .iter()
            .copied()
            .filter(|op| !op.is_reflected() && op.commutes())
            .collect();
        assert_eq!(
            commuting,
            vec![
                BinaryOperator::Add,
                BinaryOperator::Mul,
                BinaryOperator::Equal,
                BinaryOperator::NotEqual,
            ]
        );
        // the property transfers to the reflected alias
        assert!(BinaryOperator::RAdd.commutes());
        assert!(!BinaryOperator::RSub.commutes());
    }

    #[test]
    fn test_comparison_classification() {
        assert!(BinaryOperator::Less.is_comparison());
        assert!(BinaryOperator::RGreaterEqual.is_comparison());
        assert!(!BinaryOperator::Add.is_comparison());
        assert!(!BinaryOperator::RMod.is_comparison());
        let comparisons = BinaryOperator::ALL.iter().filter(|op| op.is_comparison());
        assert_eq!(comparisons.count(), 12);
    }
}
