//! The four binary keypad operations

use serde::{Deserialize, Serialize};

use crate::core::{CalcError, CalcResult};

/// Binary operation selected on the keypad
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operation {
    /// Addition (+)
    Add,
    /// Subtraction (-)
    Subtract,
    /// Multiplication (×)
    Multiply,
    /// Division (÷)
    Divide,
}

impl Operation {
    /// All operations in keypad column order, top to bottom
    pub const ALL: [Self; 4] = [Self::Divide, Self::Multiply, Self::Subtract, Self::Add];

    /// Returns the keypad label for this operation
    #[must_use]
    pub const fn symbol(&self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "×",
            Self::Divide => "÷",
        }
    }

    /// Applies the operation to two operands
    ///
    /// A zero divisor is rejected before dividing, and any non-finite result
    /// is reported as [`CalcError::Overflow`].
    pub fn apply(self, a: f64, b: f64) -> CalcResult<f64> {
        let result = match self {
            Self::Add => a + b,
            Self::Subtract => a - b,
            Self::Multiply => a * b,
            Self::Divide => {
                if b == 0.0 {
                    return Err(CalcError::DivisionByZero);
                }
                a / b
            }
        };
        Self::check_finite(result)
    }

    fn check_finite(result: f64) -> CalcResult<f64> {
        if result.is_finite() {
            Ok(result)
        } else {
            Err(CalcError::Overflow)
        }
    }
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_operation_symbols() {
        assert_eq!(Operation::Add.symbol(), "+");
        assert_eq!(Operation::Subtract.symbol(), "-");
        assert_eq!(Operation::Multiply.symbol(), "×");
        assert_eq!(Operation::Divide.symbol(), "÷");
    }

    #[test]
    fn test_operation_display() {
        assert_eq!(format!("{}", Operation::Multiply), "×");
    }

    #[test]
    fn test_all_in_column_order() {
        let symbols: Vec<_> = Operation::ALL.iter().map(Operation::symbol).collect();
        assert_eq!(symbols, vec!["÷", "×", "-", "+"]);
    }

    #[test]
    fn test_add() {
        assert_eq!(Operation::Add.apply(2.0, 3.0), Ok(5.0));
        assert_eq!(Operation::Add.apply(-2.0, 5.0), Ok(3.0));
    }

    #[test]
    fn test_subtract() {
        assert_eq!(Operation::Subtract.apply(3.0, 5.0), Ok(-2.0));
    }

    #[test]
    fn test_multiply() {
        assert_eq!(Operation::Multiply.apply(-2.0, 3.0), Ok(-6.0));
        assert_eq!(Operation::Multiply.apply(7.0, 0.0), Ok(0.0));
    }

    #[test]
    fn test_divide() {
        assert_eq!(Operation::Divide.apply(7.0, 2.0), Ok(3.5));
    }

    #[test]
    fn test_divide_by_zero() {
        assert_eq!(
            Operation::Divide.apply(5.0, 0.0),
            Err(CalcError::DivisionByZero)
        );
        assert_eq!(
            Operation::Divide.apply(0.0, 0.0),
            Err(CalcError::DivisionByZero)
        );
    }

    #[test]
    fn test_divide_by_negative_zero() {
        assert_eq!(
            Operation::Divide.apply(5.0, -0.0),
            Err(CalcError::DivisionByZero)
        );
    }

    #[test]
    fn test_overflow() {
        assert_eq!(
            Operation::Multiply.apply(f64::MAX, 10.0),
            Err(CalcError::Overflow)
        );
        assert_eq!(
            Operation::Add.apply(f64::MAX, f64::MAX),
            Err(CalcError::Overflow)
        );
    }

    proptest! {
        #[test]
        fn prop_add_commutative(a in -1e9f64..1e9, b in -1e9f64..1e9) {
            prop_assert_eq!(Operation::Add.apply(a, b), Operation::Add.apply(b, a));
        }

        #[test]
        fn prop_divide_nonzero_matches_f64(a in -1e9f64..1e9, b in 1e-3f64..1e9) {
            prop_assert_eq!(Operation::Divide.apply(a, b), Ok(a / b));
        }
    }
}
