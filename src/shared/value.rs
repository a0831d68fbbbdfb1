//! Runtime values.

use std::fmt::{self, Display};
use std::ops::{Add, Div, Mul, Neg, Sub};

/// A runtime value as it flows through the constant pool and the operand stack.
///
/// Values are numeric and follow IEEE-754 double semantics, including `NaN != NaN`
/// and signed infinities on division by zero.
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd)]
pub struct Value(f64);

impl Value {
    /// Creates a new numeric value.
    pub const fn new(number: f64) -> Self {
        Value(number)
    }
    /// Returns the value as a 64 bit float.
    pub const fn as_f64(self: Self) -> f64 {
        self.0
    }
    /// Returns whether the value is neither infinite nor NaN.
    pub fn is_finite(self: Self) -> bool {
        self.0.is_finite()
    }
}

impl Display for Value {
    fn fmt(self: &Self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Neg for Value {
    type Output = Value;
    fn neg(self: Self) -> Value {
        Value(-self.0)
    }
}

/// Implements binary arithmetic traits for Value.
macro_rules! impl_value_op {
    ($trait:ident, $method:ident, $op:tt) => {
        impl $trait for Value {
            type Output = Value;
            #[inline]
            fn $method(self: Self, other: Value) -> Value {
                Value(self.0 $op other.0)
            }
        }
    };
}

impl_value_op!(Add, add, +);
impl_value_op!(Sub, sub, -);
impl_value_op!(Mul, mul, *);
impl_value_op!(Div, div, /);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nan_is_not_equal_to_itself() {
        let nan = Value::new(f64::NAN);
        assert_ne!(nan, nan);
    }

    #[test]
    fn division_by_zero_is_infinite() {
        assert_eq!(Value::new(1.0) / Value::new(0.0), Value::new(f64::INFINITY));
        assert_eq!(Value::new(-1.0) / Value::new(0.0), Value::new(f64::NEG_INFINITY));
        assert!((Value::new(0.0) / Value::new(0.0)).as_f64().is_nan());
    }

    #[test]
    fn display_uses_shortest_representation() {
        assert_eq!(Value::new(3.0).to_string(), "3");
        assert_eq!(Value::new(2.5).to_string(), "2.5");
        assert_eq!(Value::new(f64::INFINITY).to_string(), "inf");
    }
}
