//! Small numeric helpers kept alongside the API for pipeline smoke tests.

use std::ops::{Add, Mul};

/// Sum of `a` and `b` in their own numeric type.
pub fn add<T: Add<Output = T>>(a: T, b: T) -> T {
    a + b
}

/// Product of `a` and `b` in their own numeric type.
pub fn multiply<T: Mul<Output = T>>(a: T, b: T) -> T {
    a * b
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_integers() {
        assert_eq!(add(2, 3), 5);
        assert_eq!(add(-1, 1), 0);
        assert_eq!(add(0, 0), 0);
    }

    #[test]
    fn multiply_integers() {
        assert_eq!(multiply(2, 3), 6);
        assert_eq!(multiply(-1, 5), -5);
        assert_eq!(multiply(0, 100), 0);
    }

    #[test]
    fn add_floats() {
        assert_eq!(add(1.5, 2.5), 4.0);
    }

    #[test]
    fn multiply_floats() {
        assert_eq!(multiply(2.5, 4.0), 10.0);
    }
}
