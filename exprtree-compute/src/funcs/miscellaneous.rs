//! Uncategorized functions.

use super::helper::build_unchecked;

build_unchecked! {
    /// Returns the absolute value.
    Abs; f64::abs,

    /// Returns the sign of the value: `-1.0`, `0.0` or `1.0`. The sign of zero is zero.
    Sign; |n: f64| if n == 0.0 { 0.0 } else { n.signum() },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn abs() {
        assert_eq!(Abs::eval_static(-2.5), 2.5);
        assert_eq!(Abs::eval_static(3.0), 3.0);
    }

    #[test]
    fn sign() {
        assert_eq!(Sign::eval_static(-7.0), -1.0);
        assert_eq!(Sign::eval_static(0.0), 0.0);
        assert_eq!(Sign::eval_static(-0.0), 0.0);
        assert_eq!(Sign::eval_static(0.1), 1.0);
        assert!(Sign::eval_static(f64::NAN).is_nan());
    }
}
