use std::fmt;
use std::ops::{Add, AddAssign, Mul, MulAssign, Sub, SubAssign};

/// A complex number with f64 parts.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Complex {
    pub re: f64,
    pub im: f64,
}

impl Complex {
    pub const ZERO: Complex = Complex { re: 0.0, im: 0.0 };

    pub fn new(re: f64, im: f64) -> Self {
        Self { re, im }
    }

    /// Unit-magnitude value at angle `theta`: (cos θ, sin θ).
    pub fn from_angle(theta: f64) -> Self {
        let (sin, cos) = theta.sin_cos();
        Self { re: cos, im: sin }
    }

    /// Euclidean magnitude.
    pub fn norm(self) -> f64 {
        (self.re * self.re + self.im * self.im).sqrt()
    }
}

impl Add for Complex {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self {
            re: self.re + rhs.re,
            im: self.im + rhs.im,
        }
    }
}

impl Sub for Complex {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self {
            re: self.re - rhs.re,
            im: self.im - rhs.im,
        }
    }
}

impl Mul for Complex {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self {
        Self {
            re: self.re * rhs.re - self.im * rhs.im,
            im: self.re * rhs.im + self.im * rhs.re,
        }
    }
}

impl AddAssign for Complex {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl SubAssign for Complex {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl MulAssign for Complex {
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl fmt::Display for Complex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.im >= 0.0 { '+' } else { '-' };
        write!(f, "{} {} {}j", self.re, sign, self.im.abs())
    }
}

/// Lift real samples into complex form with zero imaginary parts.
pub fn lift_to_complex(samples: &[f64]) -> Vec<Complex> {
    samples.iter().map(|&s| Complex::new(s, 0.0)).collect()
}

/// Elements at indices 0, 2, 4, ...
///
/// # Panics
/// If `x` has odd length.
pub fn deinterleave_even(x: &[Complex]) -> Vec<Complex> {
    assert!(x.len() % 2 == 0, "deinterleave needs an even length, got {}", x.len());
    x.iter().step_by(2).copied().collect()
}

/// Elements at indices 1, 3, 5, ...
///
/// # Panics
/// If `x` has odd length.
pub fn deinterleave_odd(x: &[Complex]) -> Vec<Complex> {
    assert!(x.len() % 2 == 0, "deinterleave needs an even length, got {}", x.len());
    x.iter().skip(1).step_by(2).copied().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn adds_in_place() {
        let mut z = Complex::new(3.0, 2.0);
        z += Complex::new(1.0, 7.0);
        assert_eq!(z, Complex::new(4.0, 9.0));
    }

    #[test]
    fn multiplies_algebraically() {
        let mut z = Complex::new(3.0, 2.0);
        z *= Complex::new(1.0, 7.0);
        assert_eq!(z, Complex::new(-11.0, 23.0));
    }

    #[test]
    fn subtracts() {
        let z = Complex::new(3.0, 2.0) - Complex::new(1.0, 7.0);
        assert_eq!(z, Complex::new(2.0, -5.0));
    }

    #[test]
    fn addition_is_commutative_and_associative() {
        let a = Complex::new(0.1, -2.5);
        let b = Complex::new(3.75, 0.2);
        let c = Complex::new(-1.3, 9.1);
        assert_eq!(a + b, b + a);
        let lhs = (a + b) + c;
        let rhs = a + (b + c);
        assert!((lhs.re - rhs.re).abs() < 1e-12);
        assert!((lhs.im - rhs.im).abs() < 1e-12);
    }

    #[test]
    fn norm_of_three_four_is_five() {
        assert_eq!(Complex::new(3.0, 4.0).norm(), 5.0);
    }

    #[test]
    fn from_angle_is_unit() {
        let w = Complex::from_angle(std::f64::consts::FRAC_PI_2);
        assert!(w.re.abs() < 1e-15);
        assert!((w.im - 1.0).abs() < 1e-15);
        assert!((Complex::from_angle(1.234).norm() - 1.0).abs() < 1e-15);
    }

    #[test]
    fn displays_sign_of_imaginary_part() {
        assert_eq!(Complex::new(1.5, -2.0).to_string(), "1.5 - 2j");
        assert_eq!(Complex::new(1.0, 0.5).to_string(), "1 + 0.5j");
    }

    #[test]
    fn splits_even_and_odd() {
        let x = lift_to_complex(&[0.0, 1.0, 2.0, 3.0, 4.0, 5.0]);
        let even: Vec<f64> = deinterleave_even(&x).iter().map(|c| c.re).collect();
        let odd: Vec<f64> = deinterleave_odd(&x).iter().map(|c| c.re).collect();
        assert_eq!(even, vec![0.0, 2.0, 4.0]);
        assert_eq!(odd, vec![1.0, 3.0, 5.0]);
        assert!(x.iter().all(|c| c.im == 0.0));
    }

    #[test]
    #[should_panic]
    fn rejects_odd_length() {
        deinterleave_even(&lift_to_complex(&[1.0, 2.0, 3.0]));
    }
}
