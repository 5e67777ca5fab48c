//! Radix-2 Cooley-Tukey FFT and the direct DFT it is checked against.

use std::f64::consts::PI;

use super::complex::{deinterleave_even, deinterleave_odd, lift_to_complex, Complex};
use crate::error::{Result, SpectrumError};

/// Forward FFT of a real buffer.
///
/// The length must be a power of two; anything else is rejected instead of
/// being transformed incorrectly.
pub fn fft(samples: &[f64]) -> Result<Vec<Complex>> {
    if !samples.len().is_power_of_two() {
        return Err(SpectrumError::NotPowerOfTwo(samples.len()));
    }
    Ok(fft_rec(lift_to_complex(samples)))
}

fn fft_rec(x: Vec<Complex>) -> Vec<Complex> {
    let n = x.len();
    if n == 1 {
        return x;
    }
    debug_assert!(n.is_power_of_two());

    let even = fft_rec(deinterleave_even(&x));
    let odd = fft_rec(deinterleave_odd(&x));

    let half = n / 2;
    let mut out = x;
    for k in 0..half {
        let w = Complex::from_angle(-2.0 * PI * k as f64 / n as f64) * odd[k];
        out[k] = even[k] + w;
        out[k + half] = even[k] - w;
    }
    out
}

/// Direct O(N²) DFT: X[k] = Σ x[n]·e^(−2πi·kn/N). Any length is accepted.
pub fn dft(samples: &[f64]) -> Vec<Complex> {
    let n = samples.len();
    (0..n)
        .map(|k| {
            samples.iter().enumerate().fold(Complex::ZERO, |acc, (t, &s)| {
                // k·t can be reduced mod n without changing the twiddle
                let angle = -2.0 * PI * ((k * t) % n) as f64 / n as f64;
                acc + Complex::new(s, 0.0) * Complex::from_angle(angle)
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_signal(n: usize) -> Vec<f64> {
        (0..n)
            .map(|i| {
                let t = i as f64;
                1000.0 * (0.37 * t).sin() + 250.0 * (1.91 * t + 0.4).cos() - 30.0 + (i % 7) as f64
            })
            .collect()
    }

    fn assert_close(a: &[Complex], b: &[Complex]) {
        assert_eq!(a.len(), b.len());
        let scale = b.iter().map(|c| c.norm()).fold(1.0, f64::max);
        for (x, y) in a.iter().zip(b) {
            assert!(
                (*x - *y).norm() <= 1e-9 * scale,
                "mismatch: {} vs {}",
                x,
                y
            );
        }
    }

    #[test]
    fn matches_direct_dft_for_powers_of_two() {
        for exp in 0..=10 {
            let n = 1usize << exp;
            let x = test_signal(n);
            assert_close(&fft(&x).unwrap(), &dft(&x));
        }
    }

    #[test]
    fn matches_rustfft() {
        use rustfft::{num_complex::Complex as RComplex, FftPlanner};

        let n = 256;
        let x = test_signal(n);
        let mut buffer: Vec<RComplex<f64>> = x.iter().map(|&s| RComplex::new(s, 0.0)).collect();
        let mut planner = FftPlanner::<f64>::new();
        planner.plan_fft_forward(n).process(&mut buffer);

        let expected: Vec<Complex> = buffer.iter().map(|c| Complex::new(c.re, c.im)).collect();
        assert_close(&fft(&x).unwrap(), &expected);
    }

    #[test]
    fn single_sample_is_its_own_spectrum() {
        assert_eq!(fft(&[4.5]).unwrap(), vec![Complex::new(4.5, 0.0)]);
    }

    #[test]
    fn zeros_transform_to_zeros() {
        let out = fft(&[0.0; 64]).unwrap();
        assert!(out.iter().all(|c| c.norm() == 0.0));
    }

    #[test]
    fn sinusoid_concentrates_in_its_bin() {
        let n = 64;
        let k = 5;
        let x: Vec<f64> = (0..n)
            .map(|i| (2.0 * PI * (k * i) as f64 / n as f64).cos())
            .collect();
        let out = fft(&x).unwrap();
        for (i, c) in out.iter().enumerate() {
            if i == k || i == n - k {
                assert!((c.norm() - n as f64 / 2.0).abs() < 1e-9);
            } else {
                assert!(c.norm() < 1e-9, "leak at {}: {}", i, c);
            }
        }
    }

    #[test]
    fn rejects_non_power_of_two() {
        assert_eq!(fft(&[1.0; 12]), Err(SpectrumError::NotPowerOfTwo(12)));
        assert_eq!(fft(&[]), Err(SpectrumError::NotPowerOfTwo(0)));
    }

    #[test]
    fn dft_handles_any_length() {
        let out = dft(&[1.0, 1.0, 1.0]);
        assert!((out[0].re - 3.0).abs() < 1e-12);
        assert!(out[1].norm() < 1e-12);
        assert!(out[2].norm() < 1e-12);
    }
}
