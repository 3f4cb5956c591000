//! Bucket (Pippenger) multi-scalar multiplication

use num_bigint::BigUint;
use tracing::debug;

use crate::g2::G2;
use crate::point::PointG2;
use crate::scalar::Scalar;
use crate::{G2Error, Result};

impl G2 {
    /// Computes Σ scalars[i]·points[i]. An empty batch yields the identity.
    pub fn multi_exp(&self, points: &[PointG2], scalars: &[BigUint]) -> Result<PointG2> {
        check_lengths(points, scalars.len())?;
        let limbs: Vec<Vec<u64>> = scalars.iter().map(|s| s.to_u64_digits()).collect();
        Ok(self.pippenger(points, &limbs))
    }

    pub fn multi_exp_fr(&self, points: &[PointG2], scalars: &[Scalar]) -> Result<PointG2> {
        check_lengths(points, scalars.len())?;
        let limbs: Vec<&[u64]> = scalars.iter().map(|s| &s.limbs()[..]).collect();
        Ok(self.pippenger(points, &limbs))
    }

    /// Bucket window width for a batch of `n` terms
    pub fn multiexp_window(&self, n: usize) -> usize {
        self.config().multiexp_window.unwrap_or(if n < 32 { 3 } else { ln_without_floats(n) + 2 })
    }

    fn pippenger<S: AsRef<[u64]>>(&self, points: &[PointG2], scalars: &[S]) -> PointG2 {
        let num_bits = scalars.iter().map(|s| bit_len(s.as_ref())).max().unwrap_or(0);
        if num_bits == 0 {
            return PointG2::zero();
        }

        let c = self.multiexp_window(points.len());
        debug!("MultiExp over {} terms of {} bits with window {}", points.len(), num_bits, c);

        // One sum per window of c bits, lowest window first
        let window_sums: Vec<PointG2> = (0..num_bits)
            .step_by(c)
            .map(|w_start| {
                // No bucket for the zero digit
                let mut buckets = vec![PointG2::zero(); (1 << c) - 1];
                for (p, s) in points.iter().zip(scalars) {
                    let digit = window_value(s.as_ref(), w_start, c);
                    if digit != 0 {
                        buckets[digit - 1] += *p;
                    }
                }

                // Σ_i (i + 1)·bucket[i] with 2·(2^c - 1) additions
                let mut running_sum = PointG2::zero();
                let mut res = PointG2::zero();
                for b in buckets.into_iter().rev() {
                    running_sum += b;
                    res += running_sum;
                }
                res
            })
            .collect();

        // Horner over the windows, from high to low
        window_sums.iter().rev().fold(PointG2::zero(), |mut total, sum| {
            for _ in 0..c {
                total = total.double();
            }
            total + *sum
        })
    }
}

fn check_lengths(points: &[PointG2], scalars: usize) -> Result<()> {
    if points.len() != scalars {
        return Err(G2Error::LengthMismatch { points: points.len(), scalars });
    }
    Ok(())
}

/// The result of this function is only approximately `ln(a)`
fn ln_without_floats(a: usize) -> usize {
    // log2(a) * ln(2)
    (ark_std::log2(a) * 69 / 100) as usize
}

fn bit_len(limbs: &[u64]) -> usize {
    limbs
        .iter()
        .rposition(|&l| l != 0)
        .map(|i| i * 64 + 64 - limbs[i].leading_zeros() as usize)
        .unwrap_or(0)
}

/// The c bits of `limbs` starting at bit `start`
fn window_value(limbs: &[u64], start: usize, c: usize) -> usize {
    let idx = start / 64;
    let shift = start % 64;
    if idx >= limbs.len() {
        return 0;
    }
    let mut v = limbs[idx] >> shift;
    if shift + c > 64 && idx + 1 < limbs.len() {
        v |= limbs[idx + 1] << (64 - shift);
    }
    (v & ((1u64 << c) - 1)) as usize
}
