//! Width-w non-adjacent form of non-negative scalars

use num_bigint::BigUint;
use num_integer::Integer;
use num_traits::Zero;

use super::Scalar;

/// Signed digits, least significant first. Every non-zero digit is odd with
/// |d| < 2^(w-1), and any w consecutive digits hold at most one non-zero.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Wnaf(Vec<i64>);

impl Wnaf {
    pub fn digits(&self) -> &[i64] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Negates every digit in place
    pub fn neg(&mut self) {
        self.0.iter_mut().for_each(|d| *d = -*d);
    }
}

pub trait ToWnaf {
    /// Encodes `self` with window width `w` (2 ≤ w ≤ 16)
    fn to_wnaf(&self, w: usize) -> Wnaf;
}

impl ToWnaf for Scalar {
    fn to_wnaf(&self, w: usize) -> Wnaf {
        debug_assert!((2..=16).contains(&w), "window out of range: {w}");

        let full = 1u64 << w;
        let half = 1u64 << (w - 1);
        let mask = full - 1;

        // A canonical scalar stays below 2^255, so adding |d| never overflows
        let mut k = self.0;
        let mut digits = Vec::with_capacity(self.num_bits() + 1);
        while !crate::utils::is_zero(&k) {
            if k[0] & 1 == 1 {
                let low = k[0] & mask;
                if low >= half {
                    let d = full - low;
                    digits.push(-(d as i64));
                    add_small(&mut k, d);
                } else {
                    digits.push(low as i64);
                    k[0] -= low;
                }
            } else {
                digits.push(0);
            }
            shr1(&mut k);
        }
        Wnaf(digits)
    }
}

impl ToWnaf for BigUint {
    fn to_wnaf(&self, w: usize) -> Wnaf {
        debug_assert!((2..=16).contains(&w), "window out of range: {w}");

        let full = 1u64 << w;
        let half = 1u64 << (w - 1);
        let mask = full - 1;

        let mut k = self.clone();
        let mut digits = Vec::with_capacity(self.bits() as usize + 1);
        while !k.is_zero() {
            if k.is_odd() {
                let low = k.iter_u64_digits().next().unwrap_or(0) & mask;
                if low >= half {
                    let d = full - low;
                    digits.push(-(d as i64));
                    k += d;
                } else {
                    digits.push(low as i64);
                    k -= low;
                }
            } else {
                digits.push(0);
            }
            k >>= 1u32;
        }
        Wnaf(digits)
    }
}

fn add_small(k: &mut [u64; 4], v: u64) {
    let mut carry = v;
    for limb in k.iter_mut() {
        let (sum, overflow) = limb.overflowing_add(carry);
        *limb = sum;
        if !overflow {
            return;
        }
        carry = 1;
    }
}

fn shr1(k: &mut [u64; 4]) {
    for i in 0..3 {
        k[i] = (k[i] >> 1) | (k[i + 1] << 63);
    }
    k[3] >>= 1;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::Q_BIG;
    use num_bigint::{BigInt, RandBigInt, Sign};

    fn evaluate(wnaf: &Wnaf) -> BigInt {
        wnaf.digits().iter().rev().fold(BigInt::zero(), |acc, &d| (acc << 1) + BigInt::from(d))
    }

    fn assert_well_formed(wnaf: &Wnaf, w: usize) {
        let bound = 1i64 << (w - 1);
        for (i, &d) in wnaf.digits().iter().enumerate() {
            if d != 0 {
                assert!(d % 2 != 0 && d.abs() < bound, "bad digit {d} for w = {w}");
                let end = (i + w).min(wnaf.len());
                assert!(wnaf.digits()[i + 1..end].iter().all(|&x| x == 0));
            }
        }
        if let Some(&last) = wnaf.digits().last() {
            assert_ne!(last, 0);
        }
    }

    #[test]
    fn test_wnaf_reconstructs_scalar() {
        let mut rng = rand::thread_rng();
        for w in 2..=8 {
            for _ in 0..20 {
                let k = rng.gen_biguint_below(&Q_BIG);
                let wnaf = k.to_wnaf(w);
                assert_well_formed(&wnaf, w);
                assert_eq!(evaluate(&wnaf), BigInt::from_biguint(Sign::Plus, k));
            }
        }
    }

    #[test]
    fn test_wnaf_same_digits_for_both_representations() {
        let mut rng = rand::thread_rng();
        for w in [2, 4, 5, 7] {
            for _ in 0..20 {
                let k = rng.gen_biguint_below(&Q_BIG);
                let s = Scalar::from_biguint(&k);
                assert_eq!(s.to_wnaf(w), k.to_wnaf(w));
            }
        }
    }

    #[test]
    fn test_wnaf_small_values() {
        assert!(Scalar::ZERO.to_wnaf(4).is_empty());
        assert!(BigUint::zero().to_wnaf(4).is_empty());
        assert_eq!(Scalar::from_u64(1).to_wnaf(4).digits(), &[1]);
        // 7 = 8 - 1
        assert_eq!(Scalar::from_u64(7).to_wnaf(3).digits(), &[-1, 0, 0, 1]);
        assert_eq!(Scalar::from_u64(7).to_wnaf(4).digits(), &[7]);
        assert_eq!(BigUint::from(12u32).to_wnaf(2).digits(), &[0, 0, -1, 0, 1]);
    }

    #[test]
    fn test_wnaf_neg() {
        let mut wnaf = Scalar::from_u64(0x1234_5678).to_wnaf(5);
        let original = evaluate(&wnaf);
        wnaf.neg();
        assert_eq!(evaluate(&wnaf), -original);
    }
}
