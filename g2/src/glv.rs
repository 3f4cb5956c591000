//! GLV decomposition of scalars along the G2 endomorphism φ(P) = λ·P
//!
//! A scalar m is split into two halves of at most 128 bits each such that
//! m ≡ k1 + k2·λ (mod q), where the signs of k1 and k2 are carried separately.

use num_bigint::{BigInt, BigUint, Sign};
use num_integer::Integer;

use crate::constants::{
    GLV_B1, GLV_B1_BIG, GLV_B2, GLV_B2_BIG, GLV_Q1, GLV_Q1_BIG, GLV_Q2, GLV_Q2_BIG, HALF_R_BIG,
    Q_BIG, R128, R128_BIG,
};
use crate::scalar::{Scalar, ToWnaf, WideScalar, Wnaf};
use crate::utils::gt;

/// Anything that yields the pair of signed-digit sequences driving the
/// simultaneous GLV multiplication
pub trait GlvVector {
    fn wnaf(&self, w: usize) -> (Wnaf, Wnaf);
}

/// Decomposition over the fixed-width scalar. `k1` and `k2` hold magnitudes,
/// `neg1`/`neg2` are set when the corresponding half is negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GlvVectorFr {
    pub k1: Scalar,
    pub k2: Scalar,
    pub neg1: bool,
    pub neg2: bool,
}

impl GlvVectorFr {
    pub fn new(m: &Scalar) -> Self {
        let alpha1 = Scalar(WideScalar::mul(m.limbs(), &GLV_Q1).round());
        let alpha2 = Scalar(WideScalar::mul(m.limbs(), &GLV_Q2).round());

        let z1 = alpha1.mul(&Scalar(GLV_B1));
        let z2 = alpha2.mul(&Scalar(GLV_B2));

        let (k1, neg1) = normalize_fr(m.sub(&z1).sub(&alpha2));
        let (k2, neg2) = normalize_fr(alpha1.sub(&z2));

        GlvVectorFr { k1, k2, neg1, neg2 }
    }
}

fn normalize_fr(k: Scalar) -> (Scalar, bool) {
    if gt(k.limbs(), &R128) {
        (k.neg(), true)
    } else {
        (k, false)
    }
}

impl GlvVector for GlvVectorFr {
    fn wnaf(&self, w: usize) -> (Wnaf, Wnaf) {
        let mut n1 = self.k1.to_wnaf(w);
        let mut n2 = self.k2.to_wnaf(w);
        if self.neg1 {
            n1.neg();
        }
        if self.neg2 {
            n2.neg();
        }
        (n1, n2)
    }
}

/// Decomposition over arbitrary-precision integers, with signed halves
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlvVectorBig {
    pub k1: BigInt,
    pub k2: BigInt,
}

impl GlvVectorBig {
    pub fn new(m: &BigUint) -> Self {
        let q = &*Q_BIG;
        let m = m.mod_floor(q);

        let alpha1: BigUint = (&m * &*GLV_Q1_BIG + &*HALF_R_BIG) >> 256u32;
        let alpha2: BigUint = (&m * &*GLV_Q2_BIG + &*HALF_R_BIG) >> 256u32;

        let z1 = (&alpha1 * &*GLV_B1_BIG) % q;
        let z2 = (&alpha2 * &*GLV_B2_BIG) % q;

        // Both alphas stay far below q, so adding 2q keeps the differences non-negative
        let k1 = (&m + q + q - &z1 - &alpha2) % q;
        let k2 = (&alpha1 + q - &z2) % q;

        GlvVectorBig { k1: normalize_big(k1), k2: normalize_big(k2) }
    }

    pub fn neg1(&self) -> bool {
        self.k1.sign() == Sign::Minus
    }

    pub fn neg2(&self) -> bool {
        self.k2.sign() == Sign::Minus
    }
}

fn normalize_big(k: BigUint) -> BigInt {
    if k > *R128_BIG {
        -BigInt::from_biguint(Sign::Plus, &*Q_BIG - k)
    } else {
        BigInt::from_biguint(Sign::Plus, k)
    }
}

impl GlvVector for GlvVectorBig {
    fn wnaf(&self, w: usize) -> (Wnaf, Wnaf) {
        let mut n1 = self.k1.magnitude().to_wnaf(w);
        let mut n2 = self.k2.magnitude().to_wnaf(w);
        if self.neg1() {
            n1.neg();
        }
        if self.neg2() {
            n2.neg();
        }
        (n1, n2)
    }
}
