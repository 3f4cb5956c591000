//! Fixed-width scalars modulo the group order q

use std::cmp::Ordering;
use std::fmt;

use ark_bls12_381::Fr;
use ark_ff::{BigInt, PrimeField};
use num_bigint::BigUint;

use crate::constants::{Q, Q_BIG};
use crate::utils::{biguint_from_u64_digits, gt, is_zero, lt, n_u64_digits_from_biguint};

/// A residue modulo q stored as four little-endian 64-bit words.
/// The words are always canonical, i.e. strictly below q.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Scalar(pub(crate) [u64; 4]);

impl Scalar {
    pub const ZERO: Scalar = Scalar([0, 0, 0, 0]);
    pub const ONE: Scalar = Scalar([1, 0, 0, 0]);

    pub fn from_u64(value: u64) -> Self {
        Scalar([value, 0, 0, 0])
    }

    /// Returns `None` unless the words encode a value below q
    pub fn from_limbs(limbs: [u64; 4]) -> Option<Self> {
        lt(&limbs, &Q).then_some(Scalar(limbs))
    }

    pub fn from_biguint(value: &BigUint) -> Self {
        let reduced = value % &*Q_BIG;
        Scalar(n_u64_digits_from_biguint::<4>(&reduced))
    }

    /// Big-endian 32 bytes, reduced modulo q
    pub fn from_bytes_be(bytes: &[u8; 32]) -> Self {
        Self::from_biguint(&BigUint::from_bytes_be(bytes))
    }

    pub fn to_biguint(&self) -> BigUint {
        biguint_from_u64_digits(&self.0)
    }

    pub fn to_bytes_be(&self) -> [u8; 32] {
        let mut out = [0u8; 32];
        for i in 0..4 {
            out[i * 8..(i + 1) * 8].copy_from_slice(&self.0[3 - i].to_be_bytes());
        }
        out
    }

    pub fn limbs(&self) -> &[u64; 4] {
        &self.0
    }

    pub fn is_zero(&self) -> bool {
        is_zero(&self.0)
    }

    pub fn is_odd(&self) -> bool {
        self.0[0] & 1 == 1
    }

    pub fn num_bits(&self) -> usize {
        for i in (0..4).rev() {
            if self.0[i] != 0 {
                return i * 64 + 64 - self.0[i].leading_zeros() as usize;
            }
        }
        0
    }

    pub fn bit(&self, i: usize) -> bool {
        i < 256 && (self.0[i / 64] >> (i % 64)) & 1 == 1
    }

    fn to_fr(self) -> Fr {
        Fr::from(BigInt::new(self.0))
    }

    fn from_fr(e: Fr) -> Self {
        Scalar(e.into_bigint().0)
    }

    pub fn add(&self, other: &Scalar) -> Scalar {
        Self::from_fr(self.to_fr() + other.to_fr())
    }

    pub fn sub(&self, other: &Scalar) -> Scalar {
        Self::from_fr(self.to_fr() - other.to_fr())
    }

    pub fn neg(&self) -> Scalar {
        Self::from_fr(-self.to_fr())
    }

    pub fn mul(&self, other: &Scalar) -> Scalar {
        Self::from_fr(self.to_fr() * other.to_fr())
    }
}

impl Ord for Scalar {
    fn cmp(&self, other: &Self) -> Ordering {
        if gt(&self.0, &other.0) {
            Ordering::Greater
        } else if lt(&self.0, &other.0) {
            Ordering::Less
        } else {
            Ordering::Equal
        }
    }
}

impl PartialOrd for Scalar {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Debug for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [l0, l1, l2, l3] = self.0;
        write!(f, "Scalar(0x{l3:016x}{l2:016x}{l1:016x}{l0:016x})")
    }
}

impl From<u64> for Scalar {
    fn from(value: u64) -> Self {
        Self::from_u64(value)
    }
}

impl From<&BigUint> for Scalar {
    fn from(value: &BigUint) -> Self {
        Self::from_biguint(value)
    }
}

/// 512-bit product of two 4-word values
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct WideScalar([u64; 8]);

impl WideScalar {
    pub(crate) fn mul(a: &[u64; 4], b: &[u64; 4]) -> Self {
        let mut r = [0u64; 8];
        for i in 0..4 {
            let mut carry = 0u128;
            for j in 0..4 {
                let t = r[i + j] as u128 + (a[i] as u128) * (b[j] as u128) + carry;
                r[i + j] = t as u64;
                carry = t >> 64;
            }
            r[i + 4] = carry as u64;
        }
        WideScalar(r)
    }

    /// ⌊(self + 2²⁵⁵) / 2²⁵⁶⌋, the division by 2²⁵⁶ rounded half up
    pub(crate) fn round(&self) -> [u64; 4] {
        let mut hi = [self.0[4], self.0[5], self.0[6], self.0[7]];
        if self.0[3] >> 63 == 1 {
            for limb in hi.iter_mut() {
                let (sum, overflow) = limb.overflowing_add(1);
                *limb = sum;
                if !overflow {
                    break;
                }
            }
        }
        hi
    }
}
