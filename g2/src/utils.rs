use ark_bls12_381::Fq;
use ark_ff::{BigInt, PrimeField};
use num_bigint::BigUint;
use num_traits::Zero;

/// Given two n-word numbers `x` and `y`, returns true if `x > y`
pub fn gt(x: &[u64], y: &[u64]) -> bool {
    debug_assert_eq!(x.len(), y.len(), "x and y must have the same length");

    for i in (0..x.len()).rev() {
        if x[i] > y[i] {
            return true;
        } else if x[i] < y[i] {
            return false;
        }
    }
    false
}

/// Given two n-word numbers `x` and `y`, returns true if `x < y`
pub fn lt(x: &[u64], y: &[u64]) -> bool {
    gt(y, x)
}

/// Returns true if x == 0
pub fn is_zero(x: &[u64]) -> bool {
    x.iter().all(|&word| word == 0)
}

/// Big-endian 48 bytes to little-endian words
pub fn bytes_be_to_u64_le(bytes: &[u8; 48]) -> [u64; 6] {
    let mut result = [0u64; 6];
    for i in 0..6 {
        for j in 0..8 {
            result[5 - i] |= (bytes[i * 8 + j] as u64) << (8 * (7 - j));
        }
    }
    result
}

/// Little-endian words to big-endian 48 bytes
pub fn u64_le_to_bytes_be(limbs: &[u64; 6], bytes: &mut [u8]) {
    debug_assert_eq!(bytes.len(), 48);
    for i in 0..6 {
        let limb = limbs[5 - i];
        for j in 0..8 {
            bytes[i * 8 + j] = ((limb >> (8 * (7 - j))) & 0xFF) as u8;
        }
    }
}

/// Decodes a canonical (< p) big-endian base field element
pub fn fq_from_bytes_be(bytes: &[u8]) -> Option<Fq> {
    let bytes: &[u8; 48] = bytes.try_into().ok()?;
    Fq::from_bigint(BigInt::new(bytes_be_to_u64_le(bytes)))
}

/// Writes the canonical big-endian encoding of a base field element into `out`
pub fn fq_to_bytes_be(e: &Fq, out: &mut [u8]) {
    u64_le_to_bytes_be(&e.into_bigint().0, out);
}

pub fn biguint_from_u64_digits(limbs: &[u64]) -> BigUint {
    limbs.iter().rev().fold(BigUint::zero(), |acc, &limb| (acc << 64) + BigUint::from(limb))
}

pub fn n_u64_digits_from_biguint<const N: usize>(value: &BigUint) -> [u64; N] {
    let digits = value.to_u64_digits();
    assert!(digits.len() <= N, "Value requires {} limbs > {}", digits.len(), N);

    let mut limbs = [0u64; N];
    limbs[..digits.len()].copy_from_slice(&digits);
    limbs
}
