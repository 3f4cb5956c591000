use ark_bls12_381::Fq2;
use ark_ff::Field;
use ark_std::UniformRand;
use num_bigint::{BigUint, RandBigInt};

use crate::constants::{Q_BIG, TWIST_B};
use crate::{PointG2, G2};

/// Uniform scalar in [0, q)
pub fn random_scalar() -> BigUint {
    rand::thread_rng().gen_biguint_below(&Q_BIG)
}

/// Random element of the prime-order subgroup
pub fn random_point() -> PointG2 {
    G2::new().mul_scalar(&PointG2::generator(), &random_scalar())
}

/// Random point of the twist, almost surely outside the prime-order subgroup
pub fn random_curve_point() -> PointG2 {
    let mut rng = rand::thread_rng();
    loop {
        let x = Fq2::rand(&mut rng);
        if let Some(y) = (x.square() * x + TWIST_B).sqrt() {
            return PointG2::from_affine(x, y);
        }
    }
}
