//! The G2 group context: scalar multiplication paths and subgroup predicates

use ark_bls12_381::Fq2;
use num_bigint::BigUint;
use tracing::trace;

use crate::config::G2Config;
use crate::constants::{GLV_BETA, Q_BIG};
use crate::glv::{GlvVector, GlvVectorBig, GlvVectorFr};
use crate::point::PointG2;
use crate::scalar::{Scalar, ToWnaf, Wnaf};
use crate::Result;

/// Entry point to the group operations that depend on tunables.
///
/// Only holds the immutable configuration, so a single instance can be
/// shared between threads.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct G2 {
    config: G2Config,
}

impl G2 {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: G2Config) -> Result<Self> {
        config.validate()?;
        Ok(G2 { config })
    }

    pub fn config(&self) -> &G2Config {
        &self.config
    }

    /// Order of the prime-order subgroup
    pub fn q(&self) -> &'static BigUint {
        &Q_BIG
    }

    pub fn one(&self) -> PointG2 {
        PointG2::generator()
    }

    pub fn zero(&self) -> PointG2 {
        PointG2::zero()
    }

    /// Double-and-add over the bits of `e`, most significant first
    pub fn mul_scalar(&self, p: &PointG2, e: &BigUint) -> PointG2 {
        let mut acc = PointG2::zero();
        for i in (0..e.bits()).rev() {
            acc = acc.double();
            if e.bit(i) {
                acc = acc + *p;
            }
        }
        acc
    }

    pub fn mul_scalar_fr(&self, p: &PointG2, e: &Scalar) -> PointG2 {
        let mut acc = PointG2::zero();
        for i in (0..e.num_bits()).rev() {
            acc = acc.double();
            if e.bit(i) {
                acc = acc + *p;
            }
        }
        acc
    }

    /// Windowed NAF multiplication, routed through the GLV decomposition when
    /// `use_glv` is set. The GLV route is only valid inside the prime-order subgroup.
    pub fn wnaf_mul(&self, p: &PointG2, e: &BigUint) -> PointG2 {
        if self.config.use_glv {
            return self.glv_mul(p, e);
        }
        if p.is_zero() {
            return PointG2::zero();
        }
        wnaf_mul_digits(p, &e.to_wnaf(self.config.wnaf_window), self.config.wnaf_window)
    }

    pub fn wnaf_mul_fr(&self, p: &PointG2, e: &Scalar) -> PointG2 {
        if self.config.use_glv {
            return self.glv_mul_fr(p, e);
        }
        if p.is_zero() {
            return PointG2::zero();
        }
        wnaf_mul_digits(p, &e.to_wnaf(self.config.wnaf_window), self.config.wnaf_window)
    }

    /// φ(x, y) = (β·x, y), acting as multiplication by λ on G2.
    /// The result is affine.
    pub fn glv_endomorphism(&self, p: &PointG2) -> PointG2 {
        match p.to_affine_coords() {
            None => PointG2::zero(),
            Some((x, y)) => PointG2::from_affine(Fq2::new(x.c0 * GLV_BETA, x.c1 * GLV_BETA), y),
        }
    }

    pub fn glv_mul(&self, p: &PointG2, e: &BigUint) -> PointG2 {
        if p.is_zero() {
            return PointG2::zero();
        }
        self.glv_mul_vector(p, &GlvVectorBig::new(e))
    }

    pub fn glv_mul_fr(&self, p: &PointG2, e: &Scalar) -> PointG2 {
        if p.is_zero() || e.is_zero() {
            return PointG2::zero();
        }
        self.glv_mul_vector(p, &GlvVectorFr::new(e))
    }

    fn glv_mul_vector<V: GlvVector>(&self, p: &PointG2, v: &V) -> PointG2 {
        let w = self.config.glv_window;
        let (n1, n2) = v.wnaf(w);
        if n1.is_empty() && n2.is_empty() {
            return PointG2::zero();
        }
        trace!("GLV multiplication with window {} over {}/{} digits", w, n1.len(), n2.len());

        let table1 = odd_multiples(p, w);
        let table2 = odd_multiples(&self.glv_endomorphism(p), w);

        let mut acc = PointG2::zero();
        for i in (0..n1.len().max(n2.len())).rev() {
            acc = acc.double();
            acc = add_digit(&acc, &table1, n1.digits().get(i).copied().unwrap_or(0));
            acc = add_digit(&acc, &table2, n2.digits().get(i).copied().unwrap_or(0));
        }
        acc
    }

    /// Membership in the prime-order subgroup by definition: q·P = 0
    pub fn in_correct_subgroup(&self, p: &PointG2) -> bool {
        self.mul_scalar(p, &Q_BIG).is_zero()
    }

    pub fn clear_cofactor(&self, p: &mut PointG2) {
        p.clear_cofactor();
    }
}

/// The affine odd multiples P, 3P, ..., (2^(w-1) - 1)P
fn odd_multiples(p: &PointG2, w: usize) -> Vec<PointG2> {
    let size = 1usize << (w - 2);
    let mut table = Vec::with_capacity(size);
    table.push(*p);
    let double = p.double();
    for i in 1..size {
        table.push(table[i - 1] + double);
    }
    PointG2::affine_batch(&mut table);
    table
}

fn add_digit(acc: &PointG2, table: &[PointG2], d: i64) -> PointG2 {
    match d {
        0 => *acc,
        d if d > 0 => acc.add_mixed(&table[(d >> 1) as usize]),
        d => acc.add_mixed(&table[(-d >> 1) as usize].neg()),
    }
}

fn wnaf_mul_digits(p: &PointG2, wnaf: &Wnaf, w: usize) -> PointG2 {
    let table = odd_multiples(p, w);
    let mut acc = PointG2::zero();
    for &d in wnaf.digits().iter().rev() {
        acc = acc.double();
        acc = add_digit(&acc, &table, d);
    }
    acc
}
