//! Points of G2 in Jacobian coordinates on the twist E': y² = x³ + 4·(1+u)
//!
//! The affine point of (X, Y, Z) is (X/Z², Y/Z³); Z = 0 is the point at infinity.

use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

use ark_bls12_381::Fq2;
use ark_ff::{AdditiveGroup, Field, Zero};

use crate::constants::{G2_GENERATOR_X, G2_GENERATOR_Y, TWIST_B};

#[derive(Debug, Clone, Copy)]
pub struct PointG2 {
    pub x: Fq2,
    pub y: Fq2,
    pub z: Fq2,
}

impl PointG2 {
    pub const fn new(x: Fq2, y: Fq2, z: Fq2) -> Self {
        PointG2 { x, y, z }
    }

    /// Point with Z = 1, no curve check
    pub const fn from_affine(x: Fq2, y: Fq2) -> Self {
        PointG2 { x, y, z: Fq2::ONE }
    }

    /// The point at infinity (0, 1, 0)
    pub const fn zero() -> Self {
        PointG2 { x: Fq2::ZERO, y: Fq2::ONE, z: Fq2::ZERO }
    }

    pub const fn generator() -> Self {
        PointG2 { x: G2_GENERATOR_X, y: G2_GENERATOR_Y, z: Fq2::ONE }
    }

    pub fn is_zero(&self) -> bool {
        self.z.is_zero()
    }

    /// Checks Y² = X³ + b'·Z⁶
    pub fn is_on_curve(&self) -> bool {
        if self.is_zero() {
            return true;
        }
        let z2 = self.z.square();
        let z6 = z2.square() * z2;
        let lhs = self.y.square();
        let rhs = self.x.square() * self.x + TWIST_B * z6;
        lhs == rhs
    }

    /// Compares the affine points without normalizing either side
    pub fn equal(&self, other: &PointG2) -> bool {
        match (self.is_zero(), other.is_zero()) {
            (true, true) => return true,
            (true, false) | (false, true) => return false,
            _ => {}
        }
        let z1z1 = self.z.square();
        let z2z2 = other.z.square();
        if self.x * z2z2 != other.x * z1z1 {
            return false;
        }
        self.y * z2z2 * other.z == other.y * z1z1 * self.z
    }

    pub fn double(&self) -> PointG2 {
        if self.is_zero() {
            return *self;
        }

        // http://www.hyperelliptic.org/EFD/g1p/auto-shortw-jacobian-0.html#doubling-dbl-2009-l
        let a = self.x.square();
        let b = self.y.square();
        let c = b.square();
        let d = ((self.x + b).square() - a - c).double();
        let e = a.double() + a;
        let f = e.square();

        let x3 = f - d.double();
        let y3 = e * (d - x3) - c.double().double().double();
        let z3 = (self.y * self.z).double();
        PointG2 { x: x3, y: y3, z: z3 }
    }

    pub fn add(self, other: &PointG2) -> PointG2 {
        if self.is_zero() {
            return *other;
        }
        if other.is_zero() {
            return self;
        }

        // http://www.hyperelliptic.org/EFD/g1p/auto-shortw-jacobian-0.html#addition-add-2007-bl
        let z1z1 = self.z.square();
        let z2z2 = other.z.square();
        let u1 = self.x * z2z2;
        let u2 = other.x * z1z1;
        let s1 = self.y * other.z * z2z2;
        let s2 = other.y * self.z * z1z1;

        if u1 == u2 {
            return if s1 == s2 { self.double() } else { PointG2::zero() };
        }

        let h = u2 - u1;
        let i = h.double().square();
        let j = h * i;
        let r = (s2 - s1).double();
        let v = u1 * i;

        let x3 = r.square() - j - v.double();
        let y3 = r * (v - x3) - (s1 * j).double();
        let z3 = ((self.z + other.z).square() - z1z1 - z2z2) * h;
        PointG2 { x: x3, y: y3, z: z3 }
    }

    /// Adds a point whose Z coordinate is one
    pub fn add_mixed(&self, other: &PointG2) -> PointG2 {
        if other.is_zero() {
            return *self;
        }
        debug_assert!(other.z == Fq2::ONE, "add_mixed expects an affine operand");
        if self.is_zero() {
            return *other;
        }

        // http://www.hyperelliptic.org/EFD/g1p/auto-shortw-jacobian-0.html#addition-madd-2007-bl
        let z1z1 = self.z.square();
        let u2 = other.x * z1z1;
        let s2 = other.y * self.z * z1z1;

        if self.x == u2 {
            return if self.y == s2 { self.double() } else { PointG2::zero() };
        }

        let h = u2 - self.x;
        let hh = h.square();
        let i = hh.double().double();
        let j = h * i;
        let r = (s2 - self.y).double();
        let v = self.x * i;

        let x3 = r.square() - j - v.double();
        let y3 = r * (v - x3) - (self.y * j).double();
        let z3 = (self.z + h).square() - z1z1 - hh;
        PointG2 { x: x3, y: y3, z: z3 }
    }

    pub fn neg(self) -> PointG2 {
        PointG2 { x: self.x, y: -self.y, z: self.z }
    }

    pub fn sub(self, other: &PointG2) -> PointG2 {
        self.add(&other.neg())
    }

    /// Normalizes to Z = 1. The identity maps to (0, 1, 0).
    pub fn affine(&self) -> PointG2 {
        match self.z.inverse() {
            None => PointG2::zero(),
            Some(z_inv) => {
                let z_inv2 = z_inv.square();
                PointG2 { x: self.x * z_inv2, y: self.y * z_inv2 * z_inv, z: Fq2::ONE }
            }
        }
    }

    /// Affine coordinates, `None` for the identity
    pub fn to_affine_coords(&self) -> Option<(Fq2, Fq2)> {
        let p = self.affine();
        (!p.is_zero()).then_some((p.x, p.y))
    }

    /// Normalizes every point of the slice with a single inversion.
    /// Identities are left as they are.
    pub fn affine_batch(points: &mut [PointG2]) {
        let mut prefix = Vec::with_capacity(points.len());
        let mut acc = Fq2::ONE;
        for p in points.iter() {
            prefix.push(acc);
            if !p.is_zero() {
                acc *= p.z;
            }
        }

        let Some(mut inv) = acc.inverse() else {
            return;
        };
        for (p, before) in points.iter_mut().zip(prefix).rev() {
            if p.is_zero() {
                continue;
            }
            let z_inv = inv * before;
            inv *= p.z;

            let z_inv2 = z_inv.square();
            p.x *= z_inv2;
            p.y *= z_inv2 * z_inv;
            p.z = Fq2::ONE;
        }
    }
}

impl Default for PointG2 {
    fn default() -> Self {
        PointG2::zero()
    }
}

impl PartialEq for PointG2 {
    fn eq(&self, other: &Self) -> bool {
        self.equal(other)
    }
}

impl Eq for PointG2 {}

impl Add for PointG2 {
    type Output = PointG2;

    fn add(self, rhs: PointG2) -> PointG2 {
        PointG2::add(self, &rhs)
    }
}

impl<'a> Add<&'a PointG2> for &'a PointG2 {
    type Output = PointG2;

    fn add(self, rhs: &'a PointG2) -> PointG2 {
        PointG2::add(*self, rhs)
    }
}

impl AddAssign for PointG2 {
    fn add_assign(&mut self, rhs: PointG2) {
        *self = PointG2::add(*self, &rhs);
    }
}

impl Sub for PointG2 {
    type Output = PointG2;

    fn sub(self, rhs: PointG2) -> PointG2 {
        PointG2::sub(self, &rhs)
    }
}

impl<'a> Sub<&'a PointG2> for &'a PointG2 {
    type Output = PointG2;

    fn sub(self, rhs: &'a PointG2) -> PointG2 {
        PointG2::sub(*self, rhs)
    }
}

impl SubAssign for PointG2 {
    fn sub_assign(&mut self, rhs: PointG2) {
        *self = PointG2::sub(*self, &rhs);
    }
}

impl Neg for PointG2 {
    type Output = PointG2;

    fn neg(self) -> PointG2 {
        PointG2::neg(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{random_curve_point, random_point};

    const FUZ: usize = 10;

    /// Rescales the coordinates by a random λ: (λ²X, λ³Y, λZ)
    fn rescale(p: &PointG2) -> PointG2 {
        let l = Fq2::new(5u64.into(), 7u64.into());
        let l2 = l.square();
        PointG2 { x: p.x * l2, y: p.y * l2 * l, z: p.z * l }
    }

    #[test]
    fn test_generator_on_curve() {
        assert!(PointG2::generator().is_on_curve());
        assert!(PointG2::zero().is_on_curve());
        assert!(!PointG2::from_affine(Fq2::ONE, Fq2::ONE).is_on_curve());
    }

    #[test]
    fn test_equality_is_projective() {
        let a = random_point();
        let b = rescale(&a);
        assert_ne!(a.z, b.z);
        assert_eq!(a, b);
        assert_eq!(a.affine(), b);
        assert_ne!(a, a.double());
        assert_ne!(a, PointG2::zero());
        assert_eq!(PointG2::zero(), rescale(&PointG2::zero()));
    }

    #[test]
    fn test_additive_identity() {
        let zero = PointG2::zero();
        for _ in 0..FUZ {
            let a = random_point();
            assert_eq!(a + zero, a);
            assert_eq!(zero + a, a);
            assert_eq!(a - zero, a);
            assert_eq!(-zero, zero);
            assert_eq!(zero.double(), zero);
            let c = a.double() - a;
            assert_eq!(c, a);
            assert!(c.is_on_curve());
            assert!((a - a).is_zero());
        }
    }

    #[test]
    fn test_additive_properties() {
        for _ in 0..FUZ {
            let a = random_point();
            let b = random_point();
            let c = random_point();
            assert_eq!(a + b, b + a);
            assert_eq!(a - b, -(b - a));
            assert_eq!((a + b) + c, (a + c) + b);
            assert_eq!((a - b) - c, (a - c) - b);
            assert_eq!(a + a, a.double());
            assert_eq!(a + rescale(&a), a.double());
            assert!((a + b).is_on_curve());
        }
    }

    #[test]
    fn test_group_law_off_subgroup() {
        for _ in 0..FUZ {
            let a = random_curve_point();
            let b = random_curve_point();
            assert!((a + b).is_on_curve());
            assert!(a.double().is_on_curve());
            assert_eq!((a + b) - b, a);
        }
    }

    #[test]
    fn test_add_mixed_agrees() {
        for _ in 0..FUZ {
            let a = rescale(&random_point());
            let b = random_point().affine();
            assert_eq!(a.add_mixed(&b), a + b);
            assert_eq!(a.add_mixed(&a.affine()), a.double());
            assert!(a.add_mixed(&a.neg().affine()).is_zero());
            assert_eq!(PointG2::zero().add_mixed(&b), b);
            assert_eq!(a.add_mixed(&PointG2::zero()), a);
        }
    }

    #[test]
    fn test_affine() {
        let a = rescale(&random_point());
        let n = a.affine();
        assert_eq!(n.z, Fq2::ONE);
        assert_eq!(n, a);
        let z = PointG2::zero().affine();
        assert_eq!((z.x, z.y, z.z), (Fq2::ZERO, Fq2::ONE, Fq2::ZERO));
        assert!(PointG2::zero().to_affine_coords().is_none());
        assert_eq!(a.to_affine_coords(), Some((n.x, n.y)));
    }

    #[test]
    fn test_affine_batch() {
        let mut points: Vec<PointG2> = (0..6).map(|_| rescale(&random_point())).collect();
        points.insert(2, PointG2::zero());
        let expected = points.clone();
        PointG2::affine_batch(&mut points);
        for (p, e) in points.iter().zip(&expected) {
            assert_eq!(p, e);
            if !p.is_zero() {
                assert_eq!(p.z, Fq2::ONE);
                assert_eq!(p.x, e.affine().x);
            }
        }
        PointG2::affine_batch(&mut []);
    }
}
