//! Cofactor clearing and the fast subgroup check, both driven by the
//! untwist-Frobenius-twist endomorphism ψ

use ark_bls12_381::{Fq, Fq2};

use crate::constants::{PSI2_C1, PSI_C1, PSI_C2, X_ABS, X_IS_NEGATIVE};
use crate::point::PointG2;

fn conjugate(a: &Fq2) -> Fq2 {
    Fq2::new(a.c0, -a.c1)
}

fn mul_by_fq(a: &Fq2, b: &Fq) -> Fq2 {
    Fq2::new(a.c0 * b, a.c1 * b)
}

impl PointG2 {
    /// ψ(P) = (x̅·PSI_C1, y̅·PSI_C2), applied directly on Jacobian coordinates
    pub fn psi(&self) -> PointG2 {
        PointG2::new(
            conjugate(&self.x) * PSI_C1,
            conjugate(&self.y) * PSI_C2,
            conjugate(&self.z),
        )
    }

    /// ψ²(P) = (x·PSI2_C1, -y)
    pub fn psi2(&self) -> PointG2 {
        PointG2::new(mul_by_fq(&self.x, &PSI2_C1), -self.y, self.z)
    }

    fn mul_by_x_abs(&self) -> PointG2 {
        let mut acc = PointG2::zero();
        for i in (0..64 - X_ABS.leading_zeros()).rev() {
            acc = acc.double();
            if (X_ABS >> i) & 1 == 1 {
                acc = acc + *self;
            }
        }
        acc
    }

    /// [x]P for the curve parameter x
    pub fn mul_by_x(&self) -> PointG2 {
        let r = self.mul_by_x_abs();
        if X_IS_NEGATIVE {
            r.neg()
        } else {
            r
        }
    }

    /// Maps any point of the twist into the prime-order subgroup by multiplying
    /// with the effective cofactor:
    ///     h_eff·P = [x² - x - 1]P + [x - 1]ψ(P) + ψ²(2P)
    pub fn clear_cofactor(&mut self) -> &mut Self {
        let p = *self;
        let t1 = p.mul_by_x();
        let t2 = p.psi();

        // ψ²(2P) - ψ(P)
        let mut t3 = p.double().psi2() - t2;

        // [x](t1 + t2) = [x²]P + [x]ψ(P)
        let t2 = (t1 + t2).mul_by_x();

        t3 = t3 + t2 - t1 - p;
        *self = t3;
        self
    }

    /// Prime-order subgroup membership via ψ(P) = [x]P
    pub fn is_torsion_free(&self) -> bool {
        self.psi() == self.mul_by_x()
    }
}
