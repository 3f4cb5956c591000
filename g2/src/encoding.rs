//! Wire encodings of G2 points
//!
//! Each Fp2 coordinate is written as c1 then c0, each 48 bytes big-endian.
//! The three most significant bits of the first byte carry the flags of the
//! compressed and uncompressed forms:
//! - Bit 7 (0x80): Compression flag
//! - Bit 6 (0x40): Infinity flag
//! - Bit 5 (0x20): Sort flag (1 = y is lexicographically largest)

use ark_bls12_381::Fq2;
use ark_ff::{Field, PrimeField, Zero};
use tracing::debug;

use crate::constants::{P_MINUS_ONE_DIV_TWO, TWIST_B};
use crate::g2::G2;
use crate::point::PointG2;
use crate::utils::{fq_from_bytes_be, fq_to_bytes_be, gt};
use crate::{G2Error, Result};

pub const G2_COMPRESSED_SIZE: usize = 96;
pub const G2_UNCOMPRESSED_SIZE: usize = 192;

const COMPRESSION_FLAG: u8 = 0x80;
const INFINITY_FLAG: u8 = 0x40;
const SORT_FLAG: u8 = 0x20;
const FLAGS_MASK: u8 = 0xe0;

fn malformed(reason: &'static str) -> G2Error {
    debug!("Rejected G2 encoding: {}", reason);
    G2Error::MalformedEncoding(reason)
}

/// y = y_r + y_i·u is the larger root if y_i > (p-1)/2, or y_i = 0 and y_r > (p-1)/2
fn is_lexicographically_largest(y: &Fq2) -> bool {
    let c1 = y.c1.into_bigint().0;
    if !y.c1.is_zero() {
        return gt(&c1, &P_MINUS_ONE_DIV_TWO);
    }
    gt(&y.c0.into_bigint().0, &P_MINUS_ONE_DIV_TWO)
}

fn write_fq2(e: &Fq2, out: &mut [u8]) {
    fq_to_bytes_be(&e.c1, &mut out[..48]);
    fq_to_bytes_be(&e.c0, &mut out[48..96]);
}

fn read_fq2(bytes: &[u8]) -> Result<Fq2> {
    let c1 = fq_from_bytes_be(&bytes[..48])
        .ok_or_else(|| malformed("coordinate is not below the field modulus"))?;
    let c0 = fq_from_bytes_be(&bytes[48..96])
        .ok_or_else(|| malformed("coordinate is not below the field modulus"))?;
    Ok(Fq2::new(c0, c1))
}

/// Accepts an infinity encoding only if every bit but the flags in `allowed` is zero
fn check_infinity(input: &[u8], allowed: u8) -> Result<()> {
    if input[0] & !allowed != 0 || input[1..].iter().any(|&b| b != 0) {
        return Err(malformed("non-canonical infinity encoding"));
    }
    Ok(())
}

impl G2 {
    pub fn to_compressed(&self, p: &PointG2) -> [u8; G2_COMPRESSED_SIZE] {
        let mut out = [0u8; G2_COMPRESSED_SIZE];
        match p.to_affine_coords() {
            None => out[0] = COMPRESSION_FLAG | INFINITY_FLAG,
            Some((x, y)) => {
                write_fq2(&x, &mut out);
                out[0] |= COMPRESSION_FLAG;
                if is_lexicographically_largest(&y) {
                    out[0] |= SORT_FLAG;
                }
            }
        }
        out
    }

    /// Decompresses a point from its 96-byte form, recovering y from x
    pub fn from_compressed(&self, input: &[u8]) -> Result<PointG2> {
        if input.len() != G2_COMPRESSED_SIZE {
            return Err(malformed("compressed G2 point must be 96 bytes"));
        }
        let flags = input[0];
        if flags & COMPRESSION_FLAG == 0 {
            return Err(malformed("compression flag not set"));
        }
        if flags & INFINITY_FLAG != 0 {
            check_infinity(input, COMPRESSION_FLAG | INFINITY_FLAG)?;
            return Ok(PointG2::zero());
        }
        let y_sign = flags & SORT_FLAG != 0;

        let mut buf = [0u8; G2_COMPRESSED_SIZE];
        buf.copy_from_slice(input);
        buf[0] &= !FLAGS_MASK;
        let x = read_fq2(&buf)?;

        // y² = x³ + 4·(1+u)
        let y2 = x.square() * x + TWIST_B;
        let mut y = y2.sqrt().ok_or_else(|| malformed("x is not the abscissa of a curve point"))?;
        if is_lexicographically_largest(&y) != y_sign {
            y = -y;
        }

        let p = PointG2::from_affine(x, y);
        self.check_subgroup(&p)?;
        Ok(p)
    }

    pub fn to_uncompressed(&self, p: &PointG2) -> [u8; G2_UNCOMPRESSED_SIZE] {
        let mut out = [0u8; G2_UNCOMPRESSED_SIZE];
        match p.to_affine_coords() {
            None => out[0] = INFINITY_FLAG,
            Some((x, y)) => {
                write_fq2(&x, &mut out[..96]);
                write_fq2(&y, &mut out[96..]);
            }
        }
        out
    }

    pub fn from_uncompressed(&self, input: &[u8]) -> Result<PointG2> {
        if input.len() != G2_UNCOMPRESSED_SIZE {
            return Err(malformed("uncompressed G2 point must be 192 bytes"));
        }
        let flags = input[0];
        if flags & COMPRESSION_FLAG != 0 {
            return Err(malformed("compression flag set on an uncompressed point"));
        }
        if flags & INFINITY_FLAG != 0 {
            check_infinity(input, INFINITY_FLAG)?;
            return Ok(PointG2::zero());
        }
        if flags & SORT_FLAG != 0 {
            return Err(malformed("sort flag set on an uncompressed point"));
        }

        let p = PointG2::from_affine(read_fq2(&input[..96])?, read_fq2(&input[96..])?);
        if !p.is_on_curve() {
            debug!("Rejected G2 encoding: point is not on curve");
            return Err(G2Error::PointNotOnCurve);
        }
        self.check_subgroup(&p)?;
        Ok(p)
    }

    /// Flag-free form of the affine coordinates, the identity being all zeros
    pub fn to_bytes(&self, p: &PointG2) -> [u8; G2_UNCOMPRESSED_SIZE] {
        let mut out = [0u8; G2_UNCOMPRESSED_SIZE];
        if let Some((x, y)) = p.to_affine_coords() {
            write_fq2(&x, &mut out[..96]);
            write_fq2(&y, &mut out[96..]);
        }
        out
    }

    pub fn from_bytes(&self, input: &[u8]) -> Result<PointG2> {
        if input.len() != G2_UNCOMPRESSED_SIZE {
            return Err(malformed("G2 point must be 192 bytes"));
        }
        if input.iter().all(|&b| b == 0) {
            return Ok(PointG2::zero());
        }

        let p = PointG2::from_affine(read_fq2(&input[..96])?, read_fq2(&input[96..])?);
        if !p.is_on_curve() {
            debug!("Rejected G2 encoding: point is not on curve");
            return Err(G2Error::PointNotOnCurve);
        }
        Ok(p)
    }

    fn check_subgroup(&self, p: &PointG2) -> Result<()> {
        if self.config().subgroup_check && !p.is_torsion_free() {
            debug!("Rejected G2 encoding: point is not in the prime-order subgroup");
            return Err(G2Error::PointNotInSubgroup);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::G2Config;
    use crate::test_utils::{random_curve_point, random_point};
    use ark_bls12_381::Fq;

    const FUZ: usize = 10;

    fn unchecked() -> G2 {
        G2::with_config(G2Config { subgroup_check: false, ..G2Config::default() }).unwrap()
    }

    #[test]
    fn test_generator_compressed() {
        let g = G2::new();
        let bytes = g.to_compressed(&g.one());
        assert_eq!(&bytes[..4], &[0x93, 0xe0, 0x2b, 0x60]);
        assert_eq!(g.from_compressed(&bytes).unwrap(), g.one());
    }

    #[test]
    fn test_roundtrip() {
        let g = G2::new();
        let mut points = vec![PointG2::zero(), g.one(), -g.one()];
        points.extend((0..FUZ).map(|_| random_point()));
        for p in points {
            assert_eq!(g.from_compressed(&g.to_compressed(&p)).unwrap(), p);
            assert_eq!(g.from_uncompressed(&g.to_uncompressed(&p)).unwrap(), p);
            assert_eq!(g.from_bytes(&g.to_bytes(&p)).unwrap(), p);
        }
    }

    #[test]
    fn test_encoding_is_canonical() {
        let g = G2::new();
        let p = random_point();
        let q = p.double() - p;
        assert_ne!(p.z, q.z);
        assert_eq!(g.to_compressed(&p), g.to_compressed(&q));
        assert_eq!(g.to_uncompressed(&p), g.to_uncompressed(&q));
        assert_eq!(g.to_bytes(&p), g.to_bytes(&q));
    }

    #[test]
    fn test_identity_encodings() {
        let g = G2::new();
        let zero = PointG2::zero();
        let c = g.to_compressed(&zero);
        assert_eq!(c[0], 0xc0);
        assert!(c[1..].iter().all(|&b| b == 0));
        let u = g.to_uncompressed(&zero);
        assert_eq!(u[0], 0x40);
        assert!(u[1..].iter().all(|&b| b == 0));
        assert!(g.to_bytes(&zero).iter().all(|&b| b == 0));
    }

    #[test]
    fn test_sort_flag_selects_root() {
        let g = G2::new();
        for _ in 0..FUZ {
            let p = random_point();
            let mut bytes = g.to_compressed(&p);
            bytes[0] ^= SORT_FLAG;
            assert_eq!(g.from_compressed(&bytes).unwrap(), -p);
        }
    }

    #[test]
    fn test_rejects_bad_lengths() {
        let g = G2::new();
        assert!(matches!(g.from_compressed(&[0xc0; 95]), Err(G2Error::MalformedEncoding(_))));
        assert!(matches!(g.from_uncompressed(&[0u8; 96]), Err(G2Error::MalformedEncoding(_))));
        assert!(matches!(g.from_bytes(&[0u8; 193]), Err(G2Error::MalformedEncoding(_))));
    }

    #[test]
    fn test_rejects_bad_flags() {
        let g = G2::new();
        let p = random_point();

        let mut c = g.to_compressed(&p);
        c[0] &= !COMPRESSION_FLAG;
        assert!(matches!(g.from_compressed(&c), Err(G2Error::MalformedEncoding(_))));

        let mut u = g.to_uncompressed(&p);
        u[0] |= COMPRESSION_FLAG;
        assert!(matches!(g.from_uncompressed(&u), Err(G2Error::MalformedEncoding(_))));

        let mut u = g.to_uncompressed(&p);
        u[0] |= SORT_FLAG;
        assert!(matches!(g.from_uncompressed(&u), Err(G2Error::MalformedEncoding(_))));

        // Infinity with a sort flag or trailing garbage
        let mut c = g.to_compressed(&PointG2::zero());
        c[0] |= SORT_FLAG;
        assert!(matches!(g.from_compressed(&c), Err(G2Error::MalformedEncoding(_))));
        let mut c = g.to_compressed(&PointG2::zero());
        c[95] = 1;
        assert!(matches!(g.from_compressed(&c), Err(G2Error::MalformedEncoding(_))));
        let mut u = g.to_uncompressed(&PointG2::zero());
        u[100] = 1;
        assert!(matches!(g.from_uncompressed(&u), Err(G2Error::MalformedEncoding(_))));

        // Flag bits in the raw form push the coordinate above p
        let mut b = g.to_bytes(&p);
        b[0] |= INFINITY_FLAG;
        assert!(matches!(g.from_bytes(&b), Err(G2Error::MalformedEncoding(_))));
    }

    #[test]
    fn test_rejects_non_canonical_coordinate() {
        let g = G2::new();
        let p = random_point();
        let mut c = g.to_compressed(&p);
        for b in c[48..].iter_mut() {
            *b = 0xff;
        }
        assert!(matches!(g.from_compressed(&c), Err(G2Error::MalformedEncoding(_))));
    }

    #[test]
    fn test_rejects_x_without_root() {
        let g = G2::new();
        let x = (1u64..)
            .map(|i| Fq2::new(Fq::from(i), Fq::zero()))
            .find(|x| (x.square() * x + TWIST_B).sqrt().is_none())
            .unwrap();
        let mut c = [0u8; G2_COMPRESSED_SIZE];
        write_fq2(&x, &mut c);
        c[0] |= COMPRESSION_FLAG;
        assert!(matches!(g.from_compressed(&c), Err(G2Error::MalformedEncoding(_))));
    }

    #[test]
    fn test_rejects_point_not_on_curve() {
        let g = G2::new();
        let bad = PointG2::from_affine(Fq2::ONE, Fq2::ONE);
        let mut u = [0u8; G2_UNCOMPRESSED_SIZE];
        write_fq2(&bad.x, &mut u[..96]);
        write_fq2(&bad.y, &mut u[96..]);
        assert_eq!(g.from_uncompressed(&u), Err(G2Error::PointNotOnCurve));
        assert_eq!(g.from_bytes(&u), Err(G2Error::PointNotOnCurve));
    }

    #[test]
    fn test_subgroup_check_on_decode() {
        let g = G2::new();
        let lax = unchecked();
        for _ in 0..FUZ {
            let p = random_curve_point();
            let c = g.to_compressed(&p);
            let u = g.to_uncompressed(&p);
            assert_eq!(g.from_compressed(&c), Err(G2Error::PointNotInSubgroup));
            assert_eq!(g.from_uncompressed(&u), Err(G2Error::PointNotInSubgroup));
            assert_eq!(lax.from_compressed(&c).unwrap(), p);
            assert_eq!(lax.from_uncompressed(&u).unwrap(), p);
            assert_eq!(g.from_bytes(&g.to_bytes(&p)).unwrap(), p);
        }
    }
}
