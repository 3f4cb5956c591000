//! Constants of the BLS12-381 G2 group: twist coefficient, generator, group order,
//! GLV lattice and endomorphism constants

use ark_bls12_381::{Fq, Fq2};
use ark_ff::MontFp;
use lazy_static::lazy_static;
use num_bigint::BigUint;

/// Absolute value of the curve parameter x = -0xd201000000010000
pub const X_ABS: u64 = 0xd201000000010000;

/// The curve parameter is negative
pub const X_IS_NEGATIVE: bool = true;

/// Twist coefficient b' = 4·(1+u) of E': y² = x³ + 4·(1+u)
pub const TWIST_B: Fq2 = Fq2::new(MontFp!("4"), MontFp!("4"));

/// Generator of G2
pub const G2_GENERATOR_X: Fq2 = Fq2::new(
    MontFp!("352701069587466618187139116011060144890029952792775240219908644239793785735715026873347600343865175952761926303160"),
    MontFp!("3059144344244213709971259814753781636986470325476647558659373206291635324768958432433509563104347017837885763365758"),
);
pub const G2_GENERATOR_Y: Fq2 = Fq2::new(
    MontFp!("1985150602287291935568054521177171638300868978215655730859378665066344726373823718423869104263333984641494340347905"),
    MontFp!("927553665492332455747201965776037880757740193453592970025027978793976877002675564980949289727957565575433344219582"),
);

/// Group order q in little-endian words
pub const Q: [u64; 4] =
    [0xffffffff00000001, 0x53bda402fffe5bfe, 0x3339d80809a1d805, 0x73eda753299d7d48];

/// (p - 1) / 2 in little-endian words, used by the lexicographic sign of Fp elements
pub const P_MINUS_ONE_DIV_TWO: [u64; 6] = [
    0xdcff7fffffffd555,
    0x0f55ffff58a9ffff,
    0xb39869507b587b12,
    0xb23ba5c279c2895f,
    0x258dd3db21a5d66b,
    0x0d0088f51cbff34d,
];

// Guide to Pairing Based Cryptography, 6.3.2. Decompositions for the k = 12 BLS family

/// Q1 = ⌊x²·2²⁵⁶ / q⌋
pub const GLV_Q1: [u64; 4] = [0x63f6e522f6cfee30, 0x7c6becf1e01faadd, 0x1, 0x0];

/// Q2 = ⌊2²⁵⁶ / q⌋
pub const GLV_Q2: [u64; 4] = [0x2, 0x0, 0x0, 0x0];

/// B1 = x² - 1
pub const GLV_B1: [u64; 4] = [0x00000000ffffffff, 0xac45a4010001a402, 0x0, 0x0];

/// B2 = x²
pub const GLV_B2: [u64; 4] = [0x0000000100000000, 0xac45a4010001a402, 0x0, 0x0];

/// λ = x² - 1, eigenvalue of the GLV endomorphism on G2: φ(P) = λ·P
pub const GLV_LAMBDA: [u64; 4] = GLV_B1;

/// 2¹²⁸ - 1, bound on the magnitude of both halves of a decomposed scalar
pub const R128: [u64; 4] = [u64::MAX, u64::MAX, 0x0, 0x0];

/// Cube root of unity β in Fp such that φ(x, y) = (β·x, y) acts as λ on G2
pub const GLV_BETA: Fq = MontFp!(
    "793479390729215512621379701633421447060886740281060493010456487427281649075476305620758731620350"
);

/// ψ(x, y) = (x̅·PSI_C1, y̅·PSI_C2), with PSI_C1 = 1/(1+u)^((p-1)/3)
pub const PSI_C1: Fq2 = Fq2::new(
    MontFp!("0"),
    MontFp!("4002409555221667392624310435006688643935503118305586438271171395842971157480381377015405980053539358417135540939437"),
);

/// PSI_C2 = 1/(1+u)^((p-1)/2)
pub const PSI_C2: Fq2 = Fq2::new(
    MontFp!("2973677408986561043442465346520108879172042883009249989176415018091420807192182638567116318576472649347015917690530"),
    MontFp!("1028732146235106349975324479215795277384839936929757896155643118032610843298655225875571310552543014690878354869257"),
);

/// ψ²(x, y) = (x·PSI2_C1, -y), with PSI2_C1 = 1/2^((p-1)/3)
pub const PSI2_C1: Fq = MontFp!(
    "4002409555221667392624310435006688643935503118305586438271171395842971157480381377015405980053539358417135540939436"
);

lazy_static! {
    /// Group order q
    pub static ref Q_BIG: BigUint = BigUint::parse_bytes(
        b"73eda753299d7d483339d80809a1d80553bda402fffe5bfeffffffff00000001",
        16
    )
    .unwrap();

    /// Effective cofactor of G2 used for cofactor clearing
    pub static ref H_EFF_BIG: BigUint = BigUint::parse_bytes(
        b"bc69f08f2ee75b3584c6a0ea91b352888e2a8e9145ad7689986ff031508ffe1329c2f178731db956d82bf015d1212b02ec0ec69d7477c1ae954cbc06689f6a359894c0adebbf6b4e8020005aaa95551",
        16
    )
    .unwrap();

    pub static ref GLV_Q1_BIG: BigUint =
        BigUint::parse_bytes(b"17c6becf1e01faadd63f6e522f6cfee30", 16).unwrap();

    pub static ref GLV_Q2_BIG: BigUint = BigUint::from(2u64);

    pub static ref GLV_B1_BIG: BigUint =
        BigUint::parse_bytes(b"ac45a4010001a40200000000ffffffff", 16).unwrap();

    pub static ref GLV_B2_BIG: BigUint =
        BigUint::parse_bytes(b"ac45a4010001a4020000000100000000", 16).unwrap();

    /// 2²⁵⁵, added before the shift so that the division by 2²⁵⁶ rounds half up
    pub static ref HALF_R_BIG: BigUint = BigUint::from(1u64) << 255;

    pub static ref R128_BIG: BigUint = (BigUint::from(1u64) << 128) - 1u64;
}

