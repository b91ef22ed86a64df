//! Operand classification for the FPSCR's FPRF field.
//!
//! After most floating-point operations the PowerPC FPU records the class and
//! sign of the result in FPRF (the class descriptor bit `C` plus the four FPCC
//! condition bits). The classifier here is the total map from a raw bit
//! pattern to that class; writing the bits into the FPSCR image is the
//! interpreter's job.

use bitflags::bitflags;
use thiserror::Error;

use crate::bits::{F32Fields, F64Fields, F32_EXP, F64_EXP};

bitflags! {
    /// The five bits of the FPSCR's FPRF field.
    #[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
    pub struct Fprf: u32 {
        /// Class descriptor.
        const C = 1 << 4;
        /// Less than or negative (FPCC bit 0).
        const FL = 1 << 3;
        /// Greater than or positive (FPCC bit 1).
        const FG = 1 << 2;
        /// Equal or zero (FPCC bit 2).
        const FE = 1 << 1;
        /// Unordered or NaN (FPCC bit 3).
        const FU = 1 << 0;
    }
}

/// Result class as reported in FPRF.
///
/// Discriminants are the architected five-bit FPRF encodings, so `class as
/// u32` can be placed in the FPSCR verbatim and the numeric mapping is stable
/// across releases. There are exactly nine: eight sign-split classes plus
/// NaN, which FPRF reports without a sign.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[repr(u32)]
pub enum FpClass {
    /// NaN (quiet or signaling; FPRF does not distinguish).
    QuietNan = 0x11,
    NegativeInfinity = 0x09,
    NegativeNormal = 0x08,
    NegativeDenormal = 0x18,
    NegativeZero = 0x12,
    PositiveZero = 0x02,
    PositiveDenormal = 0x14,
    PositiveNormal = 0x04,
    PositiveInfinity = 0x05,
}

impl FpClass {
    /// The FPRF bits for this class.
    #[inline]
    pub fn fprf(self) -> Fprf {
        Fprf::from_bits_truncate(self as u32)
    }
}

/// A five-bit value that is not one of the nine architected FPRF class
/// encodings (23 of the 32 patterns are unassigned).
#[derive(Debug, Error, Copy, Clone, PartialEq, Eq)]
#[error("invalid FPRF class encoding {0:#04X}")]
pub struct InvalidFpClass(pub u32);

impl TryFrom<u32> for FpClass {
    type Error = InvalidFpClass;

    fn try_from(raw: u32) -> Result<Self, Self::Error> {
        Ok(match raw {
            0x11 => FpClass::QuietNan,
            0x09 => FpClass::NegativeInfinity,
            0x08 => FpClass::NegativeNormal,
            0x18 => FpClass::NegativeDenormal,
            0x12 => FpClass::NegativeZero,
            0x02 => FpClass::PositiveZero,
            0x14 => FpClass::PositiveDenormal,
            0x04 => FpClass::PositiveNormal,
            0x05 => FpClass::PositiveInfinity,
            _ => return Err(InvalidFpClass(raw)),
        })
    }
}

/// Classify a double-precision operand the way FPRF reports it.
///
/// Field-equality tests only; magnitude comparisons would misread NaN
/// payloads and denormals.
pub fn classify_f64(v: f64) -> FpClass {
    let f = F64Fields::from_f64(v);
    let negative = f.sign != 0;

    // Normals are the common case: 0 < exponent < all-ones.
    if f.exponent > 0 && f.exponent < F64_EXP {
        return if negative {
            FpClass::NegativeNormal
        } else {
            FpClass::PositiveNormal
        };
    }

    if f.mantissa != 0 {
        if f.exponent != 0 {
            // All-ones exponent: NaN, sign ignored.
            return FpClass::QuietNan;
        }
        return if negative {
            FpClass::NegativeDenormal
        } else {
            FpClass::PositiveDenormal
        };
    }

    if f.exponent != 0 {
        return if negative {
            FpClass::NegativeInfinity
        } else {
            FpClass::PositiveInfinity
        };
    }

    if negative {
        FpClass::NegativeZero
    } else {
        FpClass::PositiveZero
    }
}

/// Classify a single-precision operand the way FPRF reports it.
///
/// Same decision tree as [`classify_f64`] over the `f32` field layout.
pub fn classify_f32(v: f32) -> FpClass {
    let f = F32Fields::from_f32(v);
    let negative = f.sign != 0;

    if f.exponent > 0 && f.exponent < F32_EXP {
        return if negative {
            FpClass::NegativeNormal
        } else {
            FpClass::PositiveNormal
        };
    }

    if f.mantissa != 0 {
        if f.exponent != 0 {
            return FpClass::QuietNan;
        }
        return if negative {
            FpClass::NegativeDenormal
        } else {
            FpClass::PositiveDenormal
        };
    }

    if f.exponent != 0 {
        return if negative {
            FpClass::NegativeInfinity
        } else {
            FpClass::PositiveInfinity
        };
    }

    if negative {
        FpClass::NegativeZero
    } else {
        FpClass::PositiveZero
    }
}
