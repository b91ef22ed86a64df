//! Bit-level views of IEEE-754 values.
//!
//! The FPU model works on raw bit patterns, not on host float semantics: NaN
//! payloads, signed zeros and denormals must survive every round trip exactly.
//! Reinterpretation goes through [`f64::to_bits`] / [`f64::from_bits`] (and the
//! `f32` equivalents), and the field views below keep each field *in place*
//! (masked, not shifted down) because the estimate paths do their exponent and
//! mantissa arithmetic directly on the positioned fields.

/// Sign bit of an `f64` pattern (bit 63).
pub const F64_SIGN: u64 = 0x8000_0000_0000_0000;
/// Biased exponent field of an `f64` pattern (bits 52..=62).
pub const F64_EXP: u64 = 0x7FF0_0000_0000_0000;
/// Mantissa (fraction) field of an `f64` pattern (bits 0..=51).
pub const F64_FRAC: u64 = 0x000F_FFFF_FFFF_FFFF;

/// Sign bit of an `f32` pattern (bit 31).
pub const F32_SIGN: u32 = 0x8000_0000;
/// Biased exponent field of an `f32` pattern (bits 23..=30).
pub const F32_EXP: u32 = 0x7F80_0000;
/// Mantissa (fraction) field of an `f32` pattern (bits 0..=22).
pub const F32_FRAC: u32 = 0x007F_FFFF;

/// The three fields of an `f64` bit pattern, each kept at its in-register
/// position.
///
/// `from_bits` followed by [`to_bits`](Self::to_bits) is the identity for
/// every pattern, including all NaN payloads.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct F64Fields {
    /// Bit 63, in place (`0` or [`F64_SIGN`]).
    pub sign: u64,
    /// Bits 52..=62, in place (a multiple of `1 << 52`).
    pub exponent: u64,
    /// Bits 0..=51.
    pub mantissa: u64,
}

impl F64Fields {
    #[inline]
    pub fn from_bits(bits: u64) -> Self {
        Self {
            sign: bits & F64_SIGN,
            exponent: bits & F64_EXP,
            mantissa: bits & F64_FRAC,
        }
    }

    #[inline]
    pub fn from_f64(v: f64) -> Self {
        Self::from_bits(v.to_bits())
    }

    #[inline]
    pub fn to_bits(self) -> u64 {
        self.sign | self.exponent | self.mantissa
    }

    #[inline]
    pub fn to_f64(self) -> f64 {
        f64::from_bits(self.to_bits())
    }
}

/// The three fields of an `f32` bit pattern, each kept at its in-register
/// position.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct F32Fields {
    /// Bit 31, in place (`0` or [`F32_SIGN`]).
    pub sign: u32,
    /// Bits 23..=30, in place (a multiple of `1 << 23`).
    pub exponent: u32,
    /// Bits 0..=22.
    pub mantissa: u32,
}

impl F32Fields {
    #[inline]
    pub fn from_bits(bits: u32) -> Self {
        Self {
            sign: bits & F32_SIGN,
            exponent: bits & F32_EXP,
            mantissa: bits & F32_FRAC,
        }
    }

    #[inline]
    pub fn from_f32(v: f32) -> Self {
        Self::from_bits(v.to_bits())
    }

    #[inline]
    pub fn to_bits(self) -> u32 {
        self.sign | self.exponent | self.mantissa
    }

    #[inline]
    pub fn to_f32(self) -> f32 {
        f32::from_bits(self.to_bits())
    }
}
