//! Table-driven estimate instructions (`fres`, `frsqrte`).
//!
//! The ISA leaves the estimate results implementation-defined, and the 750
//! family computes them with a small lookup ROM plus one linear-interpolation
//! step. Guest code is known to key on the exact output bits (fast
//! inverse-square-root kernels, hash-like uses of the low mantissa bits), so
//! everything here runs on raw bit patterns; host float arithmetic is used
//! only for the NaN pass-through.
//!
//! Each ROM row holds a base value and the decrement applied per step of the
//! in-row interpolation. `frsqrte` keeps separate row groups for even and odd
//! exponents; `fres` has a single group.

use crate::bits::{F64_EXP, F64_FRAC, F64_SIGN};

/// One ROM row: interpolation base plus the per-step decrement across the row.
struct RomEntry {
    base: i64,
    dec: i64,
}

static FRSQRTE_ROM: [RomEntry; 32] = [
    // Even exponent half.
    RomEntry { base: 0x3FFA000, dec: 0x7A4 },
    RomEntry { base: 0x3C29000, dec: 0x700 },
    RomEntry { base: 0x38AA000, dec: 0x670 },
    RomEntry { base: 0x3572000, dec: 0x5F2 },
    RomEntry { base: 0x3279000, dec: 0x584 },
    RomEntry { base: 0x2FB7000, dec: 0x524 },
    RomEntry { base: 0x2D26000, dec: 0x4CC },
    RomEntry { base: 0x2AC0000, dec: 0x47E },
    RomEntry { base: 0x2881000, dec: 0x43A },
    RomEntry { base: 0x2665000, dec: 0x3FA },
    RomEntry { base: 0x2468000, dec: 0x3C2 },
    RomEntry { base: 0x2287000, dec: 0x38E },
    RomEntry { base: 0x20C1000, dec: 0x35E },
    RomEntry { base: 0x1F12000, dec: 0x332 },
    RomEntry { base: 0x1D79000, dec: 0x30A },
    RomEntry { base: 0x1BF4000, dec: 0x2E6 },
    // Odd exponent half.
    RomEntry { base: 0x1A7E800, dec: 0x568 },
    RomEntry { base: 0x17CB800, dec: 0x4F3 },
    RomEntry { base: 0x1552800, dec: 0x48D },
    RomEntry { base: 0x130C000, dec: 0x435 },
    RomEntry { base: 0x10F2000, dec: 0x3E7 },
    RomEntry { base: 0x0EFF000, dec: 0x3A2 },
    RomEntry { base: 0x0D2E000, dec: 0x365 },
    RomEntry { base: 0x0B7C000, dec: 0x32E },
    RomEntry { base: 0x09E5000, dec: 0x2FC },
    RomEntry { base: 0x0867000, dec: 0x2D0 },
    RomEntry { base: 0x06FF000, dec: 0x2A8 },
    RomEntry { base: 0x05AB800, dec: 0x283 },
    RomEntry { base: 0x046A000, dec: 0x261 },
    RomEntry { base: 0x0339800, dec: 0x243 },
    RomEntry { base: 0x0218800, dec: 0x226 },
    RomEntry { base: 0x0105800, dec: 0x20B },
];

// Repeated `dec` values in the low rows are faithful ROM content, not typos.
static FRES_ROM: [RomEntry; 32] = [
    RomEntry { base: 0x7FF800, dec: 0x3E1 },
    RomEntry { base: 0x783800, dec: 0x3A7 },
    RomEntry { base: 0x70EA00, dec: 0x371 },
    RomEntry { base: 0x6A0800, dec: 0x340 },
    RomEntry { base: 0x638800, dec: 0x313 },
    RomEntry { base: 0x5D6200, dec: 0x2EA },
    RomEntry { base: 0x579000, dec: 0x2C4 },
    RomEntry { base: 0x520800, dec: 0x2A0 },
    RomEntry { base: 0x4CC800, dec: 0x27F },
    RomEntry { base: 0x47CA00, dec: 0x261 },
    RomEntry { base: 0x430800, dec: 0x245 },
    RomEntry { base: 0x3E8000, dec: 0x22A },
    RomEntry { base: 0x3A2C00, dec: 0x212 },
    RomEntry { base: 0x360800, dec: 0x1FB },
    RomEntry { base: 0x321400, dec: 0x1E5 },
    RomEntry { base: 0x2E4A00, dec: 0x1D1 },
    RomEntry { base: 0x2AA800, dec: 0x1BE },
    RomEntry { base: 0x272C00, dec: 0x1AC },
    RomEntry { base: 0x23D600, dec: 0x19B },
    RomEntry { base: 0x209E00, dec: 0x18B },
    RomEntry { base: 0x1D8800, dec: 0x17C },
    RomEntry { base: 0x1A9000, dec: 0x16E },
    RomEntry { base: 0x17AE00, dec: 0x15B },
    RomEntry { base: 0x14F800, dec: 0x15B },
    RomEntry { base: 0x124400, dec: 0x143 },
    RomEntry { base: 0x0FBE00, dec: 0x143 },
    RomEntry { base: 0x0D3800, dec: 0x12D },
    RomEntry { base: 0x0ADE00, dec: 0x12D },
    RomEntry { base: 0x088400, dec: 0x11A },
    RomEntry { base: 0x065000, dec: 0x11A },
    RomEntry { base: 0x041C00, dec: 0x108 },
    RomEntry { base: 0x020C00, dec: 0x106 },
];

/// Default quiet NaN produced for invalid operations.
const QUIET_NAN: u64 = 0x7FF8_0000_0000_0000;

/// `f32::MAX` widened to an `f64` bit pattern. `fres` saturates here when the
/// true reciprocal would overflow single precision.
const F32_MAX_AS_F64: u64 = 0x47EF_FFFF_E000_0000;

/// `frsqrte`: reciprocal square root estimate.
///
/// Reproduces the hardware result bit for bit, including the denormal path
/// and the NaN/infinity/negative special cases. Worst-case relative error of
/// the table path stays below `2e-4`.
pub fn frsqrte(val: f64) -> f64 {
    let bits = val.to_bits();
    let sign = bits & F64_SIGN;
    let mut exponent = (bits & F64_EXP) as i64;
    let mut mantissa = (bits & F64_FRAC) as i64;

    // 1/sqrt(±0) is a zero-divide: ±inf, keeping the operand's sign.
    if exponent == 0 && mantissa == 0 {
        return f64::from_bits(sign | F64_EXP);
    }

    if exponent == F64_EXP as i64 {
        if mantissa == 0 {
            // 1/sqrt(+inf) is +0; 1/sqrt(-inf) is invalid.
            if sign != 0 {
                return f64::from_bits(QUIET_NAN);
            }
            return 0.0;
        }
        // NaN passes through quieted, with sign and payload intact.
        return 0.0 + val;
    }

    // sqrt of any other negative operand is invalid.
    if sign != 0 {
        return f64::from_bits(QUIET_NAN);
    }

    if exponent == 0 {
        // Renormalize a denormal: walk the leading one up to the implicit-bit
        // position, compensating in the exponent, which goes negative here.
        loop {
            exponent -= 1i64 << 52;
            mantissa <<= 1;
            if mantissa & (1i64 << 52) != 0 {
                break;
            }
        }
        mantissa &= (1i64 << 52) - 1;
        exponent += 1i64 << 52;
    }

    // Biased-exponent low bit clear means the unbiased exponent is odd; the
    // ROM holds a separate half per parity.
    let odd_exponent = exponent & (1i64 << 52) == 0;
    // Halve the exponent. Truncating division, not a shift: `exponent` is
    // negative after the denormal walk and the hardware truncates toward zero.
    exponent = ((0x3FF << 52) - ((exponent - (0x3FE << 52)) / 2)) & (0x7FF << 52);

    let i = mantissa >> 37;
    let index = (i / 2048) as usize + if odd_exponent { 16 } else { 0 };
    let entry = &FRSQRTE_ROM[index];
    let estimate = (entry.base - entry.dec * (i % 2048)) as u64;

    f64::from_bits(sign | exponent as u64 | (estimate << 26))
}

/// `fres`: reciprocal estimate.
///
/// Reproduces the hardware result bit for bit. The estimate targets single
/// precision, so inputs whose reciprocal falls outside the `f32` range
/// saturate or flush before the table is consulted. Worst-case relative
/// error of the table path stays below `2e-4`.
pub fn fres(val: f64) -> f64 {
    let bits = val.to_bits();
    let sign = bits & F64_SIGN;
    let exponent = (bits & F64_EXP) as i64;
    let mantissa = (bits & F64_FRAC) as i64;

    // 1/±0 is a zero-divide: ±inf, keeping the operand's sign.
    if exponent == 0 && mantissa == 0 {
        return f64::from_bits(sign | F64_EXP);
    }

    if exponent == F64_EXP as i64 {
        if mantissa == 0 {
            // 1/±inf is ±0.
            return f64::from_bits(sign);
        }
        // NaN passes through quieted, with sign and payload intact.
        return 0.0 + val;
    }

    // Below 2^-128 the reciprocal overflows single precision: saturate.
    if exponent < 895 << 52 {
        return f64::from_bits(sign | F32_MAX_AS_F64);
    }

    // At 2^126 and above the reciprocal underflows single precision: flush
    // to zero. Denormals land in the saturation case above, so from here on
    // the exponent arithmetic stays in field range.
    if exponent >= 1149 << 52 {
        return f64::from_bits(sign);
    }

    let exponent = (0x7FD << 52) - exponent;
    let i = mantissa >> 37;
    let entry = &FRES_ROM[(i / 1024) as usize];
    let estimate = (entry.base - (entry.dec * (i % 1024) + 1) / 2) as u64;

    f64::from_bits(sign | exponent as u64 | (estimate << 29))
}
