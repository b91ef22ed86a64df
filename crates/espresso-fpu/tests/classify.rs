use espresso_fpu::{classify_f32, classify_f64, FpClass, Fprf};

fn class64(bits: u64) -> FpClass {
    classify_f64(f64::from_bits(bits))
}

fn class32(bits: u32) -> FpClass {
    classify_f32(f32::from_bits(bits))
}

#[test]
fn f64_field_boundaries_land_in_the_right_class() {
    let cases: &[(u64, FpClass)] = &[
        // Zeros.
        (0x0000_0000_0000_0000, FpClass::PositiveZero),
        (0x8000_0000_0000_0000, FpClass::NegativeZero),
        // Denormals: zero exponent, nonzero mantissa.
        (0x0000_0000_0000_0001, FpClass::PositiveDenormal),
        (0x000F_FFFF_FFFF_FFFF, FpClass::PositiveDenormal),
        (0x8000_0000_0000_0001, FpClass::NegativeDenormal),
        (0x800F_FFFF_FFFF_FFFF, FpClass::NegativeDenormal),
        // Normals: smallest, largest, and an ordinary value each side.
        (0x0010_0000_0000_0000, FpClass::PositiveNormal),
        (0x7FEF_FFFF_FFFF_FFFF, FpClass::PositiveNormal),
        (0x3FF0_0000_0000_0000, FpClass::PositiveNormal),
        (0x8010_0000_0000_0000, FpClass::NegativeNormal),
        (0xFFEF_FFFF_FFFF_FFFF, FpClass::NegativeNormal),
        (0xC000_0000_0000_0000, FpClass::NegativeNormal),
        // Infinities: all-ones exponent, zero mantissa.
        (0x7FF0_0000_0000_0000, FpClass::PositiveInfinity),
        (0xFFF0_0000_0000_0000, FpClass::NegativeInfinity),
        // NaNs: all-ones exponent, nonzero mantissa.
        (0x7FF8_0000_0000_0000, FpClass::QuietNan),
        (0x7FF0_0000_0000_0001, FpClass::QuietNan),
        (0x7FFF_FFFF_FFFF_FFFF, FpClass::QuietNan),
        (0xFFF8_0000_0000_0000, FpClass::QuietNan),
        (0xFFF0_0000_0000_0001, FpClass::QuietNan),
        (0xFFFF_FFFF_FFFF_FFFF, FpClass::QuietNan),
    ];
    for &(bits, expected) in cases {
        assert_eq!(class64(bits), expected, "bits {bits:#018X}");
    }
}

#[test]
fn f32_field_boundaries_land_in_the_right_class() {
    let cases: &[(u32, FpClass)] = &[
        (0x0000_0000, FpClass::PositiveZero),
        (0x8000_0000, FpClass::NegativeZero),
        (0x0000_0001, FpClass::PositiveDenormal),
        (0x007F_FFFF, FpClass::PositiveDenormal),
        (0x8000_0001, FpClass::NegativeDenormal),
        (0x807F_FFFF, FpClass::NegativeDenormal),
        (0x0080_0000, FpClass::PositiveNormal),
        (0x7F7F_FFFF, FpClass::PositiveNormal),
        (0x3F80_0000, FpClass::PositiveNormal),
        (0x8080_0000, FpClass::NegativeNormal),
        (0xFF7F_FFFF, FpClass::NegativeNormal),
        (0xC000_0000, FpClass::NegativeNormal),
        (0x7F80_0000, FpClass::PositiveInfinity),
        (0xFF80_0000, FpClass::NegativeInfinity),
        (0x7FC0_0000, FpClass::QuietNan),
        (0x7F80_0001, FpClass::QuietNan),
        (0x7FFF_FFFF, FpClass::QuietNan),
        (0xFFC0_0000, FpClass::QuietNan),
        (0xFF80_0001, FpClass::QuietNan),
        (0xFFFF_FFFF, FpClass::QuietNan),
    ];
    for &(bits, expected) in cases {
        assert_eq!(class32(bits), expected, "bits {bits:#010X}");
    }
}

#[test]
fn host_float_constants_classify_as_expected() {
    assert_eq!(classify_f64(1.0), FpClass::PositiveNormal);
    assert_eq!(classify_f64(-2.5), FpClass::NegativeNormal);
    assert_eq!(classify_f64(f64::MIN_POSITIVE), FpClass::PositiveNormal);
    assert_eq!(classify_f64(f64::MIN_POSITIVE / 2.0), FpClass::PositiveDenormal);
    assert_eq!(classify_f64(f64::MAX), FpClass::PositiveNormal);
    assert_eq!(classify_f64(f64::INFINITY), FpClass::PositiveInfinity);
    assert_eq!(classify_f64(f64::NEG_INFINITY), FpClass::NegativeInfinity);
    assert_eq!(classify_f64(f64::NAN), FpClass::QuietNan);

    assert_eq!(classify_f32(1.0), FpClass::PositiveNormal);
    assert_eq!(classify_f32(-f32::MIN_POSITIVE / 4.0), FpClass::NegativeDenormal);
    assert_eq!(classify_f32(f32::NEG_INFINITY), FpClass::NegativeInfinity);
    assert_eq!(classify_f32(-f32::NAN), FpClass::QuietNan);
}

#[test]
fn f32_and_f64_agree_where_widening_preserves_the_class() {
    let values = [
        0.0f32,
        -0.0,
        1.0,
        -1.0,
        f32::MAX,
        f32::MIN,
        f32::INFINITY,
        f32::NEG_INFINITY,
        f32::NAN,
    ];
    for v in values {
        assert_eq!(classify_f32(v), classify_f64(f64::from(v)), "value {v}");
    }

    // Denormals are the exception: any f32 denormal widens to an f64 normal,
    // which is why the per-width classifiers exist at all.
    let tiny = f32::from_bits(1);
    assert_eq!(classify_f32(tiny), FpClass::PositiveDenormal);
    assert_eq!(classify_f64(f64::from(tiny)), FpClass::PositiveNormal);
}

#[test]
fn fprf_encoding_is_stable_for_fpscr_writes() {
    // Downstream FPSCR code stores `class as u32` directly; these values are
    // architecturally fixed.
    assert_eq!(classify_f64(f64::NAN) as u32, 0x11);
    assert_eq!(class64(0xFFF0_0000_0000_0000) as u32, 0x09);
    assert_eq!(classify_f64(-1.0) as u32, 0x08);
    assert_eq!(class64(0x8000_0000_0000_0001) as u32, 0x18);
    assert_eq!(classify_f64(-0.0) as u32, 0x12);
    assert_eq!(classify_f64(0.0) as u32, 0x02);
    assert_eq!(class64(0x0000_0000_0000_0001) as u32, 0x14);
    assert_eq!(classify_f64(1.0) as u32, 0x04);
    assert_eq!(classify_f64(f64::INFINITY) as u32, 0x05);

    assert_eq!(classify_f64(-0.0).fprf(), Fprf::C | Fprf::FE);
    assert_eq!(classify_f32(f32::INFINITY).fprf(), Fprf::FG | Fprf::FU);
    assert_eq!(classify_f64(f64::NAN).fprf().bits(), 0x11);
}

#[test]
fn raw_encodings_decode_back_to_classes() {
    for (raw, class) in [
        (0x11u32, FpClass::QuietNan),
        (0x09, FpClass::NegativeInfinity),
        (0x14, FpClass::PositiveDenormal),
        (0x02, FpClass::PositiveZero),
    ] {
        assert_eq!(FpClass::try_from(raw), Ok(class));
    }
    assert!(FpClass::try_from(0x00).is_err());
    assert!(FpClass::try_from(0x1F).is_err());
    assert!(FpClass::try_from(0x11 | 0x20).is_err());
}
