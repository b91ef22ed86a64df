#![no_main]

use espresso_fpu::{classify_f64, fres, frsqrte, FpClass};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|patterns: Vec<u64>| {
    for bits in patterns {
        let v = f64::from_bits(bits);

        let class = classify_f64(v);
        let recip = fres(v);
        let rsqrt = frsqrte(v);

        // Totality is implicit (no panic); check the sign/domain contracts
        // the interpreter relies on.
        assert_eq!(recip.is_sign_negative(), v.is_sign_negative());
        match class {
            FpClass::QuietNan => {
                assert!(recip.is_nan());
                assert!(rsqrt.is_nan());
            }
            FpClass::PositiveZero | FpClass::NegativeZero => {
                assert!(recip.is_infinite());
                assert!(rsqrt.is_infinite());
                assert_eq!(rsqrt.is_sign_negative(), v.is_sign_negative());
            }
            FpClass::PositiveInfinity => {
                assert_eq!(recip.to_bits(), 0);
                assert_eq!(rsqrt.to_bits(), 0);
            }
            FpClass::NegativeInfinity => {
                assert_eq!(recip.to_bits(), 1 << 63);
                assert!(rsqrt.is_nan());
            }
            FpClass::NegativeNormal | FpClass::NegativeDenormal => {
                assert!(recip.is_finite());
                assert!(rsqrt.is_nan());
            }
            FpClass::PositiveNormal | FpClass::PositiveDenormal => {
                assert!(recip.is_finite());
                assert!(rsqrt.is_finite());
                assert!(rsqrt > 0.0);
            }
        }

        // Pure functions: replaying the pattern reproduces the bits.
        assert_eq!(classify_f64(v), class);
        assert_eq!(fres(v).to_bits(), recip.to_bits());
        assert_eq!(frsqrte(v).to_bits(), rsqrt.to_bits());
    }
});
