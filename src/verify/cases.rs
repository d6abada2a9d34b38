//! Fixed boundary inputs checked before the random sample.

/// One verification input, optionally with the canonical text expected for it.
#[derive(Clone, Copy, Debug)]
pub struct VerifyCase {
    pub value: f64,
    pub expected: Option<&'static str>,
}

impl VerifyCase {
    const fn new(value: f64) -> Self {
        Self {
            value,
            expected: None,
        }
    }

    const fn expecting(value: f64, expected: &'static str) -> Self {
        Self {
            value,
            expected: Some(expected),
        }
    }
}

/// Smallest positive subnormal double.
pub const DENORM_MIN: f64 = 4.9406564584124654e-324;

// Formatters printing a fixed 17 digits legitimately produce
// `0.10000000000000001` or `1.2344999999999999` here. Those are reported as
// warnings only.
pub const BOUNDARY_CASES: [VerifyCase; 13] = [
    VerifyCase::new(0.0),
    VerifyCase::expecting(0.1, "0.1"),
    VerifyCase::expecting(0.12, "0.12"),
    VerifyCase::expecting(0.123, "0.123"),
    VerifyCase::expecting(0.1234, "0.1234"),
    VerifyCase::expecting(1.2345, "1.2345"),
    VerifyCase::new(1.0 / 3.0),
    VerifyCase::new(2.0 / 3.0),
    VerifyCase::new(10.0 / 3.0),
    VerifyCase::new(20.0 / 3.0),
    VerifyCase::new(f64::MIN_POSITIVE),
    VerifyCase::new(f64::MAX),
    VerifyCase::new(DENORM_MIN),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_denorm_min_is_smallest_subnormal() {
        assert_eq!(DENORM_MIN.to_bits(), 1);
    }

    #[test]
    fn test_expected_texts_parse_to_their_values() {
        for case in BOUNDARY_CASES {
            if let Some(text) = case.expected {
                assert_eq!(text.parse::<f64>().unwrap(), case.value);
            }
        }
    }
}
