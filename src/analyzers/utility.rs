/// Rounds to two decimal places.
///
/// Rounding works on the exact binary value, with exact ties going to the
/// even digit, so `2.675` (stored just below) becomes `2.67` and `3.125`
/// becomes `3.12`.
pub fn round2(value: f64) -> f64 {
    format!("{value:.2}").parse().unwrap_or(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round2() {
        assert_eq!(round2(6.21371), 6.21);
        assert_eq!(round2(3.106855), 3.11);
        assert_eq!(round2(2.0), 2.0);
        assert_eq!(round2(0.004), 0.0);
    }

    #[test]
    fn test_round2_ties_go_to_even() {
        assert_eq!(round2(3.125), 3.12);
        assert_eq!(round2(0.125), 0.12);
        assert_eq!(round2(3.375), 3.38);
    }

    #[test]
    fn test_round2_uses_exact_binary_value() {
        assert_eq!(round2(2.675), 2.67);
        assert_eq!(round2(1.005), 1.0);
    }
}
