use bigdecimal::{BigDecimal, RoundingMode};

/// Transaction kind written for every referral bonus credit.
pub const LEDGER_KIND_BONUS_PARRAINAGE: &str = "bonus_parrainage";

/// Defensive cap on sponsor-chain traversal. The sponsor graph is assumed
/// acyclic, but a corrupted pointer must not loop forever.
pub const MAX_CHAIN_DEPTH: u32 = 32;

/// Commission rate for a chain depth, `level >= 1` (1 = direct sponsor).
///
/// The schedule decays with depth and stays flat from level 3 onward, with
/// no depth limit.
pub fn rate_for_level(level: u32) -> BigDecimal {
    let percent: i64 = match level {
        1 => 20,
        2 => 10,
        _ => 5,
    };

    BigDecimal::new(percent.into(), 2)
}

/// The rate rendered as a percentage (scale 2), stored alongside each
/// transaction. Derivable from the level today, but persisted so historical
/// rows stay correct if the schedule ever changes.
pub fn percentage_for_level(level: u32) -> BigDecimal {
    (rate_for_level(level) * BigDecimal::from(100)).with_scale(2)
}

/// Round a monetary amount to currency minor units, half-up.
pub fn round_amount(value: BigDecimal) -> BigDecimal {
    value.with_scale_round(2, RoundingMode::HalfUp)
}

// ----------------------------------- tests -----------------------------------

#[cfg(test)]
mod tests {
    use {super::*, std::str::FromStr, test_case::test_case};

    #[test_case(1, "0.20"; "direct sponsor")]
    #[test_case(2, "0.10"; "second level")]
    #[test_case(3, "0.05"; "third level")]
    #[test_case(17, "0.05"; "deep levels stay flat")]
    fn schedule_rates(level: u32, expected: &str) {
        assert_eq!(rate_for_level(level), BigDecimal::from_str(expected).unwrap());
    }

    #[test_case(1, "20.00")]
    #[test_case(2, "10.00")]
    #[test_case(9, "5.00")]
    fn stored_percentages(level: u32, expected: &str) {
        assert_eq!(
            percentage_for_level(level),
            BigDecimal::from_str(expected).unwrap()
        );
    }

    #[test]
    fn rounds_half_up() {
        // 99.995 * 0.20 = 19.999, which must round to 20.00, not truncate.
        let price = BigDecimal::from_str("99.995").unwrap();

        assert_eq!(
            round_amount(price * rate_for_level(1)),
            BigDecimal::from_str("20.00").unwrap()
        );
    }
}
