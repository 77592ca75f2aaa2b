//! Statutory deduction rule shared by all pay schemes.
//!
//! Every scheme deducts social security and pension at a fixed rate of the
//! gross salary, plus an occupational-risk (ARL) contribution whose rate is
//! resolved from configuration by the employee's risk class.

use rust_decimal::Decimal;

/// Social security and pension deduction rate: 4% of gross salary.
pub const SOCIAL_SECURITY_RATE: Decimal = Decimal::from_parts(4, 0, 0, false, 2);

/// Computes the mandatory deductions for a gross salary.
///
/// # Arguments
///
/// * `gross` - The gross salary the deductions are based on
/// * `arl_rate` - The occupational-risk rate for the employee's risk class
///   (zero when the employee has no risk class assigned)
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::statutory_deductions;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let gross = Decimal::from_str("5000000").unwrap();
/// let deductions = statutory_deductions(gross, Decimal::ZERO);
/// assert_eq!(deductions, Decimal::from_str("200000.00").unwrap());
/// ```
pub fn statutory_deductions(gross: Decimal, arl_rate: Decimal) -> Decimal {
    gross * (SOCIAL_SECURITY_RATE + arl_rate)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_social_security_rate_constant() {
        assert_eq!(SOCIAL_SECURITY_RATE, dec("0.04"));
    }

    /// DED-001: 4% of gross with no risk class
    #[test]
    fn test_four_percent_of_gross_without_arl() {
        assert_eq!(statutory_deductions(dec("5000000"), Decimal::ZERO), dec("200000.00"));
        assert_eq!(statutory_deductions(dec("950000"), Decimal::ZERO), dec("38000.00"));
        assert_eq!(statutory_deductions(dec("2250000"), Decimal::ZERO), dec("90000.00"));
    }

    /// DED-002: ARL rate is added on top of the 4%
    #[test]
    fn test_arl_rate_added_to_base_rate() {
        // 4% + 0.522% = 4.522% of 1,000,000
        assert_eq!(
            statutory_deductions(dec("1000000"), dec("0.00522")),
            dec("45220.00000")
        );
    }

    /// DED-003: zero gross deducts nothing
    #[test]
    fn test_zero_gross_deducts_nothing() {
        assert_eq!(statutory_deductions(Decimal::ZERO, dec("0.0696")), dec("0"));
    }
}
