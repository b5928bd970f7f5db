//! Amortizing mortgage payment math shared by the metrics and projection engines

/// Monthly principal-and-interest payment for a fixed-rate amortizing loan.
///
/// `annual_rate_pct` is the whole-number annual percentage (6.0 = 6%),
/// `term_years` the loan term. Standard formula:
/// `M = L * r * (1+r)^n / ((1+r)^n - 1)` with monthly rate `r` and `n` payments.
///
/// Returns 0.0 for the no-loan cases: loan amount <= 0 (all-cash purchase),
/// zero or negative rate, or zero term.
pub fn monthly_payment(loan_amount: f64, annual_rate_pct: f64, term_years: u32) -> f64 {
    let monthly_rate = annual_rate_pct / 12.0 / 100.0;
    let num_payments = term_years * 12;

    if loan_amount <= 0.0 || monthly_rate <= 0.0 || num_payments == 0 {
        return 0.0;
    }

    let growth = (1.0 + monthly_rate).powi(num_payments as i32);
    loan_amount * monthly_rate * growth / (growth - 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_standard_amortization() {
        // $240k at 6% over 30 years
        let payment = monthly_payment(240_000.0, 6.0, 30);
        assert_relative_eq!(payment, 1438.92, epsilon = 0.01);
    }

    #[test]
    fn test_no_loan_cases_are_zero() {
        // All-cash purchase
        assert_eq!(monthly_payment(0.0, 6.0, 30), 0.0);
        assert_eq!(monthly_payment(-5_000.0, 6.0, 30), 0.0);
        // Zero-rate loan
        assert_eq!(monthly_payment(240_000.0, 0.0, 30), 0.0);
        // Zero term
        assert_eq!(monthly_payment(240_000.0, 6.0, 0), 0.0);
    }

    #[test]
    fn test_payment_scales_with_principal() {
        let single = monthly_payment(100_000.0, 5.5, 30);
        let double = monthly_payment(200_000.0, 5.5, 30);
        assert_relative_eq!(double, single * 2.0, epsilon = 1e-9);
    }
}
