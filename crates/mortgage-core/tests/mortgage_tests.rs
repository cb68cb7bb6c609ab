use mortgage_core::catalog::{MortgageRate, PaymentFrequency, VALID_AMORTIZATION};
use mortgage_core::{Mortgage, MortgageError};
use pretty_assertions::assert_eq;
use rust_decimal_macros::dec;

// ===========================================================================
// Catalog exhaustiveness
// ===========================================================================

#[test]
fn test_construction_succeeds_for_every_catalog_combination() {
    for rate in MortgageRate::ALL {
        for freq in PaymentFrequency::ALL {
            for amort in VALID_AMORTIZATION {
                let m = Mortgage::new(dec!(100000), rate.name(), freq.name(), amort)
                    .unwrap_or_else(|e| {
                        panic!("{}/{}/{amort} should construct: {e}", rate.name(), freq.name())
                    });
                assert!(m.calculate_payment() > dec!(0));
            }
        }
    }
}

#[test]
fn test_construction_rejects_names_outside_catalog() {
    for bad_rate in ["FIXED_2", "PRIME", "", "FIXED_5%", "0.0519"] {
        let err = Mortgage::new(dec!(100000), bad_rate, "MONTHLY", 25).unwrap_err();
        assert!(
            matches!(err, MortgageError::InvalidRate(_)),
            "{bad_rate:?} should be an invalid rate, got {err}"
        );
    }
    for bad_freq in ["YEARLY", "DAILY", "", "12"] {
        let err = Mortgage::new(dec!(100000), "FIXED_5", bad_freq, 25).unwrap_err();
        assert!(
            matches!(err, MortgageError::InvalidFrequency(_)),
            "{bad_freq:?} should be an invalid frequency, got {err}"
        );
    }
}

// ===========================================================================
// Payment scenarios
// ===========================================================================
// Reference loan: 682,912.43 at FIXED_1 (5.99%) over 10 years.

#[test]
fn test_payment_monthly_reference_loan() {
    let m = Mortgage::new(dec!(682912.43), "FIXED_1", "MONTHLY", 10).unwrap();
    assert_eq!(m.calculate_payment().round_dp(2), dec!(7578.30));
}

#[test]
fn test_payment_bi_weekly_reference_loan() {
    let m = Mortgage::new(dec!(682912.43), "FIXED_1", "BI_WEEKLY", 10).unwrap();
    assert_eq!(m.calculate_payment().round_dp(2), dec!(3494.25));
}

#[test]
fn test_payment_weekly_reference_loan() {
    let m = Mortgage::new(dec!(682912.43), "FIXED_1", "WEEKLY", 10).unwrap();
    assert_eq!(m.calculate_payment().round_dp(2), dec!(1746.39));
}

#[test]
fn test_payment_reflects_mutations() {
    let mut m = Mortgage::new(dec!(682912.43), "FIXED_1", "MONTHLY", 10).unwrap();
    m.set_frequency("WEEKLY").unwrap();
    assert_eq!(m.calculate_payment().round_dp(2), dec!(1746.39));
    m.set_frequency("MONTHLY").unwrap();
    assert_eq!(m.calculate_payment().round_dp(2), dec!(7578.30));
}

// ===========================================================================
// String representations
// ===========================================================================

#[test]
fn test_display_form_exact() {
    let m = Mortgage::new(dec!(682912.43), "FIXED_1", "MONTHLY", 10).unwrap();
    assert_eq!(
        m.to_string(),
        "Mortgage Amount: $682,912.43 Rate: 5.99% Amortization: 10 Frequency: 12 \
         -- Calculated Payment: $7,578.30 "
    );
}

#[test]
fn test_debug_form_exact() {
    let m = Mortgage::new(dec!(100000.01), "VARIABLE_5", "MONTHLY", 30).unwrap();
    assert_eq!(
        format!("{m:?}"),
        "Mortgage(loan_amt=100000.01, rate=MortgageRate.VARIABLE_5, \
         freq=PaymentFrequency.MONTHLY, amort=30)"
    );
}

// ===========================================================================
// Serde
// ===========================================================================

#[test]
fn test_summary_serializes_catalog_names_and_payment() {
    let m = Mortgage::new(dec!(682912.43), "FIXED_1", "MONTHLY", 10).unwrap();
    let json = serde_json::to_value(m.summary()).unwrap();
    assert_eq!(json["rate"], "FIXED_1");
    assert_eq!(json["frequency"], "MONTHLY");
    assert_eq!(json["payments_per_year"], 12);
    assert_eq!(json["payment"], "7578.30");
}
