use rust_decimal::Decimal;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MortgageError {
    #[error("Loan Amount must be positive, got {amount}")]
    InvalidAmount { amount: Decimal },

    #[error("Rate provided is invalid: {0}")]
    InvalidRate(String),

    #[error("Frequency provided is invalid: {0}")]
    InvalidFrequency(String),

    #[error("Amortization provided is invalid: {0}")]
    InvalidAmortization(u32),
}
