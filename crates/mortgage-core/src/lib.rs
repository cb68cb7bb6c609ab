pub mod catalog;
pub mod error;
pub mod format;
pub mod mortgage;

pub use catalog::{MortgageRate, PaymentFrequency, VALID_AMORTIZATION};
pub use error::MortgageError;
pub use mortgage::Mortgage;

/// Standard result type for all mortgage operations
pub type MortgageResult<T> = Result<T, MortgageError>;
