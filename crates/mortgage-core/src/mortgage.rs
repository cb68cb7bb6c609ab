//! The mortgage record: a validated, mutable loan entity with an
//! on-demand payment calculation. All term fields resolve against the
//! closed [`catalog`](crate::catalog); nothing is cached, so mutating
//! any field changes the next calculated payment.

use rust_decimal::{Decimal, MathematicalOps};
use serde::Serialize;
use std::fmt;

use crate::catalog::{self, MortgageRate, PaymentFrequency};
use crate::error::MortgageError;
use crate::format;
use crate::MortgageResult;

/// A single mortgage record. Created once per input line, discarded
/// after rendering; records carry no identity beyond their fields.
#[derive(Clone, PartialEq)]
pub struct Mortgage {
    loan_amount: Decimal,
    rate: MortgageRate,
    frequency: PaymentFrequency,
    amortization: u32,
}

/// Serializable view of a record together with its computed payment,
/// used by JSON output surfaces.
#[derive(Debug, Clone, Serialize)]
pub struct MortgageSummary {
    pub loan_amount: Decimal,
    pub rate: MortgageRate,
    pub annual_rate: Decimal,
    pub frequency: PaymentFrequency,
    pub payments_per_year: u32,
    pub amortization: u32,
    pub payment: Decimal,
}

impl Mortgage {
    /// Build a record from raw inputs. Rate and frequency names must
    /// match the catalog exactly (no case folding here, unlike the
    /// setters); amortization must be one of the allowed lengths.
    /// Validation order is rate, frequency, amortization, and the
    /// first failure aborts.
    ///
    /// The loan amount is stored as given: positivity is enforced by
    /// [`set_loan_amount`](Self::set_loan_amount) but deliberately not
    /// here. A record constructed with a non-positive amount is
    /// accepted and produces a non-positive payment.
    pub fn new(
        loan_amount: Decimal,
        rate: &str,
        frequency: &str,
        amortization: u32,
    ) -> MortgageResult<Mortgage> {
        let rate = MortgageRate::from_name(rate)
            .ok_or_else(|| MortgageError::InvalidRate(rate.to_string()))?;
        let frequency = PaymentFrequency::from_name(frequency)
            .ok_or_else(|| MortgageError::InvalidFrequency(frequency.to_string()))?;
        if !catalog::is_valid_amortization(amortization) {
            return Err(MortgageError::InvalidAmortization(amortization));
        }

        Ok(Mortgage {
            loan_amount,
            rate,
            frequency,
            amortization,
        })
    }

    pub fn loan_amount(&self) -> Decimal {
        self.loan_amount
    }

    pub fn rate(&self) -> MortgageRate {
        self.rate
    }

    pub fn frequency(&self) -> PaymentFrequency {
        self.frequency
    }

    pub fn amortization(&self) -> u32 {
        self.amortization
    }

    /// Replace the loan amount. Rejects zero and negative amounts;
    /// the record is unchanged on failure.
    pub fn set_loan_amount(&mut self, amount: Decimal) -> MortgageResult<()> {
        if amount <= Decimal::ZERO {
            return Err(MortgageError::InvalidAmount { amount });
        }
        self.loan_amount = amount;
        Ok(())
    }

    /// Replace the rate. The name is uppercased before lookup, so
    /// `fixed_5` resolves; the constructor does not do this.
    pub fn set_rate(&mut self, name: &str) -> MortgageResult<()> {
        self.rate = MortgageRate::from_name(&name.to_uppercase())
            .ok_or_else(|| MortgageError::InvalidRate(name.to_string()))?;
        Ok(())
    }

    /// Replace the frequency, uppercasing before lookup as
    /// [`set_rate`](Self::set_rate) does.
    pub fn set_frequency(&mut self, name: &str) -> MortgageResult<()> {
        self.frequency = PaymentFrequency::from_name(&name.to_uppercase())
            .ok_or_else(|| MortgageError::InvalidFrequency(name.to_string()))?;
        Ok(())
    }

    /// Replace the amortization length, checked against the catalog.
    pub fn set_amortization(&mut self, years: u32) -> MortgageResult<()> {
        if !catalog::is_valid_amortization(years) {
            return Err(MortgageError::InvalidAmortization(years));
        }
        self.amortization = years;
        Ok(())
    }

    /// Periodic payment from current state via the annuity formula:
    /// `loan_amount · i(1+i)^n / ((1+i)^n − 1)` with periodic rate
    /// `i = annual_rate / payments_per_year` and
    /// `n = amortization · payments_per_year`.
    ///
    /// Pure and recomputed on every call. A zero periodic rate would
    /// zero the denominator, but every catalogued rate is positive so
    /// that case is unreachable and left unhandled.
    pub fn calculate_payment(&self) -> Decimal {
        let per_year = Decimal::from(self.frequency.payments_per_year());
        let i = self.rate.annual_rate() / per_year;
        let n = i64::from(self.amortization * self.frequency.payments_per_year());
        let growth = (Decimal::ONE + i).powi(n);

        self.loan_amount * (i * growth) / (growth - Decimal::ONE)
    }

    /// View with the payment included, rounded to cents.
    pub fn summary(&self) -> MortgageSummary {
        MortgageSummary {
            loan_amount: self.loan_amount,
            rate: self.rate,
            annual_rate: self.rate.annual_rate(),
            frequency: self.frequency,
            payments_per_year: self.frequency.payments_per_year(),
            amortization: self.amortization,
            payment: self.calculate_payment().round_dp(2),
        }
    }
}

/// Canonical display form. The trailing space after the payment is
/// part of the format.
impl fmt::Display for Mortgage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Mortgage Amount: ${} Rate: {}% Amortization: {} Frequency: {} \
             -- Calculated Payment: ${} ",
            format::money(self.loan_amount),
            format::percent(self.rate.annual_rate()),
            self.amortization,
            self.frequency.payments_per_year(),
            format::money(self.calculate_payment()),
        )
    }
}

/// Constructor-call-shaped debug form with qualified catalog names.
impl fmt::Debug for Mortgage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Mortgage(loan_amt={}, rate={}, freq={}, amort={})",
            self.loan_amount, self.rate, self.frequency, self.amortization
        )
    }
}
