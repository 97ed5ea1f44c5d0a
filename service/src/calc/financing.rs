//! Amortization of a [`Financing`] with fixed monthly installments.

use common::{Money, Percent};
use derive_more::{Display, Error};
use rust_decimal::{Decimal, MathematicalOps as _};
use serde::{Deserialize, Serialize};
use tracing as log;

/// Number of months in a year.
const MONTHS_IN_YEAR: Decimal = Decimal::from_parts(12, 0, 0, false, 0);

/// Terms of financing a purchase.
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Financing {
    /// Full price of the purchase.
    pub total_value: Money,

    /// Part of the price paid upfront.
    pub down_payment: Money,

    /// Number of monthly installments.
    pub installments: u32,

    /// Nominal annual interest rate.
    pub annual_rate: Percent,
}

impl Financing {
    /// Returns the nominal monthly interest rate as a fraction of one.
    #[must_use]
    pub fn monthly_rate(&self) -> Decimal {
        self.annual_rate.fraction() / MONTHS_IN_YEAR
    }

    /// Returns the financed principal.
    ///
    /// The result is negative if the down payment exceeds the total value.
    /// Use [`Financing::validate()`] to reject such terms.
    #[must_use]
    pub fn financed_value(&self) -> Money {
        Money {
            amount: self.total_value.amount - self.down_payment.amount,
            currency: self.total_value.currency,
        }
    }

    /// Returns the fixed monthly installment repaying the financed value.
    ///
    /// Zero when there are no installments or the rate is zero, and also
    /// when the calculation does not fit a [`Decimal`].
    #[must_use]
    pub fn monthly_payment(&self) -> Money {
        let currency = self.total_value.currency;
        if self.installments == 0 || self.annual_rate.is_zero() {
            return Money::zero(currency);
        }
        let rate = self.monthly_rate();

        let financed = self.financed_value().amount;
        let amount = (Decimal::ONE + rate)
            .checked_powi(i64::from(self.installments))
            .and_then(|growth| {
                financed
                    .checked_mul(rate)?
                    .checked_mul(growth)?
                    .checked_div(growth - Decimal::ONE)
            });
        match amount {
            Some(amount) => Money { amount, currency },
            None => {
                log::debug!(
                    installments = self.installments,
                    annual_rate = %self.annual_rate,
                    "monthly payment does not fit a decimal, \
                     reporting zero",
                );
                Money::zero(currency)
            }
        }
    }

    /// Calculates the [`Preview`] of these [`Financing`] terms.
    #[must_use]
    pub fn preview(&self) -> Preview {
        let financed_value = self.financed_value();
        let monthly_payment = self.monthly_payment();
        let total_paid = Money {
            amount: monthly_payment
                .amount
                .saturating_mul(Decimal::from(self.installments)),
            currency: monthly_payment.currency,
        };
        let total_interest = if monthly_payment.amount.is_zero() {
            Money::zero(financed_value.currency)
        } else {
            Money {
                amount: total_paid.amount - financed_value.amount,
                currency: financed_value.currency,
            }
        };

        Preview {
            financed_value,
            monthly_payment,
            total_paid,
            total_interest,
        }
    }

    /// Checks whether these [`Financing`] terms describe a real loan.
    ///
    /// The calculations above never reject terms, so a form should call this
    /// before accepting them.
    ///
    /// # Errors
    ///
    /// - [`ValidationError::CurrencyMismatch`] if the total value and the
    ///   down payment are in different currencies;
    /// - [`ValidationError::NegativeAmount`] if any of them is negative;
    /// - [`ValidationError::DownPaymentExceedsTotal`] if nothing is left to
    ///   finance with a negative principal.
    pub fn validate(&self) -> Result<(), ValidationError> {
        use ValidationError as E;

        if self.total_value.currency != self.down_payment.currency {
            return Err(E::CurrencyMismatch);
        }
        if self.total_value.is_negative() || self.down_payment.is_negative() {
            return Err(E::NegativeAmount);
        }
        if self.down_payment.amount > self.total_value.amount {
            return Err(E::DownPaymentExceedsTotal);
        }
        Ok(())
    }
}

/// Figures derived from [`Financing`] terms for displaying before they're
/// submitted.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Preview {
    /// Financed principal.
    pub financed_value: Money,

    /// Fixed monthly installment.
    pub monthly_payment: Money,

    /// Sum of all the installments.
    pub total_paid: Money,

    /// Part of [`Preview::total_paid`] going to interest.
    pub total_interest: Money,
}

/// Error of [`Financing::validate()`].
#[derive(Clone, Copy, Debug, Display, Eq, Error, PartialEq)]
pub enum ValidationError {
    /// Total value and down payment are in different currencies.
    #[display("total value and down payment currencies differ")]
    CurrencyMismatch,

    /// An amount is negative.
    #[display("amounts must not be negative")]
    NegativeAmount,

    /// Down payment is greater than the total value.
    #[display("down payment exceeds total value")]
    DownPaymentExceedsTotal,
}

#[cfg(test)]
mod spec {
    use common::{Money, Percent};
    use rust_decimal::Decimal;

    use super::{Financing, ValidationError};

    fn money(s: &str) -> Money {
        s.parse().unwrap()
    }

    fn financing(
        total: &str,
        down: &str,
        installments: u32,
        rate: &str,
    ) -> Financing {
        Financing {
            total_value: money(total),
            down_payment: money(down),
            installments,
            annual_rate: rate.parse::<Percent>().unwrap(),
        }
    }

    fn assert_close(actual: Decimal, expected: &str) {
        let expected = expected.parse::<Decimal>().unwrap();
        assert!(
            (actual - expected).abs() < Decimal::new(1, 2),
            "{actual} is not close to {expected}",
        );
    }

    #[test]
    fn calculates_annuity() {
        let f = financing("500000BRL", "100000BRL", 240, "8.5");

        assert_eq!(f.financed_value(), money("400000BRL"));
        assert_close(f.monthly_rate(), "0.0070833333");
        assert_close(f.monthly_payment().amount, "3471.29");

        let preview = f.preview();
        assert_eq!(preview.financed_value, money("400000BRL"));
        assert_eq!(preview.monthly_payment.round_to_cents(), money("3471.29BRL"));
        assert_close(preview.total_paid.amount, "833110.30");
        assert_close(preview.total_interest.amount, "433110.30");
    }

    #[test]
    fn matches_short_loan() {
        let f = financing("100000BRL", "0BRL", 12, "12");

        assert_close(f.monthly_payment().amount, "8884.88");
    }

    #[test]
    fn zero_rate_has_no_payment() {
        for installments in [0, 1, 12, 240] {
            let f = financing("500000BRL", "100000BRL", installments, "0");

            assert_eq!(f.monthly_payment(), money("0BRL"));
            assert_eq!(f.preview().total_interest, money("0BRL"));
        }
    }

    #[test]
    fn zero_installments_have_no_payment() {
        let f = financing("500000BRL", "100000BRL", 0, "8.5");

        assert_eq!(f.monthly_payment(), money("0BRL"));
        assert_eq!(f.financed_value(), money("400000BRL"));
    }

    #[test]
    fn negative_principal_is_computed_but_invalid() {
        let f = financing("100000BRL", "150000BRL", 12, "12");

        assert_eq!(f.financed_value(), money("-50000BRL"));
        assert!(f.monthly_payment().is_negative());
        assert_eq!(f.validate(), Err(ValidationError::DownPaymentExceedsTotal));
    }

    #[test]
    fn validates_terms() {
        assert_eq!(financing("500000BRL", "100000BRL", 240, "8.5").validate(), Ok(()));
        assert_eq!(financing("500000BRL", "500000BRL", 240, "8.5").validate(), Ok(()));
        assert_eq!(
            financing("500000BRL", "100000USD", 240, "8.5").validate(),
            Err(ValidationError::CurrencyMismatch),
        );
        assert_eq!(
            financing("-1BRL", "0BRL", 240, "8.5").validate(),
            Err(ValidationError::NegativeAmount),
        );
    }

    #[test]
    fn overflow_degrades_to_zero() {
        let f = financing("500000BRL", "0BRL", u32::MAX, "1000");

        assert_eq!(f.monthly_payment(), money("0BRL"));
    }
}
