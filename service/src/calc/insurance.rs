//! Cost of an insurance premium over its duration.

use common::Money;
use derive_more::{Display, Error};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Premium of an insurance paid monthly over a fixed duration.
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Premium {
    /// Amount paid every month.
    pub monthly_premium: Money,

    /// Number of months the premium is paid for.
    pub duration_months: u32,
}

impl Premium {
    /// Returns the total amount payable over the whole duration.
    #[must_use]
    pub fn total_payable(&self) -> Money {
        Money {
            amount: self
                .monthly_premium
                .amount
                .saturating_mul(Decimal::from(self.duration_months)),
            currency: self.monthly_premium.currency,
        }
    }

    /// Checks whether this [`Premium`] is payable at all.
    ///
    /// # Errors
    ///
    /// With [`NegativePremium`] if the monthly premium is negative, as
    /// [`Premium::total_payable()`] would be.
    pub fn validate(&self) -> Result<(), NegativePremium> {
        if self.monthly_premium.is_negative() {
            return Err(NegativePremium);
        }
        Ok(())
    }
}

/// Error of [`Premium::validate()`].
#[derive(Clone, Copy, Debug, Display, Eq, Error, PartialEq)]
#[display("monthly premium must not be negative")]
pub struct NegativePremium;
