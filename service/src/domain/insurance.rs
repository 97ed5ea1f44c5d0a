//! [`Insurance`] definitions.

use common::{define_kind, unit, DateTimeOf, Money};
use derive_more::{Display, From, FromStr, Into};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::calc::Premium;

use super::Name;

/// Insurance policy held by a client.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Insurance {
    /// ID of this [`Insurance`].
    pub id: Id,

    /// [`Name`] of this [`Insurance`].
    pub name: Name,

    /// [`Kind`] of this [`Insurance`].
    pub kind: Kind,

    /// [`DateTime`] this [`Insurance`] starts at.
    ///
    /// [`DateTime`]: common::DateTime
    pub start_date: StartDateTime,

    /// [`Premium`] paid for this [`Insurance`].
    #[serde(flatten)]
    pub premium: Premium,

    /// Value paid out when the insured event happens.
    pub insured_value: Money,
}

impl Insurance {
    /// Returns the total premium payable over the duration of this
    /// [`Insurance`].
    #[must_use]
    pub fn total_payable(&self) -> Money {
        self.premium.total_payable()
    }
}

/// ID of an [`Insurance`].
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    Deserialize,
    Display,
    Eq,
    From,
    FromStr,
    Hash,
    Into,
    Ord,
    PartialEq,
    PartialOrd,
    Serialize,
)]
pub struct Id(Uuid);

define_kind! {
    #[doc = "Kind of an [`Insurance`]."]
    enum Kind {
        #[doc = "Pays out on death."]
        Life = 1,

        #[doc = "Pays out on disability."]
        Disability = 2,
    }
}

/// [`DateTime`] an [`Insurance`] starts at.
///
/// [`DateTime`]: common::DateTime
pub type StartDateTime = DateTimeOf<unit::Start>;

#[cfg(test)]
mod spec {
    use common::Money;

    use super::{Insurance, Kind};

    #[test]
    fn totals_premium() {
        let json = r#"{
            "id": "9d9e1b61-0a8f-4b5a-9a57-4c1a2c3e7f10",
            "name": "Term life",
            "kind": "LIFE",
            "startDate": "2025-03-01",
            "monthlyPremium": "500BRL",
            "durationMonths": 12,
            "insuredValue": "1000000BRL"
        }"#;

        let insurance: Insurance = serde_json::from_str(json).unwrap();

        assert_eq!(insurance.kind, Kind::Life);
        assert_eq!(
            insurance.total_payable(),
            "6000BRL".parse::<Money>().unwrap(),
        );
    }
}
