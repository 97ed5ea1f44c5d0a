//! [`ProjectionYear`] definitions.

use common::{define_kind, Money};
use serde::{Deserialize, Serialize};

/// Forecast of the patrimony at one year of a projection.
///
/// Projections are computed remotely, so this is a read-only record.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectionYear {
    /// Calendar year of this forecast, unique within a projection.
    pub year: i32,

    /// [`LifeStatus`] the client is assumed to be in this year.
    pub status: LifeStatus,

    /// Forecasted value of financial allocations.
    pub financial: Money,

    /// Forecasted value of immovable allocations.
    pub immovable: Money,

    /// Forecasted total patrimony.
    pub total: Money,

    /// Forecasted total patrimony disregarding insurance payouts, if it
    /// differs from the total.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_without_insurances: Option<Money>,
}

define_kind! {
    #[doc = "Life status assumed for a [`ProjectionYear`]."]
    enum LifeStatus {
        #[doc = "The client is alive and active."]
        Alive = 1,

        #[doc = "The client has deceased."]
        Deceased = 2,

        #[doc = "The client is unable to work."]
        Invalid = 3,
    }
}

#[cfg(test)]
mod spec {
    use super::{LifeStatus, ProjectionYear};

    #[test]
    fn deserializes_year() {
        let json = r#"{
            "year": 2031,
            "status": "DECEASED",
            "financial": "1200000BRL",
            "immovable": "800000BRL",
            "total": "2000000BRL"
        }"#;

        let year: ProjectionYear = serde_json::from_str(json).unwrap();

        assert_eq!(year.year, 2031);
        assert_eq!(year.status, LifeStatus::Deceased);
        assert_eq!(year.total_without_insurances, None);
    }
}
