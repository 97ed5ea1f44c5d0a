//! [`Query`] calculating the total cost of an insurance [`Premium`].

use std::convert::Infallible;

use common::{operations::Calculate, Money};

use crate::{calc::Premium, Service};

use super::Query;

/// [`Query`] calculating the total cost of an insurance [`Premium`].
pub type InsuranceCost = Calculate<Premium>;

impl Query<InsuranceCost> for Service {
    type Ok = Money;
    type Err = Infallible;

    fn execute(
        &self,
        Calculate(premium): InsuranceCost,
    ) -> Result<Self::Ok, Self::Err> {
        Ok(premium.total_payable())
    }
}

#[cfg(test)]
mod spec {
    use common::operations::Calculate;

    use crate::{calc::Premium, query::Query as _, Config, Service};

    #[test]
    fn totals_premium() {
        let service = Service::new(Config::default());
        let premium = Premium {
            monthly_premium: "500BRL".parse().unwrap(),
            duration_months: 12,
        };

        let total = service.execute(Calculate(premium)).unwrap();

        assert_eq!(total, "6000BRL".parse().unwrap());
    }
}
