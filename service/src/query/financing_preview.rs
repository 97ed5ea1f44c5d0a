//! [`Query`] previewing the amortization of a [`Financing`].

use std::convert::Infallible;

use common::operations::Calculate;
use tracing as log;

use crate::{
    calc::{financing::Preview, Financing},
    Service,
};

use super::Query;

/// [`Query`] previewing the amortization of a [`Financing`].
pub type FinancingPreview = Calculate<Financing>;

impl Query<FinancingPreview> for Service {
    type Ok = Preview;
    type Err = Infallible;

    fn execute(
        &self,
        Calculate(financing): FinancingPreview,
    ) -> Result<Self::Ok, Self::Err> {
        if let Err(e) = financing.validate() {
            log::debug!("previewing invalid `Financing`: {e}");
        }
        Ok(financing.preview())
    }
}

#[cfg(test)]
mod spec {
    use common::operations::Calculate;

    use crate::{calc::Financing, query::Query as _, Config, Service};

    #[test]
    fn previews_financing() {
        let service = Service::new(Config::default());
        let financing = Financing {
            total_value: "500000BRL".parse().unwrap(),
            down_payment: "100000BRL".parse().unwrap(),
            installments: 240,
            annual_rate: "8.5".parse().unwrap(),
        };

        let preview = service.execute(Calculate(financing)).unwrap();

        assert_eq!(preview.financed_value, "400000BRL".parse().unwrap());
        assert_eq!(
            preview.monthly_payment.round_to_cents(),
            "3471.29BRL".parse().unwrap(),
        );
    }

    #[test]
    fn previews_invalid_financing() {
        let service = Service::new(Config::default());
        let financing = Financing {
            total_value: "100BRL".parse().unwrap(),
            down_payment: "200BRL".parse().unwrap(),
            installments: 0,
            annual_rate: "0".parse().unwrap(),
        };

        let preview = service.execute(Calculate(financing)).unwrap();

        assert_eq!(preview.financed_value, "-100BRL".parse().unwrap());
        assert_eq!(preview.monthly_payment, "0BRL".parse().unwrap());
    }
}
