//! [`Percent`]-related definitions.

use std::str::FromStr;

use derive_more::Display;
use rust_decimal::Decimal;

/// Non-negative floating-point percentage, like an annual interest rate.
///
/// Values above `100` are allowed, as rates are not shares of a whole.
#[derive(Clone, Copy, Debug, Display, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Percent(Decimal);

impl Percent {
    /// Zero [`Percent`].
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// Creates a new [`Percent`] by checking the provided value is not
    /// negative.
    #[must_use]
    pub fn new(val: Decimal) -> Option<Self> {
        (val >= Decimal::ZERO).then_some(Self(val))
    }

    /// Returns the value of this [`Percent`], like `8.5` for `8.5%`.
    #[must_use]
    pub const fn value(self) -> Decimal {
        self.0
    }

    /// Returns this [`Percent`] as a fraction of one, like `0.085` for
    /// `8.5%`.
    #[must_use]
    pub fn fraction(self) -> Decimal {
        self.0 / Decimal::ONE_HUNDRED
    }

    /// Indicates whether this [`Percent`] is zero.
    #[must_use]
    pub fn is_zero(self) -> bool {
        self.0.is_zero()
    }
}

impl FromStr for Percent {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Decimal::from_str(s.trim_end_matches('%'))
            .ok()
            .and_then(Self::new)
            .ok_or("invalid percent value")
    }
}

#[cfg(feature = "serde")]
mod serde {
    //! Module providing integration with [`serde`] crate.

    use rust_decimal::Decimal;
    use serde::{de::Error as _, Deserialize, Deserializer, Serialize, Serializer};

    use super::Percent;

    impl Serialize for Percent {
        fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
            Serialize::serialize(&self.0, s)
        }
    }

    impl<'de> Deserialize<'de> for Percent {
        fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
            Self::new(<Decimal as Deserialize<'de>>::deserialize(d)?)
                .ok_or_else(|| D::Error::custom("negative `Percent`"))
        }
    }
}

#[cfg(test)]
mod spec {
    use std::str::FromStr as _;

    use rust_decimal::Decimal;

    use super::Percent;

    #[test]
    fn from_str() {
        assert_eq!(
            Percent::from_str("8.5").unwrap().value(),
            Decimal::new(85, 1),
        );
        assert_eq!(
            Percent::from_str("12%").unwrap().value(),
            Decimal::new(12, 0),
        );
        assert_eq!(Percent::from_str("0").unwrap(), Percent::ZERO);
        assert!(Percent::from_str("150").is_ok());

        assert!(Percent::from_str("-1").is_err());
        assert!(Percent::from_str("abc").is_err());
    }

    #[test]
    fn fraction() {
        assert_eq!(
            Percent::from_str("8.5").unwrap().fraction(),
            Decimal::new(85, 3),
        );
        assert!(Percent::ZERO.is_zero());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde() {
        let rate: Percent = serde_json::from_str(r#""8.5""#).unwrap();
        assert_eq!(rate.value(), Decimal::new(85, 1));
        assert_eq!(serde_json::to_string(&rate).unwrap(), r#""8.5""#);

        let rate: Percent = serde_json::from_str("12").unwrap();
        assert_eq!(rate.value(), Decimal::new(12, 0));

        assert!(serde_json::from_str::<Percent>(r#""-1""#).is_err());
    }
}
