//! [`Allocation`] definitions.

use common::{define_kind, unit, DateTimeOf, Money};
use derive_more::{Display, From, FromStr, Into};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::calc::Financing;

use super::Name;

/// Asset tracked by a simulation.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Allocation {
    /// Financial instrument.
    Financial(Financial),

    /// Immovable property.
    Immovable(Immovable),
}

impl Allocation {
    /// Returns ID of this [`Allocation`].
    #[must_use]
    pub fn id(&self) -> Id {
        match self {
            Self::Financial(a) => a.id,
            Self::Immovable(a) => a.id,
        }
    }

    /// Returns [`Kind`] of this [`Allocation`].
    #[must_use]
    pub fn kind(&self) -> Kind {
        match self {
            Self::Financial(_) => Kind::Financial,
            Self::Immovable(_) => Kind::Immovable,
        }
    }

    /// Returns [`Name`] of this [`Allocation`].
    #[must_use]
    pub fn name(&self) -> &Name {
        match self {
            Self::Financial(a) => &a.name,
            Self::Immovable(a) => &a.name,
        }
    }

    /// Returns the current value of this [`Allocation`].
    #[must_use]
    pub fn value(&self) -> Money {
        match self {
            Self::Financial(a) => a.value,
            Self::Immovable(a) => a.value,
        }
    }

    /// Returns [`LastUpdateDateTime`] of this [`Allocation`].
    #[must_use]
    pub fn last_update(&self) -> LastUpdateDateTime {
        match self {
            Self::Financial(a) => a.last_update,
            Self::Immovable(a) => a.last_update,
        }
    }
}

/// [`Allocation`] in a financial instrument.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Financial {
    /// ID of this [`Allocation`].
    pub id: Id,

    /// [`Name`] of this [`Allocation`].
    pub name: Name,

    /// Current value of this [`Allocation`].
    pub value: Money,

    /// [`DateTime`] when the value of this [`Allocation`] was last updated.
    ///
    /// [`DateTime`]: common::DateTime
    pub last_update: LastUpdateDateTime,
}

/// [`Allocation`] in an immovable property, possibly financed.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Immovable {
    /// ID of this [`Allocation`].
    pub id: Id,

    /// [`Name`] of this [`Allocation`].
    pub name: Name,

    /// Current value of this [`Allocation`].
    pub value: Money,

    /// [`DateTime`] when the value of this [`Allocation`] was last updated.
    ///
    /// [`DateTime`]: common::DateTime
    pub last_update: LastUpdateDateTime,

    /// [`Financing`] terms this property was bought with, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub financing: Option<Financing>,
}

/// ID of an [`Allocation`].
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
    #[doc = "Kind of an [`Allocation`]."]
    enum Kind {
        #[doc = "Financial instrument."]
        Financial = 1,

        #[doc = "Immovable property."]
        Immovable = 2,
    }
}

/// [`DateTime`] of the last [`Allocation`] value update.
///
/// [`DateTime`]: common::DateTime
pub type LastUpdateDateTime = DateTimeOf<unit::LastUpdate>;
