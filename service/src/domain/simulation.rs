//! [`Simulation`] definitions.

use common::{define_kind, unit, DateTimeOf, Percent};
use derive_more::{Display, From, FromStr, Into};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::Name;

/// Version of a what-if patrimonial scenario.
///
/// Editing a [`Simulation`] supersedes its current version, which is then
/// kept as a read-only legacy one.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Simulation {
    /// ID of this [`Simulation`] version.
    pub id: Id,

    /// [`Name`] of this [`Simulation`].
    pub name: Name,

    /// [`Version`] number of this [`Simulation`].
    pub version: Version,

    /// [`DateTime`] the scenario starts at.
    ///
    /// [`DateTime`]: common::DateTime
    pub start_date: StartDateTime,

    /// Assumed real rate of return per year.
    pub real_rate: Percent,

    /// [`DateTime`] when this [`Simulation`] version was last updated.
    ///
    /// [`DateTime`]: common::DateTime
    pub last_update: LastUpdateDateTime,

    /// Indicator whether this version was superseded by a newer one.
    #[serde(default)]
    pub is_legacy: bool,
}

impl Simulation {
    /// Returns [`Status`] of this [`Simulation`] version.
    #[must_use]
    pub fn status(&self) -> Status {
        if self.is_legacy {
            Status::Legacy
        } else {
            Status::Current
        }
    }
}

/// ID of a [`Simulation`] version.
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

/// Version number of a [`Simulation`], starting at `1`.
#[derive(
    Clone,
    Copy,
    Debug,
    Deserialize,
    Display,
    Eq,
    From,
    Hash,
    Into,
    Ord,
    PartialEq,
    PartialOrd,
    Serialize,
)]
pub struct Version(u32);

define_kind! {
    #[doc = "Status of a [`Simulation`] version."]
    enum Status {
        #[doc = "Version being edited."]
        Current = 1,

        #[doc = "Superseded read-only version."]
        Legacy = 2,
    }
}

/// [`DateTime`] a [`Simulation`] starts at.
///
/// [`DateTime`]: common::DateTime
pub type StartDateTime = DateTimeOf<unit::Start>;

/// [`DateTime`] of the last [`Simulation`] update.
///
/// [`DateTime`]: common::DateTime
pub type LastUpdateDateTime = DateTimeOf<unit::LastUpdate>;
