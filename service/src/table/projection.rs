//! [`Table`] of [`ProjectionYear`]s.

use std::cmp::Ordering;

use common::define_kind;

use crate::domain::{projection::LifeStatus, ProjectionYear};

use super::{Row, Table};

/// [`Table`] of [`ProjectionYear`]s, filterable by [`LifeStatus`].
pub type ProjectionTable = Table<ProjectionYear>;

define_kind! {
    #[doc = "Field a [`ProjectionTable`] can be sorted by."]
    enum Field {
        #[doc = "[`ProjectionYear::year`]."]
        Year = 1,

        #[doc = "[`ProjectionYear::financial`]."]
        Financial = 2,

        #[doc = "[`ProjectionYear::immovable`]."]
        Immovable = 3,

        #[doc = "[`ProjectionYear::total`]."]
        Total = 4,
    }
}

impl Row for ProjectionYear {
    type Id = i32;
    type Field = Field;
    type Category = LifeStatus;

    const DEFAULT_SORT: Field = Field::Year;

    fn id(&self) -> i32 {
        self.year
    }

    fn category(&self) -> LifeStatus {
        self.status
    }

    fn compare_by(&self, other: &Self, field: Field) -> Ordering {
        match field {
            Field::Year => self.year.cmp(&other.year),
            Field::Financial => self.financial.cmp_by_currency(&other.financial),
            Field::Immovable => self.immovable.cmp_by_currency(&other.immovable),
            Field::Total => self.total.cmp_by_currency(&other.total),
        }
    }
}
