//! [`Table`] of [`Simulation`] versions history.

use std::cmp::Ordering;

use common::define_kind;

use crate::domain::{simulation, Simulation};

use super::{Row, Table};

/// [`Table`] of [`Simulation`] versions, filterable by
/// [`simulation::Status`].
pub type HistoryTable = Table<Simulation>;

define_kind! {
    #[doc = "Field a [`HistoryTable`] can be sorted by."]
    enum Field {
        #[doc = "[`Simulation::name`]."]
        Name = 1,

        #[doc = "[`Simulation::version`]."]
        Version = 2,

        #[doc = "[`Simulation::start_date`]."]
        StartDate = 3,

        #[doc = "[`Simulation::last_update`]."]
        LastUpdate = 4,
    }
}

impl Row for Simulation {
    type Id = simulation::Id;
    type Field = Field;
    type Category = simulation::Status;

    const DEFAULT_SORT: Field = Field::Version;

    fn id(&self) -> simulation::Id {
        self.id
    }

    fn category(&self) -> simulation::Status {
        self.status()
    }

    fn compare_by(&self, other: &Self, field: Field) -> Ordering {
        match field {
            Field::Name => self.name.cmp(&other.name),
            Field::Version => self.version.cmp(&other.version),
            Field::StartDate => self.start_date.cmp(&other.start_date),
            Field::LastUpdate => self.last_update.cmp(&other.last_update),
        }
    }
}

#[cfg(test)]
mod spec {
    use std::num::NonZeroUsize;

    use common::{pagination::Order, DateTime};

    use crate::{
        domain::{
            simulation::{self, Version},
            Name, Simulation,
        },
        table::Filter,
    };

    use super::{Field, HistoryTable};

    fn simulation(version: u32, is_legacy: bool) -> Simulation {
        Simulation {
            id: simulation::Id::from(uuid::Uuid::from_u128(version.into())),
            name: Name::new("Retirement").unwrap(),
            version: Version::from(version),
            start_date: DateTime::parse("2025-01-01").unwrap().coerce(),
            real_rate: "4".parse().unwrap(),
            last_update: DateTime::parse(&format!(
                "2025-02-{:02}",
                29 - version,
            ))
            .unwrap()
            .coerce(),
            is_legacy,
        }
    }

    fn table() -> HistoryTable {
        let rows = (1..=12).map(|v| simulation(v, v < 12)).collect();
        HistoryTable::new(Some(rows), NonZeroUsize::new(5).unwrap())
    }

    #[test]
    fn lists_versions_in_order() {
        let table = table();

        let view = table.view();
        assert_eq!(view.sort_field, Field::Version);
        assert_eq!(view.total_pages, 3);
        assert_eq!(
            view.data.iter().map(|s| s.version).collect::<Vec<_>>(),
            (1..=5).map(Version::from).collect::<Vec<_>>(),
        );
    }

    #[test]
    fn filters_legacy_versions() {
        let mut table = table();
        table.handle_page_change(2);

        table.handle_filter_change(Filter::Only(simulation::Status::Current));
        let view = table.view();
        assert_eq!(view.page, 1);
        assert_eq!(view.total_items, 1);
        assert_eq!(view.data[0].version, Version::from(12));

        table.handle_filter_change(Filter::Only(simulation::Status::Legacy));
        assert_eq!(table.view().total_items, 11);
    }

    #[test]
    fn sorts_by_last_update() {
        let mut table = table();
        table.handle_sort(Field::LastUpdate);
        table.handle_sort(Field::LastUpdate);

        let view = table.view();
        assert_eq!(view.order, Order::Descending);
        assert_eq!(view.data[0].version, Version::from(1));
    }
}
