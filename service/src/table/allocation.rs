//! [`Table`] of [`Allocation`]s.

use std::cmp::Ordering;

use common::define_kind;

use crate::domain::{allocation, Allocation};

use super::{Row, Table};

/// [`Table`] of [`Allocation`]s, filterable by [`allocation::Kind`].
pub type AllocationTable = Table<Allocation>;

define_kind! {
    #[doc = "Field an [`AllocationTable`] can be sorted by."]
    enum Field {
        #[doc = "[`Allocation::name()`]."]
        Name = 1,

        #[doc = "[`Allocation::kind()`]."]
        Type = 2,

        #[doc = "[`Allocation::value()`]."]
        Value = 3,

        #[doc = "[`Allocation::last_update()`]."]
        LastUpdate = 4,
    }
}

impl Row for Allocation {
    type Id = allocation::Id;
    type Field = Field;
    type Category = allocation::Kind;

    const DEFAULT_SORT: Field = Field::LastUpdate;

    fn id(&self) -> allocation::Id {
        Allocation::id(self)
    }

    fn category(&self) -> allocation::Kind {
        self.kind()
    }

    fn compare_by(&self, other: &Self, field: Field) -> Ordering {
        match field {
            Field::Name => self.name().cmp(other.name()),
            Field::Type => self.kind().cmp(&other.kind()),
            Field::Value => self.value().cmp_by_currency(&other.value()),
            Field::LastUpdate => self.last_update().cmp(&other.last_update()),
        }
    }
}

#[cfg(test)]
mod spec {
    use std::num::NonZeroUsize;

    use common::{pagination::Order, DateTime};

    use crate::{
        domain::{
            allocation::{self, Financial, Immovable},
            Allocation, Name,
        },
        table::Filter,
    };

    use super::{AllocationTable, Field};

    fn allocation(n: u128, value: &str, day: u8) -> Allocation {
        let id = allocation::Id::from(uuid::Uuid::from_u128(n));
        let name = Name::new(format!("Asset {n:02}")).unwrap();
        let value = value.parse().unwrap();
        let last_update = DateTime::parse(&format!("2024-01-{day:02}"))
            .unwrap()
            .coerce();
        if n % 2 == 0 {
            Allocation::Immovable(Immovable {
                id,
                name,
                value,
                last_update,
                financing: None,
            })
        } else {
            Allocation::Financial(Financial {
                id,
                name,
                value,
                last_update,
            })
        }
    }

    fn table() -> AllocationTable {
        let rows = (1..=25)
            .map(|n| {
                let value = format!("{}BRL", (n * 7919) % 1000);
                allocation(n, &value, u8::try_from(26 - n).unwrap())
            })
            .collect();
        AllocationTable::new(Some(rows), NonZeroUsize::new(10).unwrap())
    }

    #[test]
    fn sorts_by_last_update_by_default() {
        let table = table();

        let view = table.view();
        assert_eq!(view.sort_field, Field::LastUpdate);
        assert_eq!(view.order, Order::Ascending);
        assert_eq!(view.data[0].name().to_string(), "Asset 25");
        assert!(view
            .data
            .windows(2)
            .all(|w| w[0].last_update() <= w[1].last_update()));
    }

    #[test]
    fn sorting_by_value_twice_flips_order() {
        let mut table = table();

        table.handle_sort(Field::Value);
        assert_eq!(table.view().order, Order::Ascending);
        table.handle_sort(Field::Value);

        let view = table.view();
        assert_eq!(view.sort_field, Field::Value);
        assert_eq!(view.order, Order::Descending);
        assert!(view
            .data
            .windows(2)
            .all(|w| w[0].value().amount >= w[1].value().amount));
    }

    #[test]
    fn filtering_by_kind_resets_page() {
        let mut table = table();
        table.handle_page_change(3);
        assert_eq!(table.view().page, 3);

        table.handle_filter_change(Filter::Only(allocation::Kind::Financial));

        let view = table.view();
        assert_eq!(view.page, 1);
        assert_eq!(view.total_items, 13);
        assert_eq!(view.total_pages, 2);
        assert!(view
            .data
            .iter()
            .all(|a| a.kind() == allocation::Kind::Financial));
    }

    #[test]
    fn sorts_values_by_currency_first() {
        let rows = [(1, "300USD"), (2, "500BRL"), (3, "100USD"), (4, "200BRL")]
            .into_iter()
            .map(|(n, value)| allocation(n, value, 1))
            .collect();
        let mut table =
            AllocationTable::new(Some(rows), NonZeroUsize::new(10).unwrap());

        table.handle_sort(Field::Value);

        let names = table
            .view()
            .data
            .iter()
            .map(|a| a.name().to_string())
            .collect::<Vec<_>>();
        assert_eq!(names, ["Asset 04", "Asset 02", "Asset 03", "Asset 01"]);
    }

    #[test]
    fn serializes_kind() {
        assert_eq!(
            serde_json::to_string(&allocation::Kind::Immovable).unwrap(),
            r#""IMMOVABLE""#,
        );
        assert_eq!(
            serde_json::from_str::<allocation::Kind>(r#""FINANCIAL""#)
                .unwrap(),
            allocation::Kind::Financial,
        );
    }

    #[test]
    fn parses_filter_values() {
        assert_eq!(
            "FINANCIAL".parse::<Filter<allocation::Kind>>().unwrap(),
            Filter::Only(allocation::Kind::Financial),
        );
        assert_eq!(
            "all".parse::<Filter<allocation::Kind>>().unwrap(),
            Filter::All,
        );
        assert_eq!("LAST_UPDATE".parse::<Field>().unwrap(), Field::LastUpdate);
    }

    #[test]
    fn absent_allocations_are_empty() {
        let table =
            AllocationTable::new(None, NonZeroUsize::new(10).unwrap());

        let view = table.view();
        assert!(view.data.is_empty());
        assert_eq!(view.total_pages, 0);
        assert_eq!(view.total_items, 0);
    }
}
