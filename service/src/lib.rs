//! Service contains the calculations and data shaping of the patrimony
//! planner.
//!
//! List of available Cargo features:
#![doc = document_features::document_features!()]
#![deny(
    nonstandard_style,
    rust_2018_idioms,
    rustdoc::all,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code
)]
#![forbid(non_ascii_idents)]
#![warn(
    clippy::allow_attributes,
    clippy::allow_attributes_without_reason,
    clippy::pedantic,
    clippy::wildcard_enum_match_arm,
    deprecated_in_future,
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs,
    unreachable_pub,
    unused_crate_dependencies,
    unused_import_braces,
    unused_labels,
    unused_lifetimes,
    unused_qualifications,
    unused_results
)]

pub mod calc;
pub mod domain;
pub mod query;
pub mod table;

use std::num::NonZeroUsize;

use common::{pagination, Locale};
use smart_default::SmartDefault;

#[cfg(doc)]
use crate::table::Table;
use crate::{
    domain::{Allocation, ProjectionYear, Simulation},
    table::{AllocationTable, HistoryTable, ProjectionTable},
};

pub use self::query::Query;

/// [`Service`] configuration.
#[derive(Clone, Copy, Debug, SmartDefault)]
pub struct Config {
    /// Number of rows a fresh [`Table`] shows per page.
    #[default(pagination::DEFAULT_PER_PAGE)]
    pub items_per_page: NonZeroUsize,

    /// [`Locale`] figures are presented in.
    pub locale: Locale,
}

/// Domain service.
#[derive(Clone, Copy, Debug)]
pub struct Service {
    /// Configuration of this [`Service`].
    config: Config,
}

impl Service {
    /// Creates a new [`Service`] with the provided [`Config`].
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Returns [`Config`] of this [`Service`].
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Creates a new [`AllocationTable`] of the provided `rows`.
    #[must_use]
    pub fn allocation_table(
        &self,
        rows: Option<Vec<Allocation>>,
    ) -> AllocationTable {
        AllocationTable::new(rows, self.config.items_per_page)
    }

    /// Creates a new [`HistoryTable`] of the provided `rows`.
    #[must_use]
    pub fn history_table(&self, rows: Option<Vec<Simulation>>) -> HistoryTable {
        HistoryTable::new(rows, self.config.items_per_page)
    }

    /// Creates a new [`ProjectionTable`] of the provided `rows`.
    #[must_use]
    pub fn projection_table(
        &self,
        rows: Option<Vec<ProjectionYear>>,
    ) -> ProjectionTable {
        ProjectionTable::new(rows, self.config.items_per_page)
    }
}
