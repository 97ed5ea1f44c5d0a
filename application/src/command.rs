//! Execution of [`Command`]s.

use std::{fmt, fs, io, path::Path, str::FromStr};

use common::{format, operations::Calculate, pagination::Order, Locale};
use itertools::Itertools as _;
use serde::de::DeserializeOwned;
use tabled::{settings::Style, Tabled};
use service::{
    calc::{Financing, Premium},
    domain::{
        allocation, projection, simulation, Allocation, ProjectionYear,
        Simulation,
    },
    table::{self, Filter, Row, Table},
    Query as _, Service,
};
use tracerr::Traced;
use tracing as log;

use crate::{
    args::{Command, TableArgs, TableKind},
    Error,
};

/// Executes the provided [`Command`], writing its result into `out`.
///
/// # Errors
///
/// If the [`Command`] arguments are invalid, its input cannot be read, or
/// the output cannot be written.
pub fn execute(
    service: &Service,
    command: Command,
    out: &mut impl io::Write,
) -> Result<(), Traced<Error>> {
    let locale = service.config().locale;
    match command {
        Command::Financing {
            total_value,
            down_payment,
            installments,
            annual_rate,
        } => {
            let financing = Financing {
                total_value,
                down_payment,
                installments,
                annual_rate,
            };
            if let Err(e) = financing.validate() {
                log::warn!("{e}");
            }
            let Ok(preview) = service.execute(Calculate(financing));

            writeln!(
                out,
                "Financed value:  {}\n\
                 Annual rate:     {}\n\
                 Monthly payment: {}\n\
                 Total paid:      {}\n\
                 Total interest:  {}",
                format::currency(&preview.financed_value, locale),
                format::percent(financing.annual_rate.value(), locale),
                format::currency(&preview.monthly_payment, locale),
                format::currency(&preview.total_paid, locale),
                format::currency(&preview.total_interest, locale),
            )
            .map_err(tracerr::from_and_wrap!(=> Error))
        }
        Command::Insurance {
            monthly_premium,
            duration_months,
        } => {
            let premium = Premium {
                monthly_premium,
                duration_months,
            };
            if let Err(e) = premium.validate() {
                log::warn!("{e}");
            }
            let Ok(total) = service.execute(Calculate(premium));

            writeln!(
                out,
                "Total payable: {}",
                format::currency(&total, locale),
            )
            .map_err(tracerr::from_and_wrap!(=> Error))
        }
        Command::Table(args) => match args.kind {
            TableKind::Allocations => {
                let rows = read_rows(&args.input)?;
                show(
                    service.allocation_table(rows),
                    &args,
                    table::allocation::Field::ALL,
                    allocation::Kind::ALL,
                    locale,
                    out,
                )
            }
            TableKind::History => {
                let rows = read_rows(&args.input)?;
                show(
                    service.history_table(rows),
                    &args,
                    table::history::Field::ALL,
                    simulation::Status::ALL,
                    locale,
                    out,
                )
            }
            TableKind::Projection => {
                let rows = read_rows(&args.input)?;
                show(
                    service.projection_table(rows),
                    &args,
                    table::projection::Field::ALL,
                    projection::LifeStatus::ALL,
                    locale,
                    out,
                )
            }
        },
    }
}

/// Reads rows from a JSON file at the provided `path`.
///
/// A `null` document is read as absent rows.
fn read_rows<R: DeserializeOwned>(
    path: &Path,
) -> Result<Option<Vec<R>>, Traced<Error>> {
    let json = fs::read_to_string(path).map_err(|source| {
        tracerr::new!(Error::Read {
            path: path.to_owned(),
            source,
        })
    })?;
    let rows: Option<Vec<R>> =
        serde_json::from_str(&json).map_err(tracerr::from_and_wrap!(=> Error))?;
    log::debug!(
        rows = rows.as_ref().map_or(0, Vec::len),
        "read rows from `{}`",
        path.display(),
    );
    Ok(rows)
}

/// Applies the [`TableArgs`] to the provided [`Table`] and writes the
/// resulting page into `out`.
fn show<R>(
    mut table: Table<R>,
    args: &TableArgs,
    fields: &[R::Field],
    categories: &[R::Category],
    locale: Locale,
    out: &mut impl io::Write,
) -> Result<(), Traced<Error>>
where
    R: Render,
    R::Field: FromStr + fmt::Display,
    R::Category: FromStr + fmt::Display,
{
    if let Some(per_page) = args.per_page {
        table.handle_items_per_page_change(per_page);
    }
    if let Some(filter) = &args.filter {
        let filter = kind_case(filter)
            .parse::<Filter<R::Category>>()
            .map_err(|_| invalid("filter", filter, categories, true))?;
        table.handle_filter_change(filter);
    }
    for field in &args.sort {
        let parsed = kind_case(field)
            .parse::<R::Field>()
            .map_err(|_| invalid("sort", field, fields, false))?;
        table.handle_sort(parsed);
    }
    if let Some(page) = args.page {
        table.handle_page_change(page);
    }

    let view = table.view();
    let mut grid =
        tabled::Table::new(view.data.iter().map(|r| r.line(locale)));
    _ = grid.with(Style::blank());

    writeln!(
        out,
        "{grid}\n\nPage {} of {} ({} items), sorted by {} {}",
        view.page,
        view.total_pages.max(1),
        view.total_items,
        kebab(view.sort_field),
        match view.order {
            Order::Ascending => "ascending",
            Order::Descending => "descending",
        },
    )
    .map_err(tracerr::from_and_wrap!(=> Error))
}

/// Creates an [`Error::InvalidArgument`] listing the `accepted` values.
fn invalid<K: fmt::Display>(
    name: &'static str,
    value: &str,
    accepted: &[K],
    with_all: bool,
) -> Traced<Error> {
    let expected = with_all
        .then_some("all".to_owned())
        .into_iter()
        .chain(accepted.iter().map(kebab))
        .join(", ");
    tracerr::new!(Error::InvalidArgument {
        name,
        value: value.to_owned(),
        expected,
    })
}

/// Converts a `kebab-case` argument value into a `SCREAMING_SNAKE_CASE`
/// kind.
fn kind_case(value: &str) -> String {
    value.to_uppercase().replace('-', "_")
}

/// Converts a `SCREAMING_SNAKE_CASE` kind into its `kebab-case`.
fn kebab(kind: impl fmt::Display) -> String {
    kind.to_string().to_lowercase().replace('_', "-")
}

/// [`Row`] renderable as a line of a [`tabled::Table`].
trait Render: Row {
    /// Formatted line of this [`Row`].
    type Line: Tabled;

    /// Formats this [`Row`] in the provided [`Locale`].
    fn line(&self, locale: Locale) -> Self::Line;
}

/// Formatted [`Allocation`].
#[derive(Debug, Tabled)]
struct AllocationLine {
    #[tabled(rename = "Name")]
    name: String,

    #[tabled(rename = "Type")]
    kind: String,

    #[tabled(rename = "Value")]
    value: String,

    #[tabled(rename = "Last update")]
    last_update: String,
}

impl Render for Allocation {
    type Line = AllocationLine;

    fn line(&self, locale: Locale) -> AllocationLine {
        AllocationLine {
            name: self.name().to_string(),
            kind: kebab(self.kind()),
            value: format::currency(&self.value(), locale),
            last_update: format::date(&self.last_update(), locale),
        }
    }
}

/// Formatted [`Simulation`] version.
#[derive(Debug, Tabled)]
struct SimulationLine {
    #[tabled(rename = "Name")]
    name: String,

    #[tabled(rename = "Version")]
    version: String,

    #[tabled(rename = "Start date")]
    start_date: String,

    #[tabled(rename = "Real rate")]
    real_rate: String,

    #[tabled(rename = "Last update")]
    last_update: String,

    #[tabled(rename = "Status")]
    status: String,
}

impl Render for Simulation {
    type Line = SimulationLine;

    fn line(&self, locale: Locale) -> SimulationLine {
        SimulationLine {
            name: self.name.to_string(),
            version: self.version.to_string(),
            start_date: format::date(&self.start_date, locale),
            real_rate: format::percent(self.real_rate.value(), locale),
            last_update: format::date(&self.last_update, locale),
            status: kebab(self.status()),
        }
    }
}

/// Formatted [`ProjectionYear`].
#[derive(Debug, Tabled)]
struct ProjectionLine {
    #[tabled(rename = "Year")]
    year: i32,

    #[tabled(rename = "Status")]
    status: String,

    #[tabled(rename = "Financial")]
    financial: String,

    #[tabled(rename = "Immovable")]
    immovable: String,

    #[tabled(rename = "Total")]
    total: String,
}

impl Render for ProjectionYear {
    type Line = ProjectionLine;

    fn line(&self, locale: Locale) -> ProjectionLine {
        ProjectionLine {
            year: self.year,
            status: kebab(self.status),
            financial: format::currency(&self.financial, locale),
            immovable: format::currency(&self.immovable, locale),
            total: format::currency(&self.total, locale),
        }
    }
}
