//! [`Args`] definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use common::{Money, Percent};

/// Patrimony planner calculations and tables.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Path to the configuration file.
    #[arg(short, long, default_value = "config.toml", global = true)]
    pub config: String,

    /// [`Command`] to run.
    #[command(subcommand)]
    pub command: Command,
}

impl Args {
    /// Parses command line arguments.
    ///
    /// # Errors
    ///
    /// Errors if failed to parse command line arguments.
    pub fn parse() -> Result<Self, clap::Error> {
        <Self as Parser>::try_parse()
    }
}

/// Command to run.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Previews the amortization of a financed purchase.
    Financing {
        /// Full price of the purchase, like `500000BRL`.
        #[arg(long)]
        total_value: Money,

        /// Part of the price paid upfront, like `100000BRL`.
        #[arg(long)]
        down_payment: Money,

        /// Number of monthly installments.
        #[arg(long)]
        installments: u32,

        /// Nominal annual interest rate in percent, like `8.5`.
        #[arg(long)]
        annual_rate: Percent,
    },

    /// Calculates the total premium payable for an insurance.
    Insurance {
        /// Premium paid every month, like `500BRL`.
        #[arg(long)]
        monthly_premium: Money,

        /// Number of months the premium is paid for.
        #[arg(long)]
        duration_months: u32,
    },

    /// Shows a page of a table read from a JSON file.
    Table(TableArgs),
}

/// Arguments of [`Command::Table`].
#[derive(Debug, clap::Args)]
pub struct TableArgs {
    /// Table the rows belong to.
    #[arg(value_enum)]
    pub kind: TableKind,

    /// Path to a JSON file with an array of rows.
    #[arg(short, long)]
    pub input: PathBuf,

    /// Field to sort by, like `value` or `last-update`.
    ///
    /// Repeating the same field flips the order.
    #[arg(long)]
    pub sort: Vec<String>,

    /// Category to filter by, like `financial`, or `all`.
    #[arg(long)]
    pub filter: Option<String>,

    /// Number of rows per page.
    #[arg(long)]
    pub per_page: Option<usize>,

    /// Page to show.
    #[arg(long)]
    pub page: Option<usize>,
}

/// Table kind.
#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum TableKind {
    /// Allocations of a simulation.
    Allocations,

    /// Versions history of simulations.
    History,

    /// Years of a patrimony projection.
    Projection,
}
