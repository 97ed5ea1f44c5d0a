//! [`Error`]-related definitions.

use std::{fmt, io, path::PathBuf};

use derive_more::{Display, Error as StdError, From};
use itertools::Itertools as _;
use tracerr::Traced;

/// Error of running a [`Command`].
///
/// [`Command`]: crate::args::Command
#[derive(Debug, Display, From, StdError)]
pub enum Error {
    /// [`Config`] failed to load.
    ///
    /// [`Config`]: crate::Config
    #[display("failed to load `Config`: {_0}")]
    Config(config::ConfigError),

    /// Input file failed to be read.
    #[display("failed to read `{}`: {source}", path.display())]
    #[from(ignore)]
    Read {
        /// Path of the file.
        #[error(not(source))]
        path: PathBuf,

        /// Underlying I/O error.
        source: io::Error,
    },

    /// Input file doesn't contain the expected rows.
    #[display("failed to parse rows: {_0}")]
    Parse(serde_json::Error),

    /// Output failed to be written.
    #[display("failed to write output: {_0}")]
    Write(io::Error),

    /// Argument has an invalid value.
    #[display("invalid `--{name}` value `{value}`, expected one of: {expected}")]
    #[from(ignore)]
    InvalidArgument {
        /// Name of the argument.
        #[error(not(source))]
        name: &'static str,

        /// Rejected value.
        #[error(not(source))]
        value: String,

        /// Accepted values.
        #[error(not(source))]
        expected: String,
    },
}

impl Error {
    /// Returns the process exit code representing this [`Error`].
    #[must_use]
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::InvalidArgument { .. } => 2,
            Self::Config(_) | Self::Read { .. } | Self::Parse(_) => 3,
            Self::Write(_) => 4,
        }
    }
}

/// [`Error`] along with the trace of where it happened.
#[derive(Debug)]
pub struct Report<'e>(pub &'e Traced<Error>);

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}\n{}",
            self.0.as_ref(),
            self.0
                .trace()
                .iter()
                .format_with("\n", |frame, f| f(&format_args!("  at {frame}"))),
        )
    }
}
