//! Error type for panchang computation.

use std::error::Error;
use std::fmt::{self, Display, Formatter};

use kaala_core::OracleError;

/// Errors from panchang assembly and the searches beneath it.
///
/// A longitude query that fails surfaces as [`PanchangError::Oracle`] and
/// aborts the computation that issued it. Rise/set queries never produce
/// this error; their failures are recorded per event in the day's outcomes.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum PanchangError {
    /// The ephemeris backend failed while serving a longitude query.
    Oracle(OracleError),
    /// Geographic coordinates outside the accepted ranges.
    InvalidLocation(&'static str),
    /// A configuration value outside the accepted ranges.
    InvalidConfig(&'static str),
}

impl Display for PanchangError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Oracle(err) => write!(f, "oracle failure: {err}"),
            Self::InvalidLocation(msg) => write!(f, "invalid location: {msg}"),
            Self::InvalidConfig(msg) => write!(f, "invalid configuration: {msg}"),
        }
    }
}

impl Error for PanchangError {}

impl From<OracleError> for PanchangError {
    fn from(err: OracleError) -> Self {
        Self::Oracle(err)
    }
}
