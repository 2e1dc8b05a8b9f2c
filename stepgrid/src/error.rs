use std::fmt;
use std::io;

use stepgrid_search::SearchError;

/// Failure while running a single query.
#[derive(Debug)]
pub enum RunError {
    /// Writing the report failed. Fatal for the whole session.
    Io(io::Error),
    /// The search hit a resource limit. Only this query is lost.
    Search(SearchError),
}

impl RunError {
    /// Whether the session can move on to the next line.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::Search(_))
    }
}

impl fmt::Display for RunError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "output error: {e}"),
            Self::Search(e) => write!(f, "search aborted: {e}"),
        }
    }
}

impl std::error::Error for RunError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Search(e) => Some(e),
        }
    }
}

impl From<io::Error> for RunError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<SearchError> for RunError {
    fn from(e: SearchError) -> Self {
        Self::Search(e)
    }
}
