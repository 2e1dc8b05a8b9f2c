//! Parsing of query lines: `<TYPE> <targetX> <targetY> <step0> ... <stepN>`.

use std::fmt;
use std::str::FromStr;

use stepgrid_core::Point;
use stepgrid_search::{StepSequence, Target};

/// Which driver a query runs.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Strategy {
    Bfs,
    Ids,
    /// Heuristic-ordered DFS, spelled `A*` on input.
    Greedy,
}

impl Strategy {
    /// The keyword used on input and in the `Type` header.
    pub fn keyword(self) -> &'static str {
        match self {
            Self::Bfs => "BFS",
            Self::Ids => "IDS",
            Self::Greedy => "A*",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

impl FromStr for Strategy {
    type Err = QueryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "BFS" => Ok(Self::Bfs),
            "IDS" => Ok(Self::Ids),
            "A*" => Ok(Self::Greedy),
            other => Err(QueryError::UnknownStrategy(other.to_string())),
        }
    }
}

/// One parsed input line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Query {
    pub strategy: Strategy,
    pub target: Target,
    pub steps: StepSequence,
}

impl Query {
    /// Parse a query line. Blank lines yield `Ok(None)`.
    ///
    /// Tokens after the type are read left to right, like a stream: the
    /// first one that does not parse ends the read. Target coordinates that
    /// were not read stay 0, and a coordinate failure leaves the step
    /// sequence empty. Step tokens must be non-negative integers; a malformed
    /// tail only shortens the sequence.
    ///
    /// Only an unrecognised type rejects the line.
    pub fn parse(line: &str) -> Result<Option<Self>, QueryError> {
        let mut tokens = line.split_whitespace();
        let Some(keyword) = tokens.next() else {
            return Ok(None);
        };
        let strategy: Strategy = keyword.parse()?;

        let mut target = [0i64; 2];
        let mut steps = Vec::new();
        let mut coords_read = 0;
        for tok in tokens.by_ref().take(2) {
            match tok.parse::<i32>() {
                Ok(v) => {
                    target[coords_read] = i64::from(v);
                    coords_read += 1;
                }
                Err(_) => {
                    log::warn!("bad target coordinate {tok:?}, no steps read");
                    break;
                }
            }
        }
        if coords_read == 2 {
            for tok in tokens {
                match tok.parse::<u32>() {
                    Ok(step) => steps.push(step),
                    Err(_) => {
                        log::debug!("ignoring step tokens from {tok:?} onwards");
                        break;
                    }
                }
            }
        } else {
            log::debug!("read {coords_read} of 2 target coordinates");
        }

        Ok(Some(Self {
            strategy,
            target: Target::new(Point::new(target[0], target[1])),
            steps: StepSequence::new(steps),
        }))
    }
}

/// Why a query line was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryError {
    /// First token is not `BFS`, `IDS` or `A*`.
    UnknownStrategy(String),
}

impl fmt::Display for QueryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownStrategy(s) => write!(f, "unknown search type \u{201c}{s}\u{201d}"),
        }
    }
}

impl std::error::Error for QueryError {}
