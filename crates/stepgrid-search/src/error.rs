use std::fmt;

/// Resource errors that stop a search before it can answer.
///
/// "Target not found" is not an error: drivers report it through
/// [`SearchReport::found`](crate::SearchReport::found).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchError {
    /// An expansion would have grown the tree past its node budget.
    NodeBudgetExceeded { limit: usize },
    /// IDS ran out of outer iterations without reaching the target.
    IterationCapReached { cap: usize },
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NodeBudgetExceeded { limit } => {
                write!(f, "search tree exceeded its budget of {limit} nodes")
            }
            Self::IterationCapReached { cap } => {
                write!(f, "iterative deepening gave up after {cap} iterations")
            }
        }
    }
}

impl std::error::Error for SearchError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages() {
        assert_eq!(
            SearchError::NodeBudgetExceeded { limit: 100 }.to_string(),
            "search tree exceeded its budget of 100 nodes"
        );
        assert_eq!(
            SearchError::IterationCapReached { cap: 3 }.to_string(),
            "iterative deepening gave up after 3 iterations"
        );
    }
}
