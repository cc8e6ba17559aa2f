/*!
# Graph Algorithms

This module provides the algorithms built on top of the [`Graph`] contract. All of them are
implemented as traits with blanket implementations, so they work for every representation and
binary relations may compare graphs stored in different ways.

- [`GraphProperties`]: simple / null / complete predicates
- [`LabelledEdges`]: edges in terms of vertex labels
- [`SubgraphRelations`] and [`Subgraph`]: subgraph, spanning subgraph and induced subgraph
  relations as well as extraction of induced subgraphs
- [`Isomorphic`] and [`IsomorphismSearch`]: exact isomorphism by exhaustive permutation search
- [`Colorable`] and [`ColoringSearch`]: proper vertex colorings by backtracking

Searches with exponential worst case can be bounded by a budget through their configurable
structs; the trait methods always run unbounded.
*/

mod coloring;
mod isomorphism;
mod labelled;
mod properties;
mod subgraph;

use crate::{error::*, prelude::*};

pub use coloring::*;
pub use isomorphism::*;
pub use labelled::*;
pub use properties::*;
pub use subgraph::*;

/// Result of a search that may be bounded by a budget
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome<T> {
    /// The search found a witness
    Found(T),
    /// The search space was exhausted without finding a witness
    NotFound,
    /// The budget ran out before the search space was exhausted
    BudgetExhausted,
}

impl<T> SearchOutcome<T> {
    /// Returns the witness if one was found
    pub fn found(self) -> Option<T> {
        match self {
            SearchOutcome::Found(x) => Some(x),
            _ => None,
        }
    }

    /// Returns *true* if a witness was found
    pub fn is_found(&self) -> bool {
        matches!(self, SearchOutcome::Found(_))
    }

    /// Returns *true* if the search was cut short by its budget
    pub fn is_budget_exhausted(&self) -> bool {
        matches!(self, SearchOutcome::BudgetExhausted)
    }
}

/// Counts the steps of a search against an optional limit
#[derive(Debug, Clone, Copy)]
struct Budget {
    limit: Option<u64>,
    used: u64,
}

impl Budget {
    fn new(limit: Option<u64>) -> Self {
        Self { limit, used: 0 }
    }

    /// Consumes one step. Returns *false* if no step was left.
    fn try_consume(&mut self) -> bool {
        if self.limit.is_some_and(|limit| self.used >= limit) {
            return false;
        }
        self.used += 1;
        true
    }

    fn used(&self) -> u64 {
        self.used
    }
}
