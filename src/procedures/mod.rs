/*!
Sessions, and the procedures for deciding an instance.

A [Session] borrows a collection of graphs, owns an [oracle](crate::oracle), and owns the [table](crate::db::variable::VariableTable) through which each formula of the session is built.
The graphs are checked when the session is created, and a session is only created if each graph has exactly one source and exactly one target.
As the table persists through the session, the variables of a formula built for some length are shared with any later formula built for the same length.

The oracle is released when the session is dropped.

- [solve] contains the procedures for deciding whether the graphs share a length, either [globally](Session::decide_globally) or [separately](Session::decide_separately).

# Callbacks

A session may be given callbacks, which are called with:
- Each formula built, immediately before the formula is handed to the oracle.
- Each attempt made, immediately after the answer of the oracle has been read.

```rust
# use equal_path::config::{Config, Search};
# use equal_path::oracle::varisat::VarisatOracle;
# use equal_path::procedures::Session;
# use equal_path::structures::graph::Graph;
# use std::{cell::RefCell, rc::Rc};
let graphs = [Graph::from_edges("line", 3, &[(0, 1), (1, 2)], 0, 2)];

let mut config = Config::default();
config.search.value = Search::Separate;

let mut session = Session::new(config, &graphs, VarisatOracle::default()).unwrap();

let seen = Rc::new(RefCell::new(Vec::new()));
let seen_by_callback = seen.clone();
session.set_callback_attempt(Box::new(move |attempt| {
    seen_by_callback.borrow_mut().push(attempt.length);
}));

let decision = session.decide().unwrap();
assert_eq!(decision.witnesses().next().unwrap().length, 2);
assert_eq!(*seen.borrow(), vec![Some(0), Some(1), Some(2)]);
```
*/

pub mod solve;

use crate::{
    config::{Config, LengthOrder},
    db::variable::VariableTable,
    encoding::{self},
    misc::log::targets,
    oracle::Oracle,
    reports::Attempt,
    structures::{
        formula::Formula,
        graph::{endpoints, GraphSource},
    },
    types::err::{self, ErrorKind},
};

/// A callback on a formula about to be handed to the oracle, with the length of the formula if the formula was built for a single length.
pub type CallbackFormula = dyn FnMut(Option<usize>, &Formula, &VariableTable);

/// A callback on an attempt made.
pub type CallbackAttempt = dyn FnMut(&Attempt);

/// A session for deciding whether a collection of graphs share a length of simple accepting paths.
pub struct Session<'g, G: GraphSource, O: Oracle> {
    config: Config,
    graphs: &'g [G],
    table: VariableTable,
    oracle: O,

    callback_formula: Option<Box<CallbackFormula>>,
    callback_attempt: Option<Box<CallbackAttempt>>,
}

impl<'g, G: GraphSource, O: Oracle> Session<'g, G, O> {
    /// A session on `graphs`, if each graph has exactly one source and exactly one target.
    pub fn new(config: Config, graphs: &'g [G], oracle: O) -> Result<Self, ErrorKind> {
        if graphs.is_empty() {
            return Err(err::GraphError::NoGraphs.into());
        }

        for (index, graph) in graphs.iter().enumerate() {
            let endpoints = endpoints(graph, index)?;
            log::debug!(target: targets::SEARCH, "Graph {index} '{}': {endpoints:?}", graph.name());
        }

        log::info!(target: targets::SEARCH, "Session on {} graphs", graphs.len());

        Ok(Session {
            config,
            graphs,
            table: VariableTable::default(),
            oracle,
            callback_formula: None,
            callback_attempt: None,
        })
    }

    pub fn set_callback_formula(&mut self, callback: Box<CallbackFormula>) {
        self.callback_formula = Some(callback);
    }

    pub fn set_callback_attempt(&mut self, callback: Box<CallbackAttempt>) {
        self.callback_attempt = Some(callback);
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn graphs(&self) -> &'g [G] {
        self.graphs
    }

    pub fn table(&self) -> &VariableTable {
        &self.table
    }

    pub fn oracle(&self) -> &O {
        &self.oracle
    }

    /// The greatest candidate length, which is one less than the smallest order of any graph.
    pub fn max_length(&self) -> usize {
        encoding::max_length(self.graphs).unwrap_or(0)
    }

    /// Each candidate length, in the configured order.
    pub fn lengths(&self) -> Vec<usize> {
        let mut lengths = encoding::candidate_lengths(self.graphs);
        if self.config.order.value == LengthOrder::Descending {
            lengths.reverse();
        }
        lengths
    }

    /// Ok if an estimate of size is within the configured limit.
    fn check_limit(&self, estimate: Option<usize>) -> Result<(), err::BuildError> {
        let limit = self.config.formula_limit.value;
        match estimate {
            Some(estimate) if estimate <= limit => Ok(()),
            _ => {
                log::warn!(target: targets::ENCODING, "Formula refused, estimate {estimate:?} with limit {limit}");
                Err(err::BuildError::FormulaTooLarge { estimate, limit })
            }
        }
    }

    /// The [path formula](encoding::path_formula) of the graphs at `length`, if within the configured limit.
    pub fn path_formula(&mut self, length: usize) -> Result<Formula, ErrorKind> {
        self.check_limit(encoding::estimate(self.graphs, length))?;
        encoding::path_formula(&mut self.table, self.graphs, length)
    }

    /// The [full formula](encoding::full_formula_over) of the graphs over `lengths`, if within the configured limit.
    pub fn full_formula_over(&mut self, lengths: &[usize]) -> Result<Formula, ErrorKind> {
        self.check_limit(encoding::estimate_over(self.graphs, lengths))?;
        encoding::full_formula_over(&mut self.table, self.graphs, lengths)
    }

    /// The [full formula](encoding::full_formula) of the graphs, if within the configured limit.
    pub fn full_formula(&mut self) -> Result<Formula, ErrorKind> {
        let lengths = encoding::candidate_lengths(self.graphs);
        self.full_formula_over(&lengths)
    }
}
