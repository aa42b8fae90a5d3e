/*!
Procedures for deciding whether the graphs of a session share a length of simple accepting paths.

# Global search

A single formula is built, the [full formula](crate::encoding::full_formula), and handed to the oracle.
On satisfiability, the length witnessed is [read](crate::decoding::solution_length) from the model, followed by a path of that length through each graph.

Optionally, each candidate length may first be checked on its own, and only lengths with a witness (or an unknown answer) are kept in the full formula.
The answer is unchanged, though the full formula may be much smaller.

# Separate search

Each candidate length is checked on its own with the [path formula](crate::encoding::path_formula) of the length, in either ascending or descending order.
The search stops at the first length with a witness, unless configured to be exhaustive.

# Example

```rust
# use equal_path::config::{Config, Search};
# use equal_path::oracle::varisat::VarisatOracle;
# use equal_path::procedures::Session;
# use equal_path::reports::{Answer, Report};
# use equal_path::structures::graph::Graph;
let graphs = [
    Graph::from_edges("short", 2, &[(0, 1)], 0, 1),
    Graph::from_edges("long", 3, &[(0, 1), (1, 2)], 0, 2),
];

let mut session = Session::new(Config::default(), &graphs, VarisatOracle::default()).unwrap();
assert_eq!(session.decide().unwrap().report(), Report::Unsatisfiable);

let mut config = Config::default();
config.search.value = Search::Separate;
config.exhaustive.value = true;

let mut session = Session::new(config, &graphs, VarisatOracle::default()).unwrap();
let decision = session.decide().unwrap();
assert_eq!(decision.attempts.len(), 2);
assert!(decision.attempts.iter().all(|attempt| attempt.answer == Answer::No));
```
*/

use crate::{
    config::Search,
    decoding::{paths_from_model, solution_length},
    misc::log::targets,
    oracle::{Oracle, Verdict},
    procedures::Session,
    reports::{Answer, Attempt, Decision, Witness},
    structures::{formula::Formula, graph::GraphSource},
    types::err::{self, ErrorKind},
};

impl<G: GraphSource, O: Oracle> Session<'_, G, O> {
    /// Decides whether the graphs share a length, as configured.
    pub fn decide(&mut self) -> Result<Decision, ErrorKind> {
        match self.config.search.value {
            Search::Global => self.decide_globally(),
            Search::Separate => self.decide_separately(),
        }
    }

    /// Decides whether the graphs share a length with a single call on the full formula.
    pub fn decide_globally(&mut self) -> Result<Decision, ErrorKind> {
        let lengths = match self.config.prefilter.value {
            true => self.prefilter()?,
            false => self.lengths(),
        };

        let formula = self.full_formula_over(&lengths)?;
        let attempt = self.attempt(None, formula)?;
        Ok(Decision {
            attempts: vec![attempt],
        })
    }

    /// Decides whether the graphs share a length with a call on each candidate length.
    pub fn decide_separately(&mut self) -> Result<Decision, ErrorKind> {
        let mut decision = Decision::default();

        for length in self.lengths() {
            let attempt = self.check_length(length)?;
            let found = matches!(attempt.answer, Answer::Yes(_));
            decision.attempts.push(attempt);

            if found && !self.config.exhaustive.value {
                log::info!(target: targets::SEARCH, "Stopping at length {length}");
                break;
            }
        }

        Ok(decision)
    }

    /// Decides whether each graph has a simple accepting path of `length` edges.
    pub fn check_length(&mut self, length: usize) -> Result<Attempt, ErrorKind> {
        let formula = self.path_formula(length)?;
        self.attempt(Some(length), formula)
    }

    /// The candidate lengths, without those at which some graph has no simple accepting path.
    fn prefilter(&mut self) -> Result<Vec<usize>, ErrorKind> {
        let mut kept = Vec::default();
        for length in self.lengths() {
            let formula = self.path_formula(length)?;
            match self.verdict(Some(length), &formula)? {
                Verdict::Unsatisfiable => {}
                Verdict::Satisfiable(_) | Verdict::Unknown => kept.push(length),
            }
        }
        log::info!(target: targets::SEARCH, "Prefiltered lengths: {kept:?}");
        Ok(kept)
    }

    fn verdict(&mut self, length: Option<usize>, formula: &Formula) -> Result<Verdict, ErrorKind> {
        if let Some(callback) = &mut self.callback_formula {
            callback(length, formula, &self.table);
        }
        self.oracle.solve(formula)
    }

    /// Hands `formula` to the oracle, and reads any witness from the model returned.
    fn attempt(&mut self, length: Option<usize>, formula: Formula) -> Result<Attempt, ErrorKind> {
        let answer = match self.verdict(length, &formula)? {
            Verdict::Satisfiable(model) => {
                let found = solution_length(&model, &self.table, self.graphs)?;
                if let Some(expected) = length {
                    if found != expected {
                        return Err(err::DecodeError::LengthMismatch { expected, found }.into());
                    }
                }
                let paths = paths_from_model(&model, &self.table, self.graphs, found)?;
                Answer::Yes(Witness {
                    length: found,
                    paths,
                })
            }

            Verdict::Unsatisfiable => Answer::No,

            Verdict::Unknown => Answer::Unknown,
        };

        match length {
            Some(length) => log::info!(target: targets::SEARCH, "Length {length}: {answer}"),
            None => log::info!(target: targets::SEARCH, "All lengths: {answer}"),
        }

        let attempt = Attempt { length, answer };
        if let Some(callback) = &mut self.callback_attempt {
            callback(&attempt);
        }
        Ok(attempt)
    }
}
