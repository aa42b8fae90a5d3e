/*!
Reports for a session.

Each call made to an oracle by a session is recorded as an [Attempt], and the attempts made when deciding an instance are collected in a [Decision].
*/

use crate::structures::path::Path;

/// High-level reports regarding a decision.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum Report {
    /// The graphs share some length of simple accepting paths.
    Satisfiable,

    /// The graphs share no length of simple accepting paths.
    Unsatisfiable,

    /// Whether the graphs share a length is unknown, as the oracle did not reach a verdict.
    Unknown,
}

impl std::fmt::Display for Report {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Satisfiable => write!(f, "Satisfiable"),
            Self::Unsatisfiable => write!(f, "Unsatisfiable"),
            Self::Unknown => write!(f, "Unknown"),
        }
    }
}

/// A common length, with a simple accepting path of that length through each graph.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Witness {
    pub length: usize,

    /// One path for each graph, in the order of the graphs.
    pub paths: Vec<Path>,
}

/// The answer to a single call made to an oracle.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Answer {
    Yes(Witness),
    No,
    Unknown,
}

impl Answer {
    pub fn report(&self) -> Report {
        match self {
            Self::Yes(_) => Report::Satisfiable,
            Self::No => Report::Unsatisfiable,
            Self::Unknown => Report::Unknown,
        }
    }
}

impl std::fmt::Display for Answer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Yes(_) => write!(f, "Yes"),
            Self::No => write!(f, "No"),
            Self::Unknown => write!(f, "Unknown"),
        }
    }
}

/// A call made to an oracle.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Attempt {
    /// The length the formula was built for, or `None` if the formula covered a collection of lengths.
    pub length: Option<usize>,

    pub answer: Answer,
}

/// The attempts made when deciding an instance, in the order made.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Decision {
    pub attempts: Vec<Attempt>,
}

impl Decision {
    /// Satisfiable if some attempt found a witness, otherwise unknown if some attempt was unknown, and otherwise unsatisfiable.
    pub fn report(&self) -> Report {
        let mut report = Report::Unsatisfiable;
        for attempt in &self.attempts {
            match attempt.answer {
                Answer::Yes(_) => return Report::Satisfiable,
                Answer::Unknown => report = Report::Unknown,
                Answer::No => {}
            }
        }
        report
    }

    /// An iterator through each witness found, in the order found.
    pub fn witnesses(&self) -> impl Iterator<Item = &Witness> {
        self.attempts.iter().filter_map(|attempt| match &attempt.answer {
            Answer::Yes(witness) => Some(witness),
            _ => None,
        })
    }
}
