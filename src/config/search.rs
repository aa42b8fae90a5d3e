use std::str::FromStr;

/// How candidate lengths are put to the oracle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Search {
    /// A single call on the disjunction of the path formula of every candidate length.
    Global = 0,

    /// A call on the path formula of each candidate length, in turn.
    Separate,
}

impl std::fmt::Display for Search {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Global => write!(f, "Global"),
            Self::Separate => write!(f, "Separate"),
        }
    }
}

impl Search {
    /// The minimum Search type.
    pub const MIN: Search = Search::Global;

    /// The maximum Search type.
    pub const MAX: Search = Search::Separate;
}

impl FromStr for Search {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Global" => Ok(Self::Global),

            "Separate" => Ok(Self::Separate),

            _unknown_string => Err(()),
        }
    }
}

/// The order in which candidate lengths are visited, when searching lengths separately.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum LengthOrder {
    /// From zero upwards.
    Ascending = 0,

    /// From the greatest candidate downwards.
    Descending,
}

impl std::fmt::Display for LengthOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Ascending => write!(f, "Ascending"),
            Self::Descending => write!(f, "Descending"),
        }
    }
}

impl LengthOrder {
    /// The minimum LengthOrder type.
    pub const MIN: LengthOrder = LengthOrder::Ascending;

    /// The maximum LengthOrder type.
    pub const MAX: LengthOrder = LengthOrder::Descending;
}

impl FromStr for LengthOrder {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Ascending" => Ok(Self::Ascending),

            "Descending" => Ok(Self::Descending),

            _unknown_string => Err(()),
        }
    }
}
