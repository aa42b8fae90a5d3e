/*!
Miscelanous items related to [logging](log).

Calls to the log macro are made throughout the library.
These are intended to provide useful information when investigating an encoding or an instance.

Note, no log implementation is provided by the library.
For more details, see [log].
*/

/// Targets to be used within a [log]! macro.
pub mod targets {
    /// Logs related to building formulas, see [encoding](crate::encoding).
    pub const ENCODING: &str = "encoding";

    /// Logs related to calls to an [oracle](crate::oracle).
    pub const ORACLE: &str = "oracle";

    /// Logs related to reading a model, see [decoding](crate::decoding).
    pub const DECODING: &str = "decoding";

    /// Logs related to the search over lengths, see [procedures](crate::procedures).
    pub const SEARCH: &str = "search";

    /// Logs related to reading graphs, see [builder](crate::builder).
    pub const PARSE: &str = "parse";
}
