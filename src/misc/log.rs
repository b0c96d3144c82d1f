/*!
Miscellaneous items related to [logging](log).

Calls to the log macro are made throughout the library.
These are intended to provide useful information for extending the library
and/or fixing issues.

Note, no log implementation is provided.
For more details, see [log].
*/

/// Targets to be used within a [log]! macro.
pub mod targets {
    /// Logs related to the [clause database](crate::db)
    pub const CLAUSE_DB: &str = "clause_db";

    /// Logs related to [refutation search](crate::prover)
    pub const REFUTATION: &str = "refutation";

    /// Logs related to axiom loading
    pub const AXIOMS: &str = "axioms";

    /// Logs related to percept observation
    pub const OBSERVE: &str = "observe";

    /// Logs related to cell classification
    pub const CLASSIFY: &str = "classify";
}
