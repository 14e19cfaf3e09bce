/*!
Miscellaneous items related to [logging](log).

Calls to the log macro are made throughout the library.
These are intended to provide useful information for extending the library and/or fixing issues.

Note, no log implementation is provided.
For more details, see [log].
*/

/// Targets to be used within a [log]! macro.
pub mod targets {
    /// Logs related to the [solve procedure](crate::procedures::solve)
    pub const SOLVE: &str = "solve";

    /// Logs related to [flip selection](crate::procedures)
    pub const SELECTION: &str = "selection";

    /// Logs related to the [score database](crate::db::score)
    pub const SCORE_DB: &str = "score_db";

    /// Logs related to the [community partition](crate::community)
    pub const COMMUNITY: &str = "community";

    /// Logs related to [building a formula](crate::builder)
    pub const BUILD: &str = "build";
}
