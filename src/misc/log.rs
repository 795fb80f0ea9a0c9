/*!
Miscelanous items related to [logging](log).

Calls to the log macro are made throughout the library.
These are intended to provide useful information for extending the library and/or fixing issues.

Note, no log implementation is provided by the library.
The binary initialises [env_logger](https://docs.rs/env_logger/latest/env_logger/) when built with the `log` feature.
*/

/// Targets to be used within a [log]! macro.
pub mod targets {
    /// Logs related to [BCP](crate::procedures::bcp)
    pub const PROPAGATION: &str = "propagation";

    /// Logs related to [analysis](crate::procedures::analysis)
    pub const ANALYSIS: &str = "analysis";

    /// Logs related to the [clause database](crate::db::clause)
    pub const CLAUSE_DB: &str = "clause_db";

    /// Logs related to [backjumping](crate::procedures::backjump)
    pub const BACKJUMP: &str = "backjump";

    /// Logs related to reading [rules](crate::constraints)
    pub const RULES: &str = "rules";

    /// Logs related to evicting [unconstrainable](crate::sampler::eviction) options
    pub const EVICTION: &str = "eviction";

    /// Logs related to [encoding](crate::sampler::encoding) rules as a formula
    pub const ENCODING: &str = "encoding";

    /// Logs related to [random bias](crate::sampler::bias)
    pub const BIAS: &str = "bias";

    /// Logs related to queries to an [oracle](crate::oracle)
    pub const ORACLE: &str = "oracle";
}
