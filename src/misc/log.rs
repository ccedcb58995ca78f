/*!
Miscellaneous items related to [logging](log).

Calls to the [log] macros are made throughout the library to help diagnose
issues during an episode. No log implementation is provided by the library
itself --- the `cli` binary wires up [env_logger] behind the `log` feature.

The targets below narrow output to a specific part of a decision cycle, e.g.
`RUST_LOG=resolution=trace` to see the refutation loop pair-by-pair.
*/

/// Targets to be used within a [log]! macro.
pub mod targets {
    /// Logs related to [CNF conversion](crate::cnf).
    pub const CNF: &str = "cnf";

    /// Logs related to the [resolution](crate::resolution) refutation loop.
    pub const RESOLUTION: &str = "resolution";

    /// Logs related to the [knowledge base](crate::knowledge_base).
    pub const KNOWLEDGE_BASE: &str = "knowledge_base";

    /// Logs related to the [safety classifier](crate::planner::safety).
    pub const SAFETY: &str = "safety";

    /// Logs related to the [A* planner](crate::planner).
    pub const PLANNER: &str = "planner";

    /// Logs related to the bundled grid [simulator](crate::sim).
    pub const SIM: &str = "sim";
}
