/*!
Configuration for an agent episode.

A single flat structure, cloned into whichever component needs it
(knowledge base, planner, bundled simulator) rather than threaded
through as individual arguments.
*/

/// The primary configuration structure.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    /// Side length N of the square grid cave.
    pub grid_size: u32,

    /// Bound on the resolution refutation loop (spec §4.3). Reaching
    /// this bound is reported as `false`, not as an error.
    pub max_iterations: usize,

    /// Per-step cost penalty added to a risky-path plan over cells that
    /// are neither visited, safe, nor proven unsafe (spec §4.6 step 4).
    pub risky_step_penalty: u32,

    /// Whether the knowledge base retracts previously-asserted negative
    /// facts for a moving wumpus every `advanced_relocation_period`
    /// actions (spec §9, "Moving-wumpus mode").
    pub advanced: bool,

    /// How often (in executed actions) the simulator relocates wumpuses
    /// when `advanced` is set. Unused when `advanced` is false.
    pub advanced_relocation_period: u32,

    /// Number of wumpuses the bundled grid simulator places.
    pub wumpus_count: u32,

    /// Number of pits the bundled grid simulator places.
    pub pit_count: u32,

    /// Seed for the simulator's RNG, so episodes are reproducible.
    pub seed: u64,

    /// Hard cap on executed actions before the CLI driver gives up on
    /// an episode.
    pub max_steps: u32,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            grid_size: 4,
            max_iterations: 1000,
            risky_step_penalty: 2,
            advanced: false,
            advanced_relocation_period: 5,
            wumpus_count: 1,
            pit_count: 3,
            seed: 0,
            max_steps: 200,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_matches_spec_constants() {
        let cfg = Config::default();
        assert_eq!(cfg.max_iterations, 1000);
        assert_eq!(cfg.risky_step_penalty, 2);
        assert!(!cfg.advanced);
    }
}
