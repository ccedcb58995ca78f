/*!
The bundled grid simulator: a self-contained environment implementing
the external contract the [knowledge base](crate::knowledge_base) and
[planner](crate::planner) are written against, so the crate can run a
full episode without any outside wiring.

[GridSimulator](grid::GridSimulator) generates a random cave per
[Config](crate::config::Config); [predetermined::load] builds the same
type from one of a handful of fixed layouts for repeatable
demonstrations.
*/

use crate::types::domain::{Action, Heading, PerceptKind, Position};

pub mod grid;
pub mod predetermined;
pub mod render;

/// The percepts and bookkeeping a simulator must expose for a driver
/// loop to run an episode: sense the current cell, execute one action,
/// and learn when the episode has ended.
pub trait Simulator {
    /// The percepts present at `pos` from the board's standing state
    /// (Breeze, Stench, Glitter) --- excludes the transient percepts
    /// (Bump, Scream) that only ever arise as the direct result of an
    /// action, which [execute](Simulator::execute) returns instead.
    fn percept(&self, pos: Position) -> Vec<PerceptKind>;

    /// Execute `action` from the agent's current pose, mutating
    /// position/heading/inventory/score as appropriate, and returning
    /// the transient percepts (Bump, Scream) that result directly from
    /// it. Steady-state percepts at the resulting cell are obtained
    /// separately via [percept](Simulator::percept).
    fn execute(&mut self, action: Action) -> Vec<PerceptKind>;

    /// Whether the episode is over: the agent died, climbed out, or the
    /// driver's own step budget was exhausted.
    fn is_terminal(&self) -> bool;

    /// The agent's current cell.
    fn agent_position(&self) -> Position;

    /// The agent's current compass heading.
    fn agent_heading(&self) -> Heading;

    /// Running performance score, per the scoring convention of spec §7.
    fn performance(&self) -> i64;
}
