/*!
A knowledge-based Wumpus World agent.

The crate is organized bottom-up, each layer depending only on the
ones before it:

- [sentence] --- propositional logic values (`Sentence`) and the
  symbol-naming [registry](sentence::registry).
- [cnf] --- conjunctive normal form rewriting.
- [resolution] --- resolution refutation over CNF clauses.
- [knowledge_base] --- the agent's evolving belief state: structural
  cave axioms, percept assertion/retraction, and entailment queries.
- [planner] --- the [safety](planner::safety) classifier and
  [A\*](planner::astar) search that turn KB entailment into actions.

Two further modules sit *outside* that core as external collaborators,
each behind its own boundary trait or free functions rather than being
reached into directly:

- [sim] --- a bundled grid simulator (and fixed-layout loader) the
  planner can be run against without any outside wiring.
- [baseline] --- a random-action contrast agent used for comparison.

[config] and [types] hold the shared configuration structure and value
types ([Position](types::domain::Position), [Heading](types::domain::Heading),
etc.) referenced throughout; [misc] holds logging plumbing.
*/

pub mod baseline;
pub mod cnf;
pub mod config;
pub mod knowledge_base;
pub mod misc;
pub mod planner;
pub mod resolution;
pub mod sentence;
pub mod sim;
pub mod types;
