/*!
The structural axioms seeded into a fresh knowledge base: per-cell
biconditionals tying a percept to the presence of its cause in an
orthogonal neighbor, and per-cell mutual exclusion between the two
objects (spec §4.4).
*/

use crate::sentence::registry::{CellKind, SymbolKey, SymbolRegistry};
use crate::sentence::Sentence;
use crate::types::domain::Position;

/// `Stench(y,x) ⇔ ⋁ Wumpus(neighbor)`, `Breeze(y,x) ⇔ ⋁ Pit(neighbor)`,
/// and `¬(Wumpus(y,x) ∧ Pit(y,x))`, for every cell of an N×N grid.
///
/// Every grid has at least two orthogonal neighbors per cell (N ≥ 2 is
/// assumed elsewhere), so the biconditional's right-hand side is never
/// the vacuous empty disjunction.
pub fn structural_axioms(n: u32, registry: &mut SymbolRegistry) -> Vec<Sentence> {
    let mut axioms = Vec::new();
    for y in 1..=n {
        for x in 1..=n {
            let pos = Position::new(y, x);
            let wumpus = registry.get(SymbolKey::cell(CellKind::Wumpus, pos));
            let pit = registry.get(SymbolKey::cell(CellKind::Pit, pos));
            axioms.push(Sentence::and(vec![wumpus.clone(), pit.clone()]).not());

            let neighbors = pos.neighbors(n);
            let wumpus_neighbors: Vec<Sentence> = neighbors
                .iter()
                .map(|&p| registry.get(SymbolKey::cell(CellKind::Wumpus, p)))
                .collect();
            let pit_neighbors: Vec<Sentence> = neighbors
                .iter()
                .map(|&p| registry.get(SymbolKey::cell(CellKind::Pit, p)))
                .collect();

            if !wumpus_neighbors.is_empty() {
                let stench = registry.get(SymbolKey::cell(CellKind::Stench, pos));
                axioms.push(stench.iff(Sentence::or(wumpus_neighbors)));
            }
            if !pit_neighbors.is_empty() {
                let breeze = registry.get(SymbolKey::cell(CellKind::Breeze, pos));
                axioms.push(breeze.iff(Sentence::or(pit_neighbors)));
            }
        }
    }
    axioms
}
