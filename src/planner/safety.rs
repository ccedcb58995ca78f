/*!
The safety classifier (spec §4.5): is a cell provably free of pit and
wumpus, or at least heuristically so via a danger-free visited
neighbor?
*/

use std::collections::{HashMap, HashSet};

use log::trace;

use crate::knowledge_base::KnowledgeBase;
use crate::misc::log::targets;
use crate::sentence::Sentence;
use crate::types::domain::{ObjectKind, PerceptKind, Position};
use crate::types::err::CnfError;

/// `is_safe(pos)`, checked in the order of spec §4.5:
/// 1. visited or already known safe,
/// 2. not known unsafe and the KB entails `¬Pit(pos) ∧ ¬Wumpus(pos)`,
/// 3. orthogonally adjacent to a visited, danger-free cell.
///
/// Positive classifications are memoized into `known_safe`; a definite
/// negative from (2) is memoized into `known_unsafe`. "Unknown" is
/// treated as unsafe, per the conservative default for path planning.
pub fn is_safe(
    kb: &mut KnowledgeBase,
    percept_history: &HashMap<Position, Vec<PerceptKind>>,
    known_safe: &mut HashSet<Position>,
    known_unsafe: &mut HashSet<Position>,
    max_iterations: usize,
    pos: Position,
) -> Result<bool, CnfError> {
    if kb.visited().contains(&pos) || known_safe.contains(&pos) {
        return Ok(true);
    }

    if !known_unsafe.contains(&pos) {
        let pit = kb.symbol_for(ObjectKind::Pit, pos);
        let wumpus = kb.symbol_for(ObjectKind::Wumpus, pos);
        let clear = Sentence::and(vec![pit.clone().not(), wumpus.clone().not()]);
        if kb.ask(&clear, max_iterations)? {
            known_safe.insert(pos);
            trace!(target: targets::SAFETY, "{pos} proven safe by entailment");
            return Ok(true);
        }

        if kb.ask(&pit, max_iterations)? || kb.ask(&wumpus, max_iterations)? {
            known_unsafe.insert(pos);
            trace!(target: targets::SAFETY, "{pos} proven unsafe by entailment");
            return Ok(false);
        }
    }

    let danger_free_neighbor = pos.neighbors(kb.grid_size()).into_iter().any(|n| {
        kb.visited().contains(&n)
            && percept_history
                .get(&n)
                .map(|ps| !ps.contains(&PerceptKind::Breeze) && !ps.contains(&PerceptKind::Stench))
                .unwrap_or(false)
    });

    Ok(danger_free_neighbor)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn s3_safe_neighbor_via_no_danger() {
        let mut kb = KnowledgeBase::new(3);
        kb.update_percept(Position::new(1, 1), &[]).unwrap();
        let mut history = HashMap::new();
        history.insert(Position::new(1, 1), Vec::new());
        let mut known_safe = HashSet::new();
        let mut known_unsafe = HashSet::new();

        assert!(is_safe(
            &mut kb,
            &history,
            &mut known_safe,
            &mut known_unsafe,
            1000,
            Position::new(1, 2)
        )
        .unwrap());
        assert!(is_safe(
            &mut kb,
            &history,
            &mut known_safe,
            &mut known_unsafe,
            1000,
            Position::new(2, 1)
        )
        .unwrap());
    }

    #[test]
    fn unknown_cell_is_unsafe() {
        let mut kb = KnowledgeBase::new(4);
        kb.update_percept(Position::new(1, 1), &[PerceptKind::Breeze]).unwrap();
        let history = HashMap::from([(Position::new(1, 1), vec![PerceptKind::Breeze])]);
        let mut known_safe = HashSet::new();
        let mut known_unsafe = HashSet::new();

        assert!(!is_safe(
            &mut kb,
            &history,
            &mut known_safe,
            &mut known_unsafe,
            1000,
            Position::new(3, 3)
        )
        .unwrap());
    }
}
