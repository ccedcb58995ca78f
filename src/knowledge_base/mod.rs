/*!
The knowledge base: the clause set an agent reasons over, plus the
bookkeeping (symbol registry, visited cells, last shot) needed to keep
that clause set sound and deduplicated as percepts and actions arrive.

```
use wumpus_agent::knowledge_base::KnowledgeBase;
use wumpus_agent::types::domain::{Position, PerceptKind};
use wumpus_agent::sentence::Sentence;

let mut kb = KnowledgeBase::new(4);
kb.update_percept(Position::new(1, 1), &[]).unwrap();
let pit_1_2 = Sentence::symbol("Pit_1_2");
assert!(!kb.ask(&pit_1_2, 1000).unwrap());
```
*/

use std::collections::HashSet;

use log::info;

use crate::cnf::to_cnf;
use crate::misc::log::targets;
use crate::resolution::{clauses_of, pl_resolution, Clause};
use crate::sentence::registry::{CellKind, SymbolKey, SymbolRegistry};
use crate::sentence::Sentence;
use crate::types::domain::{Action, Heading, ObjectKind, PerceptKind, Position};
use crate::types::err::CnfError;

pub mod axioms;

/// The percept kinds visited by a single `update_percept` call, in the
/// order spec §4.4 processes them.
const PERCEPT_KINDS: [PerceptKind; 5] = [
    PerceptKind::Glitter,
    PerceptKind::Stench,
    PerceptKind::Breeze,
    PerceptKind::Bump,
    PerceptKind::Scream,
];

/// The clause set an agent reasons over, and the registry/bookkeeping
/// needed to keep it sound (spec §3, "Knowledge base").
pub struct KnowledgeBase {
    n: u32,
    registry: SymbolRegistry,
    clauses: Vec<Clause>,
    clause_formulas: HashSet<String>,
    told_formulas: HashSet<String>,
    visited: HashSet<Position>,
    last_shot: Option<(Position, Heading, u64)>,

    /// Moving-wumpus extension (spec §9): when set, `update_percept`
    /// additionally retracts previously-asserted `¬Wumpus(cell)` facts
    /// for non-current cells every `relocation_period` actions.
    pub advanced: bool,
    relocation_period: u32,
    actions_since_relocation: u32,
}

impl KnowledgeBase {
    /// A fresh knowledge base for an N×N grid, seeded with the
    /// structural axioms and the start-cell safety facts (spec §4.4).
    pub fn new(n: u32) -> Self {
        Self::with_advanced(n, false, 0)
    }

    /// As [KnowledgeBase::new], but with the moving-wumpus extension
    /// enabled and a relocation period in executed actions.
    pub fn with_advanced(n: u32, advanced: bool, relocation_period: u32) -> Self {
        let mut registry = SymbolRegistry::new();
        registry.populate_grid(n);

        let mut kb = KnowledgeBase {
            n,
            registry,
            clauses: Vec::new(),
            clause_formulas: HashSet::new(),
            told_formulas: HashSet::new(),
            visited: HashSet::from([Position::new(1, 1)]),
            last_shot: None,
            advanced,
            relocation_period,
            actions_since_relocation: 0,
        };

        let origin = Position::new(1, 1);
        let not_wumpus_origin = kb.registry.get(SymbolKey::cell(CellKind::Wumpus, origin)).not();
        let not_pit_origin = kb.registry.get(SymbolKey::cell(CellKind::Pit, origin)).not();
        kb.tell(&not_wumpus_origin).expect("seed axiom is always CNF-representable");
        kb.tell(&not_pit_origin).expect("seed axiom is always CNF-representable");

        let structural = axioms::structural_axioms(n, &mut kb.registry);
        for axiom in structural {
            kb.tell(&axiom).expect("structural axioms are always CNF-representable");
        }

        kb
    }

    pub fn grid_size(&self) -> u32 {
        self.n
    }

    pub fn visited(&self) -> &HashSet<Position> {
        &self.visited
    }

    pub fn clauses(&self) -> &[Clause] {
        &self.clauses
    }

    /// Convert `sentence` to CNF and append any clauses not already
    /// present, by canonical formula string (spec §4.4, `tell`).
    /// Idempotent: re-telling the same sentence is a no-op.
    pub fn tell(&mut self, sentence: &Sentence) -> Result<(), CnfError> {
        let cnf = to_cnf(sentence)?;
        let top_formula = cnf.formula();
        if self.told_formulas.contains(&top_formula) {
            return Ok(());
        }
        self.told_formulas.insert(top_formula.clone());

        for clause in clauses_of(&cnf) {
            let key = clause.formula_key();
            if self.clause_formulas.insert(key) {
                info!(target: targets::KNOWLEDGE_BASE, "adding clause: {}", clause.formula_key());
                self.clauses.push(clause);
            }
        }
        Ok(())
    }

    /// Remove the clause exactly equal to `literal`'s CNF rendering, if
    /// present. Used to retract a stale percept fact before asserting
    /// its replacement (spec §4.4).
    fn retract(&mut self, literal: &Sentence) {
        let Ok(cnf) = to_cnf(literal) else { return };
        let key = Clause::new(vec![cnf.clone()]).formula_key();
        if self.clause_formulas.remove(&key) {
            info!(target: targets::KNOWLEDGE_BASE, "retracting clause: {key}");
            self.clauses.retain(|c| c.formula_key() != key);
            self.told_formulas.remove(&cnf.formula());
        }
    }

    /// Absorb the percepts sensed at `pos` (spec §4.4, `update_percept`).
    pub fn update_percept(&mut self, pos: Position, percepts: &[PerceptKind]) -> Result<(), CnfError> {
        if !self.visited.contains(&pos) && pos != Position::new(1, 1) {
            let not_pit = self.registry.get(SymbolKey::cell(CellKind::Pit, pos)).not();
            let not_wumpus = self.registry.get(SymbolKey::cell(CellKind::Wumpus, pos)).not();
            self.tell(&not_pit)?;
            self.tell(&not_wumpus)?;
            self.visited.insert(pos);
        }

        for &kind in &PERCEPT_KINDS {
            let cell_kind: CellKind = kind.into();
            let symbol = self.registry.get(SymbolKey::cell(cell_kind, pos));
            let present = percepts.contains(&kind);
            if present {
                self.retract(&symbol.clone().not());
                self.tell(&symbol)?;
            } else if kind.has_negative_form() {
                self.retract(&symbol.clone());
                self.tell(&symbol.not())?;
            }
        }

        if let Some((shot_from, dir, step)) = self.last_shot {
            if percepts.contains(&PerceptKind::Scream) {
                if let Some(target) = shot_from.step(dir, self.n) {
                    let shoot_event = self
                        .registry
                        .get(SymbolKey::shoot_from(shot_from, dir, step));
                    let not_wumpus_target =
                        self.registry.get(SymbolKey::cell(CellKind::Wumpus, target)).not();
                    self.tell(&Sentence::or(vec![shoot_event.not(), not_wumpus_target]))?;
                }
            }
            self.last_shot = None;
        }

        if self.advanced {
            self.actions_since_relocation += 1;
            if self.relocation_period > 0 && self.actions_since_relocation >= self.relocation_period {
                self.retract_moved_wumpus_facts(pos);
                self.actions_since_relocation = 0;
            }
        }

        Ok(())
    }

    /// Moving-wumpus extension: retract `¬Wumpus(cell)` facts for every
    /// visited cell other than `current`, since a relocated wumpus may
    /// now occupy a cell previously proven safe (spec §9).
    fn retract_moved_wumpus_facts(&mut self, current: Position) {
        let stale: Vec<Position> = self
            .visited
            .iter()
            .copied()
            .filter(|&p| p != current)
            .collect();
        for pos in stale {
            let not_wumpus = self.registry.get(SymbolKey::cell(CellKind::Wumpus, pos)).not();
            self.retract(&not_wumpus);
        }
    }

    /// Record an action-event symbol (spec §4.4, `record_action`). For
    /// `Shoot`, additionally remembers the shot so the next percept
    /// update can introduce the arrow-kill inference on a Scream.
    pub fn record_action(
        &mut self,
        action: Action,
        pos: Position,
        heading: Heading,
        step: u64,
    ) -> Result<(), CnfError> {
        match action {
            Action::Shoot => {
                let shoot_event = self.registry.get(SymbolKey::shoot_from(pos, heading, step));
                self.tell(&shoot_event)?;
                self.last_shot = Some((pos, heading, step));
            }
            other => {
                let event = self.registry.get(SymbolKey::step(other.as_str(), step));
                self.tell(&event)?;
            }
        }
        Ok(())
    }

    /// `KB ⊨ alpha`, via resolution refutation (spec §4.4, `ask`).
    pub fn ask(&self, alpha: &Sentence, max_iterations: usize) -> Result<bool, CnfError> {
        pl_resolution(&self.clauses, alpha, max_iterations)
    }

    /// The symbol for a per-cell object or percept, registering it if
    /// this is the first reference (it should already be registered by
    /// [KnowledgeBase::new] for any cell within the grid).
    pub fn symbol_for(&mut self, kind: ObjectKind, pos: Position) -> Sentence {
        self.registry.get(SymbolKey::cell(kind.into(), pos))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_cell_seeded_safe() {
        let kb = KnowledgeBase::new(3);
        let pit_origin = Sentence::symbol("Pit_1_1");
        assert!(kb.ask(&pit_origin.not(), 1000).unwrap());
    }

    #[test]
    fn tell_is_idempotent() {
        let mut kb = KnowledgeBase::new(3);
        let before = kb.clauses().len();
        let breeze = Sentence::symbol("Breeze_1_1");
        kb.tell(&breeze).unwrap();
        let after_first = kb.clauses().len();
        kb.tell(&breeze).unwrap();
        let after_second = kb.clauses().len();
        assert!(after_first > before);
        assert_eq!(after_first, after_second);
    }

    #[test]
    fn dedup_invariant_holds_after_tells() {
        let mut kb = KnowledgeBase::new(3);
        kb.update_percept(Position::new(1, 1), &[]).unwrap();
        kb.update_percept(Position::new(1, 2), &[PerceptKind::Breeze]).unwrap();
        let mut seen = HashSet::new();
        for clause in kb.clauses() {
            assert!(seen.insert(clause.formula_key()), "duplicate clause formula");
        }
    }

    #[test]
    fn s1_classic_inference() {
        // S1: N=3. Breeze(1,1); Breeze(1,1) <=> Pit(1,2) v Pit(2,1); not Pit(1,2). Ask Pit(2,1) -> true.
        let mut kb = KnowledgeBase::new(3);
        let breeze11 = Sentence::symbol("Breeze_1_1");
        let pit12 = Sentence::symbol("Pit_1_2");
        let pit21 = Sentence::symbol("Pit_2_1");
        kb.tell(&breeze11).unwrap();
        kb.tell(&breeze11.clone().iff(Sentence::or(vec![pit12.clone(), pit21.clone()])))
            .unwrap();
        kb.tell(&pit12.not()).unwrap();
        assert!(kb.ask(&pit21, 1000).unwrap());
    }

    #[test]
    fn first_visit_asserts_safety() {
        let mut kb = KnowledgeBase::new(3);
        kb.update_percept(Position::new(1, 1), &[]).unwrap();
        kb.update_percept(Position::new(1, 2), &[]).unwrap();
        let pit12 = Sentence::symbol("Pit_1_2");
        assert!(kb.ask(&pit12.not(), 1000).unwrap());
    }

    #[test]
    fn percept_retraction_flips_polarity() {
        let mut kb = KnowledgeBase::new(3);
        kb.update_percept(Position::new(1, 1), &[PerceptKind::Breeze]).unwrap();
        let breeze11 = Sentence::symbol("Breeze_1_1");
        assert!(kb.ask(&breeze11, 1000).unwrap());

        kb.update_percept(Position::new(1, 1), &[]).unwrap();
        assert!(kb.ask(&breeze11.not(), 1000).unwrap());
    }

    #[test]
    fn shoot_scream_inference_clears_wumpus_ahead() {
        let mut kb = KnowledgeBase::new(3);
        kb.update_percept(Position::new(1, 1), &[]).unwrap();
        kb.record_action(Action::Shoot, Position::new(1, 1), Heading::Right, 1)
            .unwrap();
        kb.update_percept(Position::new(1, 1), &[PerceptKind::Scream]).unwrap();
        let wumpus12 = Sentence::symbol("Wumpus_1_2");
        assert!(kb.ask(&wumpus12.not(), 1000).unwrap());
    }
}
