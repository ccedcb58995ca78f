/*!
Resolution refutation: `pl_resolution(clauses, α)` returns `true` iff the
clause set entails `α`, by deriving the empty clause from
`clauses ∪ {¬α}`.

The loop is bounded by `max_iterations` (see [crate::config::Config]):
running out of iterations is reported as `false`, identically to a
genuine saturation-without-refutation. Callers never see the
difference, per spec §4.3/§7 --- "unknown" and "not entailed" are the
same answer to a planner deciding whether a cell is safe.
*/

use std::collections::{HashMap, HashSet};

use log::{debug, trace};

use crate::cnf::to_cnf;
use crate::misc::log::targets;
use crate::sentence::Sentence;
use crate::types::err::CnfError;

/// A disjunction of literals, canonicalized: literals sorted and deduped
/// by their formula string (spec §4.2's dedup discipline applied at the
/// clause level rather than just the KB level).
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Clause {
    literals: Vec<Sentence>,
}

impl Clause {
    /// Build a clause from an arbitrary list of literals, sorting and
    /// deduping by formula string.
    pub fn new(mut literals: Vec<Sentence>) -> Self {
        literals.sort_by(|a, b| a.formula().cmp(&b.formula()));
        literals.dedup_by(|a, b| a.formula() == b.formula());
        Clause { literals }
    }

    /// The empty clause, ⊥.
    pub fn empty() -> Self {
        Clause { literals: Vec::new() }
    }

    pub fn literals(&self) -> &[Sentence] {
        &self.literals
    }

    pub fn is_empty(&self) -> bool {
        self.literals.is_empty()
    }

    /// The single literal of a unit clause, if this is one.
    pub fn as_unit(&self) -> Option<&Sentence> {
        match self.literals.as_slice() {
            [lit] => Some(lit),
            _ => None,
        }
    }

    /// Whether this clause contains a literal and its negation, making
    /// it vacuously true and safe to discard.
    pub fn is_tautology(&self) -> bool {
        for lit in &self.literals {
            if let Some((name, polarity)) = lit.as_literal() {
                let complement_present = self.literals.iter().any(|other| {
                    other
                        .as_literal()
                        .is_some_and(|(n, p)| n == name && p != polarity)
                });
                if complement_present {
                    return true;
                }
            }
        }
        false
    }

    /// The canonical formula-string key used for set membership and
    /// subsumption checks.
    pub fn formula_key(&self) -> String {
        if self.literals.is_empty() {
            return "⊥".to_string();
        }
        self.literals
            .iter()
            .map(Sentence::formula)
            .collect::<Vec<_>>()
            .join(" ∨ ")
    }

    /// Render this clause back to a [Sentence] (a single literal, or an
    /// `Or` of literals).
    pub fn to_sentence(&self) -> Sentence {
        if self.literals.len() == 1 {
            self.literals[0].clone()
        } else {
            Sentence::Or(self.literals.clone())
        }
    }
}

/// Flatten a CNF sentence into its clauses: an `And` yields one clause
/// per conjunct, anything else is a single clause.
pub fn clauses_of(cnf: &Sentence) -> Vec<Clause> {
    match cnf {
        Sentence::And(cs) => cs.iter().map(clause_from_cnf_conjunct).collect(),
        other => vec![clause_from_cnf_conjunct(other)],
    }
}

fn clause_from_cnf_conjunct(s: &Sentence) -> Clause {
    match s {
        Sentence::Or(cs) => Clause::new(cs.clone()),
        other => Clause::new(vec![other.clone()]),
    }
}

/// All resolvents of `ci` and `cj`: for every complementary literal pair,
/// the clause of the remaining literals from both sides, deduped and
/// sorted. Tautologies are omitted.
fn resolve(ci: &Clause, cj: &Clause) -> Vec<Clause> {
    let mut resolvents = Vec::new();
    for li in &ci.literals {
        let Some((li_name, li_polarity)) = li.as_literal() else {
            continue;
        };
        for lj in &cj.literals {
            let Some((lj_name, lj_polarity)) = lj.as_literal() else {
                continue;
            };
            if li_name == lj_name && li_polarity != lj_polarity {
                let rest: Vec<Sentence> = ci
                    .literals
                    .iter()
                    .filter(|l| l.formula() != li.formula())
                    .chain(cj.literals.iter().filter(|l| l.formula() != lj.formula()))
                    .cloned()
                    .collect();
                let resolvent = Clause::new(rest);
                if !resolvent.is_tautology() {
                    resolvents.push(resolvent);
                }
            }
        }
    }
    resolvents
}

/// Simplify `clauses` against the current `units` map (symbol name ->
/// asserted polarity) to a fixpoint: literals falsified by a unit are
/// dropped from their clause, clauses satisfied by a unit are removed
/// entirely, and any clause reduced to a single literal is folded into
/// `units` for the next pass. Returns `true` the moment a clause
/// collapses to the empty clause (refutation).
fn simplify_to_fixpoint(clauses: &mut Vec<Clause>, units: &mut HashMap<String, bool>) -> bool {
    loop {
        let mut changed = false;
        let mut kept = Vec::with_capacity(clauses.len());
        for clause in clauses.drain(..) {
            let mut satisfied = false;
            let mut remaining = Vec::with_capacity(clause.literals.len());
            for lit in clause.literals {
                match lit.as_literal() {
                    Some((name, polarity)) => match units.get(name) {
                        Some(&known) if known == polarity => {
                            satisfied = true;
                            remaining.push(lit);
                        }
                        Some(&known) if known != polarity => {
                            // literal is false under the unit assignment, drop it
                            changed = true;
                        }
                        _ => remaining.push(lit),
                    },
                    None => remaining.push(lit),
                }
            }
            if satisfied {
                changed = true;
                continue;
            }
            if remaining.is_empty() {
                return true;
            }
            let clause = Clause::new(remaining);
            if let Some(lit) = clause.as_unit() {
                if let Some((name, polarity)) = lit.as_literal() {
                    if units.insert(name.to_string(), polarity).is_none() {
                        changed = true;
                    }
                }
            }
            kept.push(clause);
        }
        *clauses = kept;
        if !changed {
            return false;
        }
    }
}

fn initial_units(clauses: &[Clause]) -> HashMap<String, bool> {
    let mut units = HashMap::new();
    for clause in clauses {
        if let Some(lit) = clause.as_unit() {
            if let Some((name, polarity)) = lit.as_literal() {
                units.insert(name.to_string(), polarity);
            }
        }
    }
    units
}

/// `pl_resolution(clauses, α)` --- `true` iff `clauses ⊨ α`, proved by
/// deriving the empty clause from `clauses ∪ {¬α}`.
///
/// `clauses` are assumed already in CNF (the knowledge base's own
/// clause set). `alpha` is converted to CNF and negated internally.
pub fn pl_resolution(
    clauses: &[Clause],
    alpha: &Sentence,
    max_iterations: usize,
) -> Result<bool, CnfError> {
    let negated_alpha_cnf = to_cnf(&alpha.clone().not())?;
    let mut working: Vec<Clause> = clauses.to_vec();
    working.extend(clauses_of(&negated_alpha_cnf));

    let mut units = initial_units(&working);
    if simplify_to_fixpoint(&mut working, &mut units) {
        trace!(target: targets::RESOLUTION, "refutation found during unit propagation");
        return Ok(true);
    }

    let mut seen: HashSet<String> = working.iter().map(Clause::formula_key).collect();

    for iteration in 0..max_iterations {
        let n = working.len();
        let mut new_clauses: Vec<Clause> = Vec::new();
        for i in 0..n {
            for j in (i + 1)..n {
                for resolvent in resolve(&working[i], &working[j]) {
                    if resolvent.is_empty() {
                        debug!(target: targets::RESOLUTION, "empty clause derived at iteration {iteration}");
                        return Ok(true);
                    }
                    new_clauses.push(resolvent);
                }
            }
        }

        let all_known = new_clauses
            .iter()
            .all(|c| seen.contains(&c.formula_key()));
        if all_known {
            trace!(target: targets::RESOLUTION, "saturated without refutation after {iteration} iterations");
            return Ok(false);
        }

        for clause in new_clauses {
            let key = clause.formula_key();
            if seen.insert(key) {
                working.push(clause);
            }
        }

        if simplify_to_fixpoint(&mut working, &mut units) {
            return Ok(true);
        }
        seen = working.iter().map(Clause::formula_key).collect();
    }

    debug!(target: targets::RESOLUTION, "max_iterations ({max_iterations}) reached without refutation");
    Ok(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sym(name: &str) -> Sentence {
        Sentence::symbol(name)
    }

    fn clause(lits: Vec<Sentence>) -> Clause {
        Clause::new(lits)
    }

    #[test]
    fn tautology_detected() {
        let c = clause(vec![sym("A"), sym("A").not()]);
        assert!(c.is_tautology());
    }

    #[test]
    fn resolve_complementary_unit_clauses_yields_empty() {
        let a = clause(vec![sym("A")]);
        let not_a = clause(vec![sym("A").not()]);
        let resolvents = resolve(&a, &not_a);
        assert_eq!(resolvents.len(), 1);
        assert!(resolvents[0].is_empty());
    }

    #[test]
    fn inconsistent_kb_entails_anything() {
        // S5: KB = {A, ¬A}; ask anything -> true
        let kb = vec![clause(vec![sym("A")]), clause(vec![sym("A").not()])];
        let result = pl_resolution(&kb, &sym("Z"), 1000).unwrap();
        assert!(result);
    }

    #[test]
    fn classic_pit_inference() {
        // S1: N=3. Breeze(1,1); Breeze(1,1) <=> Pit(1,2) v Pit(2,1); not Pit(1,2).
        // Ask Pit(2,1) -> true.
        let breeze = sym("Breeze_1_1");
        let pit12 = sym("Pit_1_2");
        let pit21 = sym("Pit_2_1");
        let biconditional = breeze.clone().iff(Sentence::or(vec![pit12.clone(), pit21.clone()]));

        let mut kb = Vec::new();
        kb.extend(clauses_of(&to_cnf(&breeze).unwrap()));
        kb.extend(clauses_of(&to_cnf(&biconditional).unwrap()));
        kb.extend(clauses_of(&to_cnf(&pit12.not()).unwrap()));

        assert!(pl_resolution(&kb, &pit21, 1000).unwrap());
    }

    #[test]
    fn wumpus_elimination() {
        // S2
        let stench11 = sym("Stench_1_1");
        let wumpus12 = sym("Wumpus_1_2");
        let wumpus21 = sym("Wumpus_2_1");
        let stench13 = sym("Stench_1_3");
        let wumpus23 = sym("Wumpus_2_3");

        let bic1 = stench11
            .clone()
            .iff(Sentence::or(vec![wumpus12.clone(), wumpus21.clone()]));
        let bic2 = stench13
            .clone()
            .iff(Sentence::or(vec![wumpus12.clone(), wumpus23.clone()]));

        let mut kb = Vec::new();
        kb.extend(clauses_of(&to_cnf(&bic1).unwrap()));
        kb.extend(clauses_of(&to_cnf(&stench11).unwrap()));
        kb.extend(clauses_of(&to_cnf(&stench13.clone().not()).unwrap()));
        kb.extend(clauses_of(&to_cnf(&bic2).unwrap()));

        assert!(!pl_resolution(&kb, &wumpus12, 1000).unwrap());
        assert!(pl_resolution(&kb, &wumpus12.clone().not(), 1000).unwrap());
        assert!(pl_resolution(&kb, &wumpus21, 1000).unwrap());
    }

    #[test]
    fn bounded_iterations_default_to_false() {
        let kb = vec![clause(vec![sym("A"), sym("B")])];
        // Neither A nor B is entailed in isolation, and the bound is tiny.
        assert!(!pl_resolution(&kb, &sym("A"), 1).unwrap());
    }
}
