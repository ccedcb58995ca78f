/*!
Rewriting a [Sentence] into Conjunctive Normal Form.

The pipeline runs the five steps of spec §4.2 in order: flatten,
eliminate implications, push negation inward, distribute OR over AND,
flatten again. Distribution is the one place the original Python this
crate is descended from disagreed with itself --- a single-pass variant
that bailed out on nested conjunctions inside a disjunction, and a
second variant that didn't. This implementation distributes fully and
recursively, so a disjunction is reduced to a conjunction of clauses
regardless of how deeply its `And` children are nested; [CnfError::UnsupportedShape]
remains only as a defensive check that should never trigger on output
this pipeline itself produces.
*/

use log::trace;

use crate::misc::log::targets;
use crate::sentence::Sentence;
use crate::types::err::CnfError;

/// Rewrite `s` into an equivalent sentence in conjunctive normal form:
/// either an `And` of clauses, a single clause, or a single literal.
pub fn to_cnf(s: &Sentence) -> Result<Sentence, CnfError> {
    let s = flatten(s.clone());
    let s = eliminate_implications(s);
    let s = move_negation_inward(s);
    let s = distribute(s)?;
    Ok(flatten(s))
}

/// Associative collapse: `And(And(a,b), c)` becomes `And(a,b,c)`, and
/// likewise for `Or`. Runs bottom-up so nested flattening composes.
fn flatten(s: Sentence) -> Sentence {
    match s {
        Sentence::Not(inner) => Sentence::Not(Box::new(flatten(*inner))),
        Sentence::And(cs) => Sentence::And(flatten_associative(cs, true)),
        Sentence::Or(cs) => Sentence::Or(flatten_associative(cs, false)),
        Sentence::Implication(a, b) => {
            Sentence::Implication(Box::new(flatten(*a)), Box::new(flatten(*b)))
        }
        Sentence::Biconditional(a, b) => {
            Sentence::Biconditional(Box::new(flatten(*a)), Box::new(flatten(*b)))
        }
        Sentence::Symbol(_) => s,
    }
}

/// Flatten a list of `And` (if `is_and`) or `Or` children one level,
/// absorbing grandchildren of the same variant after recursively
/// flattening each child first.
fn flatten_associative(children: Vec<Sentence>, is_and: bool) -> Vec<Sentence> {
    let mut out = Vec::with_capacity(children.len());
    for child in children {
        let child = flatten(child);
        let same_variant = match &child {
            Sentence::And(_) if is_and => true,
            Sentence::Or(_) if !is_and => true,
            _ => false,
        };
        if same_variant {
            match child {
                Sentence::And(gc) | Sentence::Or(gc) => out.extend(gc),
                _ => unreachable!(),
            }
        } else {
            out.push(child);
        }
    }
    out
}

/// `A ⇒ B` becomes `¬A ∨ B`; `A ⇔ B` becomes `(¬A ∨ B) ∧ (¬B ∨ A)`.
fn eliminate_implications(s: Sentence) -> Sentence {
    match s {
        Sentence::Implication(a, b) => {
            let a = eliminate_implications(*a);
            let b = eliminate_implications(*b);
            Sentence::Or(vec![Sentence::Not(Box::new(a)), b])
        }
        Sentence::Biconditional(a, b) => {
            let a = eliminate_implications(*a);
            let b = eliminate_implications(*b);
            Sentence::And(vec![
                Sentence::Or(vec![Sentence::Not(Box::new(a.clone())), b.clone()]),
                Sentence::Or(vec![Sentence::Not(Box::new(b)), a]),
            ])
        }
        Sentence::Not(inner) => Sentence::Not(Box::new(eliminate_implications(*inner))),
        Sentence::And(cs) => Sentence::And(cs.into_iter().map(eliminate_implications).collect()),
        Sentence::Or(cs) => Sentence::Or(cs.into_iter().map(eliminate_implications).collect()),
        Sentence::Symbol(_) => s,
    }
}

/// De Morgan push-down: `¬(A∧B)` → `¬A∨¬B`, `¬(A∨B)` → `¬A∧¬B`, `¬¬A` → `A`.
/// Assumes implications have already been eliminated.
fn move_negation_inward(s: Sentence) -> Sentence {
    match s {
        Sentence::Not(inner) => match *inner {
            Sentence::Not(inner2) => move_negation_inward(*inner2),
            Sentence::And(cs) => Sentence::Or(
                cs.into_iter()
                    .map(|c| move_negation_inward(Sentence::Not(Box::new(c))))
                    .collect(),
            ),
            Sentence::Or(cs) => Sentence::And(
                cs.into_iter()
                    .map(|c| move_negation_inward(Sentence::Not(Box::new(c))))
                    .collect(),
            ),
            other => Sentence::Not(Box::new(move_negation_inward(other))),
        },
        Sentence::And(cs) => Sentence::And(cs.into_iter().map(move_negation_inward).collect()),
        Sentence::Or(cs) => Sentence::Or(cs.into_iter().map(move_negation_inward).collect()),
        Sentence::Symbol(_) => s,
        // Implications/biconditionals should already be gone; recurse in
        // case a caller hands in a raw sentence that skipped elimination.
        Sentence::Implication(a, b) => {
            Sentence::Implication(Box::new(move_negation_inward(*a)), Box::new(move_negation_inward(*b)))
        }
        Sentence::Biconditional(a, b) => Sentence::Biconditional(
            Box::new(move_negation_inward(*a)),
            Box::new(move_negation_inward(*b)),
        ),
    }
}

/// Distribute `Or` over `And`, recursively, until every `Or` node's
/// children are themselves clause-shaped (literals or `Or` of literals).
fn distribute(s: Sentence) -> Result<Sentence, CnfError> {
    match s {
        Sentence::And(cs) => {
            let mut out = Vec::with_capacity(cs.len());
            for c in cs {
                out.push(distribute(c)?);
            }
            Ok(Sentence::And(out))
        }
        Sentence::Or(cs) => {
            let mut distributed = Vec::with_capacity(cs.len());
            for c in cs {
                distributed.push(distribute(c)?);
            }
            distribute_or(distributed)
        }
        Sentence::Not(inner) => Ok(Sentence::Not(Box::new(distribute(*inner)?))),
        other => Ok(other),
    }
}

/// Fold an already-distributed list of `Or` disjuncts into a conjunction
/// of clauses, pairwise: `distribute_or([a, b, c, ...])` combines `a`
/// and `b` first (expanding any `And` among them), then folds the
/// result against `c`, and so on. Each pairwise combination is the
/// textbook `(P ∨ (Q ∧ R)) = (P ∨ Q) ∧ (P ∨ R)` rule generalized to
/// n-ary conjunctions on either side.
fn distribute_or(disjuncts: Vec<Sentence>) -> Result<Sentence, CnfError> {
    let mut acc = match disjuncts.first() {
        Some(first) => first.clone(),
        None => return Ok(Sentence::Or(Vec::new())),
    };
    for next in disjuncts.into_iter().skip(1) {
        acc = pairwise_distribute(acc, next)?;
    }
    Ok(acc)
}

/// Combine two already-CNF-shaped disjuncts into a single CNF sentence
/// equivalent to their disjunction.
fn pairwise_distribute(left: Sentence, right: Sentence) -> Result<Sentence, CnfError> {
    let left_conjuncts = as_conjuncts(&left);
    let right_conjuncts = as_conjuncts(&right);

    // Cross-producing every pair here is what lets this handle the case
    // the source's single-pass strategy couldn't: a disjunction with a
    // genuine conjunction on *both* sides, e.g. (A∧B) ∨ (C∧D).
    let mut clauses = Vec::with_capacity(left_conjuncts.len() * right_conjuncts.len());
    for l in &left_conjuncts {
        for r in &right_conjuncts {
            clauses.push(merge_clause(l, r)?);
        }
    }

    if clauses.len() == 1 {
        Ok(clauses.into_iter().next().unwrap())
    } else {
        Ok(Sentence::And(clauses))
    }
}

/// The conjuncts of a sentence: `And(cs)` yields `cs`, anything else
/// (a literal or an `Or` of literals) yields a single-element vector of
/// itself.
fn as_conjuncts(s: &Sentence) -> Vec<Sentence> {
    match s {
        Sentence::And(cs) => cs.clone(),
        other => vec![other.clone()],
    }
}

/// Merge two clause-shaped sentences (literal or `Or` of literals) into
/// their disjunction, flattened into a single `Or`.
fn merge_clause(a: &Sentence, b: &Sentence) -> Result<Sentence, CnfError> {
    let mut literals = Vec::new();
    push_clause_literals(a, &mut literals)?;
    push_clause_literals(b, &mut literals)?;
    if literals.len() == 1 {
        Ok(literals.into_iter().next().unwrap())
    } else {
        Ok(Sentence::Or(literals))
    }
}

fn push_clause_literals(s: &Sentence, into: &mut Vec<Sentence>) -> Result<(), CnfError> {
    match s {
        Sentence::Or(cs) => {
            for c in cs {
                push_clause_literals(c, into)?;
            }
            Ok(())
        }
        Sentence::And(_) => {
            trace!(target: targets::CNF, "distribution left an And nested inside a clause");
            Err(CnfError::UnsupportedShape)
        }
        other => {
            into.push(other.clone());
            Ok(())
        }
    }
}
