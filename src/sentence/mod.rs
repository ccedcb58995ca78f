/*!
The sentence algebra: an expression tree over {¬, ∧, ∨, ⇒, ⇔}.

A [Sentence] is a value type --- structurally equal iff its variant and
children are structurally equal, immutable once constructed, and cheap to
clone. Transformations (chiefly [to_cnf](crate::cnf::to_cnf)) always produce
a new value; nothing here mutates a sentence in place.

Dynamic dispatch over the six cases is expressed as a tagged enum matched
with `match`, not an inheritance hierarchy: `Symbol`, `Not`, `And`, `Or`,
`Implication`, `Biconditional`.
*/

use std::collections::HashSet;

use crate::types::err::SentenceError;

pub mod registry;

/// A mapping from symbol name to truth value, used by [Sentence::evaluate].
pub type Model = std::collections::HashMap<String, bool>;

/// A propositional logic sentence.
///
/// `And`/`Or` hold an ordered sequence of children rather than exactly two,
/// which keeps flattening (required for deterministic clause rendering, see
/// [crate::cnf]) a no-op once performed.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Sentence {
    /// A named propositional atom.
    Symbol(String),

    /// Negation of a single sentence.
    Not(Box<Sentence>),

    /// Conjunction of an ordered sequence of sentences.
    And(Vec<Sentence>),

    /// Disjunction of an ordered sequence of sentences.
    Or(Vec<Sentence>),

    /// `antecedent ⇒ consequent`.
    Implication(Box<Sentence>, Box<Sentence>),

    /// `left ⇔ right`.
    Biconditional(Box<Sentence>, Box<Sentence>),
}

impl Sentence {
    /// A fresh symbol sentence.
    pub fn symbol(name: impl Into<String>) -> Self {
        Sentence::Symbol(name.into())
    }

    /// `¬self`.
    pub fn not(self) -> Self {
        Sentence::Not(Box::new(self))
    }

    /// `self ⇒ consequent`.
    pub fn implies(self, consequent: Sentence) -> Self {
        Sentence::Implication(Box::new(self), Box::new(consequent))
    }

    /// `self ⇔ other`.
    pub fn iff(self, other: Sentence) -> Self {
        Sentence::Biconditional(Box::new(self), Box::new(other))
    }

    /// `And` of a sequence, collapsing a single element to itself and an
    /// empty sequence to the vacuous truth `And([])`.
    pub fn and(conjuncts: Vec<Sentence>) -> Self {
        Sentence::And(conjuncts)
    }

    /// `Or` of a sequence, collapsing a single element to itself and an
    /// empty sequence to the unsatisfiable `Or([])`.
    pub fn or(disjuncts: Vec<Sentence>) -> Self {
        Sentence::Or(disjuncts)
    }

    /// Whether this sentence is a literal: a [Sentence::Symbol] or the
    /// negation of one.
    pub fn is_literal(&self) -> bool {
        matches!(self, Sentence::Symbol(_))
            || matches!(self, Sentence::Not(inner) if matches!(**inner, Sentence::Symbol(_)))
    }

    /// If this sentence is a literal, its `(symbol name, polarity)` pair,
    /// where polarity is `true` for a bare symbol and `false` for a negated
    /// one.
    pub fn as_literal(&self) -> Option<(&str, bool)> {
        match self {
            Sentence::Symbol(name) => Some((name.as_str(), true)),
            Sentence::Not(inner) => match inner.as_ref() {
                Sentence::Symbol(name) => Some((name.as_str(), false)),
                _ => None,
            },
            _ => None,
        }
    }

    /// The set of symbol names mentioned anywhere in this sentence.
    pub fn symbols(&self) -> HashSet<String> {
        let mut set = HashSet::new();
        self.collect_symbols(&mut set);
        set
    }

    fn collect_symbols(&self, into: &mut HashSet<String>) {
        match self {
            Sentence::Symbol(name) => {
                into.insert(name.clone());
            }
            Sentence::Not(inner) => inner.collect_symbols(into),
            Sentence::And(cs) | Sentence::Or(cs) => {
                for c in cs {
                    c.collect_symbols(into);
                }
            }
            Sentence::Implication(a, b) | Sentence::Biconditional(a, b) => {
                a.collect_symbols(into);
                b.collect_symbols(into);
            }
        }
    }

    /// Evaluate this sentence against a model.
    ///
    /// Fails with [SentenceError::UnboundSymbol] if a mentioned symbol has no
    /// entry in `model`. This path is diagnostic only; `ask` never goes
    /// through it.
    pub fn evaluate(&self, model: &Model) -> Result<bool, SentenceError> {
        match self {
            Sentence::Symbol(name) => model
                .get(name)
                .copied()
                .ok_or_else(|| SentenceError::UnboundSymbol(name.clone())),
            Sentence::Not(inner) => Ok(!inner.evaluate(model)?),
            Sentence::And(cs) => {
                for c in cs {
                    if !c.evaluate(model)? {
                        return Ok(false);
                    }
                }
                Ok(true)
            }
            Sentence::Or(cs) => {
                for c in cs {
                    if c.evaluate(model)? {
                        return Ok(true);
                    }
                }
                Ok(false)
            }
            Sentence::Implication(a, b) => Ok(!a.evaluate(model)? || b.evaluate(model)?),
            Sentence::Biconditional(a, b) => Ok(a.evaluate(model)? == b.evaluate(model)?),
        }
    }

    /// A deterministic string rendering with minimal parenthesization.
    ///
    /// Used both for display and --- critically --- as the canonical key for
    /// the knowledge base's clause-formula dedup discipline (see
    /// [crate::knowledge_base]), so any two structurally-equal sentences must
    /// render identically.
    pub fn formula(&self) -> String {
        self.render(Precedence::Lowest)
    }

    /// Render with parentheses added only where the child's own
    /// precedence is lower (binds more loosely) than its parent's,
    /// standard ¬ > ∧ > ∨ > ⇒ > ⇔ precedence.
    fn render(&self, parent: Precedence) -> String {
        let (text, own) = match self {
            Sentence::Symbol(name) => (name.clone(), Precedence::Atom),
            Sentence::Not(inner) => {
                (format!("¬{}", inner.render(Precedence::Not)), Precedence::Not)
            }
            Sentence::And(cs) => {
                if cs.len() == 1 {
                    return cs[0].render(parent);
                }
                let joined = cs
                    .iter()
                    .map(|c| c.render(Precedence::And))
                    .collect::<Vec<_>>()
                    .join(" ∧ ");
                (joined, Precedence::And)
            }
            Sentence::Or(cs) => {
                if cs.len() == 1 {
                    return cs[0].render(parent);
                }
                let joined = cs
                    .iter()
                    .map(|c| c.render(Precedence::Or))
                    .collect::<Vec<_>>()
                    .join(" ∨ ");
                (joined, Precedence::Or)
            }
            Sentence::Implication(a, b) => (
                format!(
                    "{} ⇒ {}",
                    a.render(Precedence::Implication),
                    b.render(Precedence::Implication)
                ),
                Precedence::Implication,
            ),
            Sentence::Biconditional(a, b) => (
                format!(
                    "{} ⇔ {}",
                    a.render(Precedence::Biconditional),
                    b.render(Precedence::Biconditional)
                ),
                Precedence::Biconditional,
            ),
        };
        if own < parent {
            format!("({text})")
        } else {
            text
        }
    }
}

impl std::fmt::Display for Sentence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.formula())
    }
}

/// Binding strength used to decide whether a rendered child needs
/// parentheses inside its parent. Ordered weakest to tightest so that
/// `own < parent` means "this child binds more loosely than its context
/// requires, so wrap it."
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
enum Precedence {
    /// Used as the starting context for a top-level render, so nothing
    /// at the root is ever wrapped.
    Lowest,
    Biconditional,
    Implication,
    Or,
    And,
    Not,
    Atom,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sym(name: &str) -> Sentence {
        Sentence::symbol(name)
    }

    #[test]
    fn literal_detection() {
        assert!(sym("A").is_literal());
        assert!(sym("A").not().is_literal());
        assert!(!sym("A").not().not().is_literal());
    }

    #[test]
    fn symbols_union() {
        let s = sym("A").implies(sym("B").iff(sym("C")));
        let mut expect = HashSet::new();
        expect.insert("A".to_string());
        expect.insert("B".to_string());
        expect.insert("C".to_string());
        assert_eq!(s.symbols(), expect);
    }

    #[test]
    fn evaluate_implication() {
        let s = sym("A").implies(sym("B"));
        let mut model = Model::new();
        model.insert("A".to_string(), true);
        model.insert("B".to_string(), false);
        assert_eq!(s.evaluate(&model), Ok(false));
    }

    #[test]
    fn evaluate_unbound() {
        let s = sym("A");
        let model = Model::new();
        assert_eq!(
            s.evaluate(&model),
            Err(SentenceError::UnboundSymbol("A".to_string()))
        );
    }

    #[test]
    fn formula_rendering_minimal_parens() {
        let s = sym("A").and_with(sym("B"));
        assert_eq!(s.formula(), "A ∧ B");
    }

    trait TestAnd {
        fn and_with(self, other: Sentence) -> Sentence;
    }

    impl TestAnd for Sentence {
        fn and_with(self, other: Sentence) -> Sentence {
            Sentence::and(vec![self, other])
        }
    }
}
