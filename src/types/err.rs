/*!
Error types used in the library.

Names of the error enums overlap, for the most part, with the structure or
procedure they are raised from. Construction-time misuse is fatal and is
propagated by the caller; query-time indeterminacy --- resolution exhausting
its iteration bound without reaching a fixpoint --- is absorbed by
[pl_resolution](crate::resolution::pl_resolution) as a `false` answer rather
than surfaced as an error here.
*/

/// A union of the varied error kinds raised from the library.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    /// A malformed [Sentence](crate::sentence::Sentence) was constructed.
    Sentence(SentenceError),

    /// An error while rewriting a sentence into conjunctive normal form.
    Cnf(CnfError),

    /// An error while planning a route for the agent.
    Planner(PlannerError),
}

impl From<SentenceError> for ErrorKind {
    fn from(e: SentenceError) -> Self {
        ErrorKind::Sentence(e)
    }
}

impl From<CnfError> for ErrorKind {
    fn from(e: CnfError) -> Self {
        ErrorKind::Cnf(e)
    }
}

impl From<PlannerError> for ErrorKind {
    fn from(e: PlannerError) -> Self {
        ErrorKind::Planner(e)
    }
}

/// Errors raised when evaluating a [Sentence](crate::sentence::Sentence) against a model.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum SentenceError {
    /// Evaluation referenced a symbol with no entry in the supplied model.
    ///
    /// Only occurs on the diagnostic [Sentence::evaluate](crate::sentence::Sentence::evaluate)
    /// path --- `ask` never triggers this, as resolution works over clauses directly.
    UnboundSymbol(String),
}

/// Errors raised while rewriting a sentence into conjunctive normal form.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum CnfError {
    /// Distribution encountered a disjunction whose shape the single-pass
    /// strategy cannot reduce to a conjunction of clauses.
    ///
    /// With the full recursive distribution used by [to_cnf](crate::cnf::to_cnf)
    /// this is not expected to occur in practice --- it remains as a
    /// defensive check after distribution, in case some future caller builds
    /// a [Sentence](crate::sentence::Sentence) that escapes the supported
    /// fragment.
    UnsupportedShape,
}

/// Errors raised while planning a route for the agent.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum PlannerError {
    /// No path --- safe, risky, or otherwise --- connects the agent to any
    /// remaining target. The grid is exhausted of productive moves.
    NoPath,
}
