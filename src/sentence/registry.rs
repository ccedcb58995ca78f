/*!
The symbol registry: a mapping from a domain key to a [Sentence::Symbol],
guaranteeing one symbol per key so every clause referencing, say,
`Pit(2,3)` refers to the exact same name.
*/

use std::collections::HashMap;

use crate::sentence::Sentence;
use crate::types::domain::{Heading, ObjectKind, PerceptKind, Position};

/// The seven per-cell kinds a [SymbolKey::Cell] may name: the two objects
/// plus the five percepts.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CellKind {
    Wumpus,
    Pit,
    Stench,
    Breeze,
    Glitter,
    Bump,
    Scream,
}

impl CellKind {
    pub fn as_str(self) -> &'static str {
        match self {
            CellKind::Wumpus => "Wumpus",
            CellKind::Pit => "Pit",
            CellKind::Stench => "Stench",
            CellKind::Breeze => "Breeze",
            CellKind::Glitter => "Glitter",
            CellKind::Bump => "Bump",
            CellKind::Scream => "Scream",
        }
    }
}

impl From<ObjectKind> for CellKind {
    fn from(k: ObjectKind) -> Self {
        match k {
            ObjectKind::Wumpus => CellKind::Wumpus,
            ObjectKind::Pit => CellKind::Pit,
        }
    }
}

impl From<PerceptKind> for CellKind {
    fn from(k: PerceptKind) -> Self {
        match k {
            PerceptKind::Stench => CellKind::Stench,
            PerceptKind::Breeze => CellKind::Breeze,
            PerceptKind::Glitter => CellKind::Glitter,
            PerceptKind::Bump => CellKind::Bump,
            PerceptKind::Scream => CellKind::Scream,
        }
    }
}

/// A domain key identifying a single symbol, per the grammar of spec
/// §6: `<Kind>_<y>_<x>` for cell facts, `<ActionKind>_<step>` for
/// step-indexed actions, `ShootFrom_<y>_<x>_<dir>_<step>` for a shot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SymbolKey {
    /// A per-cell object or percept, e.g. `Pit(2,3)` or `Breeze(1,1)`.
    Cell { kind: CellKind, pos: Position },

    /// A step-indexed action event, e.g. `MoveForward_7`.
    Step { action: &'static str, step: u64 },

    /// A directed shot event, e.g. `ShootFrom_2_3_right_5`.
    ShootFrom {
        pos: Position,
        dir: Heading,
        step: u64,
    },
}

impl SymbolKey {
    pub fn cell(kind: CellKind, pos: Position) -> Self {
        SymbolKey::Cell { kind, pos }
    }

    pub fn step(action: &'static str, step: u64) -> Self {
        SymbolKey::Step { action, step }
    }

    pub fn shoot_from(pos: Position, dir: Heading, step: u64) -> Self {
        SymbolKey::ShootFrom { pos, dir, step }
    }

    /// The symbol name this key renders to, per the stable grammar of
    /// spec §6.
    pub fn name(&self) -> String {
        match self {
            SymbolKey::Cell { kind, pos } => format!("{}_{}_{}", kind.as_str(), pos.y, pos.x),
            SymbolKey::Step { action, step } => format!("{action}_{step}"),
            SymbolKey::ShootFrom { pos, dir, step } => {
                format!("ShootFrom_{}_{}_{}_{}", pos.y, pos.x, dir.as_str(), step)
            }
        }
    }
}

/// Guarantees one [Sentence::Symbol] instance per [SymbolKey].
///
/// "Instance" here means one canonical `String` name --- `Sentence` is a
/// value type, so identity is enforced by always handing out a symbol
/// built from the same registered name rather than by pointer equality.
#[derive(Clone, Debug, Default)]
pub struct SymbolRegistry {
    by_key: HashMap<SymbolKey, Sentence>,
}

impl SymbolRegistry {
    pub fn new() -> Self {
        SymbolRegistry {
            by_key: HashMap::new(),
        }
    }

    /// The symbol for `key`, registering it on first use.
    pub fn get(&mut self, key: SymbolKey) -> Sentence {
        self.by_key
            .entry(key)
            .or_insert_with(|| Sentence::symbol(key.name()))
            .clone()
    }

    /// Pre-register every `(kind, y, x)` cell symbol for a grid of size
    /// `n`, for all seven [CellKind]s, per spec §4.4's construction step.
    pub fn populate_grid(&mut self, n: u32) {
        const KINDS: [CellKind; 7] = [
            CellKind::Wumpus,
            CellKind::Pit,
            CellKind::Stench,
            CellKind::Breeze,
            CellKind::Glitter,
            CellKind::Bump,
            CellKind::Scream,
        ];
        for y in 1..=n {
            for x in 1..=n {
                for kind in KINDS {
                    self.get(SymbolKey::cell(kind, Position::new(y, x)));
                }
            }
        }
    }

    /// The number of distinct symbols registered so far.
    pub fn len(&self) -> usize {
        self.by_key.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_key.is_empty()
    }
}
