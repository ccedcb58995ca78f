/*!
A small set of fixed-layout caves (easy through expert), grounded in
a `PREDETERMINED_MAPS` table, used for repeatable demonstrations and
integration tests instead of the random placement of
[GridSimulator](crate::sim::grid::GridSimulator).
*/

use crate::sim::grid::GridSimulator;
use crate::types::domain::Position;

/// One fixed layout: a human-readable label plus the wumpus/pit/gold
/// placements, on a 6×6 grid matching the source table.
pub struct Layout {
    pub description: &'static str,
    pub wumpuses: &'static [(u32, u32)],
    pub pits: &'static [(u32, u32)],
    pub gold: (u32, u32),
}

/// The five layouts of the original `PREDETERMINED_MAPS`, in increasing
/// difficulty.
pub const LAYOUTS: &[Layout] = &[
    Layout {
        description: "Easy: no wumpus, no pits, gold at (6,6)",
        wumpuses: &[],
        pits: &[],
        gold: (6, 6),
    },
    Layout {
        description: "Need arrow: wumpus at (2,1) and (1,2), gold at (6,6)",
        wumpuses: &[(2, 1), (1, 2)],
        pits: &[],
        gold: (6, 6),
    },
    Layout {
        description: "Intermediate: 2 wumpus, 3 pits, gold at (5,5)",
        wumpuses: &[(1, 5), (6, 5)],
        pits: &[(1, 4), (3, 1), (6, 3)],
        gold: (5, 5),
    },
    Layout {
        description: "Advanced: 2 wumpus, 6 pits, gold at (2,6)",
        wumpuses: &[(4, 3), (4, 4)],
        pits: &[(2, 1), (3, 2), (3, 6), (4, 5), (5, 3), (6, 5)],
        gold: (2, 6),
    },
    Layout {
        description: "Expert: 2 wumpus, 8 pits, gold at (2,4)",
        wumpuses: &[(1, 4), (5, 1)],
        pits: &[(2, 1), (3, 6), (4, 5), (4, 6), (5, 6), (6, 1), (6, 5), (6, 6)],
        gold: (2, 4),
    },
];

/// Build a [GridSimulator] for a fixed layout, on the 6×6 board the
/// source table assumes.
pub fn load(layout: &Layout) -> GridSimulator {
    let wumpuses: Vec<Position> = layout.wumpuses.iter().map(|&(y, x)| Position::new(y, x)).collect();
    let pits: Vec<Position> = layout.pits.iter().map(|&(y, x)| Position::new(y, x)).collect();
    let (gy, gx) = layout.gold;
    log::info!(target: crate::misc::log::targets::SIM, "loaded predetermined map: {}", layout.description);
    GridSimulator::with_layout(6, &wumpuses, &pits, Position::new(gy, gx))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::Simulator;
    use crate::types::domain::{Action, PerceptKind};

    #[test]
    fn easy_layout_has_no_hazards() {
        let sim = load(&LAYOUTS[0]);
        for y in 1..=6 {
            for x in 1..=6 {
                let percepts = sim.percept(Position::new(y, x));
                assert!(!percepts.contains(&PerceptKind::Breeze));
                assert!(!percepts.contains(&PerceptKind::Stench));
            }
        }
    }

    #[test]
    fn expert_layout_radiates_stench_and_breeze() {
        let sim = load(&LAYOUTS[4]);
        for &(y, x) in LAYOUTS[4].pits {
            for neighbor in Position::new(y, x).neighbors(6) {
                assert!(sim.percept(neighbor).contains(&PerceptKind::Breeze));
            }
        }
    }

    #[test]
    fn walking_the_easy_layout_to_the_gold_and_back_scores_well() {
        let mut sim = load(&LAYOUTS[0]);
        for _ in 0..5 {
            sim.execute(Action::MoveForward); // (1,1) -> (1,6)
        }
        sim.execute(Action::TurnRight); // facing down
        for _ in 0..5 {
            sim.execute(Action::MoveForward); // (1,6) -> (6,6)
        }
        assert_eq!(sim.agent_position(), Position::new(6, 6));
        sim.execute(Action::Grab);
        assert!(sim.percept(Position::new(1, 1)).is_empty());

        sim.execute(Action::TurnRight);
        sim.execute(Action::TurnRight); // facing up
        for _ in 0..5 {
            sim.execute(Action::MoveForward); // (6,6) -> (1,6)
        }
        sim.execute(Action::TurnLeft); // facing left
        for _ in 0..5 {
            sim.execute(Action::MoveForward); // (1,6) -> (1,1)
        }
        assert_eq!(sim.agent_position(), Position::new(1, 1));
        sim.execute(Action::Climb);

        assert!(sim.is_terminal());
        assert!(sim.performance() > 0);
    }
}
