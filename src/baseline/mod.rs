/*!
A random-action baseline agent, grounded in `RandomAgent` of the
original implementation: ignores the knowledge base entirely and
chooses a uniformly random legal action, with a few hard-coded
preferences (grab gold on sight, climb out once holding it at the
origin). Used as a CLI mode and as a contrast baseline against the
knowledge-based [planner](crate::planner) in integration tests.
*/

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::sim::Simulator;
use crate::types::domain::{Action, PerceptKind, Position};

/// A baseline agent that never consults a [KnowledgeBase](crate::knowledge_base::KnowledgeBase),
/// choosing among the currently legal actions uniformly at random aside
/// from two fixed preferences.
pub struct RandomAgent {
    rng: StdRng,
    found_gold: bool,
}

impl RandomAgent {
    pub fn new(seed: u64) -> Self {
        RandomAgent {
            rng: StdRng::seed_from_u64(seed),
            found_gold: false,
        }
    }

    /// The actions legal from `pos`/`heading` on a grid of side `n`
    /// against `sim`'s board, per the source's `get_valid_actions`.
    fn valid_actions(
        &self,
        sim: &dyn Simulator,
        pos: Position,
        heading: crate::types::domain::Heading,
        n: u32,
        has_arrow: bool,
    ) -> Vec<Action> {
        let mut actions = vec![Action::TurnLeft, Action::TurnRight];
        if pos.step(heading, n).is_some() {
            actions.push(Action::MoveForward);
        }
        if sim.percept(pos).contains(&PerceptKind::Glitter) {
            actions.push(Action::Grab);
        }
        if pos == Position::new(1, 1) {
            actions.push(Action::Climb);
        }
        if has_arrow {
            actions.push(Action::Shoot);
        }
        actions
    }

    /// Choose the next action, per the source's priority order: grab
    /// gold, then climb out with gold at the origin, then a movement-
    /// biased random choice among the remaining legal actions.
    pub fn choose_action(
        &mut self,
        sim: &dyn Simulator,
        pos: Position,
        heading: crate::types::domain::Heading,
        n: u32,
        has_arrow: bool,
    ) -> Action {
        let mut valid = self.valid_actions(sim, pos, heading, n, has_arrow);

        if valid.contains(&Action::Grab) {
            self.found_gold = true;
            return Action::Grab;
        }

        if self.found_gold && pos == Position::new(1, 1) && valid.contains(&Action::Climb) {
            return Action::Climb;
        }

        if valid.contains(&Action::MoveForward) && self.rng.random_bool(0.6) {
            return Action::MoveForward;
        }

        if !self.found_gold {
            valid.retain(|&a| a != Action::Climb);
        }

        if valid.is_empty() {
            Action::TurnLeft
        } else {
            let idx = self.rng.random_range(0..valid.len());
            valid[idx]
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::sim::grid::GridSimulator;
    use crate::types::domain::Heading;

    #[test]
    fn grabs_gold_whenever_it_is_legal() {
        let sim = GridSimulator::new(&Config::default());
        let gold_pos = (1..=4)
            .flat_map(|y| (1..=4).map(move |x| Position::new(y, x)))
            .find(|&p| sim.percept(p).contains(&PerceptKind::Glitter))
            .unwrap();
        let mut agent = RandomAgent::new(7);
        let action = agent.choose_action(&sim, gold_pos, Heading::Right, 4, true);
        assert_eq!(action, Action::Grab);
        assert!(agent.found_gold);
    }

    #[test]
    fn climbs_once_gold_is_found_and_back_at_origin() {
        let sim = GridSimulator::new(&Config::default());
        let mut agent = RandomAgent::new(9);
        agent.found_gold = true;
        let action = agent.choose_action(&sim, Position::new(1, 1), Heading::Right, 4, true);
        assert_eq!(action, Action::Climb);
    }

    #[test]
    fn never_shoots_without_an_arrow() {
        let sim = GridSimulator::new(&Config::default());
        let mut agent = RandomAgent::new(3);
        for _ in 0..50 {
            let action = agent.choose_action(&sim, Position::new(2, 2), Heading::Up, 4, false);
            assert_ne!(action, Action::Shoot);
        }
    }
}
