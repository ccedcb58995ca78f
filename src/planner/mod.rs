/*!
The A* planner (spec §4.6): combines the [safety] classifier with a
grid search to pick an exploration target each decision cycle, and
translates the resulting path into turn/move actions.

```
use wumpus_agent::config::Config;
use wumpus_agent::planner::Planner;
use wumpus_agent::types::domain::Position;

let mut planner = Planner::new(&Config::default());
planner.sense(Position::new(1, 1), &[]).unwrap();
let action = planner.decide().unwrap();
```
*/

use std::collections::{HashMap, HashSet};

use log::debug;

use crate::config::Config;
use crate::knowledge_base::KnowledgeBase;
use crate::misc::log::targets;
use crate::types::domain::{Action, Heading, PerceptKind, Position};
use crate::types::err::{CnfError, PlannerError, ErrorKind};

pub mod action;
pub mod astar;
pub mod safety;

/// The agent's pose and inventory, plus the bookkeeping the planner
/// needs across decision cycles: percept history (for the safety
/// classifier's neighbor rule) and the `known_safe`/`known_unsafe`
/// memoization sets of spec §4.5.
pub struct Planner {
    pub kb: KnowledgeBase,
    config: Config,
    percept_history: HashMap<Position, Vec<PerceptKind>>,
    known_safe: HashSet<Position>,
    known_unsafe: HashSet<Position>,

    pub position: Position,
    pub heading: Heading,
    pub has_arrow: bool,
    pub holds_gold: bool,

    step: u64,
}

impl Planner {
    pub fn new(config: &Config) -> Self {
        Planner {
            kb: KnowledgeBase::with_advanced(
                config.grid_size,
                config.advanced,
                config.advanced_relocation_period,
            ),
            config: config.clone(),
            percept_history: HashMap::new(),
            known_safe: HashSet::new(),
            known_unsafe: HashSet::new(),
            position: Position::new(1, 1),
            heading: Heading::Right,
            has_arrow: true,
            holds_gold: false,
            step: 0,
        }
    }

    /// Absorb percepts sensed at `pos`: update the knowledge base and
    /// remember the percept list for the safety classifier's neighbor
    /// rule (spec §4.5 rule 3).
    pub fn sense(&mut self, pos: Position, percepts: &[PerceptKind]) -> Result<(), CnfError> {
        self.kb.update_percept(pos, percepts)?;
        self.percept_history.insert(pos, percepts.to_vec());
        Ok(())
    }

    /// Record that `action` was executed from `pos` facing `heading`,
    /// advancing the step counter used to index action-event symbols.
    pub fn record_action(&mut self, action: Action, pos: Position, heading: Heading) -> Result<(), CnfError> {
        self.step += 1;
        self.kb.record_action(action, pos, heading, self.step)
    }

    fn is_safe(&mut self, pos: Position) -> Result<bool, CnfError> {
        safety::is_safe(
            &mut self.kb,
            &self.percept_history,
            &mut self.known_safe,
            &mut self.known_unsafe,
            self.config.max_iterations,
            pos,
        )
    }

    /// Whether Glitter was the most recent percept sensed at the
    /// agent's current position.
    fn glitter_here(&self) -> bool {
        self.percept_history
            .get(&self.position)
            .map(|ps| ps.contains(&PerceptKind::Glitter))
            .unwrap_or(false)
    }

    /// The next single action to execute, per the decision loop
    /// contract of spec §4.6: re-evaluate target selection from
    /// scratch every cycle using the current KB/percept state.
    pub fn decide(&mut self) -> Result<Action, ErrorKind> {
        if self.glitter_here() && !self.holds_gold {
            debug!(target: targets::PLANNER, "glitter at {}, grabbing", self.position);
            return Ok(Action::Grab);
        }

        let origin = Position::new(1, 1);

        if self.holds_gold && self.position == origin {
            return Ok(Action::Climb);
        }

        if self.holds_gold {
            return self.plan_route_action(origin, false);
        }

        if let Some(target) = self.closest_unvisited_safe_target()? {
            return self.plan_route_action(target, false);
        }

        if let Some(target) = self.closest_risky_target()? {
            debug!(target: targets::PLANNER, "no safe target left, risking {target}");
            return self.plan_route_action(target, true);
        }

        self.plan_route_action(origin, false)
    }

    /// Plan a path from the current position to `target` (risky or
    /// safe-only per `risky`) and return the first action of its
    /// translation, updating `heading` to match. Appends `Climb` when
    /// the plan already reaches `target == (1,1)` while holding gold.
    fn plan_route_action(&mut self, target: Position, risky: bool) -> Result<Action, ErrorKind> {
        let path = if risky {
            self.find_risky_path(target)?
        } else {
            self.find_safe_path(target)?
        };
        let path = path.ok_or(ErrorKind::Planner(PlannerError::NoPath))?;

        if path.len() == 1 {
            // Already at the target: a return-to-origin plan always ends
            // in Climb, whether or not gold was ever found.
            return if target == Position::new(1, 1) {
                Ok(Action::Climb)
            } else {
                Err(ErrorKind::Planner(PlannerError::NoPath))
            };
        }

        let (actions, _final_heading) = action::path_to_actions(&path, self.heading);
        let first = actions
            .first()
            .copied()
            .ok_or(ErrorKind::Planner(PlannerError::NoPath))?;
        self.heading = match first {
            Action::TurnRight => self.heading.turn_right(),
            Action::TurnLeft => self.heading.turn_left(),
            _ => self.heading,
        };
        Ok(first)
    }

    fn find_safe_path(&mut self, target: Position) -> Result<Option<Vec<Position>>, ErrorKind> {
        let n = self.kb.grid_size();
        let mut costs = HashMap::new();
        for y in 1..=n {
            for x in 1..=n {
                let pos = Position::new(y, x);
                costs.insert(pos, self.is_safe(pos)?);
            }
        }
        Ok(astar::find_path(self.position, target, n, |p| {
            costs.get(&p).copied().unwrap_or(false).then_some(1)
        }))
    }

    /// The risky-path variant of spec §4.6 step 4: permits cells that
    /// are neither visited, safe, nor proven unsafe, at a cost penalty
    /// of `risky_step_penalty` per such step.
    fn find_risky_path(&mut self, target: Position) -> Result<Option<Vec<Position>>, ErrorKind> {
        let n = self.kb.grid_size();
        let penalty = self.config.risky_step_penalty;
        let mut is_safe_map = HashMap::new();
        let mut is_unsafe_map = HashMap::new();
        for y in 1..=n {
            for x in 1..=n {
                let pos = Position::new(y, x);
                is_safe_map.insert(pos, self.is_safe(pos)?);
                is_unsafe_map.insert(pos, self.known_unsafe.contains(&pos));
            }
        }
        Ok(astar::find_path(self.position, target, n, |p| {
            if *is_unsafe_map.get(&p).unwrap_or(&false) {
                None
            } else if *is_safe_map.get(&p).unwrap_or(&false) {
                Some(1)
            } else {
                Some(1 + penalty)
            }
        }))
    }

    /// The closest unvisited cell classified safe, ties broken in
    /// favor of cells reachable without turning first (spec §4.6 step 3).
    fn closest_unvisited_safe_target(&mut self) -> Result<Option<Position>, ErrorKind> {
        let n = self.kb.grid_size();
        let mut candidates = Vec::new();
        for y in 1..=n {
            for x in 1..=n {
                let pos = Position::new(y, x);
                if self.kb.visited().contains(&pos) {
                    continue;
                }
                if self.is_safe(pos)? {
                    candidates.push(pos);
                }
            }
        }
        Ok(self.pick_closest(candidates))
    }

    /// The closest cell that is neither visited, nor proven safe, nor
    /// proven unsafe (spec §4.6 step 4).
    fn closest_risky_target(&mut self) -> Result<Option<Position>, ErrorKind> {
        let n = self.kb.grid_size();
        let mut candidates = Vec::new();
        for y in 1..=n {
            for x in 1..=n {
                let pos = Position::new(y, x);
                if self.kb.visited().contains(&pos) {
                    continue;
                }
                if self.known_unsafe.contains(&pos) {
                    continue;
                }
                if self.is_safe(pos)? {
                    continue;
                }
                candidates.push(pos);
            }
        }
        Ok(self.pick_closest(candidates))
    }

    /// Pick the candidate closest to the current position by Manhattan
    /// distance, tie-broken in favor of a candidate whose direction from
    /// the current position matches the current heading.
    fn pick_closest(&self, mut candidates: Vec<Position>) -> Option<Position> {
        candidates.sort_by_key(|&p| {
            let dist = self.position.manhattan_distance(p);
            let aligned = self.is_aligned_with_heading(p);
            (dist, !aligned, p.y, p.x)
        });
        candidates.into_iter().next()
    }

    fn is_aligned_with_heading(&self, target: Position) -> bool {
        match self.heading {
            Heading::Up => target.y < self.position.y,
            Heading::Down => target.y > self.position.y,
            Heading::Left => target.x < self.position.x,
            Heading::Right => target.x > self.position.x,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn climb_when_holding_gold_at_origin() {
        let mut planner = Planner::new(&Config::default());
        planner.sense(Position::new(1, 1), &[]).unwrap();
        planner.holds_gold = true;
        assert_eq!(planner.decide().unwrap(), Action::Climb);
    }

    #[test]
    fn grabs_on_glitter() {
        let mut planner = Planner::new(&Config::default());
        planner
            .sense(Position::new(1, 1), &[PerceptKind::Glitter])
            .unwrap();
        assert_eq!(planner.decide().unwrap(), Action::Grab);
    }

    #[test]
    fn explores_toward_a_safe_unvisited_cell() {
        let mut config = Config::default();
        config.grid_size = 3;
        let mut planner = Planner::new(&config);
        planner.sense(Position::new(1, 1), &[]).unwrap();
        let action = planner.decide().unwrap();
        assert!(matches!(
            action,
            Action::MoveForward | Action::TurnLeft | Action::TurnRight
        ));
    }
}
