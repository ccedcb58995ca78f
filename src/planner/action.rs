/*!
Translating a path of grid cells into the turn/move actions that
realize it (spec §4.6, "Path-to-action translation").
*/

use crate::types::domain::{Action, Heading, Position};

/// The heading of the step from `from` to the orthogonally adjacent
/// cell `to`.
fn heading_between(from: Position, to: Position) -> Heading {
    if to.y < from.y {
        Heading::Up
    } else if to.y > from.y {
        Heading::Down
    } else if to.x < from.x {
        Heading::Left
    } else {
        Heading::Right
    }
}

/// The minimal turn rotation from `current` to `target`: no turn, a
/// single `TurnRight` or `TurnLeft`, or `TurnRight` twice for a
/// 180-degree reversal.
fn minimal_turns(current: Heading, target: Heading) -> Vec<Action> {
    if current == target {
        return Vec::new();
    }
    if current.turn_right() == target {
        return vec![Action::TurnRight];
    }
    if current.turn_left() == target {
        return vec![Action::TurnLeft];
    }
    vec![Action::TurnRight, Action::TurnRight]
}

/// Translate a path (as returned by [crate::planner::astar::find_path])
/// into the turn/move action sequence that walks it, starting from
/// `start_heading`. Returns the actions and the heading the agent ends
/// facing.
pub fn path_to_actions(path: &[Position], start_heading: Heading) -> (Vec<Action>, Heading) {
    let mut actions = Vec::new();
    let mut heading = start_heading;
    for window in path.windows(2) {
        let (from, to) = (window[0], window[1]);
        let needed = heading_between(from, to);
        actions.extend(minimal_turns(heading, needed));
        heading = needed;
        actions.push(Action::MoveForward);
    }
    (actions, heading)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn straight_path_needs_no_turns() {
        let path = vec![Position::new(1, 1), Position::new(1, 2), Position::new(1, 3)];
        let (actions, heading) = path_to_actions(&path, Heading::Right);
        assert_eq!(
            actions,
            vec![Action::MoveForward, Action::MoveForward]
        );
        assert_eq!(heading, Heading::Right);
    }

    #[test]
    fn reversal_needs_two_right_turns() {
        let path = vec![Position::new(1, 2), Position::new(1, 1)];
        let (actions, heading) = path_to_actions(&path, Heading::Right);
        assert_eq!(
            actions,
            vec![Action::TurnRight, Action::TurnRight, Action::MoveForward]
        );
        assert_eq!(heading, Heading::Left);
    }

    #[test]
    fn single_right_turn() {
        let path = vec![Position::new(1, 1), Position::new(2, 1)];
        let (actions, heading) = path_to_actions(&path, Heading::Right);
        assert_eq!(actions, vec![Action::TurnRight, Action::MoveForward]);
        assert_eq!(heading, Heading::Down);
    }
}
