/*!
A tiny ASCII board renderer, grounded in `environment.py::print_board`,
for the CLI's `--frames` flag.
*/

use std::fmt::Write as _;

use crate::sim::grid::GridSimulator;
use crate::sim::Simulator;
use crate::types::domain::{Heading, PerceptKind, Position};

/// Render `sim`'s `n`×`n` board with row `n` printed first (so "up" is
/// up on screen), one `[ ... ]` cell per position.
pub fn render(n: u32, sim: &GridSimulator) -> String {
    let mut out = String::new();
    for y in (1..=n).rev() {
        for x in 1..=n {
            let _ = write!(out, "[{:^7}]", cell_label(Position::new(y, x), sim));
        }
        out.push('\n');
    }
    out
}

fn cell_label(pos: Position, sim: &GridSimulator) -> String {
    let mut label = String::new();
    if pos == sim.agent_position() {
        label.push_str(heading_arrow(sim.agent_heading()));
    }
    let (wumpus, pit, gold) = sim.entities_at(pos);
    if wumpus {
        label.push_str("Wu");
    }
    if pit {
        label.push_str("Pi");
    }
    if gold {
        label.push_str("Go");
    }
    let percepts = sim.percept(pos);
    if percepts.contains(&PerceptKind::Stench) {
        label.push_str("St");
    }
    if percepts.contains(&PerceptKind::Breeze) {
        label.push_str("Br");
    }
    if label.is_empty() {
        ".".to_string()
    } else {
        label
    }
}

fn heading_arrow(heading: Heading) -> &'static str {
    match heading {
        Heading::Up => "^",
        Heading::Down => "v",
        Heading::Left => "<",
        Heading::Right => ">",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    #[test]
    fn renders_one_row_per_grid_line() {
        let sim = GridSimulator::new(&Config::default());
        let text = render(4, &sim);
        assert_eq!(text.lines().count(), 4);
    }

    #[test]
    fn marks_the_agents_starting_cell_with_its_heading() {
        let sim = GridSimulator::new(&Config::default());
        let text = render(4, &sim);
        let last_line = text.lines().last().unwrap();
        assert!(last_line.contains('>'));
    }
}
