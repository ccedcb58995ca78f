/*!
A randomly generated cave, grounded in `WumpusEnvironment` of the
original implementation: an N×N grid, pits and wumpuses placed away
from the start cell and radiating Breeze/Stench to their orthogonal
neighbors, one piece of gold, and the scoring convention of spec §7.
*/

use log::{debug, info};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::Config;
use crate::misc::log::targets;
use crate::sim::Simulator;
use crate::types::domain::{Action, Heading, PerceptKind, Position};

#[derive(Clone, Copy, Debug, Default)]
struct Cell {
    wumpus: bool,
    pit: bool,
    gold: bool,
    stench: bool,
    breeze: bool,
}

/// A randomly generated cave of side `n`, with the agent starting at
/// `(1, 1)` facing right.
pub struct GridSimulator {
    n: u32,
    board: Vec<Vec<Cell>>,
    position: Position,
    heading: Heading,
    has_arrow: bool,
    holds_gold: bool,
    alive: bool,
    climbed_out: bool,
    performance: i64,
    killed_by: Option<&'static str>,
    last_bump: bool,
    last_scream: bool,
}

impl GridSimulator {
    /// Build a cave per `config`, seeding an RNG from `config.seed` for
    /// reproducible layouts.
    pub fn new(config: &Config) -> Self {
        let n = config.grid_size;
        let mut rng = StdRng::seed_from_u64(config.seed);
        let start = Position::new(1, 1);

        let mut pits = Vec::new();
        while pits.len() < config.pit_count as usize {
            let pos = random_cell(&mut rng, n);
            if pos != start && !pits.contains(&pos) {
                pits.push(pos);
            }
        }

        let mut wumpuses = Vec::new();
        while wumpuses.len() < config.wumpus_count as usize {
            let pos = random_cell(&mut rng, n);
            if pos != start && !pits.contains(&pos) && !wumpuses.contains(&pos) {
                wumpuses.push(pos);
            }
        }

        let gold = loop {
            let pos = random_cell(&mut rng, n);
            if pos != start {
                break pos;
            }
        };

        info!(
            target: targets::SIM,
            "generated {n}x{n} cave: {} pit(s), {} wumpus(es), gold at {gold}",
            pits.len(), wumpuses.len(),
        );

        Self::with_layout(n, &wumpuses, &pits, gold)
    }

    /// Build a cave of side `n` with `wumpuses` and `pits` placed at the
    /// given positions and `gold` placed at the given position, skipping
    /// the random generation step --- shared by the random generator
    /// above and the fixed-layout loader.
    pub fn with_layout(
        n: u32,
        wumpuses: &[Position],
        pits: &[Position],
        gold: Position,
    ) -> Self {
        let mut board = vec![vec![Cell::default(); (n + 1) as usize]; (n + 1) as usize];

        for &pos in pits {
            board[pos.y as usize][pos.x as usize].pit = true;
            for neighbor in pos.neighbors(n) {
                board[neighbor.y as usize][neighbor.x as usize].breeze = true;
            }
        }
        for &pos in wumpuses {
            board[pos.y as usize][pos.x as usize].wumpus = true;
            for neighbor in pos.neighbors(n) {
                board[neighbor.y as usize][neighbor.x as usize].stench = true;
            }
        }
        board[gold.y as usize][gold.x as usize].gold = true;

        GridSimulator {
            n,
            board,
            position: Position::new(1, 1),
            heading: Heading::Right,
            has_arrow: true,
            holds_gold: false,
            alive: true,
            climbed_out: false,
            performance: 0,
            killed_by: None,
            last_bump: false,
            last_scream: false,
        }
    }

    fn cell(&self, pos: Position) -> Cell {
        self.board[pos.y as usize][pos.x as usize]
    }

    fn cell_mut(&mut self, pos: Position) -> &mut Cell {
        &mut self.board[pos.y as usize][pos.x as usize]
    }

    /// The arrow travels forward from the agent's position along its
    /// current heading until it leaves the grid or strikes a live
    /// wumpus, killing the first one hit and clearing stench on cells
    /// no longer justified by a surviving neighbor.
    fn kill_wumpus(&mut self) -> bool {
        let mut pos = self.position;
        while let Some(next) = pos.step(self.heading, self.n) {
            pos = next;
            if self.cell(pos).wumpus {
                self.cell_mut(pos).wumpus = false;
                for neighbor in pos.neighbors(self.n) {
                    let still_justified = neighbor
                        .neighbors(self.n)
                        .iter()
                        .any(|p| self.cell(*p).wumpus);
                    if !still_justified {
                        self.cell_mut(neighbor).stench = false;
                    }
                }
                debug!(target: targets::SIM, "arrow killed wumpus at {pos}");
                return true;
            }
        }
        false
    }

    fn in_danger(&self) -> bool {
        let here = self.cell(self.position);
        here.wumpus || here.pit
    }

    /// Ground-truth contents of `pos`, for the frame renderer --- not
    /// part of the [Simulator] boundary the knowledge base and planner
    /// see, which only ever sense percepts.
    pub fn entities_at(&self, pos: Position) -> (bool, bool, bool) {
        let cell = self.cell(pos);
        (cell.wumpus, cell.pit, cell.gold)
    }

    /// What killed the agent, if the episode ended in death.
    pub fn killed_by(&self) -> Option<&'static str> {
        self.killed_by
    }

    /// Whether the agent is currently holding the gold.
    pub fn holds_gold(&self) -> bool {
        self.holds_gold
    }
}

impl Simulator for GridSimulator {
    fn percept(&self, pos: Position) -> Vec<PerceptKind> {
        let cell = self.cell(pos);
        let mut percepts = Vec::new();
        if cell.breeze {
            percepts.push(PerceptKind::Breeze);
        }
        if cell.stench {
            percepts.push(PerceptKind::Stench);
        }
        if cell.gold {
            percepts.push(PerceptKind::Glitter);
        }
        percepts
    }

    fn execute(&mut self, action: Action) -> Vec<PerceptKind> {
        self.last_bump = false;
        self.last_scream = false;
        if !self.alive || self.climbed_out {
            return Vec::new();
        }

        self.performance -= 1;

        match action {
            Action::MoveForward => match self.position.step(self.heading, self.n) {
                Some(next) => self.position = next,
                None => self.last_bump = true,
            },
            Action::TurnLeft => self.heading = self.heading.turn_left(),
            Action::TurnRight => self.heading = self.heading.turn_right(),
            Action::Grab => {
                if self.cell(self.position).gold {
                    self.cell_mut(self.position).gold = false;
                    self.holds_gold = true;
                    self.performance += 1000;
                    debug!(target: targets::SIM, "gold grabbed at {}", self.position);
                }
            }
            Action::Shoot => {
                if self.has_arrow {
                    self.has_arrow = false;
                    self.performance -= 10;
                    if self.kill_wumpus() {
                        self.last_scream = true;
                    }
                }
            }
            Action::Climb => {
                if self.position == Position::new(1, 1) {
                    self.climbed_out = true;
                    if self.holds_gold {
                        self.performance += 1000;
                    }
                }
            }
        }

        if self.in_danger() {
            self.alive = false;
            self.killed_by = Some(if self.cell(self.position).wumpus {
                "wumpus"
            } else {
                "pit"
            });
            self.performance -= 1000;
        }

        let mut out = Vec::new();
        if self.last_bump {
            out.push(PerceptKind::Bump);
        }
        if self.last_scream {
            out.push(PerceptKind::Scream);
        }
        out
    }

    fn is_terminal(&self) -> bool {
        !self.alive || self.climbed_out
    }

    fn agent_position(&self) -> Position {
        self.position
    }

    fn agent_heading(&self) -> Heading {
        self.heading
    }

    fn performance(&self) -> i64 {
        self.performance
    }
}

fn random_cell(rng: &mut StdRng, n: u32) -> Position {
    Position::new(rng.random_range(1..=n), rng.random_range(1..=n))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(seed: u64) -> Config {
        let mut c = Config::default();
        c.grid_size = 4;
        c.seed = seed;
        c
    }

    #[test]
    fn start_cell_is_never_hazardous() {
        for seed in 0..20 {
            let sim = GridSimulator::new(&config(seed));
            assert!(!sim.in_danger());
            assert!(!sim.cell(Position::new(1, 1)).gold);
        }
    }

    #[test]
    fn grabbing_gold_awards_performance() {
        let mut sim = GridSimulator::new(&config(1));
        let gold_pos = (1..=sim.n)
            .flat_map(|y| (1..=sim.n).map(move |x| Position::new(y, x)))
            .find(|p| sim.cell(*p).gold)
            .unwrap();
        sim.position = gold_pos;
        let before = sim.performance();
        sim.execute(Action::Grab);
        assert!(sim.holds_gold);
        assert_eq!(sim.performance(), before - 1 + 1000);
    }

    #[test]
    fn moving_into_a_pit_kills_the_agent() {
        let mut sim = GridSimulator::new(&config(2));
        let pit_pos = (1..=sim.n)
            .flat_map(|y| (1..=sim.n).map(move |x| Position::new(y, x)))
            .find(|p| sim.cell(*p).pit)
            .unwrap();
        sim.position = pit_pos;
        sim.execute(Action::TurnLeft);
        assert!(!sim.alive);
        assert!(sim.is_terminal());
        assert_eq!(sim.killed_by, Some("pit"));
    }

    #[test]
    fn climb_at_origin_without_gold_ends_episode_without_bonus() {
        let mut sim = GridSimulator::new(&config(3));
        let before = sim.performance();
        sim.execute(Action::Climb);
        assert!(sim.is_terminal());
        assert_eq!(sim.performance(), before - 1);
    }

    #[test]
    fn shooting_clears_wumpus_and_yields_scream() {
        let mut sim = GridSimulator::new(&config(4));
        let wumpus_pos = (1..=sim.n)
            .flat_map(|y| (1..=sim.n).map(move |x| Position::new(y, x)))
            .find(|p| sim.cell(*p).wumpus)
            .unwrap();
        sim.position = Position::new(1, 1);
        sim.heading = if wumpus_pos.y == 1 {
            Heading::Right
        } else if wumpus_pos.x == 1 {
            Heading::Down
        } else {
            // Not aligned with the start cell on this seed; skip.
            return;
        };
        let percepts = sim.execute(Action::Shoot);
        assert!(!sim.has_arrow);
        if percepts.contains(&PerceptKind::Scream) {
            assert!(!sim.cell(wumpus_pos).wumpus);
        }
    }

    #[test]
    fn bump_reported_against_the_grid_wall() {
        let mut sim = GridSimulator::new(&config(5));
        sim.position = Position::new(1, 1);
        sim.heading = Heading::Up;
        let percepts = sim.execute(Action::MoveForward);
        assert_eq!(percepts, vec![PerceptKind::Bump]);
        assert_eq!(sim.position, Position::new(1, 1));
    }
}
