use wumpus_agent::config::Config;
use wumpus_agent::planner::Planner;
use wumpus_agent::sim::grid::GridSimulator;
use wumpus_agent::sim::{predetermined, Simulator};
use wumpus_agent::types::domain::{Action, Position};

mod full_episode {
    use super::*;

    /// The full-episode scenario: 6x6 grid, gold at (3,3), one wumpus at
    /// (4,1), a pit at (2,2) --- none of which are adjacent to the gold
    /// cell, so a correctly conservative planner should never die while
    /// reaching it.
    #[test]
    fn planner_never_dies_on_the_six_by_six_scenario() {
        let wumpuses = [Position::new(4, 1)];
        let pits = [Position::new(2, 2)];
        let gold = Position::new(3, 3);

        let mut sim = GridSimulator::with_layout(6, &wumpuses, &pits, gold);
        let config = Config {
            grid_size: 6,
            max_steps: 300,
            ..Default::default()
        };
        let mut planner = Planner::new(&config);

        let mut steps = 0;
        while !sim.is_terminal() && steps < config.max_steps {
            steps += 1;
            let pos = sim.agent_position();
            let heading = sim.agent_heading();

            let percepts = sim.percept(pos);
            planner.sense(pos, &percepts).unwrap();
            let action = planner.decide().unwrap();

            let transient = sim.execute(action);
            planner.record_action(action, pos, heading).unwrap();
            planner.position = sim.agent_position();
            planner.heading = sim.agent_heading();
            if action == Action::Grab {
                planner.holds_gold = true;
            }
            if !transient.is_empty() {
                planner.sense(sim.agent_position(), &transient).unwrap();
            }
        }

        assert!(sim.killed_by().is_none(), "planner walked into a hazard");
        if sim.is_terminal() && sim.holds_gold() && sim.agent_position() == Position::new(1, 1) {
            assert!(sim.performance() > 0, "a successful mission should score positively");
        }
    }
}

mod random_baseline {
    use super::*;
    use wumpus_agent::baseline::RandomAgent;

    /// Unlike the planner, the random baseline makes no safety
    /// guarantee --- this only checks the episode terminates within the
    /// step budget, either by death or by climbing out.
    #[test]
    fn terminates_within_the_step_budget() {
        let config = Config {
            seed: 11,
            max_steps: 1000,
            ..Default::default()
        };
        let mut sim = GridSimulator::new(&config);
        let mut agent = RandomAgent::new(config.seed);
        let mut has_arrow = true;

        let mut steps = 0;
        while !sim.is_terminal() && steps < config.max_steps {
            steps += 1;
            let pos = sim.agent_position();
            let heading = sim.agent_heading();
            let action = agent.choose_action(&sim, pos, heading, config.grid_size, has_arrow);
            if action == Action::Shoot {
                has_arrow = false;
            }
            sim.execute(action);
        }

        assert!(sim.is_terminal());
    }
}

mod predetermined_layouts {
    use super::*;

    #[test]
    fn easy_layout_has_a_clear_path_to_climb_with_gold() {
        let mut sim = predetermined::load(&predetermined::LAYOUTS[0]);
        let config = Config {
            grid_size: 6,
            max_steps: 300,
            ..Default::default()
        };
        let mut planner = Planner::new(&config);

        let mut steps = 0;
        while !sim.is_terminal() && steps < config.max_steps {
            steps += 1;
            let pos = sim.agent_position();
            let heading = sim.agent_heading();

            let percepts = sim.percept(pos);
            planner.sense(pos, &percepts).unwrap();
            let action = planner.decide().unwrap();

            let transient = sim.execute(action);
            planner.record_action(action, pos, heading).unwrap();
            planner.position = sim.agent_position();
            planner.heading = sim.agent_heading();
            if action == Action::Grab {
                planner.holds_gold = true;
            }
            if !transient.is_empty() {
                planner.sense(sim.agent_position(), &transient).unwrap();
            }
        }

        // The easy layout has no pits or wumpuses at all, so nothing can
        // ever kill the agent regardless of path taken.
        assert!(sim.killed_by().is_none());
    }

    #[test]
    fn expert_layout_places_every_configured_hazard() {
        let sim = predetermined::load(&predetermined::LAYOUTS[4]);
        for &(y, x) in predetermined::LAYOUTS[4].pits {
            assert!(sim
                .entities_at(Position::new(y, x))
                .1);
        }
        for &(y, x) in predetermined::LAYOUTS[4].wumpuses {
            assert!(sim
                .entities_at(Position::new(y, x))
                .0);
        }
    }
}
