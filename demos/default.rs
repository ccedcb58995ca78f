//! Runs the planner to completion against the bundled grid simulator
//! with default configuration, printing a one-line summary per step.

use wumpus_agent::config::Config;
use wumpus_agent::planner::Planner;
use wumpus_agent::sim::grid::GridSimulator;
use wumpus_agent::sim::Simulator;

fn main() {
    let config = Config {
        seed: 42,
        ..Default::default()
    };

    let mut sim = GridSimulator::new(&config);
    let mut planner = Planner::new(&config);

    let mut steps = 0;
    while !sim.is_terminal() && steps < config.max_steps {
        steps += 1;
        let pos = sim.agent_position();
        let heading = sim.agent_heading();

        let percepts = sim.percept(pos);
        planner.sense(pos, &percepts).expect("well-formed percept");
        let action = planner.decide().expect("some action is always available");

        let transient = sim.execute(action);
        planner
            .record_action(action, pos, heading)
            .expect("well-formed action event");
        planner.position = sim.agent_position();
        planner.heading = sim.agent_heading();
        if action == wumpus_agent::types::domain::Action::Grab {
            planner.holds_gold = true;
        }
        if !transient.is_empty() {
            planner.sense(sim.agent_position(), &transient).expect("well-formed percept");
        }

        println!("step {steps}: {action} -> {}", sim.agent_position());
    }

    println!(
        "\nDone after {steps} step(s); performance = {}",
        sim.performance()
    );
}
