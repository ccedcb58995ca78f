//! Entrypoint for the `wumpus_cli` binary: runs a full episode of the
//! knowledge-based planner (or the random baseline) against the
//! bundled grid simulator.

use wumpus_agent::baseline::RandomAgent;
use wumpus_agent::planner::Planner;
use wumpus_agent::sim::grid::GridSimulator;
use wumpus_agent::sim::{predetermined, render, Simulator};
use wumpus_agent::types::domain::{Action, Position};

mod args;

use args::{AgentMode, CaveMode, CliArgs};

fn main() {
    #[cfg(feature = "log")]
    env_logger::init();

    let raw_args: Vec<String> = std::env::args().collect();
    let CliArgs {
        mut config,
        agent,
        cave,
        frames,
    } = args::parse_args(&raw_args);

    if matches!(cave, CaveMode::Predetermined(_)) {
        config.grid_size = 6;
    }

    let mut sim = match &cave {
        CaveMode::Random => GridSimulator::new(&config),
        CaveMode::Predetermined(index) => {
            let layout = predetermined::LAYOUTS.get(*index).unwrap_or_else(|| {
                println!("c no such predetermined map, falling back to the easiest one");
                &predetermined::LAYOUTS[0]
            });
            predetermined::load(layout)
        }
    };
    let n = config.grid_size;

    let mut planner = (agent == AgentMode::Planner).then(|| Planner::new(&config));
    let mut random_agent = (agent == AgentMode::Random).then(|| RandomAgent::new(config.seed));
    let mut baseline_has_arrow = true;

    let mut steps = 0;
    while !sim.is_terminal() && steps < config.max_steps {
        steps += 1;
        let pos = sim.agent_position();
        let heading = sim.agent_heading();

        let action = if let Some(planner) = planner.as_mut() {
            let percepts = sim.percept(pos);
            planner
                .sense(pos, &percepts)
                .expect("percept assertion into a well-formed KB cannot fail");
            planner
                .decide()
                .expect("the planner always has some fallback action available")
        } else {
            let baseline = random_agent.as_mut().unwrap();
            baseline.choose_action(&sim, pos, heading, n, baseline_has_arrow)
        };

        if action == Action::Shoot {
            baseline_has_arrow = false;
        }

        let transient = sim.execute(action);

        if let Some(planner) = planner.as_mut() {
            planner
                .record_action(action, pos, heading)
                .expect("recording a well-formed action event cannot fail");
            planner.position = sim.agent_position();
            planner.heading = sim.agent_heading();
            if action == Action::Grab {
                planner.holds_gold = true;
            }
            if action == Action::Shoot {
                planner.has_arrow = false;
            }
            if !transient.is_empty() {
                planner
                    .sense(sim.agent_position(), &transient)
                    .expect("percept assertion into a well-formed KB cannot fail");
            }
        }

        if frames {
            println!("Step {steps}: {action}");
            println!("{}", render::render(n, &sim));
        }
    }

    println!(
        "Episode ended after {steps} step(s): performance = {}, agent at {}",
        sim.performance(),
        sim.agent_position()
    );
    if let Some(reason) = sim.killed_by() {
        println!("The agent was killed by a {reason}.");
    } else if sim.holds_gold() && sim.agent_position() == Position::new(1, 1) {
        println!("The agent escaped with the gold.");
    }
}
