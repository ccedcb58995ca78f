//! Command-line argument parsing, built with the same
//! `clap::{Command, Arg}` + `ArgMatches::try_get_one` pattern as the
//! library's own CLI configuration layer.

use clap::{value_parser, Arg, Command};

use crate::config::Config;

/// Which agent drives the episode.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AgentMode {
    /// The knowledge-based planner of spec §4.
    Planner,
    /// The [random baseline](crate::baseline::RandomAgent).
    Random,
}

/// Which cave the episode runs against.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CaveMode {
    /// A freshly generated [GridSimulator](crate::sim::grid::GridSimulator).
    Random,
    /// One of the fixed [LAYOUTS](crate::sim::predetermined::LAYOUTS), by index.
    Predetermined(usize),
}

/// Fully parsed CLI invocation.
pub struct CliArgs {
    pub config: Config,
    pub agent: AgentMode,
    pub cave: CaveMode,
    pub frames: bool,
}

pub fn cli() -> Command {
    Command::new("wumpus_cli")
        .about("Runs a knowledge-based Wumpus World agent against a grid cave")
        .arg(
            Arg::new("grid_size")
                .long("grid-size")
                .value_parser(value_parser!(u32))
                .num_args(1)
                .help("Side length of the square grid cave (ignored with --map)."),
        )
        .arg(
            Arg::new("wumpus_count")
                .long("wumpus-count")
                .value_parser(value_parser!(u32))
                .num_args(1)
                .help("Number of wumpuses the random cave places."),
        )
        .arg(
            Arg::new("pit_count")
                .long("pit-count")
                .value_parser(value_parser!(u32))
                .num_args(1)
                .help("Number of pits the random cave places."),
        )
        .arg(
            Arg::new("seed")
                .long("seed")
                .value_parser(value_parser!(u64))
                .num_args(1)
                .help("Seed for the random cave's RNG."),
        )
        .arg(
            Arg::new("max_steps")
                .long("max-steps")
                .value_parser(value_parser!(u32))
                .num_args(1)
                .help("Hard cap on executed actions before the driver gives up."),
        )
        .arg(
            Arg::new("advanced")
                .long("advanced")
                .value_parser(value_parser!(bool))
                .num_args(0)
                .help("Enable moving-wumpus mode (spec §9)."),
        )
        .arg(
            Arg::new("map")
                .long("map")
                .value_parser(value_parser!(usize))
                .num_args(1)
                .help("Run one of the five predetermined layouts (1-5) instead of a random cave."),
        )
        .arg(
            Arg::new("random_agent")
                .long("random-agent")
                .value_parser(value_parser!(bool))
                .num_args(0)
                .help("Drive the episode with the random baseline instead of the planner."),
        )
        .arg(
            Arg::new("frames")
                .long("frames")
                .value_parser(value_parser!(bool))
                .num_args(0)
                .help("Print a board frame after every action."),
        )
}

pub fn parse_args(args: &[String]) -> CliArgs {
    let matches = cli().get_matches_from(args);

    let mut config = Config::default();
    if let Ok(Some(n)) = matches.try_get_one::<u32>("grid_size") {
        config.grid_size = *n;
    }
    if let Ok(Some(n)) = matches.try_get_one::<u32>("wumpus_count") {
        config.wumpus_count = *n;
    }
    if let Ok(Some(n)) = matches.try_get_one::<u32>("pit_count") {
        config.pit_count = *n;
    }
    if let Ok(Some(s)) = matches.try_get_one::<u64>("seed") {
        config.seed = *s;
    }
    if let Ok(Some(n)) = matches.try_get_one::<u32>("max_steps") {
        config.max_steps = *n;
    }
    if let Ok(Some(true)) = matches.try_get_one::<bool>("advanced") {
        config.advanced = true;
    }

    let cave = match matches.try_get_one::<usize>("map") {
        Ok(Some(choice)) => CaveMode::Predetermined(choice.saturating_sub(1)),
        _ => CaveMode::Random,
    };

    let agent = match matches.try_get_one::<bool>("random_agent") {
        Ok(Some(true)) => AgentMode::Random,
        _ => AgentMode::Planner,
    };

    let frames = matches!(matches.try_get_one::<bool>("frames"), Ok(Some(true)));

    CliArgs {
        config,
        agent,
        cave,
        frames,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_select_the_planner_against_a_random_cave() {
        let args = parse_args(&["wumpus_cli".to_string()]);
        assert_eq!(args.agent, AgentMode::Planner);
        assert_eq!(args.cave, CaveMode::Random);
        assert!(!args.frames);
    }

    #[test]
    fn map_flag_selects_a_predetermined_layout_by_one_based_index() {
        let args = parse_args(&[
            "wumpus_cli".to_string(),
            "--map".to_string(),
            "3".to_string(),
        ]);
        assert_eq!(args.cave, CaveMode::Predetermined(2));
    }

    #[test]
    fn random_agent_flag_selects_the_baseline() {
        let args = parse_args(&["wumpus_cli".to_string(), "--random-agent".to_string()]);
        assert_eq!(args.agent, AgentMode::Random);
    }

    #[test]
    fn grid_size_override_is_applied() {
        let args = parse_args(&[
            "wumpus_cli".to_string(),
            "--grid-size".to_string(),
            "8".to_string(),
        ]);
        assert_eq!(args.config.grid_size, 8);
    }
}
