use std::time::{SystemTime, UNIX_EPOCH};

use log::{debug, info};

use maze::Maze;
use maze::config::Config;
use maze::error::MazeError;

use crate::args::Args;

/// Picks the seed in order of precedence: command line, configuration, clock.
pub fn choose_seed(cli_seed: Option<u64>, config: &Config) -> u64 {
    cli_seed.or(config.seed).unwrap_or_else(clock_seed)
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_nanos() as u64)
        .unwrap_or_default()
}

pub fn run(args: &Args, config: &Config) -> Result<Maze, MazeError> {
    let seed = choose_seed(args.seed, config);
    info!(
        "Generating a {}x{} maze with seed {}.",
        args.rows, args.columns, seed
    );

    let maze = Maze::new(args.rows, args.columns, seed)?.with_path_glyph(config.path_glyph);
    debug!("Solution visits {} cells.", maze.path().len());

    Ok(maze)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(rows: usize, columns: usize, seed: Option<u64>) -> Args {
        Args {
            rows,
            columns,
            seed,
        }
    }

    #[test]
    fn command_line_seed_wins_over_config() {
        let config = Config {
            seed: Some(1),
            ..Config::default()
        };

        assert_eq!(choose_seed(Some(7), &config), 7);
        assert_eq!(choose_seed(None, &config), 1);
    }

    #[test]
    fn same_seed_draws_same_maze() {
        let config = Config::default();

        let first = run(&args(6, 9, Some(123)), &config).expect("valid dimensions");
        let second = run(&args(6, 9, Some(123)), &config).expect("valid dimensions");

        assert_eq!(first.to_string(), second.to_string());
    }

    #[test]
    fn config_seed_is_used_when_none_is_given() {
        let config = Config {
            seed: Some(55),
            ..Config::default()
        };

        let from_config = run(&args(5, 5, None), &config).expect("valid dimensions");
        let from_cli = run(&args(5, 5, Some(55)), &Config::default()).expect("valid dimensions");

        assert_eq!(from_config.to_string(), from_cli.to_string());
    }

    #[test]
    fn glyph_comes_from_config() {
        let config = Config {
            path_glyph: 'x',
            ..Config::default()
        };

        let maze = run(&args(1, 1, Some(0)), &config).expect("valid dimensions");

        assert_eq!(maze.to_string(), "+---+\n| x |\n+---+\n");
    }

    #[test]
    fn zero_dimensions_are_an_error() {
        assert_eq!(
            run(&args(3, 0, Some(0)), &Config::default()).err(),
            Some(MazeError::InvalidDimensions {
                rows: 3,
                columns: 0
            })
        );
    }
}
