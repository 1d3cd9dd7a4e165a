//! Command-line arguments: `perfect-maze ROWS COLUMNS [SEED]`.

use std::ffi::OsString;

use clap::error::ErrorKind;
use clap::{Arg, Command, value_parser};
use log::debug;

use maze::config::parse_seed;
use maze::error::MazeError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Args {
    pub rows: usize,
    pub columns: usize,
    pub seed: Option<u64>,
}

#[derive(Debug)]
pub enum Invocation {
    Generate(Args),
    /// `--help` or `--version`: clap has the text ready to print.
    Info(clap::Error),
}

fn make_args_parser() -> Command {
    Command::new("perfect-maze")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Carves a perfect maze and draws the path from its top-left to its bottom-right corner")
        .arg(
            Arg::new("rows")
                .help("Number of rows")
                .required(true)
                .value_parser(value_parser!(usize)),
        )
        .arg(
            Arg::new("columns")
                .help("Number of columns")
                .required(true)
                .value_parser(value_parser!(usize)),
        )
        .arg(
            Arg::new("seed")
                .help("Seed for the random carving; taken from MAZE_SEED or the clock if absent")
                .allow_negative_numbers(true)
                .value_parser(parse_seed),
        )
}

/// Parses a full argument list, program name first.
///
/// Every malformed command line collapses into
/// [`MazeError::InvalidInvocation`]; clap's own explanation is only logged.
pub fn parse_args<I, T>(args: I) -> Result<Invocation, MazeError>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let matches = match make_args_parser().try_get_matches_from(args) {
        Ok(matches) => matches,
        Err(e) => {
            return match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => Ok(Invocation::Info(e)),
                _ => {
                    debug!("Rejected command line: {}", e);
                    Err(MazeError::InvalidInvocation)
                }
            };
        }
    };

    let rows = *matches
        .get_one::<usize>("rows")
        .ok_or(MazeError::InvalidInvocation)?;
    let columns = *matches
        .get_one::<usize>("columns")
        .ok_or(MazeError::InvalidInvocation)?;
    let seed = matches.get_one::<u64>("seed").copied();

    Ok(Invocation::Generate(Args {
        rows,
        columns,
        seed,
    }))
}
