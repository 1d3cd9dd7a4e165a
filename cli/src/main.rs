use std::process;

use cli::args::{self, Invocation};
use maze::config::Config;

fn main() {
    let env = env_logger::Env::new()
        .filter("MAZE_LOG")
        .write_style("MAZE_LOG_STYLE");
    env_logger::init_from_env(env);

    let config = Config::from_env();
    log::debug!("Configuration: {:?}", config);

    let args = match args::parse_args(std::env::args_os()) {
        Ok(Invocation::Generate(args)) => args,
        Ok(Invocation::Info(info)) => {
            let _ = info.print();
            return;
        }
        Err(e) => {
            eprintln!("{}", e);
            process::exit(1);
        }
    };

    match cli::run::run(&args, &config) {
        Ok(maze) => print!("{}", maze),
        Err(e) => {
            eprintln!("{}", e);
            process::exit(1);
        }
    }
}
