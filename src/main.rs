/*!
 * Command-line interface for aipt
 */

use std::io;
use std::process::ExitCode;

use clap::{CommandFactory, Parser};
use env_logger::Env;

use aipt::config::{Args, Config};

fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };

    env_logger::Builder::from_env(Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose);

    if let Some(shell) = args.generate {
        clap_complete::generate(shell, &mut Args::command(), "ai-pt", &mut io::stdout());
        return ExitCode::SUCCESS;
    }

    let show_config = args.show_config;
    let config = Config::from_args(args);

    if show_config {
        println!("{}", config.describe());
        return ExitCode::SUCCESS;
    }

    match aipt::run(config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
