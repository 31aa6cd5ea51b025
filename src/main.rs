mod cli;

use cli::CommandLine;
use colored::Colorize;
use std::error::Error;
use std::process::ExitCode;
use subnet_calc::{config, output};

fn main() -> ExitCode {
    // Do as little as possible in main.rs as it can't contain any tests
    let env_file = config::load_env();
    let commands = CommandLine::parse_args();
    if let Err(e) = config::init_logging(commands.verbose) {
        eprintln!("{} logging disabled: {e}", "warning:".yellow());
    }
    log::info!("#Start main()");
    if let Some(path) = env_file {
        log::debug!("loaded {}", path.display());
    }

    match run(&commands) {
        Ok(out) => {
            println!("{out}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::debug!("failed: {e:?}");
            eprintln!("{} {e}", "error:".red().bold());
            ExitCode::FAILURE
        }
    }
}

fn run(commands: &CommandLine) -> Result<String, Box<dyn Error>> {
    let subnet = commands.request().build()?;
    output::render(&subnet, commands.format)
}
