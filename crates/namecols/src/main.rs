use std::io::{self, BufWriter};
use std::process::ExitCode;

use anyhow::Context;
use clap::{error::ErrorKind, CommandFactory, Parser};
use namecols::{config, logging, run, Cli, Config, RunError};
use namecols_input::{RealEnv, StdinSource};

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.verbose, cli.quiet);

    match try_main(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            let no_input = err
                .downcast_ref::<RunError>()
                .is_some_and(RunError::is_no_input);
            if no_input {
                Cli::command()
                    .error(
                        ErrorKind::MissingRequiredArgument,
                        "no DIRECTORY given and stdin is a terminal",
                    )
                    .exit();
            }
            eprintln!("namecols: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn try_main(cli: &Cli) -> anyhow::Result<()> {
    let config = Config::from_cli(cli, &RealEnv, config::terminal_width());
    tracing::debug!(?config, "resolved configuration");

    let stdout = io::stdout();
    let stderr = io::stderr();
    let mut out = BufWriter::new(stdout.lock());
    let mut err = stderr.lock();

    let context = match &config.directory {
        Some(dir) => format!("summarizing {}", dir.display()),
        None => "summarizing filenames from stdin".to_string(),
    };
    run(&config, StdinSource::new(), &mut out, &mut err).with_context(|| context)?;
    Ok(())
}
