use std::process::ExitCode;

use clap::Parser;
use console::style;
use typepresets_cli::{build, check, init_tracing, resolve, write_stylesheet, Cli, Command};

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(&cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{} {:#}", style("error:").red().bold(), err);
            ExitCode::FAILURE
        }
    }
}

fn run(command: &Command) -> anyhow::Result<()> {
    match command {
        Command::Build(args) => {
            let css = build(args)?;
            match &args.output {
                Some(path) => {
                    write_stylesheet(path, &css)?;
                    tracing::info!(path = %path.display(), "wrote stylesheet");
                }
                None => print!("{}", css),
            }
        }
        Command::Resolve(args) => print!("{}", resolve(args)?),
        Command::Check { config } => {
            let summary = check(config)?;
            print!("{} {}", style("ok").green().bold(), summary);
        }
    }
    Ok(())
}
