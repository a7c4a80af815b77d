//! Entry point for nvcs.
use std::process::ExitCode;

use clap::{CommandFactory, Parser};
use nvcs::{
    cli::{execute_cli_command, CliExit, ParsedCommand, SwitcherArgs},
    lib::telemetry,
};

fn main() -> ExitCode {
    match bootstrap() {
        Ok(code) => code,
        Err(exit) => exit.report(),
    }
}

fn bootstrap() -> Result<ExitCode, CliExit> {
    telemetry::init_tracing().map_err(CliExit::from_error)?;
    let args = SwitcherArgs::parse();
    let command = args.into_command().map_err(CliExit::from_error)?;

    match command {
        ParsedCommand::Help => {
            SwitcherArgs::command()
                .print_help()
                .map_err(CliExit::from_error)?;
            Ok(ExitCode::FAILURE)
        }
        ParsedCommand::Run(profile, command) => {
            execute_cli_command(&profile, command).map_err(CliExit::from_error)?;
            Ok(ExitCode::SUCCESS)
        }
    }
}
