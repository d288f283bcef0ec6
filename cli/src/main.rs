mod args;
mod report;

use std::{io::Write, process::ExitCode};

use args::{Args, Command};
use clap::Parser;
use plane_lib::math::{forward_kinematics, Complex, PointError};
use report::Report;
use thiserror::Error;

#[derive(Debug, Error)]
enum CliError {
    #[error(transparent)]
    Point(#[from] PointError<i32>),
    #[error("failed to encode report: {0}")]
    Json(#[from] serde_json::Error),
}

fn run(command: Command) -> Result<Report, CliError> {
    log::debug!("evaluating {:?}", command);
    let report = match command {
        Command::Describe(command) => Report::describe(command.value),
        Command::Add(command) => {
            if command.in_place {
                let mut value = command.lhs;
                value.add_in_place(&command.rhs);
                Report::complex("add_in_place", value)
            } else {
                Report::complex("add_new", Complex::add_new(&command.lhs, &command.rhs))
            }
        }
        Command::Multiply(command) => {
            if command.componentwise {
                log::info!("multiplying component-wise, the result is not the complex product");
                let mut value = command.lhs;
                value.multiply_componentwise(&command.rhs);
                Report::complex("multiply_componentwise", value)
            } else {
                Report::complex(
                    "multiply_new",
                    Complex::multiply_new(&command.lhs, &command.rhs),
                )
            }
        }
        Command::Conjugate(command) => {
            let mut value = command.value;
            if command.fixed {
                value.conjugate_in_place();
                Report::complex("conjugate_in_place", value)
            } else {
                value.conjugate();
                Report::complex("conjugate", value)
            }
        }
        Command::Translate(command) => {
            let mut point = command.point;
            if command.checked {
                point.checked_translate(command.dx, command.dy)?;
                Report::point("checked_translate", point)
            } else {
                point.translate(command.dx, command.dy);
                Report::point("translate", point)
            }
        }
        Command::Kinematics(command) => Report::kinematics(forward_kinematics(
            command.l1,
            command.l2,
            command.theta1.to_radians(),
            command.theta2.to_radians(),
        )),
    };
    Ok(report)
}

fn render(report: &Report, json: bool) -> Result<String, CliError> {
    if json {
        Ok(serde_json::to_string_pretty(report)?)
    } else {
        Ok(report.to_string())
    }
}

/// Failures go to `stderr` once, as a single `error: ...` line
fn execute(args: Args, stdout: &mut impl Write, stderr: &mut impl Write) -> ExitCode {
    let (result, code) = match run(args.command).and_then(|report| render(&report, args.json)) {
        Ok(output) => (writeln!(stdout, "{}", output), ExitCode::SUCCESS),
        Err(err) => (writeln!(stderr, "error: {}", err), ExitCode::FAILURE),
    };
    match result {
        Ok(()) => code,
        Err(_) => ExitCode::FAILURE,
    }
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    execute(
        Args::parse(),
        &mut std::io::stdout(),
        &mut std::io::stderr(),
    )
}
