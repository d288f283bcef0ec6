use std::num::{ParseFloatError, ParseIntError};

use clap::{Parser, Subcommand};
use plane_lib::math::{Complex, Point};
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub(crate) enum ParseValueError {
    #[error("expected two comma separated components, got '{0}'")]
    MissingComma(String),
    #[error("invalid number '{text}': {source}")]
    Float {
        text: String,
        source: ParseFloatError,
    },
    #[error("invalid integer '{text}': {source}")]
    Int {
        text: String,
        source: ParseIntError,
    },
}

fn split_pair(arg: &str) -> Result<(&str, &str), ParseValueError> {
    arg.split_once(',')
        .map(|(lhs, rhs)| (lhs.trim(), rhs.trim()))
        .ok_or_else(|| ParseValueError::MissingComma(arg.to_string()))
}

fn parse_float(text: &str) -> Result<f64, ParseValueError> {
    text.parse().map_err(|source| ParseValueError::Float {
        text: text.to_string(),
        source,
    })
}

fn parse_int(text: &str) -> Result<i32, ParseValueError> {
    text.parse().map_err(|source| ParseValueError::Int {
        text: text.to_string(),
        source,
    })
}

/// `RE,IM`, e.g. `3,-2` or `NaN,inf`
pub(crate) fn parse_complex(arg: &str) -> Result<Complex, ParseValueError> {
    let (real, imag) = split_pair(arg)?;
    Ok(Complex::new(parse_float(real)?, parse_float(imag)?))
}

/// `X,Y`, e.g. `2,3`
pub(crate) fn parse_point(arg: &str) -> Result<Point, ParseValueError> {
    let (x, y) = split_pair(arg)?;
    Ok(Point::new(parse_int(x)?, parse_int(y)?))
}

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub(crate) struct Args {
    /// Print a json report instead of plain text
    #[arg(long, global = true)]
    pub json: bool,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub(crate) enum Command {
    Describe(DescribeCommand),
    Add(AddCommand),
    Multiply(MultiplyCommand),
    Conjugate(ConjugateCommand),
    Translate(TranslateCommand),
    Kinematics(KinematicsCommand),
}

/// Prints the text form, classification, magnitude and argument of a complex number
#[derive(Parser, Debug)]
pub(crate) struct DescribeCommand {
    /// Complex number as RE,IM
    #[arg(value_parser = parse_complex, allow_hyphen_values = true)]
    pub value: Complex,
}

/// Adds two complex numbers
#[derive(Parser, Debug)]
pub(crate) struct AddCommand {
    #[arg(value_parser = parse_complex, allow_hyphen_values = true)]
    pub lhs: Complex,
    #[arg(value_parser = parse_complex, allow_hyphen_values = true)]
    pub rhs: Complex,
    /// Accumulate into the left operand instead of building a new value. Same result
    #[arg(long)]
    pub in_place: bool,
}

/// Multiplies two complex numbers
#[derive(Parser, Debug)]
pub(crate) struct MultiplyCommand {
    #[arg(value_parser = parse_complex, allow_hyphen_values = true)]
    pub lhs: Complex,
    #[arg(value_parser = parse_complex, allow_hyphen_values = true)]
    pub rhs: Complex,
    /// Multiply real and imaginary parts independently (legacy in-place behaviour)
    #[arg(long)]
    pub componentwise: bool,
}

/// Conjugates a complex number. Without --fixed the value is returned unchanged
#[derive(Parser, Debug)]
pub(crate) struct ConjugateCommand {
    #[arg(value_parser = parse_complex, allow_hyphen_values = true)]
    pub value: Complex,
    /// Actually negate the imaginary part
    #[arg(long)]
    pub fixed: bool,
}

/// Moves a point by an offset. Coordinates wrap around on overflow
#[derive(Parser, Debug)]
pub(crate) struct TranslateCommand {
    /// Point as X,Y
    #[arg(value_parser = parse_point, allow_hyphen_values = true)]
    pub point: Point,
    #[arg(allow_hyphen_values = true)]
    pub dx: i32,
    #[arg(allow_hyphen_values = true)]
    pub dy: i32,
    /// Fail instead of wrapping around on overflow
    #[arg(long)]
    pub checked: bool,
}

/// Forward kinematics of a two link RR arm: link 1 stands on the base, link 2 hangs off joint 2
#[derive(Parser, Debug)]
#[command(allow_negative_numbers = true)]
pub(crate) struct KinematicsCommand {
    /// Length of link 1 (vertical)
    #[arg(long, default_value_t = 3.)]
    pub l1: f64,
    /// Length of link 2
    #[arg(long, default_value_t = 5.)]
    pub l2: f64,
    /// Base rotation about z0, in degrees
    #[arg(long, default_value_t = 0.)]
    pub theta1: f64,
    /// Joint 2 rotation about z1, in degrees
    #[arg(long, default_value_t = 45.)]
    pub theta2: f64,
}

#[cfg(test)]
mod tests {
    use clap::{CommandFactory as _, Parser as _};
    use plane_lib::math::{Complex, Point};

    use super::{parse_complex, parse_point, Args, Command, ParseValueError};

    #[test]
    fn command_is_consistent() {
        Args::command().debug_assert();
    }

    #[test]
    fn complex_values() {
        assert_eq!(parse_complex("3,-2"), Ok(Complex::new(3., -2.)));
        assert_eq!(parse_complex(" -1.5 , 1e3 "), Ok(Complex::new(-1.5, 1000.)));
        assert!(parse_complex("NaN,0").unwrap().real().is_nan());
        assert_eq!(
            parse_complex("inf,-inf"),
            Ok(Complex::new(f64::INFINITY, f64::NEG_INFINITY))
        );
    }

    #[test]
    fn complex_errors() {
        assert_eq!(
            parse_complex("3"),
            Err(ParseValueError::MissingComma("3".to_string()))
        );
        assert!(matches!(
            parse_complex("3,x"),
            Err(ParseValueError::Float { text, .. }) if text == "x"
        ));
    }

    #[test]
    fn point_values() {
        assert_eq!(parse_point("2,3"), Ok(Point::new(2, 3)));
        assert_eq!(parse_point("-2, -3"), Ok(Point::new(-2, -3)));
        assert!(matches!(
            parse_point("2.5,3"),
            Err(ParseValueError::Int { text, .. }) if text == "2.5"
        ));
        assert!(matches!(
            parse_point("2,99999999999"),
            Err(ParseValueError::Int { .. })
        ));
    }

    #[test]
    fn negative_arguments() {
        let args = Args::try_parse_from(["plane", "translate", "-2,3", "4", "-1"]).unwrap();
        let Command::Translate(command) = args.command else {
            panic!("expected translate");
        };
        assert_eq!(command.point, Point::new(-2, 3));
        assert_eq!((command.dx, command.dy), (4, -1));
        assert!(!command.checked);
    }

    #[test]
    fn global_json_flag() {
        let args =
            Args::try_parse_from(["plane", "multiply", "1,2", "3,4", "--componentwise", "--json"])
                .unwrap();
        assert!(args.json);
        let Command::Multiply(command) = args.command else {
            panic!("expected multiply");
        };
        assert!(command.componentwise);
        assert_eq!(command.lhs, Complex::new(1., 2.));
    }

    #[test]
    fn kinematics_defaults() {
        let args = Args::try_parse_from(["plane", "kinematics", "--theta1", "-30"]).unwrap();
        let Command::Kinematics(command) = args.command else {
            panic!("expected kinematics");
        };
        assert_eq!((command.l1, command.l2), (3., 5.));
        assert_eq!((command.theta1, command.theta2), (-30., 45.));
    }

    #[test]
    fn rejects_malformed_value() {
        assert!(Args::try_parse_from(["plane", "describe", "3;4"]).is_err());
    }
}
