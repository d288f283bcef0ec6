use std::fmt::Display;

use plane_lib::{
    math::{ArmPose, Complex, Matrix4, Point, Position},
    utils::DecimalText as _,
};
use serde::Serialize;

/// Outcome of a single command, printable as text or json
#[derive(Debug, Serialize, PartialEq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub(crate) enum Report {
    Description {
        text: String,
        real: f64,
        imag: f64,
        is_real: bool,
        is_imaginary: bool,
        magnitude: f64,
        argument: f64,
    },
    Complex {
        operation: &'static str,
        text: String,
        real: f64,
        imag: f64,
    },
    Point {
        operation: &'static str,
        text: String,
        x: i32,
        y: i32,
    },
    Kinematics {
        t01: [[f64; 4]; 4],
        t12: [[f64; 4]; 4],
        t02: [[f64; 4]; 4],
        joint: [f64; 3],
        end_effector: [f64; 3],
    },
}

fn position(value: Position) -> [f64; 3] {
    [value.x(), value.y(), value.z()]
}

fn write_matrix(
    f: &mut std::fmt::Formatter<'_>,
    title: &str,
    rows: &[[f64; 4]; 4],
) -> std::fmt::Result {
    writeln!(f, "{}:", title)?;
    for row in rows {
        writeln!(
            f,
            "{:>10.4}{:>10.4}{:>10.4}{:>10.4}",
            row[0], row[1], row[2], row[3]
        )?;
    }
    Ok(())
}

fn write_position(
    f: &mut std::fmt::Formatter<'_>,
    title: &str,
    value: &[f64; 3],
) -> std::fmt::Result {
    write!(
        f,
        "{:<14}({:.4}, {:.4}, {:.4})",
        title, value[0], value[1], value[2]
    )
}

impl Report {
    pub(crate) fn describe(value: Complex) -> Self {
        Self::Description {
            text: value.to_string(),
            real: *value.real(),
            imag: *value.imag(),
            is_real: value.is_real(),
            is_imaginary: value.is_imaginary(),
            magnitude: value.magnitude(),
            argument: value.argument(),
        }
    }

    pub(crate) fn complex(operation: &'static str, value: Complex) -> Self {
        Self::Complex {
            operation,
            text: value.to_string(),
            real: *value.real(),
            imag: *value.imag(),
        }
    }

    pub(crate) fn point(operation: &'static str, value: Point) -> Self {
        Self::Point {
            operation,
            text: value.to_string(),
            x: value.x(),
            y: value.y(),
        }
    }

    pub(crate) fn kinematics(pose: ArmPose<f64>) -> Self {
        let rows = |m: Matrix4| *m.rows();
        Self::Kinematics {
            t01: rows(pose.t01),
            t12: rows(pose.t12),
            t02: rows(pose.t02),
            joint: position(pose.joint),
            end_effector: position(pose.end_effector),
        }
    }
}

impl Display for Report {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Report::Description {
                text,
                is_real,
                is_imaginary,
                magnitude,
                argument,
                ..
            } => {
                writeln!(f, "value:        {}", text)?;
                writeln!(f, "is real:      {}", is_real)?;
                writeln!(f, "is imaginary: {}", is_imaginary)?;
                writeln!(f, "magnitude:    {}", magnitude.decimal_text())?;
                write!(f, "argument:     {}", argument.decimal_text())
            }
            Report::Complex { text, .. } | Report::Point { text, .. } => f.write_str(text),
            Report::Kinematics {
                t01,
                t12,
                t02,
                joint,
                end_effector,
            } => {
                write_matrix(f, "T01 (base to joint 2)", t01)?;
                write_matrix(f, "T12 (joint 2 to end effector)", t12)?;
                write_matrix(f, "T02 (base to end effector)", t02)?;
                write_position(f, "joint 2:", joint)?;
                writeln!(f)?;
                write_position(f, "end effector:", end_effector)
            }
        }
    }
}
