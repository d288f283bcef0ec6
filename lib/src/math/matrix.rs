use std::ops::{Add, Mul};

use crate::utils::Float;

use super::{One, Zero};

/// Position in 3D space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Position<T = Float> {
    x: T,
    y: T,
    z: T,
}

impl<T> From<(T, T, T)> for Position<T> {
    fn from(value: (T, T, T)) -> Self {
        Self {
            x: value.0,
            y: value.1,
            z: value.2,
        }
    }
}

impl<T> Position<T> {
    pub fn origin() -> Self
    where
        T: Zero,
    {
        Self {
            x: T::zero(),
            y: T::zero(),
            z: T::zero(),
        }
    }

    pub fn x(self) -> T {
        self.x
    }

    pub fn y(self) -> T {
        self.y
    }

    pub fn z(self) -> T {
        self.z
    }
}

/// Row-major 4x4 homogeneous transform
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Matrix4<T = Float> {
    rows: [[T; 4]; 4],
}

impl<T> From<[[T; 4]; 4]> for Matrix4<T> {
    fn from(rows: [[T; 4]; 4]) -> Self {
        Self { rows }
    }
}

impl<T> Matrix4<T> {
    pub fn identity() -> Self
    where
        T: Zero + One,
    {
        let e = |row: usize, col: usize| if row == col { T::one() } else { T::zero() };
        Self {
            rows: std::array::from_fn(|row| std::array::from_fn(|col| e(row, col))),
        }
    }

    pub fn rows(&self) -> &[[T; 4]; 4] {
        &self.rows
    }

    /// Applies the transform to `position` taken as `(x, y, z, 1)`
    pub fn transform(&self, position: Position<T>) -> Position<T>
    where
        T: Copy + Add<Output = T> + Mul<Output = T>,
    {
        let row = |r: [T; 4]| {
            r[0] * position.x + r[1] * position.y + r[2] * position.z + r[3]
        };
        Position {
            x: row(self.rows[0]),
            y: row(self.rows[1]),
            z: row(self.rows[2]),
        }
    }
}

impl<T> Mul for Matrix4<T>
where
    T: Copy + Zero + Add<Output = T> + Mul<Output = T>,
{
    type Output = Matrix4<T>;

    fn mul(self, rhs: Self) -> Self::Output {
        Matrix4 {
            rows: std::array::from_fn(|row| {
                std::array::from_fn(|col| {
                    (0..4).fold(T::zero(), |acc, k| {
                        acc + self.rows[row][k] * rhs.rows[k][col]
                    })
                })
            }),
        }
    }
}
