use std::fmt::{Debug, Display};

use thiserror::Error;

use super::{CheckedAdd, WrappingAdd};

/// Point on an integer grid.
///
/// Unlike [`super::Complex`] there is no default value: a point is always
/// created with explicit coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Point<T = i32> {
    x: T,
    y: T,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PointError<T> {
    #[error("translating ({x}, {y}) by ({dx}, {dy}) overflows")]
    Overflow { x: T, y: T, dx: T, dy: T },
}

impl<T> From<(T, T)> for Point<T> {
    fn from(value: (T, T)) -> Self {
        Self {
            x: value.0,
            y: value.1,
        }
    }
}

impl<T> Point<T> {
    pub fn new(x: T, y: T) -> Self {
        Self { x, y }
    }

    pub fn x(self) -> T {
        self.x
    }

    pub fn y(self) -> T {
        self.y
    }

    pub fn set_location(&mut self, x: T, y: T) {
        self.x = x;
        self.y = y;
    }

    /// Moves the point by `(dx, dy)`. Coordinates wrap around on overflow.
    pub fn translate(&mut self, dx: T, dy: T)
    where
        T: WrappingAdd<Output = T> + CheckedAdd<Output = T> + Copy + Display,
    {
        if self.x.checked_add(dx).is_none() || self.y.checked_add(dy).is_none() {
            log::trace!(
                "point ({}, {}) wraps around while translating by ({}, {})",
                self.x,
                self.y,
                dx,
                dy
            );
        }
        self.set_location(self.x.wrapping_add(dx), self.y.wrapping_add(dy))
    }

    /// Same as [`Point::translate`] but fails instead of wrapping around.
    /// The point is left unchanged on error.
    pub fn checked_translate(&mut self, dx: T, dy: T) -> Result<(), PointError<T>>
    where
        T: CheckedAdd<Output = T> + Copy + Debug + Display,
    {
        match (self.x.checked_add(dx), self.y.checked_add(dy)) {
            (Some(x), Some(y)) => {
                self.set_location(x, y);
                Ok(())
            }
            _ => Err(PointError::Overflow {
                x: self.x,
                y: self.y,
                dx,
                dy,
            }),
        }
    }
}

impl<T: Display> Display for Point<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}, {}", self.x, self.y)
    }
}
