mod complex;
mod kinematics;
mod matrix;
mod point;
mod traits;

pub use complex::*;
pub use kinematics::*;
pub use matrix::*;
pub use point::*;
pub use traits::*;
