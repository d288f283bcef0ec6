//! Forward kinematics with classic Denavit-Hartenberg parameters.

use std::ops::{Add, Div, Mul, Neg};

use super::{Cos, Matrix4, One, Pi, Position, Sin, Two, Zero};

/// Classic DH transform from frame `i-1` to frame `i`:
/// `Rot_z(theta) * Trans_z(d) * Trans_x(a) * Rot_x(alpha)`
pub fn dh_transform<T>(a: T, alpha: T, d: T, theta: T) -> Matrix4<T>
where
    T: Copy
        + Zero
        + One
        + Neg<Output = T>
        + Mul<Output = T>
        + Sin<Output = T>
        + Cos<Output = T>,
{
    let (ct, st) = (theta.cos(), theta.sin());
    let (ca, sa) = (alpha.cos(), alpha.sin());
    [
        [ct, -st * ca, st * sa, a * ct],
        [st, ct * ca, -ct * sa, a * st],
        [T::zero(), sa, ca, d],
        [T::zero(), T::zero(), T::zero(), T::one()],
    ]
    .into()
}

/// Transforms and joint positions of a two link revolute-revolute arm
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArmPose<T> {
    /// Base to joint 2
    pub t01: Matrix4<T>,
    /// Joint 2 to end effector
    pub t12: Matrix4<T>,
    /// Base to end effector
    pub t02: Matrix4<T>,
    pub joint: Position<T>,
    pub end_effector: Position<T>,
}

/// Two link RR arm. Link 1 of length `l1` stands vertically on the base and
/// rotates by `theta1` about the base z axis, link 2 of length `l2` rotates
/// by `theta2` about the joint 2 axis. Angles are in radians.
pub fn forward_kinematics<T>(l1: T, l2: T, theta1: T, theta2: T) -> ArmPose<T>
where
    T: Copy
        + Zero
        + One
        + Two
        + Pi
        + Neg<Output = T>
        + Add<Output = T>
        + Mul<Output = T>
        + Div<Output = T>
        + Sin<Output = T>
        + Cos<Output = T>,
{
    let t01 = dh_transform(T::zero(), T::pi() / T::two(), l1, theta1);
    let t12 = dh_transform(l2, T::zero(), T::zero(), theta2);
    let t02 = t01 * t12;
    ArmPose {
        t01,
        t12,
        t02,
        joint: t01.transform(Position::origin()),
        end_effector: t02.transform(Position::origin()),
    }
}
