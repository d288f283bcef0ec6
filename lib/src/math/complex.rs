use std::{
    fmt::Display,
    ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub},
};

use crate::utils::{DecimalText, Float};

use super::{Atan2, Sqr, Sqrt, Zero};

/// Complex number `real + imag * i`.
///
/// The in-place operations keep the behaviour callers of this type already
/// depend on, two known defects included:
/// - [`Complex::multiply_componentwise`] multiplies the parts independently
/// - [`Complex::conjugate`] does not change the value
///
/// [`Complex::multiply_new`] and [`Complex::conjugate_in_place`] are the
/// mathematically correct operations.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Complex<T = Float> {
    real: T,
    imag: T,
}

impl<T> From<(T, T)> for Complex<T> {
    fn from(value: (T, T)) -> Self {
        Self {
            real: value.0,
            imag: value.1,
        }
    }
}

impl<T> Complex<T> {
    pub fn new(real: T, imag: T) -> Self {
        Self { real, imag }
    }

    pub fn real(&self) -> &T {
        &self.real
    }

    pub fn imag(&self) -> &T {
        &self.imag
    }

    pub fn set_real(&mut self, real: T) {
        self.real = real
    }

    pub fn set_imag(&mut self, imag: T) {
        self.imag = imag
    }

    /// Imaginary part is exactly zero (`-0.0` included, no tolerance)
    pub fn is_real(&self) -> bool
    where
        T: PartialEq + Zero,
    {
        self.imag == T::zero()
    }

    /// Real part is exactly zero, i.e. the number lies on the imaginary axis
    pub fn is_imaginary(&self) -> bool
    where
        T: PartialEq + Zero,
    {
        self.real == T::zero()
    }

    pub fn add_in_place(&mut self, other: &Complex<T>)
    where
        T: AddAssign + Clone,
    {
        self.real += other.real.clone();
        self.imag += other.imag.clone();
    }

    /// `real *= other.real; imag *= other.imag`.
    ///
    /// This is NOT complex multiplication. Use [`Complex::multiply_new`] or
    /// `*` for the product.
    pub fn multiply_componentwise(&mut self, other: &Complex<T>)
    where
        T: MulAssign + Clone,
    {
        self.real *= other.real.clone();
        self.imag *= other.imag.clone();
    }

    /// Leaves the value unchanged. Use [`Complex::conjugate_in_place`] to
    /// actually conjugate.
    pub fn conjugate(&mut self) {}

    /// `a + bi` becomes `a - bi`
    pub fn conjugate_in_place(&mut self)
    where
        T: Neg<Output = T> + Clone,
    {
        self.imag = -self.imag.clone();
    }

    /// Angle from the positive real axis, in range -PI..=PI
    pub fn argument(self) -> <T as Atan2>::Output
    where
        T: Atan2,
    {
        self.imag.atan2(self.real)
    }

    pub fn magnitude(self) -> <<<T as Sqr>::Output as Add>::Output as Sqrt>::Output
    where
        T: Sqr,
        <T as Sqr>::Output: Add,
        <<T as Sqr>::Output as Add>::Output: Sqrt,
    {
        (self.real.sqr() + self.imag.sqr()).sqrt()
    }

    pub fn add_new(a: &Complex<T>, b: &Complex<T>) -> Complex<T>
    where
        T: Add<Output = T> + Clone,
    {
        Complex {
            real: a.real.clone() + b.real.clone(),
            imag: a.imag.clone() + b.imag.clone(),
        }
    }

    pub fn multiply_new(a: &Complex<T>, b: &Complex<T>) -> Complex<T>
    where
        T: Add<Output = T> + Sub<Output = T> + Mul<Output = T> + Clone,
    {
        Complex {
            real: a.real.clone() * b.real.clone() - a.imag.clone() * b.imag.clone(),
            imag: a.real.clone() * b.imag.clone() + a.imag.clone() * b.real.clone(),
        }
    }
}

impl<T> Add for Complex<T>
where
    T: Add<Output = T> + Clone,
{
    type Output = Complex<T>;

    fn add(self, rhs: Self) -> Self::Output {
        Complex::add_new(&self, &rhs)
    }
}

impl<T> AddAssign for Complex<T>
where
    T: AddAssign + Clone,
{
    fn add_assign(&mut self, rhs: Self) {
        self.add_in_place(&rhs)
    }
}

impl<T> Mul for Complex<T>
where
    T: Add<Output = T> + Sub<Output = T> + Mul<Output = T> + Clone,
{
    type Output = Complex<T>;

    fn mul(self, rhs: Self) -> Self::Output {
        Complex::multiply_new(&self, &rhs)
    }
}

/// `3.0 + 2.0i`, or `3.0 - -2.0i` when the imaginary part is negative: the
/// sign is printed twice.
impl<T> Display for Complex<T>
where
    T: DecimalText + PartialOrd + Zero,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let sign = if self.imag < T::zero() { '-' } else { '+' };
        write!(
            f,
            "{} {} {}i",
            self.real.decimal_text(),
            sign,
            self.imag.decimal_text()
        )
    }
}
