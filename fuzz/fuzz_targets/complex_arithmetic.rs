#![no_main]

use libfuzzer_sys::fuzz_target;
use plane_lib::math::Complex;

/// Bitwise comparison so that NaN results produced the same way compare equal
fn same(lhs: Complex, rhs: Complex) -> bool {
    lhs.real().to_bits() == rhs.real().to_bits() && lhs.imag().to_bits() == rhs.imag().to_bits()
}

// Checks arithmetic identities on arbitrary doubles, NaN and infinities included.
fuzz_target!(|data: (f64, f64, f64, f64)| {
    let (a, b, c, d) = data;
    let x = Complex::new(a, b);
    let y = Complex::new(c, d);

    assert!(same(Complex::add_new(&x, &y), Complex::new(a + c, b + d)));
    assert!(same(
        Complex::multiply_new(&x, &y),
        Complex::new(a * c - b * d, a * d + b * c)
    ));

    let mut sum = x;
    sum.add_in_place(&y);
    assert!(same(sum, Complex::new(a + c, b + d)));

    let mut product = x;
    product.multiply_componentwise(&y);
    assert!(same(product, Complex::new(a * c, b * d)));

    let mut conjugated = x;
    conjugated.conjugate();
    assert!(same(conjugated, x));

    conjugated.conjugate_in_place();
    assert!(same(conjugated, Complex::new(a, -b)));

    assert_eq!(x.is_real(), b == 0.);
    assert_eq!(x.is_imaginary(), a == 0.);

    let text = x.to_string();
    assert!(text.ends_with('i'));
    assert_eq!(text.contains(" - "), b < 0.);
});
