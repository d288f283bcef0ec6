#![no_main]

use libfuzzer_sys::fuzz_target;
use plane_lib::math::Point;

// Wrapping and checked translation agree whenever the checked one succeeds.
fuzz_target!(|data: (i32, i32, i32, i32)| {
    let (x, y, dx, dy) = data;

    let mut wrapping = Point::new(x, y);
    wrapping.translate(dx, dy);
    assert_eq!(wrapping, Point::new(x.wrapping_add(dx), y.wrapping_add(dy)));

    let mut checked = Point::new(x, y);
    match checked.checked_translate(dx, dy) {
        Ok(()) => assert_eq!(checked, wrapping),
        Err(_) => assert_eq!(checked, Point::new(x, y)),
    }

    assert_eq!(wrapping.to_string(), format!("{}, {}", wrapping.x(), wrapping.y()));
});
