use std::fmt::{Display, LowerExp};

pub type Float = f64;

/// Shortest round-trip text of a floating point number with at least one
/// fractional digit (`3.0`). Outside of `[1e-3, 1e7)` scientific notation
/// with an upper case `E` is used (`1.0E7`, `1.5E-5`).
pub trait DecimalText {
    fn decimal_text(&self) -> String;
}

impl DecimalText for f32 {
    fn decimal_text(&self) -> String {
        render(
            *self,
            self.is_nan(),
            self.is_infinite(),
            self.is_sign_negative(),
            *self == 0. || (1e-3..1e7).contains(&self.abs()),
        )
    }
}

impl DecimalText for f64 {
    fn decimal_text(&self) -> String {
        render(
            *self,
            self.is_nan(),
            self.is_infinite(),
            self.is_sign_negative(),
            *self == 0. || (1e-3..1e7).contains(&self.abs()),
        )
    }
}

fn render<T: Display + LowerExp>(
    value: T,
    nan: bool,
    infinite: bool,
    negative: bool,
    plain: bool,
) -> String {
    if nan {
        return "NaN".to_string();
    }
    if infinite {
        return if negative { "-Infinity" } else { "Infinity" }.to_string();
    }

    if plain {
        with_fraction(value.to_string())
    } else {
        // `{:e}` yields the shortest mantissa, e.g. `1e7` or `-1.5e-5`
        let text = format!("{:e}", value);
        match text.split_once('e') {
            Some((mantissa, exponent)) => {
                format!("{}E{}", with_fraction(mantissa.to_string()), exponent)
            }
            None => with_fraction(text),
        }
    }
}

fn with_fraction(mut digits: String) -> String {
    if !digits.contains('.') {
        digits.push_str(".0");
    }
    digits
}
