use std::fmt::Write;

/// Above this magnitude every f64 is already an integer.
const INTEGRAL: f64 = 4_503_599_627_370_496.0;

/// Round to `digits` decimal digits; negative digits round to 10^|digits|.
///
/// Values are returned unchanged when they carry no digits past the requested
/// one, including when scaling them would overflow.
pub(crate) fn round_to(value: f64, digits: i32) -> f64 {
    if !value.is_finite() {
        return value;
    }
    if digits >= 0 {
        let factor = 10f64.powi(digits);
        let scaled = value * factor;
        if !scaled.is_finite() || scaled.abs() >= INTEGRAL {
            return value;
        }
        scaled.round() / factor
    } else {
        let factor = 10f64.powi(digits.saturating_neg());
        if !factor.is_finite() {
            return 0.;
        }
        (value / factor).round() * factor
    }
}

pub(crate) fn write_number(out: &mut String, value: f64, digits: Option<i32>) {
    let value = match digits {
        Some(d) => round_to(value, d),
        None => value,
    };
    // Writing to a String cannot fail.
    let _ = write!(out, "{}", value);
}

/// Join `items` with commas inside a pair of parentheses.
pub(crate) fn write_list<T>(
    out: &mut String,
    items: &[T],
    mut write_item: impl FnMut(&mut String, &T),
) {
    out.push('(');
    for (index, item) in items.iter().enumerate() {
        if index > 0 {
            out.push(',');
        }
        write_item(out, item);
    }
    out.push(')');
}
