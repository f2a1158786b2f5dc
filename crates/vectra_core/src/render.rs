//! # Text Rendering
//!
//! Renders components the way a default-configured output stream prints a
//! `double`: general notation, six significant digits, no trailing zeros.
//!
//! ```text
//! 1.0           -> 1
//! 0.2672612419  -> 0.267261
//! 1234567.0     -> 1.23457e+06
//! 0.00001       -> 1e-05
//! -NaN          -> -nan
//! ```

use std::fmt;

/// Significant digits printed per component.
pub const PRECISION: usize = 6;

/// Name printed in front of the component list.
pub const TYPE_NAME: &str = "Vector3D";

/// Formats one component in general notation with [`PRECISION`] significant digits.
#[must_use]
pub fn format_component(value: f64) -> String {
    if value.is_nan() {
        return if value.is_sign_negative() { "-nan" } else { "nan" }.to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }
    if value == 0.0 {
        return if value.is_sign_negative() { "-0" } else { "0" }.to_string();
    }

    // The exponent is taken after rounding, so 999999.5 switches to 1e+06.
    let scientific = format!("{:.*e}", PRECISION - 1, value);
    let Some((mantissa, exponent)) = scientific
        .split_once('e')
        .and_then(|(m, e)| e.parse::<i32>().ok().map(|e| (m, e)))
    else {
        return value.to_string();
    };

    #[allow(clippy::cast_possible_wrap)]
    let precision = PRECISION as i32;
    if exponent < -4 || exponent >= precision {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!("{}e{sign}{:02}", trim_fraction(mantissa), exponent.unsigned_abs())
    } else {
        #[allow(clippy::cast_sign_loss)]
        let decimals = (precision - 1 - exponent) as usize;
        trim_fraction(&format!("{value:.decimals$}")).to_string()
    }
}

/// Drops trailing zeros of a fractional part, and the point if nothing is left.
fn trim_fraction(digits: &str) -> &str {
    if digits.contains('.') {
        digits.trim_end_matches('0').trim_end_matches('.')
    } else {
        digits
    }
}

/// Writes `Vector3D(c0, c1, ...)` for the given components.
///
/// An empty slice renders as `Vector3D()`.
///
/// # Errors
///
/// Propagates any error from the underlying writer.
pub fn write_vector<W: fmt::Write + ?Sized>(out: &mut W, components: &[f64]) -> fmt::Result {
    out.write_str(TYPE_NAME)?;
    out.write_char('(')?;
    for (index, component) in components.iter().enumerate() {
        if index > 0 {
            out.write_str(", ")?;
        }
        out.write_str(&format_component(*component))?;
    }
    out.write_char(')')
}

/// Renders components into a new `String`.
#[must_use]
pub fn render_vector(components: &[f64]) -> String {
    let mut line = String::with_capacity(32);
    // Writing into a String cannot fail.
    let _ = write_vector(&mut line, components);
    line
}
