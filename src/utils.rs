// Utility functions for report formatting

/// Rank prefixes for the top deficits, highest first.
pub const RANK_LABELS: [&str; 3] = ["HIGHEST", "2ND HIGHEST", "3RD HIGHEST"];

/// Формирует сумму с меткой валюты без пробела: `SGD120`.
pub fn format_amount<T: std::fmt::Display>(currency: &str, amount: T) -> String {
    format!("{}{}", currency, amount)
}

/// Renders a percentage as a decimal float: integral values keep one fractional digit.
/// Magnitudes from 1e16 up or below 1e-4 switch to exponent form with a signed,
/// two-digit exponent (`1e+16`, `2.5e-05`).
pub fn format_percentage(value: f64) -> String {
    if !value.is_finite() {
        return format!("{}", value);
    }
    let magnitude = value.abs();
    if magnitude != 0.0 && !(1e-4..1e16).contains(&magnitude) {
        return format_exponent(value);
    }
    if value.fract() == 0.0 {
        format!("{:.1}", value)
    } else {
        format!("{}", value)
    }
}

fn format_exponent(value: f64) -> String {
    let shortest = format!("{:e}", value);
    match shortest.split_once('e') {
        Some((mantissa, exponent)) => {
            let (sign, digits) = match exponent.strip_prefix('-') {
                Some(digits) => ('-', digits),
                None => ('+', exponent),
            };
            format!("{}e{}{:0>2}", mantissa, sign, digits)
        }
        None => shortest,
    }
}
