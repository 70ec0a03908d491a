/// Renders a computed value with exactly two decimal places.
///
/// Rounding is the one of Rust's fixed-precision formatting, so a negative
/// value that rounds to zero keeps its sign.
///
/// ## Example
/// ```
/// use calcline::util::format::format_result;
///
/// assert_eq!(format_result(0.0), "0.00");
/// assert_eq!(format_result(500.0 / 3.0), "166.67");
/// assert_eq!(format_result(-120.0), "-120.00");
/// assert_eq!(format_result(10_000_000.0), "10000000.00");
/// ```
#[must_use]
pub fn format_result(value: f64) -> String {
    format!("{value:.2}")
}
