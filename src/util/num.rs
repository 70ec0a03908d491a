/// Truncates a float towards zero into an `i64`.
///
/// Values outside the `i64` range saturate at `i64::MIN`/`i64::MAX`, and NaN
/// becomes `0`.
///
/// ## Example
/// ```
/// use calcline::util::num::truncate_to_i64;
///
/// assert_eq!(truncate_to_i64(7.9), 7);
/// assert_eq!(truncate_to_i64(-7.9), -7);
/// assert_eq!(truncate_to_i64(0.5), 0);
/// assert_eq!(truncate_to_i64(f64::NAN), 0);
/// assert_eq!(truncate_to_i64(1e300), i64::MAX);
/// ```
#[allow(clippy::cast_possible_truncation)]
#[must_use]
pub const fn truncate_to_i64(value: f64) -> i64 {
    value as i64
}
