//! Numeric helpers shared by the scoring stages

/// Clamp without panicking on NaN or inverted bounds (lower bound wins).
/// NaN lands on `max`.
pub(crate) fn clamp(n: f64, min: f64, max: f64) -> f64 {
    min.max(max.min(n))
}

/// Non-finite values become 0
pub(crate) fn safe_num(n: f64) -> f64 {
    if n.is_finite() {
        n
    } else {
        0.0
    }
}

/// Round half toward +inf (2.5 -> 3, -2.5 -> -2)
pub(crate) fn round_half_up(n: f64) -> i32 {
    (n + 0.5).floor() as i32
}

/// Round to one decimal, half toward +inf
pub(crate) fn round1(n: f64) -> f64 {
    let scaled = n * 10.0;
    if !scaled.is_finite() {
        return n;
    }
    (scaled + 0.5).floor() / 10.0
}
