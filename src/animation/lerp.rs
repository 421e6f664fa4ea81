/// Interpolation contract for animated value types.
pub trait Lerp: Sized {
    /// Interpolate from `a` to `b` with factor `t`; `t` is not clamped.
    ///
    /// Implementations must return exactly `a` at `t == 0` and exactly `b` at `t == 1`.
    fn lerp(a: &Self, b: &Self, t: f64) -> Self;
}

impl Lerp for f64 {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        // `a + 0 * t` keeps flat segments flat; `t == 1` is pinned to `b`.
        if t == 1.0 { *b } else { a + (b - a) * t }
    }
}
