//! # Game Mathematics
//!
//! Interpolation helpers for sprite slides and animation playback.

/// Linear interpolation between `a` and `b`; `t` is clamped to `[0, 1]`.
///
/// # Examples
///
/// ```
/// use block_pusher::lerp;
///
/// assert_eq!(lerp(0.0, 48.0, 0.5), 24.0);
/// assert_eq!(lerp(0.0, 48.0, 2.0), 48.0);
/// ```
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    a + (b - a) * t
}

/// Maps step `n` of a forward-then-back sweep over `len` items to an index.
///
/// With `len = 3` the sequence is `0, 1, 2, 1, 0` and then stays at 0.
pub fn ping_pong_index(n: usize, len: usize) -> usize {
    if len <= 1 {
        return 0;
    }
    let last = len - 1;
    match n {
        n if n <= last => n,
        n if n <= 2 * last => 2 * last - n,
        _ => 0,
    }
}
