//! Choosing between the preferred and the fallback color notation.
//!
//! Whether the host can display OKLCH is answered by an outside capability
//! check. The engine never asks the environment itself; it is handed either
//! the check or its answer.

/// Return `preferred` if the check says it is supported, else `fallback`.
///
/// # Examples
///
/// ```
/// use hueramp_palette::support::color_with_fallback;
///
/// assert_eq!(color_with_fallback("oklch", "hsl", || true), "oklch");
/// assert_eq!(color_with_fallback("oklch", "hsl", || false), "hsl");
/// ```
pub fn color_with_fallback<T>(preferred: T, fallback: T, supports_preferred: impl FnOnce() -> bool) -> T {
    if supports_preferred() { preferred } else { fallback }
}
