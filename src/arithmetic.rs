use log::trace;

/// Add two numbers.
///
/// Plain IEEE-754 addition: infinities and NaN propagate as usual, and
/// `add(1e308, 1e308)` overflows to `f64::INFINITY`.
///
/// The result depends only on the arguments. Each call emits one `trace` record through the `log`
/// facade, which an installed logger can observe.
#[must_use]
pub fn add(a: f64, b: f64) -> f64 {
    trace!("add({a:?}, {b:?})");
    a + b
}
