use log::trace;

const GREETING: &str = "Hello World";

/// Return a standard greeting.
///
/// Always returns `"Hello World"`. Each call emits one `trace` record through the `log` facade,
/// which an installed logger can observe.
#[must_use]
pub fn hello_world() -> &'static str {
    trace!("hello_world()");
    GREETING
}
