//! Science library for reproducible research.

mod arithmetic;
pub use arithmetic::add;

mod hello;
pub use hello::hello_world;

/// Version of this library, as recorded in its manifest.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
