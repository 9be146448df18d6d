// Library target for integration tests and criterion benchmarks.
// The binary entry point is main.rs; it re-declares the quiz core alongside the
// terminal UI, which is not part of the library.

pub mod engine;
pub mod session;
pub mod store;
pub mod vocab;
