//! Port traits (interfaces) for external dependencies
//!
//! These traits define the boundary between the replacement logic and the
//! filesystem. Implementations live in the `adapters` module; tests swap in
//! mocks to simulate missing files and I/O failures.

mod text_store;

pub use text_store::TextStore;

#[cfg(test)]
pub(crate) use text_store::MockTextStore;
