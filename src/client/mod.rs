//! Client module - HTTP access to the activities backend
//!
//! Native builds use reqwest behind the `no-wasm` feature; the board only
//! sees the [`ActivityApi`](crate::interface::ActivityApi) trait.

#[cfg(feature = "no-wasm")]
pub mod request;

#[cfg(feature = "no-wasm")]
pub use request::NoWasmClient;
