pub mod app;
pub mod client;
pub mod config;
pub mod error;
pub mod interface;
pub mod model;
pub mod storage;

#[cfg(feature = "no-wasm")]
pub mod console;

#[cfg(feature = "no-wasm")]
pub use client::request::{NoWasmClient, create_client};
#[cfg(feature = "wasm")]
pub use client::gloo::WasmClient;
