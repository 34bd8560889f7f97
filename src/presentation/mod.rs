//! JS-facing bridges to the application layer.

pub mod wasm_api;

pub use wasm_api::QuadraticGraphApi;
