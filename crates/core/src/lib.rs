//! CampusCatalyst domain library.
//!
//! Everything here is wasm-friendly but has no wasm dependency, so the whole
//! crate builds and tests on the host. The browser shell lives in
//! `catalyst_web`, which plugs its localStorage backend into
//! [`store::KeyValueStore`].

pub mod algo;
pub mod auth;
pub mod campaign;
pub mod date;
pub mod error;
pub mod store;
