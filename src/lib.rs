//! Catalog Search Library
//!
//! An in-memory product catalog served over HTTP with case-insensitive name search
//! and fixed-size pagination. The binary (`main.rs`) loads the catalog, then serves it.
//!
//! ## Modules
//! - **`catalog`**: Loads the CSV source once into an immutable, shareable `Catalog`.
//! - **`search`**: Name filtering, page window arithmetic and the HTTP handler.
//! - **`server`**: Router construction, response headers and graceful shutdown.
//! - **`config`**: Command line / environment settings.

pub mod catalog;
pub mod config;
pub mod search;
pub mod server;
