//! Catalog Module
//!
//! Holds the product catalog the search endpoint answers queries against.
//!
//! ## Lifecycle
//! 1. **Load**: The CSV source is read exactly once at startup, before the listener is bound.
//! 2. **Share**: The resulting `Catalog` is wrapped in an `Arc` and handed to the router.
//! 3. **Read**: Request tasks only ever borrow it; nothing mutates it after the load.
//!
//! ## Submodules
//! - **`loader`**: CSV parsing, positional column mapping and load errors.
//! - **`types`**: The `Record` row type and the `Catalog` container.

pub mod loader;
pub mod types;
