//! Search Service Module
//!
//! Answers catalog queries: a case-insensitive substring match on record names,
//! cut into fixed-size pages.
//!
//! ## Pipeline
//! 1. **Coerce**: Raw query parameters become a `SearchQuery` (missing or bad `page` means page 1).
//! 2. **Filter**: A linear pass over the catalog keeps records whose name contains the query text.
//! 3. **Window**: `PageWindow` computes the slice bounds and the display range for the page.
//! 4. **Respond**: The handler serializes the `ResultPage` as JSON.
//!
//! ## Submodules
//! - **`engine`**: Filter pass and result page assembly.
//! - **`handlers`**: HTTP handler for the Axum web server.
//! - **`pagination`**: Page window arithmetic.
//! - **`types`**: Query and response types.

pub mod engine;
pub mod handlers;
pub mod pagination;
pub mod types;
