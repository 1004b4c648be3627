//! Shared primitives for the enrichvs virtual screening toolkit.
//!
//! `enrichvs-core` provides the foundation the other enrichvs crates build on:
//!
//! - **Error types** — [`EnrichError`] and [`Result`] for structured error handling
//! - **Traits** — [`Scored`] and [`Labeled`] for ranked screening records

pub mod error;
pub mod traits;

pub use error::{EnrichError, Result};
pub use traits::*;
