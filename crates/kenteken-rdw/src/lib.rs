//! Client for the RDW open-data vehicle registry.
//!
//! The registry is a Socrata-convention JSON endpoint: exact-match column
//! filters plus a SQL-like `$where` expression with `$limit` and `$order`
//! parameters. This crate wraps it with typed errors, a structured query
//! builder for plate pattern search, and per-row match annotation.

mod client;
mod error;
pub mod normalize;
pub mod query;
mod types;

pub use client::{RdwClient, DEFAULT_BASE_URL, SEARCH_LIMIT};
pub use error::RdwError;
pub use types::{AnnotatedVehicle, SearchOutcome, VehicleRecord};
