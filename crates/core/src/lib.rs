//! Domain logic for the kwplan weekly capacity planner.
//!
//! Everything in this crate is pure: no I/O, no database access. The
//! `db` and `api` crates depend on it for shared types, the error
//! taxonomy, input validation, and the two planning computations
//! (per-person weekly workload and ISO week date ranges).

pub mod error;
pub mod types;
pub mod validation;
pub mod week;
pub mod workload;
