//! Shared error type for the nucleo sequence crates.
//!
//! [`NucleoError`] and [`Result`] are returned by every fallible operation in
//! `nucleo-seq`.

pub mod error;

pub use error::{NucleoError, Result};
