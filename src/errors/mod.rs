//! Error types for the calc front end.
//!
//! This module defines the diagnostic produced when parsing rejects an
//! input. It includes:
//!
//! - An error structure carrying the source position of the offending token
//! - Variants for the two fatal conditions: an unexpected token kind and a
//!   forbidden sentinel token
//! - Display formatting of the single human-readable diagnostic line

pub mod errors;
