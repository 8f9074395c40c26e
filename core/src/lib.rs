//! dirspec Core Types
//!
//! This crate provides the foundational types used throughout dirspec:
//! - The generic schema `Document` handed over by whatever reads the schema files
//! - Field keys and their accepted spellings
//! - Entity kinds (modifier, clause, clause-group, directive)
//! - The `MalformedSchema` error

mod document;
mod error;
mod field;
mod kind;

pub use document::*;
pub use error::*;
pub use field::*;
pub use kind::*;
