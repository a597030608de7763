// Copyright (c) vexel.dev 2026
// This file is licensed under the MIT, see license.md file

//! Response unmarshalling for the Vexel vector database client.
//!
//! The transport layer hands back `wire::FieldData` messages, one per
//! column of a query/search response. [`FieldDecoder`] projects such a
//! message into native row values and offers keyed accessors into
//! JSON-typed rows.

mod error;
mod response;
pub mod wire;

pub use error::{DecodeError, Result};
pub use response::{FieldDecoder, FieldValue};
