// Copyright (c) vexel.dev 2026
// This file is licensed under the MIT, see license.md file

mod field;
mod row;

pub use field::FieldDecoder;
pub use row::FieldValue;
