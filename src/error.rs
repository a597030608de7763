// Copyright (c) vexel.dev 2026
// This file is licensed under the MIT, see license.md file

use crate::wire::DataType;

pub type Result<T> = std::result::Result<T, DecodeError>;

/// Failure modes of response decoding. Every precondition violation is
/// reported at the call site; nothing is coerced or swallowed.
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
	#[error("not a vector field")]
	NotAVectorField,

	#[error("{data_type:?} payload of length {len} does not match dimension {dim}")]
	SizeMismatch {
		data_type: DataType,
		len: usize,
		dim: usize,
	},

	#[error("unsupported data type {0:?}")]
	UnsupportedType(DataType),

	#[error("only JSON fields support this operation, field type is {0:?}")]
	JsonOnlyOperation(DataType),

	#[error("index {index} out of range for {len} rows")]
	IndexOutOfRange {
		index: usize,
		len: usize,
	},

	#[error("row {index} does not hold a JSON object")]
	MalformedJson {
		index: usize,
		#[source]
		source: serde_json::Error,
	},

	#[error("value {text:?} under key {key:?} is not a valid number literal")]
	NumberParse {
		key: String,
		text: String,
	},
}
