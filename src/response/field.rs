// Copyright (c) vexel.dev 2026
// This file is licensed under the MIT, see license.md file

use serde_json::{Map, Value as JsonValue};
use tracing::trace;

use crate::{
	error::{DecodeError, Result},
	response::row::FieldValue,
	wire::{DataType, FieldData, ScalarField, VectorField, scalar_field},
};

/// Decoder over one `FieldData` column of a query/search response.
///
/// Borrows the caller's message for its lifetime and holds no further
/// state. Every derived view is recomputed per call; callers that index
/// repeatedly into the same field should keep the result of [`rows`]
/// instead of calling [`value_at`] in a loop.
///
/// [`rows`]: FieldDecoder::rows
/// [`value_at`]: FieldDecoder::value_at
pub struct FieldDecoder<'a> {
	field: &'a FieldData,
}

impl<'a> FieldDecoder<'a> {
	pub fn new(field: &'a FieldData) -> Self {
		Self {
			field,
		}
	}

	pub fn field_name(&self) -> &str {
		&self.field.field_name
	}

	pub fn data_type(&self) -> DataType {
		self.field.data_type()
	}

	pub fn is_vector_field(&self) -> bool {
		matches!(self.data_type(), DataType::FloatVector | DataType::BinaryVector)
	}

	pub fn is_json_field(&self) -> bool {
		self.data_type() == DataType::Json
	}

	/// A JSON field flagged as holding schema-less, caller-defined
	/// key/value data rather than a declared column.
	pub fn is_dynamic_field(&self) -> bool {
		self.is_json_field() && self.field.is_dynamic
	}

	/// Declared dimension of a vector field.
	pub fn dim(&self) -> Result<usize> {
		if !self.is_vector_field() {
			return Err(DecodeError::NotAVectorField);
		}
		match self.field.vectors() {
			Some(vectors) => Ok(vectors.dim as usize),
			// Tagged as a vector but the payload is missing.
			None => Err(DecodeError::NotAVectorField),
		}
	}

	/// Number of rows carried by the field.
	pub fn row_count(&self) -> Result<usize> {
		let data_type = self.data_type();
		match data_type {
			DataType::FloatVector => {
				let dim = self.dim()?;
				let len = float_payload(self.field.vectors()).len();
				if dim == 0 || len % dim != 0 {
					return Err(DecodeError::SizeMismatch {
						data_type,
						len,
						dim,
					});
				}
				Ok(len / dim)
			}
			DataType::BinaryVector => {
				let dim = self.dim()?;
				let len = binary_payload(self.field.vectors()).len();
				if dim == 0 || dim % 8 != 0 || (len * 8) % dim != 0 {
					return Err(DecodeError::SizeMismatch {
						data_type,
						len,
						dim,
					});
				}
				Ok(len * 8 / dim)
			}
			DataType::Bool
			| DataType::Int8
			| DataType::Int16
			| DataType::Int32
			| DataType::Int64
			| DataType::Float
			| DataType::Double
			| DataType::String
			| DataType::VarChar
			| DataType::Json
			| DataType::Array => Ok(self.field.scalars().map_or(0, |scalars| scalar_len(scalars, data_type))),
			DataType::None => Err(DecodeError::UnsupportedType(data_type)),
		}
	}

	/// Fully unpacked per-row values, materialized fresh on every call.
	pub fn rows(&self) -> Result<Vec<FieldValue>> {
		let data_type = self.data_type();
		trace!(field = %self.field_name(), ?data_type, "decoding field rows");
		match data_type {
			DataType::FloatVector => {
				let dim = self.dim()?;
				let data = float_payload(self.field.vectors());
				if dim == 0 || data.len() % dim != 0 {
					return Err(DecodeError::SizeMismatch {
						data_type,
						len: data.len(),
						dim,
					});
				}
				Ok(data.chunks_exact(dim).map(|chunk| FieldValue::FloatVector(chunk.to_vec())).collect())
			}
			DataType::BinaryVector => {
				let dim = self.dim()?;
				let data = binary_payload(self.field.vectors());
				if dim == 0 || dim % 8 != 0 || (data.len() * 8) % dim != 0 {
					return Err(DecodeError::SizeMismatch {
						data_type,
						len: data.len(),
						dim,
					});
				}
				let bytes_per_vector = dim / 8;
				Ok(data.chunks_exact(bytes_per_vector)
					.map(|chunk| FieldValue::BinaryVector(chunk.to_vec()))
					.collect())
			}
			DataType::Array => {
				let Some(scalar_field::Data::ArrayData(array)) =
					self.field.scalars().and_then(|scalars| scalars.data.as_ref())
				else {
					return Ok(Vec::new());
				};
				let element_type = array.element_type();
				Ok(array.data
					.iter()
					.map(|element| FieldValue::Array(scalar_values(element, element_type)))
					.collect())
			}
			DataType::Bool
			| DataType::Int8
			| DataType::Int16
			| DataType::Int32
			| DataType::Int64
			| DataType::Float
			| DataType::Double
			| DataType::String
			| DataType::VarChar
			| DataType::Json => Ok(self
				.field
				.scalars()
				.map_or_else(Vec::new, |scalars| scalar_values(scalars, data_type))),
			DataType::None => Err(DecodeError::UnsupportedType(data_type)),
		}
	}

	/// Row at `index`, equivalent to `rows()?[index]`. O(n) per call
	/// since the whole sequence is rebuilt first.
	pub fn value_at(&self, index: usize) -> Result<FieldValue> {
		let mut rows = self.rows()?;
		let len = rows.len();
		if index >= len {
			return Err(DecodeError::IndexOutOfRange {
				index,
				len,
			});
		}
		Ok(rows.swap_remove(index))
	}

	/// String value under `key` in JSON row `index`. Non-string JSON
	/// values are stringified, mirroring the coercion the typed
	/// accessors below rely on; absent keys and JSON null yield `None`.
	pub fn get_as_string(&self, index: usize, key: &str) -> Result<Option<String>> {
		let object = self.json_object(index)?;
		Ok(match object.get(key) {
			None | Some(JsonValue::Null) => None,
			Some(JsonValue::String(text)) => Some(text.clone()),
			Some(other) => Some(other.to_string()),
		})
	}

	/// Integer value under `key` in JSON row `index`, parsed from its
	/// string rendition.
	pub fn get_as_int(&self, index: usize, key: &str) -> Result<Option<i64>> {
		match self.get_as_string(index, key)? {
			None => Ok(None),
			Some(text) => match text.parse::<i64>() {
				Ok(value) => Ok(Some(value)),
				Err(_) => Err(DecodeError::NumberParse {
					key: key.to_string(),
					text,
				}),
			},
		}
	}

	/// Boolean value under `key` in JSON row `index`. Parsing is
	/// deliberately lenient: any text other than a case-insensitive
	/// "true" yields `false`.
	pub fn get_as_bool(&self, index: usize, key: &str) -> Result<Option<bool>> {
		Ok(self.get_as_string(index, key)?.map(|text| text.eq_ignore_ascii_case("true")))
	}

	/// Floating-point value under `key` in JSON row `index`, parsed from
	/// its string rendition.
	pub fn get_as_double(&self, index: usize, key: &str) -> Result<Option<f64>> {
		match self.get_as_string(index, key)? {
			None => Ok(None),
			Some(text) => match text.parse::<f64>() {
				Ok(value) => Ok(Some(value)),
				Err(_) => Err(DecodeError::NumberParse {
					key: key.to_string(),
					text,
				}),
			},
		}
	}

	/// Raw JSON value under `key` in JSON row `index`. Absent keys yield
	/// `None`; an explicit JSON null is reported as `Some(Value::Null)`.
	pub fn get_raw(&self, index: usize, key: &str) -> Result<Option<JsonValue>> {
		let object = self.json_object(index)?;
		Ok(object.get(key).cloned())
	}

	fn json_object(&self, index: usize) -> Result<Map<String, JsonValue>> {
		if !self.is_json_field() {
			return Err(DecodeError::JsonOnlyOperation(self.data_type()));
		}
		match self.value_at(index)? {
			FieldValue::Json(bytes) => {
				serde_json::from_slice(&bytes).map_err(|source| DecodeError::MalformedJson {
					index,
					source,
				})
			}
			// Unreachable for a well-formed message: the Json tag
			// always decodes into FieldValue::Json rows.
			_ => Err(DecodeError::JsonOnlyOperation(self.data_type())),
		}
	}
}

fn float_payload(vectors: Option<&VectorField>) -> &[f32] {
	use crate::wire::vector_field::Data;
	match vectors.and_then(|v| v.data.as_ref()) {
		Some(Data::FloatVector(array)) => &array.data,
		_ => &[],
	}
}

fn binary_payload(vectors: Option<&VectorField>) -> &[u8] {
	use crate::wire::vector_field::Data;
	match vectors.and_then(|v| v.data.as_ref()) {
		Some(Data::BinaryVector(bytes)) => bytes,
		_ => &[],
	}
}

fn scalar_len(scalars: &ScalarField, data_type: DataType) -> usize {
	use scalar_field::Data;
	match (data_type, scalars.data.as_ref()) {
		(DataType::Bool, Some(Data::BoolData(array))) => array.data.len(),
		(DataType::Int8 | DataType::Int16 | DataType::Int32, Some(Data::IntData(array))) => array.data.len(),
		(DataType::Int64, Some(Data::LongData(array))) => array.data.len(),
		(DataType::Float, Some(Data::FloatData(array))) => array.data.len(),
		(DataType::Double, Some(Data::DoubleData(array))) => array.data.len(),
		(DataType::String | DataType::VarChar, Some(Data::StringData(array))) => array.data.len(),
		(DataType::Json, Some(Data::JsonData(array))) => array.data.len(),
		(DataType::Array, Some(Data::ArrayData(array))) => array.data.len(),
		_ => 0,
	}
}

/// Unpacks a flat scalar payload through its declared type. A tag with no
/// matching carrier yields an empty list, never an error; `row_count` and
/// `rows` gate the supported tags before this runs.
fn scalar_values(scalars: &ScalarField, data_type: DataType) -> Vec<FieldValue> {
	use scalar_field::Data;
	match (data_type, scalars.data.as_ref()) {
		(DataType::Bool, Some(Data::BoolData(array))) => {
			array.data.iter().copied().map(FieldValue::Bool).collect()
		}
		(DataType::Int8 | DataType::Int16 | DataType::Int32, Some(Data::IntData(array))) => {
			array.data.iter().copied().map(FieldValue::Int).collect()
		}
		(DataType::Int64, Some(Data::LongData(array))) => {
			array.data.iter().copied().map(FieldValue::Long).collect()
		}
		(DataType::Float, Some(Data::FloatData(array))) => {
			array.data.iter().copied().map(FieldValue::Float).collect()
		}
		(DataType::Double, Some(Data::DoubleData(array))) => {
			array.data.iter().copied().map(FieldValue::Double).collect()
		}
		(DataType::String | DataType::VarChar, Some(Data::StringData(array))) => {
			array.data.iter().cloned().map(FieldValue::Utf8).collect()
		}
		(DataType::Json, Some(Data::JsonData(array))) => {
			array.data.iter().cloned().map(FieldValue::Json).collect()
		}
		_ => Vec::new(),
	}
}
