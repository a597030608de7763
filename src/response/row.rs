// Copyright (c) vexel.dev 2026
// This file is licensed under the MIT, see license.md file

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::wire::DataType;

/// One decoded row of a field, represented as a native Rust value.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum FieldValue {
	/// A boolean: true or false.
	Bool(bool),
	/// An int8, int16 or int32 row; narrower types arrive widened to i32.
	Int(i32),
	/// An int64 row.
	Long(i64),
	/// A 4-byte floating point.
	Float(f32),
	/// An 8-byte floating point.
	Double(f64),
	/// A UTF-8 encoded text row (varchar/string).
	Utf8(String),
	/// A serialized JSON document, left unparsed.
	Json(Vec<u8>),
	/// A float vector row of exactly `dim` components.
	FloatVector(Vec<f32>),
	/// A binary vector row of exactly `dim / 8` bytes.
	BinaryVector(Vec<u8>),
	/// A nested sequence of scalar rows.
	Array(Vec<FieldValue>),
}

impl FieldValue {
	pub fn bool(v: impl Into<bool>) -> Self {
		FieldValue::Bool(v.into())
	}

	pub fn int(v: impl Into<i32>) -> Self {
		FieldValue::Int(v.into())
	}

	pub fn long(v: impl Into<i64>) -> Self {
		FieldValue::Long(v.into())
	}

	pub fn float(v: impl Into<f32>) -> Self {
		FieldValue::Float(v.into())
	}

	pub fn double(v: impl Into<f64>) -> Self {
		FieldValue::Double(v.into())
	}

	pub fn utf8(v: impl Into<String>) -> Self {
		FieldValue::Utf8(v.into())
	}

	pub fn json(v: impl Into<Vec<u8>>) -> Self {
		FieldValue::Json(v.into())
	}

	pub fn float_vector(v: impl Into<Vec<f32>>) -> Self {
		FieldValue::FloatVector(v.into())
	}

	pub fn binary_vector(v: impl Into<Vec<u8>>) -> Self {
		FieldValue::BinaryVector(v.into())
	}

	pub fn array(v: impl Into<Vec<FieldValue>>) -> Self {
		FieldValue::Array(v.into())
	}

	/// The wire type tag this row decodes from. Widened integers report
	/// `Int32`, text reports `VarChar`.
	pub fn kind(&self) -> DataType {
		match self {
			FieldValue::Bool(_) => DataType::Bool,
			FieldValue::Int(_) => DataType::Int32,
			FieldValue::Long(_) => DataType::Int64,
			FieldValue::Float(_) => DataType::Float,
			FieldValue::Double(_) => DataType::Double,
			FieldValue::Utf8(_) => DataType::VarChar,
			FieldValue::Json(_) => DataType::Json,
			FieldValue::FloatVector(_) => DataType::FloatVector,
			FieldValue::BinaryVector(_) => DataType::BinaryVector,
			FieldValue::Array(_) => DataType::Array,
		}
	}
}

impl Display for FieldValue {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self {
			FieldValue::Bool(true) => f.write_str("true"),
			FieldValue::Bool(false) => f.write_str("false"),
			FieldValue::Int(value) => Display::fmt(value, f),
			FieldValue::Long(value) => Display::fmt(value, f),
			FieldValue::Float(value) => Display::fmt(value, f),
			FieldValue::Double(value) => Display::fmt(value, f),
			FieldValue::Utf8(value) => Display::fmt(value, f),
			FieldValue::Json(value) => Display::fmt(&String::from_utf8_lossy(value), f),
			FieldValue::FloatVector(values) => {
				f.write_str("[")?;
				for (i, value) in values.iter().enumerate() {
					if i > 0 {
						f.write_str(", ")?;
					}
					Display::fmt(value, f)?;
				}
				f.write_str("]")
			}
			FieldValue::BinaryVector(bytes) => {
				f.write_str("0x")?;
				for byte in bytes {
					write!(f, "{byte:02x}")?;
				}
				Ok(())
			}
			FieldValue::Array(values) => {
				f.write_str("[")?;
				for (i, value) in values.iter().enumerate() {
					if i > 0 {
						f.write_str(", ")?;
					}
					Display::fmt(value, f)?;
				}
				f.write_str("]")
			}
		}
	}
}
