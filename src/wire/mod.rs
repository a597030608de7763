// Copyright (c) vexel.dev 2026
// This file is licensed under the MIT, see license.md file

//! Field-data subset of the server's schema proto.
//!
//! These definitions are written by hand in the exact shape `prost-build`
//! emits, so the crate stays buildable without a protoc toolchain. Field
//! tags must stay in sync with the server's `schema.proto`.

/// Declared data type of a field, as carried on the wire.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum DataType {
	None = 0,
	Bool = 1,
	Int8 = 2,
	Int16 = 3,
	Int32 = 4,
	Int64 = 5,
	Float = 10,
	Double = 11,
	String = 20,
	VarChar = 21,
	Array = 22,
	Json = 23,
	BinaryVector = 100,
	FloatVector = 101,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct BoolArray {
	#[prost(bool, repeated, tag = "1")]
	pub data: Vec<bool>,
}

/// Carries int8, int16 and int32 values alike; narrower types are widened
/// to i32 on the wire.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct IntArray {
	#[prost(int32, repeated, tag = "1")]
	pub data: Vec<i32>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct LongArray {
	#[prost(int64, repeated, tag = "1")]
	pub data: Vec<i64>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct FloatArray {
	#[prost(float, repeated, tag = "1")]
	pub data: Vec<f32>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct DoubleArray {
	#[prost(double, repeated, tag = "1")]
	pub data: Vec<f64>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct StringArray {
	#[prost(string, repeated, tag = "1")]
	pub data: Vec<String>,
}

/// One serialized JSON document per row.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct JsonArray {
	#[prost(bytes = "vec", repeated, tag = "1")]
	pub data: Vec<Vec<u8>>,
}

/// One `ScalarField` per row, each holding the row's elements; all rows
/// share the declared `element_type`.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ArrayArray {
	#[prost(message, repeated, tag = "1")]
	pub data: Vec<ScalarField>,
	#[prost(enumeration = "DataType", tag = "2")]
	pub element_type: i32,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ScalarField {
	#[prost(oneof = "scalar_field::Data", tags = "1, 2, 3, 4, 5, 6, 8, 9")]
	pub data: Option<scalar_field::Data>,
}

pub mod scalar_field {
	#[derive(Clone, PartialEq, ::prost::Oneof)]
	pub enum Data {
		#[prost(message, tag = "1")]
		BoolData(super::BoolArray),
		#[prost(message, tag = "2")]
		IntData(super::IntArray),
		#[prost(message, tag = "3")]
		LongData(super::LongArray),
		#[prost(message, tag = "4")]
		FloatData(super::FloatArray),
		#[prost(message, tag = "5")]
		DoubleData(super::DoubleArray),
		#[prost(message, tag = "6")]
		StringData(super::StringArray),
		#[prost(message, tag = "8")]
		ArrayData(super::ArrayArray),
		#[prost(message, tag = "9")]
		JsonData(super::JsonArray),
	}
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct VectorField {
	#[prost(int64, tag = "1")]
	pub dim: i64,
	#[prost(oneof = "vector_field::Data", tags = "2, 3")]
	pub data: Option<vector_field::Data>,
}

pub mod vector_field {
	#[derive(Clone, PartialEq, ::prost::Oneof)]
	pub enum Data {
		/// Flat float buffer, `dim` values per row.
		#[prost(message, tag = "2")]
		FloatVector(super::FloatArray),
		/// Flat byte buffer, `dim / 8` bytes per row.
		#[prost(bytes, tag = "3")]
		BinaryVector(Vec<u8>),
	}
}

/// One column's worth of values for a batch of rows. Exactly one of the
/// scalars/vectors payloads is populated, selected by the type tag.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct FieldData {
	#[prost(enumeration = "DataType", tag = "1")]
	pub r#type: i32,
	#[prost(string, tag = "2")]
	pub field_name: String,
	#[prost(oneof = "field_data::Field", tags = "3, 4")]
	pub field: Option<field_data::Field>,
	#[prost(int64, tag = "5")]
	pub field_id: i64,
	#[prost(bool, tag = "6")]
	pub is_dynamic: bool,
}

pub mod field_data {
	#[derive(Clone, PartialEq, ::prost::Oneof)]
	pub enum Field {
		#[prost(message, tag = "3")]
		Scalars(super::ScalarField),
		#[prost(message, tag = "4")]
		Vectors(super::VectorField),
	}
}

impl FieldData {
	/// Decoded type tag. Unknown wire discriminants fall back to
	/// `DataType::None`, matching prost-build's generated accessor.
	pub fn data_type(&self) -> DataType {
		DataType::try_from(self.r#type).unwrap_or(DataType::None)
	}

	pub fn scalars(&self) -> Option<&ScalarField> {
		match &self.field {
			Some(field_data::Field::Scalars(scalars)) => Some(scalars),
			_ => None,
		}
	}

	pub fn vectors(&self) -> Option<&VectorField> {
		match &self.field {
			Some(field_data::Field::Vectors(vectors)) => Some(vectors),
			_ => None,
		}
	}
}
