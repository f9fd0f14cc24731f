use rust_decimal::Decimal;
use std::fmt::{self, Display};
use time::{Date, OffsetDateTime, PrimitiveDateTime, Time};
use uuid::Uuid;

/// Dynamically typed column value.
///
/// Every typed variant carries an `Option` so that a NULL can still remember
/// the type it belongs to. `Value::Null` is the untyped NULL a column holds
/// right after its schema is installed.
#[derive(Default, Debug, Clone)]
pub enum Value {
    #[default]
    Null,
    Boolean(Option<bool>),
    Int8(Option<i8>),
    Int16(Option<i16>),
    Int32(Option<i32>),
    Int64(Option<i64>),
    UInt8(Option<u8>),
    UInt16(Option<u16>),
    UInt32(Option<u32>),
    UInt64(Option<u64>),
    Float32(Option<f32>),
    Float64(Option<f64>),
    Decimal(Option<Decimal>, /* prec: */ u8, /* scale: */ u8),
    Varchar(Option<String>),
    Blob(Option<Box<[u8]>>),
    Date(Option<Date>),
    Time(Option<Time>),
    Timestamp(Option<PrimitiveDateTime>),
    TimestampWithTimezone(Option<OffsetDateTime>),
    Uuid(Option<Uuid>),
    Json(Option<serde_json::Value>),
}

impl Value {
    pub fn is_null(&self) -> bool {
        match self {
            Value::Null
            | Value::Boolean(None)
            | Value::Int8(None)
            | Value::Int16(None)
            | Value::Int32(None)
            | Value::Int64(None)
            | Value::UInt8(None)
            | Value::UInt16(None)
            | Value::UInt32(None)
            | Value::UInt64(None)
            | Value::Float32(None)
            | Value::Float64(None)
            | Value::Decimal(None, ..)
            | Value::Varchar(None)
            | Value::Blob(None)
            | Value::Date(None)
            | Value::Time(None)
            | Value::Timestamp(None)
            | Value::TimestampWithTimezone(None)
            | Value::Uuid(None)
            | Value::Json(None) => true,
            _ => false,
        }
    }

    pub fn same_type(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Decimal(.., l_prec, l_scale), Self::Decimal(.., r_prec, r_scale)) => {
                l_prec == r_prec && l_scale == r_scale
            }
            _ => core::mem::discriminant(self) == core::mem::discriminant(other),
        }
    }

    /// Maps a JSON node to the closest typed value. Arrays and objects stay JSON.
    pub fn from_json(value: serde_json::Value) -> Value {
        use serde_json::Value as Json;
        match value {
            Json::Null => Value::Null,
            Json::Bool(v) => Value::Boolean(Some(v)),
            Json::Number(v) => {
                if let Some(v) = v.as_i64() {
                    Value::Int64(Some(v))
                } else if let Some(v) = v.as_u64() {
                    Value::UInt64(Some(v))
                } else {
                    Value::Float64(v.as_f64())
                }
            }
            Json::String(v) => Value::Varchar(Some(v)),
            v @ (Json::Array(..) | Json::Object(..)) => Value::Json(Some(v)),
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Boolean(l), Self::Boolean(r)) => l == r,
            (Self::Int8(l), Self::Int8(r)) => l == r,
            (Self::Int16(l), Self::Int16(r)) => l == r,
            (Self::Int32(l), Self::Int32(r)) => l == r,
            (Self::Int64(l), Self::Int64(r)) => l == r,
            (Self::UInt8(l), Self::UInt8(r)) => l == r,
            (Self::UInt16(l), Self::UInt16(r)) => l == r,
            (Self::UInt32(l), Self::UInt32(r)) => l == r,
            (Self::UInt64(l), Self::UInt64(r)) => l == r,
            (Self::Float32(l), Self::Float32(r)) => l == r,
            (Self::Float64(l), Self::Float64(r)) => l == r,
            (Self::Decimal(l, l_prec, l_scale), Self::Decimal(r, r_prec, r_scale)) => {
                l == r && l_prec == r_prec && l_scale == r_scale
            }
            (Self::Varchar(l), Self::Varchar(r)) => l == r,
            (Self::Blob(l), Self::Blob(r)) => l == r,
            (Self::Date(l), Self::Date(r)) => l == r,
            (Self::Time(l), Self::Time(r)) => l == r,
            (Self::Timestamp(l), Self::Timestamp(r)) => l == r,
            (Self::TimestampWithTimezone(l), Self::TimestampWithTimezone(r)) => l == r,
            (Self::Uuid(l), Self::Uuid(r)) => l == r,
            (Self::Json(l), Self::Json(r)) => l == r,
            _ => core::mem::discriminant(self) == core::mem::discriminant(other),
        }
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_null() {
            return f.write_str("NULL");
        }
        match self {
            Value::Boolean(Some(v)) => write!(f, "{v}"),
            Value::Int8(Some(v)) => write!(f, "{v}"),
            Value::Int16(Some(v)) => write!(f, "{v}"),
            Value::Int32(Some(v)) => write!(f, "{v}"),
            Value::Int64(Some(v)) => write!(f, "{v}"),
            Value::UInt8(Some(v)) => write!(f, "{v}"),
            Value::UInt16(Some(v)) => write!(f, "{v}"),
            Value::UInt32(Some(v)) => write!(f, "{v}"),
            Value::UInt64(Some(v)) => write!(f, "{v}"),
            Value::Float32(Some(v)) => write!(f, "{v}"),
            Value::Float64(Some(v)) => write!(f, "{v}"),
            Value::Decimal(Some(v), ..) => write!(f, "{v}"),
            Value::Varchar(Some(v)) => write!(f, "'{v}'"),
            Value::Blob(Some(v)) => write!(f, "<{} bytes>", v.len()),
            Value::Date(Some(v)) => write!(f, "'{v}'"),
            Value::Time(Some(v)) => write!(f, "'{v}'"),
            Value::Timestamp(Some(v)) => write!(f, "'{v}'"),
            Value::TimestampWithTimezone(Some(v)) => write!(f, "'{v}'"),
            Value::Uuid(Some(v)) => write!(f, "'{v}'"),
            Value::Json(Some(v)) => write!(f, "{v}"),
            _ => f.write_str("NULL"),
        }
    }
}
