use crate::{Error, Result, Value};
use anyhow::Context;
use rust_decimal::{Decimal, prelude::FromPrimitive, prelude::ToPrimitive};
use std::{any, borrow::Cow, fmt::Display};
use time::{Date, OffsetDateTime, PrimitiveDateTime, Time};
use uuid::Uuid;

/// Conversion between native Rust types and the dynamically typed [`Value`]
/// stored in columns, bound as query parameters and read back from records.
///
/// # Conversion contract
/// - `try_from_value` accepts the canonical variant for the type.
/// - Integer targets also accept the other integer variants, the conversion
///   fails when the number does not fit.
/// - A NULL is never converted into a non optional type, wrap the target in
///   `Option` to read nullable values.
///
/// # Examples
/// ```rust
/// use tabula_core::{AsValue, Value};
/// let v = 42i32.as_value();
/// assert!(matches!(v, Value::Int32(Some(42))));
/// let n: i64 = AsValue::try_from_value(v).unwrap();
/// assert_eq!(n, 42);
/// ```
pub trait AsValue {
    /// The typed NULL for this type.
    fn as_empty_value() -> Value;
    /// Owned [`Value`] representation.
    fn as_value(self) -> Value;
    /// Attempt to convert a dynamic [`Value`] into `Self`.
    fn try_from_value(value: Value) -> Result<Self>
    where
        Self: Sized;
}

impl<T: AsValue> From<T> for Value {
    fn from(value: T) -> Self {
        value.as_value()
    }
}

impl From<&'static str> for Value {
    fn from(value: &'static str) -> Self {
        Value::Varchar(Some(value.into()))
    }
}

fn convert_error<T>(value: &Value) -> Error {
    Error::msg(format!(
        "Cannot convert {value:?} to {}",
        any::type_name::<T>()
    ))
}

fn convert_integer<S, D>(value: S) -> Result<D>
where
    S: Display + Copy,
    D: TryFrom<S>,
{
    D::try_from(value).map_err(|_| {
        Error::msg(format!(
            "Value {value} is out of range for {}",
            any::type_name::<D>()
        ))
    })
}

fn convert_decimal<D: TryFrom<i128>>(value: Decimal) -> Result<D> {
    if !value.fract().is_zero() {
        return Err(Error::msg(format!(
            "Decimal {value} has a fractional part and cannot become {}",
            any::type_name::<D>()
        )));
    }
    value
        .to_i128()
        .with_context(|| format!("Decimal {value} is out of range"))
        .and_then(convert_integer)
}

macro_rules! impl_as_value {
    ($source:ty, $destination:path $(, $pat_rest:pat => $expr_rest:expr)* $(,)?) => {
        impl AsValue for $source {
            fn as_empty_value() -> Value {
                $destination(None)
            }
            fn as_value(self) -> Value {
                $destination(Some(self.into()))
            }
            #[allow(unreachable_patterns)]
            fn try_from_value(value: Value) -> Result<Self> {
                match value {
                    $destination(Some(v)) => Ok(v.into()),
                    $($pat_rest => $expr_rest,)*
                    _ => Err(convert_error::<Self>(&value)),
                }
            }
        }
    };
}

macro_rules! impl_as_integer {
    ($source:ty, $destination:path) => {
        impl_as_value!(
            $source,
            $destination,
            Value::Int8(Some(v)) => convert_integer(v),
            Value::Int16(Some(v)) => convert_integer(v),
            Value::Int32(Some(v)) => convert_integer(v),
            Value::Int64(Some(v)) => convert_integer(v),
            Value::UInt8(Some(v)) => convert_integer(v),
            Value::UInt16(Some(v)) => convert_integer(v),
            Value::UInt32(Some(v)) => convert_integer(v),
            Value::UInt64(Some(v)) => convert_integer(v),
            Value::Decimal(Some(v), ..) => convert_decimal(v),
        );
    };
}

impl_as_value!(
    bool,
    Value::Boolean,
    Value::Int8(Some(v)) => Ok(v != 0),
    Value::Int16(Some(v)) => Ok(v != 0),
    Value::Int32(Some(v)) => Ok(v != 0),
    Value::Int64(Some(v)) => Ok(v != 0),
    Value::UInt8(Some(v)) => Ok(v != 0),
    Value::UInt16(Some(v)) => Ok(v != 0),
    Value::UInt32(Some(v)) => Ok(v != 0),
    Value::UInt64(Some(v)) => Ok(v != 0),
);
impl_as_integer!(i8, Value::Int8);
impl_as_integer!(i16, Value::Int16);
impl_as_integer!(i32, Value::Int32);
impl_as_integer!(i64, Value::Int64);
impl_as_integer!(u8, Value::UInt8);
impl_as_integer!(u16, Value::UInt16);
impl_as_integer!(u32, Value::UInt32);
impl_as_integer!(u64, Value::UInt64);
impl_as_value!(
    f32,
    Value::Float32,
    Value::Float64(Some(v)) => Ok(v as _),
    Value::Decimal(Some(v), ..) => v
        .to_f32()
        .with_context(|| format!("Decimal {v} does not fit in a f32")),
);
impl_as_value!(
    f64,
    Value::Float64,
    Value::Float32(Some(v)) => Ok(v as _),
    Value::Int8(Some(v)) => Ok(v as _),
    Value::Int16(Some(v)) => Ok(v as _),
    Value::Int32(Some(v)) => Ok(v as _),
    Value::UInt8(Some(v)) => Ok(v as _),
    Value::UInt16(Some(v)) => Ok(v as _),
    Value::UInt32(Some(v)) => Ok(v as _),
    Value::Decimal(Some(v), ..) => v
        .to_f64()
        .with_context(|| format!("Decimal {v} does not fit in a f64")),
);
impl_as_value!(
    String,
    Value::Varchar,
    Value::Json(Some(serde_json::Value::String(v))) => Ok(v),
);
impl_as_value!(Box<[u8]>, Value::Blob);
impl_as_value!(
    Date,
    Value::Date,
    Value::Timestamp(Some(v)) => Ok(v.date()),
);
impl_as_value!(Time, Value::Time);
impl_as_value!(
    PrimitiveDateTime,
    Value::Timestamp,
    Value::TimestampWithTimezone(Some(v)) => Ok(PrimitiveDateTime::new(v.date(), v.time())),
);
impl_as_value!(
    OffsetDateTime,
    Value::TimestampWithTimezone,
    Value::Timestamp(Some(v)) => Ok(v.assume_utc()),
);
impl_as_value!(
    Uuid,
    Value::Uuid,
    Value::Varchar(Some(ref v)) => Uuid::parse_str(v)
        .with_context(|| format!("Cannot parse `{v}` as a uuid")),
);
impl_as_value!(
    serde_json::Value,
    Value::Json,
    Value::Varchar(Some(ref v)) => serde_json::from_str(v)
        .with_context(|| format!("Cannot parse `{v}` as json")),
    Value::Boolean(Some(v)) => Ok(v.into()),
    Value::Int32(Some(v)) => Ok(v.into()),
    Value::Int64(Some(v)) => Ok(v.into()),
    Value::UInt64(Some(v)) => Ok(v.into()),
    Value::Float64(Some(v)) => Ok(v.into()),
);

impl AsValue for Decimal {
    fn as_empty_value() -> Value {
        Value::Decimal(None, 0, 0)
    }
    fn as_value(self) -> Value {
        Value::Decimal(Some(self), 0, self.scale() as _)
    }
    fn try_from_value(value: Value) -> Result<Self> {
        match value {
            Value::Decimal(Some(v), ..) => Ok(v),
            Value::Int8(Some(v)) => Ok(v.into()),
            Value::Int16(Some(v)) => Ok(v.into()),
            Value::Int32(Some(v)) => Ok(v.into()),
            Value::Int64(Some(v)) => Ok(v.into()),
            Value::UInt8(Some(v)) => Ok(v.into()),
            Value::UInt16(Some(v)) => Ok(v.into()),
            Value::UInt32(Some(v)) => Ok(v.into()),
            Value::UInt64(Some(v)) => Ok(v.into()),
            Value::Float32(Some(v)) => Decimal::from_f32(v)
                .with_context(|| format!("Cannot represent {v} as a decimal")),
            Value::Float64(Some(v)) => Decimal::from_f64(v)
                .with_context(|| format!("Cannot represent {v} as a decimal")),
            _ => Err(convert_error::<Self>(&value)),
        }
    }
}

impl<'a> AsValue for Cow<'a, str> {
    fn as_empty_value() -> Value {
        Value::Varchar(None)
    }
    fn as_value(self) -> Value {
        Value::Varchar(Some(self.into()))
    }
    fn try_from_value(value: Value) -> Result<Self> {
        String::try_from_value(value).map(Into::into)
    }
}

impl<T: AsValue> AsValue for Option<T> {
    fn as_empty_value() -> Value {
        T::as_empty_value()
    }
    fn as_value(self) -> Value {
        match self {
            Some(v) => v.as_value(),
            None => T::as_empty_value(),
        }
    }
    fn try_from_value(value: Value) -> Result<Self> {
        Ok(if value.is_null() {
            None
        } else {
            Some(<T as AsValue>::try_from_value(value)?)
        })
    }
}

impl<T: AsValue> AsValue for Box<T> {
    fn as_empty_value() -> Value {
        T::as_empty_value()
    }
    fn as_value(self) -> Value {
        (*self).as_value()
    }
    fn try_from_value(value: Value) -> Result<Self> {
        Ok(Self::new(<T as AsValue>::try_from_value(value)?))
    }
}
