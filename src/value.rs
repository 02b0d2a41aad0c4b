//! Cache Value Payload
//!
//! Stored payloads are opaque to the store except for the serial
//! counter, which needs a numeric reading of whatever is stored.

use bytes::Bytes;

use crate::error::CacheError;

/// Payload stored against a key.
///
/// The store never interprets a value except through [`Value::as_serial`],
/// which the serial counter uses to pick up a previously stored count.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Opaque binary payload
    Bytes(Bytes),
    /// Integer payload; canonical representation for serial counters
    Integer(i64),
    /// Floating-point payload; accepted by serial as a legacy encoding
    Float(f64),
}

impl Value {
    /// Numeric reading for the serial counter.
    ///
    /// Integers are taken as-is; floats are truncated toward zero
    /// (legacy encodings of counters written as floating point).
    /// Binary payloads have no serial reading.
    pub fn as_serial(&self) -> Option<i64> {
        match self {
            Value::Integer(n) => Some(*n),
            Value::Float(f) => Some(*f as i64),
            Value::Bytes(_) => None,
        }
    }
}

impl From<Bytes> for Value {
    fn from(b: Bytes) -> Self {
        Value::Bytes(b)
    }
}

impl From<Vec<u8>> for Value {
    fn from(v: Vec<u8>) -> Self {
        Value::Bytes(Bytes::from(v))
    }
}

impl From<&'static str> for Value {
    fn from(s: &'static str) -> Self {
        Value::Bytes(Bytes::from_static(s.as_bytes()))
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Bytes(Bytes::from(s))
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Integer(n)
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Float(f)
    }
}

impl TryFrom<Value> for i64 {
    type Error = CacheError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        value
            .as_serial()
            .ok_or_else(|| CacheError::InvalidData("value is not numeric".into()))
    }
}

impl TryFrom<Value> for Bytes {
    type Error = CacheError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Bytes(b) => Ok(b),
            _ => Err(CacheError::InvalidData("value is not binary".into())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serial_reading() {
        assert_eq!(Value::Integer(7).as_serial(), Some(7));
        assert_eq!(Value::Float(7.9).as_serial(), Some(7));
        assert_eq!(Value::Float(-7.9).as_serial(), Some(-7));
        assert_eq!(Value::from("7").as_serial(), None);
    }

    #[test]
    fn test_from_impls() {
        assert_eq!(Value::from("abc"), Value::Bytes(Bytes::from_static(b"abc")));
        assert_eq!(Value::from(5i64), Value::Integer(5));
        assert_eq!(Value::from(1.5f64), Value::Float(1.5));
    }

    #[test]
    fn test_typed_decode() {
        assert_eq!(i64::try_from(Value::Integer(3)), Ok(3));
        assert!(matches!(
            i64::try_from(Value::from("x")),
            Err(CacheError::InvalidData(_))
        ));
        assert_eq!(
            Bytes::try_from(Value::from("x")),
            Ok(Bytes::from_static(b"x"))
        );
        assert!(matches!(
            Bytes::try_from(Value::Integer(3)),
            Err(CacheError::InvalidData(_))
        ));
    }
}
