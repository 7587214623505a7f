use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// SQL value carried between callers, filters and drivers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DbValue {
    /// SQL NULL
    Null,
    /// Boolean value
    Bool(bool),
    /// 64-bit signed integer (covers the integer column types)
    Int(i64),
    /// 64-bit floating point
    Float(f64),
    /// Text string (VARCHAR, TEXT, CHAR)
    Text(String),
    /// Binary data (BYTEA, BLOB, VARBINARY)
    Bytes(Vec<u8>),
    /// UUID
    Uuid(Uuid),
    /// Timestamp with timezone
    Timestamp(DateTime<Utc>),
}

impl DbValue {
    /// Check if value is NULL
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Get SQL type name for diagnostics
    pub fn sql_type(&self) -> &'static str {
        match self {
            Self::Null => "NULL",
            Self::Bool(_) => "BOOLEAN",
            Self::Int(_) => "BIGINT",
            Self::Float(_) => "DOUBLE PRECISION",
            Self::Text(_) => "TEXT",
            Self::Bytes(_) => "BYTEA",
            Self::Uuid(_) => "UUID",
            Self::Timestamp(_) => "TIMESTAMPTZ",
        }
    }

    /// Convert to a JSON value for logging and test fixtures
    pub fn to_json(&self) -> serde_json::Value {
        match self {
            Self::Null => serde_json::Value::Null,
            Self::Bool(b) => serde_json::json!(b),
            Self::Int(i) => serde_json::json!(i),
            Self::Float(f) => serde_json::json!(f),
            Self::Text(s) => serde_json::json!(s),
            Self::Bytes(b) => serde_json::json!(b),
            Self::Uuid(u) => serde_json::json!(u.to_string()),
            Self::Timestamp(ts) => serde_json::json!(ts.to_rfc3339()),
        }
    }
}

impl From<&str> for DbValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for DbValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<i64> for DbValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<bool> for DbValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

/// Direction of a command parameter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParamDirection {
    Input,
    Output,
    InputOutput,
}

/// A single command parameter
///
/// Parameters are plain data; the intercepted surface is the parameter
/// collection they are added to, not the parameter itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DbParameter {
    pub name: String,
    pub value: DbValue,
    pub direction: ParamDirection,
}

impl DbParameter {
    pub fn new(name: impl Into<String>, value: DbValue) -> Self {
        Self {
            name: name.into(),
            value,
            direction: ParamDirection::Input,
        }
    }

    pub fn with_direction(mut self, direction: ParamDirection) -> Self {
        self.direction = direction;
        self
    }
}
